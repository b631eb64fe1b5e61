//! Persisted application settings
//!
//! Settings are stored as JSON in the platform configuration directory.
//! They cover the text zoom factor applied by the web client and the last
//! known geometry of the main window.

use crate::error::{Result, TealError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Smallest zoom factor the web client accepts
pub const ZOOM_MIN: f64 = 0.25;
/// Largest zoom factor the web client accepts
pub const ZOOM_MAX: f64 = 5.0;

fn default_zoom_factor() -> f64 {
    1.0
}

/// Last known geometry of the main window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindowState {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub maximized: bool,
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Text zoom factor applied by the web client
    #[serde(default = "default_zoom_factor")]
    pub zoom_factor: f64,
    /// Window geometry captured when the window was last closed
    #[serde(default)]
    pub window: Option<WindowState>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zoom_factor: default_zoom_factor(),
            window: None,
        }
    }
}

impl Settings {
    /// Load settings from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let settings: Settings = serde_json::from_str(&content)?;
            Ok(settings)
        } else {
            // Return defaults if the file doesn't exist yet
            Ok(Settings::default())
        }
    }

    /// Save settings to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Create parent directories if needed
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the settings file path
    pub fn settings_path() -> Result<PathBuf> {
        let proj_dirs = ProjectDirs::from("com", "tealapp", "teal")
            .ok_or_else(|| TealError::config("Could not determine the settings directory"))?;
        Ok(proj_dirs.config_dir().join("settings.json"))
    }
}

/// Settings shared between commands, menu handlers and window handlers
///
/// Mutations are written back to disk immediately so a crash never loses
/// more than the change in flight.
pub struct SettingsState {
    path: PathBuf,
    settings: Mutex<Settings>,
}

impl SettingsState {
    pub fn new(path: PathBuf, settings: Settings) -> Self {
        Self {
            path,
            settings: Mutex::new(settings),
        }
    }

    /// Current zoom factor
    pub fn zoom_factor(&self) -> Result<f64> {
        Ok(self.lock()?.zoom_factor)
    }

    /// Validate, store and persist a new zoom factor
    pub fn set_zoom_factor(&self, factor: f64) -> Result<f64> {
        if !factor.is_finite() || !(ZOOM_MIN..=ZOOM_MAX).contains(&factor) {
            return Err(TealError::validation(format!(
                "Zoom factor {factor} must be between {ZOOM_MIN} and {ZOOM_MAX}"
            )));
        }

        let mut settings = self.lock()?;
        settings.zoom_factor = factor;
        settings.save_to(&self.path)?;
        Ok(factor)
    }

    /// Window geometry captured when the window was last closed
    pub fn window_state(&self) -> Result<Option<WindowState>> {
        Ok(self.lock()?.window)
    }

    /// Store and persist the current window geometry
    pub fn set_window_state(&self, window: WindowState) -> Result<()> {
        let mut settings = self.lock()?;
        settings.window = Some(window);
        settings.save_to(&self.path)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Settings>> {
        self.settings
            .lock()
            .map_err(|e| TealError::lock(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.zoom_factor, 1.0);
        assert!(settings.window.is_none());
    }

    #[test]
    fn test_settings_serialization() {
        let settings = Settings {
            zoom_factor: 1.5,
            window: Some(WindowState {
                x: 40,
                y: 60,
                width: 480,
                height: 800,
                maximized: false,
            }),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.zoom_factor, settings.zoom_factor);
        assert_eq!(parsed.window, settings.window);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let parsed: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed.zoom_factor, 1.0);
        assert!(parsed.window.is_none());
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings.zoom_factor, 1.0);
    }

    #[test]
    fn test_load_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(Settings::load_from(&path).is_err());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = Settings {
            zoom_factor: 2.0,
            window: Some(WindowState {
                x: -10,
                y: 24,
                width: 360,
                height: 560,
                maximized: true,
            }),
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.zoom_factor, 2.0);
        assert_eq!(loaded.window, settings.window);
    }

    #[test]
    fn test_set_zoom_factor_rejects_out_of_range_values() {
        let dir = tempfile::tempdir().unwrap();
        let state = SettingsState::new(dir.path().join("settings.json"), Settings::default());

        assert!(state.set_zoom_factor(0.24).is_err());
        assert!(state.set_zoom_factor(5.1).is_err());
        assert!(state.set_zoom_factor(f64::NAN).is_err());
        assert_eq!(state.zoom_factor().unwrap(), 1.0);
    }

    #[test]
    fn test_set_zoom_factor_accepts_boundary_values() {
        let dir = tempfile::tempdir().unwrap();
        let state = SettingsState::new(dir.path().join("settings.json"), Settings::default());

        assert_eq!(state.set_zoom_factor(ZOOM_MIN).unwrap(), ZOOM_MIN);
        assert_eq!(state.set_zoom_factor(ZOOM_MAX).unwrap(), ZOOM_MAX);
        assert_eq!(state.zoom_factor().unwrap(), ZOOM_MAX);
    }

    #[test]
    fn test_set_window_state_persists_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let state = SettingsState::new(path.clone(), Settings::default());

        let window = WindowState {
            x: 100,
            y: 200,
            width: 500,
            height: 900,
            maximized: false,
        };
        state.set_window_state(window).unwrap();

        let loaded = Settings::load_from(&path).unwrap();
        assert_eq!(loaded.window, Some(window));
    }
}
