//! Application state initialization
//!
//! This module handles loading the persisted settings and registering them
//! as managed state for commands and window handlers.

use crate::config::{Settings, SettingsState};
use crate::error::Result;
use tauri::{App, Manager};

/// Initialize all managed state for the application
///
/// A corrupt settings file is logged and replaced with defaults rather than
/// blocking startup.
pub fn init_state(app: &App) -> Result<()> {
    let path = Settings::settings_path()?;
    let settings = match Settings::load_from(&path) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("could not read settings, starting with defaults: {}", e);
            Settings::default()
        }
    };
    tracing::debug!("settings file: {}", path.display());

    app.manage(SettingsState::new(path, settings));

    Ok(())
}
