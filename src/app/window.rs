//! Main window creation and geometry capture
//!
//! The main window hosts the mobile Twitter web client. Its geometry is
//! restored from settings on startup and captured back when it closes.

use crate::config::{SettingsState, WindowState};
use crate::error::{Result, TealError};
use tauri::{App, Manager, WebviewUrl, WebviewWindowBuilder};

/// Address of the web client the shell wraps
pub const START_URL: &str = "https://mobile.twitter.com";

const DEFAULT_WIDTH: f64 = 480.0;
const DEFAULT_HEIGHT: f64 = 800.0;
const MIN_WIDTH: f64 = 360.0;
const MIN_HEIGHT: f64 = 560.0;

/// Create the main window, restoring the last known geometry
pub fn create_main_window(app: &App) -> Result<()> {
    let url = tauri::Url::parse(START_URL)
        .map_err(|e| TealError::config(format!("invalid start URL {START_URL}: {e}")))?;

    let mut builder =
        WebviewWindowBuilder::new(app, crate::MAIN_WINDOW_LABEL, WebviewUrl::External(url))
            .title("Teal")
            .inner_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .min_inner_size(MIN_WIDTH, MIN_HEIGHT);

    let restored = match app.state::<SettingsState>().window_state() {
        Ok(state) => state,
        Err(e) => {
            tracing::warn!("could not read stored window geometry: {}", e);
            None
        }
    };

    if let Some(state) = restored {
        builder = builder
            .inner_size(
                (state.width as f64).max(MIN_WIDTH),
                (state.height as f64).max(MIN_HEIGHT),
            )
            .position(state.x as f64, state.y as f64);
    }

    let window = builder.build()?;

    if let Some(state) = restored {
        if state.maximized {
            let _ = window.maximize();
        }
    }

    tracing::info!("main window created at {}", START_URL);

    Ok(())
}

/// Capture the current window geometry in logical coordinates
///
/// Returns `None` while fullscreen; the reported size would be the screen,
/// not the window users expect back on the next launch.
pub fn capture_window_state(window: &tauri::Window) -> Option<WindowState> {
    if window.is_fullscreen().unwrap_or(false) {
        return None;
    }

    let position = window.outer_position().ok()?;
    let size = window.inner_size().ok()?;
    let scale = window
        .scale_factor()
        .ok()
        .filter(|value| value.is_finite() && *value > 0.0)
        .unwrap_or(1.0);

    Some(WindowState {
        x: (position.x as f64 / scale).round() as i32,
        y: (position.y as f64 / scale).round() as i32,
        width: (size.width as f64 / scale).round().max(MIN_WIDTH) as u32,
        height: (size.height as f64 / scale).round().max(MIN_HEIGHT) as u32,
        maximized: window.is_maximized().unwrap_or(false),
    })
}
