//! Application lifecycle event handling
//!
//! This module handles window events and application run events.

use crate::app::window::capture_window_state;
use crate::config::SettingsState;
use tauri::{AppHandle, Manager, RunEvent, WindowEvent};

/// Handle window events
pub fn handle_window_event(window: &tauri::Window, event: &WindowEvent) {
    // Capture geometry while the window is still around
    if let WindowEvent::CloseRequested { .. } = event {
        persist_window_state(window);
    }

    // On macOS, hide the window instead of closing to keep the app running.
    // The Dock icon, menu bar and global shortcut can all bring it back.
    #[cfg(target_os = "macos")]
    if let WindowEvent::CloseRequested { api, .. } = event {
        let _ = window.hide();
        api.prevent_close();
    }
}

/// Handle application run events
pub fn handle_run_event(app: &AppHandle, event: RunEvent) {
    // Handle dock click on macOS to reopen the window
    #[cfg(target_os = "macos")]
    if let RunEvent::Reopen { .. } = event {
        if let Some(window) = app.get_webview_window(crate::MAIN_WINDOW_LABEL) {
            let _ = window.show();
            let _ = window.set_focus();
        }
    }

    // Last chance to capture geometry before the process goes away
    if let RunEvent::ExitRequested { .. } = event {
        if let Some(window) = app.get_window(crate::MAIN_WINDOW_LABEL) {
            persist_window_state(&window);
        }
    }
}

fn persist_window_state(window: &tauri::Window) {
    let Some(state) = capture_window_state(window) else {
        return;
    };

    let app = window.app_handle();
    if let Some(settings) = app.try_state::<SettingsState>() {
        if let Err(e) = settings.set_window_state(state) {
            tracing::warn!("could not persist window geometry: {}", e);
        }
    }
}
