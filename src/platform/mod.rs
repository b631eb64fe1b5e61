//! Platform-specific functionality
//!
//! This module provides a unified interface for platform-specific setup.
//! The menu bar layout, tray and lifecycle quirks differ between macOS and
//! Linux, so each platform assembles its own menu from the shared submenus
//! in [`crate::menu`].
//!
//! ## Platform Support
//! - **macOS**: Native menu bar with app, Window and Help roles, hide-on-close lifecycle
//! - **Linux**: GTK menu bar, system tray, global shortcut

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "linux")]
pub mod linux;

use crate::error::{Result, TealError};
use crate::events::{self, Action};
use once_cell::sync::Lazy;
use std::process::Command;
use tauri::{App, Manager};
use tauri_plugin_global_shortcut::{GlobalShortcutExt, Shortcut, ShortcutState};

/// Keyboard shortcut that summons the compose box from anywhere
const COMPOSE_SHORTCUT: &str = "CommandOrControl+Shift+T";

/// Unified platform setup function
///
/// Call this from lib.rs during app setup to initialize the menu bar, the
/// tray and the global shortcut for the current platform.
pub fn setup(app: &App) -> Result<()> {
    #[cfg(target_os = "macos")]
    {
        macos::setup_menu(app)?;
    }

    #[cfg(target_os = "linux")]
    {
        // Menu bars need a working GTK session; keep running without one.
        if let Err(e) = linux::setup_menu(app) {
            tracing::warn!("could not attach the application menu: {}", e);
        }
        linux::setup_tray(app)?;
    }

    setup_global_shortcut(app)?;

    Ok(())
}

/// Register the global compose shortcut
///
/// Fires while the app is in the background, so the window is summoned
/// before the compose action goes out.
fn setup_global_shortcut(app: &App) -> Result<()> {
    let shortcut: Shortcut = COMPOSE_SHORTCUT.parse().map_err(|e| {
        TealError::platform(format!("invalid shortcut {COMPOSE_SHORTCUT}: {e}"))
    })?;

    app.global_shortcut()
        .on_shortcut(shortcut, |app, _shortcut, event| {
            if event.state() != ShortcutState::Pressed {
                return;
            }

            if let Some(window) = app.get_webview_window(crate::MAIN_WINDOW_LABEL) {
                let _ = window.show();
                let _ = window.unminimize();
                let _ = window.set_focus();
            }
            events::send_action(app, Action::NewTweet);
        })?;

    Ok(())
}

/// Cached kernel release string, reported in issue bodies
static OS_RELEASE: Lazy<String> = Lazy::new(detect_os_release);

fn detect_os_release() -> String {
    let output = match Command::new("uname").arg("-r").output() {
        Ok(output) if output.status.success() => output,
        _ => return "unknown".to_string(),
    };

    let release = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if release.is_empty() {
        "unknown".to_string()
    } else {
        release
    }
}

/// Kernel release as reported by `uname -r`
pub fn os_release() -> &'static str {
    OS_RELEASE.as_str()
}
