//! Teal - An unofficial Twitter desktop app
//!
//! This is the main library entry point that sets up and runs the Tauri
//! application: a single window wrapping the mobile Twitter web client,
//! plus the native menu, tray and shortcut plumbing around it.

mod app;
mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
mod menu;
mod platform;

use app::{handle_run_event, handle_window_event, register_plugins};

/// Label of the single application window
pub(crate) const MAIN_WINDOW_LABEL: &str = "main";

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    logging::init();
    tracing::info!("Starting Teal application");

    register_plugins(tauri::Builder::default())
        .setup(|app| {
            // Initialize state
            app::init_state(app)?;

            // Create the main window pointing at the web client
            app::create_main_window(app)?;

            // Platform-specific setup (menu bar, tray, global shortcut)
            platform::setup(app)?;

            Ok(())
        })
        .on_window_event(handle_window_event)
        .invoke_handler(tauri::generate_handler![
            // App
            commands::app::get_app_info,
            commands::app::open_website,
            commands::app::report_issue,
            // Settings
            commands::settings::get_zoom_factor,
            commands::settings::set_zoom_factor,
        ])
        .build(tauri::generate_context!())
        .expect("error while building tauri application")
        .run(handle_run_event);
}
