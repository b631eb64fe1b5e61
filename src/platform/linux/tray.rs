//! Linux system tray setup
//!
//! This module handles setting up the system tray icon and menu.
//! Works with GTK-based desktop environments that support the
//! StatusNotifierItem/AppIndicator protocol.

use crate::error::Result;
use crate::events::{self, Action};
use crate::menu;
use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem},
    tray::{MouseButton, MouseButtonState, TrayIconBuilder, TrayIconEvent},
    App, AppHandle, Manager,
};

const ID_TRAY_SHOW: &str = "show";

/// Setup the system tray icon and menu
///
/// The tray mirrors the two actions worth reaching without the window in
/// front: composing a tweet and quitting.
pub fn setup_tray(app: &App) -> Result<()> {
    let show_item = MenuItem::with_id(app, ID_TRAY_SHOW, "Show Teal", true, None::<&str>)?;
    let new_tweet_item =
        MenuItem::with_id(app, menu::ID_NEW_TWEET, "New Tweet", true, None::<&str>)?;
    let separator = PredefinedMenuItem::separator(app)?;
    let quit_item = MenuItem::with_id(app, menu::ID_QUIT, "Quit Teal", true, None::<&str>)?;

    let tray_menu = Menu::with_items(app, &[&show_item, &new_tweet_item, &separator, &quit_item])?;

    let mut builder = TrayIconBuilder::new()
        .menu(&tray_menu)
        .show_menu_on_left_click(false)
        .on_tray_icon_event(|tray, event| {
            if let TrayIconEvent::Click {
                button: MouseButton::Left,
                button_state: MouseButtonState::Up,
                ..
            } = event
            {
                show_main_window(tray.app_handle());
            }
        })
        .on_menu_event(|app, event| match event.id.as_ref() {
            ID_TRAY_SHOW => show_main_window(app),
            menu::ID_NEW_TWEET => {
                show_main_window(app);
                events::send_action(app, Action::NewTweet);
            }
            menu::ID_QUIT => app.exit(0),
            _ => {}
        });

    if let Some(icon) = app.default_window_icon() {
        builder = builder.icon(icon.clone());
    } else {
        tracing::warn!("no window icon available, the tray entry will be blank");
    }

    let _tray = builder.build(app)?;

    Ok(())
}

fn show_main_window(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(crate::MAIN_WINDOW_LABEL) {
        let _ = window.show();
        let _ = window.unminimize();
        let _ = window.set_focus();
    }
}
