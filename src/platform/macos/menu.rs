//! macOS application menu setup
//!
//! This module assembles the native macOS menu bar: the app menu with the
//! standard roles, File, Edit, the shared Go and View submenus, a Window
//! menu registered with NSApp and Help.

use crate::error::Result;
use crate::menu::{self, help};
use tauri::{
    menu::{AboutMetadata, Menu, MenuItem, PredefinedMenuItem, Submenu},
    App, Manager,
};

/// Setup the macOS application menu bar
pub fn setup_menu(app: &App) -> Result<()> {
    // Teal menu
    let about = PredefinedMenuItem::about(app, Some("About Teal"), Some(about_metadata(app)))?;
    let separator_about = PredefinedMenuItem::separator(app)?;
    let log_out = MenuItem::with_id(app, menu::ID_LOG_OUT, "Log Out", true, None::<&str>)?;
    let separator_log_out = PredefinedMenuItem::separator(app)?;
    let services = PredefinedMenuItem::services(app, None)?;
    let separator_services = PredefinedMenuItem::separator(app)?;
    let hide = PredefinedMenuItem::hide(app, Some("Hide Teal"))?;
    let hide_others = PredefinedMenuItem::hide_others(app, Some("Hide Others"))?;
    let show_all = PredefinedMenuItem::show_all(app, Some("Show All"))?;
    let separator_quit = PredefinedMenuItem::separator(app)?;
    let quit = MenuItem::with_id(app, menu::ID_QUIT, "Quit Teal", true, Some("CmdOrCtrl+Q"))?;

    let app_menu = Submenu::with_items(
        app,
        "Teal",
        true,
        &[
            &about,
            &separator_about,
            &log_out,
            &separator_log_out,
            &services,
            &separator_services,
            &hide,
            &hide_others,
            &show_all,
            &separator_quit,
            &quit,
        ],
    )?;

    // File menu
    let new_tweet = MenuItem::with_id(app, menu::ID_NEW_TWEET, "New Tweet", true, Some("N"))?;

    let file_menu = Submenu::with_items(app, "File", true, &[&new_tweet])?;

    // Edit menu
    let undo = PredefinedMenuItem::undo(app, None)?;
    let redo = PredefinedMenuItem::redo(app, None)?;
    let edit_separator = PredefinedMenuItem::separator(app)?;
    let cut = PredefinedMenuItem::cut(app, None)?;
    let copy = PredefinedMenuItem::copy(app, None)?;
    let paste = PredefinedMenuItem::paste(app, None)?;
    let select_all = PredefinedMenuItem::select_all(app, None)?;

    let edit_menu = Submenu::with_items(
        app,
        "Edit",
        true,
        &[
            &undo,
            &redo,
            &edit_separator,
            &cut,
            &copy,
            &paste,
            &select_all,
        ],
    )?;

    // Go and View menus are shared with Linux
    let go_menu = menu::go_submenu(app)?;
    let view_menu = menu::view_submenu(app)?;

    // Window menu
    let minimize = PredefinedMenuItem::minimize(app, None)?;
    let close_window = PredefinedMenuItem::close_window(app, Some("Close"))?;
    let window_separator = PredefinedMenuItem::separator(app)?;
    let front = PredefinedMenuItem::bring_all_to_front(app, None)?;
    let toggle_fullscreen = MenuItem::with_id(
        app,
        menu::ID_TOGGLE_FULLSCREEN,
        "Toggle Full Screen",
        true,
        Some("Ctrl+Cmd+F"),
    )?;

    let window_menu = Submenu::with_items(
        app,
        "Window",
        true,
        &[
            &minimize,
            &close_window,
            &window_separator,
            &front,
            &toggle_fullscreen,
        ],
    )?;
    window_menu.set_as_windows_menu_for_nsapp()?;

    // Help menu
    let help_menu = help::help_submenu(app)?;
    help_menu.set_as_help_menu_for_nsapp()?;

    let menu_bar = Menu::with_items(
        app,
        &[
            &app_menu,
            &file_menu,
            &edit_menu,
            &go_menu,
            &view_menu,
            &window_menu,
            &help_menu,
        ],
    )?;

    app.set_menu(menu_bar)?;

    app.on_menu_event(|app, event| menu::handle_menu_event(app, &event));

    Ok(())
}

fn about_metadata(app: &App) -> AboutMetadata {
    let info = app.package_info();
    AboutMetadata {
        name: Some(info.name.clone()),
        version: Some(info.version.to_string()),
        ..Default::default()
    }
}
