//! Linux application menu setup
//!
//! GTK renders the menu bar inside the window frame. The layout is flatter
//! than on macOS: quitting and logging out live under File, and there are
//! no app or Window menus.

use crate::error::Result;
use crate::menu::{self, help};
use tauri::{
    menu::{Menu, MenuItem, PredefinedMenuItem, Submenu},
    App,
};

/// Setup the Linux application menu bar
pub fn setup_menu(app: &App) -> Result<()> {
    // File menu
    let new_tweet = MenuItem::with_id(app, menu::ID_NEW_TWEET, "New Tweet", true, Some("N"))?;
    let file_separator = PredefinedMenuItem::separator(app)?;
    let log_out = MenuItem::with_id(app, menu::ID_LOG_OUT, "Log Out", true, None::<&str>)?;
    let quit = MenuItem::with_id(app, menu::ID_QUIT, "Quit", true, None::<&str>)?;

    let file_menu = Submenu::with_items(
        app,
        "File",
        true,
        &[&new_tweet, &file_separator, &log_out, &quit],
    )?;

    // Edit, Go, View and Help are shared with macOS
    let edit_menu = menu::edit_submenu(app)?;
    let go_menu = menu::go_submenu(app)?;
    let view_menu = menu::view_submenu(app)?;
    let help_menu = help::help_submenu(app)?;

    let menu_bar = Menu::with_items(
        app,
        &[&file_menu, &edit_menu, &go_menu, &view_menu, &help_menu],
    )?;

    app.set_menu(menu_bar)?;

    app.on_menu_event(|app, event| menu::handle_menu_event(app, &event));

    Ok(())
}
