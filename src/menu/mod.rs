//! Application menu building blocks and menu event dispatch
//!
//! The macOS and Linux menu bars differ in layout but share the Go, View
//! and Help submenus plus the dispatch logic. Platform modules assemble
//! the final menu and register [`handle_menu_event`] for it.

pub mod help;

use crate::events::{self, Action, Destination};
use tauri::menu::{IsMenuItem, MenuEvent, MenuItem, PredefinedMenuItem, Submenu};
use tauri::{App, AppHandle, Manager, Wry};

pub const ID_NEW_TWEET: &str = "new-tweet";
pub const ID_LOG_OUT: &str = "log-out";
pub const ID_QUIT: &str = "quit";
pub const ID_ZOOM_RESET: &str = "zoom-reset";
pub const ID_ZOOM_IN: &str = "zoom-in";
pub const ID_ZOOM_OUT: &str = "zoom-out";
pub const ID_GO_HOME: &str = "go-home";
pub const ID_GO_NOTIFICATIONS: &str = "go-notifications";
pub const ID_GO_MESSAGES: &str = "go-messages";
pub const ID_GO_SEARCH: &str = "go-search";
pub const ID_GO_PROFILE: &str = "go-profile";
pub const ID_GO_LIKES: &str = "go-likes";
pub const ID_TOGGLE_FULLSCREEN: &str = "toggle-fullscreen";
pub const ID_WEBSITE: &str = "website";
pub const ID_REPORT_ISSUE: &str = "report-issue";

/// Go menu entries in display order
///
/// Only Search has an accelerator. The other destinations had multi-key
/// bindings in the mobile site itself (G then H and friends), which native
/// menus cannot express.
const GO_ITEMS: [(&str, &str, Option<&str>); 6] = [
    (ID_GO_HOME, "Home", None),
    (ID_GO_NOTIFICATIONS, "Notifications", None),
    (ID_GO_MESSAGES, "Messages", None),
    (ID_GO_SEARCH, "Search", Some("/")),
    (ID_GO_PROFILE, "Profile", None),
    (ID_GO_LIKES, "Likes", None),
];

/// Build the Go submenu shared by both platforms
pub fn go_submenu(app: &App) -> tauri::Result<Submenu<Wry>> {
    let mut items: Vec<MenuItem<Wry>> = Vec::with_capacity(GO_ITEMS.len());
    for (id, text, accelerator) in GO_ITEMS {
        items.push(MenuItem::with_id(app, id, text, true, accelerator)?);
    }

    let refs: Vec<&dyn IsMenuItem<Wry>> = items
        .iter()
        .map(|item| item as &dyn IsMenuItem<Wry>)
        .collect();
    Submenu::with_items(app, "Go", true, &refs)
}

/// Build the View submenu shared by both platforms
pub fn view_submenu(app: &App) -> tauri::Result<Submenu<Wry>> {
    let zoom_reset = MenuItem::with_id(
        app,
        ID_ZOOM_RESET,
        "Reset Text Size",
        true,
        Some("CmdOrCtrl+0"),
    )?;
    let zoom_in = MenuItem::with_id(
        app,
        ID_ZOOM_IN,
        "Increase Text Size",
        true,
        Some("CmdOrCtrl+="),
    )?;
    let zoom_out = MenuItem::with_id(
        app,
        ID_ZOOM_OUT,
        "Decrease Text Size",
        true,
        Some("CmdOrCtrl+-"),
    )?;

    Submenu::with_items(app, "View", true, &[&zoom_reset, &zoom_in, &zoom_out])
}

/// Build the Edit submenu used on Linux
///
/// On macOS the platform module builds a richer Edit menu with undo and
/// redo; GTK text inputs only get the clipboard trio.
pub fn edit_submenu(app: &App) -> tauri::Result<Submenu<Wry>> {
    let cut = PredefinedMenuItem::cut(app, None)?;
    let copy = PredefinedMenuItem::copy(app, None)?;
    let paste = PredefinedMenuItem::paste(app, None)?;

    Submenu::with_items(app, "Edit", true, &[&cut, &copy, &paste])
}

/// Map a menu item id to the action it forwards to the web client
///
/// Ids handled natively (quit, fullscreen, help links) are not actions and
/// map to `None`.
pub fn action_for_id(id: &str) -> Option<Action> {
    match id {
        ID_NEW_TWEET => Some(Action::NewTweet),
        ID_LOG_OUT => Some(Action::LogOut),
        ID_ZOOM_RESET => Some(Action::ZoomReset),
        ID_ZOOM_IN => Some(Action::ZoomIn),
        ID_ZOOM_OUT => Some(Action::ZoomOut),
        ID_GO_HOME => Some(Action::Go(Destination::Home)),
        ID_GO_NOTIFICATIONS => Some(Action::Go(Destination::Notifications)),
        ID_GO_MESSAGES => Some(Action::Go(Destination::Messages)),
        ID_GO_SEARCH => Some(Action::Go(Destination::Search)),
        ID_GO_PROFILE => Some(Action::Go(Destination::Profile)),
        ID_GO_LIKES => Some(Action::Go(Destination::Likes)),
        _ => None,
    }
}

/// Handle a menu event from the menu bar or the tray menu
pub fn handle_menu_event(app: &AppHandle, event: &MenuEvent) {
    let id = event.id.as_ref();
    tracing::debug!("menu event: {}", id);

    if let Some(action) = action_for_id(id) {
        events::send_action(app, action);
        return;
    }

    match id {
        ID_QUIT => app.exit(0),
        ID_TOGGLE_FULLSCREEN => toggle_fullscreen(app),
        ID_WEBSITE => help::open_website(app),
        ID_REPORT_ISSUE => help::open_report_issue(app),
        _ => {}
    }
}

fn toggle_fullscreen(app: &AppHandle) {
    if let Some(window) = app.get_webview_window(crate::MAIN_WINDOW_LABEL) {
        let fullscreen = window.is_fullscreen().unwrap_or(false);
        let _ = window.set_fullscreen(!fullscreen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forwarding_ids_map_to_their_actions() {
        assert_eq!(action_for_id(ID_NEW_TWEET), Some(Action::NewTweet));
        assert_eq!(action_for_id(ID_LOG_OUT), Some(Action::LogOut));
        assert_eq!(action_for_id(ID_ZOOM_RESET), Some(Action::ZoomReset));
        assert_eq!(action_for_id(ID_ZOOM_IN), Some(Action::ZoomIn));
        assert_eq!(action_for_id(ID_ZOOM_OUT), Some(Action::ZoomOut));
        assert_eq!(
            action_for_id(ID_GO_HOME),
            Some(Action::Go(Destination::Home))
        );
        assert_eq!(
            action_for_id(ID_GO_NOTIFICATIONS),
            Some(Action::Go(Destination::Notifications))
        );
        assert_eq!(
            action_for_id(ID_GO_MESSAGES),
            Some(Action::Go(Destination::Messages))
        );
        assert_eq!(
            action_for_id(ID_GO_SEARCH),
            Some(Action::Go(Destination::Search))
        );
        assert_eq!(
            action_for_id(ID_GO_PROFILE),
            Some(Action::Go(Destination::Profile))
        );
        assert_eq!(
            action_for_id(ID_GO_LIKES),
            Some(Action::Go(Destination::Likes))
        );
    }

    #[test]
    fn test_single_event_actions_reuse_the_menu_id_as_event_name() {
        for id in [
            ID_NEW_TWEET,
            ID_LOG_OUT,
            ID_ZOOM_RESET,
            ID_ZOOM_IN,
            ID_ZOOM_OUT,
        ] {
            let action = action_for_id(id).unwrap();
            assert_eq!(action.event_name(), id);
        }
    }

    #[test]
    fn test_natively_handled_ids_are_not_forwarded() {
        assert_eq!(action_for_id(ID_QUIT), None);
        assert_eq!(action_for_id(ID_TOGGLE_FULLSCREEN), None);
        assert_eq!(action_for_id(ID_WEBSITE), None);
        assert_eq!(action_for_id(ID_REPORT_ISSUE), None);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        assert_eq!(action_for_id("does-not-exist"), None);
        assert_eq!(action_for_id(""), None);
    }

    #[test]
    fn test_menu_ids_are_unique() {
        let ids = [
            ID_NEW_TWEET,
            ID_LOG_OUT,
            ID_QUIT,
            ID_ZOOM_RESET,
            ID_ZOOM_IN,
            ID_ZOOM_OUT,
            ID_GO_HOME,
            ID_GO_NOTIFICATIONS,
            ID_GO_MESSAGES,
            ID_GO_SEARCH,
            ID_GO_PROFILE,
            ID_GO_LIKES,
            ID_TOGGLE_FULLSCREEN,
            ID_WEBSITE,
            ID_REPORT_ISSUE,
        ];
        let unique: std::collections::HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn test_go_items_cover_every_destination() {
        let destinations: Vec<Destination> = GO_ITEMS
            .iter()
            .filter_map(|&(id, _, _)| match action_for_id(id) {
                Some(Action::Go(destination)) => Some(destination),
                _ => None,
            })
            .collect();
        assert_eq!(
            destinations,
            vec![
                Destination::Home,
                Destination::Notifications,
                Destination::Messages,
                Destination::Search,
                Destination::Profile,
                Destination::Likes,
            ]
        );
    }
}
