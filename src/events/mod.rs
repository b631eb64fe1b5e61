//! Actions forwarded to the web client
//!
//! The native shell implements no Twitter features of its own. Menu items,
//! the tray and the global shortcut all reduce to a small set of named
//! actions emitted to the web client running in the main window.

use tauri::{AppHandle, Emitter, Manager};

/// In-page destination of a `go` action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Notifications,
    Messages,
    Search,
    Profile,
    Likes,
}

impl Destination {
    /// Payload string the web client expects
    pub fn as_str(&self) -> &'static str {
        match self {
            Destination::Home => "home",
            Destination::Notifications => "notifications",
            Destination::Messages => "messages",
            Destination::Search => "search",
            Destination::Profile => "profile",
            Destination::Likes => "likes",
        }
    }
}

/// Action the web client knows how to perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ZoomReset,
    ZoomIn,
    ZoomOut,
    Go(Destination),
    NewTweet,
    LogOut,
}

impl Action {
    /// Event name the action is emitted under
    pub fn event_name(&self) -> &'static str {
        match self {
            Action::ZoomReset => "zoom-reset",
            Action::ZoomIn => "zoom-in",
            Action::ZoomOut => "zoom-out",
            Action::Go(_) => "go",
            Action::NewTweet => "new-tweet",
            Action::LogOut => "log-out",
        }
    }

    /// Payload carried by the event, if any
    pub fn payload(&self) -> Option<&'static str> {
        match self {
            Action::Go(destination) => Some(destination.as_str()),
            _ => None,
        }
    }
}

/// Send an action to the web client in the main window
///
/// A missing window or a failed emit is logged and otherwise ignored; menu
/// and shortcut callbacks have nowhere to surface an error.
pub fn send_action(app: &AppHandle, action: Action) {
    let Some(window) = app.get_webview_window(crate::MAIN_WINDOW_LABEL) else {
        tracing::warn!("main window is gone, dropping {}", action.event_name());
        return;
    };

    // The window may be sitting minimized; the action should land on a
    // visible page.
    #[cfg(target_os = "macos")]
    let _ = window.unminimize();

    let result = match action.payload() {
        Some(payload) => window.emit(action.event_name(), payload),
        None => window.emit(action.event_name(), ()),
    };
    if let Err(e) = result {
        tracing::warn!("failed to emit {}: {}", action.event_name(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_match_the_web_client_contract() {
        assert_eq!(Action::ZoomReset.event_name(), "zoom-reset");
        assert_eq!(Action::ZoomIn.event_name(), "zoom-in");
        assert_eq!(Action::ZoomOut.event_name(), "zoom-out");
        assert_eq!(Action::Go(Destination::Home).event_name(), "go");
        assert_eq!(Action::NewTweet.event_name(), "new-tweet");
        assert_eq!(Action::LogOut.event_name(), "log-out");
    }

    #[test]
    fn test_go_actions_carry_the_destination() {
        assert_eq!(Action::Go(Destination::Home).payload(), Some("home"));
        assert_eq!(
            Action::Go(Destination::Notifications).payload(),
            Some("notifications")
        );
        assert_eq!(Action::Go(Destination::Messages).payload(), Some("messages"));
        assert_eq!(Action::Go(Destination::Search).payload(), Some("search"));
        assert_eq!(Action::Go(Destination::Profile).payload(), Some("profile"));
        assert_eq!(Action::Go(Destination::Likes).payload(), Some("likes"));
    }

    #[test]
    fn test_only_go_actions_carry_a_payload() {
        assert_eq!(Action::ZoomReset.payload(), None);
        assert_eq!(Action::ZoomIn.payload(), None);
        assert_eq!(Action::ZoomOut.payload(), None);
        assert_eq!(Action::NewTweet.payload(), None);
        assert_eq!(Action::LogOut.payload(), None);
    }
}
