//! Linux-specific functionality
//!
//! This module contains Linux-specific code including:
//! - GTK menu bar setup
//! - System tray icon and menu

pub mod menu;
pub mod tray;

pub use menu::*;
pub use tray::*;
