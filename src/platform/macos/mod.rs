//! macOS-specific functionality
//!
//! This module contains macOS-specific code including:
//! - Native menu bar setup with the standard app menu roles
//! - Window and Help menus registered with NSApp

pub mod menu;

pub use menu::*;
