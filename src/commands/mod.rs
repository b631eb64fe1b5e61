//! Tauri command handlers
//!
//! This module contains all the Tauri command handlers that are exposed
//! to the web client via IPC.

pub mod app;
pub mod settings;
