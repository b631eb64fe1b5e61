//! Custom error types for Teal
//!
//! This module provides a unified error type that can be used throughout
//! the application and is compatible with Tauri's command error handling.

use thiserror::Error;

/// Main error type for Teal operations
#[derive(Error, Debug)]
pub enum TealError {
    /// IO-related errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Errors surfaced by the Tauri runtime (windows, menus, events)
    #[error("Tauri error: {0}")]
    Tauri(#[from] tauri::Error),

    /// Global shortcut registration errors
    #[error("Shortcut error: {0}")]
    Shortcut(#[from] tauri_plugin_global_shortcut::Error),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Platform-specific errors
    #[error("Platform error: {0}")]
    Platform(String),

    /// Mutex lock errors
    #[error("Lock error: {0}")]
    Lock(String),

    /// General errors with a message
    #[error("{0}")]
    General(String),
}

impl TealError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a platform error
    pub fn platform(msg: impl Into<String>) -> Self {
        Self::Platform(msg.into())
    }

    /// Create a lock error
    pub fn lock(msg: impl Into<String>) -> Self {
        Self::Lock(msg.into())
    }
}

/// Convert TealError to String for Tauri command compatibility
impl From<TealError> for String {
    fn from(err: TealError) -> Self {
        err.to_string()
    }
}

/// Convert String errors to TealError
impl From<String> for TealError {
    fn from(s: String) -> Self {
        Self::General(s)
    }
}

/// Convert &str errors to TealError
impl From<&str> for TealError {
    fn from(s: &str) -> Self {
        Self::General(s.to_string())
    }
}

/// Result type alias using TealError
pub type Result<T> = std::result::Result<T, TealError>;

/// Serialize TealError for Tauri
impl serde::Serialize for TealError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}
