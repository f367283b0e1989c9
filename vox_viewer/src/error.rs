//! Error types for the VoxView viewer
//!
//! This module defines the error types used throughout the viewer,
//! including scene loading, shader setup, and initialization.

use std::fmt;

/// Result type for VoxView operations
pub type Result<T> = std::result::Result<T, Error>;

/// VoxView viewer errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Scene file missing or unopenable
    FileUnreadable(String),

    /// A scene file line violates the 7-float-CSV contract.
    /// Carries the 1-based line number and a reason.
    MalformedLine { line: usize, reason: String },

    /// Shader compilation failed (fatal at startup)
    ShaderCompileFailed(String),

    /// Shader program linking failed (fatal at startup)
    ShaderLinkFailed(String),

    /// Initialization failed (engine, renderer, configuration)
    InitializationFailed(String),

    /// Backend-specific error (graphics backend, poisoned lock, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileUnreadable(msg) => write!(f, "File unreadable: {}", msg),
            Error::MalformedLine { line, reason } => {
                write!(f, "Malformed line {}: {}", line, reason)
            }
            Error::ShaderCompileFailed(msg) => write!(f, "Shader compilation failed: {}", msg),
            Error::ShaderLinkFailed(msg) => write!(f, "Shader linking failed: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
