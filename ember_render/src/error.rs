//! Error types for the Ember rendering layer
//!
//! This module defines the error type shared by the core crate and the
//! backend implementations. All failures are fatal for the operation that
//! raised them and propagate to the caller; none are retried or swallowed.

use std::fmt;

/// Result type for Ember rendering operations
pub type Result<T> = std::result::Result<T, Error>;

/// Ember rendering errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Vertex attribute rejected by the layout (bad component count)
    UnsupportedAttribute(String),

    /// Native buffer/array allocation or upload failed
    ResourceAllocation(String),

    /// Shader compilation or program linking failed
    ShaderCompile(String),

    /// Initialization failed (window, context, subsystems)
    InitializationFailed(String),

    /// Backend-specific error (OpenGL, etc.)
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnsupportedAttribute(msg) => write!(f, "Unsupported attribute: {}", msg),
            Error::ResourceAllocation(msg) => write!(f, "Resource allocation failed: {}", msg),
            Error::ShaderCompile(msg) => write!(f, "Shader compilation failed: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
