//! Error types for GLS
//!
//! Errors are mostly diagnostic: the wrappers report GL failures through the
//! logger (see `check.rs`) instead of returning them, so that release builds
//! stay branch-free. `Error` is what gets logged, and what the few opt-in
//! checked constructors return.

use std::fmt;

/// Result type for GLS operations
pub type Result<T> = std::result::Result<T, Error>;

/// GLS errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Backend-specific error (driver, binding layer, etc.)
    BackendError(String),

    /// The device failed to allocate a name for an object
    ResourceCreation {
        /// Object kind label (e.g. "buffer")
        kind: &'static str,
        /// GL error code reported right after the creation call (0 if none)
        code: u32,
    },

    /// Invalid resource (sentinel name, unknown attachment, etc.)
    InvalidResource(String),

    /// A wrapped GL call left an error flag set
    GlError {
        /// Text of the failing call
        call: String,
        /// GL error code
        code: u32,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::ResourceCreation { kind, code } => write!(
                f,
                "Failed to create {} object ({})",
                kind,
                crate::check::error_name(*code)
            ),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::GlError { call, code } => {
                write!(f, "GL error {} in {}", crate::check::error_name(*code), call)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
