//! Error types for the render-target layer
//!
//! This module defines the error types returned by framebuffer and
//! attachable-resource creation. Programmer errors (precondition
//! violations) are not represented here; they go through
//! `glrt_precondition!` instead.

use std::fmt;

/// Result type for render-target operations
pub type Result<T> = std::result::Result<T, Error>;

/// Render-target errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed descriptor (e.g. partial resolve texture specification)
    ArgumentInvalid(String),

    /// Requested configuration has no native counterpart on this driver
    Unsupported(String),

    /// Recognized but unsupported path (non-2D render buffer, depth readback)
    Unimplemented(String),

    /// Native validation failure, carrying the driver status name
    RuntimeError(String),

    /// `initialize()` called on an already initialized framebuffer
    AlreadyInitialized,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::ArgumentInvalid(msg) => write!(f, "Invalid argument: {}", msg),
            Error::Unsupported(msg) => write!(f, "Unsupported: {}", msg),
            Error::Unimplemented(msg) => write!(f, "Not implemented: {}", msg),
            Error::RuntimeError(msg) => write!(f, "Runtime error: {}", msg),
            Error::AlreadyInitialized => write!(f, "Framebuffer already initialized"),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR message and return `Err(Error::$variant(message))`
///
/// # Example
///
/// ```ignore
/// glrt_bail!("glrt::TextureTarget", Unsupported, "invalid usage!");
/// ```
#[macro_export]
macro_rules! glrt_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::glrt_error!($source, "{}", message);
        return Err($crate::glrt::Error::$variant(message));
    }};
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
