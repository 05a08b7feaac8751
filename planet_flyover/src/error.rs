//! Error types for Planet Flyover
//!
//! The orbital camera core never fails; everything here belongs to the
//! surrounding layers (configuration, scene building, asset loading and the
//! renderer seam).

use std::fmt;

/// Result type for Planet Flyover operations
pub type Result<T> = std::result::Result<T, Error>;

/// Planet Flyover errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Configuration value out of range or unparsable
    InvalidConfig(String),

    /// An asset could not be read (missing file, empty payload, ...)
    AssetLoadFailed(String),

    /// Invalid resource (unknown key, malformed mesh, ...)
    InvalidResource(String),

    /// Initialization failed (window, renderer, scene)
    InitializationFailed(String),

    /// Renderer-side failure reported through the Renderer trait
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(msg) => write!(f, "Invalid config: {}", msg),
            Error::AssetLoadFailed(msg) => write!(f, "Asset load failed: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR entry and build the matching [`Error`] variant.
///
/// ```ignore
/// let err = flyover_err!("planet::Config", InvalidConfig, "bad radius {}", r);
/// ```
#[macro_export]
macro_rules! flyover_err {
    ($source:expr, $variant:ident, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::flyover_error!($source, "{}", message);
        $crate::planet::Error::$variant(message)
    }};
}

/// Log an ERROR entry and return early with the matching [`Error`] variant.
#[macro_export]
macro_rules! flyover_bail {
    ($source:expr, $variant:ident, $($arg:tt)*) => {
        return Err($crate::flyover_err!($source, $variant, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
