//! Error types for the kitchen scene
//!
//! Every failure in this crate is recoverable: callers log and carry on.
//! The `Result` forms exist so that internal steps can use `?`; the
//! scene-facing operations collapse them into booleans or `Option`s.

use std::fmt;

/// Result type for kitchen scene operations
pub type Result<T> = std::result::Result<T, Error>;

/// Kitchen scene errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Backend-specific failure reported by a device collaborator
    BackendError(String),

    /// Invalid resource (unknown handle, unreadable file, etc.)
    InvalidResource(String),

    /// The image bytes could not be decoded
    ImageDecode(String),

    /// Decoded image has a channel count other than 3 or 4
    UnsupportedChannelCount(u8),

    /// Every texture slot is already taken
    TextureSlotsExhausted(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::ImageDecode(msg) => write!(f, "Image decode failed: {}", msg),
            Error::UnsupportedChannelCount(channels) => {
                write!(f, "Not implemented to handle image with {} channels", channels)
            }
            Error::TextureSlotsExhausted(capacity) => {
                write!(f, "All {} texture slots are in use", capacity)
            }
        }
    }
}

impl std::error::Error for Error {}

impl From<image::ImageError> for Error {
    fn from(err: image::ImageError) -> Self {
        Error::ImageDecode(err.to_string())
    }
}

/// Log an error at ERROR level and evaluate to it
///
/// ```no_run
/// # use kitchen_scene::{scene_err, kitchen::Error};
/// let err = scene_err!("kitchen::TextureRegistry", Error::TextureSlotsExhausted(16));
/// ```
#[macro_export]
macro_rules! scene_err {
    ($source:expr, $err:expr) => {{
        let err = $err;
        $crate::scene_error!($source, "{}", err);
        err
    }};
}

/// Log an error at ERROR level and return it from the enclosing function
#[macro_export]
macro_rules! scene_bail {
    ($source:expr, $err:expr) => {
        return Err($crate::scene_err!($source, $err))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
