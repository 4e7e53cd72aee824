use std::string::FromUtf8Error;

use error_location::ErrorLocation;
use thiserror::Error;

/// Payload handling errors with source location tracking.
///
/// Malformed rows are not represented here: the parser skips them
/// silently and they only show up as a shorter series.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// Received payload bytes are not valid UTF-8 text.
    #[error("Payload not readable as text: {source} {location}")]
    NotText {
        /// Underlying UTF-8 decode error.
        #[source]
        source: FromUtf8Error,
        /// Source location where error occurred.
        location: ErrorLocation,
    },
}

/// Result type alias using [`PayloadError`].
pub type Result<T> = std::result::Result<T, PayloadError>;
