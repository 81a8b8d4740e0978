//! Error types for color decoding.
//!
//! Parsing markup never fails. These errors only surface when a hex string
//! that was accepted by length has to be decoded into channel values, or
//! when a palette entry is registered.

use thiserror::Error;

/// Errors that can occur when decoding or registering a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Not a `#rrggbb` string.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}
