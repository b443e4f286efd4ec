//! Error types for qrstamp operations

use thiserror::Error;

/// Result type alias using qrstamp's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for qrstamp operations
#[derive(Error, Debug)]
pub enum Error {
    /// The supplied string is not a syntactically valid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// A fill or background color string could not be parsed
    #[error("Invalid color '{name}': {reason}")]
    Color {
        /// The color string as configured
        name: String,
        /// Parser error text
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image encoding error
    #[error("Image error: {0}")]
    Image(String),
}

// Implement From conversions for common error types

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e.to_string())
    }
}
