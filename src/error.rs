//! Error types for pixedit
//!
//! Drawing and filling never fail: coordinates outside the canvas are read as
//! transparent black and writes to them are dropped. The errors below come
//! from buffer sizing, the image codec, file I/O and edit scripts.

use thiserror::Error;

/// Result type alias for pixedit operations
pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for file and I/O failures
pub const EXIT_FILE_ERROR: u8 = 40;
/// Exit code for decode/encode failures
pub const EXIT_PROCESSING_ERROR: u8 = 41;
/// Exit code for bad arguments or a malformed edit script
pub const EXIT_USAGE_ERROR: u8 = 2;

#[derive(Error, Debug)]
pub enum Error {
    /// Width or height is negative, or the pixel count overflows
    #[error("invalid buffer dimensions {width}x{height}")]
    InvalidDimensions { width: i64, height: i64 },

    /// Raw RGBA data does not match the stated dimensions
    #[error("pixel data length {len} does not match {width}x{height} RGBA")]
    DataLength { width: u32, height: u32, len: usize },

    /// The codec could not read the input image
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    /// The codec could not write the output image
    #[error("failed to encode image: {0}")]
    Encode(#[source] image::ImageError),

    /// No known image format matches a path or byte stream
    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    /// Reading or writing a file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An edit script could not be parsed
    #[error("invalid edit script: {0}")]
    Script(#[from] serde_json::Error),
}

impl Error {
    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Io(_) => EXIT_FILE_ERROR,
            Self::Decode(_) | Self::Encode(_) | Self::UnsupportedFormat(_) => {
                EXIT_PROCESSING_ERROR
            },
            Self::InvalidDimensions { .. } | Self::DataLength { .. } | Self::Script(_) => {
                EXIT_USAGE_ERROR
            },
        }
    }
}
