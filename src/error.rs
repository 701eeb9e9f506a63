//! Error type shared by every generator and binary.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned while generating or saving textures.
#[derive(Debug, Error)]
pub enum TextureError {
    /// A raster was requested with a zero dimension.
    #[error("invalid texture size {width}x{height} (both sides must be > 0)")]
    InvalidSize { width: u32, height: u32 },

    /// JPEG quality outside 1..=100.
    #[error("invalid JPEG quality {0} (expected 1-100)")]
    InvalidQuality(u8),

    /// Directory creation, file creation or directory walk failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The image codec failed to encode or decode a file.
    #[error("image codec error at {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// A configuration file could not be parsed.
    #[error("failed to parse config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },
}

impl TextureError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn encode(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Encode {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, TextureError>;
