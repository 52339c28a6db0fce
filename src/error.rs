use std::fmt;
use std::path::PathBuf;

/// The main error type for the favicrop crate
#[derive(Debug)]
pub enum FavicropError {
    /// The input file does not exist
    MissingInput(PathBuf),

    /// Error occurred while reading or decoding an image
    ImageDecode(image::ImageError),

    /// Error occurred while writing or encoding an image
    ImageEncode(image::ImageError),

    /// Error occurred during I/O operations (file read/write)
    Io(std::io::Error),

    /// Crop fraction outside [0.0, 0.5), the rectangle would collapse or invert
    DegenerateCrop { fraction: f64 },
}

impl fmt::Display for FavicropError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FavicropError::MissingInput(path) => {
                write!(f, "Input file not found: {}", path.display())
            }
            FavicropError::ImageDecode(e) => write!(f, "Image decode error: {}", e),
            FavicropError::ImageEncode(e) => write!(f, "Image encode error: {}", e),
            FavicropError::Io(e) => write!(f, "I/O error: {}", e),
            FavicropError::DegenerateCrop { fraction } => {
                write!(f, "Crop fraction {} must be in [0.0, 0.5)", fraction)
            }
        }
    }
}

impl std::error::Error for FavicropError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FavicropError::ImageDecode(e) | FavicropError::ImageEncode(e) => Some(e),
            FavicropError::Io(e) => Some(e),
            FavicropError::MissingInput(_) | FavicropError::DegenerateCrop { .. } => None,
        }
    }
}

// From implementations for automatic conversion from common error types

impl From<image::ImageError> for FavicropError {
    fn from(err: image::ImageError) -> Self {
        // Distinguish between encode, I/O and decode errors based on the error kind
        match err {
            image::ImageError::Encoding(_) => FavicropError::ImageEncode(err),
            image::ImageError::IoError(e) => FavicropError::Io(e),
            _ => FavicropError::ImageDecode(err),
        }
    }
}

impl From<std::io::Error> for FavicropError {
    fn from(err: std::io::Error) -> Self {
        FavicropError::Io(err)
    }
}

// Convenience type alias for Results using FavicropError
pub type Result<T = ()> = std::result::Result<T, FavicropError>;
