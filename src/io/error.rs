//! Error types for mosaic composition and boundary I/O

use std::fmt;
use std::path::PathBuf;

/// Main error type for all composition operations
#[derive(Debug)]
pub enum MosaicError {
    /// A region with zero pixels was passed to signature computation
    ///
    /// Averaging an empty region would divide by zero; the engine surfaces
    /// it as an error instead of producing NaN or a default color.
    EmptyRegion {
        /// Width of the offending region
        width: u32,
        /// Height of the offending region
        height: u32,
    },

    /// A region extends past the bounds of the image it views
    RegionOutOfBounds {
        /// Region offset and extent as (x, y, width, height)
        region: (u32, u32, u32, u32),
        /// Dimensions of the viewed image (width, height)
        image_dimensions: (u32, u32),
    },

    /// The palette contains no tiles
    ///
    /// Composition cannot proceed without at least one reference tile.
    EmptyPalette,

    /// Composition parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to load an image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Failed to save a composed mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image encoding error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for MosaicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyRegion { width, height } => {
                write!(f, "Cannot average a {width}x{height} region with no pixels")
            }
            Self::RegionOutOfBounds {
                region,
                image_dimensions,
            } => {
                write!(
                    f,
                    "Region {}x{} at ({}, {}) exceeds image bounds {}x{}",
                    region.2, region.3, region.0, region.1, image_dimensions.0, image_dimensions.1
                )
            }
            Self::EmptyPalette => {
                write!(f, "Palette contains no tiles")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MosaicError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for composition results
pub type Result<T> = std::result::Result<T, MosaicError>;

impl From<image::ImageError> for MosaicError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for MosaicError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MosaicError {
    MosaicError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_region_display() {
        let error = MosaicError::EmptyRegion {
            width: 0,
            height: 12,
        };
        assert_eq!(
            error.to_string(),
            "Cannot average a 0x12 region with no pixels"
        );
    }

    #[test]
    fn test_io_error_converts_with_placeholder_path() {
        let error = MosaicError::from(std::io::Error::other("interrupted"));
        match error {
            MosaicError::FileSystem {
                path, operation, ..
            } => {
                assert_eq!(path, PathBuf::from("<unknown>"));
                assert_eq!(operation, "unknown");
            }
            other => unreachable!("io::Error must convert to FileSystem, got {other:?}"),
        }
    }

    #[test]
    fn test_filesystem_error_preserves_source() {
        let error = MosaicError::FileSystem {
            path: PathBuf::from("tiles"),
            operation: "read directory",
            source: std::io::Error::other("denied"),
        };
        match std::error::Error::source(&error) {
            Some(source) => assert_eq!(source.to_string(), "denied"),
            None => unreachable!("FileSystem errors must expose their source"),
        }
    }
}
