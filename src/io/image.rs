//! PNG loading and mosaic export

use crate::io::error::{MosaicError, Result};
use image::{ImageFormat, RgbaImage};
use std::path::{Path, PathBuf};

/// Load a PNG file into an RGBA pixel buffer
///
/// # Errors
///
/// Returns [`MosaicError::ImageLoad`] with the offending path if the file
/// cannot be opened or decoded
pub fn load_image(path: &Path) -> Result<RgbaImage> {
    let decoded = image::open(path).map_err(|source| MosaicError::ImageLoad {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decoded.into_rgba8())
}

/// Save a composed mosaic as a PNG file
///
/// Creates the parent directory if it does not exist. The image is
/// encoded to a staging file beside the destination and renamed into
/// place only once fully written, so a failed export never leaves a
/// partial file at the final path to be mistaken for a finished mosaic.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written to the staging file
/// - The staged file cannot be renamed onto the final path
pub fn export_mosaic(mosaic: &RgbaImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    let staging_path = staging_path_for(output_path);

    if let Err(source) = mosaic.save_with_format(&staging_path, ImageFormat::Png) {
        let _ = std::fs::remove_file(&staging_path);
        return Err(MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        });
    }

    std::fs::rename(&staging_path, output_path).map_err(|e| {
        let _ = std::fs::remove_file(&staging_path);
        MosaicError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "rename staged output",
            source: e,
        }
    })
}

// Staged writes share the destination directory so the rename never
// crosses a filesystem boundary.
fn staging_path_for(output_path: &Path) -> PathBuf {
    let mut file_name = output_path.file_name().unwrap_or_default().to_os_string();
    file_name.push(".partial");
    output_path.with_file_name(file_name)
}
