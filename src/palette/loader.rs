//! Palette construction from numbered tile files on disk
//!
//! Reference libraries follow a numeric-suffixed naming scheme
//! (`tile0.png`, `tile1.png`, ...). The loader scans one directory for
//! files matching the prefix, decodes them in numeric order, and computes
//! each tile's signature once up front.

use crate::io::error::{MosaicError, Result};
use crate::io::image::load_image;
use crate::palette::index::Palette;
use crate::palette::tile::Tile;
use std::path::{Path, PathBuf};

/// Build a palette from `<prefix><N>.png` files in a directory
///
/// Files whose stem is not the prefix followed by a decimal number are
/// ignored, as are non-PNG files, so a tile directory can hold unrelated
/// assets. A directory with no matching files yields an empty palette,
/// which composition later rejects with [`MosaicError::EmptyPalette`].
///
/// # Errors
///
/// Returns an error if:
/// - The directory cannot be read
/// - A matching tile file cannot be decoded
/// - A matching tile decodes to a zero-sized image
pub fn load_numbered_tiles(directory: &Path, prefix: &str) -> Result<Palette> {
    let mut numbered: Vec<(u64, PathBuf)> = Vec::new();

    let entries = std::fs::read_dir(directory).map_err(|e| MosaicError::FileSystem {
        path: directory.to_path_buf(),
        operation: "read tile directory",
        source: e,
    })?;

    for entry in entries {
        let path = entry
            .map_err(|e| MosaicError::FileSystem {
                path: directory.to_path_buf(),
                operation: "read tile directory entry",
                source: e,
            })?
            .path();

        if path.extension().and_then(|s| s.to_str()) != Some("png") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        let Some(number) = stem
            .strip_prefix(prefix)
            .and_then(|suffix| suffix.parse::<u64>().ok())
        else {
            continue;
        };

        numbered.push((number, path));
    }

    numbered.sort_unstable_by_key(|(number, _)| *number);

    let mut tiles = Vec::with_capacity(numbered.len());
    for (_, path) in numbered {
        let pixels = load_image(&path)?;
        tiles.push(Tile::new(pixels)?);
    }

    Ok(Palette::from_tiles(tiles))
}
