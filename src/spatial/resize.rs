//! Deterministic tile scaling for leaf fills

use image::RgbaImage;
use image::imageops::{self, FilterType};

/// Scale a tile buffer to an exact extent with nearest-neighbor sampling
///
/// Nearest-neighbor keeps the fill deterministic and introduces no colors
/// beyond those already present in the tile. Alpha is carried through
/// untouched. Extents of zero are rejected upstream before any leaf fill.
pub fn scale_to(tile: &RgbaImage, width: u32, height: u32) -> RgbaImage {
    if tile.dimensions() == (width, height) {
        return tile.clone();
    }
    imageops::resize(tile, width, height, FilterType::Nearest)
}
