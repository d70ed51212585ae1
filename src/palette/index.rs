//! Palette storage and nearest-signature lookup

use crate::color::ColorSignature;
use crate::io::error::{MosaicError, Result};
use crate::palette::tile::Tile;
use image::RgbaImage;

/// The ordered set of reference tiles available to a composition run
///
/// Read-only after construction; recursive composition calls share it
/// freely. Duplicate signatures are permitted, with ties between tiles
/// resolved by enumeration order.
#[derive(Debug, Clone, Default)]
pub struct Palette {
    tiles: Vec<Tile>,
}

impl Palette {
    /// Create a palette from already-constructed tiles, preserving order
    pub const fn from_tiles(tiles: Vec<Tile>) -> Self {
        Self { tiles }
    }

    /// Create a palette from decoded pixel buffers, preserving order
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyRegion`] if any buffer has no pixels
    pub fn from_images(images: Vec<RgbaImage>) -> Result<Self> {
        let mut tiles = Vec::with_capacity(images.len());
        for pixels in images {
            tiles.push(Tile::new(pixels)?);
        }
        Ok(Self { tiles })
    }

    /// Number of tiles in the palette
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Whether the palette contains no tiles
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// All tiles in enumeration order
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Find the tile whose signature is closest to the query
    ///
    /// Linear scan seeded at positive infinity; a candidate replaces the
    /// current best only on a strictly smaller Euclidean distance, so an
    /// exact tie keeps the earlier-enumerated tile. O(P) per query, which
    /// is ample for palettes of tens of tiles.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::EmptyPalette`] if the palette has no tiles
    pub fn nearest(&self, query: ColorSignature) -> Result<&Tile> {
        let mut smallest_distance = f64::INFINITY;
        let mut best: Option<&Tile> = None;

        for tile in &self.tiles {
            let distance = tile.signature().distance(query);
            if distance < smallest_distance {
                smallest_distance = distance;
                best = Some(tile);
            }
        }

        best.ok_or(MosaicError::EmptyPalette)
    }
}
