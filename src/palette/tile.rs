//! Reference tiles with precomputed color signatures

use crate::color::ColorSignature;
use crate::io::error::Result;
use image::RgbaImage;

/// A reference image used as a mosaic building block
///
/// The mean-color signature is computed exactly once at construction and
/// reused for every lookup; tiles never change after load, so the cached
/// signature stays valid for the lifetime of the palette.
#[derive(Debug, Clone)]
pub struct Tile {
    pixels: RgbaImage,
    signature: ColorSignature,
}

impl Tile {
    /// Create a tile from a decoded pixel buffer, computing its signature
    ///
    /// # Errors
    ///
    /// Returns [`crate::MosaicError::EmptyRegion`] if the buffer has no
    /// pixels; a zero-sized tile could never fill a leaf.
    pub fn new(pixels: RgbaImage) -> Result<Self> {
        let signature = ColorSignature::of_image(&pixels)?;
        Ok(Self { pixels, signature })
    }

    /// The tile's precomputed mean-color signature
    pub const fn signature(&self) -> ColorSignature {
        self.signature
    }

    /// The tile's pixel buffer
    pub const fn pixels(&self) -> &RgbaImage {
        &self.pixels
    }

    /// The tile's dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.pixels.dimensions()
    }
}
