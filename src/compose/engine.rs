//! Top-level mosaic composition entry point

use crate::compose::quadtree::compose_region;
use crate::io::configuration::MIN_LEAF_EXTENT;
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::palette::Palette;
use crate::spatial::Region;
use image::RgbaImage;

/// Parameters controlling composition behavior
#[derive(Debug, Clone, Copy)]
pub struct MosaicConfig {
    /// Extent below which a region is filled whole instead of subdivided
    pub min_leaf_extent: u32,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            min_leaf_extent: MIN_LEAF_EXTENT,
        }
    }
}

/// Orchestrates signature computation, tile matching, and compositing
///
/// Validates inputs, allocates the output buffer at the target's exact
/// dimensions, and runs the quadtree over the full-image region. The
/// engine never persists anything; writing the finished mosaic is the
/// caller's concern.
#[derive(Debug, Clone)]
pub struct MosaicEngine {
    config: MosaicConfig,
}

impl MosaicEngine {
    /// Create an engine with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::InvalidParameter`] if the leaf floor is zero;
    /// subdivision would never terminate in a fillable region.
    pub fn new(config: MosaicConfig) -> Result<Self> {
        if config.min_leaf_extent == 0 {
            return Err(invalid_parameter(
                "min_leaf_extent",
                &config.min_leaf_extent,
                &"leaf floor must be at least 1 pixel",
            ));
        }
        Ok(Self { config })
    }

    /// Compose a mosaic of the target from the palette's tiles
    ///
    /// The returned buffer always has exactly the target's dimensions.
    /// Any error aborts the whole composition; there is no partial output.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The palette has no tiles ([`MosaicError::EmptyPalette`])
    /// - The target has no pixels ([`MosaicError::EmptyRegion`])
    pub fn compose(&self, target: &RgbaImage, palette: &Palette) -> Result<RgbaImage> {
        if palette.is_empty() {
            return Err(MosaicError::EmptyPalette);
        }

        let (width, height) = target.dimensions();
        let mut output = RgbaImage::new(width, height);

        compose_region(
            target,
            Region::full(width, height),
            palette,
            &mut output,
            self.config.min_leaf_extent,
        )?;

        Ok(output)
    }
}

/// Compose a mosaic with the default configuration
///
/// # Errors
///
/// Returns an error if:
/// - The palette has no tiles ([`MosaicError::EmptyPalette`])
/// - The target has no pixels ([`MosaicError::EmptyRegion`])
pub fn compose(target: &RgbaImage, palette: &Palette) -> Result<RgbaImage> {
    MosaicEngine::new(MosaicConfig::default())?.compose(target, palette)
}
