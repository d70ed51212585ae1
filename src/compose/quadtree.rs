//! Recursive quadrant subdivision and leaf filling
//!
//! The target is partitioned into quadrants until either extent of a
//! region drops below the leaf floor, at which point the region is filled
//! with the best-matching tile scaled to its exact extent. Each call
//! writes only to its own disjoint sub-rectangle of the output, so the
//! recursion carries no shared mutable state and the four quadrant calls
//! are mutually independent.

use crate::color::ColorSignature;
use crate::io::error::Result;
use crate::palette::Palette;
use crate::spatial::Region;
use crate::spatial::resize::scale_to;
use image::RgbaImage;
use image::imageops;

/// Compose one region of the target into the output buffer
///
/// Recursion depth is bounded by O(log min(width, height)): every split
/// strictly shrinks both extents until the leaf floor is reached.
///
/// # Errors
///
/// Returns an error if:
/// - A leaf region covers zero pixels ([`crate::MosaicError::EmptyRegion`])
/// - The region extends past the target bounds
/// - The palette is empty ([`crate::MosaicError::EmptyPalette`])
pub fn compose_region(
    target: &RgbaImage,
    region: Region,
    palette: &Palette,
    output: &mut RgbaImage,
    min_leaf_extent: u32,
) -> Result<()> {
    if region.is_leaf(min_leaf_extent) {
        return fill_leaf(target, region, palette, output);
    }

    for quadrant in region.quadrants() {
        compose_region(target, quadrant, palette, output, min_leaf_extent)?;
    }

    Ok(())
}

/// Fill a leaf region with the nearest-matching tile
fn fill_leaf(
    target: &RgbaImage,
    region: Region,
    palette: &Palette,
    output: &mut RgbaImage,
) -> Result<()> {
    let signature = ColorSignature::of_region(target, region)?;
    let tile = palette.nearest(signature)?;
    let patch = scale_to(tile.pixels(), region.width, region.height);

    imageops::replace(output, &patch, i64::from(region.x), i64::from(region.y));

    Ok(())
}
