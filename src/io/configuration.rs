//! Composition constants and runtime configuration defaults

/// Extent below which a region is filled whole instead of subdivided
///
/// Applies to either axis independently: a region stops subdividing as
/// soon as one extent drops below the floor.
pub const MIN_LEAF_EXTENT: u32 = 10;

/// Default filename prefix for numbered tile libraries
pub const DEFAULT_TILE_PREFIX: &str = "tile";

// Output settings
/// Suffix added to output filenames
pub const OUTPUT_SUFFIX: &str = "_mosaic";
