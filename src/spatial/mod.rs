//! Spatial data structures for recursive composition
//!
//! This module contains geometry-related functionality including:
//! - Region descriptions and quadrant subdivision
//! - Tile scaling for leaf fills

/// Region descriptions and quadrant subdivision
pub mod region;
/// Deterministic tile scaling
pub mod resize;

pub use region::Region;
