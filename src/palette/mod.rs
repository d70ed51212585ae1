//! Reference tile palettes and nearest-match lookup
//!
//! This module contains palette-related functionality including:
//! - Tile storage with precomputed signatures
//! - Nearest-signature lookup with deterministic tie-breaking
//! - Loading numbered tile libraries from disk

/// Palette storage and nearest-signature lookup
pub mod index;
/// Palette construction from numbered tile files
pub mod loader;
/// Reference tiles with precomputed signatures
pub mod tile;

pub use index::Palette;
pub use tile::Tile;
