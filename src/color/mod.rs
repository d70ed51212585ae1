//! Color measurement for tile matching

/// Mean-color signature computation and RGB distance
pub mod signature;

pub use signature::ColorSignature;
