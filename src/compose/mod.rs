//! Mosaic composition engine
//!
//! This module contains the composition pipeline including:
//! - Recursive quadrant subdivision and leaf filling
//! - Top-level orchestration and configuration

/// Top-level engine and configuration
pub mod engine;
/// Recursive quadrant subdivision
pub mod quadtree;

pub use engine::{MosaicConfig, MosaicEngine, compose};
