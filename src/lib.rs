//! Photomosaic composition through recursive quadrant subdivision
//!
//! The engine partitions a target image into quadrants down to a resolution
//! floor, matches each leaf region against a palette of reference tiles by
//! nearest mean color, and composites resized tiles into an output image of
//! the original dimensions.

#![forbid(unsafe_code)]

/// Mean-color signature computation for tile matching
pub mod color;
/// Recursive composition engine and orchestration
pub mod compose;
/// Input/output operations and error handling
pub mod io;
/// Reference tile palettes and nearest-match lookup
pub mod palette;
/// Region geometry and tile scaling
pub mod spatial;

pub use compose::{MosaicConfig, MosaicEngine, compose};
pub use io::error::{MosaicError, Result};
