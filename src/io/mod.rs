//! Input/output operations, configuration, and error handling

/// Command-line interface and batch processing
pub mod cli;
/// Composition constants and defaults
pub mod configuration;
/// Error types and result alias
pub mod error;
/// PNG loading and mosaic export
pub mod image;
/// Batch progress display
pub mod progress;
