//! Command-line interface for batch mosaic composition of PNG files

use crate::compose::engine::{MosaicConfig, MosaicEngine};
use crate::io::configuration::{DEFAULT_TILE_PREFIX, MIN_LEAF_EXTENT, OUTPUT_SUFFIX};
use crate::io::error::{MosaicError, Result, invalid_parameter};
use crate::io::image::{export_mosaic, load_image};
use crate::io::progress::ProgressManager;
use crate::palette::Palette;
use crate::palette::loader::load_numbered_tiles;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "quadmosaic")]
#[command(
    author,
    version,
    about = "Compose photomosaics from a library of reference tiles"
)]
/// Command-line arguments for the mosaic composition tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Directory containing numbered tile images (tile0.png, tile1.png, ...)
    #[arg(short, long, value_name = "DIR")]
    pub tiles: PathBuf,

    /// Filename prefix identifying tile images in the tile directory
    #[arg(short, long, default_value = DEFAULT_TILE_PREFIX)]
    pub prefix: String,

    /// Region extent below which subdivision stops, in pixels
    #[arg(short, long, default_value_t = MIN_LEAF_EXTENT)]
    pub leaf_size: u32,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates batch composition of PNG files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Loads the tile palette once and reuses it across every target file.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, palette loading, composition,
    /// or export fails
    pub fn process(&mut self) -> Result<()> {
        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        let palette = load_numbered_tiles(&self.cli.tiles, &self.cli.prefix)?;
        let engine = MosaicEngine::new(MosaicConfig {
            min_leaf_extent: self.cli.leaf_size,
        })?;

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file, &engine, &palette)?;
        }

        if let Some(ref pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        if self.cli.target.is_file() {
            if self.cli.target.extension().and_then(|s| s.to_str()) == Some("png") {
                if self.should_process_file(&self.cli.target) {
                    Ok(vec![self.cli.target.clone()])
                } else {
                    Ok(vec![])
                }
            } else {
                Err(invalid_parameter(
                    "target",
                    &self.cli.target.display(),
                    &"target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            let entries =
                std::fs::read_dir(&self.cli.target).map_err(|e| MosaicError::FileSystem {
                    path: self.cli.target.clone(),
                    operation: "read target directory",
                    source: e,
                })?;
            for entry in entries {
                let path = entry
                    .map_err(|e| MosaicError::FileSystem {
                        path: self.cli.target.clone(),
                        operation: "read target directory entry",
                        source: e,
                    })?
                    .path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_parameter(
                "target",
                &self.cli.target.display(),
                &"target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback for skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(
        &self,
        input_path: &Path,
        engine: &MosaicEngine,
        palette: &Palette,
    ) -> Result<()> {
        if let Some(ref pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let target = load_image(input_path)?;
        let mosaic = engine.compose(&target, palette)?;
        export_mosaic(&mosaic, &Self::get_output_path(input_path))?;

        if let Some(ref pm) = self.progress_manager {
            pm.complete_file();
        }

        Ok(())
    }

    fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let extension = input_path.extension().unwrap_or_default();
        let output_name = format!(
            "{}{}.{}",
            stem.to_string_lossy(),
            OUTPUT_SUFFIX,
            extension.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}
