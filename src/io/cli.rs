//! Command-line interface for batch processing PNG exemplars

use crate::algorithm::executor::Wave;
use crate::analysis::patterns::ImageProcessor;
use crate::io::configuration::{
    DEFAULT_OUTPUT_HEIGHT, DEFAULT_OUTPUT_WIDTH, DEFAULT_SEED, DEFAULT_TILE_HEIGHT,
    DEFAULT_TILE_WIDTH, GIF_FRAME_DELAY_MS, OUTPUT_SUFFIX,
};
use crate::io::error::{Result, WaveError, invalid_parameter};
use crate::io::image::export_field_as_png;
use crate::io::progress::ProgressManager;
use crate::io::visualization::VisualizationCapture;
use clap::Parser;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "wavetile")]
#[command(
    author,
    version,
    about = "Generate tile patterns from PNG exemplars via wave function collapse"
)]
/// Command-line arguments for the pattern generation tool
pub struct Cli {
    /// Input PNG file or directory to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Random seed for reproducible generation (0 picks one at random)
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Extraction window width in pixels
    #[arg(short = 'x', long, default_value_t = DEFAULT_TILE_WIDTH)]
    pub tile_width: usize,

    /// Extraction window height in pixels
    #[arg(short = 'y', long, default_value_t = DEFAULT_TILE_HEIGHT)]
    pub tile_height: usize,

    /// Output width in pixels
    #[arg(short = 'w', long, default_value_t = DEFAULT_OUTPUT_WIDTH)]
    pub width: usize,

    /// Output height in pixels
    #[arg(short = 'H', long, default_value_t = DEFAULT_OUTPUT_HEIGHT)]
    pub height: usize,

    /// Record the collapse as an animated GIF
    #[arg(short, long)]
    pub visualize: bool,

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

/// Orchestrates batch processing of PNG exemplars with progress tracking
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
    /// # Errors
    ///
    /// Returns an error if target validation or file processing fails
    pub fn process(&mut self) -> Result<()> {
        self.validate_parameters()?;

        let files = self.collect_files()?;

        if files.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for file in &files {
            self.process_file(file)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn validate_parameters(&self) -> Result<()> {
        if self.cli.tile_width == 0 {
            return Err(invalid_parameter(
                "tile-width",
                &self.cli.tile_width,
                &"must be at least 1",
            ));
        }
        if self.cli.tile_height == 0 {
            return Err(invalid_parameter(
                "tile-height",
                &self.cli.tile_height,
                &"must be at least 1",
            ));
        }
        if self.cli.width == 0 || self.cli.height == 0 {
            return Err(invalid_parameter(
                "width/height",
                &format!("{}x{}", self.cli.width, self.cli.height),
                &"output dimensions must be at least 1x1",
            ));
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
                Err(crate::io::error::io_error(
                    "Target file must be a PNG image",
                ))
            }
        } else if self.cli.target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(&self.cli.target)? {
                let path = entry?.path();
                if path.extension().and_then(|s| s.to_str()) == Some("png")
                    && self.should_process_file(&path)
                {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(crate::io::error::io_error(
                "Target must be a PNG file or directory",
            ))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            // Allow print for user feedback on skipped files
            #[allow(clippy::print_stderr)]
            if !self.cli.quiet {
                eprintln!("Skipping: {} (output exists)", input_path.display());
            }
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path) -> Result<()> {
        let start_time = Instant::now();
        let output_path = Self::get_output_path(input_path);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(input_path);
        }

        let processor = ImageProcessor::from_png_path(input_path)?;
        let (pattern_height, pattern_width) = processor.dimensions();

        if processor.color_count() == 0 {
            return Err(WaveError::InvalidSourceData {
                reason: format!("'{}' holds no pixels", input_path.display()),
            });
        }
        if self.cli.tile_width > pattern_width || self.cli.tile_height > pattern_height {
            return Err(invalid_parameter(
                "tile-width/tile-height",
                &format!("{}x{}", self.cli.tile_width, self.cli.tile_height),
                &format!("window exceeds the {pattern_width}x{pattern_height} exemplar"),
            ));
        }

        let pattern = processor.flat_pattern();

        let mut wave = Wave::new(self.cli.width, self.cli.height);
        wave.init_from_pattern(
            &pattern,
            pattern_width,
            pattern_height,
            self.cli.tile_width,
            self.cli.tile_height,
            self.cli.seed,
        );

        let color_mapping = processor.color_mapping().to_vec();
        let mut capture = self.cli.visualize.then(|| {
            VisualizationCapture::new(
                wave.width(),
                wave.height(),
                wave.tiles().to_vec(),
                color_mapping.clone(),
            )
        });

        loop {
            let solved = if let Some(ref mut viz) = capture {
                wave.collapse_with(true, |field, x, y| viz.record(field, x, y))
            } else {
                wave.collapse(true)
            };

            if let Some(ref mut pm) = self.progress_manager {
                pm.update_progress(wave.uncertainty());
            }

            if solved {
                break;
            }
        }

        export_field_as_png(
            &wave,
            &color_mapping,
            output_path
                .to_str()
                .ok_or_else(|| crate::io::error::io_error("Invalid output path"))?,
        )?;

        if let Some(viz) = capture {
            if viz.update_count() > 0 {
                let viz_path = Self::get_visualization_path(input_path);
                viz.export_gif(
                    viz_path
                        .to_str()
                        .ok_or_else(|| crate::io::error::io_error("Invalid visualization path"))?,
                    GIF_FRAME_DELAY_MS,
                )?;
            }
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(start_time.elapsed());
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

    fn get_visualization_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let viz_name = format!("{}_collapse.gif", stem.to_string_lossy());

        if let Some(parent) = input_path.parent() {
            parent.join(viz_name)
        } else {
            PathBuf::from(viz_name)
        }
    }
}
