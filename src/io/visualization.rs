//! Frame capture and GIF generation for collapse visualization

use crate::algorithm::bitset::TileBitset;
use crate::io::error::{Result, WaveError};
use crate::spatial::grid::Field;
use image::{Frame, Rgba, RgbaImage};

/// A single cell update recorded during collapse
#[derive(Debug, Clone)]
pub struct CellUpdate {
    /// Cell column
    pub x: usize,
    /// Cell row
    pub y: usize,
    /// Rendered color of the cell after the update
    pub color: [u8; 4],
}

/// Captures cell updates during collapse for animated rendering
///
/// Intended as the engine's observer callback: every time a cell's candidate
/// set changes, its blended color is recorded, and export replays the events
/// into GIF frames. Undecided cells render as the mean color of their
/// remaining candidates, so the animation shows the field sharpening from
/// gray ambiguity into the final pattern.
pub struct VisualizationCapture {
    updates: Vec<CellUpdate>,
    width: usize,
    height: usize,
    tiles: Vec<usize>,
    color_mapping: Vec<[u8; 4]>,
    background: [u8; 4],
}

impl VisualizationCapture {
    /// The average of all exemplar colors is used as the background
    pub fn new(width: usize, height: usize, tiles: Vec<usize>, color_mapping: Vec<[u8; 4]>) -> Self {
        let background = if color_mapping.is_empty() {
            [128, 128, 128, 255]
        } else {
            mean_color(color_mapping.iter().copied())
        };

        Self {
            updates: Vec::new(),
            width,
            height,
            tiles,
            color_mapping,
            background,
        }
    }

    /// Record the current state of one cell
    pub fn record(&mut self, field: &Field, x: usize, y: usize) {
        let cell = field.cell(field.index(x, y));
        let color = self.blend_cell(cell);
        self.updates.push(CellUpdate { x, y, color });
    }

    /// Number of recorded cell updates
    pub fn update_count(&self) -> usize {
        self.updates.len()
    }

    /// Export the captured updates as a GIF with automatic frame skipping
    ///
    /// Skips intermediate frames when the requested frame rate exceeds what
    /// viewers reliably support, keeping the apparent animation speed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No cell updates were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &str, frame_delay_ms: u32) -> Result<()> {
        use crate::io::configuration::VIEWER_MIN_FRAME_DELAY_MS;

        if self.updates.is_empty() {
            return Err(WaveError::InvalidSourceData {
                reason: "No cell updates captured for visualization".to_string(),
            });
        }

        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = std::path::Path::new(output_path).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| WaveError::FileSystem {
                    path: parent.to_path_buf(),
                    operation: "create directory",
                    source: e,
                })?;
            }
        }

        let file = std::fs::File::create(output_path).map_err(|e| WaveError::FileSystem {
            path: output_path.into(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| WaveError::ImageExport {
                path: output_path.into(),
                source: e,
            })?;

        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let mut canvas = RgbaImage::from_pixel(
            self.width as u32,
            self.height as u32,
            Rgba(self.background),
        );
        let mut frames = vec![make_frame(canvas.clone(), delay_ms)];

        for (count, update) in self.updates.iter().enumerate() {
            if update.x < self.width && update.y < self.height {
                canvas.put_pixel(update.x as u32, update.y as u32, Rgba(update.color));
            }

            if (count + 1) % skip_factor == 0 {
                frames.push(make_frame(canvas.clone(), delay_ms));
            }
        }

        if self.updates.len() % skip_factor != 0 {
            frames.push(make_frame(canvas.clone(), delay_ms));
        }

        // Final frame displays longer for better visibility
        frames.push(make_frame(canvas, delay_ms * 25));

        frames
    }

    /// Mean color of the candidates remaining in a cell
    fn blend_cell(&self, cell: &TileBitset) -> [u8; 4] {
        let colors = cell.iter_ones().filter_map(|tile_id| {
            self.tiles
                .get(tile_id)
                .and_then(|&color_index| self.color_mapping.get(color_index))
                .copied()
        });

        let mut peekable = colors.peekable();
        if peekable.peek().is_none() {
            self.background
        } else {
            mean_color(peekable)
        }
    }
}

fn mean_color(colors: impl Iterator<Item = [u8; 4]>) -> [u8; 4] {
    let mut sums = [0u32; 4];
    let mut count = 0u32;

    for color in colors {
        for (sum, channel) in sums.iter_mut().zip(color.iter()) {
            *sum += u32::from(*channel);
        }
        count += 1;
    }

    if count == 0 {
        [128, 128, 128, 255]
    } else {
        [
            (sums[0] / count) as u8,
            (sums[1] / count) as u8,
            (sums[2] / count) as u8,
            (sums[3] / count) as u8,
        ]
    }
}

fn make_frame(image: RgbaImage, delay_ms: u32) -> Frame {
    Frame::from_parts(image, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
}
