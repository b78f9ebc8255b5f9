//! Image processing and color indexing for exemplar patterns

use ndarray::Array2;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Converts images to integer-labeled exemplar grids
///
/// Each distinct RGBA color becomes one cell value. Colors are sorted before
/// indexing, so the same image always yields the same labeling and therefore
/// the same tile ids downstream.
pub struct ImageProcessor {
    source_data: Array2<usize>,
    color_mapping: Vec<[u8; 4]>,
}

impl ImageProcessor {
    /// Load and index an exemplar from a PNG file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or decoded.
    pub fn from_png_path<P: AsRef<Path>>(path: P) -> crate::io::error::Result<Self> {
        let path_buf = path.as_ref().to_path_buf();
        let img =
            image::open(&path_buf).map_err(|e| crate::io::error::WaveError::ImageLoad {
                path: path_buf,
                source: e,
            })?;
        let rgba = img.to_rgba8();
        let (width, height) = (rgba.width() as usize, rgba.height() as usize);

        let pixels: Vec<[u8; 4]> = rgba.pixels().map(|pixel| pixel.0).collect();
        Ok(Self::from_rgba_pixels(width, height, &pixels))
    }

    /// Index raw RGBA pixels laid out row-major
    pub fn from_rgba_pixels(width: usize, height: usize, pixels: &[[u8; 4]]) -> Self {
        // Deterministic color ordering keeps tile ids reproducible
        let unique: HashSet<[u8; 4]> = pixels.iter().copied().collect();
        let mut color_mapping: Vec<[u8; 4]> = unique.into_iter().collect();
        color_mapping.sort_unstable();

        let index_of: HashMap<[u8; 4], usize> = color_mapping
            .iter()
            .enumerate()
            .map(|(index, &color)| (color, index))
            .collect();

        let mut source_data = Array2::zeros((height, width));
        for (i, pixel) in pixels.iter().enumerate() {
            let row = i / width;
            let col = i % width;
            if let (Some(cell), Some(&index)) =
                (source_data.get_mut((row, col)), index_of.get(pixel))
            {
                *cell = index;
            }
        }

        Self {
            source_data,
            color_mapping,
        }
    }

    /// Exemplar grid of color indices
    pub const fn source_data(&self) -> &Array2<usize> {
        &self.source_data
    }

    /// Exemplar dimensions as (height, width)
    pub fn dimensions(&self) -> (usize, usize) {
        self.source_data.dim()
    }

    /// RGBA color for each cell value
    pub fn color_mapping(&self) -> &[[u8; 4]] {
        &self.color_mapping
    }

    /// Number of distinct colors in the exemplar
    pub fn color_count(&self) -> usize {
        self.color_mapping.len()
    }

    /// Flatten the exemplar row-major for the engine
    pub fn flat_pattern(&self) -> Vec<usize> {
        self.source_data.iter().copied().collect()
    }
}
