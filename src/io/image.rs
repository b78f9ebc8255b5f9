//! PNG export of solved fields

use crate::algorithm::executor::Wave;
use crate::io::error::{Result, WaveError};
use image::{ImageBuffer, Rgba};

/// Render a solved field to a PNG file
///
/// Each cell maps through its first set bit to a tile, whose representative
/// value indexes the color table. The field must be fully collapsed.
///
/// # Errors
///
/// Returns an error if:
/// - Any cell is still unsolved (no tile assigned)
/// - A tile's representative value is outside the color table
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_field_as_png(
    wave: &Wave<usize>,
    color_mapping: &[[u8; 4]],
    output_path: &str,
) -> Result<()> {
    let field = wave.field();
    let tiles = wave.tiles();

    let mut img = ImageBuffer::new(field.width() as u32, field.height() as u32);

    for y in 0..field.height() {
        for x in 0..field.width() {
            let cell = field.cell(field.index(x, y));
            let tile_id = cell
                .first_one()
                .ok_or_else(|| WaveError::InvalidSourceData {
                    reason: format!("cell ({x}, {y}) has no tile assigned"),
                })?;
            let color_index =
                tiles
                    .get(tile_id)
                    .copied()
                    .ok_or(WaveError::InvalidTileIndex {
                        index: tile_id,
                        max_tiles: tiles.len(),
                    })?;
            let rgba = color_mapping
                .get(color_index)
                .copied()
                .ok_or(WaveError::InvalidTileIndex {
                    index: color_index,
                    max_tiles: color_mapping.len(),
                })?;

            img.put_pixel(x as u32, y as u32, Rgba(rgba));
        }
    }

    if let Some(parent) = std::path::Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| WaveError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| WaveError::ImageExport {
            path: output_path.into(),
            source: e,
        })?;

    Ok(())
}
