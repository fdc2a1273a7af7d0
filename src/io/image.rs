//! PNG preview export for text maps

use crate::io::error::{AlgorithmError, Result, invalid_input};
use crate::spatial::tiles::TileKind;
use image::{ImageBuffer, Rgba};
use std::path::Path;

/// RGBA colour of a tile in previews
pub const fn tile_color(kind: TileKind) -> [u8; 4] {
    match kind {
        TileKind::Wall => [0x6A, 0x6A, 0x6A, 0xFF],
        TileKind::Floor => [0xE8, 0xE8, 0xE8, 0xFF],
        TileKind::Hall => [0x8B, 0x45, 0x13, 0xFF],
        TileKind::Empty => [0, 0, 0, 0],
    }
}

/// Export a text map as a PNG with one `cell_pixels` square per tile
///
/// # Errors
///
/// Returns an error if:
/// - The map is blank or `cell_pixels` is zero
/// - The map contains a glyph that is not a tile
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_map_as_png(map: &str, output_path: &Path, cell_pixels: u32) -> Result<()> {
    if map.trim().is_empty() {
        return Err(invalid_input("map", &map, &"must be a non-empty string"));
    }
    if cell_pixels == 0 {
        return Err(invalid_input("cell_pixels", &cell_pixels, &"must be positive"));
    }

    let lines: Vec<&str> = map.split('\n').collect();
    let cols = lines
        .iter()
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0) as u32;
    let rows = lines.len() as u32;

    let mut img = ImageBuffer::new(cols * cell_pixels, rows * cell_pixels);

    for (row, line) in lines.iter().enumerate() {
        for (col, glyph) in line.chars().enumerate() {
            let kind = TileKind::from_glyph(glyph)
                .ok_or_else(|| invalid_input("map", &glyph, &format!("unknown glyph in row {row}")))?;
            let color = Rgba(tile_color(kind));

            let x0 = col as u32 * cell_pixels;
            let y0 = row as u32 * cell_pixels;
            for dy in 0..cell_pixels {
                for dx in 0..cell_pixels {
                    img.put_pixel(x0 + dx, y0 + dy, color);
                }
            }
        }
    }

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
