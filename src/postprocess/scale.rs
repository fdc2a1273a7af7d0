use crate::io::error::{Result, invalid_input};

/// Scale a text map up by an integer factor
///
/// Every glyph is repeated `factor` times along its row and every widened row
/// is repeated `factor` times, so each tile becomes a contiguous
/// `factor` x `factor` block. A factor of 1 returns the input unchanged.
///
/// # Errors
///
/// Returns `InvalidInput` if the map is blank or `factor` is zero
pub fn upscale(map: &str, factor: usize) -> Result<String> {
    if map.trim().is_empty() {
        return Err(invalid_input("map", &map, &"must be a non-empty string"));
    }
    if factor == 0 {
        return Err(invalid_input(
            "factor",
            &factor,
            &"scale factor must be a positive integer",
        ));
    }
    if factor == 1 {
        return Ok(map.to_string());
    }

    let mut scaled_lines = Vec::new();
    for line in map.split('\n') {
        let widened: String = line
            .chars()
            .flat_map(|glyph| std::iter::repeat_n(glyph, factor))
            .collect();
        scaled_lines.extend(std::iter::repeat_n(widened, factor));
    }

    Ok(scaled_lines.join("\n"))
}
