//! Minimal built-in glyphs for coordinate labels
//!
//! Chart labels only ever contain decimal digits and a comma separator, so
//! a tiny fixed bitmap set avoids carrying font files. Glyphs are 3x5
//! cells and scale by integer replication.

use image::{Rgb, RgbImage};

/// Glyph width in cells
pub const GLYPH_WIDTH: u32 = 3;

/// Glyph height in cells
pub const GLYPH_HEIGHT: u32 = 5;

/// Horizontal gap between adjacent glyphs, in cells
pub const GLYPH_SPACING: u32 = 1;

/// Row bitmaps for one glyph; bit 2 is the left column
pub type GlyphRows = [u8; 5];

const DIGITS: [GlyphRows; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111], // 0
    [0b010, 0b110, 0b010, 0b010, 0b111], // 1
    [0b111, 0b001, 0b111, 0b100, 0b111], // 2
    [0b111, 0b001, 0b111, 0b001, 0b111], // 3
    [0b101, 0b101, 0b111, 0b001, 0b001], // 4
    [0b111, 0b100, 0b111, 0b001, 0b111], // 5
    [0b111, 0b100, 0b111, 0b101, 0b111], // 6
    [0b111, 0b001, 0b001, 0b001, 0b001], // 7
    [0b111, 0b101, 0b111, 0b101, 0b111], // 8
    [0b111, 0b101, 0b111, 0b001, 0b111], // 9
];

const COMMA: GlyphRows = [0b000, 0b000, 0b000, 0b010, 0b100];

/// Look up the glyph for a label character
///
/// Only decimal digits and the comma separator are supported; anything
/// else returns `None`.
pub fn glyph_for(character: char) -> Option<&'static GlyphRows> {
    if character == ',' {
        return Some(&COMMA);
    }
    character
        .to_digit(10)
        .and_then(|digit| DIGITS.get(digit as usize))
}

/// Rendered width of `text` in pixels at the given scale
pub fn text_width(text: &str, scale: u32) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    count * GLYPH_WIDTH * scale + (count - 1) * GLYPH_SPACING * scale
}

/// Rendered height of a text line in pixels at the given scale
pub const fn text_height(scale: u32) -> u32 {
    GLYPH_HEIGHT * scale
}

/// Draw `text` onto the canvas with its top-left corner at (`x`, `y`)
///
/// Unsupported characters advance the cursor without drawing. Pixels
/// falling outside the canvas are skipped.
pub fn draw_text(canvas: &mut RgbImage, text: &str, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
    let mut cursor = x;
    for character in text.chars() {
        if let Some(rows) = glyph_for(character) {
            draw_glyph(canvas, rows, cursor, y, scale, color);
        }
        cursor += (GLYPH_WIDTH + GLYPH_SPACING) * scale;
    }
}

fn draw_glyph(canvas: &mut RgbImage, rows: &GlyphRows, x: u32, y: u32, scale: u32, color: Rgb<u8>) {
    for (row_index, row) in rows.iter().enumerate() {
        for col_index in 0..GLYPH_WIDTH {
            let bit = (row >> (GLYPH_WIDTH - 1 - col_index)) & 1;
            if bit == 0 {
                continue;
            }
            let origin_x = x + col_index * scale;
            let origin_y = y + row_index as u32 * scale;
            for dy in 0..scale {
                for dx in 0..scale {
                    if let Some(pixel) = canvas.get_pixel_mut_checked(origin_x + dx, origin_y + dy)
                    {
                        *pixel = color;
                    }
                }
            }
        }
    }
}
