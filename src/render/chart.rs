//! Annotated chart rasterization with grid lines and cell coordinates

use crate::io::configuration::{CELL_SIZE, GRID_LINE_ALPHA, GRID_LINE_THICKNESS, LABEL_SCALE};
use crate::io::error::{Result, computation_error, invalid_parameter};
use crate::render::glyphs;
use crate::render::palette::BeadPalette;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use ndarray::Array2;

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

/// Map every cell of the chart-resolution image onto its nearest palette entry
///
/// Returns the chart grid as palette indices in (row, col) order, row 0 at
/// the top.
///
/// # Errors
///
/// Returns [`crate::PipelineError::Computation`] if the palette is empty.
pub fn palette_grid(image: &RgbImage, palette: &BeadPalette) -> Result<Array2<usize>> {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let mut grid = Array2::zeros((height, width));

    for (x, y, pixel) in image.enumerate_pixels() {
        let index = palette
            .nearest_index(*pixel)
            .ok_or_else(|| computation_error("palette lookup", &"bead palette is empty"))?;
        if let Some(cell) = grid.get_mut((y as usize, x as usize)) {
            *cell = index;
        }
    }

    Ok(grid)
}

/// Rasterize a palette-index grid as an annotated chart figure
///
/// Each cell is filled with its palette color at [`CELL_SIZE`] pixels per
/// side, a half-opacity grid line is blended over every column and row
/// boundary, and the cell's `"column,row"` coordinate is drawn at its
/// center. Row 0 renders at the top of the figure and the canvas covers
/// exactly the grid extent, with no outer padding.
///
/// # Errors
///
/// Returns [`crate::PipelineError::InvalidParameter`] for an empty grid,
/// or [`crate::PipelineError::Computation`] if a cell's palette index is
/// out of range.
pub fn render_chart(grid: &Array2<usize>, palette: &BeadPalette) -> Result<RgbImage> {
    let (rows, cols) = grid.dim();
    if rows == 0 || cols == 0 {
        return Err(invalid_parameter(
            "grid",
            &format!("{rows}x{cols}"),
            &"chart grid must have at least one cell",
        ));
    }

    let width = cols as u32 * CELL_SIZE;
    let height = rows as u32 * CELL_SIZE;
    let mut canvas = RgbImage::new(width, height);

    for ((row, col), &index) in grid.indexed_iter() {
        let color = palette
            .color(index)
            .ok_or_else(|| computation_error("chart render", &"palette index out of range"))?;
        let rect = Rect::at(
            (col as u32 * CELL_SIZE) as i32,
            (row as u32 * CELL_SIZE) as i32,
        )
        .of_size(CELL_SIZE, CELL_SIZE);
        draw_filled_rect_mut(&mut canvas, rect, color);
    }

    draw_grid_lines(&mut canvas, rows, cols);
    draw_labels(&mut canvas, rows, cols);

    Ok(canvas)
}

/// Coordinate label text for the cell at (`col`, `row`), both 0-based
pub fn cell_label(col: usize, row: usize) -> String {
    format!("{col},{row}")
}

// One line per column and row boundary, spanning the full grid extent
fn draw_grid_lines(canvas: &mut RgbImage, rows: usize, cols: usize) {
    let (width, height) = canvas.dimensions();

    for col in 0..cols as u32 {
        let x0 = col * CELL_SIZE;
        for x in x0..(x0 + GRID_LINE_THICKNESS).min(width) {
            for y in 0..height {
                if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                    blend_pixel(pixel, BLACK, GRID_LINE_ALPHA);
                }
            }
        }
    }

    for row in 0..rows as u32 {
        let y0 = row * CELL_SIZE;
        for y in y0..(y0 + GRID_LINE_THICKNESS).min(height) {
            for x in 0..width {
                if let Some(pixel) = canvas.get_pixel_mut_checked(x, y) {
                    blend_pixel(pixel, BLACK, GRID_LINE_ALPHA);
                }
            }
        }
    }
}

fn draw_labels(canvas: &mut RgbImage, rows: usize, cols: usize) {
    let label_height = glyphs::text_height(LABEL_SCALE);

    for row in 0..rows {
        for col in 0..cols {
            let label = cell_label(col, row);
            let label_width = glyphs::text_width(&label, LABEL_SCALE);

            let x = col as u32 * CELL_SIZE + CELL_SIZE.saturating_sub(label_width) / 2;
            let y = row as u32 * CELL_SIZE + CELL_SIZE.saturating_sub(label_height) / 2;
            glyphs::draw_text(canvas, &label, x, y, LABEL_SCALE, BLACK);
        }
    }
}

fn blend_pixel(pixel: &mut Rgb<u8>, overlay: Rgb<u8>, alpha: f32) {
    for (channel, over) in pixel.0.iter_mut().zip(overlay.0.iter()) {
        *channel = f32::from(*channel)
            .mul_add(1.0 - alpha, f32::from(*over) * alpha)
            .round() as u8;
    }
}
