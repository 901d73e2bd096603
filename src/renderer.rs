use anyhow::{Context, Result};
use image::{imageops::FilterType, DynamicImage, GenericImageView, Rgba};

use crate::frame::{Cell, Frame};
use crate::ramp;

// Monospace glyph cells are taller than wide; squash the height so the
// output is not vertically stretched
const ASPECT_CORRECTION: f32 = 0.55;

/// Decode an image from raw bytes and render it as colored ASCII
pub fn render_bytes(bytes: &[u8], target_width: u32) -> Result<Frame> {
    let img = image::load_from_memory(bytes).context("Failed to decode image data")?;
    Ok(render_image(&img, target_width))
}

/// Render an already-decoded image as colored ASCII
///
/// Deterministic: the same image and width always produce the same frame.
/// Each cell keeps the resized pixel's real color; the glyph only encodes
/// brightness.
pub fn render_image(img: &DynamicImage, target_width: u32) -> Frame {
    let (src_width, src_height) = img.dimensions();
    let aspect_ratio = src_height as f32 / src_width as f32;
    let new_height = (target_width as f32 * aspect_ratio * ASPECT_CORRECTION)
        .round()
        .max(1.0) as u32;

    // Shrink first - by far the biggest CPU saver
    let resized = img.resize_exact(target_width, new_height, FilterType::Triangle);

    let mut rows = Vec::with_capacity(new_height as usize);
    for y in 0..new_height {
        let mut row = Vec::with_capacity(target_width as usize);
        for x in 0..target_width {
            let Rgba([r, g, b, _]) = resized.get_pixel(x, y);
            let lum = ramp::luminance(r, g, b);
            row.push(Cell {
                ch: ramp::glyph_for(lum),
                rgb: (r, g, b),
            });
        }
        rows.push(row);
    }

    Frame {
        width: target_width,
        rows,
    }
}
