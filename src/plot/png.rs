use image::{Rgba, RgbaImage};

use crate::boundary::SliceView;
use crate::error::{NeuronError, Result};
use crate::plot::shade::{
    over, region_color, BACKGROUND, BORDER, BOUNDARY, MARKER_NEGATIVE, MARKER_POSITIVE,
};

const MARKER_RADIUS: f64 = 9.0;

/// Rasterizes a `SliceView` into a `size × size` image with `padding`
/// pixels of margin around the plot square.
///
/// Fails with `InvalidResolution` when the padding leaves no plot area.
pub fn render(view: &SliceView, size: u32, padding: u32) -> Result<RgbaImage> {
    let plot = padding
        .checked_mul(2)
        .and_then(|margins| size.checked_sub(margins))
        .filter(|&plot| plot > 0)
        .ok_or(NeuronError::InvalidResolution)?;
    let canvas = Canvas { padding: padding as f64, plot: plot as f64 };
    let mut img = RgbaImage::from_pixel(size, size, BACKGROUND);

    // Decision regions.
    let r = view.grid.resolution() as u64;
    for py in 0..plot {
        let row = (py as u64 * r / plot as u64) as usize;
        for px in 0..plot {
            let col = (px as u64 * r / plot as u64) as usize;
            if let Some(output) = view.grid.get(col, row) {
                let pixel = img.get_pixel_mut(padding + px, padding + py);
                *pixel = over(region_color(output), *pixel);
            }
        }
    }

    // Boundary strokes.
    for segment in view.trace.segments() {
        let pixels: Vec<(f64, f64)> = segment.iter().map(|&(x, y)| canvas.to_pixel(x, y)).collect();
        if pixels.len() == 1 {
            stamp(&mut img, pixels[0], BOUNDARY);
        }
        for pair in pixels.windows(2) {
            draw_line(&mut img, pair[0], pair[1], BOUNDARY);
        }
    }

    // Plot border.
    let (lo, hi) = (padding, padding + plot - 1);
    for i in lo..=hi {
        for (x, y) in [(i, lo), (i, hi), (lo, i), (hi, i)] {
            img.put_pixel(x, y, BORDER);
        }
    }

    // Position marker.
    let color = if view.marker.positive { MARKER_POSITIVE } else { MARKER_NEGATIVE };
    fill_circle(&mut img, canvas.to_pixel(view.marker.x, view.marker.y), MARKER_RADIUS, color);

    Ok(img)
}

/// Renders and writes a PNG to `path`.
pub fn save(view: &SliceView, path: &str, size: u32, padding: u32) -> Result<()> {
    render(view, size, padding)?.save(path)?;
    Ok(())
}

struct Canvas {
    padding: f64,
    plot: f64,
}

impl Canvas {
    /// Slice coordinates to pixel coordinates; y grows upward in the slice.
    fn to_pixel(&self, x: f64, y: f64) -> (f64, f64) {
        (self.padding + x * self.plot, self.padding + (1.0 - y) * self.plot)
    }
}

fn draw_line(img: &mut RgbaImage, from: (f64, f64), to: (f64, f64), color: Rgba<u8>) {
    let (dx, dy) = (to.0 - from.0, to.1 - from.1);
    let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as usize;
    for s in 0..=steps {
        let t = s as f64 / steps as f64;
        stamp(img, (from.0 + dx * t, from.1 + dy * t), color);
    }
}

/// A 2×2 dot, the stroke width of the boundary line.
fn stamp(img: &mut RgbaImage, at: (f64, f64), color: Rgba<u8>) {
    let (cx, cy) = (at.0.floor() as i64, at.1.floor() as i64);
    for y in cy - 1..=cy {
        for x in cx - 1..=cx {
            put(img, x, y, color);
        }
    }
}

fn fill_circle(img: &mut RgbaImage, center: (f64, f64), radius: f64, color: Rgba<u8>) {
    let r = radius.ceil() as i64;
    let (cx, cy) = (center.0.round() as i64, center.1.round() as i64);
    for y in cy - r..=cy + r {
        for x in cx - r..=cx + r {
            let (fx, fy) = ((x - cx) as f64, (y - cy) as f64);
            if fx * fx + fy * fy <= radius * radius {
                put(img, x, y, color);
            }
        }
    }
}

fn put(img: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if x >= 0 && y >= 0 && (x as u32) < img.width() && (y as u32) < img.height() {
        img.put_pixel(x as u32, y as u32, color);
    }
}
