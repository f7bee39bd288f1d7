// CPU raster canvas, 0xAARRGGBB with straight (unpremultiplied) alpha.
// Visual outcomes:
// - draw_line: a thin antialiased stroke between two pointer samples.
// - fill_circle / stroke_circle: the dwell marker's halo disc, halo outline
//   and center dot.
// Everything composites source-over and clips to the canvas bounds.

use crate::color::Color;
use crate::types::Point;

pub struct Canvas {
    pub width: usize,
    pub height: usize,
    pub stroke_width: f32, // line and outline thickness, fixed at setup
    pub pixels: Vec<u32>,  // row-major, length = width * height
}

impl Canvas {
    /// Allocate a canvas; pixels start fully transparent.
    pub fn new(width: usize, height: usize, stroke_width: f32) -> Self {
        Canvas { width, height, stroke_width, pixels: vec![0; width * height] }
    }

    /// Overwrite every pixel with `color`. No blending; idempotent.
    /// Visual: the whole canvas becomes a flat fill (transparent or dark).
    pub fn clear(&mut self, color: Color) {
        let argb = color.to_argb();
        for px in &mut self.pixels {
            *px = argb;
        }
    }

    /// Antialiased stroke from `from` to `to` at the canvas stroke width,
    /// with round caps.
    /// Visual: a smooth thin line; diagonal strokes show no stair-stepping.
    pub fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let half = self.stroke_width * 0.5;
        let pad = half + 1.0;
        let (x0, y0, x1, y1) = self.scan_bounds(
            from.x.min(to.x) - pad,
            from.y.min(to.y) - pad,
            from.x.max(to.x) + pad,
            from.y.max(to.y) + pad,
        );

        for y in y0..=y1 {
            for x in x0..=x1 {
                let d = dist_to_segment(x as f32 + 0.5, y as f32 + 0.5, from, to);
                let coverage = (half + 0.5 - d).clamp(0.0, 1.0);
                self.blend_pixel(x, y, color, coverage);
            }
        }
    }

    /// Antialiased filled disc of the given diameter.
    /// Visual: a soft-edged solid circle (the halo fill and the center dot).
    pub fn fill_circle(&mut self, center: Point, diameter: f32, color: Color) {
        let r = diameter * 0.5;
        if r <= 0.0 {
            return;
        }
        let pad = r + 1.0;
        let (x0, y0, x1, y1) =
            self.scan_bounds(center.x - pad, center.y - pad, center.x + pad, center.y + pad);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d = (dx * dx + dy * dy).sqrt();
                let coverage = (r + 0.5 - d).clamp(0.0, 1.0);
                self.blend_pixel(x, y, color, coverage);
            }
        }
    }

    /// Antialiased circle outline at the canvas stroke width.
    /// Visual: a thin ring (the halo's edge) with an empty interior.
    pub fn stroke_circle(&mut self, center: Point, diameter: f32, color: Color) {
        let r = diameter * 0.5;
        if r <= 0.0 {
            return;
        }
        let half = self.stroke_width * 0.5;
        let pad = r + half + 1.0;
        let (x0, y0, x1, y1) =
            self.scan_bounds(center.x - pad, center.y - pad, center.x + pad, center.y + pad);

        for y in y0..=y1 {
            for x in x0..=x1 {
                let dx = x as f32 + 0.5 - center.x;
                let dy = y as f32 + 0.5 - center.y;
                let d = (dx * dx + dy * dy).sqrt();
                let coverage = (half + 0.5 - (d - r).abs()).clamp(0.0, 1.0);
                self.blend_pixel(x, y, color, coverage);
            }
        }
    }

    /* ---------- per-pixel plumbing ---------- */

    /// Clamp a fractional bounding box to whole-pixel canvas bounds.
    /// A fully off-canvas box comes back inverted, so `x0..=x1` is empty.
    fn scan_bounds(&self, min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> (i32, i32, i32, i32) {
        let x0 = (min_x.floor() as i32).max(0);
        let y0 = (min_y.floor() as i32).max(0);
        let x1 = (max_x.ceil() as i32).min(self.width as i32 - 1);
        let y1 = (max_y.ceil() as i32).min(self.height as i32 - 1);
        (x0, y0, x1, y1)
    }

    /// Source-over blend of `color`, scaled by `coverage` in [0,1], into
    /// (x,y) if inside bounds. Destination alpha participates, so strokes on
    /// a transparent canvas stay translucent at their edges.
    fn blend_pixel(&mut self, x: i32, y: i32, color: Color, coverage: f32) {
        if coverage <= 0.0 || x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }

        let sa = (color.a as f32 / 255.0) * coverage;
        if sa <= 0.0 {
            return;
        }

        let idx = y * self.width + x;
        let dst = self.pixels[idx];
        let da = ((dst >> 24) & 0xFF) as f32 / 255.0;
        let dr = ((dst >> 16) & 0xFF) as f32;
        let dg = ((dst >> 8) & 0xFF) as f32;
        let db = (dst & 0xFF) as f32;

        // out_a > 0 because sa > 0
        let out_a = sa + da * (1.0 - sa);
        let blend = |sc: u8, dc: f32| -> u32 {
            ((sc as f32 * sa + dc * da * (1.0 - sa)) / out_a).round() as u32
        };

        let a = (out_a * 255.0).round() as u32;
        self.pixels[idx] =
            (a << 24) | (blend(color.r, dr) << 16) | (blend(color.g, dg) << 8) | blend(color.b, db);
    }
}

/// Distance from point (px,py) to the segment a-b. A degenerate segment
/// collapses to point distance.
fn dist_to_segment(px: f32, py: f32, a: Point, b: Point) -> f32 {
    let abx = b.x - a.x;
    let aby = b.y - a.y;
    let apx = px - a.x;
    let apy = py - a.y;

    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 { ((apx * abx + apy * aby) / len_sq).clamp(0.0, 1.0) } else { 0.0 };

    let ex = px - (a.x + abx * t);
    let ey = py - (a.y + aby * t);
    (ex * ex + ey * ey).sqrt()
}
