// The path renderer: turns a stream of pointer samples into an evolving
// trace drawing.
// Visual outcomes:
// - Moving the pointer strokes thin lines onto a full-size canvas and a
//   scaled-down preview at once.
// - Lingering in one spot grows an invisible dwell radius; moving away after
//   a long enough dwell stamps a fading halo ring with a solid center dot.

use crate::canvas::Canvas;
use crate::color::{self, Color};
use crate::types::{Point, Rect, TraceConfig};

/// Dwell radius a marker must exceed to be drawn; also the fade divisor.
const RADIUS_THRESHOLD: f32 = 20.0;
/// Squared distance from the anchor that still counts as dwelling.
const DWELL_ZONE_DIST_SQ: f32 = 400.0;
/// Dwell radius growth per in-zone tick.
const DWELL_RADIUS_STEP: f32 = 0.3;
/// Stroke width on the full canvas; the preview uses this times its scale.
const BASE_STROKE_WIDTH: f32 = 1.0;
/// Halo opacity before the radius-driven fade is applied.
const HALO_PEAK_ALPHA: f32 = 200.0;

pub struct PathRenderer {
    rect: Rect,
    scale: f32,
    full: Canvas,
    preview: Canvas,
    prev: Point,
    curr: Point,
    anchor: Point,
    radius: f32,
}

impl PathRenderer {
    /// Allocate both canvases for `rect` and clear them to the mode
    /// background. `scale` sizes the preview relative to the full canvas.
    pub fn new(rect: Rect, scale: f32, cfg: TraceConfig) -> Self {
        let full = Canvas::new(rect.width, rect.height, BASE_STROKE_WIDTH);
        let preview = Canvas::new(
            preview_dim(rect.width, scale),
            preview_dim(rect.height, scale),
            BASE_STROKE_WIDTH * scale,
        );
        let mut renderer = PathRenderer {
            rect,
            scale,
            full,
            preview,
            prev: Point::ZERO,
            curr: Point::ZERO,
            anchor: Point::ZERO,
            radius: 0.0,
        };
        renderer.clear(cfg);
        renderer
    }

    /// Re-target the renderer after the tracked rectangle or scale changed.
    /// A canvas whose dimensions already match is reused in place; stroke
    /// widths are reapplied and both canvases are cleared either way.
    /// Motion state is untouched; call `prepare_for_update` next.
    pub fn setup(&mut self, rect: Rect, scale: f32, cfg: TraceConfig) {
        self.rect = rect;
        self.scale = scale;
        retarget(&mut self.full, rect.width, rect.height, BASE_STROKE_WIDTH);
        retarget(
            &mut self.preview,
            preview_dim(rect.width, scale),
            preview_dim(rect.height, scale),
            BASE_STROKE_WIDTH * scale,
        );
        self.clear(cfg);
    }

    /// Wipe both canvases to the background for the given mode.
    /// Visual: the trace disappears; a fresh surface.
    pub fn clear(&mut self, cfg: TraceConfig) {
        let bg = color::background(cfg);
        self.full.clear(bg);
        self.preview.clear(bg);
    }

    /// Start (or restart) tracking at the given global position. All motion
    /// state collapses onto this sample; nothing is drawn.
    pub fn prepare_for_update(&mut self, global: Point) {
        let p = self.rect.to_local(global);
        self.prev = p;
        self.curr = p;
        self.anchor = p;
        self.radius = 0.0;
    }

    /// Feed one pointer sample: stroke the movement, advance the dwell
    /// state, and stamp a marker when a long-enough dwell ends.
    pub fn update(&mut self, global: Point, cfg: TraceConfig) {
        // 1) Bring the sample into canvas coordinates.
        self.curr = self.rect.to_local(global);

        // 2) Stroke the movement delta on both canvases. Exact compare: a
        //    perfectly still pointer draws nothing.
        if self.curr != self.prev {
            let fg = color::foreground(self.prev, self.curr, cfg);
            self.preview.draw_line(
                self.prev.scaled(self.scale),
                self.curr.scaled(self.scale),
                fg,
            );
            self.full.draw_line(self.prev, self.curr, fg);
        }

        // 3) Movement-only mode skips all dwell bookkeeping.
        if cfg.ignore_mouse_stops {
            self.prev = self.curr;
            return;
        }

        // 4) Still inside the dwell zone: grow the radius and wait.
        if self.curr.dist_sq(self.anchor) < DWELL_ZONE_DIST_SQ {
            self.radius += DWELL_RADIUS_STEP;
            self.prev = self.curr;
            return;
        }

        // 5) Zone exit. A long-enough dwell leaves a marker at the last
        //    in-zone sample, capped so it cannot flood the canvas.
        if self.radius > RADIUS_THRESHOLD {
            let radius = clamped_radius(self.radius, self.full.height);
            let fg = color::foreground(self.prev, self.curr, cfg);
            draw_marker(&mut self.preview, self.prev, radius, self.scale, fg, cfg);
            draw_marker(&mut self.full, self.prev, radius, 1.0, fg, cfg);
        }

        // 6) The exit sample anchors the next dwell.
        self.anchor = self.curr;
        self.prev = self.curr;
        self.radius = 0.0;
    }

    pub fn full(&self) -> &Canvas {
        &self.full
    }

    pub fn preview(&self) -> &Canvas {
        &self.preview
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }
}

/* ---------- marker geometry + canvas plumbing ---------- */

/// Reuse the canvas allocation when the target dimensions already match,
/// otherwise replace it. The stroke width is applied in both cases.
fn retarget(canvas: &mut Canvas, width: usize, height: usize, stroke_width: f32) {
    if canvas.width != width || canvas.height != height {
        *canvas = Canvas::new(width, height, stroke_width);
    } else {
        canvas.stroke_width = stroke_width;
    }
}

/// Preview dimension for a full-canvas dimension: scaled, rounded, and never
/// zero so the canvas stays drawable at extreme scales.
fn preview_dim(full: usize, scale: f32) -> usize {
    ((full as f32 * scale).round() as usize).max(1)
}

/// Cap the marker radius for very long dwells. The bound is a quarter of the
/// canvas height, squared (the dwell radius lives in squared-ish units).
fn clamped_radius(radius: f32, canvas_height: usize) -> f32 {
    radius.min((canvas_height as f32 * 0.25).powi(2))
}

/// Dwell marker geometry, derived purely from the accumulated radius and the
/// canvas scale. The fade ignores scale so both canvases agree on opacity.
struct Marker {
    halo_diameter: f32,
    dot_diameter: f32,
    fade_alpha: u8,
}

impl Marker {
    fn for_radius(radius: f32, scale: f32) -> Self {
        let root = radius.sqrt();
        let fade = HALO_PEAK_ALPHA * (1.0 - 2.0 * root / RADIUS_THRESHOLD).max(0.0);
        Marker {
            halo_diameter: 2.0 * radius * scale,
            dot_diameter: 2.0 * root * scale,
            fade_alpha: fade as u8,
        }
    }
}

/// Halo fill tint: black in color-scheme mode, white in monochrome, with the
/// radius-driven fade as its alpha.
fn halo_tint(cfg: TraceConfig, fade_alpha: u8) -> Color {
    let ch = if cfg.use_color_scheme { 0 } else { 255 };
    Color::rgba(ch, ch, ch, fade_alpha)
}

/// Stamp the three-layer dwell marker on one canvas: translucent halo disc,
/// halo outline at the canvas stroke width, then the solid center dot on top.
fn draw_marker(canvas: &mut Canvas, p: Point, radius: f32, scale: f32, fg: Color, cfg: TraceConfig) {
    let m = Marker::for_radius(radius, scale);
    let center = p.scaled(scale);
    canvas.fill_circle(center, m.halo_diameter, halo_tint(cfg, m.fade_alpha));
    canvas.stroke_circle(center, m.halo_diameter, fg);
    canvas.fill_circle(center, m.dot_diameter, fg);
}
