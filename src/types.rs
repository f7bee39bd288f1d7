// Core value types shared by the trace renderer and the driver.

/// A position in f32 pixel coordinates. Plain value, compared exactly.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f32, y: f32) -> Self {
        Point { x, y }
    }

    /// Squared distance to `other`. The dwell test compares this against a
    /// squared threshold, so no sqrt anywhere on the hot path.
    pub fn dist_sq(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    pub fn scaled(&self, s: f32) -> Point {
        Point { x: self.x * s, y: self.y * s }
    }
}

/// The tracked region: origin in global cursor coordinates, size in pixels.
/// The full canvas is exactly this size.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: usize, height: usize) -> Self {
        Rect { x, y, width, height }
    }

    /// Global cursor position -> canvas-local position.
    pub fn to_local(&self, global: Point) -> Point {
        Point { x: global.x - self.x, y: global.y - self.y }
    }
}

/// Runtime flags. Passed by value into every renderer call so a toggle
/// takes effect on the very next tick.
#[derive(Clone, Copy, Default)]
pub struct TraceConfig {
    pub use_color_scheme: bool,   // direction-cycling colors instead of black-on-transparent
    pub ignore_mouse_stops: bool, // draw movement only, skip dwell markers entirely
}

#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // how wide the frame is on screen (pixels)
    pub height: usize,     // how tall the frame is on screen (pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}
