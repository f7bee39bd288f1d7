// Polls the global cursor position through the OS input layer.
// Visual expectation: none by itself; main.rs feeds these samples to the
// renderer, which is what puts ink on the canvas. Sampling keeps working
// while our window is unfocused, so the trace covers the whole desk session.

use crate::types::Point;

use device_query::{DeviceQuery, DeviceState};

// A small wrapper around device_query so our main loop stays clean.
pub struct PointerSampler {
    device: DeviceState,
}

impl PointerSampler {
    pub fn new() -> Self {
        Self { device: DeviceState::new() }
    }

    /// Current global cursor position. The OS layer always reports the last
    /// known coordinates, so this never fails mid-session.
    pub fn sample(&self) -> Point {
        let (x, y) = self.device.get_mouse().coords;
        Point::new(x as f32, y as f32)
    }
}
