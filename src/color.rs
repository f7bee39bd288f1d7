// Color policy for the trace.
// Visual outcomes:
// - Monochrome mode: black strokes on a transparent canvas (white backdrop).
// - Color-scheme mode: stroke hue follows movement direction, cycling
//   yellow -> cyan -> magenta around the compass, on a translucent dark canvas.

use crate::types::{Point, TraceConfig};
use std::f32::consts::PI;

/// One RGBA color, straight (unpremultiplied) alpha.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }

    /// Pack as 0xAARRGGBB (the canvas pixel format).
    pub fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

/* ---------- background + foreground selection ---------- */

/// Canvas fill used by clear/setup. The color-scheme background is a
/// translucent near-black so strokes accumulate over whatever sits behind
/// the canvas; monochrome uses full transparency.
const SCHEME_BACKGROUND: Color = Color::rgba(0, 0, 0, 210);

pub fn background(cfg: TraceConfig) -> Color {
    if cfg.use_color_scheme { SCHEME_BACKGROUND } else { Color::TRANSPARENT }
}

/// Stroke color for the segment prev -> curr.
/// Visual: in monochrome everything is black; in color-scheme mode the line
/// changes hue as the pointer changes direction.
pub fn foreground(prev: Point, curr: Point, cfg: TraceConfig) -> Color {
    if cfg.use_color_scheme {
        direction_color((curr.y - prev.y).atan2(curr.x - prev.x))
    } else {
        Color::BLACK
    }
}

/* ---------- direction -> color wheel ---------- */

/// The three control colors the wheel cycles through.
const SCHEME: [Color; 3] = [
    Color::rgb(255, 255, 0),   // yellow
    Color::rgb(0, 255, 255),   // cyan
    Color::rgb(255, 0, 255),   // magenta
];

/// Map a movement angle (radians, from atan2 in screen coordinates) onto the
/// control-color wheel. `n` sweeps [0,1) as the angle sweeps a half turn,
/// with a quarter-turn offset so diagonal up-right travel lands exactly on a
/// control color. The wheel repeats every half turn: opposite directions
/// share a hue.
pub fn direction_color(angle: f32) -> Color {
    let n = (1.0 + angle / PI + 0.25) % 1.0;

    // Position inside the 3-segment wheel: segment index + blend factor.
    let t = 3.0 * n;
    let k = t as usize;
    let f = t - k as f32;

    let from = SCHEME[k % 3];
    let to = SCHEME[(k + 1) % 3];
    lerp(from, to, f)
}

/// Per-channel linear blend, truncating to u8 like integer color math does.
fn lerp(from: Color, to: Color, f: f32) -> Color {
    let ch = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * f) as u8;
    Color::rgb(ch(from.r, to.r), ch(from.g, to.g), ch(from.b, to.b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

    fn scheme_cfg() -> TraceConfig {
        TraceConfig { use_color_scheme: true, ignore_mouse_stops: false }
    }

    #[test]
    fn test_background_follows_mode() {
        assert_eq!(background(TraceConfig::default()), Color::TRANSPARENT);
        assert_eq!(background(scheme_cfg()), Color::rgba(0, 0, 0, 210));
    }

    #[test]
    fn test_monochrome_foreground_is_black() {
        let c = foreground(Point::new(0.0, 0.0), Point::new(5.0, 5.0), TraceConfig::default());
        assert_eq!(c, Color::BLACK);
    }

    #[test]
    fn test_up_right_travel_hits_the_yellow_control() {
        // angle -pi/4 makes n land exactly on 0 (the first control color)
        assert_eq!(direction_color(-FRAC_PI_4), Color::rgb(255, 255, 0));
    }

    #[test]
    fn test_rightward_travel_blends_yellow_toward_cyan() {
        // angle 0 -> n = 0.25 -> three quarters into the yellow->cyan segment,
        // truncating per channel
        assert_eq!(direction_color(0.0), Color::rgb(63, 255, 191));
    }

    #[test]
    fn test_turning_ninety_degrees_changes_the_color() {
        assert_ne!(direction_color(0.0), direction_color(FRAC_PI_2));
    }

    #[test]
    fn test_opposite_vertical_directions_share_color() {
        // The wheel repeats every half turn, so straight up and straight down
        // produce the same hue.
        let down = direction_color(FRAC_PI_2);
        let up = direction_color(-FRAC_PI_2);
        assert_eq!(down, up);
        assert_eq!(down, Color::rgb(255, 63, 191));
    }

    #[test]
    fn test_direction_color_is_deterministic() {
        for i in 0..32 {
            let angle = -PI + (i as f32 / 16.0) * PI;
            assert_eq!(direction_color(angle), direction_color(angle));
        }
    }

    #[test]
    fn test_to_argb_packs_channels() {
        assert_eq!(Color::rgba(0x11, 0x22, 0x33, 0x44).to_argb(), 0x4411_2233);
        assert_eq!(Color::TRANSPARENT.to_argb(), 0x0000_0000);
        assert_eq!(Color::rgba(0, 0, 0, 210).to_argb(), 0xD200_0000);
    }
}
