// Window + software presentation utilities.
// Visual effects provided here:
// 1) A window that shows the evolving trace composited over a backdrop.
// 2) Straight-alpha compositing of a trace canvas onto the opaque frame.
// 3) A tiny 5x7 bitmap font to render the HUD status line.

use crate::canvas::Canvas;
use crate::error::Error;
use crate::types::{FrameBuffer, Rect};
use minifb::{Key, KeyRepeat, Window, WindowOptions};

pub struct TraceScreen {
    window: Window, // the on-screen window you see
}

impl TraceScreen {
    /// Create a resizable window paced to `target_fps`.
    /// Visual: a new empty window appears with your chosen title.
    pub fn new(title: &str, width: usize, height: usize, target_fps: usize) -> Result<Self, Error> {
        let mut window = Window::new(
            title,
            width,
            height,
            WindowOptions { resize: true, ..WindowOptions::default() },
        )
        .map_err(|e| Error::WindowInit(e.to_string()))?;
        window.set_target_fps(target_fps);
        Ok(Self { window })
    }

    /// Push the pixels for this frame to the screen.
    /// Visual: the window immediately displays the new image.
    pub fn present(&mut self, framebuffer: &FrameBuffer) -> Result<(), Error> {
        self.window
            .update_with_buffer(&framebuffer.pixels, framebuffer.width, framebuffer.height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))?;
        Ok(())
    }

    /// Returns false when the user closes the window (so we can stop the loop).
    pub fn is_open(&self) -> bool {
        self.window.is_open()
    }

    /// True while ESC is held down (we'll exit when this is pressed).
    pub fn esc_pressed(&self) -> bool {
        self.window.is_key_down(Key::Escape)
    }

    /// The window's content rectangle in global screen coordinates. This is
    /// the region the trace tracks; moving or resizing the window changes it.
    pub fn global_rect(&self) -> Rect {
        let (x, y) = self.window.get_position();
        let (w, h) = self.window.get_size();
        Rect::new(x as f32, y as f32, w, h)
    }

    // main flips the color-scheme flag when this fires.
    pub fn c_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::C, KeyRepeat::No)
    }

    // main flips the ignore-stops flag when this fires.
    pub fn m_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::M, KeyRepeat::No)
    }

    /// Visual: when pressed, both canvases are wiped (the trace disappears).
    pub fn x_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::X, KeyRepeat::No)
    }

    /// Visual: when pressed, the trace pair is written to PNG files.
    pub fn s_pressed_once(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }
}

/* ---------- Software presentation: fill, compositing, tiny bitmap font ---------- */

/// Flood the frame with one opaque color.
/// Visual: the whole window becomes that color (the backdrop).
pub fn fill(fb: &mut FrameBuffer, color: u32) {
    for px in &mut fb.pixels {
        *px = color;
    }
}

/// Source-over composite a straight-alpha canvas onto the opaque frame,
/// top-left aligned. Whatever part of either surface sticks out is left alone.
/// Visual: the trace appears over the backdrop; transparent canvas areas
/// keep the backdrop visible.
pub fn composite_canvas(fb: &mut FrameBuffer, canvas: &Canvas) {
    let w = fb.width.min(canvas.width);
    let h = fb.height.min(canvas.height);
    for y in 0..h {
        for x in 0..w {
            let src = canvas.pixels[y * canvas.width + x];
            let sa = (src >> 24) as f32 / 255.0;
            if sa <= 0.0 {
                continue;
            }
            let idx = y * fb.width + x;
            let dst = fb.pixels[idx];
            let blend = |sc: u32, dc: u32| -> u32 {
                (sc as f32 * sa + dc as f32 * (1.0 - sa)).round() as u32
            };
            let r = blend((src >> 16) & 0xFF, (dst >> 16) & 0xFF);
            let g = blend((src >> 8) & 0xFF, (dst >> 8) & 0xFF);
            let b = blend(src & 0xFF, dst & 0xFF);
            fb.pixels[idx] = (r << 16) | (g << 8) | b;
        }
    }
}

/// Put a pixel on the framebuffer if (x,y) is inside bounds.
/// Visual: the exact pixel at (x,y) changes color.
#[inline]
fn put_pixel(fb: &mut FrameBuffer, x: i32, y: i32, color: u32) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= fb.width || y >= fb.height {
        return;
    }
    let idx = y * fb.width + x;
    fb.pixels[idx] = color;
}

/* ---------- 5x7 bitmap font (ASCII subset for "MONO | MARKS ON | FPS: 00.0") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    // Helper macro to define a glyph quickly
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch {
        // Digits 0..9
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Uppercase letters for the mode words, MARKS, FPS and SAVED
        'A' => g!(0b01110,0b10001,0b10001,0b11111,0b10001,0b10001,0b10001),
        'C' => g!(0b01110,0b10001,0b10000,0b10000,0b10000,0b10001,0b01110),
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'K' => g!(0b10001,0b10010,0b10100,0b11000,0b10100,0b10010,0b10001),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'N' => g!(0b10001,0b11001,0b10101,0b10011,0b10001,0b10001,0b10001),
        'O' => g!(0b01110,0b10001,0b10001,0b10001,0b10001,0b10001,0b01110),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'R' => g!(0b11110,0b10001,0b10001,0b11110,0b10100,0b10010,0b10001),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'V' => g!(0b10001,0b10001,0b10001,0b10001,0b10001,0b01010,0b00100),

        // Punctuation: space, vertical bar, colon, dot
        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y).
/// Visual: a tiny glyph appears with a 1-pixel black shadow for contrast.
fn draw_char_5x7(fb: &mut FrameBuffer, x: i32, y: i32, ch: char, color: u32) {
    if let Some(rows) = glyph5x7(ch) {
        // Shadow pass: offset by (1,1) in black to improve readability
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32 + 1, y + ry as i32 + 1, 0x00000000);
                }
            }
        }

        // Foreground pass: actual glyph in chosen color
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    put_pixel(fb, x + rx as i32, y + ry as i32, color);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs.
/// Visual: a compact HUD string appears; each glyph is 5x7 with 1-pixel spacing.
pub fn draw_text_5x7(fb: &mut FrameBuffer, mut x: i32, y: i32, text: &str, color: u32) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6; // 5 pixels glyph width + 1 pixel spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: usize, height: usize, color: u32) -> FrameBuffer {
        FrameBuffer { width, height, pixels: vec![color; width * height] }
    }

    #[test]
    fn test_composite_blends_by_source_alpha() {
        let mut fb = frame(1, 1, 0x00FF_FFFF);
        let mut c = Canvas::new(1, 1, 1.0);
        c.pixels[0] = 0x8000_0000; // half-covered black stroke edge
        composite_canvas(&mut fb, &c);
        assert_eq!(fb.pixels[0], 0x007F_7F7F);
    }

    #[test]
    fn test_composite_keeps_backdrop_under_transparent_pixels() {
        let mut fb = frame(2, 1, 0x00AB_CDEF);
        let mut c = Canvas::new(2, 1, 1.0);
        c.pixels[0] = 0x0012_3456; // fully transparent: backdrop wins
        c.pixels[1] = 0xFF11_2233; // fully opaque: canvas wins
        composite_canvas(&mut fb, &c);
        assert_eq!(fb.pixels[0], 0x00AB_CDEF);
        assert_eq!(fb.pixels[1], 0x0011_2233);
    }

    #[test]
    fn test_composite_clips_to_the_overlap() {
        let mut fb = frame(2, 2, 0x0000_0000);
        let mut c = Canvas::new(3, 3, 1.0);
        c.clear(crate::color::Color::rgb(255, 255, 255));
        composite_canvas(&mut fb, &c);
        assert!(fb.pixels.iter().all(|&px| px == 0x00FF_FFFF));

        let mut big = frame(3, 3, 0x0000_0000);
        let mut small = Canvas::new(1, 1, 1.0);
        small.pixels[0] = 0xFFFF_FFFF;
        composite_canvas(&mut big, &small);
        assert_eq!(big.pixels[0], 0x00FF_FFFF);
        assert_eq!(big.pixels[1], 0);
    }

    #[test]
    fn test_hud_text_lands_in_the_frame() {
        let mut fb = frame(60, 10, 0x0000_0000);
        draw_text_5x7(&mut fb, 0, 0, "FPS: 0.1", 0x00FF_FFFF);
        // 'F' has its top-left pixel set
        assert_eq!(fb.pixels[0], 0x00FF_FFFF);
        assert!(fb.pixels.iter().any(|&px| px == 0x00FF_FFFF));
    }
}
