// What you SEE now:
// • A window whose backdrop carries the evolving trace of your pointer.
// • Move the mouse (even with the window unfocused): thin strokes follow it;
//   in COLOR mode the hue follows the movement direction.
// • Linger somewhere, then move on: a fading halo marks how long you stayed.
// • C toggles the color scheme, M toggles dwell marks, X clears the trace,
//   S saves the full+preview PNG pair. ESC quits.

mod canvas;
mod color;
mod error;
mod export;
mod pointer;
mod screen;
mod trace;
mod types;

use error::Error;
use log::LevelFilter;
use pointer::PointerSampler;
use screen::{TraceScreen, composite_canvas, draw_text_5x7, fill};
use std::time::{Duration, Instant};
use trace::PathRenderer;
use types::{FrameBuffer, TraceConfig};

/// Window size at startup; afterwards the tracked rectangle follows the window.
const INITIAL_WIDTH: usize = 800;
const INITIAL_HEIGHT: usize = 600;
/// Preview canvas size relative to the full canvas.
const PREVIEW_SCALE: f32 = 0.25;
/// One pointer sample and one frame per tick.
const TICK_FPS: usize = 60;
/// How long the SAVED notice stays in the HUD.
const SAVED_NOTICE: Duration = Duration::from_secs(2);

fn main() -> Result<(), Error> {
    env_logger::builder().filter_level(LevelFilter::Info).init();

    /* --- Pointer + window setup ---
       Visual: an empty window appears; the cursor is sampled globally. */
    let sampler = PointerSampler::new();
    let mut screen = TraceScreen::new("Mouse Trails", INITIAL_WIDTH, INITIAL_HEIGHT, TICK_FPS)?;

    /* --- Renderer over the window's global rectangle ---
       Visual: nothing yet; the canvases start as the mode background. */
    let mut cfg = TraceConfig::default();
    let mut renderer = PathRenderer::new(screen.global_rect(), PREVIEW_SCALE, cfg);
    renderer.prepare_for_update(sampler.sample());
    let rect = renderer.rect();
    log::info!("tracking {}x{} at ({}, {})", rect.width, rect.height, rect.x, rect.y);

    /* --- Reusable presentation frame ---
       Visual: this is the image you actually see each frame. */
    let mut frame = FrameBuffer {
        width: rect.width,
        height: rect.height,
        pixels: vec![0u32; rect.width * rect.height],
    };

    /* --- HUD / FPS --- */
    let mut last_fps_time = Instant::now();
    let mut frames_this_second: u32 = 0;
    let mut hud_fps_text = String::from("FPS: 0.0");
    let mut saved_at: Option<Instant> = None;

    /* ------------------------------ Main loop ------------------------------ */
    while screen.is_open() && !screen.esc_pressed() {
        let now = Instant::now();

        /* 1) Follow the window. Moving or resizing re-targets the renderer:
           both canvases reset to the background and tracking restarts. */
        let rect = screen.global_rect();
        if rect != renderer.rect() {
            renderer.setup(rect, PREVIEW_SCALE, cfg);
            renderer.prepare_for_update(sampler.sample());
            if frame.width != rect.width || frame.height != rect.height {
                frame = FrameBuffer {
                    width: rect.width,
                    height: rect.height,
                    pixels: vec![0u32; rect.width * rect.height],
                };
            }
            log::info!("tracking {}x{} at ({}, {})", rect.width, rect.height, rect.x, rect.y);
        }

        /* 2) Inputs */
        if screen.c_pressed_once() {
            cfg.use_color_scheme = !cfg.use_color_scheme; // visual: new strokes pick up the new palette
            log::info!("color scheme {}", if cfg.use_color_scheme { "on" } else { "off" });
        }
        if screen.m_pressed_once() {
            cfg.ignore_mouse_stops = !cfg.ignore_mouse_stops; // visual: dwell halos stop/resume appearing
            log::info!("dwell marks {}", if cfg.ignore_mouse_stops { "off" } else { "on" });
        }
        if screen.x_pressed_once() {
            renderer.clear(cfg); // visual: the trace disappears
            log::info!("canvases cleared");
        }
        if screen.s_pressed_once() {
            match export::save_trace_pair(renderer.full(), renderer.preview()) {
                Ok((full_path, preview_path)) => {
                    log::info!("saved {} and {}", full_path.display(), preview_path.display());
                    saved_at = Some(now);
                }
                Err(e) => log::error!("{e}"),
            }
        }

        /* 3) Feed this tick's pointer sample to the renderer.
           Visual: a stroke if the pointer moved; maybe a halo if a dwell ended. */
        renderer.update(sampler.sample(), cfg);

        /* 4) Compose the frame: backdrop, then the trace, then the HUD. */
        let backdrop = if cfg.use_color_scheme { 0x00_20_20_20 } else { 0x00_FF_FF_FF };
        fill(&mut frame, backdrop);
        composite_canvas(&mut frame, renderer.full());

        let mode = if cfg.use_color_scheme { "COLOR" } else { "MONO" };
        let marks = if cfg.ignore_mouse_stops { "MARKS OFF" } else { "MARKS ON" };
        let mut hud = format!("{mode} | {marks} | {hud_fps_text}");
        if saved_at.is_some_and(|t| now.duration_since(t) < SAVED_NOTICE) {
            hud.push_str(" | SAVED");
        }
        let hud_color = if cfg.use_color_scheme { 0x00_FF_FF_FF } else { 0x00_00_00_00 };
        draw_text_5x7(&mut frame, 8, 8, &hud, hud_color);

        /* 5) Present to the window (this is when the on-screen image updates). */
        screen.present(&frame)?;

        /* 6) FPS counter (debug log + HUD, once per second) */
        frames_this_second += 1;
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let fps = frames_this_second as f32 / secs;
            log::debug!("FPS: {fps:.1}");
            hud_fps_text = format!("FPS: {fps:.1}");
            frames_this_second = 0;
            last_fps_time = now;
        }
    }

    Ok(())
}
