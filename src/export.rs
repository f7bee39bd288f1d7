// Saves the rendered trace canvases to disk.
// Visual expectation: nothing changes on screen; a pair of PNG files named
// trail-<timestamp>-full.png and trail-<timestamp>-preview.png appears in
// the working directory.

use crate::canvas::Canvas;
use crate::error::Error;

use chrono::Local;
use std::path::{Path, PathBuf};

/// Save the full/preview canvas pair under a shared timestamp.
pub fn save_trace_pair(full: &Canvas, preview: &Canvas) -> Result<(PathBuf, PathBuf), Error> {
    let stamp = Local::now().format("%Y%m%d-%H%M%S");
    let full_path = PathBuf::from(format!("trail-{stamp}-full.png"));
    let preview_path = PathBuf::from(format!("trail-{stamp}-preview.png"));
    save_png(full, &full_path)?;
    save_png(preview, &preview_path)?;
    Ok((full_path, preview_path))
}

/// Encode one canvas as a straight-alpha RGBA8 PNG.
fn save_png(canvas: &Canvas, path: &Path) -> Result<(), Error> {
    image::save_buffer(
        path,
        &rgba_bytes(canvas),
        canvas.width as u32,
        canvas.height as u32,
        image::ExtendedColorType::Rgba8,
    )
    .map_err(|e| Error::Export(format!("{}: {e}", path.display())))
}

/// Unpack 0xAARRGGBB pixels into the R,G,B,A byte order PNG wants.
fn rgba_bytes(canvas: &Canvas) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(canvas.pixels.len() * 4);
    for &px in &canvas.pixels {
        bytes.push(((px >> 16) & 0xFF) as u8);
        bytes.push(((px >> 8) & 0xFF) as u8);
        bytes.push((px & 0xFF) as u8);
        bytes.push((px >> 24) as u8);
    }
    bytes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_bytes_unpacks_argb_pixels() {
        let mut c = Canvas::new(2, 1, 1.0);
        c.pixels[0] = 0x80FF_3FBF;
        c.pixels[1] = 0xD200_0000;
        assert_eq!(rgba_bytes(&c), vec![255, 63, 191, 128, 0, 0, 0, 210]);
    }
}
