//! PNG output for rendered scripts.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{BlocksError, Result};

use super::RenderedScript;

/// Write a rendered script to a PNG file.
pub fn write_png(rendered: &RenderedScript, path: &Path) -> Result<()> {
    let width = dimension(rendered.width(), &rendered.name)?;
    let height = dimension(rendered.height(), &rendered.name)?;

    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in (0..height).zip(rendered.pixels()) {
        for (x, colour) in (0..width).zip(row) {
            img.put_pixel(x, y, Rgba(colour.to_rgba()));
        }
    }

    img.save(path).map_err(|e| BlocksError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

fn dimension(pixels: usize, name: &str) -> Result<u32> {
    u32::try_from(pixels).map_err(|_| BlocksError::Render {
        message: format!("{} is {} pixels across, too large for PNG", name, pixels),
        help: None,
    })
}
