use crate::math::RGBAColor;
use crate::renderer::Film;

use std::fs;
use std::path::Path;
use std::time::Instant;

use anyhow::Context;

pub trait Tonemapper: Send + Sync {
    // should map a pixel from linear film values to 8 bit rgba
    fn map(&self, film: &Film<RGBAColor>, pixel: (usize, usize)) -> [u8; 4];
}

/// scales color channels by 10^exposure and clamps to [0, 1]. alpha is only clamped.
#[derive(Copy, Clone, Debug)]
pub struct Clamp {
    exposure: f32,
}

impl Clamp {
    pub fn new(exposure: f32) -> Self {
        Self { exposure }
    }
}

fn quantize(value: f32) -> u8 {
    // NaN clamps to 0
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

impl Tonemapper for Clamp {
    fn map(&self, film: &Film<RGBAColor>, pixel: (usize, usize)) -> [u8; 4] {
        let color = film.at(pixel.0, pixel.1);
        if !color.is_finite() {
            // mauve. universal sign of danger
            return [224, 176, 255, 255];
        }
        let scale = 10.0f32.powf(self.exposure);
        [
            quantize(color.r() * scale),
            quantize(color.g() * scale),
            quantize(color.b() * scale),
            quantize(color.a()),
        ]
    }
}

pub fn write_png(
    film: &Film<RGBAColor>,
    tonemapper: &dyn Tonemapper,
    png_filename: &Path,
) -> anyhow::Result<()> {
    let now = Instant::now();
    if let Some(parent) = png_filename.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
    }
    let mut img: image::RgbaImage = image::ImageBuffer::new(film.width as u32, film.height as u32);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        *pixel = image::Rgba(tonemapper.map(film, (x as usize, y as usize)));
    }
    img.save(png_filename)
        .with_context(|| format!("failed to save image to {}", png_filename.display()))?;
    info!(
        "saved {} in {}s",
        png_filename.display(),
        now.elapsed().as_millis() as f32 / 1000.0
    );
    Ok(())
}
