use crate::camera::PinholeCamera;
use crate::integrator::Integrator;
use crate::math::*;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use pbr::ProgressBar;
use rayon::prelude::*;

#[derive(Clone, Debug)]
pub struct Film<T> {
    pub buffer: Vec<T>,
    pub width: usize,
    pub height: usize,
}

impl<T: Copy> Film<T> {
    pub fn new(width: usize, height: usize, fill_value: T) -> Film<T> {
        Film {
            buffer: vec![fill_value; width * height],
            width,
            height,
        }
    }
    pub fn at(&self, x: usize, y: usize) -> T {
        self.buffer[y * self.width + x]
    }
    pub fn total_pixels(&self) -> usize {
        self.width * self.height
    }
}

/// one camera ray through the center of each pixel, pixels traced in parallel.
pub struct NaiveRenderer {
    pub show_progress: bool,
}

impl NaiveRenderer {
    pub fn new() -> NaiveRenderer {
        NaiveRenderer {
            show_progress: true,
        }
    }

    pub fn render<I: Integrator>(
        &self,
        integrator: &I,
        camera: &PinholeCamera,
        width: usize,
        height: usize,
    ) -> Film<RGBAColor> {
        info!("starting render with film resolution {}x{}", width, height);
        let now = Instant::now();
        let mut film: Film<RGBAColor> = Film::new(width, height, RGBAColor::BLACK);
        let total_pixels = film.total_pixels();

        let pixel_count = Arc::new(AtomicUsize::new(0));
        let progress = if self.show_progress {
            let clone = pixel_count.clone();
            Some(thread::spawn(move || {
                let mut pb = ProgressBar::new(total_pixels as u64);
                let mut local_index = 0;
                while local_index < total_pixels {
                    let pixels_to_increment = clone.load(Ordering::Relaxed) - local_index;
                    pb.add(pixels_to_increment as u64);
                    local_index += pixels_to_increment;
                    thread::sleep(Duration::from_millis(250));
                }
                pb.finish();
            }))
        } else {
            None
        };

        film.buffer
            .par_iter_mut()
            .enumerate()
            .for_each(|(pixel_index, pixel_ref)| {
                let y: usize = pixel_index / width;
                let x: usize = pixel_index - width * y;
                let ray = camera.get_ray(
                    (x as f32 + 0.5) / (width as f32),
                    (y as f32 + 0.5) / (height as f32),
                );
                *pixel_ref = integrator.color(ray);
                pixel_count.fetch_add(1, Ordering::Relaxed);
            });

        if let Some(handle) = progress {
            if let Err(panic) = handle.join() {
                warn!("progress bar thread panicked: {:?}", panic);
            }
        }
        info!(
            "rendered {} pixels in {}s",
            total_pixels,
            now.elapsed().as_millis() as f32 / 1000.0
        );
        film
    }
}

impl Default for NaiveRenderer {
    fn default() -> Self {
        NaiveRenderer::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrator::WhittedIntegrator;
    use crate::world::World;

    #[test]
    fn test_film_indexing() {
        let mut film = Film::new(3, 2, 0u8);
        film.buffer[4] = 7;
        assert_eq!(film.at(1, 1), 7);
        assert_eq!(film.total_pixels(), 6);
    }

    #[test]
    fn test_render_matches_per_pixel_trace() {
        let world = World::default_scene();
        let integrator = WhittedIntegrator::new(&world);
        let camera = PinholeCamera::new(Point3::origin(), 60.0, 1.0);
        let renderer = NaiveRenderer {
            show_progress: false,
        };
        let film = renderer.render(&integrator, &camera, 16, 16);
        assert_eq!(film.buffer.len(), 256);
        for (x, y) in [(0, 0), (8, 8), (15, 3), (4, 15)] {
            let ray = camera.get_ray((x as f32 + 0.5) / 16.0, (y as f32 + 0.5) / 16.0);
            assert_eq!(film.at(x, y), integrator.color(ray));
        }
        // top center looks between the spheres into empty space
        assert_eq!(film.at(8, 0), RGBAColor::BLACK);
    }
}
