// Copyright @yucwang 2021

use crate::core::scene::Scene;
use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;

pub use super::renderer::Renderer;

/// Per-pixel forward renderer. Rays are independent of each other and
/// the scene is read-only during rendering, so rows are distributed over
/// scoped worker threads without locking.
pub struct SimpleRenderer {
    background: Vector3f,
    thread_count: usize,
}

impl SimpleRenderer {
    pub fn new(background: Vector3f, thread_count: Option<usize>) -> Self {
        let thread_count = thread_count.unwrap_or_else(|| {
            thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
        });
        Self { background, thread_count }
    }

    fn render_row(&self, scene: &Scene, sensor: &dyn Sensor,
                  y: usize, width: usize, height: usize) -> Vec<Vector3f> {
        let mut row = vec![Vector3f::zeros(); width];
        for x in 0..width {
            let u = Vector2f::new((x as Float + 0.5) / width as Float,
                                  (y as Float + 0.5) / height as Float);
            let (ray, max_lambda) = sensor.sample_ray(&u);
            row[x] = match scene.closest_intersection(&ray, max_lambda) {
                Some(hit) => {
                    let rgba = scene.shade(&hit);
                    Vector3f::new(rgba[0], rgba[1], rgba[2])
                }
                None => self.background,
            };
        }
        row
    }
}

impl Renderer for SimpleRenderer {
    fn render(&self, scene: &Scene, sensor: &mut dyn Sensor) -> Bitmap {
        let (width, height) = {
            let bmp = sensor.bitmap();
            (bmp.width(), bmp.height())
        };
        if width == 0 || height == 0 {
            return Bitmap::new(0, 0);
        }

        log::info!("Rendering {}x{} on {} threads.", width, height, self.thread_count);

        let progress = ProgressBar::new(height as u64);
        progress.set_style(
            ProgressStyle::with_template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} rows")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );

        let next_row = Arc::new(AtomicUsize::new(0));
        let sensor_ref: &dyn Sensor = sensor;
        let (tx, rx) = mpsc::channel::<(usize, Vec<Vector3f>)>();
        let mut output = vec![Vector3f::zeros(); width * height];

        thread::scope(|scope| {
            for _ in 0..self.thread_count {
                let next_row = Arc::clone(&next_row);
                let tx = tx.clone();
                scope.spawn(move || loop {
                    let y = next_row.fetch_add(1, Ordering::Relaxed);
                    if y >= height {
                        break;
                    }
                    let row = self.render_row(scene, sensor_ref, y, width, height);
                    if tx.send((y, row)).is_err() {
                        break;
                    }
                });
            }

            drop(tx);
            for _ in 0..height {
                if let Ok((y, row)) = rx.recv() {
                    for x in 0..width {
                        output[x + width * y] = row[x];
                    }
                    progress.inc(1);
                }
            }
        });
        progress.finish_and_clear();

        let bitmap = sensor.bitmap_mut();
        for y in 0..height {
            for x in 0..width {
                bitmap[(x, y)] = output[x + width * y];
            }
        }
        bitmap.clone()
    }
}

/* Tests for SimpleRenderer */
