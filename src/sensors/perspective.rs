// Copyright @yucwang 2026

use crate::core::sensor::Sensor;
use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f, Vector3f};
use crate::math::ray::Ray3f;

pub struct PerspectiveCamera {
    origin: Vector3f,
    forward: Vector3f,
    right: Vector3f,
    up: Vector3f,
    tan_half_fov_y: Float,
    aspect: Float,
    far_clip: Float,
    bitmap: Bitmap,
}

impl PerspectiveCamera {
    pub fn new(origin: Vector3f,
               target: Vector3f,
               up: Vector3f,
               fov_y_radians: Float,
               far_clip: Float,
               width: usize,
               height: usize) -> Self {
        let forward = (target - origin).normalize();
        let right = forward.cross(&up).normalize();
        let up = right.cross(&forward).normalize();

        Self {
            origin,
            forward,
            right,
            up,
            tan_half_fov_y: (0.5 * fov_y_radians).tan(),
            aspect: width as Float / height as Float,
            far_clip,
            bitmap: Bitmap::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.bitmap.width()
    }

    pub fn height(&self) -> usize {
        self.bitmap.height()
    }
}

impl Sensor for PerspectiveCamera {
    /// The returned direction is unit length, so the far bound is the
    /// far clip distance directly.
    fn sample_ray(&self, u: &Vector2f) -> (Ray3f, Float) {
        let px = (2.0 * u.x - 1.0) * self.aspect * self.tan_half_fov_y;
        let py = (1.0 - 2.0 * u.y) * self.tan_half_fov_y;

        let dir = (self.right * px + self.up * py + self.forward).normalize();
        (Ray3f::new(self.origin, dir), self.far_clip)
    }

    fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    fn bitmap_mut(&mut self) -> &mut Bitmap {
        &mut self.bitmap
    }

    fn describe(&self) -> String {
        format!("PerspectiveCamera: {{ origin: {:?}, {}x{} }}",
                self.origin, self.width(), self.height())
    }
}

/* Tests for PerspectiveCamera */
