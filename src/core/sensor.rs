// Copyright @yucwang 2026

use crate::math::bitmap::Bitmap;
use crate::math::constants::{Float, Vector2f};
use crate::math::ray::Ray3f;

/// Source of primary rays, one per pixel of its bitmap.
pub trait Sensor: Sync {
    /// Primary ray through the normalized pixel coordinate `u`
    /// ([0, 1]^2, origin top-left), together with the far bound
    /// (max lambda) intersection queries along that ray should use.
    fn sample_ray(&self, u: &Vector2f) -> (Ray3f, Float);

    fn bitmap(&self) -> &Bitmap;

    fn bitmap_mut(&mut self) -> &mut Bitmap;

    fn describe(&self) -> String {
        String::from("Sensor: {}")
    }
}
