// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f};

/// A ray parameterized as `origin + lambda * dir`.
///
/// The direction is stored exactly as given. None of the intersection
/// routines require it to be unit length; the sphere solver accounts for
/// `|dir| != 1` through its quadratic coefficients, and shading normalizes
/// the view vector itself.
#[derive(Debug, Clone, Copy)]
pub struct Ray3f {
    origin: Vector3f,
    dir: Vector3f,
}

impl Ray3f {
    pub fn new(origin: Vector3f, dir: Vector3f) -> Self {
        Self { origin, dir }
    }

    pub fn origin(&self) -> Vector3f {
        self.origin
    }

    pub fn dir(&self) -> Vector3f {
        self.dir
    }

    pub fn at(&self, lambda: Float) -> Vector3f {
        self.origin + self.dir * lambda
    }
}

/* Tests for Ray */

#[cfg(test)]
mod tests {
    use super::Ray3f;
    use super::Vector3f;

    #[test]
    fn test_ray3f() {
        let o = Vector3f::new(1.0, 2.0, 3.0);
        let d = Vector3f::new(0.0, 0.0, -1.0);
        let ray = Ray3f::new(o, d);
        assert_eq!(o, ray.origin());
        assert_eq!(d, ray.dir());

        let p = ray.at(2.5);
        assert!((p[0] - 1.0).abs() < 1e-6);
        assert!((p[1] - 2.0).abs() < 1e-6);
        assert!((p[2] - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_ray3f_keeps_non_unit_dir() {
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 2.0));
        let p = ray.at(3.0);
        assert!((p[2] - 6.0).abs() < 1e-6);
    }
}
