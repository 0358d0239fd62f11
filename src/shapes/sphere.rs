// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::RayIntersection;
use crate::core::renderable::Renderable;
use crate::math::constants::{EPSILON, Float, Vector3f};
use crate::math::ray::Ray3f;

/// Sphere defined by a center point and a radius.
///
/// Precondition: `radius > 0`. A zero or negative radius is a caller
/// error and is not checked here.
pub struct Sphere {
    center: Vector3f,
    radius: Float,
}

impl Sphere {
    pub fn new(center: Vector3f, radius: Float) -> Self {
        Self { center, radius }
    }

    pub fn center(&self) -> Vector3f {
        self.center
    }

    pub fn radius(&self) -> Float {
        self.radius
    }
}

/// Pick the hit parameter from the two quadratic roots: the smallest
/// non-negative one, or `None` when the sphere lies entirely behind the
/// ray origin. Kept separate so the sign cases (origin inside the sphere,
/// sphere behind the ray, tangent ray) are testable on their own.
fn select_root(lambda1: Float, lambda2: Float) -> Option<Float> {
    match (lambda1 >= 0.0, lambda2 >= 0.0) {
        (true, true) => Some(lambda1.min(lambda2)),
        (true, false) => Some(lambda1),
        (false, true) => Some(lambda2),
        (false, false) => None,
    }
}

impl ComputationNode for Sphere {
    fn to_string(&self) -> String {
        format!("Sphere: {{ center: {:?}, radius: {} }}", self.center, self.radius)
    }
}

impl Renderable for Sphere {
    fn closest_intersection(&self, ray: &Ray3f, max_lambda: Float) -> Option<RayIntersection> {
        let x = ray.origin();
        let d = ray.dir();
        let oc = x - self.center;

        // |x + lambda * d - c|^2 = r^2, solved for lambda. The `a`
        // coefficient keeps this correct for non-unit directions.
        let a = d.dot(&d);
        let b = 2.0 * d.dot(&oc);
        let c = oc.dot(&oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant < 0.0 {
            return None;
        }

        let sqrt_d = discriminant.sqrt();
        let lambda1 = (-b + sqrt_d) / (2.0 * a);
        let lambda2 = (-b - sqrt_d) / (2.0 * a);

        let lambda = select_root(lambda1, lambda2)?;
        if lambda + EPSILON > max_lambda {
            return None;
        }

        let p = ray.at(lambda);
        let normal = (p - self.center).normalize();
        Some(RayIntersection::new(*ray, p, normal, lambda, Vector3f::zeros()))
    }
}

/* Tests for Sphere */

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_LAMBDA: Float = 1.0e6;

    #[test]
    fn test_select_root_table() {
        assert_eq!(select_root(2.0, 3.0), Some(2.0));
        assert_eq!(select_root(3.0, 2.0), Some(2.0));
        assert_eq!(select_root(2.0, -1.0), Some(2.0));
        assert_eq!(select_root(-1.0, 2.0), Some(2.0));
        assert_eq!(select_root(-1.0, -2.0), None);
        // Tangent ray: both roots coincide.
        assert_eq!(select_root(4.0, 4.0), Some(4.0));
    }

    #[test]
    fn test_near_surface_hit() {
        // From (0, 0, -2r) toward +z the near surface is at lambda = r.
        let r = 2.0;
        let sphere = Sphere::new(Vector3f::zeros(), r);
        let ray = Ray3f::new(Vector3f::new(0.0, 0.0, -2.0 * r), Vector3f::new(0.0, 0.0, 1.0));

        let hit = sphere.closest_intersection(&ray, MAX_LAMBDA).unwrap();
        assert!((hit.lambda() - r).abs() < 1e-4);
        assert!((hit.p() - Vector3f::new(0.0, 0.0, -r)).norm() < 1e-4);
        assert!((hit.normal() - Vector3f::new(0.0, 0.0, -1.0)).norm() < 1e-4);
        assert!((hit.normal().norm() - 1.0).abs() < 1e-5);
        assert_eq!(hit.uvw(), Vector3f::zeros());
    }

    #[test]
    fn test_ray_pointing_away_misses() {
        let sphere = Sphere::new(Vector3f::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, -1.0));

        assert!(!sphere.any_intersection(&ray, MAX_LAMBDA));
        assert!(!sphere.any_intersection(&ray, 0.1));
    }

    #[test]
    fn test_origin_inside_sphere_takes_exit_root() {
        let sphere = Sphere::new(Vector3f::zeros(), 1.0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0));

        let hit = sphere.closest_intersection(&ray, MAX_LAMBDA).unwrap();
        assert!((hit.lambda() - 1.0).abs() < 1e-4);
    }

    #[test]
    fn test_max_lambda_bound() {
        let sphere = Sphere::new(Vector3f::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 1.0));

        // Near surface is at lambda = 4.
        assert!(sphere.closest_intersection(&ray, 3.0).is_none());
        let hit = sphere.closest_intersection(&ray, MAX_LAMBDA).unwrap();
        assert!(hit.lambda() >= 0.0);
        assert!(hit.lambda() < MAX_LAMBDA);
    }

    #[test]
    fn test_non_unit_direction_scales_lambda() {
        let sphere = Sphere::new(Vector3f::new(0.0, 0.0, 4.0), 1.0);
        let ray = Ray3f::new(Vector3f::zeros(), Vector3f::new(0.0, 0.0, 2.0));

        // Doubling the direction halves the hit parameter.
        let hit = sphere.closest_intersection(&ray, MAX_LAMBDA).unwrap();
        assert!((hit.lambda() - 1.5).abs() < 1e-4);
        assert!((hit.p()[2] - 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_miss_off_axis() {
        let sphere = Sphere::new(Vector3f::new(0.0, 0.0, 5.0), 1.0);
        let ray = Ray3f::new(Vector3f::new(3.0, 0.0, 0.0), Vector3f::new(0.0, 0.0, 1.0));

        assert!(sphere.closest_intersection(&ray, MAX_LAMBDA).is_none());
    }
}
