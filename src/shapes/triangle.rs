// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::RayIntersection;
use crate::core::renderable::Renderable;
use crate::math::constants::{EPSILON, Float, Vector3f};
use crate::math::ray::Ray3f;

/// Triangle defined by three vertices, optionally carrying per-vertex
/// texture coordinates. The coordinates are stored for mesh
/// compatibility; shading does not consume them and intersections report
/// a zero placeholder.
///
/// Precondition: vertices are not collinear. A degenerate triangle is a
/// caller error and is not checked here.
pub struct Triangle {
    vertices: [Vector3f; 3],
    uvw: [Vector3f; 3],
}

impl Triangle {
    pub fn new(v0: Vector3f, v1: Vector3f, v2: Vector3f) -> Self {
        Self {
            vertices: [v0, v1, v2],
            uvw: [Vector3f::zeros(); 3],
        }
    }

    pub fn with_uvw(v0: Vector3f, v1: Vector3f, v2: Vector3f,
                    uvw0: Vector3f, uvw1: Vector3f, uvw2: Vector3f) -> Self {
        Self {
            vertices: [v0, v1, v2],
            uvw: [uvw0, uvw1, uvw2],
        }
    }

    pub fn vertices(&self) -> &[Vector3f; 3] {
        &self.vertices
    }

    pub fn geometric_normal(&self) -> Vector3f {
        let t1 = self.vertices[1] - self.vertices[0];
        let t2 = self.vertices[2] - self.vertices[0];
        t1.cross(&t2).normalize()
    }

    /// Barycentric coordinates (b1, b2) of `p` with respect to edges
    /// v1 - v0 and v2 - v0, via Cramer's rule on the 2x2 Gram system.
    /// `p` is assumed to lie on the triangle's plane.
    fn barycentric(&self, p: &Vector3f) -> Option<(Float, Float)> {
        let t1 = self.vertices[1] - self.vertices[0];
        let t2 = self.vertices[2] - self.vertices[0];
        let w = *p - self.vertices[0];

        let d11 = t1.dot(&t1);
        let d12 = t1.dot(&t2);
        let d22 = t2.dot(&t2);
        let dw1 = w.dot(&t1);
        let dw2 = w.dot(&t2);

        let denom = d11 * d22 - d12 * d12;
        if denom.abs() <= EPSILON {
            return None;
        }

        let b1 = (d22 * dw1 - d12 * dw2) / denom;
        let b2 = (d11 * dw2 - d12 * dw1) / denom;
        Some((b1, b2))
    }
}

impl ComputationNode for Triangle {
    fn to_string(&self) -> String {
        format!("Triangle: {{ vertices: {:?} }}", self.vertices)
    }
}

impl Renderable for Triangle {
    fn closest_intersection(&self, ray: &Ray3f, max_lambda: Float) -> Option<RayIntersection> {
        let n = self.geometric_normal();

        let d_dot_n = ray.dir().dot(&n);
        if d_dot_n.abs() <= EPSILON {
            // Parallel to the plane.
            return None;
        }

        let lambda = (self.vertices[0] - ray.origin()).dot(&n) / d_dot_n;
        if lambda < 0.0 || lambda + EPSILON > max_lambda {
            return None;
        }

        let p = ray.at(lambda);
        let (b1, b2) = self.barycentric(&p)?;
        if b1 < 0.0 || b2 < 0.0 || b1 + b2 > 1.0 {
            return None;
        }

        Some(RayIntersection::new(*ray, p, n, lambda, Vector3f::zeros()))
    }
}

/* Tests for Triangle */

#[cfg(test)]
mod tests {
    use super::*;

    const MAX_LAMBDA: Float = 1.0e6;

    fn unit_triangle() -> Triangle {
        Triangle::new(Vector3f::new(0.0, 0.0, 0.0),
                      Vector3f::new(1.0, 0.0, 0.0),
                      Vector3f::new(0.0, 1.0, 0.0))
    }

    #[test]
    fn test_hit_inside() {
        let triangle = unit_triangle();
        let ray = Ray3f::new(Vector3f::new(0.25, 0.25, 1.0), Vector3f::new(0.0, 0.0, -1.0));

        let hit = triangle.closest_intersection(&ray, MAX_LAMBDA).unwrap();
        assert!((hit.lambda() - 1.0).abs() < 1e-4);
        assert!((hit.p() - Vector3f::new(0.25, 0.25, 0.0)).norm() < 1e-4);
        assert!((hit.normal().norm() - 1.0).abs() < 1e-5);
        assert_eq!(hit.uvw(), Vector3f::zeros());
    }

    #[test]
    fn test_miss_beyond_hypotenuse() {
        let triangle = unit_triangle();
        let ray = Ray3f::new(Vector3f::new(0.9, 0.9, 1.0), Vector3f::new(0.0, 0.0, -1.0));

        assert!(triangle.closest_intersection(&ray, MAX_LAMBDA).is_none());
        assert!(!triangle.any_intersection(&ray, MAX_LAMBDA));
    }

    #[test]
    fn test_miss_negative_barycentric() {
        let triangle = unit_triangle();
        let ray = Ray3f::new(Vector3f::new(-0.1, 0.5, 1.0), Vector3f::new(0.0, 0.0, -1.0));

        assert!(triangle.closest_intersection(&ray, MAX_LAMBDA).is_none());
    }

    #[test]
    fn test_parallel_ray_misses() {
        let triangle = unit_triangle();
        let ray = Ray3f::new(Vector3f::new(0.25, 0.25, 1.0), Vector3f::new(1.0, 0.0, 0.0));

        assert!(triangle.closest_intersection(&ray, MAX_LAMBDA).is_none());
    }

    #[test]
    fn test_plane_behind_origin_misses() {
        let triangle = unit_triangle();
        let ray = Ray3f::new(Vector3f::new(0.25, 0.25, 1.0), Vector3f::new(0.0, 0.0, 1.0));

        assert!(triangle.closest_intersection(&ray, MAX_LAMBDA).is_none());
    }

    #[test]
    fn test_max_lambda_bound() {
        let triangle = unit_triangle();
        let ray = Ray3f::new(Vector3f::new(0.25, 0.25, 1.0), Vector3f::new(0.0, 0.0, -1.0));

        assert!(triangle.closest_intersection(&ray, 0.5).is_none());
        let hit = triangle.closest_intersection(&ray, 2.0).unwrap();
        assert!(hit.lambda() >= 0.0);
        assert!(hit.lambda() < 2.0);
    }

    #[test]
    fn test_barycentric_at_vertices_and_center() {
        let triangle = unit_triangle();
        let (b1, b2) = triangle.barycentric(&Vector3f::new(0.0, 0.0, 0.0)).unwrap();
        assert!(b1.abs() < 1e-5 && b2.abs() < 1e-5);

        let (b1, b2) = triangle.barycentric(&Vector3f::new(1.0, 0.0, 0.0)).unwrap();
        assert!((b1 - 1.0).abs() < 1e-5 && b2.abs() < 1e-5);

        let centroid = Vector3f::new(1.0 / 3.0, 1.0 / 3.0, 0.0);
        let (b1, b2) = triangle.barycentric(&centroid).unwrap();
        assert!((b1 - 1.0 / 3.0).abs() < 1e-5);
        assert!((b2 - 1.0 / 3.0).abs() < 1e-5);
    }
}
