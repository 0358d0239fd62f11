// Copyright @yucwang 2023

use crate::core::interaction::RayIntersection;
use crate::math::constants::Float;
use crate::math::ray::Ray3f;

/// A geometric primitive that a ray can be tested against.
///
/// `Send + Sync` because a scene is shared read-only across render worker
/// threads; primitives never mutate after construction.
pub trait Renderable: crate::core::computation_node::ComputationNode + Send + Sync {
    /// Nearest hit with parameter in `[0, max_lambda)`, or `None`.
    ///
    /// Reported normals are unit length for every primitive.
    fn closest_intersection(&self, ray: &Ray3f, max_lambda: Float) -> Option<RayIntersection>;

    /// Whether any valid hit exists; the hit itself is discarded.
    fn any_intersection(&self, ray: &Ray3f, max_lambda: Float) -> bool {
        self.closest_intersection(ray, max_lambda).is_some()
    }
}
