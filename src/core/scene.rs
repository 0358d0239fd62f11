// Copyright @yucwang 2026

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::RayIntersection;
use crate::core::material::Material;
use crate::core::renderable::Renderable;
use crate::emitters::point::PointLight;
use crate::math::constants::{Float, Vector4f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

pub struct SceneObject {
    pub renderable: Arc<dyn Renderable>,
    pub material: Arc<dyn Material>,
}

impl SceneObject {
    pub fn new(renderable: Arc<dyn Renderable>, material: Arc<dyn Material>) -> Self {
        Self { renderable, material }
    }
}

pub struct Scene {
    objects: Vec<SceneObject>,
    lights: Vec<PointLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            objects: Vec::new(),
            lights: Vec::new(),
        }
    }

    pub fn with_objects(objects: Vec<SceneObject>, lights: Vec<PointLight>) -> Self {
        Self { objects, lights }
    }

    pub fn add_object(&mut self, object: SceneObject) {
        log::debug!("Adding {} with material {}.",
                    object.renderable.to_string(),
                    object.material.name());
        self.objects.push(object);
    }

    pub fn add_light(&mut self, light: PointLight) {
        self.lights.push(light);
    }

    pub fn objects(&self) -> &[SceneObject] {
        &self.objects
    }

    pub fn lights(&self) -> &[PointLight] {
        &self.lights
    }

    /// Nearest hit over all objects, with the winning object's material
    /// attached. Linear scan; each accepted hit shrinks the lambda bound
    /// for the remaining objects, so the min-reduction is order
    /// independent.
    pub fn closest_intersection(&self, ray: &Ray3f, max_lambda: Float) -> Option<RayIntersection> {
        let mut bound = max_lambda;
        let mut best: Option<(usize, RayIntersection)> = None;

        for (idx, object) in self.objects.iter().enumerate() {
            if let Some(hit) = object.renderable.closest_intersection(ray, bound) {
                bound = hit.lambda();
                best = Some((idx, hit));
            }
        }

        best.map(|(idx, hit)| hit.with_material(self.objects[idx].material.clone()))
    }

    /// Whether anything blocks the ray within `max_lambda`. Short
    /// circuits on the first hit.
    pub fn any_intersection(&self, ray: &Ray3f, max_lambda: Float) -> bool {
        self.objects
            .iter()
            .any(|object| object.renderable.any_intersection(ray, max_lambda))
    }

    /// Sum of per-light shading contributions at the hit point. Alpha is
    /// pinned back to 1 after summation.
    pub fn shade(&self, intersection: &RayIntersection) -> Vector4f {
        let material = match intersection.material() {
            Some(material) => material,
            None => return Vector4f::new(0.0, 0.0, 0.0, 1.0),
        };

        let mut color = Vector4f::new(0.0, 0.0, 0.0, 0.0);
        for light in &self.lights {
            color += material.shade(intersection, light);
        }
        color[3] = 1.0;
        color
    }
}

/* Tests for Scene */
