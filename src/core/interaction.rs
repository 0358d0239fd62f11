// Copyright @yucwang 2023

use crate::core::material::Material;
use crate::math::constants::{Float, Vector3f};
use crate::math::ray::Ray3f;
use std::sync::Arc;

/// Result of a successful ray/primitive intersection query.
///
/// Primitives construct this without a material; the scene attaches the
/// material of the winning object before handing the record to shading.
/// A `RayIntersection` never outlives the scene that produced it.
pub struct RayIntersection {
    ray: Ray3f,
    p: Vector3f,
    normal: Vector3f,
    lambda: Float,
    uvw: Vector3f,
    material: Option<Arc<dyn Material>>,
}

impl RayIntersection {
    pub fn new(ray: Ray3f,
               p: Vector3f,
               normal: Vector3f,
               lambda: Float,
               uvw: Vector3f) -> Self {
        Self { ray, p, normal, lambda, uvw, material: None }
    }

    pub fn ray(&self) -> &Ray3f {
        &self.ray
    }

    pub fn p(&self) -> Vector3f {
        self.p
    }

    /// Unit surface normal at the hit point.
    pub fn normal(&self) -> Vector3f {
        self.normal
    }

    pub fn lambda(&self) -> Float {
        self.lambda
    }

    /// Texture coordinate placeholder. Always zero; shading does not
    /// consume it.
    pub fn uvw(&self) -> Vector3f {
        self.uvw
    }

    pub fn material(&self) -> Option<&dyn Material> {
        self.material.as_deref()
    }

    pub fn with_material(self, material: Arc<dyn Material>) -> Self {
        Self { material: Some(material), ..self }
    }
}
