// Copyright @yucwang 2023

use crate::core::interaction::RayIntersection;
use crate::emitters::point::PointLight;
use crate::math::constants::{Float, Vector4f};
use crate::math::spectrum::RGBSpectrum;

/// Local illumination model evaluated at a hit point for one light.
pub trait Material: crate::core::computation_node::ComputationNode + Send + Sync {
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Base albedo of the material.
    fn color(&self) -> RGBSpectrum;

    /// Mirror reflectance in [0, 1]. Not consumed by local shading; kept
    /// so every material exposes the same contract to the driver.
    fn reflectance(&self) -> Float;

    /// Outgoing radiance at the intersection for a single light, as RGBA
    /// with alpha fixed at 1. Pure: identical inputs yield identical
    /// output. The driver accumulates this over all lights.
    fn shade(&self, intersection: &RayIntersection, light: &PointLight) -> Vector4f;
}
