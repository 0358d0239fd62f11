// Copyright @yucwang 2026

use crate::math::constants::Vector3f;
use crate::math::spectrum::RGBSpectrum;

/// Point light with separate ambient, diffuse and specular colors.
/// Diffuse and specular contributions fall off with the squared distance
/// to the shaded point; ambient does not.
pub struct PointLight {
    position: Vector3f,
    ambient_color: RGBSpectrum,
    diffuse_color: RGBSpectrum,
    specular_color: RGBSpectrum,
}

impl PointLight {
    pub fn new(position: Vector3f,
               ambient_color: RGBSpectrum,
               diffuse_color: RGBSpectrum,
               specular_color: RGBSpectrum) -> Self {
        Self { position, ambient_color, diffuse_color, specular_color }
    }

    pub fn position(&self) -> Vector3f {
        self.position
    }

    pub fn ambient_color(&self) -> RGBSpectrum {
        self.ambient_color
    }

    pub fn diffuse_color(&self) -> RGBSpectrum {
        self.diffuse_color
    }

    pub fn specular_color(&self) -> RGBSpectrum {
        self.specular_color
    }
}
