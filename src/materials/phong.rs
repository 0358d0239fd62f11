// Copyright @yucwang 2023

use crate::core::computation_node::ComputationNode;
use crate::core::interaction::RayIntersection;
use crate::core::material::Material;
use crate::emitters::point::PointLight;
use crate::math::constants::{EPSILON, Float, Vector4f};
use crate::math::spectrum::RGBSpectrum;

/// Scale applied once to every material color at construction, bringing
/// the ambient/diffuse/specular products into a usable range after the
/// inverse-square falloff.
const LIGHT_INTENSITY: Float = 100.0;

/// Weight of the ambient term. Ambient light is not attenuated with
/// distance.
const AMBIENT_STRENGTH: Float = 0.005;

/// Material lit with the Phong illumination model: ambient plus
/// distance-attenuated diffuse and specular terms, summed per light.
pub struct PhongMaterial {
    color: RGBSpectrum,
    reflectance: Float,
    shininess: Float,
    ambient_color: RGBSpectrum,
    diffuse_color: RGBSpectrum,
    specular_color: RGBSpectrum,
}

impl PhongMaterial {
    pub fn new(color: RGBSpectrum,
               reflectance: Float,
               shininess: Float,
               ambient_color: RGBSpectrum,
               diffuse_color: RGBSpectrum,
               specular_color: RGBSpectrum) -> Self {
        Self {
            color,
            reflectance,
            shininess,
            ambient_color: ambient_color * LIGHT_INTENSITY,
            diffuse_color: diffuse_color * LIGHT_INTENSITY,
            specular_color: specular_color * LIGHT_INTENSITY,
        }
    }

    pub fn shininess(&self) -> Float {
        self.shininess
    }
}

impl ComputationNode for PhongMaterial {
    fn to_string(&self) -> String {
        format!("PhongMaterial: {{ shininess: {} }}", self.shininess)
    }
}

impl Material for PhongMaterial {
    fn color(&self) -> RGBSpectrum {
        self.color
    }

    fn reflectance(&self) -> Float {
        self.reflectance
    }

    fn shade(&self, intersection: &RayIntersection, light: &PointLight) -> Vector4f {
        let n = intersection.normal();

        let to_light = light.position() - intersection.p();
        let distance2 = to_light.norm_squared();
        if distance2 <= EPSILON * EPSILON {
            // Light coincides with the hit point. Saturate instead of
            // dividing by zero.
            return Vector4f::new(1.0, 1.0, 1.0, 1.0);
        }

        let l = to_light / distance2.sqrt();
        let cos_nl = n.dot(&l).max(0.0);

        // View vector points from the hit point toward the eye, against
        // the incoming ray. The mirror lobe is dark for lights at or
        // below the horizon (cosNL = 0), whatever angle R happens to
        // make with V there.
        let r = (n * (2.0 * cos_nl) - l).normalize();
        let v = -intersection.ray().dir().normalize();
        let cos_rv = if cos_nl > 0.0 { r.dot(&v).max(0.0) } else { 0.0 };

        let ambient = self.ambient_color.component_mul(&light.ambient_color()) * AMBIENT_STRENGTH;
        let diffuse = self.diffuse_color.component_mul(&light.diffuse_color()) * cos_nl / distance2;
        let specular = self.specular_color.component_mul(&light.specular_color())
            * cos_rv.powf(self.shininess)
            / distance2;

        (ambient + diffuse + specular).to_rgba()
    }
}

/* Tests for PhongMaterial */
