// Copyright 2020 @TwoCookingMice

use super::constants::{Float, Vector3f, Vector4f};

use std::ops;

/// Tristimulus RGB color. Components are linear radiance values and are
/// not clamped to [0, 1]; tone mapping happens at the output boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RGBSpectrum {
    rgb: Vector3f,
}

impl Default for RGBSpectrum {
    fn default() -> Self {
        Self { rgb: Vector3f::new(0.0, 0.0, 0.0) }
    }
}

impl RGBSpectrum {
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        Self { rgb: Vector3f::new(r, g, b) }
    }

    pub fn from_rgb(rgb: Vector3f) -> Self {
        Self { rgb }
    }

    pub fn rgb(&self) -> Vector3f {
        self.rgb
    }

    /// Componentwise (Hadamard) product, used to filter light color
    /// through a material color.
    pub fn component_mul(&self, other: &RGBSpectrum) -> Self {
        Self { rgb: self.rgb.component_mul(&other.rgb) }
    }

    pub fn to_rgba(&self) -> Vector4f {
        Vector4f::new(self.rgb[0], self.rgb[1], self.rgb[2], 1.0)
    }

    pub fn is_black(&self) -> bool {
        self.rgb[0] == 0.0 && self.rgb[1] == 0.0 && self.rgb[2] == 0.0
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, index: usize) -> &Float {
        &self.rgb[index]
    }
}

impl ops::Add for RGBSpectrum {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self { rgb: self.rgb + rhs.rgb }
    }
}

impl ops::AddAssign for RGBSpectrum {
    fn add_assign(&mut self, rhs: Self) {
        self.rgb += rhs.rgb;
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = Self;

    fn mul(self, rhs: Float) -> Self {
        Self { rgb: self.rgb * rhs }
    }
}

impl ops::Div<Float> for RGBSpectrum {
    type Output = Self;

    fn div(self, rhs: Float) -> Self {
        Self { rgb: self.rgb / rhs }
    }
}

/* Tests for RGBSpectrum */
