//! Light target types.

use nalgebra::{Point3, Vector3};
use portal_core::{Attenuation, Color};

/// Closed light family produced by the payload codec.
///
/// Each variant maps its payload fields one to one; diffuse colors arrive
/// decoded from their hex form.
#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Point {
        diffuse: Color,
        attenuation: Attenuation,
        location: Point3<f64>,
        intensity: f64,
    },
    Rectangular {
        diffuse: Color,
        attenuation: Attenuation,
        location: Point3<f64>,
        direction: Vector3<f64>,
        /// Edge vector spanning the long side of the rectangle.
        length: Vector3<f64>,
        /// Edge vector spanning the short side of the rectangle.
        width: Vector3<f64>,
        intensity: f64,
    },
    Spot {
        diffuse: Color,
        attenuation: Attenuation,
        location: Point3<f64>,
        direction: Vector3<f64>,
        intensity: f64,
        spot_angle_radians: f64,
        hot_spot: f64,
        shadow_intensity: f64,
    },
    Sun {
        diffuse: Color,
        attenuation: Attenuation,
        location: Point3<f64>,
        intensity: f64,
    },
}

impl Light {
    /// Diffuse color shared by every variant.
    pub fn diffuse(&self) -> Color {
        match self {
            Light::Point { diffuse, .. }
            | Light::Rectangular { diffuse, .. }
            | Light::Spot { diffuse, .. }
            | Light::Sun { diffuse, .. } => *diffuse,
        }
    }

    /// Location shared by every variant.
    pub fn location(&self) -> Point3<f64> {
        match self {
            Light::Point { location, .. }
            | Light::Rectangular { location, .. }
            | Light::Spot { location, .. }
            | Light::Sun { location, .. } => *location,
        }
    }

    /// Emission intensity shared by every variant.
    pub fn intensity(&self) -> f64 {
        match self {
            Light::Point { intensity, .. }
            | Light::Rectangular { intensity, .. }
            | Light::Spot { intensity, .. }
            | Light::Sun { intensity, .. } => *intensity,
        }
    }
}
