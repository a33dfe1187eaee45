// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wire coordinate types.
//!
//! The interchange format carries coordinates as `{"X": .., "Y": .., "Z": ..}`
//! objects in two concrete precisions. The 64-bit [`Vector3D`] is the default
//! for points, curve control points and light fields; the 32-bit [`Vector3F`]
//! exists for hosts whose render meshes are single-precision. They are
//! deliberately separate types, not a generic: precision is part of the wire
//! contract, and a value validated for one precision must not be reused as
//! the other.
//!
//! [`Vector3D::from_value`] / [`Vector3F::from_value`] probe an untyped JSON
//! value for the three members before anything is trusted as a coordinate.
//! Numeric strings are accepted there because the legacy serializer emitted
//! them; the strict serde derive used inside typed bodies takes numbers only.

use serde::Deserialize;
use serde_json::Value;

/// Norm tolerance used by `is_normalized` callers that have no tighter
/// requirement.
pub const DEFAULT_NORMAL_TOLERANCE: f64 = 1e-4;

/// 64-bit 3D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vector3D {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// 32-bit 3D coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vector3F {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// 64-bit 2D coordinate, carried by mesh texture coordinate lists.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector3D {
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Decode a coordinate from an untyped JSON value.
    ///
    /// Returns `None` unless `X`, `Y` and `Z` members all exist, are
    /// non-null and each parse as `f64`. Never panics.
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            x: parse_f64(value.get("X"))?,
            y: parse_f64(value.get("Y"))?,
            z: parse_f64(value.get("Z"))?,
        })
    }

    /// Structural guard: true iff `value` would decode via [`from_value`].
    ///
    /// Extra unrelated members do not affect the outcome.
    ///
    /// [`from_value`]: Self::from_value
    pub fn validate(value: &Value) -> bool {
        Self::from_value(value).is_some()
    }

    /// Euclidean norm.
    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Direction of this vector, or `None` when the norm is zero.
    pub fn normalize(&self) -> Option<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return None;
        }
        Some(Self::new(self.x / norm, self.y / norm, self.z / norm))
    }

    /// Whether the norm is within `tolerance` of 1.0.
    /// See [`DEFAULT_NORMAL_TOLERANCE`].
    #[inline]
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() < tolerance
    }
}

impl Vector3F {
    #[inline]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Decode a coordinate from an untyped JSON value at 32-bit precision.
    ///
    /// A finite `f64` that overflows `f32` does not parse as this precision.
    pub fn from_value(value: &Value) -> Option<Self> {
        Some(Self {
            x: parse_f32(value.get("X"))?,
            y: parse_f32(value.get("Y"))?,
            z: parse_f32(value.get("Z"))?,
        })
    }

    /// Structural guard: true iff `value` would decode via [`from_value`].
    ///
    /// [`from_value`]: Self::from_value
    pub fn validate(value: &Value) -> bool {
        Self::from_value(value).is_some()
    }

    #[inline]
    pub fn norm(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Direction of this vector, or `None` when the norm is zero.
    pub fn normalize(&self) -> Option<Self> {
        let norm = self.norm();
        if norm == 0.0 {
            return None;
        }
        Some(Self::new(self.x / norm, self.y / norm, self.z / norm))
    }

    /// Whether the norm is within `tolerance` of 1.0.
    #[inline]
    pub fn is_normalized(&self, tolerance: f32) -> bool {
        (self.norm() - 1.0).abs() < tolerance
    }
}

impl Vector2D {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

fn parse_f64(component: Option<&Value>) -> Option<f64> {
    match component? {
        Value::Number(n) => n.as_f64(),
        // Legacy serializer emitted numeric strings
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_f32(component: Option<&Value>) -> Option<f32> {
    match component? {
        Value::Number(n) => {
            let wide = n.as_f64()?;
            let narrow = wide as f32;
            if wide.is_finite() && !narrow.is_finite() {
                return None;
            }
            Some(narrow)
        }
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
