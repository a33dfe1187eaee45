//! Wire data model for payload items.
//!
//! These types mirror the JSON shapes of the interchange format one to one.
//! Curve and light families are tagged unions discriminated by their own
//! nested `Type` member, independent of the outer geometry-kind tag.
//! Reconstruction into host geometry lives in `portal-geometry`.

use crate::vector::{Vector2D, Vector3D};
use serde::Deserialize;

/// Mesh payload body.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MeshData {
    pub vertices: Vec<Vector3D>,
    /// Four indices per face; triangles repeat the last index.
    pub faces: Vec<[u32; 4]>,
    /// Per-vertex colors as 6-hex-digit strings, parallel to `vertices`.
    #[serde(default)]
    pub vertex_colors: Vec<String>,
    /// Optional per-vertex texture coordinates, parallel to `vertices`.
    #[serde(default, rename = "UVs")]
    pub uvs: Vec<Vector2D>,
}

/// Plane carried by arc payloads: origin plus two in-plane axes.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PlaneData {
    pub origin: Vector3D,
    pub x_axis: Vector3D,
    pub y_axis: Vector3D,
}

/// Curve family payload body, discriminated by its nested `Type` tag.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "Type")]
pub enum CurveData {
    Line(LineData),
    Polyline(PolylineData),
    Nurbs(NurbsData),
    Arc(ArcData),
}

impl CurveData {
    /// Sub-kind tags this family recognizes, in declaration order.
    pub const TAGS: [&'static str; 4] = ["Line", "Polyline", "Nurbs", "Arc"];
}

/// Straight segment between two points.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LineData {
    pub points: Vec<Vector3D>,
}

/// Connected multi-segment curve through ordered points.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PolylineData {
    pub points: Vec<Vector3D>,
}

/// NURBS curve: degree, closure flag and control points.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NurbsData {
    pub degree: i32,
    pub is_periodic: bool,
    pub points: Vec<Vector3D>,
}

/// Arc on a plane, swept from the plane X axis by an angle in radians.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ArcData {
    pub plane: PlaneData,
    pub radius: f64,
    pub angle_radians: f64,
}

/// Falloff profile of a light source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Attenuation {
    Constant,
    Linear,
    InverseSquared,
}

/// Light family payload body, discriminated by its nested `Type` tag.
///
/// Wire member names keep the `Light` prefix of the legacy serializer
/// (`"LightDiffuseColor"`, `"LightLocation"`, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "Type")]
pub enum LightData {
    Point(PointLightData),
    Rectangular(RectangularLightData),
    Spot(SpotLightData),
    Sun(SunLightData),
}

impl LightData {
    /// Sub-kind tags this family recognizes, in declaration order.
    pub const TAGS: [&'static str; 4] = ["Point", "Rectangular", "Spot", "Sun"];
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PointLightData {
    /// Diffuse color as a 6-hex-digit string.
    pub light_diffuse_color: String,
    pub light_attenuation_type: Attenuation,
    pub light_location: Vector3D,
    pub light_intensity: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RectangularLightData {
    pub light_diffuse_color: String,
    pub light_attenuation_type: Attenuation,
    pub light_location: Vector3D,
    pub light_direction: Vector3D,
    /// Edge vector spanning the long side of the rectangle.
    pub light_length: Vector3D,
    /// Edge vector spanning the short side of the rectangle.
    pub light_width: Vector3D,
    pub light_intensity: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SpotLightData {
    pub light_diffuse_color: String,
    pub light_attenuation_type: Attenuation,
    pub light_location: Vector3D,
    pub light_direction: Vector3D,
    pub light_intensity: f64,
    pub light_spot_angle_radians: f64,
    /// Hot spot ratio in 0..=1, from full-focus to none.
    pub light_hot_spot: f64,
    pub light_shadow_intensity: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SunLightData {
    pub light_diffuse_color: String,
    pub light_attenuation_type: Attenuation,
    pub light_location: Vector3D,
    pub light_intensity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mesh_body_minimal() {
        let data: MeshData = serde_json::from_value(json!({
            "Vertices": [{"X": 0.0, "Y": 0.0, "Z": 0.0}],
            "Faces": [[0, 0, 0, 0]]
        }))
        .unwrap();
        assert_eq!(data.vertices.len(), 1);
        assert_eq!(data.faces, vec![[0, 0, 0, 0]]);
        assert!(data.vertex_colors.is_empty());
        assert!(data.uvs.is_empty());
    }

    #[test]
    fn test_mesh_body_full() {
        let data: MeshData = serde_json::from_value(json!({
            "Vertices": [
                {"X": 0.0, "Y": 0.0, "Z": 0.0},
                {"X": 1.0, "Y": 0.0, "Z": 0.0}
            ],
            "Faces": [[0, 1, 1, 1]],
            "VertexColors": ["FF0000", "00FF00"],
            "UVs": [{"X": 0.0, "Y": 0.0}, {"X": 1.0, "Y": 0.0}]
        }))
        .unwrap();
        assert_eq!(data.vertex_colors.len(), 2);
        assert_eq!(data.uvs[1].x, 1.0);
    }

    #[test]
    fn test_curve_sub_kind_dispatch() {
        let line: CurveData = serde_json::from_value(json!({
            "Type": "Line",
            "Points": [{"X": 0, "Y": 0, "Z": 0}, {"X": 1, "Y": 1, "Z": 1}]
        }))
        .unwrap();
        assert!(matches!(line, CurveData::Line(ref l) if l.points.len() == 2));

        let nurbs: CurveData = serde_json::from_value(json!({
            "Type": "Nurbs",
            "Degree": 3,
            "IsPeriodic": true,
            "Points": [{"X": 0, "Y": 0, "Z": 0}]
        }))
        .unwrap();
        assert!(matches!(
            nurbs,
            CurveData::Nurbs(ref n) if n.degree == 3 && n.is_periodic
        ));
    }

    #[test]
    fn test_arc_plane_shape() {
        let arc: CurveData = serde_json::from_value(json!({
            "Type": "Arc",
            "Plane": {
                "Origin": {"X": 1.0, "Y": 2.0, "Z": 3.0},
                "XAxis": {"X": 1.0, "Y": 0.0, "Z": 0.0},
                "YAxis": {"X": 0.0, "Y": 1.0, "Z": 0.0}
            },
            "Radius": 2.5,
            "AngleRadians": 1.5707963267948966
        }))
        .unwrap();
        match arc {
            CurveData::Arc(arc) => {
                assert_eq!(arc.plane.origin.x, 1.0);
                assert_eq!(arc.radius, 2.5);
            }
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_curve_tag_fails_decode() {
        let result: Result<CurveData, _> =
            serde_json::from_value(json!({"Type": "Helix", "Points": []}));
        assert!(result.is_err());
    }

    #[test]
    fn test_spot_light_fields() {
        let light: LightData = serde_json::from_value(json!({
            "Type": "Spot",
            "LightDiffuseColor": "FFFFFF",
            "LightAttenuationType": "Linear",
            "LightLocation": {"X": 0.0, "Y": 0.0, "Z": 10.0},
            "LightDirection": {"X": 0.0, "Y": 0.0, "Z": -1.0},
            "LightIntensity": 0.8,
            "LightSpotAngleRadians": 0.5,
            "LightHotSpot": 0.25,
            "LightShadowIntensity": 0.7
        }))
        .unwrap();
        match light {
            LightData::Spot(spot) => {
                assert_eq!(spot.light_attenuation_type, Attenuation::Linear);
                assert_eq!(spot.light_spot_angle_radians, 0.5);
                assert_eq!(spot.light_hot_spot, 0.25);
            }
            other => panic!("expected spot light, got {:?}", other),
        }
    }

    #[test]
    fn test_sun_light_has_no_direction() {
        let light: LightData = serde_json::from_value(json!({
            "Type": "Sun",
            "LightDiffuseColor": "FFEEDD",
            "LightAttenuationType": "Constant",
            "LightLocation": {"X": 0.0, "Y": 0.0, "Z": 0.0},
            "LightIntensity": 1.0
        }))
        .unwrap();
        assert!(matches!(light, LightData::Sun(_)));
    }
}
