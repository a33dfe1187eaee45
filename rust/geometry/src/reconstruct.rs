// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reconstruction of host geometry from payload items.
//!
//! One builder per geometry family. Mesh, curve and light builders propagate
//! classified errors; the point builder has a no-throw contract and reports
//! absence through the diagnostic sink instead.

use crate::curve::{ArcCurve, Curve, LineCurve, NurbsCurve, Plane, PolylineCurve};
use crate::error::{Error, Result};
use crate::light::Light;
use crate::mesh::{Mesh, MeshFace};
use nalgebra::{Point2, Point3, Vector3};
use portal_core::diagnostics::{MessageSink, Severity};
use portal_core::schema::{CurveData, LightData, MeshData};
use portal_core::{Color, Vector3D};
use serde_json::Value;

#[inline]
fn point3(v: &Vector3D) -> Point3<f64> {
    Point3::new(v.x, v.y, v.z)
}

#[inline]
fn vector3(v: &Vector3D) -> Vector3<f64> {
    Vector3::new(v.x, v.y, v.z)
}

/// Rebuild a mesh from its payload body.
///
/// Vertices and faces are constructed in wire order. Face indices are
/// checked against the vertex count; non-empty vertex color and UV lists
/// must match the vertex count exactly. Vertex and face normals are always
/// derived after construction.
pub fn build_mesh(items: &Value) -> Result<Mesh> {
    if items.is_null() {
        return Err(Error::InvalidData("no mesh data".to_string()));
    }
    let data: MeshData = serde_json::from_value(items.clone())
        .map_err(|err| Error::InvalidData(format!("malformed mesh body: {}", err)))?;

    let mut mesh = Mesh::with_capacity(data.vertices.len(), data.faces.len());
    for vertex in &data.vertices {
        mesh.add_vertex(point3(vertex));
    }

    let vertex_count = mesh.vertex_count();
    for indices in &data.faces {
        let face = MeshFace(*indices);
        if face.max_index() as usize >= vertex_count {
            return Err(Error::InvalidData(format!(
                "face index {} out of range for {} vertices",
                face.max_index(),
                vertex_count
            )));
        }
        mesh.add_face(face);
    }

    if !data.vertex_colors.is_empty() {
        if data.vertex_colors.len() != vertex_count {
            return Err(Error::InvalidData(format!(
                "{} vertex colors for {} vertices",
                data.vertex_colors.len(),
                vertex_count
            )));
        }
        mesh.vertex_colors.reserve(vertex_count);
        for hex in &data.vertex_colors {
            mesh.vertex_colors.push(Color::from_hex(hex)?);
        }
    }

    if !data.uvs.is_empty() {
        if data.uvs.len() != vertex_count {
            return Err(Error::InvalidData(format!(
                "{} texture coordinates for {} vertices",
                data.uvs.len(),
                vertex_count
            )));
        }
        mesh.uvs.reserve(vertex_count);
        for uv in &data.uvs {
            mesh.uvs.push(Point2::new(uv.x, uv.y));
        }
    }

    mesh.compute_normals();
    Ok(mesh)
}

/// Rebuild a curve from its payload body.
///
/// Dispatches on the nested sub-kind tag, independent of the outer geometry
/// kind. A tag outside the closed {Line, Polyline, Nurbs, Arc} set fails
/// with [`Error::NotImplemented`] carrying the tag.
pub fn build_curve(items: &Value) -> Result<Curve> {
    let tag = sub_kind_tag(items, "curve")?;
    if !CurveData::TAGS.contains(&tag) {
        return Err(Error::NotImplemented(tag.to_string()));
    }
    let data: CurveData = serde_json::from_value(items.clone())
        .map_err(|err| Error::InvalidData(format!("malformed curve body: {}", err)))?;

    match data {
        CurveData::Line(line) => {
            if line.points.len() != 2 {
                return Err(Error::InvalidData(format!(
                    "line requires exactly 2 points, got {}",
                    line.points.len()
                )));
            }
            Ok(Curve::Line(LineCurve::new(
                point3(&line.points[0]),
                point3(&line.points[1]),
            )))
        }
        CurveData::Polyline(polyline) => {
            if polyline.points.len() < 2 {
                return Err(Error::InvalidData(format!(
                    "polyline requires at least 2 points, got {}",
                    polyline.points.len()
                )));
            }
            Ok(Curve::Polyline(PolylineCurve::new(
                polyline.points.iter().map(point3).collect(),
            )))
        }
        CurveData::Nurbs(nurbs) => {
            if nurbs.degree < 1 {
                return Err(Error::InvalidData(format!(
                    "nurbs degree must be positive, got {}",
                    nurbs.degree
                )));
            }
            Ok(Curve::Nurbs(NurbsCurve {
                degree: nurbs.degree,
                is_periodic: nurbs.is_periodic,
                control_points: nurbs.points.iter().map(point3).collect(),
            }))
        }
        CurveData::Arc(arc) => Ok(Curve::Arc(ArcCurve {
            plane: Plane::new(
                point3(&arc.plane.origin),
                vector3(&arc.plane.x_axis),
                vector3(&arc.plane.y_axis),
            ),
            radius: arc.radius,
            angle_radians: arc.angle_radians,
        })),
    }
}

/// Rebuild a 64-bit point from its payload body.
///
/// No-throw contract: a null body or a failed coordinate validation is
/// reported through the sink at warning severity and yields `None`. The
/// caller must treat `None` as a defined steady state.
pub fn build_point(items: &Value, sink: &dyn MessageSink) -> Option<Point3<f64>> {
    if items.is_null() {
        sink.report(Severity::Warning, "point data is null");
        return None;
    }
    match Vector3D::from_value(items) {
        Some(v) => Some(point3(&v)),
        None => {
            sink.report(
                Severity::Warning,
                "point data has invalid structure, expected numeric X, Y and Z",
            );
            None
        }
    }
}

/// Rebuild a light from its payload body.
///
/// Dispatches on the nested sub-kind tag. A tag outside the closed
/// {Point, Rectangular, Spot, Sun} set fails with [`Error::NotImplemented`]
/// carrying the tag. Not routed from [`deserialize`]; hosts call this
/// directly for light payloads.
///
/// [`deserialize`]: crate::deserialize::deserialize
pub fn build_light(items: &Value) -> Result<Light> {
    let tag = sub_kind_tag(items, "light")?;
    if !LightData::TAGS.contains(&tag) {
        return Err(Error::NotImplemented(tag.to_string()));
    }
    let data: LightData = serde_json::from_value(items.clone())
        .map_err(|err| Error::InvalidData(format!("malformed light body: {}", err)))?;

    match data {
        LightData::Point(light) => Ok(Light::Point {
            diffuse: Color::from_hex(&light.light_diffuse_color)?,
            attenuation: light.light_attenuation_type,
            location: point3(&light.light_location),
            intensity: light.light_intensity,
        }),
        LightData::Rectangular(light) => Ok(Light::Rectangular {
            diffuse: Color::from_hex(&light.light_diffuse_color)?,
            attenuation: light.light_attenuation_type,
            location: point3(&light.light_location),
            direction: vector3(&light.light_direction),
            length: vector3(&light.light_length),
            width: vector3(&light.light_width),
            intensity: light.light_intensity,
        }),
        LightData::Spot(light) => Ok(Light::Spot {
            diffuse: Color::from_hex(&light.light_diffuse_color)?,
            attenuation: light.light_attenuation_type,
            location: point3(&light.light_location),
            direction: vector3(&light.light_direction),
            intensity: light.light_intensity,
            spot_angle_radians: light.light_spot_angle_radians,
            hot_spot: light.light_hot_spot,
            shadow_intensity: light.light_shadow_intensity,
        }),
        LightData::Sun(light) => Ok(Light::Sun {
            diffuse: Color::from_hex(&light.light_diffuse_color)?,
            attenuation: light.light_attenuation_type,
            location: point3(&light.light_location),
            intensity: light.light_intensity,
        }),
    }
}

/// Read the nested sub-kind tag of a curve or light body.
fn sub_kind_tag<'v>(items: &'v Value, family: &str) -> Result<&'v str> {
    if items.is_null() {
        return Err(Error::InvalidData(format!("no {} data", family)));
    }
    items
        .get("Type")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::InvalidData(format!("{} item carries no sub-kind tag", family)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use portal_core::MemorySink;
    use serde_json::json;

    fn unit_quad() -> Value {
        json!({
            "Vertices": [
                {"X": 0.0, "Y": 0.0, "Z": 0.0},
                {"X": 1.0, "Y": 0.0, "Z": 0.0},
                {"X": 1.0, "Y": 1.0, "Z": 0.0},
                {"X": 0.0, "Y": 1.0, "Z": 0.0}
            ],
            "Faces": [[0, 1, 2, 3]]
        })
    }

    #[test]
    fn test_build_mesh_counts_and_normals() {
        let mesh = build_mesh(&unit_quad()).unwrap();
        assert_eq!(mesh.vertex_count(), 4);
        assert_eq!(mesh.face_count(), 1);
        assert_eq!(mesh.normals.len(), 4);
        assert_eq!(mesh.face_normals.len(), 1);
        assert!(mesh.vertex_colors.is_empty());
    }

    #[test]
    fn test_build_mesh_decodes_vertex_colors() {
        let mut body = unit_quad();
        body["VertexColors"] = json!(["FF0000", "00FF00", "0000FF", "FF0080"]);
        let mesh = build_mesh(&body).unwrap();
        assert_eq!(mesh.vertex_colors.len(), 4);
        assert_eq!(mesh.vertex_colors[3], Color::new(255, 0, 128));
    }

    #[test]
    fn test_build_mesh_rejects_color_count_mismatch() {
        let mut body = unit_quad();
        body["VertexColors"] = json!(["FF0000"]);
        let err = build_mesh(&body).unwrap_err();
        assert!(matches!(err, Error::InvalidData(_)), "got {:?}", err);
    }

    #[test]
    fn test_build_mesh_rejects_out_of_range_face_index() {
        let mut body = unit_quad();
        body["Faces"] = json!([[0, 1, 2, 9]]);
        let err = build_mesh(&body).unwrap_err();
        match err {
            Error::InvalidData(message) => {
                assert!(message.contains("9"));
                assert!(message.contains("4 vertices"));
            }
            other => panic!("expected InvalidData, got {:?}", other),
        }
    }

    #[test]
    fn test_build_mesh_rejects_null_body() {
        assert!(matches!(
            build_mesh(&Value::Null),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn test_build_mesh_attaches_uvs() {
        let mut body = unit_quad();
        body["UVs"] = json!([
            {"X": 0.0, "Y": 0.0},
            {"X": 1.0, "Y": 0.0},
            {"X": 1.0, "Y": 1.0},
            {"X": 0.0, "Y": 1.0}
        ]);
        let mesh = build_mesh(&body).unwrap();
        assert_eq!(mesh.uvs.len(), 4);
        assert_eq!(mesh.uvs[2], Point2::new(1.0, 1.0));
    }

    #[test]
    fn test_build_line_requires_two_points() {
        let body = json!({
            "Type": "Line",
            "Points": [{"X": 0, "Y": 0, "Z": 0}]
        });
        assert!(matches!(build_curve(&body), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_build_polyline() {
        let body = json!({
            "Type": "Polyline",
            "Points": [
                {"X": 0.0, "Y": 0.0, "Z": 0.0},
                {"X": 1.0, "Y": 0.0, "Z": 0.0},
                {"X": 1.0, "Y": 1.0, "Z": 0.0}
            ]
        });
        match build_curve(&body).unwrap() {
            Curve::Polyline(polyline) => assert_eq!(polyline.segment_count(), 2),
            other => panic!("expected polyline, got {:?}", other),
        }
    }

    #[test]
    fn test_build_nurbs_passes_periodicity_through() {
        let body = json!({
            "Type": "Nurbs",
            "Degree": 3,
            "IsPeriodic": true,
            "Points": [
                {"X": 0.0, "Y": 0.0, "Z": 0.0},
                {"X": 1.0, "Y": 2.0, "Z": 0.0},
                {"X": 2.0, "Y": 0.0, "Z": 0.0},
                {"X": 3.0, "Y": -2.0, "Z": 0.0}
            ]
        });
        match build_curve(&body).unwrap() {
            Curve::Nurbs(nurbs) => {
                assert_eq!(nurbs.degree, 3);
                assert!(nurbs.is_periodic);
                assert_eq!(nurbs.control_points.len(), 4);
            }
            other => panic!("expected nurbs, got {:?}", other),
        }
    }

    #[test]
    fn test_build_nurbs_rejects_non_positive_degree() {
        let body = json!({
            "Type": "Nurbs",
            "Degree": 0,
            "IsPeriodic": false,
            "Points": []
        });
        assert!(matches!(build_curve(&body), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_unknown_curve_sub_kind_carries_tag() {
        let body = json!({"Type": "Helix", "Points": []});
        match build_curve(&body).unwrap_err() {
            Error::NotImplemented(tag) => assert_eq!(tag, "Helix"),
            other => panic!("expected NotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn test_curve_without_sub_kind_is_invalid() {
        let body = json!({"Points": []});
        assert!(matches!(build_curve(&body), Err(Error::InvalidData(_))));
    }

    #[test]
    fn test_build_point() {
        let sink = MemorySink::new();
        let point = build_point(&json!({"X": 1.0, "Y": 2.0, "Z": 3.0}), &sink).unwrap();
        assert_eq!(point, Point3::new(1.0, 2.0, 3.0));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_build_point_null_is_warned_not_fatal() {
        let sink = MemorySink::new();
        assert!(build_point(&Value::Null, &sink).is_none());
        assert_eq!(sink.count(Severity::Warning), 1);
        assert_eq!(sink.count(Severity::Error), 0);
    }

    #[test]
    fn test_build_point_invalid_structure_is_warned() {
        let sink = MemorySink::new();
        assert!(build_point(&json!({"X": 1.0, "Y": 2.0}), &sink).is_none());
        assert_eq!(sink.count(Severity::Warning), 1);
    }

    #[test]
    fn test_build_spot_light() {
        let body = json!({
            "Type": "Spot",
            "LightDiffuseColor": "FF0080",
            "LightAttenuationType": "InverseSquared",
            "LightLocation": {"X": 0.0, "Y": 0.0, "Z": 5.0},
            "LightDirection": {"X": 0.0, "Y": 0.0, "Z": -1.0},
            "LightIntensity": 0.9,
            "LightSpotAngleRadians": 0.7,
            "LightHotSpot": 0.5,
            "LightShadowIntensity": 1.0
        });
        match build_light(&body).unwrap() {
            Light::Spot {
                diffuse,
                location,
                spot_angle_radians,
                ..
            } => {
                assert_eq!(diffuse, Color::new(255, 0, 128));
                assert_eq!(location, Point3::new(0.0, 0.0, 5.0));
                assert_eq!(spot_angle_radians, 0.7);
            }
            other => panic!("expected spot light, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_light_sub_kind_carries_tag() {
        let body = json!({"Type": "Linear"});
        match build_light(&body).unwrap_err() {
            Error::NotImplemented(tag) => assert_eq!(tag, "Linear"),
            other => panic!("expected NotImplemented, got {:?}", other),
        }
    }

    #[test]
    fn test_light_with_bad_hex_color_is_invalid() {
        let body = json!({
            "Type": "Point",
            "LightDiffuseColor": "not-a-color",
            "LightAttenuationType": "Constant",
            "LightLocation": {"X": 0.0, "Y": 0.0, "Z": 0.0},
            "LightIntensity": 1.0
        });
        assert!(matches!(build_light(&body), Err(Error::Core(_))));
    }
}
