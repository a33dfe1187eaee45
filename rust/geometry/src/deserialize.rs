// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Top-level payload deserialization.
//!
//! Runs kind discrimination over an envelope and dispatches to the matching
//! reconstructor. One call, one input, one output; no state survives the
//! call and independent calls may run concurrently.

use crate::curve::Curve;
use crate::error::Result;
use crate::mesh::Mesh;
use crate::reconstruct::{build_curve, build_mesh, build_point};
use nalgebra::Point3;
use portal_core::diagnostics::{MessageSink, Severity};
use portal_core::{discriminate, GeometryKind, JsonDict, Payload};

/// Geometry value produced by [`deserialize`].
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Mesh(Mesh),
    Curve(Curve),
    Point(Point3<f64>),
}

/// A reconstructed geometry value paired with its pass-through metadata.
#[derive(Debug, Clone, PartialEq)]
pub struct Deserialized {
    pub geometry: Geometry,
    pub meta: JsonDict,
}

/// Deserialize a payload envelope into host geometry plus metadata.
///
/// `Ok(None)` is the documented terminal state for a missing or
/// unrecognized type tag, and for a point body that fails validation; the
/// sink has already received the matching report. Mesh and curve
/// reconstruction failures are reported to the sink and propagated, never
/// replaced by default geometry.
///
/// Light payloads are not routed from here; call
/// [`build_light`](crate::reconstruct::build_light) directly.
pub fn deserialize(payload: &Payload, sink: &dyn MessageSink) -> Result<Option<Deserialized>> {
    let kind = discriminate(payload, sink);
    if kind == GeometryKind::Undefined {
        return Ok(None);
    }

    // discriminate only resolves a kind when an item body exists
    let items = match payload.items() {
        Some(items) => items,
        None => return Ok(None),
    };

    tracing::debug!(target: "portal", kind = %kind, "dispatching payload");

    let geometry = match kind {
        GeometryKind::Mesh => Geometry::Mesh(surface(build_mesh(items), sink)?),
        GeometryKind::Curve => Geometry::Curve(surface(build_curve(items), sink)?),
        GeometryKind::Vector3D => match build_point(items, sink) {
            Some(point) => Geometry::Point(point),
            None => return Ok(None),
        },
        GeometryKind::Light => {
            sink.report(
                Severity::Info,
                "light payloads are not routed here, use build_light",
            );
            return Ok(None);
        }
        GeometryKind::Undefined => return Ok(None),
    };

    Ok(Some(Deserialized {
        geometry,
        meta: payload.meta.clone(),
    }))
}

/// Report a reconstruction failure to the sink before handing it upward.
fn surface<T>(result: Result<T>, sink: &dyn MessageSink) -> Result<T> {
    if let Err(err) = &result {
        sink.report(Severity::Error, &err.to_string());
    }
    result
}
