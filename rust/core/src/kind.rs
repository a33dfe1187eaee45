// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Geometry kind discrimination.
//!
//! Fast tag checking against a closed enum instead of string comparison at
//! every dispatch site.

use crate::diagnostics::{MessageSink, Severity};
use crate::error::Error;
use crate::payload::Payload;
use serde_json::Value;
use std::fmt;

/// Closed set of geometry families a payload can encode.
///
/// `Undefined` is both the default when no type tag is present and the
/// sentinel for an unrecognized tag. Callers must treat either as a single
/// "no geometry produced" outcome, not as an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GeometryKind {
    Mesh,
    Curve,
    Vector3D,
    Light,
    #[default]
    Undefined,
}

impl GeometryKind {
    /// Parse a kind tag. Only the exact canonical literals are recognized.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "Mesh" => Some(Self::Mesh),
            "Curve" => Some(Self::Curve),
            "Vector3D" => Some(Self::Vector3D),
            "Light" => Some(Self::Light),
            _ => None,
        }
    }

    /// Canonical tag string for this kind.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Self::Mesh => "Mesh",
            Self::Curve => "Curve",
            Self::Vector3D => "Vector3D",
            Self::Light => "Light",
            Self::Undefined => "Undefined",
        }
    }
}

impl fmt::Display for GeometryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_tag())
    }
}

/// Decide which geometry family `payload` encodes.
///
/// The envelope `Type` tag wins when present; otherwise the top-level
/// `"Type"` member of the `Items` object is consulted, which is where the
/// legacy serializer wrote it. Outcomes:
///
/// - missing or null `Items`: warning report, `Undefined`
/// - no tag in either location: info report, `Undefined`
/// - tag outside the closed set: error report (malformed tag), `Undefined`
///
/// Never fails and has no side effects beyond sink reports.
pub fn discriminate(payload: &Payload, sink: &dyn MessageSink) -> GeometryKind {
    let items = match payload.items() {
        Some(items) => items,
        None => {
            sink.report(Severity::Warning, "payload is null or empty");
            return GeometryKind::Undefined;
        }
    };

    let tag = payload.kind.as_deref().or_else(|| match items {
        Value::Object(map) => map.get("Type").and_then(Value::as_str),
        _ => None,
    });

    let tag = match tag {
        Some(tag) => tag,
        None => {
            sink.report(Severity::Info, "payload item carries no type tag");
            return GeometryKind::Undefined;
        }
    };

    match GeometryKind::from_tag(tag) {
        Some(kind) => kind,
        None => {
            let err = Error::MalformedTag(tag.to_string());
            sink.report(Severity::Error, &err.to_string());
            GeometryKind::Undefined
        }
    }
}
