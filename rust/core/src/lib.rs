// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Portal Core
//!
//! Wire schema layer for the Portal JSON geometry interchange format
//! ("Payload"). Decodes untyped JSON into typed payload values with
//! [serde](https://docs.rs/serde) and classifies what failed when it can't.
//!
//! ## Overview
//!
//! This crate provides the schema half of the codec:
//!
//! - **Payload envelope**: the outer `{Items, Meta, Type}` object
//! - **Kind discrimination**: mapping a type tag onto the closed
//!   [`GeometryKind`] set
//! - **Wire data model**: typed mesh, curve-family and light-family bodies
//! - **Coordinate validation**: duck-typed `X`/`Y`/`Z` probing at 32- and
//!   64-bit precision
//! - **Hex color codec** and the **diagnostic sink** the whole codec
//!   reports through
//!
//! Reconstruction of host geometry from these types lives in
//! `portal-geometry`.
//!
//! ## Quick Start
//!
//! ```rust
//! use portal_core::{discriminate, GeometryKind, MemorySink, Payload};
//!
//! let payload: Payload = r#"{
//!     "Items": {"X": 1.0, "Y": 2.0, "Z": 3.0},
//!     "Meta": {"Layer": "Default"},
//!     "Type": "Vector3D"
//! }"#
//! .parse()
//! .unwrap();
//!
//! let sink = MemorySink::new();
//! assert_eq!(discriminate(&payload, &sink), GeometryKind::Vector3D);
//! ```
//!
//! ## Error model
//!
//! Missing type tags are not errors: they end in
//! [`GeometryKind::Undefined`] with an informational report. Structural
//! failures are classified ([`Error::Json`], [`Error::MalformedTag`],
//! [`Error::InvalidData`]) and always recoverable; nothing in this crate
//! panics on malformed input.

pub mod color;
pub mod diagnostics;
pub mod error;
pub mod kind;
pub mod payload;
pub mod schema;
pub mod vector;

pub use color::Color;
pub use diagnostics::{MemorySink, MessageSink, Severity, TracingSink};
pub use error::{Error, Result};
pub use kind::{discriminate, GeometryKind};
pub use payload::{JsonDict, Payload};
pub use schema::{
    ArcData, Attenuation, CurveData, LightData, LineData, MeshData, NurbsData, PlaneData,
    PointLightData, PolylineData, RectangularLightData, SpotLightData, SunLightData,
};
pub use vector::{Vector2D, Vector3D, Vector3F, DEFAULT_NORMAL_TOLERANCE};
