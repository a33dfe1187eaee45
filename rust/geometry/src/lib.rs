//! Portal Geometry Reconstruction
//!
//! Rebuilds host geometry (meshes, curves, points, lights) from payload
//! envelopes decoded by `portal-core`, using nalgebra for the target types.
//!
//! The top-level entry point is [`deserialize`]; the per-family builders
//! ([`build_mesh`], [`build_curve`], [`build_point`], [`build_light`]) are
//! public for hosts that dispatch themselves.

pub mod curve;
pub mod deserialize;
pub mod error;
pub mod light;
pub mod mesh;
pub mod reconstruct;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point2, Point3, Vector3};

pub use curve::{ArcCurve, Curve, LineCurve, NurbsCurve, Plane, PolylineCurve};
pub use deserialize::{deserialize, Deserialized, Geometry};
pub use error::{Error, Result};
pub use light::Light;
pub use mesh::{Mesh, MeshFace};
pub use reconstruct::{build_curve, build_light, build_mesh, build_point};
