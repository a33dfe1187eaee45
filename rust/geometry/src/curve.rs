//! Curve target types.
//!
//! The closed curve family the codec can reconstruct. Modeled as a tagged
//! union with exhaustive matching; an unsupported sub-kind never reaches
//! these types (the reconstructor rejects it first).

use nalgebra::{Point3, Vector3};

/// Plane given by an origin and two in-plane axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Point3<f64>,
    pub x_axis: Vector3<f64>,
    pub y_axis: Vector3<f64>,
}

impl Plane {
    #[inline]
    pub fn new(origin: Point3<f64>, x_axis: Vector3<f64>, y_axis: Vector3<f64>) -> Self {
        Self {
            origin,
            x_axis,
            y_axis,
        }
    }

    /// Plane normal, x cross y. Not unitized.
    #[inline]
    pub fn normal(&self) -> Vector3<f64> {
        self.x_axis.cross(&self.y_axis)
    }
}

/// Straight segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCurve {
    pub from: Point3<f64>,
    pub to: Point3<f64>,
}

impl LineCurve {
    #[inline]
    pub fn new(from: Point3<f64>, to: Point3<f64>) -> Self {
        Self { from, to }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.to - self.from).norm()
    }
}

/// Connected multi-segment curve through ordered points.
#[derive(Debug, Clone, PartialEq)]
pub struct PolylineCurve {
    pub points: Vec<Point3<f64>>,
}

impl PolylineCurve {
    #[inline]
    pub fn new(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn segment_count(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).norm())
            .sum()
    }
}

/// NURBS curve as degree, closure flag and control points.
///
/// `is_periodic` carries the closure semantics of the source curve and is
/// forwarded untouched; the host geometry kernel interprets it.
#[derive(Debug, Clone, PartialEq)]
pub struct NurbsCurve {
    pub degree: i32,
    pub is_periodic: bool,
    pub control_points: Vec<Point3<f64>>,
}

/// Circular arc on a plane, swept from the plane X axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCurve {
    pub plane: Plane,
    pub radius: f64,
    pub angle_radians: f64,
}

impl ArcCurve {
    #[inline]
    pub fn length(&self) -> f64 {
        self.radius * self.angle_radians.abs()
    }
}

/// Closed curve family produced by the payload codec.
#[derive(Debug, Clone, PartialEq)]
pub enum Curve {
    Line(LineCurve),
    Polyline(PolylineCurve),
    Nurbs(NurbsCurve),
    Arc(ArcCurve),
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_line_length() {
        let line = LineCurve::new(Point3::new(0.0, 0.0, 0.0), Point3::new(3.0, 4.0, 0.0));
        assert_relative_eq!(line.length(), 5.0);
    }

    #[test]
    fn test_polyline_segments_and_length() {
        let polyline = PolylineCurve::new(vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(1.0, 2.0, 0.0),
        ]);
        assert_eq!(polyline.segment_count(), 2);
        assert_relative_eq!(polyline.length(), 3.0);
    }

    #[test]
    fn test_arc_length() {
        let arc = ArcCurve {
            plane: Plane::new(Point3::origin(), Vector3::x(), Vector3::y()),
            radius: 2.0,
            angle_radians: std::f64::consts::PI,
        };
        assert_relative_eq!(arc.length(), 2.0 * std::f64::consts::PI);
    }

    #[test]
    fn test_plane_normal_follows_right_hand_rule() {
        let plane = Plane::new(Point3::origin(), Vector3::x(), Vector3::y());
        assert_relative_eq!(plane.normal(), Vector3::z());
    }
}
