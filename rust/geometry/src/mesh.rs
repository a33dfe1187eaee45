// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Mesh target type.

use nalgebra::{Point2, Point3, Vector3};
use portal_core::Color;

/// A mesh face as four vertex indices.
///
/// Triangles repeat the last index; quads use four distinct indices. This is
/// the encoding the wire format uses, kept caller-visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshFace(pub [u32; 4]);

impl MeshFace {
    #[inline]
    pub fn new(a: u32, b: u32, c: u32, d: u32) -> Self {
        Self([a, b, c, d])
    }

    /// Triangles are encoded with the last index repeated.
    #[inline]
    pub fn is_triangle(&self) -> bool {
        self.0[2] == self.0[3]
    }

    /// Largest vertex index referenced by this face.
    #[inline]
    pub fn max_index(&self) -> u32 {
        self.0.iter().copied().max().unwrap_or(0)
    }
}

/// Vertex mesh with optional per-vertex colors and texture coordinates.
///
/// Normals are not part of the wire format; [`Mesh::compute_normals`] derives
/// them and the mesh reconstructor always runs it after construction.
///
/// Invariant: face indices reference valid vertex positions. The
/// reconstructor validates this before a face is added; code that builds
/// meshes by hand must do the same before calling `compute_normals`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    pub vertices: Vec<Point3<f64>>,
    pub faces: Vec<MeshFace>,
    /// Per-vertex colors, parallel to `vertices`; empty when uncolored.
    pub vertex_colors: Vec<Color>,
    /// Per-vertex texture coordinates, parallel to `vertices`; empty when
    /// untextured.
    pub uvs: Vec<Point2<f64>>,
    /// Per-vertex unit normals, parallel to `vertices`.
    pub normals: Vec<Vector3<f64>>,
    /// Per-face unit normals, parallel to `faces`.
    pub face_normals: Vec<Vector3<f64>>,
}

impl Mesh {
    /// Create a new empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mesh with capacity
    pub fn with_capacity(vertex_count: usize, face_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            faces: Vec::with_capacity(face_count),
            vertex_colors: Vec::new(),
            uvs: Vec::new(),
            normals: Vec::new(),
            face_normals: Vec::new(),
        }
    }

    /// Add a vertex
    #[inline]
    pub fn add_vertex(&mut self, position: Point3<f64>) {
        self.vertices.push(position);
    }

    /// Add a face
    #[inline]
    pub fn add_face(&mut self, face: MeshFace) {
        self.faces.push(face);
    }

    /// Get vertex count
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get face count
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Check if mesh is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Derive per-vertex and per-face unit normals.
    ///
    /// Accumulates area-weighted triangle normals at each vertex, then
    /// normalizes. Quads contribute both of their triangle halves. Vertices
    /// referenced only by degenerate faces get a zero normal.
    pub fn compute_normals(&mut self) {
        let vertex_count = self.vertex_count();
        self.normals.clear();
        self.face_normals.clear();
        if vertex_count == 0 {
            return;
        }

        let mut accumulated = vec![Vector3::zeros(); vertex_count];
        self.face_normals.reserve(self.faces.len());

        for face in &self.faces {
            let [a, b, c, d] = face.0;
            let mut face_normal = triangle_normal(
                self.vertices[a as usize],
                self.vertices[b as usize],
                self.vertices[c as usize],
            );
            accumulated[a as usize] += face_normal;
            accumulated[b as usize] += face_normal;
            accumulated[c as usize] += face_normal;

            if !face.is_triangle() {
                let second = triangle_normal(
                    self.vertices[a as usize],
                    self.vertices[c as usize],
                    self.vertices[d as usize],
                );
                accumulated[a as usize] += second;
                accumulated[c as usize] += second;
                accumulated[d as usize] += second;
                face_normal += second;
            }

            self.face_normals.push(unitize(face_normal));
        }

        self.normals.reserve(vertex_count);
        for normal in accumulated {
            self.normals.push(unitize(normal));
        }
    }
}

#[inline]
fn triangle_normal(v0: Point3<f64>, v1: Point3<f64>, v2: Point3<f64>) -> Vector3<f64> {
    (v1 - v0).cross(&(v2 - v0))
}

#[inline]
fn unitize(vector: Vector3<f64>) -> Vector3<f64> {
    vector.try_normalize(0.0).unwrap_or_else(Vector3::zeros)
}
