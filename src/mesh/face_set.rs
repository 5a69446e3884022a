//! Indexed face set geometry.
//!
//! An [`IndexedFaceSet`] pairs flat coordinate and normal arrays with the
//! sentinel-delimited corner list that connects them. The corner list is
//! indexed once, on construction, by a [`Faces`] instance.

use nalgebra::{Point3, Vector3};
use rayon::prelude::*;

use super::faces::Faces;
use super::index::{FaceId, VertexId};
use crate::error::Result;

/// How the normal array of a face set is attached to its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NormalBinding {
    /// No normals.
    None,
    /// One normal per vertex, same indexing as the coordinates.
    PerVertex,
    /// One normal per corner, through the normal index list.
    PerCorner,
    /// One normal per face, stored in face order.
    PerFace,
    /// One normal per face, through the normal index list.
    PerFaceIndexed,
}

/// A polygon mesh stored as flat arrays and a corner list.
#[derive(Debug, Clone)]
pub struct IndexedFaceSet {
    name: Option<String>,
    coord: Vec<f32>,
    faces: Faces,
    normal: Vec<f32>,
    normal_index: Vec<i32>,
    normal_per_vertex: bool,
}

impl IndexedFaceSet {
    /// Create a face set from xyz coordinate triples and a corner list.
    ///
    /// Fails if the corner list is malformed or references a vertex that
    /// `coord` does not hold.
    pub fn new(coord: Vec<f32>, coord_index: &[i32]) -> Result<Self> {
        let faces = Faces::new(coord.len() / 3, coord_index)?;
        Ok(Self {
            name: None,
            coord,
            faces,
            normal: Vec::new(),
            normal_index: Vec::new(),
            normal_per_vertex: true,
        })
    }

    /// Attach one normal per face, stored in face order.
    pub fn with_face_normals(mut self, normal: Vec<f32>) -> Self {
        self.normal = normal;
        self.normal_index.clear();
        self.normal_per_vertex = false;
        self
    }

    /// Attach per-face normals addressed through `normal_index`, one entry per face.
    pub fn with_indexed_face_normals(mut self, normal: Vec<f32>, normal_index: Vec<i32>) -> Self {
        self.normal = normal;
        self.normal_index = normal_index;
        self.normal_per_vertex = false;
        self
    }

    /// Attach one normal per vertex.
    pub fn with_vertex_normals(mut self, normal: Vec<f32>) -> Self {
        self.normal = normal;
        self.normal_index.clear();
        self.normal_per_vertex = true;
        self
    }

    /// Attach one normal per corner, addressed through `normal_index`.
    ///
    /// `normal_index` follows the layout of the corner list, sentinels included.
    pub fn with_corner_normals(mut self, normal: Vec<f32>, normal_index: Vec<i32>) -> Self {
        self.normal = normal;
        self.normal_index = normal_index;
        self.normal_per_vertex = true;
        self
    }

    /// Set the name of this face set.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The name of this face set, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The face index over the corner list.
    #[inline]
    pub fn faces(&self) -> &Faces {
        &self.faces
    }

    /// Number of vertices in the coordinate array.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.coord.len() / 3
    }

    /// Flat xyz coordinate array.
    pub fn coord(&self) -> &[f32] {
        &self.coord
    }

    /// Flat xyz normal array.
    pub fn normal(&self) -> &[f32] {
        &self.normal
    }

    /// Position of vertex `v`.
    pub fn vertex(&self, v: VertexId) -> Option<Point3<f32>> {
        triplet(&self.coord, v.index()).map(Point3::from)
    }

    /// Check if every face is a triangle.
    pub fn is_triangle_mesh(&self) -> bool {
        self.faces.is_triangle_mesh()
    }

    /// How the normal array is bound.
    pub fn normal_binding(&self) -> NormalBinding {
        match (self.normal.is_empty(), self.normal_per_vertex, self.normal_index.is_empty()) {
            (true, _, _) => NormalBinding::None,
            (false, true, true) => NormalBinding::PerVertex,
            (false, true, false) => NormalBinding::PerCorner,
            (false, false, true) => NormalBinding::PerFace,
            (false, false, false) => NormalBinding::PerFaceIndexed,
        }
    }

    /// Check if normals are bound per face, directly or through an index.
    pub fn has_face_normals(&self) -> bool {
        matches!(
            self.normal_binding(),
            NormalBinding::PerFace | NormalBinding::PerFaceIndexed
        )
    }

    /// The normal of face `f`, for per-face bindings.
    ///
    /// Returns `None` for other bindings, out of range faces, or a normal
    /// index that points outside the normal array.
    pub fn face_normal(&self, f: FaceId) -> Option<Vector3<f32>> {
        self.faces.face_size(f)?;
        let slot = match self.normal_binding() {
            NormalBinding::PerFace => f.index(),
            NormalBinding::PerFaceIndexed => {
                let ni = *self.normal_index.get(f.index())?;
                usize::try_from(ni).ok()?
            }
            _ => return None,
        };
        triplet(&self.normal, slot).map(Vector3::from)
    }

    /// Replace the normals by one geometric normal per face.
    ///
    /// Each normal is the unit normal of the plane through the first three
    /// corners of the face. Faces with fewer than three corners, or with
    /// collinear corners, get a zero normal.
    pub fn compute_face_normals(&mut self) {
        let normals: Vec<[f32; 3]> = (0..self.faces.num_faces())
            .into_par_iter()
            .map(|f| self.geometric_normal(FaceId::new(f)))
            .collect();

        self.normal = normals.into_iter().flatten().collect();
        self.normal_index.clear();
        self.normal_per_vertex = false;
    }

    fn geometric_normal(&self, f: FaceId) -> [f32; 3] {
        let corner = |j| self.faces.face_vertex(f, j).and_then(|v| self.vertex(v));
        let (Some(p0), Some(p1), Some(p2)) = (corner(0), corner(1), corner(2)) else {
            return [0.0; 3];
        };
        let n = (p1 - p0).cross(&(p2 - p0));
        match n.try_normalize(f32::EPSILON) {
            Some(n) => [n.x, n.y, n.z],
            None => [0.0; 3],
        }
    }
}

fn triplet(values: &[f32], i: usize) -> Option<[f32; 3]> {
    let slice = values.get(3 * i..3 * i + 3)?;
    Some([slice[0], slice[1], slice[2]])
}
