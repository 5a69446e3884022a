//! Face index over a sentinel-delimited corner list.
//!
//! Polygon meshes in VRML-style formats store their connectivity as one flat
//! list of vertex indices, where every face is terminated by a negative
//! sentinel:
//!
//! ```text
//! [0, 1, 2, -1, 3, 4, 5, 6, -1]
//!  \_face 0_/   \__face 1___/
//! ```
//!
//! [`Faces`] scans that list once and records where every face starts. All
//! queries afterwards are answered from that table plus the list itself:
//! sizes and face-local lookups in O(1), corner to face in O(log F).
//!
//! Positions in the list are *corners*. A corner that holds a sentinel belongs
//! to no face, so every corner query returns `None` for it.

use std::ops::Range;

use log::debug;

use super::index::{CornerId, FaceId, VertexId};
use crate::error::{MeshError, Result};

/// Immutable face index built from a corner list.
///
/// # Example
///
/// ```
/// use facets::mesh::{CornerId, FaceId, Faces};
///
/// let faces = Faces::new(6, &[0, 1, 2, -1, 3, 4, 5, -1]).unwrap();
/// assert_eq!(faces.num_faces(), 2);
/// assert_eq!(faces.face_size(FaceId::new(1)), Some(3));
/// assert_eq!(faces.corner_face(CornerId::new(5)), Some(FaceId::new(1)));
/// // The last corner of a face wraps around to its first one.
/// assert_eq!(faces.next_corner(CornerId::new(2)), Some(CornerId::new(0)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Faces {
    coord_index: Vec<i32>,
    /// Offset of the first corner of every face, strictly increasing.
    face_start: Vec<usize>,
    /// Number of non-sentinel entries (corners, not unique vertices).
    num_vertices: usize,
    vertex_count_hint: usize,
}

impl Faces {
    /// Build the index for a corner list whose vertex indices refer to a
    /// storage of `num_vertices` vertices.
    ///
    /// The list is copied; the caller keeps ownership of its own buffer.
    ///
    /// # Errors
    ///
    /// - [`MeshError::InvalidMeshEncoding`] if the list is empty or does not end
    ///   with a sentinel.
    /// - [`MeshError::InvalidVertexIndex`] if a corner references a vertex
    ///   `>= num_vertices`.
    pub fn new(num_vertices: usize, coord_index: &[i32]) -> Result<Self> {
        match coord_index.last() {
            None => return Err(MeshError::encoding("corner list is empty")),
            Some(&last) if last >= 0 => {
                return Err(MeshError::encoding("corner list does not end with a face sentinel"))
            }
            Some(_) => {}
        }

        let mut face_start = Vec::new();
        let mut vertex_count = 0;
        let mut current_start = 0;

        for (corner, &vertex) in coord_index.iter().enumerate() {
            if vertex >= 0 {
                if vertex as usize >= num_vertices {
                    return Err(MeshError::InvalidVertexIndex {
                        corner,
                        vertex: vertex as usize,
                    });
                }
                vertex_count += 1;
            } else {
                face_start.push(current_start);
                current_start = corner + 1;
            }
        }

        debug!(
            "face index: {} faces, {} corners, {} face vertices",
            face_start.len(),
            coord_index.len(),
            vertex_count
        );

        Ok(Self {
            coord_index: coord_index.to_vec(),
            face_start,
            num_vertices: vertex_count,
            vertex_count_hint: num_vertices,
        })
    }

    /// Build the index without a vertex storage to check against.
    ///
    /// The vertex count hint becomes one past the largest referenced index.
    pub fn from_coord_index(coord_index: &[i32]) -> Result<Self> {
        let hint = coord_index
            .iter()
            .filter(|&&v| v >= 0)
            .map(|&v| v as usize + 1)
            .max()
            .unwrap_or(0);
        Self::new(hint, coord_index)
    }

    /// Total number of face vertices, summed over all faces.
    ///
    /// A vertex shared by several faces is counted once per face.
    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of faces (sentinels) in the corner list.
    #[inline]
    pub fn num_faces(&self) -> usize {
        self.face_start.len()
    }

    /// Length of the corner list, sentinels included.
    #[inline]
    pub fn num_corners(&self) -> usize {
        self.coord_index.len()
    }

    /// Size of the vertex storage the corner list was validated against.
    #[inline]
    pub fn vertex_count_hint(&self) -> usize {
        self.vertex_count_hint
    }

    /// The corner list this index was built from.
    #[inline]
    pub fn coord_index(&self) -> &[i32] {
        &self.coord_index
    }

    /// Iterate over all face IDs.
    pub fn face_ids(&self) -> impl Iterator<Item = FaceId> {
        (0..self.num_faces()).map(FaceId::new)
    }

    /// Number of corners in face `f`, or `None` if `f` is out of range.
    pub fn face_size(&self, f: FaceId) -> Option<usize> {
        self.corner_range(f).map(|r| r.len())
    }

    /// Position of the first corner of face `f`.
    ///
    /// For an empty face this is the position of its sentinel.
    pub fn face_first_corner(&self, f: FaceId) -> Option<CornerId> {
        self.face_start.get(f.index()).map(|&s| CornerId::new(s))
    }

    /// The vertex at local position `j` of face `f`.
    pub fn face_vertex(&self, f: FaceId, j: usize) -> Option<VertexId> {
        let range = self.corner_range(f)?;
        if j >= range.len() {
            return None;
        }
        self.corner_vertex(CornerId::new(range.start + j))
    }

    /// The corners of face `f` in boundary order.
    pub fn face_corners(&self, f: FaceId) -> Option<impl Iterator<Item = CornerId>> {
        self.corner_range(f).map(|r| r.map(CornerId::new))
    }

    /// The vertices of face `f` in boundary order.
    pub fn face_vertices(&self, f: FaceId) -> Option<impl Iterator<Item = VertexId> + '_> {
        let range = self.corner_range(f)?;
        Some(self.coord_index[range].iter().map(|&v| VertexId::new(v as usize)))
    }

    /// The vertex stored at corner `c`, or `None` for sentinels and
    /// out-of-range positions.
    pub fn corner_vertex(&self, c: CornerId) -> Option<VertexId> {
        match self.coord_index.get(c.index()) {
            Some(&v) if v >= 0 => Some(VertexId::new(v as usize)),
            _ => None,
        }
    }

    /// The face whose corner range contains `c`.
    ///
    /// Binary search for the last face starting at or before `c`. Returns
    /// `None` if `c` is out of range or holds a sentinel.
    pub fn corner_face(&self, c: CornerId) -> Option<FaceId> {
        self.corner_vertex(c)?;
        let c = c.index();

        // start[left] <= c holds throughout, and c < start[right] unless
        // right is still the last face.
        let mut left = 0;
        let mut right = self.face_start.len() - 1;
        while right - left > 1 {
            let mid = left + (right - left) / 2;
            let start = self.face_start[mid];
            if c < start {
                right = mid;
            } else if c > start {
                left = mid;
            } else {
                return Some(FaceId::new(mid));
            }
        }

        if c >= self.face_start[right] {
            Some(FaceId::new(right))
        } else {
            Some(FaceId::new(left))
        }
    }

    /// The corner after `c` within its face, wrapping from the last corner
    /// back to the first.
    ///
    /// Calling this repeatedly walks the face boundary and returns to `c`
    /// after `face_size` steps.
    pub fn next_corner(&self, c: CornerId) -> Option<CornerId> {
        self.corner_vertex(c)?;
        // The list ends with a sentinel, so c + 1 is always in bounds here.
        let next = c.index() + 1;
        if self.coord_index[next] >= 0 {
            return Some(CornerId::new(next));
        }
        let face = self.corner_face(c)?;
        self.face_first_corner(face)
    }

    /// Check if every face has exactly three corners.
    pub fn is_triangle_mesh(&self) -> bool {
        self.face_ids().all(|f| self.face_size(f) == Some(3))
    }

    /// Size of the largest face, 0 if every face is empty.
    pub fn max_face_size(&self) -> usize {
        self.face_ids()
            .filter_map(|f| self.face_size(f))
            .max()
            .unwrap_or(0)
    }

    fn corner_range(&self, f: FaceId) -> Option<Range<usize>> {
        let f = f.index();
        let start = *self.face_start.get(f)?;
        // The last face ends one before the final sentinel.
        let end = match self.face_start.get(f + 1) {
            Some(&next) => next - 1,
            None => self.coord_index.len() - 1,
        };
        Some(start..end)
    }
}
