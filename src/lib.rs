//! # Facets
//!
//! Face-aware access to polygon meshes stored as flat corner lists.
//!
//! VRML-style indexed face sets encode connectivity as a single list of
//! vertex indices, each face terminated by a negative sentinel. Facets builds
//! an index over that list once and then answers face, corner and vertex
//! navigation queries against it, which is what exporters and geometry
//! algorithms need to walk faces without rescanning.
//!
//! ## Features
//!
//! - **Face index**: face sizes and face-local lookups in O(1), corner to face in O(log F)
//! - **Cyclic traversal**: walk a face boundary corner by corner without knowing its size
//! - **Type-safe indices**: faces, corners and vertices cannot be mixed up
//! - **STL I/O**: ASCII export with per-face normals, binary and ASCII import
//!
//! ## Quick Start
//!
//! ```
//! use facets::prelude::*;
//!
//! let faces = Faces::new(6, &[0, 1, 2, -1, 3, 4, 5, -1]).unwrap();
//!
//! assert_eq!(faces.num_faces(), 2);
//! assert_eq!(faces.face_vertex(FaceId::new(1), 0), Some(VertexId::new(3)));
//! assert_eq!(faces.corner_face(CornerId::new(5)), Some(FaceId::new(1)));
//!
//! // Walk the boundary of the face that owns corner 1
//! let start = CornerId::new(1);
//! let mut corner = start;
//! loop {
//!     println!("{:?} -> {:?}", corner, faces.corner_vertex(corner));
//!     corner = faces.next_corner(corner).unwrap();
//!     if corner == start {
//!         break;
//!     }
//! }
//! ```
//!
//! ## Saving STL
//!
//! ```no_run
//! use facets::prelude::*;
//!
//! let coord = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
//! let mut face_set = IndexedFaceSet::new(coord, &[0, 1, 2, -1]).unwrap();
//! face_set.compute_face_normals();
//!
//! facets::io::save(&SceneGraph::from_face_set(face_set), "triangle.stl").unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod io;
pub mod mesh;
pub mod scene;

/// Prelude module for convenient imports.
///
/// This module re-exports the most commonly used types:
///
/// ```
/// use facets::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{MeshError, Result};
    pub use crate::mesh::{CornerId, FaceId, Faces, IndexedFaceSet, NormalBinding, VertexId};
    pub use crate::scene::{Geometry, Node, SceneGraph, Shape};
}

// Re-export nalgebra types for convenience
pub use nalgebra;

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_export_scenario() {
        let coord = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let face_set = IndexedFaceSet::new(coord, &[0, 1, 2, -1])
            .unwrap()
            .with_face_normals(vec![0.0, 0.0, 1.0]);

        let mut out = Vec::new();
        crate::io::stl::write_ascii(&mut out, "triangle", &face_set).unwrap();
        let content = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = content.lines().map(str::trim).collect();

        assert_eq!(
            lines,
            vec![
                "solid triangle",
                "facet normal 0.000000 0.000000 1.000000",
                "outer loop",
                "vertex 0.000000 0.000000 0.000000",
                "vertex 1.000000 0.000000 0.000000",
                "vertex 0.000000 1.000000 0.000000",
                "endloop",
                "endfacet",
                "endsolid",
            ]
        );
    }

    #[test]
    fn test_face_set_navigation() {
        let coord = vec![0.0; 15];
        let face_set = IndexedFaceSet::new(coord, &[0, 1, 2, -1, 1, 3, 4, 2, -1]).unwrap();
        let faces = face_set.faces();

        assert_eq!(faces.num_faces(), 2);
        assert_eq!(faces.num_vertices(), 7);
        assert_eq!(faces.num_corners(), 9);
        assert_eq!(faces.corner_face(CornerId::new(7)), Some(FaceId::new(1)));
        assert_eq!(faces.next_corner(CornerId::new(7)), Some(CornerId::new(4)));
    }
}
