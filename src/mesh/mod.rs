//! Core mesh data structures.
//!
//! # Overview
//!
//! The primary type is [`Faces`], an index over a flat, sentinel-delimited
//! corner list. It answers face sizes and face-local vertex lookups in O(1)
//! and corner to face lookups in O(log F), without rescanning the list.
//!
//! [`IndexedFaceSet`] combines a corner list with vertex coordinates and
//! normals, and is what file savers consume.
//!
//! # Index Types
//!
//! Mesh elements are identified by type-safe index wrappers:
//! - [`FaceId`] - Identifies a face
//! - [`CornerId`] - Identifies a position in the corner list
//! - [`VertexId`] - Identifies a vertex in the coordinate storage
//!
//! # Construction
//!
//! ```
//! use facets::mesh::{FaceId, Faces};
//!
//! // A triangle and a quad
//! let faces = Faces::new(5, &[0, 1, 2, -1, 1, 3, 4, 2, -1]).unwrap();
//! assert_eq!(faces.num_faces(), 2);
//! assert_eq!(faces.face_size(FaceId::new(1)), Some(4));
//! ```

mod face_set;
mod faces;
mod index;

pub use face_set::{IndexedFaceSet, NormalBinding};
pub use faces::Faces;
pub use index::{CornerId, FaceId, VertexId};
