//! Index types for mesh elements.
//!
//! Faces, corners and vertices are all plain integers in the flat corner
//! encoding. These wrappers keep them apart in the query API so a corner
//! position can never be passed where a face number is expected.

use std::fmt::{self, Debug};

/// A type-safe face index.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId(u32);

/// A type-safe corner index: an absolute position in the corner list.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct CornerId(u32);

/// A type-safe vertex index into the vertex coordinate storage.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

macro_rules! impl_index_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new index from a raw value.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index <= u32::MAX as usize, "index {} too large for u32", index);
                Self(index as u32)
            }

            /// Get the raw index value.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", $display, self.0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_index_type!(FaceId, "F");
impl_index_type!(CornerId, "C");
impl_index_type!(VertexId, "V");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_roundtrip() {
        assert_eq!(FaceId::new(7).index(), 7);
        assert_eq!(CornerId::from(3).index(), 3);
        assert_eq!(VertexId::new(0), VertexId::from(0));
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", FaceId::new(2)), "F(2)");
        assert_eq!(format!("{:?}", CornerId::new(5)), "C(5)");
        assert_eq!(format!("{:?}", VertexId::new(9)), "V(9)");
        assert_eq!(VertexId::new(9).to_string(), "9");
    }

    #[test]
    fn test_ordering() {
        assert!(CornerId::new(1) < CornerId::new(2));
        assert!(FaceId::new(10) > FaceId::new(3));
    }
}
