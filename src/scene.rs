//! A minimal scene graph.
//!
//! Just enough structure to describe what a file saver receives: a list of
//! top-level nodes, where shapes carry geometry and groups carry more nodes.

use crate::mesh::IndexedFaceSet;

/// Root of a scene.
#[derive(Debug, Clone, Default)]
pub struct SceneGraph {
    /// Top-level nodes.
    pub children: Vec<Node>,
}

/// A scene graph node.
#[derive(Debug, Clone)]
pub enum Node {
    /// A renderable shape.
    Shape(Shape),
    /// A group of child nodes.
    Group(Vec<Node>),
}

/// A shape node.
#[derive(Debug, Clone, Default)]
pub struct Shape {
    /// Optional node name.
    pub name: Option<String>,
    /// The geometry of this shape.
    pub geometry: Option<Geometry>,
}

/// Geometry attached to a shape.
#[derive(Debug, Clone)]
pub enum Geometry {
    /// A polygon mesh.
    IndexedFaceSet(IndexedFaceSet),
    /// Unconnected points, as xyz triples.
    PointSet(Vec<f32>),
}

impl SceneGraph {
    /// Create an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a scene holding a single shape with the given face set.
    pub fn from_face_set(face_set: IndexedFaceSet) -> Self {
        Self {
            children: vec![Node::Shape(Shape {
                name: None,
                geometry: Some(Geometry::IndexedFaceSet(face_set)),
            })],
        }
    }

    /// The face set of the only top-level shape, if the scene has exactly that form.
    pub fn single_face_set(&self) -> Option<&IndexedFaceSet> {
        match self.children.as_slice() {
            [Node::Shape(shape)] => shape.face_set(),
            _ => None,
        }
    }

    /// The face set of the only top-level shape, mutably.
    pub fn single_face_set_mut(&mut self) -> Option<&mut IndexedFaceSet> {
        match self.children.as_mut_slice() {
            [Node::Shape(Shape {
                geometry: Some(Geometry::IndexedFaceSet(ifs)),
                ..
            })] => Some(ifs),
            _ => None,
        }
    }
}

impl Node {
    /// The shape in this node, if it is one.
    pub fn as_shape(&self) -> Option<&Shape> {
        match self {
            Node::Shape(shape) => Some(shape),
            Node::Group(_) => None,
        }
    }
}

impl Shape {
    /// The geometry as a face set, if it is one.
    pub fn face_set(&self) -> Option<&IndexedFaceSet> {
        match &self.geometry {
            Some(Geometry::IndexedFaceSet(ifs)) => Some(ifs),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> IndexedFaceSet {
        IndexedFaceSet::new(vec![0.0; 9], &[0, 1, 2, -1]).unwrap()
    }

    #[test]
    fn test_single_face_set() {
        let mut scene = SceneGraph::from_face_set(triangle());
        assert!(scene.single_face_set().is_some());
        assert!(scene.single_face_set_mut().is_some());
    }

    #[test]
    fn test_single_face_set_rejects_other_layouts() {
        assert!(SceneGraph::new().single_face_set().is_none());

        let mut scene = SceneGraph::from_face_set(triangle());
        scene.children.push(Node::Group(Vec::new()));
        assert!(scene.single_face_set().is_none());

        let scene = SceneGraph {
            children: vec![Node::Shape(Shape {
                name: None,
                geometry: Some(Geometry::PointSet(vec![0.0; 3])),
            })],
        };
        assert!(scene.single_face_set().is_none());
        assert!(scene.children[0].as_shape().is_some());
    }
}
