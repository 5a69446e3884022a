//! Mesh file I/O.
//!
//! This module provides functions for loading and saving scenes in various formats.
//!
//! # Supported Formats
//!
//! | Format | Extension | Load | Save | Notes |
//! |--------|-----------|------|------|-------|
//! | STL | `.stl` | ✓ | ✓ | Loads binary and ASCII, saves ASCII |
//!
//! # Usage
//!
//! ```no_run
//! use facets::io::{load, save};
//!
//! // Load with automatic format detection
//! let scene = load("model.stl").unwrap();
//!
//! // Save with automatic format detection
//! save(&scene, "output.stl").unwrap();
//! ```

pub mod stl;

use std::path::Path;

use crate::error::{MeshError, Result};
use crate::scene::SceneGraph;

pub use stl::SaveOptions;

/// Supported mesh file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// STL (stereolithography) format.
    Stl,
}

impl Format {
    /// Detect format from file extension.
    pub fn from_extension(ext: &str) -> Option<Format> {
        match ext.to_lowercase().as_str() {
            "stl" => Some(Format::Stl),
            _ => None,
        }
    }

    /// Detect format from file path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Format> {
        path.as_ref()
            .extension()
            .and_then(|ext| ext.to_str())
            .and_then(Format::from_extension)
    }
}

fn detect(path: &Path) -> Result<Format> {
    Format::from_path(path).ok_or_else(|| MeshError::UnsupportedFormat {
        extension: path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("(none)")
            .to_string(),
    })
}

/// Load a scene from a file with automatic format detection.
///
/// The format is determined by the file extension.
pub fn load<P: AsRef<Path>>(path: P) -> Result<SceneGraph> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Stl => stl::load(path),
    }
}

/// Save a scene to a file with automatic format detection and default options.
///
/// The format is determined by the file extension.
pub fn save<P: AsRef<Path>>(scene: &SceneGraph, path: P) -> Result<()> {
    let path = path.as_ref();
    match detect(path)? {
        Format::Stl => stl::save(scene, path, &SaveOptions::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::IndexedFaceSet;

    #[test]
    fn test_format_detection() {
        assert_eq!(Format::from_extension("stl"), Some(Format::Stl));
        assert_eq!(Format::from_extension("STL"), Some(Format::Stl));
        assert_eq!(Format::from_path("a/b/model.stl"), Some(Format::Stl));
        assert_eq!(Format::from_path("model.obj"), None);
        assert_eq!(Format::from_path("model"), None);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.wrl");

        let ifs = IndexedFaceSet::new(vec![0.0; 9], &[0, 1, 2, -1])
            .unwrap()
            .with_face_normals(vec![0.0, 0.0, 1.0]);
        let err = save(&SceneGraph::from_face_set(ifs), &path).unwrap_err();
        assert!(matches!(err, MeshError::UnsupportedFormat { ref extension } if extension == "wrl"));
        assert!(!path.exists());

        assert!(matches!(load("model").unwrap_err(), MeshError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tri.STL");

        let ifs = IndexedFaceSet::new(vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0], &[0, 1, 2, -1])
            .unwrap()
            .with_face_normals(vec![0.0, 0.0, 1.0]);
        save(&SceneGraph::from_face_set(ifs), &path).unwrap();

        let scene = load(&path).unwrap();
        let loaded = scene.single_face_set().unwrap();
        assert_eq!(loaded.faces().num_faces(), 1);
    }
}
