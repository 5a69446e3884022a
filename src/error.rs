//! Error types for facets.
//!
//! This module defines all error types used throughout the library.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`MeshError`].
pub type Result<T> = std::result::Result<T, MeshError>;

/// Errors that can occur during mesh operations.
#[derive(Error, Debug)]
pub enum MeshError {
    /// The corner list does not follow the sentinel-delimited encoding.
    #[error("invalid mesh encoding: {reason}")]
    InvalidMeshEncoding {
        /// What is wrong with the corner list.
        reason: &'static str,
    },

    /// A corner references a vertex outside the vertex storage.
    #[error("corner {corner} references invalid vertex index {vertex}")]
    InvalidVertexIndex {
        /// Position of the corner in the corner list.
        corner: usize,
        /// The invalid vertex index.
        vertex: usize,
    },

    /// The mesh has no faces.
    #[error("mesh has no faces")]
    EmptyMesh,

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error loading mesh from file.
    #[error("failed to load mesh from {path}: {message}")]
    LoadError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Error saving mesh to file. The target file was not created.
    #[error("failed to save mesh to {path}: {message}")]
    SaveError {
        /// The file path.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// The scene cannot be represented in the target format. Nothing was written.
    #[error("cannot save {path}: {reason}")]
    SavePrecondition {
        /// The file path.
        path: PathBuf,
        /// Which precondition failed.
        reason: &'static str,
    },

    /// The face set is well formed but the target format cannot represent it.
    #[error("face set cannot be exported: {reason}")]
    NotExportable {
        /// Which export requirement failed.
        reason: &'static str,
    },

    /// Unsupported file format.
    #[error("unsupported file format: {extension}")]
    UnsupportedFormat {
        /// The file extension.
        extension: String,
    },
}

impl MeshError {
    /// Create an invalid encoding error.
    pub fn encoding(reason: &'static str) -> Self {
        MeshError::InvalidMeshEncoding { reason }
    }
}
