//! STL (stereolithography) format support.
//!
//! Saving writes ASCII STL, one facet per triangle, using the per-face normals
//! of the face set. Loading accepts both binary and ASCII files.
//!
//! ```text
//! solid name
//!   facet normal nx ny nz
//!   outer loop
//!     vertex x y z
//!     vertex x y z
//!     vertex x y z
//!   endloop
//!   endfacet
//!   ...
//! endsolid
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::{debug, info, warn};
use tempfile::{Builder, NamedTempFile};

use crate::error::{MeshError, Result};
use crate::mesh::IndexedFaceSet;
use crate::scene::{SceneGraph, Shape};

/// Options for saving STL files.
#[derive(Debug, Clone, Default)]
pub struct SaveOptions {
    /// Name written after `solid`. Defaults to the face set name, then the
    /// shape name, then the file name without directory and extension.
    pub solid_name: Option<String>,
}

/// Normal followed by the three vertices.
type Facet = [[f32; 3]; 4];

/// Save a scene to an ASCII STL file.
///
/// The scene must hold exactly one top-level shape whose geometry is a
/// triangle mesh with per-face normals. If it does not, the function fails
/// with [`MeshError::SavePrecondition`] before touching the file system.
///
/// The output is written to a temporary file next to `path` and moved into
/// place once complete, so a failed write never leaves a partial file behind.
///
/// # Example
///
/// ```no_run
/// use facets::io::stl::{self, SaveOptions};
/// use facets::mesh::IndexedFaceSet;
/// use facets::scene::SceneGraph;
///
/// let coord = vec![0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
/// let ifs = IndexedFaceSet::new(coord, &[0, 1, 2, -1])
///     .unwrap()
///     .with_face_normals(vec![0.0, 0.0, 1.0]);
/// let scene = SceneGraph::from_face_set(ifs);
///
/// stl::save(&scene, "triangle.stl", &SaveOptions::default()).unwrap();
/// ```
pub fn save<P: AsRef<Path>>(scene: &SceneGraph, path: P, options: &SaveOptions) -> Result<()> {
    let path = path.as_ref();
    let reject = |reason: &'static str| {
        warn!("not saving {}: {}", path.display(), reason);
        MeshError::SavePrecondition {
            path: path.to_path_buf(),
            reason,
        }
    };

    let shape = match scene.children.as_slice() {
        [node] => node
            .as_shape()
            .ok_or_else(|| reject("top-level node is not a shape"))?,
        _ => return Err(reject("scene must have exactly one top-level node")),
    };
    let face_set = shape
        .face_set()
        .ok_or_else(|| reject("shape geometry is not an indexed face set"))?;
    let facets = facets(face_set).map_err(reject)?;

    let name = solid_name(options, shape, face_set, path);
    let save_error = |message: String| MeshError::SaveError {
        path: path.to_path_buf(),
        message,
    };

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = create_temp(dir, path).map_err(|e| save_error(e.to_string()))?;
    debug!("writing {} facets to {}", facets.len(), tmp.path().display());

    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        write_facets(&mut writer, &name, &facets).map_err(|e| save_error(e.to_string()))?;
        writer.flush().map_err(|e| save_error(e.to_string()))?;
    }
    tmp.as_file().sync_all().map_err(|e| save_error(e.to_string()))?;
    tmp.persist(path).map_err(|e| save_error(e.to_string()))?;

    info!("saved {} facets to {}", facets.len(), path.display());
    Ok(())
}

/// Write a face set as ASCII STL to any writer.
///
/// Fails with [`MeshError::NotExportable`] if the face set is not a triangle
/// mesh with per-face normals; nothing is written in that case.
pub fn write_ascii<W: Write>(writer: &mut W, solid_name: &str, face_set: &IndexedFaceSet) -> Result<()> {
    let facets = facets(face_set).map_err(|reason| MeshError::NotExportable { reason })?;
    write_facets(writer, solid_name, &facets)?;
    Ok(())
}

/// Load an STL file (binary or ASCII) as a single-shape scene.
///
/// The facet normals of the file become per-face normals of the face set.
///
/// # Example
///
/// ```no_run
/// use facets::io::stl;
///
/// let scene = stl::load("model.stl").unwrap();
/// let ifs = scene.single_face_set().unwrap();
/// println!("{} triangles", ifs.faces().num_faces());
/// ```
pub fn load<P: AsRef<Path>>(path: P) -> Result<SceneGraph> {
    let path = path.as_ref();
    let mut file = File::open(path)?;

    let stl = stl_io::read_stl(&mut file).map_err(|e| MeshError::LoadError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if stl.faces.is_empty() {
        return Err(MeshError::EmptyMesh);
    }

    let coord: Vec<f32> = stl.vertices.iter().flat_map(|v| [v[0], v[1], v[2]]).collect();

    let mut coord_index = Vec::with_capacity(stl.faces.len() * 4);
    let mut normal = Vec::with_capacity(stl.faces.len() * 3);
    for tri in &stl.faces {
        for &v in &tri.vertices {
            let v = i32::try_from(v).map_err(|_| MeshError::LoadError {
                path: path.to_path_buf(),
                message: format!("vertex index {} does not fit a corner list", v),
            })?;
            coord_index.push(v);
        }
        coord_index.push(-1);
        normal.extend_from_slice(&[tri.normal[0], tri.normal[1], tri.normal[2]]);
    }

    let mut face_set = IndexedFaceSet::new(coord, &coord_index)?.with_face_normals(normal);
    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
        face_set = face_set.with_name(stem);
    }

    info!(
        "loaded {} triangles, {} vertices from {}",
        face_set.faces().num_faces(),
        face_set.num_vertices(),
        path.display()
    );
    Ok(SceneGraph::from_face_set(face_set))
}

/// Create the temporary output file with the mode the target would end up
/// with: the existing file's mode, or what `File::create` gives a new file.
fn create_temp(dir: &Path, target: &Path) -> std::io::Result<NamedTempFile> {
    #[cfg_attr(not(unix), allow(unused_mut))]
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        // Masked by the umask, like a plain create.
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    let tmp = builder.tempfile_in(dir)?;

    match std::fs::metadata(target) {
        Ok(meta) => tmp.as_file().set_permissions(meta.permissions())?,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(e),
    }
    Ok(tmp)
}

fn solid_name(options: &SaveOptions, shape: &Shape, face_set: &IndexedFaceSet, path: &Path) -> String {
    options
        .solid_name
        .as_deref()
        .or(face_set.name())
        .or(shape.name.as_deref())
        .or_else(|| path.file_stem().and_then(|s| s.to_str()))
        .unwrap_or("mesh")
        .to_string()
}

/// Resolve every face to its normal and vertex positions.
fn facets(face_set: &IndexedFaceSet) -> std::result::Result<Vec<Facet>, &'static str> {
    if !face_set.is_triangle_mesh() {
        return Err("face set is not a triangle mesh");
    }
    if !face_set.has_face_normals() {
        return Err("face set normals are not bound per face");
    }

    let faces = face_set.faces();
    faces
        .face_ids()
        .map(|f| -> std::result::Result<Facet, &'static str> {
            let n = face_set
                .face_normal(f)
                .ok_or("face normal index is out of range")?;
            let mut facet = [[n.x, n.y, n.z]; 4];
            for (j, slot) in facet[1..].iter_mut().enumerate() {
                let p = faces
                    .face_vertex(f, j)
                    .and_then(|v| face_set.vertex(v))
                    .ok_or("face references a missing vertex")?;
                *slot = [p.x, p.y, p.z];
            }
            Ok(facet)
        })
        .collect()
}

fn write_facets<W: Write>(writer: &mut W, name: &str, facets: &[Facet]) -> std::io::Result<()> {
    writeln!(writer, "solid {}", name)?;
    for [n, v0, v1, v2] in facets {
        writeln!(writer, "  facet normal {:.6} {:.6} {:.6}", n[0], n[1], n[2])?;
        writeln!(writer, "  outer loop")?;
        for v in [v0, v1, v2] {
            writeln!(writer, "    vertex {:.6} {:.6} {:.6}", v[0], v[1], v[2])?;
        }
        writeln!(writer, "  endloop")?;
        writeln!(writer, "  endfacet")?;
    }
    writeln!(writer, "endsolid")?;
    Ok(())
}
