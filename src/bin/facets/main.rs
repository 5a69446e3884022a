//! Facets CLI - inspect and convert indexed face sets.
//!
//! Usage: facets <COMMAND> [OPTIONS] <INPUT> [OUTPUT]
//!
//! Run `facets --help` for available commands.

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};

use facets::io::{self, stl, SaveOptions};
use facets::mesh::NormalBinding;
use facets::scene::SceneGraph;

#[derive(Parser)]
#[command(name = "facets")]
#[command(author, version, about = "Face index inspection and STL conversion", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Display face set information
    Info {
        /// Input mesh file
        input: PathBuf,
    },

    /// Convert a mesh to ASCII STL
    Convert {
        /// Input mesh file
        input: PathBuf,

        /// Output STL file
        output: PathBuf,

        /// Name written after `solid` (default: output file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Replace the stored normals by geometric face normals
        #[arg(long)]
        recompute_normals: bool,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Info { input } => {
            cmd_info(&input)?;
        }

        Commands::Convert {
            input,
            output,
            name,
            recompute_normals,
        } => {
            cmd_convert(&input, &output, name, recompute_normals)?;
        }
    }

    Ok(())
}

fn binding_label(binding: NormalBinding) -> &'static str {
    match binding {
        NormalBinding::None => "none",
        NormalBinding::PerVertex => "per vertex",
        NormalBinding::PerCorner => "per corner",
        NormalBinding::PerFace => "per face",
        NormalBinding::PerFaceIndexed => "per face (indexed)",
    }
}

fn cmd_info(input: &PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    let scene = io::load(input)?;
    let face_set = scene
        .single_face_set()
        .ok_or("scene does not hold a single indexed face set")?;
    let faces = face_set.faces();

    println!("File: {}", input.display());
    println!("Vertices: {}", face_set.num_vertices());
    println!("Faces: {}", faces.num_faces());
    println!("Corners: {} ({} face vertices)", faces.num_corners(), faces.num_vertices());
    println!("Largest face: {} corners", faces.max_face_size());

    if faces.is_triangle_mesh() {
        println!("Mesh type: Triangle mesh");
    } else {
        println!("Mesh type: Polygon mesh");
    }
    println!("Normals: {}", binding_label(face_set.normal_binding()));

    Ok(())
}

fn cmd_convert(
    input: &PathBuf,
    output: &PathBuf,
    name: Option<String>,
    recompute_normals: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut scene: SceneGraph = io::load(input)?;

    if recompute_normals {
        if let Some(face_set) = scene.single_face_set_mut() {
            println!("Recomputing {} face normals...", face_set.faces().num_faces());
            face_set.compute_face_normals();
        }
    }

    let options = SaveOptions { solid_name: name };

    let start = Instant::now();
    stl::save(&scene, output, &options)?;
    println!("Saved {} in {:.2?}", output.display(), start.elapsed());

    Ok(())
}
