//! Command-line mesh-to-voxel converter.
//!
//! Loads an OBJ mesh, voxelizes its vertex cloud with the octree or the
//! bisection tree, and writes the resulting boxes back out as an OBJ mesh.

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::info;
use nalgebra::Point3;

use voxel_tree::{points_from_flat, Aabb3, BisectionTree, Octree, VoxelMesh};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Partitioner {
    /// Octant subdivision with complete-subtree merging.
    Octree,
    /// Widest-axis midpoint bisection.
    Bisect,
}

#[derive(Debug, Parser)]
#[command(about = "Voxelize an OBJ mesh's vertex cloud into boxes")]
struct Args {
    /// Input OBJ mesh.
    input: PathBuf,

    /// Output OBJ file for the voxel boxes.
    #[arg(short, long, default_value = "voxel.obj")]
    output: PathBuf,

    /// Which partitioning tree to use.
    #[arg(short, long, value_enum, default_value_t = Partitioner::Octree)]
    partitioner: Partitioner,

    /// Maximum subdivision depth.
    #[arg(short, long, default_value_t = 6)]
    depth: u32,

    /// Bisection only: stop splitting a side at this many points.
    #[arg(short, long, default_value_t = 1)]
    granularity: usize,
}

fn load_vertices(path: &PathBuf) -> Result<Vec<Point3<f32>>> {
    let (models, _) = tobj::load_obj(path, &tobj::LoadOptions::default())
        .with_context(|| format!("failed to load {}", path.display()))?;

    let mut points = Vec::new();
    for model in &models {
        points.extend(points_from_flat(&model.mesh.positions));
    }
    Ok(points)
}

fn voxelize(args: &Args, points: &mut [Point3<f32>]) -> Result<Vec<Aabb3>> {
    match args.partitioner {
        Partitioner::Octree => {
            let tree = Octree::build(points, args.depth);
            Ok(tree.collect_leaf_geometry())
        }
        Partitioner::Bisect => {
            let tree = BisectionTree::build(points, args.depth, args.granularity)
                .context("mesh vertices cannot be partitioned")?;
            Ok(tree.leaf_bounds().to_vec())
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut points = load_vertices(&args.input)?;
    if points.is_empty() {
        bail!("{} contains no vertices", args.input.display());
    }
    info!(
        "loaded {} vertices from {}",
        points.len(),
        args.input.display()
    );

    let boxes = voxelize(&args, &mut points)?;
    info!("{} voxel boxes at depth {}", boxes.len(), args.depth);

    let mesh = VoxelMesh::from_boxes(boxes.iter());
    let file = File::create(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    mesh.write_obj(&mut BufWriter::new(file))
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    println!(
        "wrote {} boxes ({} vertices) to {}",
        boxes.len(),
        mesh.vertices().len(),
        args.output.display()
    );
    Ok(())
}
