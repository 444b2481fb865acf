//! Voxel box meshes and OBJ text export.

use std::io::{self, Write};

use nalgebra::Point3;

use crate::Aabb3;

/// Converts a flat `x, y, z` coordinate array into points.
///
/// This is the interchange format produced by external mesh loaders (one
/// triplet per vertex). A trailing partial triplet is ignored.
pub fn points_from_flat(coords: &[f32]) -> Vec<Point3<f32>> {
    coords
        .chunks_exact(3)
        .map(|c| Point3::new(c[0], c[1], c[2]))
        .collect()
}

/// Triangle offsets for one box, against its 8-vertex base. Two triangles
/// per face, outward winding: -x, +x, -y, +y, -z, +z.
const BOX_TRIANGLES: [u32; 36] = [
    2, 0, 1, 2, 1, 3, // -x
    6, 5, 4, 6, 7, 5, // +x
    0, 5, 1, 0, 4, 5, // -y
    2, 7, 6, 2, 3, 7, // +y
    0, 6, 4, 0, 2, 6, // -z
    1, 7, 3, 1, 5, 7, // +z
];

/// A triangle mesh built from axis-aligned boxes, for voxel visualization.
///
/// Each box expands to 8 corner vertices and 12 triangles. Face indices are
/// stored 1-based, matching the OBJ convention, and the writer emits plain
/// `v x y z` / `f i j k` lines that common OBJ readers accept.
#[derive(Debug, Clone, Default)]
pub struct VoxelMesh {
    vertices: Vec<Point3<f32>>,
    indices: Vec<u32>,
}

impl VoxelMesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mesh from a collection of boxes.
    pub fn from_boxes<'a, I>(boxes: I) -> Self
    where
        I: IntoIterator<Item = &'a Aabb3>,
    {
        let mut mesh = Self::new();
        for bounds in boxes {
            mesh.push_box(bounds);
        }
        mesh
    }

    /// Appends the 8 corners and 12 triangles of `bounds`.
    ///
    /// Corner order per box: min/max combinations with z varying fastest,
    /// then y, then x.
    pub fn push_box(&mut self, bounds: &Aabb3) {
        let base = self.vertices.len() as u32 + 1;
        let (min, max) = (bounds.min(), bounds.max());

        self.vertices.extend([
            Point3::new(min.x, min.y, min.z),
            Point3::new(min.x, min.y, max.z),
            Point3::new(min.x, max.y, min.z),
            Point3::new(min.x, max.y, max.z),
            Point3::new(max.x, min.y, min.z),
            Point3::new(max.x, min.y, max.z),
            Point3::new(max.x, max.y, min.z),
            Point3::new(max.x, max.y, max.z),
        ]);

        self.indices
            .extend(BOX_TRIANGLES.iter().map(|offset| base + offset));
    }

    /// Returns the accumulated vertices.
    #[inline]
    pub fn vertices(&self) -> &[Point3<f32>] {
        &self.vertices
    }

    /// Returns the accumulated 1-based triangle indices, three per face.
    #[inline]
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Returns `true` if no boxes have been added.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Writes the mesh in OBJ text format.
    ///
    /// Vertices are printed with six decimal places (`v -0.500000 ...`),
    /// faces as 1-indexed triangles.
    pub fn write_obj<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        for vertex in &self.vertices {
            writeln!(writer, "v {:.6} {:.6} {:.6}", vertex.x, vertex.y, vertex.z)?;
        }
        for face in self.indices.chunks_exact(3) {
            writeln!(writer, "f {} {} {}", face[0], face[1], face[2])?;
        }
        Ok(())
    }
}
