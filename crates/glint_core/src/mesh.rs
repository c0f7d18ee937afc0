//! Raw mesh geometry as produced by asset loaders.
//!
//! This is the loader-facing representation: local-space positions, a
//! flat index buffer, and one face normal per triangle. The renderer
//! wraps it in its own `TriangleMesh` which adds the transform cache.

use glint_math::Aabb;
use glam::Vec3;

/// A triangle mesh with flat-shaded per-triangle normals.
///
/// Invariants upheld by the constructors:
/// - `indices.len()` is a multiple of 3
/// - `normals.len() == indices.len() / 3` (one normal per triangle,
///   following each triangle's winding order - not per vertex)
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    /// Vertex positions (one Vec3 per vertex)
    pub positions: Vec<Vec3>,

    /// Face normals, one per triangle, unit length
    pub normals: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,
}

impl Mesh {
    /// Create a mesh from positions and indices, computing face normals.
    pub fn new(positions: Vec<Vec3>, indices: Vec<u32>) -> Self {
        let mut mesh = Self {
            positions,
            normals: Vec::new(),
            indices,
        };
        mesh.compute_normals();
        mesh
    }

    /// Create a mesh with caller-supplied per-triangle normals.
    pub fn with_normals(positions: Vec<Vec3>, indices: Vec<u32>, normals: Vec<Vec3>) -> Self {
        debug_assert_eq!(indices.len() % 3, 0);
        debug_assert_eq!(normals.len(), indices.len() / 3);
        Self {
            positions,
            normals,
            indices,
        }
    }

    /// Number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Recompute one unit-length face normal per triangle from the
    /// cross product of its edges.
    pub fn compute_normals(&mut self) {
        self.normals.clear();
        self.normals.reserve(self.indices.len() / 3);

        for face in self.indices.chunks_exact(3) {
            let p0 = self.positions[face[0] as usize];
            let p1 = self.positions[face[1] as usize];
            let p2 = self.positions[face[2] as usize];

            let edge1 = p1 - p0;
            let edge2 = p2 - p0;
            self.normals.push(edge1.cross(edge2).normalize());
        }
    }

    /// Compute the local-space bounding box from raw positions.
    pub fn bounds(&self) -> Aabb {
        Aabb::from_point_cloud(&self.positions)
    }
}
