//! Triangle mesh primitive with a cached world-space transform.
//!
//! Wraps the loader-facing [`glint_core::Mesh`] with a local transform
//! (scale, then Y rotation, then translation), cached world-space
//! positions/normals, and the world-space AABB used for slab rejection.
//!
//! Every mutator rebuilds the caches before returning, so a mesh can
//! never be queried against stale transforms or a stale bounding box.

use crate::hit::{CullMode, HitRecord, MaterialIndex};
use crate::triangle::Triangle;
use glint_math::{Aabb, Mat4, Mat4Ext, Ray, Vec3};

/// A transformed triangle mesh with flat per-triangle normals.
#[derive(Debug, Clone)]
pub struct TriangleMesh {
    // Local-space source geometry
    positions: Vec<Vec3>,
    normals: Vec<Vec3>,
    indices: Vec<u32>,

    pub cull_mode: CullMode,
    pub material_index: MaterialIndex,

    // Transform components, composed as translation * rotation * scale
    // (scale applied to the vertex first)
    scale: Mat4,
    rotation: Mat4,
    translation: Mat4,

    // Caches, rebuilt on every mutation
    transformed_positions: Vec<Vec3>,
    transformed_normals: Vec<Vec3>,
    world_bounds: Aabb,
}

impl TriangleMesh {
    /// Create an empty mesh; triangles are added with [`Self::append_triangle`].
    pub fn new(cull_mode: CullMode, material_index: MaterialIndex) -> Self {
        let mut mesh = Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            cull_mode,
            material_index,
            scale: Mat4::IDENTITY,
            rotation: Mat4::IDENTITY,
            translation: Mat4::IDENTITY,
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
            world_bounds: Aabb::EMPTY,
        };
        mesh.rebuild();
        mesh
    }

    /// Create a mesh from loaded geometry (e.g. an OBJ file).
    pub fn from_mesh(mesh: &glint_core::Mesh, cull_mode: CullMode, material_index: MaterialIndex) -> Self {
        let mut out = Self::new(cull_mode, material_index);
        out.positions = mesh.positions.clone();
        out.normals = mesh.normals.clone();
        out.indices = mesh.indices.clone();
        out.rebuild();
        out
    }

    /// Append a triangle's vertices and face normal.
    pub fn append_triangle(&mut self, triangle: &Triangle) {
        let start = self.positions.len() as u32;

        self.positions.push(triangle.v0);
        self.positions.push(triangle.v1);
        self.positions.push(triangle.v2);
        self.indices.extend_from_slice(&[start, start + 1, start + 2]);
        self.normals.push(triangle.normal);

        self.rebuild();
    }

    /// Set the mesh translation.
    pub fn translate(&mut self, translation: Vec3) {
        self.translation = Mat4::from_translation(translation);
        self.rebuild();
    }

    /// Set the mesh yaw rotation.
    pub fn rotate_y(&mut self, yaw: f32) {
        self.rotation = Mat4::from_rotation_y(yaw);
        self.rebuild();
    }

    /// Set the mesh scale.
    pub fn scale(&mut self, scale: Vec3) {
        self.scale = Mat4::from_scale(scale);
        self.rebuild();
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// World-space bounding box of the transformed mesh.
    pub fn world_bounds(&self) -> Aabb {
        self.world_bounds
    }

    /// Build the world-space triangle at the given index from the caches.
    fn triangle(&self, index: usize) -> Triangle {
        let i0 = self.indices[index * 3] as usize;
        let i1 = self.indices[index * 3 + 1] as usize;
        let i2 = self.indices[index * 3 + 2] as usize;

        Triangle::with_normal(
            self.transformed_positions[i0],
            self.transformed_positions[i1],
            self.transformed_positions[i2],
            self.transformed_normals[index],
            self.cull_mode,
            self.material_index,
        )
    }

    /// Recompute transformed positions/normals and both bounding boxes.
    ///
    /// Positions get the full affine transform; normals only the
    /// rotation, renormalized. The world AABB is the transformed local
    /// AABB, so the slab test stays conservative after any motion.
    fn rebuild(&mut self) {
        let final_transform = self.translation * self.rotation * self.scale;

        self.transformed_positions.clear();
        self.transformed_positions.reserve(self.positions.len());
        for position in &self.positions {
            self.transformed_positions
                .push(final_transform.transform_point3(*position));
        }

        self.transformed_normals.clear();
        self.transformed_normals.reserve(self.normals.len());
        for normal in &self.normals {
            self.transformed_normals
                .push(self.rotation.transform_vector3(*normal).normalize());
        }

        let local_bounds = Aabb::from_point_cloud(&self.positions);
        self.world_bounds = if self.positions.is_empty() {
            Aabb::EMPTY
        } else {
            final_transform.transform_aabb(&local_bounds)
        };
    }

    /// Closest-hit test: slab-reject against the world AABB, then test
    /// every triangle, keeping the closest via the shared record.
    pub fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        if !self.world_bounds.hit(ray) {
            return false;
        }

        let mut did_hit = false;
        for i in 0..self.triangle_count() {
            did_hit |= self.triangle(i).hit(ray, rec);
        }
        did_hit
    }

    /// Any-hit test for shadow rays.
    pub fn hit_any(&self, ray: &Ray) -> bool {
        if !self.world_bounds.hit(ray) {
            return false;
        }

        (0..self.triangle_count()).any(|i| self.triangle(i).hit_any(ray))
    }
}
