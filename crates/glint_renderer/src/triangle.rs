//! Triangle primitive with face culling.
//!
//! Intersects via the precomputed face normal for the plane term,
//! then a barycentric-coordinate test built from edge dot products.

use crate::hit::{CullMode, HitRecord, MaterialIndex};
use glint_math::{Ray, Vec3};

/// A single triangle with a precomputed, flat-shaded face normal.
#[derive(Debug, Clone, Copy)]
pub struct Triangle {
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Face normal, unit length, fixed by the winding order
    pub normal: Vec3,
    pub cull_mode: CullMode,
    pub material_index: MaterialIndex,
}

impl Triangle {
    /// Create a triangle, computing the normal from the winding order.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3, cull_mode: CullMode, material_index: MaterialIndex) -> Self {
        let normal = (v1 - v0).cross(v2 - v0).normalize();
        Self {
            v0,
            v1,
            v2,
            normal,
            cull_mode,
            material_index,
        }
    }

    /// Create a triangle with a caller-supplied normal (mesh triangles
    /// reuse the mesh's precomputed, already-transformed normals).
    pub fn with_normal(
        v0: Vec3,
        v1: Vec3,
        v2: Vec3,
        normal: Vec3,
        cull_mode: CullMode,
        material_index: MaterialIndex,
    ) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal,
            cull_mode,
            material_index,
        }
    }

    /// Plane crossing parameter, after the cull check. `None` means the
    /// facing direction disqualifies the hit or the ray is (near-)
    /// parallel to the triangle plane.
    #[inline]
    fn solve_t(&self, ray: &Ray) -> Option<f32> {
        let det = self.normal.dot(ray.direction());
        if det.abs() < 1e-8 {
            return None;
        }

        match self.cull_mode {
            CullMode::FrontFace if det < 0.0 => return None,
            CullMode::BackFace if det > 0.0 => return None,
            _ => {}
        }

        Some((self.v0 - ray.origin()).dot(self.normal) / det)
    }

    /// Whether a point (already on the triangle's plane) falls inside
    /// the triangle, via barycentric coordinates from edge dots.
    #[inline]
    fn contains_point(&self, p: Vec3) -> bool {
        let edge1 = self.v1 - self.v0;
        let edge2 = self.v2 - self.v0;
        let vp = p - self.v0;

        let dot11 = edge1.dot(edge1);
        let dot12 = edge1.dot(edge2);
        let dot22 = edge2.dot(edge2);
        let dp1 = edge1.dot(vp);
        let dp2 = edge2.dot(vp);

        // Degenerate triangles give denominator ~0; the NaN/inf
        // barycentrics fail the comparisons below, which is a miss.
        let denominator = dot11 * dot22 - dot12 * dot12;
        let u = (dot22 * dp1 - dot12 * dp2) / denominator;
        let v = (dot11 * dp2 - dot12 * dp1) / denominator;

        u >= 0.0 && v >= 0.0 && u + v <= 1.0
    }

    /// Closest-hit test.
    pub fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = self.solve_t(ray) else {
            return false;
        };
        // Skip the barycentric work when the plane crossing cannot win
        if !ray.contains(t) || t >= rec.t {
            return false;
        }
        if !self.contains_point(ray.at(t)) {
            return false;
        }

        rec.try_commit(ray, t, self.normal, self.material_index)
    }

    /// Any-hit test for shadow rays.
    pub fn hit_any(&self, ray: &Ray) -> bool {
        match self.solve_t(ray) {
            Some(t) => ray.contains(t) && self.contains_point(ray.at(t)),
            None => false,
        }
    }
}
