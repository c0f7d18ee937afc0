//! Infinite plane primitive.

use crate::hit::{HitRecord, MaterialIndex};
use glint_math::{Ray, Vec3};

/// An infinite plane through `origin` with the given normal.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material_index: MaterialIndex,
}

impl Plane {
    /// Create a new plane. The normal is normalized on construction.
    pub fn new(origin: Vec3, normal: Vec3, material_index: MaterialIndex) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
            material_index,
        }
    }

    /// Ray parameter of the plane crossing, if finite.
    ///
    /// A ray parallel to the plane divides to +/-infinity or NaN;
    /// those are rejected here rather than propagated as bogus hits.
    #[inline]
    fn solve_t(&self, ray: &Ray) -> Option<f32> {
        let t = (self.origin - ray.origin()).dot(self.normal) / ray.direction().dot(self.normal);
        t.is_finite().then_some(t)
    }

    /// Closest-hit test.
    pub fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        match self.solve_t(ray) {
            Some(t) => rec.try_commit(ray, t, self.normal, self.material_index),
            None => false,
        }
    }

    /// Any-hit test for shadow rays.
    pub fn hit_any(&self, ray: &Ray) -> bool {
        self.solve_t(ray).is_some_and(|t| ray.contains(t))
    }
}
