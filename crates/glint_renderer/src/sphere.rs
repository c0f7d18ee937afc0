//! Sphere primitive for ray tracing.

use crate::hit::{HitRecord, MaterialIndex};
use glint_math::{Ray, Vec3};

/// A sphere primitive.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material_index: MaterialIndex,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(origin: Vec3, radius: f32, material_index: MaterialIndex) -> Self {
        Self {
            origin,
            radius: radius.max(0.0),
            material_index,
        }
    }

    /// Solve the ray-sphere quadratic; returns the roots if the ray's
    /// line crosses the sphere at all.
    #[inline]
    fn roots(&self, ray: &Ray) -> Option<(f32, f32)> {
        let oc = ray.origin() - self.origin;
        let a = ray.direction().dot(ray.direction());
        let b = 2.0 * ray.direction().dot(oc);
        let c = oc.dot(oc) - self.radius * self.radius;

        let discriminant = b * b - 4.0 * a * c;
        if discriminant <= 0.0 {
            return None;
        }

        let sqrtd = discriminant.sqrt();
        Some(((-b - sqrtd) / (2.0 * a), (-b + sqrtd) / (2.0 * a)))
    }

    /// Closest-hit test: commits to the record when this sphere is
    /// nearer than the record's current hit.
    ///
    /// The smaller root is tried first; the larger one covers rays
    /// starting inside the sphere.
    pub fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some((t1, t2)) = self.roots(ray) else {
            return false;
        };

        for t in [t1, t2] {
            if ray.contains(t) {
                let normal = (ray.at(t) - self.origin).normalize();
                return rec.try_commit(ray, t, normal, self.material_index);
            }
        }

        false
    }

    /// Any-hit test for shadow rays. Short-circuits, mutates nothing.
    pub fn hit_any(&self, ray: &Ray) -> bool {
        match self.roots(ray) {
            Some((t1, t2)) => ray.contains(t1) || ray.contains(t2),
            None => false,
        }
    }
}
