//! HitRecord and cull modes for ray-object intersection.

use glint_math::{Ray, Vec3};

/// Index into the scene's material table.
pub type MaterialIndex = usize;

/// Which triangle face a ray is allowed to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    /// Discard hits on the front face (ray against the normal)
    FrontFace,
    /// Discard hits on the back face (ray along the normal)
    BackFace,
    /// Both faces are hittable
    #[default]
    None,
}

/// Record of the closest ray-object intersection found so far.
///
/// One record is threaded through a sequence of intersection tests;
/// every test goes through [`HitRecord::try_commit`], which only
/// accepts a hit that is inside the ray's range and closer than the
/// current `t`. That single rule is what makes the record converge on
/// the globally closest hit regardless of test order.
#[derive(Debug, Clone, Copy)]
pub struct HitRecord {
    /// World-space point of intersection
    pub point: Vec3,
    /// World-space surface normal at the intersection, unit length
    pub normal: Vec3,
    /// Ray parameter of the intersection; starts at f32::MAX
    pub t: f32,
    /// Whether any test has committed a hit
    pub did_hit: bool,
    /// Material of the surface that was hit
    pub material_index: MaterialIndex,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            t: f32::MAX,
            did_hit: false,
            material_index: 0,
        }
    }
}

impl HitRecord {
    /// Commit a candidate hit if it is valid and closer than the current one.
    ///
    /// Accepts iff `ray.t_min <= t < ray.t_max` and `t < self.t`.
    /// Returns whether the record was updated.
    #[inline]
    pub fn try_commit(
        &mut self,
        ray: &Ray,
        t: f32,
        normal: Vec3,
        material_index: MaterialIndex,
    ) -> bool {
        if !ray.contains(t) || t >= self.t {
            return false;
        }

        self.t = t;
        self.point = ray.at(t);
        self.normal = normal;
        self.did_hit = true;
        self.material_index = material_index;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_respects_ray_range() {
        let ray = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 0.1, 10.0);
        let mut rec = HitRecord::default();

        assert!(!rec.try_commit(&ray, 0.05, Vec3::Y, 1));
        assert!(!rec.try_commit(&ray, 10.0, Vec3::Y, 1));
        assert!(!rec.did_hit);

        assert!(rec.try_commit(&ray, 5.0, Vec3::Y, 1));
        assert!(rec.did_hit);
        assert_eq!(rec.t, 5.0);
        assert_eq!(rec.point, Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(rec.material_index, 1);
    }

    #[test]
    fn test_commit_keeps_closest() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(rec.try_commit(&ray, 5.0, Vec3::Y, 1));
        // A farther hit must not displace the closer one
        assert!(!rec.try_commit(&ray, 7.0, Vec3::X, 2));
        assert_eq!(rec.t, 5.0);
        assert_eq!(rec.material_index, 1);

        // A closer hit does
        assert!(rec.try_commit(&ray, 2.0, Vec3::X, 2));
        assert_eq!(rec.t, 2.0);
        assert_eq!(rec.material_index, 2);
    }
}
