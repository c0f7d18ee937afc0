use crate::{Interval, Ray, Vec3};

/// Axis-Aligned Bounding Box used to early-reject rays against meshes.
///
/// An AABB is defined by three intervals (one per axis) that bound a 3D volume.
/// The slab test is conservative: it may accept rays the per-triangle tests
/// later reject, but it must never reject a ray that would hit the contents.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Aabb {
    pub x: Interval,
    pub y: Interval,
    pub z: Interval,
}

impl Aabb {
    /// Create a new AABB from three intervals.
    pub fn new(x: Interval, y: Interval, z: Interval) -> Self {
        let mut aabb = Self { x, y, z };
        aabb.pad_to_minimums();
        aabb
    }

    /// Create an AABB from two corner points.
    pub fn from_points(a: Vec3, b: Vec3) -> Self {
        Self::new(
            Interval::new(a.x.min(b.x), a.x.max(b.x)),
            Interval::new(a.y.min(b.y), a.y.max(b.y)),
            Interval::new(a.z.min(b.z), a.z.max(b.z)),
        )
    }

    /// Create an AABB that bounds a set of points.
    pub fn from_point_cloud(points: &[Vec3]) -> Self {
        if points.is_empty() {
            return Self::EMPTY;
        }

        let mut min = Vec3::splat(f32::INFINITY);
        let mut max = Vec3::splat(f32::NEG_INFINITY);
        for p in points {
            min = min.min(*p);
            max = max.max(*p);
        }

        Self::from_points(min, max)
    }

    /// Create an AABB that surrounds two other AABBs.
    pub fn surrounding(box0: &Aabb, box1: &Aabb) -> Self {
        Self {
            x: Interval::surrounding(&box0.x, &box1.x),
            y: Interval::surrounding(&box0.y, &box1.y),
            z: Interval::surrounding(&box0.z, &box1.z),
        }
    }

    /// Minimum corner of the box.
    pub fn min(&self) -> Vec3 {
        Vec3::new(self.x.min, self.y.min, self.z.min)
    }

    /// Maximum corner of the box.
    pub fn max(&self) -> Vec3 {
        Vec3::new(self.x.max, self.y.max, self.z.max)
    }

    /// Test if a ray intersects this AABB within the ray's parameter range.
    ///
    /// Slab method. The per-axis division follows IEEE-754: a zero direction
    /// component yields +/-infinity and the min/max comparisons resolve the
    /// interval correctly, so axis-parallel rays need no special casing.
    pub fn hit(&self, r: &Ray) -> bool {
        let ray_orig = r.origin();
        let ray_dir = r.direction();

        let mut t_interval = Interval::new(r.t_min, r.t_max);

        for axis in 0..3 {
            let (slab, orig, dir) = match axis {
                0 => (self.x, ray_orig.x, ray_dir.x),
                1 => (self.y, ray_orig.y, ray_dir.y),
                _ => (self.z, ray_orig.z, ray_dir.z),
            };

            let adinv = 1.0 / dir;
            let mut t0 = (slab.min - orig) * adinv;
            let mut t1 = (slab.max - orig) * adinv;
            if adinv < 0.0 {
                std::mem::swap(&mut t0, &mut t1);
            }

            t_interval.min = t0.max(t_interval.min);
            t_interval.max = t1.min(t_interval.max);
            if t_interval.max <= t_interval.min {
                return false;
            }
        }

        true
    }

    /// Pad intervals to avoid zero-width slabs (flat geometry).
    fn pad_to_minimums(&mut self) {
        let delta = 0.0001;
        if self.x.size() < delta {
            self.x = Interval::new(self.x.min - delta / 2.0, self.x.max + delta / 2.0);
        }
        if self.y.size() < delta {
            self.y = Interval::new(self.y.min - delta / 2.0, self.y.max + delta / 2.0);
        }
        if self.z.size() < delta {
            self.z = Interval::new(self.z.min - delta / 2.0, self.z.max + delta / 2.0);
        }
    }

    pub const EMPTY: Aabb = Aabb {
        x: Interval::EMPTY,
        y: Interval::EMPTY,
        z: Interval::EMPTY,
    };
}
