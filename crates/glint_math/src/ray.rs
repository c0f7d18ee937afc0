//! Ray type for the tracer.
//!
//! A ray is defined by an origin point, a direction vector, and the
//! `[t_min, t_max)` range of valid hit parameters. The default `t_min`
//! offsets secondary rays off their surface to avoid self-intersection
//! acne.

use glam::Vec3;

/// Default near bound, keeps secondary rays from re-hitting their own surface.
pub const RAY_EPSILON: f32 = 1e-4;

/// A ray with origin, direction, and a valid parameter range.
#[derive(Debug, Clone, Copy)]
pub struct Ray {
    /// Origin point of the ray
    origin: Vec3,
    /// Direction vector (callers normalize before tracing)
    direction: Vec3,
    /// Smallest accepted hit parameter (inclusive)
    pub t_min: f32,
    /// Largest accepted hit parameter (exclusive)
    pub t_max: f32,
}

impl Ray {
    /// Create a new ray with the default parameter range.
    #[inline]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            t_min: RAY_EPSILON,
            t_max: f32::MAX,
        }
    }

    /// Create a ray with an explicit parameter range.
    ///
    /// Used for shadow rays, where `t_max` is clamped to the distance
    /// of the light so occluders behind it are ignored.
    #[inline]
    pub fn with_bounds(origin: Vec3, direction: Vec3, t_min: f32, t_max: f32) -> Self {
        Self {
            origin,
            direction,
            t_min,
            t_max,
        }
    }

    /// Get the ray's origin point.
    #[inline]
    pub fn origin(&self) -> Vec3 {
        self.origin
    }

    /// Get the ray's direction vector.
    #[inline]
    pub fn direction(&self) -> Vec3 {
        self.direction
    }

    /// Compute a point along the ray at parameter t.
    /// P(t) = origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + t * self.direction
    }

    /// Whether t falls inside the ray's accepted range `[t_min, t_max)`.
    #[inline]
    pub fn contains(&self, t: f32) -> bool {
        t >= self.t_min && t < self.t_max
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_at() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 0.0), Vec3::new(1.0, 0.0, 0.0));

        assert_eq!(ray.at(0.0), Vec3::new(0.0, 0.0, 0.0));
        assert_eq!(ray.at(1.0), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(ray.at(2.5), Vec3::new(2.5, 0.0, 0.0));
    }

    #[test]
    fn test_ray_default_bounds() {
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        assert_eq!(ray.t_min, RAY_EPSILON);
        assert_eq!(ray.t_max, f32::MAX);

        // Range is half-open: t_min accepted, t_max not
        assert!(ray.contains(RAY_EPSILON));
        assert!(ray.contains(100.0));
        assert!(!ray.contains(0.0));
        assert!(!ray.contains(f32::MAX));
    }

    #[test]
    fn test_ray_with_bounds() {
        let ray = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 0.5, 4.0);
        assert!(!ray.contains(0.4));
        assert!(ray.contains(0.5));
        assert!(ray.contains(3.9));
        assert!(!ray.contains(4.0));
    }
}
