//! Scene lights.

use crate::material::Color;
use glint_math::Vec3;

/// A light source.
#[derive(Debug, Clone, Copy)]
pub enum Light {
    /// Omnidirectional emitter with inverse-square falloff
    Point {
        origin: Vec3,
        intensity: f32,
        color: Color,
    },
    /// Parallel rays from a fixed direction, no falloff
    Directional {
        /// Direction the light travels (towards the scene)
        direction: Vec3,
        intensity: f32,
        color: Color,
    },
}

impl Light {
    /// Unit direction from `target` towards the light, plus the
    /// distance to it (used to bound shadow rays).
    ///
    /// Directional lights return their fixed direction (negated, since
    /// `direction` points towards the scene) and an unbounded distance.
    pub fn direction_to(&self, target: Vec3) -> (Vec3, f32) {
        match *self {
            Light::Point { origin, .. } => {
                let to_light = origin - target;
                let distance = to_light.length();
                (to_light / distance, distance)
            }
            Light::Directional { direction, .. } => ((-direction).normalize(), f32::MAX),
        }
    }

    /// Radiance arriving at `target`.
    ///
    /// Point lights fall off with the square of the distance;
    /// directional lights are constant.
    pub fn radiance(&self, target: Vec3) -> Color {
        match *self {
            Light::Point {
                origin,
                intensity,
                color,
            } => {
                let distance_squared = (origin - target).length_squared();
                color * (intensity / distance_squared)
            }
            Light::Directional {
                intensity, color, ..
            } => color * intensity,
        }
    }
}
