//! Glint renderer - CPU direct lighting
//!
//! A Whitted-style ray tracer: one primary ray per pixel, analytic
//! primitives, hard shadows, no bounces.

mod brdf;
mod camera;
mod hit;
mod light;
mod material;
mod mesh;
mod plane;
mod renderer;
mod scene;
mod sphere;
mod triangle;

pub use brdf::{
    fresnel_schlick, geometry_schlick_ggx, geometry_smith, lambert, lambert_color,
    normal_distribution_ggx, phong,
};
pub use camera::{Camera, CameraInput};
pub use hit::{CullMode, HitRecord, MaterialIndex};
pub use light::Light;
pub use material::{Color, Material};
pub use mesh::TriangleMesh;
pub use plane::Plane;
pub use renderer::{max_to_one, render, ImageBuffer, LightingMode, RenderConfig};
pub use scene::{MeshHandle, Scene};
pub use sphere::Sphere;
pub use triangle::Triangle;

/// Re-export common math types from glint_math
pub use glint_math::{Aabb, Interval, Ray, Vec3};
