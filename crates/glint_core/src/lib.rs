//! Glint Core - asset-side geometry for the ray tracer.
//!
//! This crate provides:
//!
//! - **Mesh**: raw triangle geometry (positions, flat indices, one
//!   normal per triangle) as produced by asset loaders
//! - **OBJ support**: a minimal Wavefront OBJ parser for `v`/`f` data
//!
//! # Example
//!
//! ```ignore
//! use glint_core::obj::load_obj;
//!
//! let mesh = load_obj("lowpoly_bunny.obj")?;
//! println!("Loaded {} triangles", mesh.triangle_count());
//! ```

pub mod mesh;
pub mod obj;

// Re-export commonly used types
pub use mesh::Mesh;
pub use obj::{load_obj, parse_obj, ObjError};
