//! Minimal Wavefront OBJ loading.
//!
//! Parses only the subset the tracer consumes: `v x y z` vertex lines,
//! `f i0 i1 i2` triangle lines with 1-based indices, and `#` comments.
//! Anything else on a line past the consumed tokens is ignored.
//!
//! A malformed file yields an error, never partially-populated
//! geometry: the mesh is validated before it is returned.

use std::path::Path;

use glam::Vec3;
use log::{debug, warn};
use thiserror::Error;

use crate::mesh::Mesh;

/// Errors that can occur while loading an OBJ file.
#[derive(Error, Debug)]
pub enum ObjError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line}: {message}")]
    Malformed { line: usize, message: String },

    #[error("line {line}: face index {index} out of range (mesh has {vertex_count} vertices)")]
    IndexOutOfRange {
        line: usize,
        index: i64,
        vertex_count: usize,
    },
}

/// Result type for OBJ loading operations.
pub type ObjResult<T> = Result<T, ObjError>;

/// Load an OBJ file from disk.
pub fn load_obj<P: AsRef<Path>>(path: P) -> ObjResult<Mesh> {
    let path = path.as_ref();
    let source = std::fs::read_to_string(path)?;
    let mesh = parse_obj(&source)?;
    debug!(
        "loaded {:?}: {} vertices, {} triangles",
        path,
        mesh.positions.len(),
        mesh.triangle_count()
    );
    Ok(mesh)
}

/// Parse OBJ text into a mesh with per-triangle normals.
pub fn parse_obj(source: &str) -> ObjResult<Mesh> {
    let mut positions: Vec<Vec3> = Vec::new();
    let mut indices: Vec<u32> = Vec::new();

    for (line_index, line) in source.lines().enumerate() {
        let line_no = line_index + 1;
        let mut tokens = line.split_whitespace();

        match tokens.next() {
            None | Some("#") => {}
            Some("v") => {
                let x = parse_float(tokens.next(), line_no)?;
                let y = parse_float(tokens.next(), line_no)?;
                let z = parse_float(tokens.next(), line_no)?;
                positions.push(Vec3::new(x, y, z));
            }
            Some("f") => {
                for _ in 0..3 {
                    let raw = parse_index(tokens.next(), line_no)?;
                    // OBJ indices are 1-based
                    if raw < 1 || raw as usize > positions.len() {
                        return Err(ObjError::IndexOutOfRange {
                            line: line_no,
                            index: raw,
                            vertex_count: positions.len(),
                        });
                    }
                    indices.push((raw - 1) as u32);
                }
            }
            Some(other) => {
                // Unsupported statements (vn, vt, g, usemtl, ...) are skipped
                if !matches!(other, "vn" | "vt" | "g" | "o" | "s" | "usemtl" | "mtllib") {
                    warn!("obj: ignoring unknown statement '{}' on line {}", other, line_no);
                }
            }
        }
    }

    Ok(Mesh::new(positions, indices))
}

fn parse_float(token: Option<&str>, line: usize) -> ObjResult<f32> {
    let token = token.ok_or_else(|| ObjError::Malformed {
        line,
        message: "expected 3 coordinates after 'v'".into(),
    })?;
    token.parse().map_err(|_| ObjError::Malformed {
        line,
        message: format!("invalid coordinate '{}'", token),
    })
}

fn parse_index(token: Option<&str>, line: usize) -> ObjResult<i64> {
    let token = token.ok_or_else(|| ObjError::Malformed {
        line,
        message: "expected 3 indices after 'f'".into(),
    })?;
    // Accept the "i/t/n" face form by taking the position index
    let position_part = token.split('/').next().unwrap_or(token);
    position_part.parse().map_err(|_| ObjError::Malformed {
        line,
        message: format!("invalid face index '{}'", token),
    })
}
