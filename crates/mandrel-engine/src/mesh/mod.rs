//! CPU-side mesh data and procedural generation.
//!
//! Generators are pure functions producing `MeshData`; GPU upload lives in
//! `render::GpuMesh`. Convention: positions and normals are interleaved per
//! vertex, faces are `u32` triangle index triples into the vertex list.

mod cylinder;
mod data;

pub use cylinder::{CylinderParams, generate_cylinder};
pub use data::{Face, MeshData, Vertex};
