//! GPU rendering subsystem.
//!
//! `GpuMesh` owns device-side buffers for one mesh; `MeshPipeline` owns the
//! shader pipeline and frame uniforms and issues the indexed draw.
//!
//! Convention:
//! - CPU geometry is in world units; the vertex shader applies the frame's
//!   rotation and projection*view transforms from a uniform buffer.
//! - depth testing is part of pipeline state, with the depth buffer owned by
//!   `device::Gpu`.

mod common;
mod ctx;
mod mesh;
mod pipeline;

pub use common::FrameUniforms;
pub use ctx::{RenderCtx, RenderTarget};
pub use mesh::GpuMesh;
pub use pipeline::MeshPipeline;
