//! Shader source management.
//!
//! WGSL text loaded from disk with an explicit reload operation; pipeline
//! rebuilds are the renderer's concern.

mod source;

pub use source::ShaderFile;
