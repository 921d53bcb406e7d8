//! Shared GPU types used by the mesh pipeline.

use bytemuck::{Pod, Zeroable};
use glam::Mat4;

/// Per-frame uniforms consumed by the mesh shader.
///
/// Layout mirrors the WGSL uniform struct: two column-major mat4x4 followed
/// by an `i32`, padded to the 16-byte struct alignment WGSL rounds up to.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct FrameUniforms {
    /// projection * view.
    pub transform: [[f32; 4]; 4],
    /// Time-derived model rotation.
    pub rotation: [[f32; 4]; 4],
    /// Shading band count, in `[1, 16]`.
    pub level: i32,
    pub _pad: [u32; 3],
}

impl FrameUniforms {
    pub fn new(transform: Mat4, rotation: Mat4, level: i32) -> Self {
        Self {
            transform: transform.to_cols_array_2d(),
            rotation: rotation.to_cols_array_2d(),
            level,
            _pad: [0; 3],
        }
    }
}

/// Minimum binding size for the frame uniform buffer.
///
/// `FrameUniforms` is non-empty by construction; centralising this avoids an
/// `.unwrap()` at the pipeline-creation site.
pub(super) fn uniform_min_binding_size() -> std::num::NonZeroU64 {
    std::num::NonZeroU64::new(std::mem::size_of::<FrameUniforms>() as u64)
        .expect("FrameUniforms has non-zero size by construction")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_struct_matches_wgsl_padding() {
        // Two mat4x4 (128 bytes) + i32 + padding must round to the WGSL
        // struct size of 144.
        assert_eq!(std::mem::size_of::<FrameUniforms>(), 144);
    }

    #[test]
    fn matrices_are_column_major() {
        let m = Mat4::from_translation(glam::Vec3::new(1.0, 2.0, 3.0));
        let u = FrameUniforms::new(m, Mat4::IDENTITY, 1);
        // Translation lands in the fourth column.
        assert_eq!(u.transform[3][0], 1.0);
        assert_eq!(u.transform[3][1], 2.0);
        assert_eq!(u.transform[3][2], 3.0);
    }
}
