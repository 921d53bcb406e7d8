use anyhow::Result;
use bytemuck::{Pod, Zeroable};

/// Interleaved vertex record uploaded verbatim to the GPU.
///
/// Normals are unit length by construction of the generators; they are not
/// renormalized afterwards.
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x3, // position
        1 => Float32x3  // normal
    ];

    /// Vertex buffer layout: position at offset 0, normal at the byte offset
    /// of the `normal` field, both three-component float, not normalized.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// One triangle as indices into the vertex list.
///
/// Winding is whatever the generator emits; pipelines using `MeshData` leave
/// back-face culling off.
pub type Face = [u32; 3];

/// Ordered vertex + face lists describing one triangle mesh.
///
/// Insertion order is generation order; generators rely on that for their
/// index topology.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MeshData {
    pub vertices: Vec<Vertex>,
    pub faces: Vec<Face>,
}

impl MeshData {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Number of indices an indexed draw of this mesh covers.
    pub fn element_count(&self) -> u32 {
        (self.faces.len() * 3) as u32
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.faces.is_empty()
    }

    /// Raw vertex bytes for buffer upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Raw index bytes for buffer upload (`u32` indices).
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.faces)
    }

    /// Checks that every face index refers to an existing vertex.
    pub fn validate(&self) -> Result<()> {
        let limit = self.vertices.len() as u32;
        for (face_idx, face) in self.faces.iter().enumerate() {
            for &index in face {
                anyhow::ensure!(
                    index < limit,
                    "face {face_idx} references vertex {index}, but only {limit} vertices exist",
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32, z: f32) -> Vertex {
        Vertex {
            position: [x, y, z],
            normal: [0.0, 1.0, 0.0],
        }
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn vertex_layout_matches_interleaved_record() {
        let layout = Vertex::layout();
        assert_eq!(layout.array_stride, 24);
        assert_eq!(layout.attributes[0].offset, 0);
        assert_eq!(layout.attributes[1].offset, 12);
        assert_eq!(layout.attributes[0].format, wgpu::VertexFormat::Float32x3);
        assert_eq!(layout.attributes[1].format, wgpu::VertexFormat::Float32x3);
    }

    // ── counts ────────────────────────────────────────────────────────────

    #[test]
    fn element_count_is_three_per_face() {
        let mesh = MeshData {
            vertices: vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
            faces: vec![[0, 1, 2], [2, 1, 0]],
        };
        assert_eq!(mesh.element_count(), 6);
        assert_eq!(mesh.index_bytes().len(), 6 * 4);
        assert_eq!(mesh.vertex_bytes().len(), 3 * 24);
    }

    // ── validate ──────────────────────────────────────────────────────────

    #[test]
    fn validate_accepts_in_range_indices() {
        let mesh = MeshData {
            vertices: vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0), v(0.0, 1.0, 0.0)],
            faces: vec![[0, 1, 2]],
        };
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn validate_rejects_out_of_range_index() {
        let mesh = MeshData {
            vertices: vec![v(0.0, 0.0, 0.0), v(1.0, 0.0, 0.0)],
            faces: vec![[0, 1, 2]],
        };
        assert!(mesh.validate().is_err());
    }
}
