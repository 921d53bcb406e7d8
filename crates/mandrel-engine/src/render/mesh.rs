use anyhow::{Context, Result};
use wgpu::util::DeviceExt;

use crate::mesh::MeshData;

/// Device-side storage for one mesh.
///
/// Vertex and index data are uploaded once at construction with static-usage
/// buffers; there is no re-upload path. The buffers are released when the
/// `GpuMesh` is dropped (exclusive owner, no sharing).
pub struct GpuMesh {
    vertex_buf: wgpu::Buffer,
    index_buf: wgpu::Buffer,
    element_count: u32,
}

impl GpuMesh {
    /// Uploads `data` to device-resident buffers.
    ///
    /// Fails when the mesh is empty or its index data references vertices
    /// that do not exist; a mesh that passed generation never trips this.
    pub fn new(device: &wgpu::Device, data: &MeshData) -> Result<Self> {
        anyhow::ensure!(!data.is_empty(), "mesh has no geometry to upload");
        data.validate().context("mesh index data is inconsistent")?;

        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mandrel mesh vertices"),
            contents: data.vertex_bytes(),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("mandrel mesh indices"),
            contents: data.index_bytes(),
            usage: wgpu::BufferUsages::INDEX,
        });

        Ok(Self {
            vertex_buf,
            index_buf,
            element_count: data.element_count(),
        })
    }

    /// Number of indices covered by [`draw`](Self::draw).
    pub fn element_count(&self) -> u32 {
        self.element_count
    }

    /// Binds the buffers and issues one indexed draw into an open pass.
    ///
    /// Pipeline and bind groups must already be set on `rpass`.
    pub fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        rpass.set_index_buffer(self.index_buf.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.element_count, 0, 0..1);
    }
}
