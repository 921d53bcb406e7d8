use anyhow::Result;

use crate::device::DEPTH_FORMAT;
use crate::mesh::Vertex;

use super::common::{self, FrameUniforms};
use super::{GpuMesh, RenderTarget};

/// Shader pipeline + frame uniforms for mesh rendering.
///
/// Owns the render pipeline built from WGSL source text, the uniform buffer
/// and its bind group. Depth testing is baked into the pipeline state, as is
/// the primitive topology (the original draw-call mode argument moved to
/// construction time, which is where wgpu fixes it).
pub struct MeshPipeline {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    uniform_buf: wgpu::Buffer,
    surface_format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
}

impl MeshPipeline {
    /// Builds the pipeline from WGSL `source`.
    ///
    /// Shader compilation problems surface as an error here; construction
    /// failure is fatal for the caller.
    pub fn new(
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
        topology: wgpu::PrimitiveTopology,
        source: &str,
    ) -> Result<Self> {
        let bind_group_layout =
            device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
                label: Some("mandrel mesh bgl"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX | wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: Some(common::uniform_min_binding_size()),
                    },
                    count: None,
                }],
            });

        let uniform_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("mandrel mesh ubo"),
            size: std::mem::size_of::<FrameUniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("mandrel mesh bind group"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });

        let pipeline =
            build_pipeline(device, &bind_group_layout, surface_format, topology, source)?;

        Ok(Self {
            pipeline,
            bind_group_layout,
            bind_group,
            uniform_buf,
            surface_format,
            topology,
        })
    }

    /// Rebuilds the pipeline from new WGSL `source` (shader hot reload).
    ///
    /// On failure the previous pipeline stays in place and the error is
    /// returned for the caller to report; rendering continues unaffected.
    pub fn rebuild(&mut self, device: &wgpu::Device, source: &str) -> Result<()> {
        let pipeline = build_pipeline(
            device,
            &self.bind_group_layout,
            self.surface_format,
            self.topology,
            source,
        )?;
        self.pipeline = pipeline;
        Ok(())
    }

    /// Uploads this frame's uniform values.
    pub fn write_uniforms(&self, queue: &wgpu::Queue, uniforms: &FrameUniforms) {
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(uniforms));
    }

    /// Draws `mesh` into `target` with depth testing enabled.
    ///
    /// Begins its own render pass loading the previously cleared color and
    /// depth attachments, binds pipeline + uniforms, and issues the mesh's
    /// single indexed draw.
    pub fn render(&self, target: &mut RenderTarget<'_>, mesh: &GpuMesh) {
        let mut rpass = target
            .encoder
            .begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("mandrel mesh pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: target.color_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: target.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Load,
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
                multiview_mask: None,
            });

        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        mesh.draw(&mut rpass);
    }
}

/// Creates shader module + render pipeline under a validation error scope.
///
/// wgpu reports invalid WGSL through the device error callback rather than a
/// `Result`; the error scope turns that into a value we can hand back, which
/// is what keeps shader reload a soft failure.
fn build_pipeline(
    device: &wgpu::Device,
    bind_group_layout: &wgpu::BindGroupLayout,
    surface_format: wgpu::TextureFormat,
    topology: wgpu::PrimitiveTopology,
    source: &str,
) -> Result<wgpu::RenderPipeline> {
    let error_scope = device.push_error_scope(wgpu::ErrorFilter::Validation);

    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("mandrel mesh shader"),
        source: wgpu::ShaderSource::Wgsl(source.into()),
    });

    let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("mandrel mesh pipeline layout"),
        bind_group_layouts: &[bind_group_layout],
        immediate_size: 0,
    });

    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("mandrel mesh pipeline"),
        layout: Some(&pipeline_layout),

        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_main"),
            compilation_options: Default::default(),
            buffers: &[Vertex::layout()],
        },

        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_main"),
            compilation_options: Default::default(),
            targets: &[Some(wgpu::ColorTargetState {
                format: surface_format,
                blend: None,
                write_mask: wgpu::ColorWrites::ALL,
            })],
        }),

        primitive: wgpu::PrimitiveState {
            topology,
            strip_index_format: None,
            front_face: wgpu::FrontFace::Ccw,
            // Generator winding is unspecified; draw both sides.
            cull_mode: None,
            polygon_mode: wgpu::PolygonMode::Fill,
            unclipped_depth: false,
            conservative: false,
        },

        depth_stencil: Some(wgpu::DepthStencilState {
            format: DEPTH_FORMAT,
            depth_write_enabled: true,
            depth_compare: wgpu::CompareFunction::Less,
            stencil: wgpu::StencilState::default(),
            bias: wgpu::DepthBiasState::default(),
        }),
        multisample: wgpu::MultisampleState::default(),

        multiview_mask: None,
        cache: None,
    });

    if let Some(err) = pollster::block_on(error_scope.pop()) {
        anyhow::bail!("shader pipeline rejected: {err}");
    }

    Ok(pipeline)
}
