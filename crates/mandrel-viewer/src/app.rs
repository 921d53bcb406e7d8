use glam::{Mat4, Vec3};

use mandrel_engine::core::{App, AppControl, FrameCtx};
use mandrel_engine::input::Key;
use mandrel_engine::mesh::{self, CylinderParams};
use mandrel_engine::render::{FrameUniforms, GpuMesh, MeshPipeline};
use mandrel_engine::scene::Camera;
use mandrel_engine::shader::ShaderFile;

/// Demo time scale: elapsed wall-clock seconds to animation seconds.
const TIME_SCALE: f32 = 0.4;

const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.01,
    g: 0.1,
    b: 0.1,
    a: 1.0,
};

/// GPU resources built on the first frame, once a device exists.
struct SceneResources {
    mesh: GpuMesh,
    pipeline: MeshPipeline,
}

/// The cylinder demo application.
///
/// Owns the camera, the shader source and the GPU-side scene resources;
/// the runtime owns the window and device.
pub struct ViewerApp {
    camera: Camera,
    shader: ShaderFile,
    view_projection: Option<Mat4>,
    scene: Option<SceneResources>,
}

impl ViewerApp {
    pub fn new(shader: ShaderFile) -> Self {
        Self {
            camera: Camera::default(),
            shader,
            view_projection: None,
            scene: None,
        }
    }

    fn ensure_scene(
        &mut self,
        device: &wgpu::Device,
        surface_format: wgpu::TextureFormat,
    ) -> anyhow::Result<()> {
        if self.scene.is_some() {
            return Ok(());
        }

        let data = mesh::generate_cylinder(CylinderParams::default());
        log::info!(
            "generated cylinder mesh: {} vertices, {} faces",
            data.vertex_count(),
            data.face_count(),
        );

        let mesh = GpuMesh::new(device, &data)?;
        let pipeline = MeshPipeline::new(
            device,
            surface_format,
            wgpu::PrimitiveTopology::TriangleList,
            self.shader.text(),
        )?;

        self.scene = Some(SceneResources { mesh, pipeline });
        Ok(())
    }

    fn reload_shader(&mut self, device: &wgpu::Device) {
        let Some(scene) = self.scene.as_mut() else {
            return;
        };

        match self.shader.reload() {
            Ok(true) => match scene.pipeline.rebuild(device, self.shader.text()) {
                Ok(()) => log::info!("shader reloaded"),
                Err(e) => {
                    log::error!("shader reload rejected, keeping previous pipeline: {e:#}");
                }
            },
            Ok(false) => log::warn!("shader source is embedded; nothing to reload"),
            Err(e) => log::error!("shader reload failed: {e:#}"),
        }
    }
}

impl App for ViewerApp {
    fn on_resize(&mut self, _new_size: winit::dpi::PhysicalSize<u32>) {
        self.view_projection = None;
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_released(Key::Escape) {
            return AppControl::Exit;
        }

        if let Err(e) = self.ensure_scene(ctx.gpu.device(), ctx.gpu.surface_format()) {
            log::error!("failed to build scene resources: {e:#}");
            return AppControl::Exit;
        }

        if ctx.input_frame.key_released(Key::F5) {
            self.reload_shader(ctx.gpu.device());
        }

        let view_projection = match self.view_projection {
            Some(m) => m,
            None => {
                let m = self.camera.view_projection(ctx.gpu.size());
                self.view_projection = Some(m);
                m
            }
        };

        let t = ctx.time.elapsed * TIME_SCALE;
        let uniforms = FrameUniforms::new(view_projection, spin(t), shading_level(t));

        let Some(scene) = self.scene.as_ref() else {
            return AppControl::Exit;
        };
        scene.pipeline.write_uniforms(ctx.gpu.queue(), &uniforms);

        ctx.render(CLEAR_COLOR, |_rctx, target| {
            scene.pipeline.render(target, &scene.mesh);
        })
    }
}

/// Shading band count for animation time `t`: sweeps `[1, 16]` with the sine
/// of `t`. The clamp pins the `sin(t) == 1.0` edge to 16.
fn shading_level(t: f32) -> i32 {
    let raw = ((t.sin() * 0.5 + 0.5) * 16.0) as i32 + 1;
    raw.clamp(1, 16)
}

/// Model rotation for animation time `t`: angle `t` about a slowly wobbling
/// axis.
fn spin(t: f32) -> Mat4 {
    let axis = Vec3::new((0.35 * t).sin(), 1.0, (0.35 * t).cos()).normalize();
    Mat4::from_axis_angle(axis, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shading_level_stays_in_range() {
        let mut t = 0.0_f32;
        while t < 20.0 {
            let level = shading_level(t);
            assert!((1..=16).contains(&level), "level {level} at t={t}");
            t += 0.01;
        }
    }

    #[test]
    fn shading_level_reaches_both_extremes() {
        use std::f32::consts::PI;
        assert_eq!(shading_level(PI / 2.0), 16);
        assert_eq!(shading_level(-PI / 2.0), 1);
    }

    #[test]
    fn spin_preserves_lengths() {
        let m = spin(1.7);
        let v = m.transform_vector3(Vec3::new(1.0, 2.0, 3.0));
        let diff = (v.length() - Vec3::new(1.0, 2.0, 3.0).length()).abs();
        assert!(diff < 1e-4);
    }
}
