use glam::{Mat4, Vec3};
use winit::dpi::PhysicalSize;

/// Fixed perspective camera.
///
/// The combined projection*view matrix only depends on the drawable size, so
/// the driver recomputes it on resize and caches it otherwise.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Camera {
    /// Vertical field of view, radians.
    pub fovy: f32,
    pub znear: f32,
    pub zfar: f32,
    pub eye: Vec3,
    pub center: Vec3,
    pub up: Vec3,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            fovy: 40.0_f32.to_radians(),
            znear: 1.0,
            zfar: 16.0,
            eye: Vec3::new(0.0, 1.0, 8.0),
            center: Vec3::ZERO,
            up: Vec3::Y,
        }
    }
}

impl Camera {
    /// Returns projection * view for the given drawable size.
    ///
    /// `perspective_rh` targets the 0..1 clip depth range wgpu uses. A zero
    /// height (minimized window) is guarded so the aspect stays finite.
    pub fn view_projection(&self, size: PhysicalSize<u32>) -> Mat4 {
        let aspect = size.width as f32 / (size.height as f32).max(1.0);
        let proj = Mat4::perspective_rh(self.fovy, aspect, self.znear, self.zfar);
        let view = Mat4::look_at_rh(self.eye, self.center, self.up);
        proj * view
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(w: u32, h: u32) -> PhysicalSize<u32> {
        PhysicalSize::new(w, h)
    }

    #[test]
    fn matrix_is_finite() {
        let m = Camera::default().view_projection(size(640, 480));
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn zero_height_does_not_produce_nan() {
        let m = Camera::default().view_projection(size(640, 0));
        assert!(m.to_cols_array().iter().all(|v| v.is_finite()));
    }

    #[test]
    fn look_target_projects_in_front_of_the_camera() {
        let cam = Camera::default();
        let clip = cam.view_projection(size(640, 480)) * cam.center.extend(1.0);
        // In front of the camera: positive w, depth within the clip range.
        assert!(clip.w > 0.0);
        assert!(clip.z >= 0.0 && clip.z <= clip.w);
    }

    #[test]
    fn aspect_follows_drawable_size() {
        let cam = Camera::default();
        let wide = cam.view_projection(size(1280, 480));
        let square = cam.view_projection(size(480, 480));
        // Wider aspect shrinks the x focal scale.
        assert!(wide.col(0).x < square.col(0).x);
    }
}
