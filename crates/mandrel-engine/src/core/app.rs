use winit::dpi::PhysicalSize;
use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by the driver binary.
pub trait App {
    /// Called for window events the runtime does not consume itself.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called after the surface was reconfigured to a new drawable size.
    ///
    /// Size-derived state (camera matrices) should be invalidated here.
    fn on_resize(&mut self, new_size: PhysicalSize<u32>) {
        let _ = new_size;
    }

    /// Called once per rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
