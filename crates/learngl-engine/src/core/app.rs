use winit::event::WindowEvent;

use super::ctx::FrameCtx;

/// Control directive returned by app callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Program hooks driven by the runtime.
///
/// Window lifecycle, resize and presentation stay with the runtime; the app
/// only observes.
pub trait App {
    /// Called for every window event before the runtime handles it.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// Called once per presented frame, after the clear.
    fn on_frame(&mut self, ctx: &mut FrameCtx) -> AppControl {
        let _ = ctx;
        AppControl::Continue
    }
}
