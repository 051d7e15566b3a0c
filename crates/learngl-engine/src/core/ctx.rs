use crate::coords::Viewport;

/// Per-frame context passed to [`App::on_frame`](super::App::on_frame).
#[derive(Debug, Copy, Clone)]
pub struct FrameCtx {
    /// Viewport in effect for this frame.
    pub viewport: Viewport,

    /// Monotonic frame counter, starting at 0.
    pub frame_index: u64,
}
