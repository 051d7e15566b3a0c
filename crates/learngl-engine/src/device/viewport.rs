use crate::coords::Viewport;

/// Destination of viewport updates.
///
/// The GL-backed implementation calls `glViewport`; tests substitute a
/// recorder so resize behavior can be checked without a display.
pub trait ViewportTarget {
    fn set_viewport(&mut self, viewport: Viewport);
}

/// Issues `glViewport` on the current context.
///
/// Only constructed by [`GlWindow`](super::GlWindow) once entry points are
/// loaded and the context is current on this thread.
#[derive(Debug)]
pub struct GlViewportTarget {
    _not_send: std::marker::PhantomData<*const ()>,
}

impl GlViewportTarget {
    pub(crate) fn new() -> Self {
        Self {
            _not_send: std::marker::PhantomData,
        }
    }
}

impl ViewportTarget for GlViewportTarget {
    fn set_viewport(&mut self, viewport: Viewport) {
        // glViewport only errors on negative sizes, which `Viewport` never holds here.
        unsafe {
            gl::Viewport(viewport.x, viewport.y, viewport.width, viewport.height);
        }
    }
}

/// Keeps the viewport equal to the framebuffer size.
///
/// The last applied viewport is cached, so `current()` always reflects the
/// most recent resize.
#[derive(Debug)]
pub struct ViewportSync<T: ViewportTarget> {
    target: T,
    current: Viewport,
}

impl<T: ViewportTarget> ViewportSync<T> {
    /// Applies the initial viewport immediately.
    pub fn new(mut target: T, width: u32, height: u32) -> Self {
        let current = Viewport::from_framebuffer(width, height);
        target.set_viewport(current);
        Self { target, current }
    }

    /// Framebuffer resize handler: viewport becomes `(0, 0, width, height)`.
    ///
    /// Zero sizes are forwarded as-is.
    pub fn on_framebuffer_resized(&mut self, width: u32, height: u32) {
        let viewport = Viewport::from_framebuffer(width, height);
        log::debug!("viewport -> {}x{}", viewport.width, viewport.height);
        self.target.set_viewport(viewport);
        self.current = viewport;
    }

    pub fn current(&self) -> Viewport {
        self.current
    }

    #[cfg(test)]
    pub(crate) fn target(&self) -> &T {
        &self.target
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct RecordingTarget {
        calls: Vec<Viewport>,
    }

    impl ViewportTarget for RecordingTarget {
        fn set_viewport(&mut self, viewport: Viewport) {
            self.calls.push(viewport);
        }
    }

    fn vp(w: i32, h: i32) -> Viewport {
        Viewport::new(0, 0, w, h)
    }

    #[test]
    fn initial_viewport_is_applied_on_construction() {
        let sync = ViewportSync::new(RecordingTarget::default(), 800, 600);
        assert_eq!(sync.current(), vp(800, 600));
        assert_eq!(sync.target().calls, vec![vp(800, 600)]);
    }

    #[test]
    fn resize_sets_full_framebuffer_viewport() {
        let mut sync = ViewportSync::new(RecordingTarget::default(), 800, 600);
        for (w, h) in [(1, 1), (1920, 1080), (300, 2000), (0, 5)] {
            sync.on_framebuffer_resized(w, h);
            assert_eq!(sync.current(), vp(w as i32, h as i32));
            assert_eq!(sync.target().calls.last(), Some(&vp(w as i32, h as i32)));
        }
    }

    #[test]
    fn last_resize_wins() {
        let mut sync = ViewportSync::new(RecordingTarget::default(), 800, 600);
        sync.on_framebuffer_resized(640, 480);
        sync.on_framebuffer_resized(1280, 720);
        sync.on_framebuffer_resized(1024, 768);
        assert_eq!(sync.current(), vp(1024, 768));
        assert_eq!(sync.target().calls.len(), 4);
    }

    #[test]
    fn startup_resize_and_minimize_scenario() {
        let mut sync = ViewportSync::new(RecordingTarget::default(), 800, 600);
        assert_eq!(sync.current(), vp(800, 600));

        sync.on_framebuffer_resized(1024, 768);
        assert_eq!(sync.current(), vp(1024, 768));

        // Minimized: degenerate but legal.
        sync.on_framebuffer_resized(0, 0);
        assert_eq!(sync.current(), vp(0, 0));
        assert_eq!(
            sync.target().calls,
            vec![vp(800, 600), vp(1024, 768), vp(0, 0)]
        );
    }

    #[test]
    fn repeated_identical_resize_is_stable() {
        let mut sync = ViewportSync::new(RecordingTarget::default(), 800, 600);
        sync.on_framebuffer_resized(800, 600);
        sync.on_framebuffer_resized(800, 600);
        assert_eq!(sync.current(), vp(800, 600));
    }
}
