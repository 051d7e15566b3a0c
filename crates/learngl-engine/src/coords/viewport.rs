/// Rendering viewport in framebuffer pixels, as passed to `glViewport`.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct Viewport {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Viewport {
    #[inline]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Viewport covering a whole framebuffer of the given size.
    ///
    /// Dimensions beyond `i32::MAX` saturate.
    #[inline]
    pub fn from_framebuffer(width: u32, height: u32) -> Self {
        Self::new(0, 0, saturate(width), saturate(height))
    }

    /// True when nothing can be drawn (minimized window).
    #[inline]
    pub fn is_empty(self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Width over height, or `None` for an empty viewport.
    pub fn aspect_ratio(self) -> Option<f32> {
        if self.is_empty() {
            None
        } else {
            Some(self.width as f32 / self.height as f32)
        }
    }
}

#[inline]
fn saturate(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_framebuffer_is_anchored_at_origin() {
        assert_eq!(Viewport::from_framebuffer(800, 600), Viewport::new(0, 0, 800, 600));
    }

    #[test]
    fn from_framebuffer_saturates_huge_sizes() {
        let vp = Viewport::from_framebuffer(u32::MAX, 1);
        assert_eq!(vp.width, i32::MAX);
        assert_eq!(vp.height, 1);
    }

    #[test]
    fn zero_size_is_empty() {
        assert!(Viewport::from_framebuffer(0, 0).is_empty());
        assert!(Viewport::from_framebuffer(0, 10).is_empty());
        assert!(!Viewport::from_framebuffer(1, 1).is_empty());
    }

    #[test]
    fn aspect_ratio() {
        assert_eq!(Viewport::from_framebuffer(800, 400).aspect_ratio(), Some(2.0));
        assert_eq!(Viewport::from_framebuffer(800, 0).aspect_ratio(), None);
    }
}
