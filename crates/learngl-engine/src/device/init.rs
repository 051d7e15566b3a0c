/// Requested context profile.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GlProfile {
    /// No deprecated fixed-function API.
    Core,
    Compatibility,
}

/// Context creation parameters.
#[derive(Debug, Clone)]
pub struct GlInit {
    /// OpenGL `(major, minor)` version.
    pub version: (u8, u8),

    pub profile: GlProfile,

    /// Wait for vblank on buffer swap.
    ///
    /// A hint only; some platforms refuse to change the swap interval.
    pub vsync: bool,
}

impl Default for GlInit {
    fn default() -> Self {
        Self {
            version: (3, 3),
            profile: GlProfile::Core,
            vsync: true,
        }
    }
}

impl GlProfile {
    pub(crate) fn to_glutin(self) -> glutin::context::GlProfile {
        match self {
            GlProfile::Core => glutin::context::GlProfile::Core,
            GlProfile::Compatibility => glutin::context::GlProfile::Compatibility,
        }
    }
}
