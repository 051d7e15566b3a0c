//! learngl engine crate.
//!
//! Brings up a single window with an OpenGL 3.3 core context and keeps its
//! viewport matched to the framebuffer.

pub mod core;
pub mod coords;
pub mod device;
pub mod logging;
pub mod window;
