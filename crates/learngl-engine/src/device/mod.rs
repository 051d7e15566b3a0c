//! OpenGL context + window surface management.
//!
//! This module is responsible for:
//! - picking a GL config and creating the window alongside it
//! - creating the context and surface and binding them to the calling thread
//! - loading GL entry points
//! - keeping `glViewport` in sync with the framebuffer size

mod context;
mod error;
mod init;
mod viewport;

pub use context::GlWindow;
pub use error::BootstrapError;
pub use init::{GlInit, GlProfile};
pub use viewport::{GlViewportTarget, ViewportSync, ViewportTarget};
