//! Window + runtime loop.
//!
//! Owns the `winit` event loop and the single GL window.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
