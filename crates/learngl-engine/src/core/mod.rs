//! Contract between the runtime loop and the program built on top of it.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::FrameCtx;
