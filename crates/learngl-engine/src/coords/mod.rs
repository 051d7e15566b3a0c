//! Coordinate types shared by the device and runtime layers.

mod viewport;

pub use viewport::Viewport;
