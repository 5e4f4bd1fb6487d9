//! Screen-space sizes and colors shared by the runtime and renderers.
//!
//! Screen space is logical pixels (DPI-aware), origin top-left, +X right,
//! +Y down.

mod color;
mod viewport;

pub use color::ColorRgba;
pub use viewport::Viewport;
