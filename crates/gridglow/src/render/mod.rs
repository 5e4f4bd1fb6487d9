//! GPU rendering of the grid.
//!
//! The mesh lives in world space on `z = 0`; the vertex shader applies the
//! camera's view-projection and the fragment shader evaluates the shading rule.

mod renderer;
mod uniforms;

pub use renderer::GridRenderer;
