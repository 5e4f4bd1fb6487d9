//! GPU rendering seam.
//!
//! Renderers own their GPU resources (pipelines, buffers) and record into the
//! frame's encoder through [`RenderTarget`].

mod ctx;

pub use ctx::{RenderCtx, RenderTarget};
