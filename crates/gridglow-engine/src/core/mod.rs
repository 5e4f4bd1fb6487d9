//! Core engine-facing contracts.
//!
//! This module defines the interface between the runtime (platform loop) and
//! the application drawing into it, plus the per-frame context handed over on
//! every redraw.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
