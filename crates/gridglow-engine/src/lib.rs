//! gridglow engine crate.
//!
//! Owns the window, event loop and GPU runtime pieces that the grid renderer
//! draws through. Nothing in here knows about grids or cursors.

pub mod device;
pub mod window;
pub mod input;
pub mod time;
pub mod core;

pub mod logging;
pub mod coords;
pub mod render;
