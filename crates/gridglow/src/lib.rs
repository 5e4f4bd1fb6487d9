//! gridglow: a full-window grid of lines that glows around the pointer.
//!
//! The pointer is tracked in screen space, projected through a perspective
//! [`Camera`] onto the world plane `z = 0`, and every grid fragment is shaded
//! by its distance to that point with a ring pulse travelling outward over
//! time.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use gridglow::{GridBackground, GridConfig};
//!
//! GridBackground::new()
//!     .title("gridglow")
//!     .config(GridConfig::default().radius(6.0).pulse_speed(3.0))
//!     .run()?;
//! ```
//!
//! The pure pieces ([`GridMesh::build`], [`project_pointer_to_world`],
//! [`shade`] and [`ShaderState::advance`]) are usable without a window.

pub mod app;
pub mod camera;
pub mod config;
pub mod control;
pub mod mesh;
pub mod pointer;
pub mod projection;
pub mod render;
pub mod shading;
pub mod state;

pub use app::GridBackground;
pub use camera::Camera;
pub use config::GridConfig;
pub use control::{ControlPanel, PanelOutcome};
pub use mesh::{GridMesh, GridVertex, MeshKey};
pub use pointer::{PointerState, PointerTracker};
pub use projection::{project_pointer_to_world, screen_to_ndc, ProjectionError};
pub use render::GridRenderer;
pub use shading::{shade, ShadeParams};
pub use state::{FrameInput, ShaderState};
