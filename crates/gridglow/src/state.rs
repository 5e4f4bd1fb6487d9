//! Per-frame shader state and the step that advances it.

use glam::Vec2;
use gridglow_engine::coords::{ColorRgba, Viewport};

use crate::camera::Camera;
use crate::config::GridConfig;
use crate::mesh::MeshKey;
use crate::pointer::PointerState;
use crate::projection::project_pointer_to_world;
use crate::shading::ShadeParams;

/// What the frame step reads from the outside world.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameInput {
    pub pointer: PointerState,
    /// Seconds since the grid started animating.
    pub elapsed: f32,
    pub viewport: Viewport,
}

/// Uniform values for one rendered frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShaderState {
    pub cursor_world: Vec2,
    pub elapsed_time: f32,
    pub radius: f32,
    pub falloff_width: f32,
    pub grid_spacing: f32,
    pub pulse_speed: f32,
    pub base_color: ColorRgba,
    pub highlight_color: ColorRgba,
    pub dark_color: ColorRgba,
    pub dark_region: bool,
    pub viewport: Viewport,
}

impl ShaderState {
    /// Initial state: cursor at the world origin, clock at zero.
    pub fn new(config: &GridConfig, viewport: Viewport) -> Self {
        Self {
            cursor_world: Vec2::ZERO,
            elapsed_time: 0.0,
            radius: config.radius,
            falloff_width: config.falloff_width,
            grid_spacing: config.grid_spacing,
            pulse_speed: config.pulse_speed,
            base_color: config.base_color,
            highlight_color: config.highlight_color,
            dark_color: config.dark_color,
            dark_region: config.dark_region,
            viewport,
        }
    }

    /// Computes the state for the next frame.
    ///
    /// Pure. When the pointer cannot be projected the previous
    /// `cursor_world` carries over.
    pub fn advance(&self, input: &FrameInput, camera: &Camera, config: &GridConfig) -> ShaderState {
        let cursor_world = match project_pointer_to_world(input.pointer, input.viewport, camera) {
            Ok(world) => world,
            Err(err) => {
                log::trace!(
                    "pointer ({:.1}, {:.1}) not projected: {err}; keeping cursor at {:?}",
                    input.pointer.x,
                    input.pointer.y,
                    self.cursor_world,
                );
                self.cursor_world
            }
        };

        ShaderState {
            cursor_world,
            elapsed_time: input.elapsed,
            ..ShaderState::new(config, input.viewport)
        }
    }

    /// Key of the mesh this state must be drawn with.
    pub fn mesh_key(&self) -> MeshKey {
        MeshKey {
            width: self.viewport.width,
            height: self.viewport.height,
            spacing: self.grid_spacing,
        }
    }

    pub fn shade_params(&self) -> ShadeParams {
        ShadeParams {
            radius: self.radius,
            falloff_width: self.falloff_width,
            grid_spacing: self.grid_spacing,
            pulse_speed: self.pulse_speed,
            base_color: self.base_color,
            highlight_color: self.highlight_color,
            dark_region: self.dark_region.then_some(self.dark_color),
        }
    }
}
