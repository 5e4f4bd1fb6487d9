use bytemuck::{Pod, Zeroable};

use crate::camera::Camera;
use crate::state::ShaderState;

/// Uniform block layout (160 bytes), matching `Grid` in `grid.wgsl`:
///
///  offset   0  view_proj     mat4x4<f32>
///  offset  64  cursor        vec2<f32>
///  offset  72  viewport      vec2<f32>
///  offset  80  time, radius, falloff, spacing
///  offset  96  pulse_speed, dark_enabled, _pad, _pad
///  offset 112  base          vec4<f32>
///  offset 128  highlight     vec4<f32>
///  offset 144  dark          vec4<f32>
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub(crate) struct GridUniforms {
    pub view_proj: [[f32; 4]; 4],
    pub cursor: [f32; 2],
    pub viewport: [f32; 2],
    pub time: f32,
    pub radius: f32,
    pub falloff: f32,
    pub spacing: f32,
    pub pulse_speed: f32,
    pub dark_enabled: f32,
    pub _pad: [f32; 2],
    pub base: [f32; 4],
    pub highlight: [f32; 4],
    pub dark: [f32; 4],
}

impl GridUniforms {
    pub const SIZE: u64 = std::mem::size_of::<GridUniforms>() as u64;

    pub fn new(state: &ShaderState, camera: &Camera) -> Self {
        let view_proj = camera.view_proj(state.viewport.aspect()).to_cols_array_2d();
        Self {
            view_proj,
            cursor: state.cursor_world.to_array(),
            viewport: [state.viewport.width.max(1.0), state.viewport.height.max(1.0)],
            time: state.elapsed_time,
            radius: state.radius,
            falloff: state.falloff_width,
            spacing: state.grid_spacing,
            pulse_speed: state.pulse_speed,
            dark_enabled: if state.dark_region { 1.0 } else { 0.0 },
            _pad: [0.0; 2],
            base: state.base_color.to_array(),
            highlight: state.highlight_color.to_array(),
            dark: state.dark_color.to_array(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::mem::offset_of;

    use glam::Vec2;
    use gridglow_engine::coords::Viewport;

    use super::*;
    use crate::config::GridConfig;

    #[test]
    fn layout_matches_wgsl() {
        assert_eq!(GridUniforms::SIZE, 160);
        assert_eq!(offset_of!(GridUniforms, cursor), 64);
        assert_eq!(offset_of!(GridUniforms, viewport), 72);
        assert_eq!(offset_of!(GridUniforms, time), 80);
        assert_eq!(offset_of!(GridUniforms, spacing), 92);
        assert_eq!(offset_of!(GridUniforms, pulse_speed), 96);
        assert_eq!(offset_of!(GridUniforms, dark_enabled), 100);
        assert_eq!(offset_of!(GridUniforms, base), 112);
        assert_eq!(offset_of!(GridUniforms, highlight), 128);
        assert_eq!(offset_of!(GridUniforms, dark), 144);
    }

    #[test]
    fn packs_state_values() {
        let config = GridConfig::default().dark_region(true);
        let mut state = ShaderState::new(&config, Viewport::new(800.0, 600.0));
        state.cursor_world = Vec2::new(1.5, -2.0);
        state.elapsed_time = 3.25;

        let camera = Camera::default();
        let u = GridUniforms::new(&state, &camera);

        assert_eq!(u.cursor, [1.5, -2.0]);
        assert_eq!(u.viewport, [800.0, 600.0]);
        assert_eq!(u.time, 3.25);
        assert_eq!(u.radius, config.radius);
        assert_eq!(u.dark_enabled, 1.0);
        assert_eq!(u.base, config.base_color.to_array());
        assert_eq!(u.view_proj, camera.view_proj(800.0 / 600.0).to_cols_array_2d());
    }
}
