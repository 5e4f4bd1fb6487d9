//! Per-pixel shading rule of the grid.
//!
//! `grid.wgsl` evaluates the same rule on the GPU; this module is the
//! reference implementation and keeps the two honest through tests.

use glam::Vec2;
use gridglow_engine::coords::ColorRgba;

/// Smallest falloff width accepted; keeps the smoothstep edges apart.
pub const MIN_FALLOFF: f32 = 1e-4;

/// Parameters of the shading rule.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ShadeParams {
    /// Distance from the cursor at which lines fade out completely.
    pub radius: f32,
    /// Width of the fade band inside `radius`.
    pub falloff_width: f32,
    pub grid_spacing: f32,
    /// World units per second the rings travel outward.
    pub pulse_speed: f32,
    pub base_color: ColorRgba,
    pub highlight_color: ColorRgba,
    /// Constant-color override for the corner region, when set.
    pub dark_region: Option<ColorRgba>,
}

/// GLSL-style smoothstep. Edges may be given in descending order, in which
/// case the curve falls from 1 to 0.
#[inline]
pub fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

/// Fixed top-left wedge in mesh coordinates: `x < 1`, `y > -1`, `y > x + 9`.
#[inline]
pub fn in_dark_region(p: Vec2) -> bool {
    p.x < 1.0 && p.y > -1.0 && p.y > p.x + 9.0
}

/// Cursor proximity in `[0, 1]`: 1 at the cursor, 0 at and beyond `radius`.
#[inline]
pub fn visibility(dist: f32, radius: f32, falloff_width: f32) -> f32 {
    let falloff = falloff_width.max(MIN_FALLOFF);
    smoothstep(radius, radius - falloff, dist)
}

/// Outward-travelling ring wave in `[-1, 1]`.
#[inline]
pub fn wave(dist: f32, elapsed: f32, pulse_speed: f32, grid_spacing: f32) -> f32 {
    ((dist - elapsed * pulse_speed) / grid_spacing).sin()
}

/// Shades one fragment. Returns straight-alpha RGBA; alpha is the visibility.
pub fn shade(fragment: Vec2, cursor: Vec2, elapsed: f32, params: &ShadeParams) -> ColorRgba {
    if let Some(dark) = params.dark_region {
        if in_dark_region(fragment) {
            return dark.with_alpha(1.0);
        }
    }

    let dist = fragment.distance(cursor);
    let visibility = visibility(dist, params.radius, params.falloff_width);
    let pulse = 0.5 + 0.5 * wave(dist, elapsed, params.pulse_speed, params.grid_spacing);

    params
        .base_color
        .lerp_rgb(params.highlight_color, pulse * visibility)
        .with_alpha(visibility)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ShadeParams {
        ShadeParams {
            radius: 6.0,
            falloff_width: 3.0,
            grid_spacing: 1.0,
            pulse_speed: 2.0,
            base_color: ColorRgba::new(0.2, 0.2, 0.2, 1.0),
            highlight_color: ColorRgba::new(1.0, 0.5, 0.0, 1.0),
            dark_region: None,
        }
    }

    #[test]
    fn smoothstep_matches_glsl() {
        assert_eq!(smoothstep(0.0, 1.0, -1.0), 0.0);
        assert_eq!(smoothstep(0.0, 1.0, 0.5), 0.5);
        assert_eq!(smoothstep(0.0, 1.0, 2.0), 1.0);
        // Reversed edges fall instead of rise.
        assert_eq!(smoothstep(1.0, 0.0, 0.0), 1.0);
        assert_eq!(smoothstep(1.0, 0.0, 1.0), 0.0);
    }

    #[test]
    fn fully_visible_inside_inner_radius() {
        assert_eq!(visibility(0.0, 6.0, 3.0), 1.0);
        assert_eq!(visibility(3.0, 6.0, 3.0), 1.0);
        let mid = visibility(4.5, 6.0, 3.0);
        assert!((mid - 0.5).abs() < 1e-6);
    }

    #[test]
    fn invisible_at_and_beyond_radius() {
        assert_eq!(visibility(6.0, 6.0, 3.0), 0.0);
        assert_eq!(visibility(100.0, 6.0, 3.0), 0.0);
    }

    #[test]
    fn zero_falloff_is_a_hard_edge() {
        assert_eq!(visibility(5.99, 6.0, 0.0), 1.0);
        assert_eq!(visibility(6.0, 6.0, 0.0), 0.0);
    }

    #[test]
    fn wave_phase_at_cursor() {
        let (t, speed, spacing) = (1.3f32, 2.0f32, 0.5f32);
        let expected = (-t * speed / spacing).sin();
        assert_eq!(wave(0.0, t, speed, spacing), expected);
    }

    #[test]
    fn wave_travels_outward() {
        // The crest at distance d and time t reappears at d + speed*dt after dt.
        let (speed, spacing) = (2.0, 1.0);
        let a = wave(1.0, 0.0, speed, spacing);
        let b = wave(1.0 + speed * 0.5, 0.5, speed, spacing);
        assert!((a - b).abs() < 1e-6);
    }

    #[test]
    fn far_fragment_is_transparent_base_color() {
        let p = params();
        let c = shade(Vec2::new(50.0, 0.0), Vec2::ZERO, 0.0, &p);
        assert_eq!(c.a, 0.0);
        assert_eq!((c.r, c.g, c.b), (p.base_color.r, p.base_color.g, p.base_color.b));
    }

    #[test]
    fn fragment_at_cursor_is_opaque_and_pulsed() {
        let p = params();
        let t = 0.25;
        let c = shade(Vec2::new(3.0, 4.0), Vec2::new(3.0, 4.0), t, &p);
        assert_eq!(c.a, 1.0);

        let pulse = 0.5 + 0.5 * (-t * p.pulse_speed / p.grid_spacing).sin();
        let expected = p.base_color.lerp_rgb(p.highlight_color, pulse);
        assert!((c.r - expected.r).abs() < 1e-6);
        assert!((c.g - expected.g).abs() < 1e-6);
        assert!((c.b - expected.b).abs() < 1e-6);
    }

    #[test]
    fn dark_region_overrides_cursor() {
        let dark = ColorRgba::new(0.01, 0.01, 0.02, 1.0);
        let p = ShadeParams { dark_region: Some(dark), ..params() };
        let inside = Vec2::new(-5.0, 10.0);
        assert!(in_dark_region(inside));

        // Cursor sits right on the fragment; the override still wins.
        let c = shade(inside, inside, 0.0, &p);
        assert_eq!(c, dark);
    }

    #[test]
    fn dark_region_bounds() {
        assert!(!in_dark_region(Vec2::new(1.0, 20.0)));
        assert!(!in_dark_region(Vec2::new(0.0, 9.0)));
        assert!(in_dark_region(Vec2::new(0.0, 9.5)));
        assert!(!in_dark_region(Vec2::new(-20.0, -1.0)));
    }

    #[test]
    fn disabled_dark_region_uses_distance_rule() {
        let p = params();
        let c = shade(Vec2::new(-5.0, 10.0), Vec2::ZERO, 0.0, &p);
        assert_eq!(c.a, 0.0);
    }
}
