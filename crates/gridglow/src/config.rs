//! User-tunable grid parameters.

use gridglow_engine::coords::ColorRgba;

pub const SPACING_RANGE: (f32, f32) = (0.25, 16.0);
pub const PULSE_SPEED_LIMIT: f32 = 50.0;
pub const MIN_FALLOFF_WIDTH: f32 = 0.01;

/// Tunable look of the grid.
///
/// Build with chained setters from `GridConfig::default()`; values are
/// clamped by [`GridConfig::sanitized`] before they reach the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    pub radius: f32,
    pub falloff_width: f32,
    /// Distance between grid lines; also the wavelength scale of the pulse.
    pub grid_spacing: f32,
    pub pulse_speed: f32,

    pub base_color: ColorRgba,
    pub highlight_color: ColorRgba,
    pub dark_color: ColorRgba,

    /// Paint the fixed top-left wedge in `dark_color`.
    pub dark_region: bool,

    pub background: ColorRgba,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            radius: 5.0,
            falloff_width: 3.0,
            grid_spacing: 1.0,
            pulse_speed: 2.0,
            base_color: ColorRgba::from_srgb_hex(0xd7d7d7),
            highlight_color: ColorRgba::from_srgb_hex(0x39c5ff),
            dark_color: ColorRgba::from_srgb_hex(0x1b1b1f),
            dark_region: false,
            background: ColorRgba::from_srgb_hex(0x0e0e11),
        }
    }
}

impl GridConfig {
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn falloff_width(mut self, width: f32) -> Self {
        self.falloff_width = width;
        self
    }

    pub fn grid_spacing(mut self, spacing: f32) -> Self {
        self.grid_spacing = spacing;
        self
    }

    pub fn pulse_speed(mut self, speed: f32) -> Self {
        self.pulse_speed = speed;
        self
    }

    pub fn colors(mut self, base: ColorRgba, highlight: ColorRgba) -> Self {
        self.base_color = base;
        self.highlight_color = highlight;
        self
    }

    pub fn dark_color(mut self, color: ColorRgba) -> Self {
        self.dark_color = color;
        self
    }

    pub fn dark_region(mut self, enabled: bool) -> Self {
        self.dark_region = enabled;
        self
    }

    pub fn background(mut self, color: ColorRgba) -> Self {
        self.background = color;
        self
    }

    /// Returns a copy with every value in a range the renderer can handle.
    ///
    /// Non-finite numbers fall back to the defaults.
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };

        let color_or = |c: ColorRgba, fallback: ColorRgba| {
            if c.is_finite() {
                ColorRgba::new(c.r.clamp(0.0, 1.0), c.g.clamp(0.0, 1.0), c.b.clamp(0.0, 1.0), c.a.clamp(0.0, 1.0))
            } else {
                fallback
            }
        };

        Self {
            radius: finite_or(self.radius, defaults.radius).max(0.0),
            falloff_width: finite_or(self.falloff_width, defaults.falloff_width).max(MIN_FALLOFF_WIDTH),
            grid_spacing: finite_or(self.grid_spacing, defaults.grid_spacing)
                .clamp(SPACING_RANGE.0, SPACING_RANGE.1),
            pulse_speed: finite_or(self.pulse_speed, defaults.pulse_speed)
                .clamp(-PULSE_SPEED_LIMIT, PULSE_SPEED_LIMIT),
            base_color: color_or(self.base_color, defaults.base_color),
            highlight_color: color_or(self.highlight_color, defaults.highlight_color),
            dark_color: color_or(self.dark_color, defaults.dark_color),
            dark_region: self.dark_region,
            background: color_or(self.background, defaults.background),
        }
    }
}
