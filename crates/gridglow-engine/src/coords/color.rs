/// Straight-alpha linear RGBA color.
///
/// Components are linear; the sRGB surface format encodes on write. Use
/// [`ColorRgba::from_srgb_hex`] for colors picked in sRGB (hex literals).
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn black() -> Self {
        Self::new(0.0, 0.0, 0.0, 1.0)
    }

    /// Opaque color from a `0xRRGGBB` sRGB literal, converted to linear.
    pub fn from_srgb_hex(rgb: u32) -> Self {
        let channel = |shift: u32| srgb_to_linear(((rgb >> shift) & 0xff) as f32 / 255.0);
        Self::new(channel(16), channel(8), channel(0), 1.0)
    }

    #[inline]
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation of the RGB channels; alpha is taken from `self`.
    #[inline]
    pub fn lerp_rgb(self, other: Self, t: f32) -> Self {
        Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a,
        }
    }

    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.r.is_finite() && self.g.is_finite() && self.b.is_finite() && self.a.is_finite()
    }
}

fn srgb_to_linear(c: f32) -> f32 {
    let linear = if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    };
    linear.clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_extremes_map_to_unit_range() {
        assert_eq!(ColorRgba::from_srgb_hex(0x000000), ColorRgba::black());
        let white = ColorRgba::from_srgb_hex(0xffffff);
        assert!((white.r - 1.0).abs() < 1e-6);
        assert!((white.g - 1.0).abs() < 1e-6);
        assert!((white.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn hex_channels_are_linearized() {
        // sRGB mid-gray is ~0.214 in linear space.
        let c = ColorRgba::from_srgb_hex(0x808080);
        assert!((c.r - 0.2158).abs() < 1e-3, "r = {}", c.r);
        assert_eq!(c.r, c.g);
        assert_eq!(c.g, c.b);
    }

    #[test]
    fn hex_channel_order_is_rgb() {
        let c = ColorRgba::from_srgb_hex(0xff0000);
        assert!(c.r > 0.99 && c.g == 0.0 && c.b == 0.0);
    }

    #[test]
    fn lerp_rgb_endpoints() {
        let a = ColorRgba::new(0.0, 0.2, 0.4, 0.5);
        let b = ColorRgba::new(1.0, 0.6, 0.0, 1.0);
        assert_eq!(a.lerp_rgb(b, 0.0), a);
        let end = a.lerp_rgb(b, 1.0);
        assert!((end.r - 1.0).abs() < 1e-6);
        assert!((end.g - 0.6).abs() < 1e-6);
        assert!(end.b.abs() < 1e-6);
        assert_eq!(end.a, 0.5);
    }
}
