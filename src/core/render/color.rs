//=========================================================================
// Color
//=========================================================================

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xFF }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Builds an opaque color from a `0xRRGGBB` value.
    pub const fn from_rgb_hex(hex: u32) -> Self {
        Self::rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }

    /// Multiplies each channel by the tint (`0xRRGGBB`), like a sprite tint.
    ///
    /// A white tint leaves the color unchanged.
    pub fn tinted(self, tint: u32) -> Self {
        let t = Self::from_rgb_hex(tint);
        let mul = |c: u8, t: u8| ((c as u16 * t as u16) / 255) as u8;
        Self {
            r: mul(self.r, t.r),
            g: mul(self.g, t.g),
            b: mul(self.b, t.b),
            a: self.a,
        }
    }

    /// Linear interpolation between two colors, `t` in `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_parsing() {
        assert_eq!(Color::from_rgb_hex(0xff0000), Color::rgb(255, 0, 0));
        assert_eq!(Color::from_rgb_hex(0x00ff80), Color::rgb(0, 255, 128));
    }

    #[test]
    fn white_tint_is_identity() {
        let c = Color::rgb(12, 200, 77);
        assert_eq!(c.tinted(0xffffff), c);
    }

    #[test]
    fn red_tint_drops_green_and_blue() {
        let c = Color::rgb(200, 200, 200).tinted(0xff0000);
        assert_eq!(c, Color::rgb(200, 0, 0));
    }

    #[test]
    fn lerp_endpoints() {
        let a = Color::rgb(0, 0, 0);
        let b = Color::rgb(100, 200, 50);
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
        assert_eq!(a.lerp(b, 0.5), Color::rgb(50, 100, 25));
    }
}
