//! RGBA color type
//!
//! All matching arithmetic in this crate works on 8-bit RGBA colors with an
//! integer squared-distance metric, so the color type stays in byte space
//! rather than converting to floats.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::ParseColorError;

/// A 32-bit RGBA color with 8-bit channels.
///
/// The alpha channel participates in quantization shortcuts (fully
/// transparent pixels, the near-black guard) and in exact reconstruction
/// checks, but never in the distance metric itself.
///
/// # Example
///
/// ```
/// use glyph_mosaic::Rgba;
///
/// let red = Rgba::opaque(255, 0, 0);
/// assert_eq!(red.a, 255);
/// assert_eq!(red.distance_squared(Rgba::opaque(255, 0, 0)), 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
    /// Alpha channel (0 = fully transparent, 255 = fully opaque)
    pub a: u8,
}

impl Rgba {
    /// Fully transparent black, the color reserved for palette index 0.
    pub const TRANSPARENT: Rgba = Rgba::new(0, 0, 0, 0);

    /// Opaque black, the color reserved for palette index 1.
    pub const BLACK: Rgba = Rgba::new(0, 0, 0, 255);

    /// Create a color from all four channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color (alpha 255).
    ///
    /// # Example
    /// ```
    /// use glyph_mosaic::Rgba;
    /// let white = Rgba::opaque(255, 255, 255);
    /// assert_eq!(white.a, 255);
    /// ```
    #[inline]
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a color from a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array `[R, G, B, A]`.
    #[inline]
    pub const fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Squared Euclidean distance over the RGB channels only.
    ///
    /// Alpha is deliberately excluded: the matching engine treats alpha as
    /// block-level metadata (average alpha of a cell), not as a component of
    /// color error.
    ///
    /// # Example
    /// ```
    /// use glyph_mosaic::Rgba;
    ///
    /// let a = Rgba::opaque(10, 0, 0);
    /// let b = Rgba::opaque(0, 0, 0);
    /// assert_eq!(a.distance_squared(b), 100);
    ///
    /// // Alpha difference alone is distance zero
    /// let c = Rgba::new(10, 0, 0, 0);
    /// assert_eq!(a.distance_squared(c), 0);
    /// ```
    #[inline]
    pub fn distance_squared(self, other: Rgba) -> u32 {
        let dr = self.r as i32 - other.r as i32;
        let dg = self.g as i32 - other.g as i32;
        let db = self.b as i32 - other.b as i32;
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl FromStr for Rgba {
    type Err = ParseColorError;

    /// Parse a color from a hex string.
    ///
    /// Supports the following formats:
    /// - `#RRGGBB` / `RRGGBB` - 6-digit hex, alpha defaults to 255
    /// - `#RRGGBBAA` / `RRGGBBAA` - 8-digit hex with explicit alpha
    /// - `#RGB` / `RGB` - shorthand, each digit expands to a doubled pair
    ///
    /// Parsing is case-insensitive. Leading and trailing whitespace is
    /// trimmed.
    ///
    /// # Examples
    ///
    /// ```
    /// use glyph_mosaic::Rgba;
    ///
    /// let red: Rgba = "#FF0000".parse().unwrap();
    /// assert_eq!(red, Rgba::opaque(255, 0, 0));
    ///
    /// let ghost: Rgba = "#FF000080".parse().unwrap();
    /// assert_eq!(ghost.a, 128);
    ///
    /// let white: Rgba = "#FFF".parse().unwrap();
    /// assert_eq!(white, Rgba::opaque(255, 255, 255));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_prefix('#').unwrap_or(s);

        match s.len() {
            3 => {
                // Shorthand: expand each digit by multiplying by 17 (0xF -> 0xFF)
                let r = u8::from_str_radix(&s[0..1], 16)? * 17;
                let g = u8::from_str_radix(&s[1..2], 16)? * 17;
                let b = u8::from_str_radix(&s[2..3], 16)? * 17;
                Ok(Self::opaque(r, g, b))
            }
            6 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                Ok(Self::opaque(r, g, b))
            }
            8 => {
                let r = u8::from_str_radix(&s[0..2], 16)?;
                let g = u8::from_str_radix(&s[2..4], 16)?;
                let b = u8::from_str_radix(&s[4..6], 16)?;
                let a = u8::from_str_radix(&s[6..8], 16)?;
                Ok(Self::new(r, g, b, a))
            }
            _ => Err(ParseColorError::InvalidLength),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_and_bytes() {
        let color = Rgba::new(1, 2, 3, 4);
        assert_eq!(color.to_bytes(), [1, 2, 3, 4]);
        assert_eq!(Rgba::from_bytes([1, 2, 3, 4]), color);
        assert_eq!(Rgba::opaque(10, 20, 30).a, 255);
        assert_eq!(Rgba::TRANSPARENT.a, 0);
        assert_eq!(Rgba::BLACK, Rgba::new(0, 0, 0, 255));
    }

    #[test]
    fn test_distance_squared_ignores_alpha() {
        let a = Rgba::new(100, 50, 25, 255);
        let b = Rgba::new(100, 50, 25, 0);
        assert_eq!(a.distance_squared(b), 0);
    }

    #[test]
    fn test_distance_squared_symmetry() {
        let a = Rgba::opaque(255, 0, 0);
        let b = Rgba::opaque(0, 255, 0);
        assert_eq!(a.distance_squared(b), b.distance_squared(a));
        assert_eq!(a.distance_squared(b), 255 * 255 * 2);
    }

    #[test]
    fn test_distance_squared_max() {
        // Worst case must not overflow u32
        let black = Rgba::opaque(0, 0, 0);
        let white = Rgba::opaque(255, 255, 255);
        assert_eq!(black.distance_squared(white), 3 * 255 * 255);
    }

    #[test]
    fn test_hex_parsing_6digit() {
        let white: Rgba = "#FFFFFF".parse().unwrap();
        assert_eq!(white, Rgba::opaque(255, 255, 255));

        let no_hash: Rgba = "00FF00".parse().unwrap();
        assert_eq!(no_hash, Rgba::opaque(0, 255, 0));
    }

    #[test]
    fn test_hex_parsing_8digit_alpha() {
        let color: Rgba = "#11223344".parse().unwrap();
        assert_eq!(color, Rgba::new(0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn test_hex_parsing_shorthand() {
        let color: Rgba = "#ABC".parse().unwrap();
        assert_eq!(color, Rgba::opaque(0xAA, 0xBB, 0xCC));

        let red: Rgba = "#f00".parse().unwrap();
        assert_eq!(red, Rgba::opaque(255, 0, 0));
    }

    #[test]
    fn test_hex_parsing_whitespace() {
        let white: Rgba = "  #FFFFFF  ".parse().unwrap();
        assert_eq!(white, Rgba::opaque(255, 255, 255));
    }

    #[test]
    fn test_hex_parsing_errors() {
        assert!(matches!(
            "#GGG".parse::<Rgba>(),
            Err(ParseColorError::InvalidHex(_))
        ));
        assert!(matches!(
            "#FFFF".parse::<Rgba>(),
            Err(ParseColorError::InvalidLength)
        ));
        assert!(matches!(
            "".parse::<Rgba>(),
            Err(ParseColorError::InvalidLength)
        ));
    }
}
