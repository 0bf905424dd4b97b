//! Palette struct with validated construction and nearest-index matching.

use std::str::FromStr;

use super::color::Rgba;
use super::error::PaletteError;

/// Number of entries in every palette.
pub const PALETTE_SIZE: usize = 256;

/// Palette index reserved for full transparency.
pub const TRANSPARENT_INDEX: u8 = 0;

/// Palette index reserved for opaque black.
pub const BLACK_INDEX: u8 = 1;

/// Channel ceiling for the near-black shortcut in [`Palette::nearest_index`].
const NEAR_BLACK_CHANNEL_MAX: u8 = 5;

/// Alpha floor for the near-black shortcut in [`Palette::nearest_index`].
const NEAR_BLACK_ALPHA_MIN: u8 = 200;

/// A fixed, ordered set of 256 colors with nearest-color lookup.
///
/// Invariants, enforced at construction:
/// - exactly [`PALETTE_SIZE`] entries
/// - index 0 is fully transparent (alpha 0)
/// - index 1 is opaque black
///
/// The palette is immutable after construction and shared read-only by all
/// matching operations.
///
/// # Example
///
/// ```
/// use glyph_mosaic::{Palette, Rgba, BLACK_INDEX};
///
/// let palette = Palette::web_safe();
/// assert_eq!(palette.nearest_index(Rgba::BLACK), BLACK_INDEX);
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: [Rgba; PALETTE_SIZE],
}

impl Palette {
    /// Create a palette from exactly 256 colors.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::WrongLength`] if `colors` is not 256 entries
    /// - [`PaletteError::ReservedTransparent`] if index 0 is not alpha 0
    /// - [`PaletteError::ReservedBlack`] if index 1 is not opaque black
    pub fn new(colors: &[Rgba]) -> Result<Self, PaletteError> {
        if colors.len() != PALETTE_SIZE {
            return Err(PaletteError::WrongLength(colors.len()));
        }
        if colors[TRANSPARENT_INDEX as usize].a != 0 {
            return Err(PaletteError::ReservedTransparent(
                colors[TRANSPARENT_INDEX as usize].a,
            ));
        }
        if colors[BLACK_INDEX as usize] != Rgba::BLACK {
            return Err(PaletteError::ReservedBlack(colors[BLACK_INDEX as usize]));
        }

        let mut entries = [Rgba::TRANSPARENT; PALETTE_SIZE];
        entries.copy_from_slice(colors);
        Ok(Self { colors: entries })
    }

    /// Create a palette from 256 hex color strings.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::ParseColor`] if any string is invalid, or the
    /// other [`PaletteError`] variants for validation failures.
    ///
    /// # Example
    ///
    /// ```
    /// use glyph_mosaic::Palette;
    ///
    /// let mut hex = vec!["#00000000".to_string(), "#000000".to_string()];
    /// hex.extend((2..256).map(|i| format!("#{0:02X}{0:02X}{0:02X}", i)));
    /// let refs: Vec<&str> = hex.iter().map(String::as_str).collect();
    /// let palette = Palette::from_hex(&refs).unwrap();
    /// assert_eq!(palette.color(2).r, 2);
    /// ```
    pub fn from_hex(hex: &[&str]) -> Result<Self, PaletteError> {
        let colors: Vec<Rgba> = hex
            .iter()
            .map(|s| Rgba::from_str(s).map_err(PaletteError::ParseColor))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(&colors)
    }

    /// The built-in default palette.
    ///
    /// Layout:
    /// - index 0: fully transparent
    /// - index 1: opaque black
    /// - indices 2..=217: the 216-color web-safe cube (channels stepped by 51)
    /// - indices 218..=255: a 38-step grayscale ramp from black to white
    pub fn web_safe() -> Self {
        let mut colors = [Rgba::TRANSPARENT; PALETTE_SIZE];
        colors[BLACK_INDEX as usize] = Rgba::BLACK;

        let mut idx = 2;
        for r in 0..6u8 {
            for g in 0..6u8 {
                for b in 0..6u8 {
                    colors[idx] = Rgba::opaque(r * 51, g * 51, b * 51);
                    idx += 1;
                }
            }
        }
        for step in 0..38u32 {
            colors[idx] = Rgba::opaque(
                (step * 255 / 37) as u8,
                (step * 255 / 37) as u8,
                (step * 255 / 37) as u8,
            );
            idx += 1;
        }
        debug_assert_eq!(idx, PALETTE_SIZE);

        // Invariants hold by construction
        Self { colors }
    }

    /// Returns the number of colors in the palette (always 256).
    #[inline]
    pub fn len(&self) -> usize {
        PALETTE_SIZE
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false`; empty palettes cannot be
    /// constructed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, index: u8) -> Rgba {
        self.colors[index as usize]
    }

    /// Find the palette index nearest to the given color.
    ///
    /// Resolution order:
    /// 1. Fully transparent input (alpha 0) returns [`TRANSPARENT_INDEX`]
    ///    without consulting RGB distance.
    /// 2. Near-black input (every RGB channel at most 5, alpha above 200)
    ///    returns [`BLACK_INDEX`] directly. Rounding would otherwise let a
    ///    stylistically close but wrong entry win for near-black pixels.
    /// 3. Otherwise indices 1..=255 are scanned forward for the minimum
    ///    squared RGB distance. Ties keep the lowest index; an exact
    ///    zero-distance hit short-circuits the scan. Index 0 is never
    ///    considered.
    ///
    /// Pure function over the immutable palette.
    ///
    /// # Example
    ///
    /// ```
    /// use glyph_mosaic::{Palette, Rgba, TRANSPARENT_INDEX};
    ///
    /// let palette = Palette::web_safe();
    /// let idx = palette.nearest_index(Rgba::new(9, 9, 9, 0));
    /// assert_eq!(idx, TRANSPARENT_INDEX);
    /// ```
    pub fn nearest_index(&self, color: Rgba) -> u8 {
        if color.a == 0 {
            return TRANSPARENT_INDEX;
        }
        if color.r <= NEAR_BLACK_CHANNEL_MAX
            && color.g <= NEAR_BLACK_CHANNEL_MAX
            && color.b <= NEAR_BLACK_CHANNEL_MAX
            && color.a > NEAR_BLACK_ALPHA_MIN
        {
            return BLACK_INDEX;
        }

        let mut best_idx = BLACK_INDEX;
        let mut best_dist = u32::MAX;
        for idx in 1..PALETTE_SIZE {
            let dist = color.distance_squared(self.colors[idx]);
            if dist == 0 {
                return idx as u8;
            }
            if dist < best_dist {
                best_dist = dist;
                best_idx = idx as u8;
            }
        }
        best_idx
    }
}
