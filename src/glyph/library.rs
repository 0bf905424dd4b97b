//! GlyphLibrary struct mapping code points to 64-bit masks.

use std::collections::BTreeMap;

/// The all-zero mask: no foreground pixels ("solid background").
pub const SOLID_BACKGROUND: u64 = 0;

/// The all-one mask: every pixel foreground ("solid foreground").
pub const SOLID_FOREGROUND: u64 = u64::MAX;

/// A mapping from code point to an 8×8 monochrome bitmap.
///
/// Each mask is row-major: bit `y * 8 + x` set means pixel `(x, y)` is
/// foreground. Keys are unique and iteration is in ascending code point
/// order, which is what makes matching results reproducible when several
/// candidates score equally.
///
/// The library is supplied fully formed by an external font scanner; this
/// crate only reads it.
///
/// # Example
///
/// ```
/// use glyph_mosaic::{GlyphLibrary, SOLID_FOREGROUND};
///
/// let mut library = GlyphLibrary::new();
/// library.insert('█', SOLID_FOREGROUND);
/// assert_eq!(library.pattern('█'), SOLID_FOREGROUND);
/// // Unknown code points resolve to the empty mask, never an error.
/// assert_eq!(library.pattern('?'), 0);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GlyphLibrary {
    patterns: BTreeMap<char, u64>,
}

impl GlyphLibrary {
    /// Create an empty library.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a library from (code point, mask) pairs.
    ///
    /// Later entries overwrite earlier ones with the same code point.
    pub fn from_entries(entries: impl IntoIterator<Item = (char, u64)>) -> Self {
        Self {
            patterns: entries.into_iter().collect(),
        }
    }

    /// Insert or replace the mask for a code point.
    pub fn insert(&mut self, glyph: char, mask: u64) {
        self.patterns.insert(glyph, mask);
    }

    /// Returns the stored mask, or the all-zero mask for an unknown code
    /// point. Never errors.
    #[inline]
    pub fn pattern(&self, glyph: char) -> u64 {
        self.patterns.get(&glyph).copied().unwrap_or(SOLID_BACKGROUND)
    }

    /// All library contents in ascending code point order.
    ///
    /// The stable order is load-bearing: exact matches short-circuit on the
    /// first hit and approximate matches break ties by first-found.
    pub fn entries(&self) -> impl Iterator<Item = (char, u64)> + '_ {
        self.patterns.iter().map(|(&glyph, &mask)| (glyph, mask))
    }

    /// Returns the number of patterns in the library.
    #[inline]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Returns true if the library holds no patterns.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Whether a mask is one of the two solid sentinels (all-zero or
    /// all-one).
    #[inline]
    pub fn is_solid(mask: u64) -> bool {
        mask == SOLID_BACKGROUND || mask == SOLID_FOREGROUND
    }
}
