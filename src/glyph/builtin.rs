//! Built-in block-element glyph set.
//!
//! A small starter library covering the sixteen 2×2 quadrant block
//! characters plus the three shade characters. Real deployments scan a font
//! into masks instead; this set exists so the engine is usable (and
//! testable) without one.

use super::library::GlyphLibrary;

/// Build a mask from eight row strings, `'X'` marking foreground pixels.
///
/// Rows are top to bottom, columns left to right; bit `y * 8 + x` is set
/// for each `'X'`.
///
/// # Panics
///
/// Panics if any row is not exactly 8 characters.
///
/// # Example
///
/// ```
/// use glyph_mosaic::mask_from_rows;
///
/// let left_half = mask_from_rows([
///     "XXXX....",
///     "XXXX....",
///     "XXXX....",
///     "XXXX....",
///     "XXXX....",
///     "XXXX....",
///     "XXXX....",
///     "XXXX....",
/// ]);
/// assert_eq!(left_half & 1, 1); // (0, 0) is foreground
/// assert_eq!(left_half >> 7 & 1, 0); // (7, 0) is background
/// ```
pub fn mask_from_rows(rows: [&str; 8]) -> u64 {
    let mut mask = 0u64;
    for (y, row) in rows.iter().enumerate() {
        assert_eq!(row.chars().count(), 8, "row {y} must be 8 characters");
        for (x, ch) in row.chars().enumerate() {
            if ch == 'X' {
                mask |= 1 << (y * 8 + x);
            }
        }
    }
    mask
}

/// Mask with each 4×4 quadrant either fully set or fully clear.
fn quadrant_mask(upper_left: bool, upper_right: bool, lower_left: bool, lower_right: bool) -> u64 {
    let mut mask = 0u64;
    for y in 0..8 {
        for x in 0..8 {
            let on = match (y < 4, x < 4) {
                (true, true) => upper_left,
                (true, false) => upper_right,
                (false, true) => lower_left,
                (false, false) => lower_right,
            };
            if on {
                mask |= 1 << (y * 8 + x);
            }
        }
    }
    mask
}

impl GlyphLibrary {
    /// The built-in block-element library.
    ///
    /// Contains the full 2×2 quadrant set (U+2580..U+259F subset: space,
    /// full block, half blocks, single/double/triple quadrants) and the
    /// light/medium/dark shades. Includes both solid sentinels, so the
    /// single-color fast path always has a glyph to return.
    pub fn block_elements() -> Self {
        let quadrants: [(char, (bool, bool, bool, bool)); 16] = [
            (' ', (false, false, false, false)),
            ('█', (true, true, true, true)),
            ('▀', (true, true, false, false)),
            ('▄', (false, false, true, true)),
            ('▌', (true, false, true, false)),
            ('▐', (false, true, false, true)),
            ('▖', (false, false, true, false)),
            ('▗', (false, false, false, true)),
            ('▘', (true, false, false, false)),
            ('▝', (false, true, false, false)),
            ('▚', (true, false, false, true)),
            ('▞', (false, true, true, false)),
            ('▙', (true, false, true, true)),
            ('▛', (true, true, true, false)),
            ('▜', (true, true, false, true)),
            ('▟', (false, true, true, true)),
        ];

        let mut library = GlyphLibrary::new();
        for (glyph, (ul, ur, ll, lr)) in quadrants {
            library.insert(glyph, quadrant_mask(ul, ur, ll, lr));
        }

        library.insert(
            '░',
            mask_from_rows([
                "X...X...",
                "........",
                "..X...X.",
                "........",
                "X...X...",
                "........",
                "..X...X.",
                "........",
            ]),
        );
        library.insert(
            '▒',
            mask_from_rows([
                "X.X.X.X.",
                ".X.X.X.X",
                "X.X.X.X.",
                ".X.X.X.X",
                "X.X.X.X.",
                ".X.X.X.X",
                "X.X.X.X.",
                ".X.X.X.X",
            ]),
        );
        library.insert(
            '▓',
            mask_from_rows([
                ".XXX.XXX",
                "XXXXXXXX",
                "XX.XXX.X",
                "XXXXXXXX",
                ".XXX.XXX",
                "XXXXXXXX",
                "XX.XXX.X",
                "XXXXXXXX",
            ]),
        );

        library
    }
}
