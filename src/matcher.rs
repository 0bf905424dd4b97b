//! The glyph/color match engine.
//!
//! For each pixel block the engine tries, in order: a single-color fast
//! path, an exact two-color reconstruction, and an error-minimizing
//! approximate fallback. All three share the same immutable palette and
//! glyph library, injected at construction.

use std::collections::HashSet;

use thiserror::Error;

use crate::glyph::GlyphLibrary;
use crate::grid::GlyphCell;
use crate::palette::Palette;
use crate::raster::{PixelBlock, BLOCK_PIXELS};
use crate::sampler::{dominant_pair, BlockStats};

/// Configuration errors detected when the engine is constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The glyph library holds no patterns; every match would be
    /// meaningless, so the engine refuses to operate.
    #[error("glyph library is empty")]
    EmptyLibrary,
}

/// Matches pixel blocks to glyph/color assignments.
///
/// Construction fails fast on an empty glyph library. Per-block
/// degeneracies (more than two colors, no exact glyph, missing solid
/// glyph) are never errors; they resolve through the documented fallback
/// chain. `match_block` is a pure function of the block and the engine's
/// immutable state, so results are deterministic and cells may be matched
/// concurrently if the caller wishes.
///
/// # Example
///
/// ```
/// use glyph_mosaic::{GlyphLibrary, MatchEngine, Palette, PixelBlock, Rgba};
///
/// let engine = MatchEngine::new(Palette::web_safe(), GlyphLibrary::block_elements()).unwrap();
/// let cell = engine.match_block(&PixelBlock::solid(Rgba::opaque(255, 0, 0)));
/// assert_eq!(cell.fg, cell.bg);
/// ```
#[derive(Debug, Clone)]
pub struct MatchEngine {
    palette: Palette,
    library: GlyphLibrary,
}

impl MatchEngine {
    /// Create an engine over an immutable palette and glyph library.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::EmptyLibrary`] if the library holds no
    /// patterns.
    pub fn new(palette: Palette, library: GlyphLibrary) -> Result<Self, EngineError> {
        if library.is_empty() {
            return Err(EngineError::EmptyLibrary);
        }
        Ok(Self { palette, library })
    }

    /// The engine's palette.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// The engine's glyph library.
    #[inline]
    pub fn library(&self) -> &GlyphLibrary {
        &self.library
    }

    /// Find the single best glyph/color assignment for a block.
    pub fn match_block(&self, block: &PixelBlock) -> GlyphCell {
        self.match_impl(block, None)
    }

    /// Like [`match_block`](Self::match_block), skipping the given code
    /// points.
    ///
    /// This backs the "try another glyph" editing action: exclude the
    /// current glyph and re-run the identical search. Excluding the entire
    /// library degrades to the code-point-0 default over the dominant
    /// colors.
    pub fn match_block_excluding(&self, block: &PixelBlock, exclude: &HashSet<char>) -> GlyphCell {
        self.match_impl(block, Some(exclude))
    }

    fn match_impl(&self, block: &PixelBlock, exclude: Option<&HashSet<char>>) -> GlyphCell {
        let stats = BlockStats::extract(block, &self.palette);
        let skip = |glyph: char| exclude.is_some_and(|set| set.contains(&glyph));

        // Single-color fast path: a solid block is representable by any
        // solid glyph with fg == bg, no search needed. If the library has
        // no solid glyph the block falls through and resolves in the
        // approximate path.
        if stats.unique.len() == 1 {
            let index = stats.unique[0];
            if let Some((glyph, _)) = self
                .library
                .entries()
                .find(|&(glyph, mask)| GlyphLibrary::is_solid(mask) && !skip(glyph))
            {
                return GlyphCell {
                    glyph,
                    fg: index,
                    bg: index,
                    alpha: stats.average_alpha,
                };
            }
        }

        // Exact two-color reconstruction. First hit wins; library order is
        // ascending code point, so the result is reproducible.
        if let [a, b] = stats.unique[..] {
            for (glyph, mask) in self.library.entries() {
                if skip(glyph) {
                    continue;
                }
                for (fg, bg) in [(a, b), (b, a)] {
                    if self.reconstructs_exactly(block, &stats.indices, mask, fg, bg) {
                        return GlyphCell {
                            glyph,
                            fg,
                            bg,
                            alpha: stats.average_alpha,
                        };
                    }
                }
            }
        }

        // Approximate fallback: minimize summed squared RGB error over the
        // dominant color pair, both orderings.
        tracing::trace!(
            unique = stats.unique.len(),
            "no exact reconstruction, minimizing color error"
        );
        let (first, second) = dominant_pair(&stats.histogram);
        let mut best = GlyphCell {
            glyph: '\0',
            fg: first,
            bg: second,
            alpha: stats.average_alpha,
        };
        let mut best_error = u64::MAX;
        for (glyph, mask) in self.library.entries() {
            if skip(glyph) {
                continue;
            }
            for (fg, bg) in [(first, second), (second, first)] {
                let error = self.block_error(block, mask, fg, bg);
                if error < best_error {
                    best_error = error;
                    best = GlyphCell {
                        glyph,
                        fg,
                        bg,
                        alpha: stats.average_alpha,
                    };
                }
            }
        }
        best
    }

    /// Two-level exactness check for one glyph/ordering candidate.
    ///
    /// The quantized-level pass compares expected indices against the
    /// block's quantized indices. Quantization can collapse two different
    /// raw colors onto one index, so a passing candidate must also
    /// reproduce the raw, unquantized pixels from the actual palette
    /// colors before it is accepted.
    fn reconstructs_exactly(
        &self,
        block: &PixelBlock,
        indices: &[u8; BLOCK_PIXELS],
        mask: u64,
        fg: u8,
        bg: u8,
    ) -> bool {
        for (i, &index) in indices.iter().enumerate() {
            let expected = if mask >> i & 1 == 1 { fg } else { bg };
            if index != expected {
                return false;
            }
        }

        let fg_color = self.palette.color(fg);
        let bg_color = self.palette.color(bg);
        block.pixels().iter().enumerate().all(|(i, &pixel)| {
            let simulated = if mask >> i & 1 == 1 { fg_color } else { bg_color };
            simulated == pixel
        })
    }

    /// Summed squared RGB error of rendering `mask` with the given colors
    /// against the raw block.
    fn block_error(&self, block: &PixelBlock, mask: u64, fg: u8, bg: u8) -> u64 {
        let fg_color = self.palette.color(fg);
        let bg_color = self.palette.color(bg);
        let mut error = 0u64;
        for (i, &pixel) in block.pixels().iter().enumerate() {
            let simulated = if mask >> i & 1 == 1 { fg_color } else { bg_color };
            error += u64::from(pixel.distance_squared(simulated));
        }
        error
    }
}
