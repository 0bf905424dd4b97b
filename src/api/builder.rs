//! GlyphMosaic builder -- the primary ergonomic entry point for the crate.
//!
//! [`GlyphMosaic`] wraps engine construction, full-grid assembly and text
//! serialization behind a small builder API.

use crate::grid::GlyphGrid;
use crate::matcher::MatchEngine;
use crate::output;
use crate::palette::Palette;
use crate::raster::Raster;
use crate::glyph::GlyphLibrary;

use super::error::MosaicError;

/// Default serializer visibility threshold: cells with average alpha below
/// this are written as the `-1` transparency sentinel.
pub const DEFAULT_ALPHA_THRESHOLD: u8 = 8;

/// High-level raster-to-glyph-grid converter.
///
/// # Design
///
/// - Constructor requires a validated [`Palette`] and a non-empty
///   [`GlyphLibrary`] (no invalid states)
/// - Configuration methods consume and return `self` (standard builder
///   pattern)
/// - [`convert()`](Self::convert) takes `&self` so the builder is
///   **reusable** across multiple rasters
///
/// # Example
///
/// ```
/// use glyph_mosaic::{GlyphLibrary, GlyphMosaic, Palette, Raster, Rgba};
///
/// let mosaic = GlyphMosaic::new(Palette::web_safe(), GlyphLibrary::block_elements()).unwrap();
///
/// let pixels = vec![Rgba::opaque(255, 0, 0); 16 * 8];
/// let raster = Raster::new(pixels, 16, 8).unwrap();
/// let grid = mosaic.convert(&raster);
///
/// assert_eq!(grid.width(), 2);
/// assert_eq!(grid.height(), 1);
/// ```
pub struct GlyphMosaic {
    engine: MatchEngine,
    alpha_threshold: u8,
}

impl GlyphMosaic {
    /// Create a converter over the given palette and glyph library.
    ///
    /// # Errors
    ///
    /// Returns [`MosaicError::Engine`] if the library is empty.
    pub fn new(palette: Palette, library: GlyphLibrary) -> Result<Self, MosaicError> {
        Ok(Self {
            engine: MatchEngine::new(palette, library)?,
            alpha_threshold: DEFAULT_ALPHA_THRESHOLD,
        })
    }

    /// Set the serializer visibility threshold.
    #[inline]
    pub fn alpha_threshold(mut self, threshold: u8) -> Self {
        self.alpha_threshold = threshold;
        self
    }

    /// The underlying match engine.
    #[inline]
    pub fn engine(&self) -> &MatchEngine {
        &self.engine
    }

    /// Convert a raster into a glyph grid.
    ///
    /// Iterates rows then columns, matching each 8×8 block independently.
    /// No cell's computation depends on any other cell's result, so the
    /// grid is complete exactly when the loop finishes; callers observing
    /// the returned value never see a partial grid.
    pub fn convert(&self, raster: &Raster) -> GlyphGrid {
        let width = raster.grid_width();
        let height = raster.grid_height();
        let mut cells = Vec::with_capacity(width * height);

        for row in 0..height {
            for col in 0..width {
                cells.push(self.engine.match_block(&raster.block(col, row)));
            }
            tracing::debug!(row = row + 1, of = height, "assembled grid row");
        }

        GlyphGrid::new(cells, width, height)
    }

    /// Serialize a grid to the line-oriented text format.
    ///
    /// Applies this converter's alpha threshold; see
    /// [`output::write_grid`] for the format.
    pub fn write_text(&self, grid: &GlyphGrid, palette_name: &str) -> String {
        output::write_grid(grid, palette_name, self.alpha_threshold)
    }
}
