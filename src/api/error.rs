//! Unified error type for the glyph-mosaic public API.
//!
//! [`MosaicError`] wraps the per-module error types into a single enum for
//! convenient `?` propagation in application code.

use thiserror::Error;

use crate::matcher::EngineError;
use crate::output::TextFormatError;
use crate::palette::PaletteError;
use crate::raster::RasterError;

/// Unified error type for the glyph-mosaic public API.
///
/// # Example
///
/// ```
/// use glyph_mosaic::{GlyphLibrary, GlyphMosaic, MosaicError, Palette};
///
/// fn build() -> Result<GlyphMosaic, MosaicError> {
///     let mosaic = GlyphMosaic::new(Palette::web_safe(), GlyphLibrary::block_elements())?;
///     Ok(mosaic)
/// }
/// ```
#[derive(Debug, Error)]
pub enum MosaicError {
    /// Palette validation failed
    #[error("palette error: {0}")]
    Palette(#[from] PaletteError),

    /// Raster validation failed
    #[error("raster error: {0}")]
    Raster(#[from] RasterError),

    /// Engine configuration is unusable
    #[error("engine error: {0}")]
    Engine(#[from] EngineError),

    /// Text format parsing failed
    #[error("text format error: {0}")]
    Text(#[from] TextFormatError),
}
