//! glyph-mosaic: reproduce raster images as grids of glyph cells
//!
//! This library converts a raster image into a grid of "glyph cells":
//! each 8×8 pixel block of the source becomes one cell holding a code
//! point, a foreground palette index, a background palette index and an
//! average alpha. The goal is to reproduce each block as closely as
//! possible using only a fixed library of monochrome bitmap glyphs drawn
//! through a fixed 256-entry palette.
//!
//! # Quick Start
//!
//! The [`GlyphMosaic`] builder is the primary entry point:
//!
//! ```
//! use glyph_mosaic::{GlyphLibrary, GlyphMosaic, Palette, Raster, Rgba};
//!
//! let mosaic = GlyphMosaic::new(Palette::web_safe(), GlyphLibrary::block_elements()).unwrap();
//!
//! let pixels = vec![Rgba::opaque(255, 0, 0); 64];
//! let raster = Raster::new(pixels, 8, 8).unwrap();
//! let grid = mosaic.convert(&raster);
//!
//! let cell = grid.cell(0, 0);
//! assert_eq!(cell.fg, cell.bg); // solid block: one color, any solid glyph
//! ```
//!
//! # Matching Pipeline
//!
//! Every block passes through up to three tiers, cheapest first:
//!
//! ```text
//! PixelBlock (64 raw RGBA samples)
//!     |
//!     v
//! quantize against Palette          (per-pixel nearest index, histogram,
//!     |                              average alpha)
//!     v
//! [1 unique index?] --> solid glyph, fg == bg            (fast path)
//!     |
//!     v
//! [2 unique indices?] --> exact search: every glyph x both color
//!     |                   orderings; quantized-level check, then a
//!     |                   raw-pixel check against actual palette colors
//!     v
//! approximate fallback: dominant color pair, every glyph x both
//! orderings, minimize summed squared RGB error
//! ```
//!
//! The exact tier's second check matters: quantization can collapse two
//! different raw colors onto one palette index, so a candidate that
//! matches at the index level must also reproduce the raw pixels exactly
//! before it is accepted.
//!
//! Determinism is part of the contract. The glyph library iterates in
//! ascending code point order, exact matches short-circuit on the first
//! hit, and approximate ties keep the first-found candidate, so a fixed
//! palette, library and block always produce the same cell.
//!
//! # Serialized Output
//!
//! [`write_grid`]/[`parse_grid`] implement a line-oriented text format
//! with a `WIDTH`/`HEIGHT`/`PALETTE`/`FIELDS` header and one line per grid
//! row. Glyph and color indices round-trip exactly; alpha below the
//! visibility threshold collapses to a `-1` transparency sentinel by
//! design.

pub mod api;
pub mod glyph;
pub mod grid;
pub mod matcher;
pub mod output;
pub mod palette;
pub mod raster;
pub mod sampler;

#[cfg(test)]
mod domain_tests;

pub use api::{GlyphMosaic, MosaicError, DEFAULT_ALPHA_THRESHOLD};
pub use glyph::{mask_from_rows, GlyphLibrary, SOLID_BACKGROUND, SOLID_FOREGROUND};
pub use grid::{GlyphCell, GlyphGrid};
pub use matcher::{EngineError, MatchEngine};
pub use output::{parse_grid, write_grid, TextFormatError, FIELD_ORDER};
pub use palette::{
    Palette, PaletteError, ParseColorError, Rgba, BLACK_INDEX, PALETTE_SIZE, TRANSPARENT_INDEX,
};
pub use raster::{PixelBlock, Raster, RasterError, BLOCK_PIXELS, CELL_SIZE};
pub use sampler::{dominant_pair, BlockStats};
