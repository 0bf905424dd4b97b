//! Serialized output formats for glyph grids.

mod text;

pub use text::{parse_grid, write_grid, TextFormatError, FIELD_ORDER};
