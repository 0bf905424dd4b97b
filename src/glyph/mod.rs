//! Glyph pattern library: code point to 8×8 bitmap mask.

mod builtin;
mod library;

pub use builtin::mask_from_rows;
pub use library::{GlyphLibrary, SOLID_BACKGROUND, SOLID_FOREGROUND};
