//! Fixed 256-entry color palette with nearest-index matching.
//!
//! The palette is constructed once per session, validated up front, and
//! shared read-only by every matching operation. Index 0 is reserved for
//! full transparency and index 1 for opaque black.

mod color;
mod error;
#[allow(clippy::module_inception)]
mod palette;

pub use color::Rgba;
pub use error::{PaletteError, ParseColorError};
pub use palette::{Palette, BLACK_INDEX, PALETTE_SIZE, TRANSPARENT_INDEX};
