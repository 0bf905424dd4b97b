//! Public entry point and unified error type.

mod builder;
mod error;

pub use builder::{GlyphMosaic, DEFAULT_ALPHA_THRESHOLD};
pub use error::MosaicError;
