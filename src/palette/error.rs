//! Error types for palette construction and color parsing.

use std::num::ParseIntError;

use thiserror::Error;

use super::color::Rgba;

/// Error type for parsing hex color strings.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseColorError {
    /// Hex string has invalid length (must be 3, 6 or 8 characters after stripping '#')
    #[error("invalid hex color length (expected 3, 6 or 8 characters)")]
    InvalidLength,

    /// Invalid hexadecimal character encountered
    #[error("invalid hex character: {0}")]
    InvalidHex(#[from] ParseIntError),
}

/// Error type for palette validation.
///
/// The palette refuses to construct with an invalid configuration; every
/// downstream match would be meaningless otherwise.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// A palette must hold exactly 256 colors
    #[error("palette must contain exactly 256 colors, got {0}")]
    WrongLength(usize),

    /// Index 0 must be fully transparent (alpha 0)
    #[error("palette index 0 is reserved for full transparency, got alpha {0}")]
    ReservedTransparent(u8),

    /// Index 1 must be opaque black
    #[error("palette index 1 is reserved for opaque black, got {0:?}")]
    ReservedBlack(Rgba),

    /// Invalid hex color string
    #[error("invalid color: {0}")]
    ParseColor(#[from] ParseColorError),
}
