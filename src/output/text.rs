//! Line-oriented text format for glyph grids.
//!
//! The format is a four-line header followed by one line per grid row:
//!
//! ```text
//! WIDTH=3
//! HEIGHT=1
//! PALETTE=web-safe
//! FIELDS=glyph fg bg alpha
//! 9608 1 0 255 32 0 0 -1 9600 182 1 255
//! ```
//!
//! Each cell is four space-separated integers in the declared field order:
//! decimal code point, foreground index, background index, alpha. Alpha is
//! written as `-1` when it falls below the visibility threshold, telling
//! readers to treat the cell as fully transparent; parsing maps `-1` back
//! to alpha 0. Glyph, foreground and background always round-trip exactly;
//! sub-threshold alpha collapses to the transparent sentinel by design.

use thiserror::Error;

use crate::grid::{GlyphCell, GlyphGrid};

/// The only per-cell field order this crate emits and accepts.
pub const FIELD_ORDER: &str = "glyph fg bg alpha";

/// Error type for parsing the text format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextFormatError {
    /// A required header line is absent
    #[error("missing header line {0}")]
    MissingHeader(&'static str),

    /// A header line is present but malformed
    #[error("malformed header line {line:?} (expected {expected}=<value>)")]
    MalformedHeader {
        /// The offending line
        line: String,
        /// The header key that was expected
        expected: &'static str,
    },

    /// The FIELDS header declares an order this parser does not support
    #[error("unsupported field order {0:?}")]
    UnsupportedFields(String),

    /// Wrong number of row lines
    #[error("expected {expected} rows, found {found}")]
    RowCount {
        /// Rows declared by the header
        expected: usize,
        /// Rows actually present
        found: usize,
    },

    /// Wrong number of values on a row line
    #[error("row {row}: expected {expected} values, found {found}")]
    ValueCount {
        /// Zero-based row index
        row: usize,
        /// Values required by the declared width
        expected: usize,
        /// Values actually present
        found: usize,
    },

    /// A value failed to parse or is out of range
    #[error("row {row}: invalid value {value:?}")]
    InvalidValue {
        /// Zero-based row index
        row: usize,
        /// The offending token
        value: String,
    },

    /// A code point is not a Unicode scalar value
    #[error("row {row}: {value} is not a Unicode scalar value")]
    InvalidCodePoint {
        /// Zero-based row index
        row: usize,
        /// The offending code point
        value: u32,
    },
}

/// Serialize a grid to the text format.
///
/// Cells whose alpha is below `alpha_threshold` are written with the `-1`
/// transparency sentinel.
pub fn write_grid(grid: &GlyphGrid, palette_name: &str, alpha_threshold: u8) -> String {
    let mut out = String::new();
    out.push_str(&format!("WIDTH={}\n", grid.width()));
    out.push_str(&format!("HEIGHT={}\n", grid.height()));
    out.push_str(&format!("PALETTE={palette_name}\n"));
    out.push_str(&format!("FIELDS={FIELD_ORDER}\n"));

    for row in grid.rows() {
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let alpha = if cell.alpha < alpha_threshold {
                -1
            } else {
                i32::from(cell.alpha)
            };
            out.push_str(&format!(
                "{} {} {} {}",
                cell.glyph as u32, cell.fg, cell.bg, alpha
            ));
        }
        out.push('\n');
    }
    out
}

fn header_value<'a>(
    line: Option<&'a str>,
    key: &'static str,
) -> Result<&'a str, TextFormatError> {
    let line = line.ok_or(TextFormatError::MissingHeader(key))?;
    line.strip_prefix(key)
        .and_then(|rest| rest.strip_prefix('='))
        .ok_or_else(|| TextFormatError::MalformedHeader {
            line: line.to_string(),
            expected: key,
        })
}

fn header_usize(line: Option<&str>, key: &'static str) -> Result<usize, TextFormatError> {
    let value = header_value(line, key)?;
    value
        .trim()
        .parse()
        .map_err(|_| TextFormatError::MalformedHeader {
            line: format!("{key}={value}"),
            expected: key,
        })
}

/// Parse the text format back into a grid and the declared palette name.
///
/// The inverse of [`write_grid`] up to the documented alpha collapse:
/// `-1` parses as alpha 0.
pub fn parse_grid(input: &str) -> Result<(GlyphGrid, String), TextFormatError> {
    let mut lines = input.lines();

    let width = header_usize(lines.next(), "WIDTH")?;
    let height = header_usize(lines.next(), "HEIGHT")?;
    let palette_name = header_value(lines.next(), "PALETTE")?.trim().to_string();
    let fields = header_value(lines.next(), "FIELDS")?.trim();
    if fields != FIELD_ORDER {
        return Err(TextFormatError::UnsupportedFields(fields.to_string()));
    }

    let row_lines: Vec<&str> = lines.collect();
    if row_lines.len() != height {
        return Err(TextFormatError::RowCount {
            expected: height,
            found: row_lines.len(),
        });
    }

    let mut cells = Vec::with_capacity(width * height);
    for (row, line) in row_lines.iter().enumerate() {
        let values: Vec<&str> = line.split_whitespace().collect();
        if values.len() != width * 4 {
            return Err(TextFormatError::ValueCount {
                row,
                expected: width * 4,
                found: values.len(),
            });
        }
        for cell in values.chunks_exact(4) {
            let code_point: u32 = parse_value(cell[0], row)?;
            let glyph = char::from_u32(code_point).ok_or(TextFormatError::InvalidCodePoint {
                row,
                value: code_point,
            })?;
            let fg: u8 = parse_value(cell[1], row)?;
            let bg: u8 = parse_value(cell[2], row)?;
            let alpha_raw: i32 = parse_value(cell[3], row)?;
            let alpha = match alpha_raw {
                -1 => 0,
                0..=255 => alpha_raw as u8,
                _ => {
                    return Err(TextFormatError::InvalidValue {
                        row,
                        value: cell[3].to_string(),
                    })
                }
            };
            cells.push(GlyphCell {
                glyph,
                fg,
                bg,
                alpha,
            });
        }
    }

    Ok((GlyphGrid::new(cells, width, height), palette_name))
}

fn parse_value<T: std::str::FromStr>(token: &str, row: usize) -> Result<T, TextFormatError> {
    token.parse().map_err(|_| TextFormatError::InvalidValue {
        row,
        value: token.to_string(),
    })
}
