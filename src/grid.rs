//! Result cells and the 2-D result grid.

use serde::{Deserialize, Serialize};

/// The chosen rendering for one grid cell.
///
/// Produced once per cell by the match engine; downstream editors may
/// overwrite whole cells but the engine never mutates one in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlyphCell {
    /// Code point of the chosen glyph.
    pub glyph: char,
    /// Foreground palette index.
    pub fg: u8,
    /// Background palette index.
    pub bg: u8,
    /// Average alpha of the source block.
    pub alpha: u8,
}

/// A 2-D array of [`GlyphCell`], row-major.
///
/// # Example
///
/// ```
/// use glyph_mosaic::{GlyphCell, GlyphGrid};
///
/// let cell = GlyphCell { glyph: '█', fg: 1, bg: 0, alpha: 255 };
/// let grid = GlyphGrid::new(vec![cell; 6], 3, 2);
/// assert_eq!(grid.cell(2, 1), cell);
/// assert_eq!(grid.rows().count(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawGrid")]
pub struct GlyphGrid {
    cells: Vec<GlyphCell>,
    width: usize,
    height: usize,
}

/// Unvalidated mirror of [`GlyphGrid`]; deserialization goes through
/// `TryFrom` so the cell-count invariant holds for parsed values too.
#[derive(Deserialize)]
struct RawGrid {
    cells: Vec<GlyphCell>,
    width: usize,
    height: usize,
}

impl TryFrom<RawGrid> for GlyphGrid {
    type Error = String;

    fn try_from(raw: RawGrid) -> Result<Self, Self::Error> {
        if raw.cells.len() != raw.width * raw.height {
            return Err(format!(
                "cell count {} does not match {}x{}",
                raw.cells.len(),
                raw.width,
                raw.height
            ));
        }
        Ok(Self {
            cells: raw.cells,
            width: raw.width,
            height: raw.height,
        })
    }
}

impl GlyphGrid {
    /// Create a grid from row-major cells.
    ///
    /// # Panics
    ///
    /// Panics if `cells.len() != width * height`.
    pub fn new(cells: Vec<GlyphCell>, width: usize, height: usize) -> Self {
        assert_eq!(
            cells.len(),
            width * height,
            "cell count must match {width}x{height}"
        );
        Self {
            cells,
            width,
            height,
        }
    }

    /// Grid width in cells.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// The cell at `(x, y)`.
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> GlyphCell {
        self.cells[y * self.width + x]
    }

    /// All cells, row-major.
    #[inline]
    pub fn cells(&self) -> &[GlyphCell] {
        &self.cells
    }

    /// Iterate over rows, top to bottom.
    ///
    /// Always yields exactly `height` rows; each row is empty when the
    /// grid's width is zero.
    pub fn rows(&self) -> impl Iterator<Item = &[GlyphCell]> {
        (0..self.height).map(move |y| &self.cells[y * self.width..(y + 1) * self.width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(glyph: char) -> GlyphCell {
        GlyphCell {
            glyph,
            fg: 1,
            bg: 0,
            alpha: 255,
        }
    }

    #[test]
    fn test_indexing_row_major() {
        let grid = GlyphGrid::new(vec![cell('a'), cell('b'), cell('c'), cell('d')], 2, 2);
        assert_eq!(grid.cell(0, 0).glyph, 'a');
        assert_eq!(grid.cell(1, 0).glyph, 'b');
        assert_eq!(grid.cell(0, 1).glyph, 'c');
        assert_eq!(grid.cell(1, 1).glyph, 'd');
    }

    #[test]
    fn test_rows() {
        let grid = GlyphGrid::new(vec![cell('a'), cell('b'), cell('c'), cell('d')], 2, 2);
        let rows: Vec<Vec<char>> = grid
            .rows()
            .map(|row| row.iter().map(|c| c.glyph).collect())
            .collect();
        assert_eq!(rows, vec![vec!['a', 'b'], vec!['c', 'd']]);
    }

    #[test]
    fn test_empty_grid() {
        let grid = GlyphGrid::new(Vec::new(), 0, 0);
        assert_eq!(grid.rows().count(), 0);
        assert!(grid.cells().is_empty());
    }

    #[test]
    fn test_zero_width_grid_yields_empty_rows() {
        let grid = GlyphGrid::new(Vec::new(), 0, 3);
        assert_eq!(grid.rows().count(), 3);
        assert!(grid.rows().all(<[GlyphCell]>::is_empty));
    }

    #[test]
    fn test_deserialize_round_trip() {
        let grid = GlyphGrid::new(vec![cell('a'), cell('b'), cell('c'), cell('d')], 2, 2);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(serde_json::from_str::<GlyphGrid>(&json).unwrap(), grid);
    }

    #[test]
    fn test_deserialize_rejects_cell_count_mismatch() {
        let json = r#"{"cells":[{"glyph":"a","fg":1,"bg":0,"alpha":255}],"width":2,"height":2}"#;
        let err = serde_json::from_str::<GlyphGrid>(json).unwrap_err();
        assert!(err.to_string().contains("cell count"));
    }

    #[test]
    #[should_panic(expected = "cell count")]
    fn test_length_mismatch_panics() {
        GlyphGrid::new(vec![cell('a')], 2, 2);
    }
}
