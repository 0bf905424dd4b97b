//! Grid-aligned pixel buffers and 8×8 block extraction.
//!
//! The external image-preparation step hands this crate a ready-made
//! rectangular buffer whose dimensions are exact multiples of the cell
//! size; that contract is validated once at construction, after which
//! block extraction is infallible.

use thiserror::Error;

use crate::palette::Rgba;

/// Edge length of one glyph cell in pixels.
pub const CELL_SIZE: usize = 8;

/// Number of pixels in one block.
pub const BLOCK_PIXELS: usize = CELL_SIZE * CELL_SIZE;

/// Error type for raster construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RasterError {
    /// Width or height is not a multiple of the cell size
    #[error("raster dimensions {width}x{height} must be multiples of {CELL_SIZE}")]
    UnalignedDimensions {
        /// Raster width in pixels
        width: usize,
        /// Raster height in pixels
        height: usize,
    },

    /// Pixel buffer length does not match the dimensions
    #[error("pixel buffer holds {got} pixels, {width}x{height} requires {expected}")]
    LengthMismatch {
        /// Raster width in pixels
        width: usize,
        /// Raster height in pixels
        height: usize,
        /// `width * height`
        expected: usize,
        /// Actual buffer length
        got: usize,
    },
}

/// One 8×8 block of raw source pixels, row-major.
///
/// The fixed-size array makes a wrong-size block unrepresentable, so the
/// matching engine needs no runtime size check. Blocks are ephemeral:
/// extracted per cell, matched, discarded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelBlock {
    pixels: [Rgba; BLOCK_PIXELS],
}

impl PixelBlock {
    /// Wrap 64 row-major pixels.
    #[inline]
    pub const fn new(pixels: [Rgba; BLOCK_PIXELS]) -> Self {
        Self { pixels }
    }

    /// A block filled with a single color.
    ///
    /// # Example
    /// ```
    /// use glyph_mosaic::{PixelBlock, Rgba};
    /// let block = PixelBlock::solid(Rgba::opaque(255, 0, 0));
    /// assert_eq!(block.pixel(3, 5), Rgba::opaque(255, 0, 0));
    /// ```
    #[inline]
    pub const fn solid(color: Rgba) -> Self {
        Self {
            pixels: [color; BLOCK_PIXELS],
        }
    }

    /// All 64 pixels, row-major.
    #[inline]
    pub fn pixels(&self) -> &[Rgba; BLOCK_PIXELS] {
        &self.pixels
    }

    /// The pixel at block coordinates `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Rgba {
        self.pixels[y * CELL_SIZE + x]
    }
}

/// A rectangular pixel buffer with grid-aligned dimensions.
///
/// # Example
///
/// ```
/// use glyph_mosaic::{Raster, Rgba};
///
/// let pixels = vec![Rgba::opaque(0, 128, 255); 16 * 8];
/// let raster = Raster::new(pixels, 16, 8).unwrap();
/// assert_eq!(raster.grid_width(), 2);
/// assert_eq!(raster.grid_height(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Raster {
    pixels: Vec<Rgba>,
    width: usize,
    height: usize,
}

impl Raster {
    /// Create a raster from row-major pixels.
    ///
    /// # Errors
    ///
    /// - [`RasterError::UnalignedDimensions`] if either dimension is not a
    ///   multiple of [`CELL_SIZE`]
    /// - [`RasterError::LengthMismatch`] if `pixels.len() != width * height`
    pub fn new(pixels: Vec<Rgba>, width: usize, height: usize) -> Result<Self, RasterError> {
        if width % CELL_SIZE != 0 || height % CELL_SIZE != 0 {
            return Err(RasterError::UnalignedDimensions { width, height });
        }
        if pixels.len() != width * height {
            return Err(RasterError::LengthMismatch {
                width,
                height,
                expected: width * height,
                got: pixels.len(),
            });
        }
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Raster width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Raster height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Grid width in cells.
    #[inline]
    pub fn grid_width(&self) -> usize {
        self.width / CELL_SIZE
    }

    /// Grid height in cells.
    #[inline]
    pub fn grid_height(&self) -> usize {
        self.height / CELL_SIZE
    }

    /// Extract the 8×8 block at grid cell `(col, row)`.
    ///
    /// # Panics
    ///
    /// Panics if `col` or `row` is out of the grid range. Out-of-range
    /// coordinates are a caller contract violation, not a recoverable
    /// condition.
    pub fn block(&self, col: usize, row: usize) -> PixelBlock {
        assert!(
            col < self.grid_width() && row < self.grid_height(),
            "cell ({col}, {row}) outside {}x{} grid",
            self.grid_width(),
            self.grid_height()
        );
        let mut pixels = [Rgba::TRANSPARENT; BLOCK_PIXELS];
        for y in 0..CELL_SIZE {
            let src = (row * CELL_SIZE + y) * self.width + col * CELL_SIZE;
            for x in 0..CELL_SIZE {
                pixels[y * CELL_SIZE + x] = self.pixels[src + x];
            }
        }
        PixelBlock::new(pixels)
    }
}
