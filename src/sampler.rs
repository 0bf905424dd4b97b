//! Per-block statistics: quantization, histogram, dominant colors.

use crate::palette::{Palette, PALETTE_SIZE};
use crate::raster::{PixelBlock, BLOCK_PIXELS};

/// Quantized view of one pixel block.
///
/// Produced once per cell by [`BlockStats::extract`] and consumed by the
/// match engine; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct BlockStats {
    /// Nearest palette index per pixel, row-major.
    pub indices: [u8; BLOCK_PIXELS],
    /// Distinct indices actually used, ascending.
    pub unique: Vec<u8>,
    /// Occurrence count per palette index.
    pub histogram: [u16; PALETTE_SIZE],
    /// Mean alpha of the 64 raw pixels (integer division).
    pub average_alpha: u8,
}

impl BlockStats {
    /// Quantize a block against the palette and gather its statistics.
    pub fn extract(block: &PixelBlock, palette: &Palette) -> Self {
        let mut indices = [0u8; BLOCK_PIXELS];
        let mut histogram = [0u16; PALETTE_SIZE];
        let mut alpha_sum: u32 = 0;

        for (i, &pixel) in block.pixels().iter().enumerate() {
            let idx = palette.nearest_index(pixel);
            indices[i] = idx;
            histogram[idx as usize] += 1;
            alpha_sum += u32::from(pixel.a);
        }

        let unique: Vec<u8> = (0..PALETTE_SIZE)
            .filter(|&idx| histogram[idx] > 0)
            .map(|idx| idx as u8)
            .collect();

        Self {
            indices,
            unique,
            histogram,
            average_alpha: (alpha_sum / BLOCK_PIXELS as u32) as u8,
        }
    }
}

/// The two most frequent palette indices in a histogram.
///
/// Single forward pass tracking winner and runner-up together. The
/// returned pair is always two *distinct* indices; degenerate inputs are
/// resolved by a two-stage fallback:
///
/// 1. An empty histogram defaults the winner to index 0.
/// 2. A missing runner-up (single-color block) is first replaced by a
///    hard-coded fallback (15 if the winner is 0, otherwise 0), then a
///    second scan excluding the winner looks for a genuine runner-up and
///    prefers it over the hard-coded value when one exists.
///
/// # Example
///
/// ```
/// use glyph_mosaic::dominant_pair;
///
/// let mut histogram = [0u16; 256];
/// histogram[7] = 40;
/// histogram[3] = 24;
/// assert_eq!(dominant_pair(&histogram), (7, 3));
/// ```
pub fn dominant_pair(histogram: &[u16; PALETTE_SIZE]) -> (u8, u8) {
    let mut best_idx = 0usize;
    let mut best_count = 0u16;
    let mut second_idx = 0usize;
    let mut second_count = 0u16;

    for (idx, &count) in histogram.iter().enumerate() {
        if count > best_count {
            second_idx = best_idx;
            second_count = best_count;
            best_idx = idx;
            best_count = count;
        } else if count > second_count {
            second_idx = idx;
            second_count = count;
        }
    }

    let winner = best_idx as u8;
    if second_count == 0 || second_idx == best_idx {
        let fallback = if winner == 0 { 15 } else { 0 };
        // A genuine runner-up beats the hard-coded fallback when one exists.
        let mut third: Option<usize> = None;
        let mut third_count = 0u16;
        for (idx, &count) in histogram.iter().enumerate() {
            if idx == best_idx {
                continue;
            }
            if count > third_count {
                third_count = count;
                third = Some(idx);
            }
        }
        return (winner, third.map_or(fallback, |idx| idx as u8));
    }

    (winner, second_idx as u8)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::{Rgba, TRANSPARENT_INDEX};

    fn histogram_of(entries: &[(usize, u16)]) -> [u16; PALETTE_SIZE] {
        let mut histogram = [0u16; PALETTE_SIZE];
        for &(idx, count) in entries {
            histogram[idx] = count;
        }
        histogram
    }

    #[test]
    fn test_extract_solid_block() {
        let palette = Palette::web_safe();
        let color = Rgba::opaque(255, 0, 0);
        let stats = BlockStats::extract(&PixelBlock::solid(color), &palette);

        let idx = palette.nearest_index(color);
        assert_eq!(stats.unique, vec![idx]);
        assert_eq!(stats.histogram[idx as usize], 64);
        assert_eq!(stats.average_alpha, 255);
        assert!(stats.indices.iter().all(|&i| i == idx));
    }

    #[test]
    fn test_extract_two_color_block() {
        let palette = Palette::web_safe();
        let black = Rgba::BLACK;
        let white = Rgba::opaque(255, 255, 255);
        let mut pixels = [black; BLOCK_PIXELS];
        for (i, px) in pixels.iter_mut().enumerate() {
            if i % 2 == 0 {
                *px = white;
            }
        }
        let stats = BlockStats::extract(&PixelBlock::new(pixels), &palette);

        let white_idx = palette.nearest_index(white);
        assert_eq!(stats.unique, vec![1, white_idx]);
        assert_eq!(stats.histogram[1], 32);
        assert_eq!(stats.histogram[white_idx as usize], 32);
    }

    #[test]
    fn test_extract_average_alpha_integer_division() {
        let palette = Palette::web_safe();
        // Half transparent, half opaque red: (32*0 + 32*255) / 64 = 127
        let mut pixels = [Rgba::TRANSPARENT; BLOCK_PIXELS];
        for px in pixels.iter_mut().take(32) {
            *px = Rgba::opaque(255, 0, 0);
        }
        let stats = BlockStats::extract(&PixelBlock::new(pixels), &palette);
        assert_eq!(stats.average_alpha, 127);
        assert_eq!(stats.histogram[TRANSPARENT_INDEX as usize], 32);
    }

    #[test]
    fn test_dominant_pair_two_colors() {
        let histogram = histogram_of(&[(10, 40), (20, 24)]);
        assert_eq!(dominant_pair(&histogram), (10, 20));
    }

    #[test]
    fn test_dominant_pair_prefers_highest_counts() {
        let histogram = histogram_of(&[(3, 5), (8, 30), (200, 29)]);
        assert_eq!(dominant_pair(&histogram), (8, 200));
    }

    #[test]
    fn test_dominant_pair_single_color_nonzero_winner() {
        let histogram = histogram_of(&[(42, 64)]);
        // No runner-up and no genuine third place: hard-coded fallback 0
        assert_eq!(dominant_pair(&histogram), (42, 0));
    }

    #[test]
    fn test_dominant_pair_single_color_zero_winner() {
        let histogram = histogram_of(&[(0, 64)]);
        // Winner 0 swaps the fallback to 15
        assert_eq!(dominant_pair(&histogram), (0, 15));
    }

    #[test]
    fn test_dominant_pair_empty_histogram() {
        let histogram = [0u16; PALETTE_SIZE];
        assert_eq!(dominant_pair(&histogram), (0, 15));
    }

    #[test]
    fn test_dominant_pair_equal_counts_keep_scan_order() {
        let histogram = histogram_of(&[(5, 32), (9, 32)]);
        // First-found wins, second becomes runner-up
        assert_eq!(dominant_pair(&histogram), (5, 9));
    }
}
