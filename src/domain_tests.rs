//! Domain-critical regression tests for glyph-mosaic.
//!
//! These tests guard the engine's contract properties across modules, not
//! just per-module happy paths. Each test documents the regression it
//! guards against.

use std::collections::HashSet;

use pretty_assertions::assert_eq;

use crate::glyph::GlyphLibrary;
use crate::matcher::MatchEngine;
use crate::palette::{Palette, Rgba};
use crate::raster::{PixelBlock, Raster, BLOCK_PIXELS, CELL_SIZE};
use crate::sampler::{dominant_pair, BlockStats};
use crate::{parse_grid, GlyphMosaic};

fn engine() -> MatchEngine {
    MatchEngine::new(Palette::web_safe(), GlyphLibrary::block_elements()).unwrap()
}

/// Block with three two-column stripes of red, green and blue plus two
/// columns of white. Three-plus unique indices force the approximate path.
fn tricolor_block() -> PixelBlock {
    let stripes = [
        Rgba::opaque(255, 0, 0),
        Rgba::opaque(0, 255, 0),
        Rgba::opaque(0, 0, 255),
        Rgba::opaque(255, 255, 255),
    ];
    let mut pixels = [Rgba::TRANSPARENT; BLOCK_PIXELS];
    for y in 0..CELL_SIZE {
        for x in 0..CELL_SIZE {
            pixels[y * CELL_SIZE + x] = stripes[x / 2];
        }
    }
    PixelBlock::new(pixels)
}

// ============================================================================
// Determinism: fixed palette + library + block => fixed result
// ============================================================================

/// If this breaks, it means: library iteration order leaked nondeterminism
/// into the match, and serialized output is no longer reproducible between
/// runs.
#[test]
fn test_determinism_across_engines() {
    let block = tricolor_block();
    let first = engine().match_block(&block);
    for _ in 0..3 {
        assert_eq!(engine().match_block(&block), first);
    }
}

// ============================================================================
// Solid-block property
// ============================================================================

/// If this breaks, it means: the single-color fast path stopped returning
/// fg == bg, so uniform regions render with a spurious second color.
#[test]
fn test_solid_block_collapses_to_one_index() {
    let engine = engine();
    for color in [
        Rgba::opaque(255, 0, 0),
        Rgba::opaque(0, 0, 255),
        Rgba::BLACK,
        Rgba::opaque(255, 255, 255),
    ] {
        let cell = engine.match_block(&PixelBlock::solid(color));
        let expected = engine.palette().nearest_index(color);
        assert_eq!(cell.fg, expected, "fg for {color:?}");
        assert_eq!(cell.bg, expected, "bg for {color:?}");
    }
}

// ============================================================================
// Exact-reconstruction property
// ============================================================================

/// If this breaks, it means: a block that some glyph reconstructs with zero
/// error fell through to the approximate path, trading an exact result for
/// an approximation.
#[test]
fn test_exact_match_is_found_when_one_exists() {
    let engine = engine();
    let black = Rgba::BLACK;
    let white = Rgba::opaque(255, 255, 255);

    // Every quadrant glyph rendered with actual palette colors must match
    // itself exactly when presented as a raw block.
    for (glyph, mask) in engine.library().entries() {
        if GlyphLibrary::is_solid(mask) {
            continue;
        }
        let mut pixels = [black; BLOCK_PIXELS];
        for (i, px) in pixels.iter_mut().enumerate() {
            if mask >> i & 1 == 1 {
                *px = white;
            }
        }
        let block = PixelBlock::new(pixels);
        let cell = engine.match_block(&block);

        let result_mask = engine.library().pattern(cell.glyph);
        let fg_color = engine.palette().color(cell.fg);
        let bg_color = engine.palette().color(cell.bg);
        for (i, &pixel) in block.pixels().iter().enumerate() {
            let simulated = if result_mask >> i & 1 == 1 {
                fg_color
            } else {
                bg_color
            };
            assert_eq!(
                simulated, pixel,
                "glyph {glyph:?} block reconstructed inexactly at pixel {i} (chose {:?})",
                cell.glyph
            );
        }
    }
}

// ============================================================================
// Approximate-minimality property
// ============================================================================

/// If this breaks, it means: the fallback search no longer returns the
/// lowest-error candidate over the dominant pair, so output quality
/// silently degrades.
#[test]
fn test_approximate_result_is_minimal() {
    let engine = engine();
    let block = tricolor_block();
    let cell = engine.match_block(&block);

    let stats = BlockStats::extract(&block, engine.palette());
    assert!(stats.unique.len() > 2, "scenario must force the fallback");
    let (first, second) = dominant_pair(&stats.histogram);

    let error_of = |mask: u64, fg: u8, bg: u8| -> u64 {
        let fg_color = engine.palette().color(fg);
        let bg_color = engine.palette().color(bg);
        block
            .pixels()
            .iter()
            .enumerate()
            .map(|(i, &px)| {
                let simulated = if mask >> i & 1 == 1 { fg_color } else { bg_color };
                u64::from(px.distance_squared(simulated))
            })
            .sum()
    };

    let result_error = error_of(engine.library().pattern(cell.glyph), cell.fg, cell.bg);
    for (_, mask) in engine.library().entries() {
        for (fg, bg) in [(first, second), (second, first)] {
            assert!(
                result_error <= error_of(mask, fg, bg),
                "a candidate beats the returned cell"
            );
        }
    }

    // The returned colors come from the dominant pair
    assert!(cell.fg == first || cell.fg == second);
    assert!(cell.bg == first || cell.bg == second);
}

/// If this breaks, it means: a many-color block crashed or produced an
/// out-of-range index instead of resolving through the fallback chain.
#[test]
fn test_tricolor_block_never_panics() {
    let cell = engine().match_block(&tricolor_block());
    // u8 indices are in range by type; the glyph must come from the library
    // (the '\0' default only appears when the search space is empty).
    assert_ne!(cell.glyph, '\0');
}

// ============================================================================
// Alternate-match (skip-set) behavior
// ============================================================================

/// If this breaks, it means: the exclusion set stopped being honored, so
/// "try another glyph" returns the glyph the user is trying to replace.
#[test]
fn test_excluded_glyphs_are_never_returned() {
    let engine = engine();
    let block = tricolor_block();

    let mut exclude = HashSet::new();
    for _ in 0..4 {
        let cell = engine.match_block_excluding(&block, &exclude);
        if cell.glyph == '\0' {
            break;
        }
        assert!(!exclude.contains(&cell.glyph), "returned an excluded glyph");
        exclude.insert(cell.glyph);
    }
}

// ============================================================================
// End-to-end: convert then round-trip through the text format
// ============================================================================

/// If this breaks, it means: serialization lost or altered cell data, and
/// saved conversions no longer reload faithfully.
#[test]
fn test_convert_serialize_parse_round_trip() {
    let mosaic = GlyphMosaic::new(Palette::web_safe(), GlyphLibrary::block_elements()).unwrap();

    // 24x8: solid red, half black/white, fully transparent
    let red = Rgba::opaque(255, 0, 0);
    let white = Rgba::opaque(255, 255, 255);
    let mut pixels = vec![Rgba::TRANSPARENT; 24 * 8];
    for y in 0..8 {
        for x in 0..24 {
            pixels[y * 24 + x] = match x / 8 {
                0 => red,
                1 => {
                    if x % 8 < 4 {
                        Rgba::BLACK
                    } else {
                        white
                    }
                }
                _ => Rgba::TRANSPARENT,
            };
        }
    }
    let raster = Raster::new(pixels, 24, 8).unwrap();
    let grid = mosaic.convert(&raster);

    let text = mosaic.write_text(&grid, "web-safe");
    let (parsed, palette_name) = parse_grid(&text).unwrap();

    assert_eq!(palette_name, "web-safe");
    assert_eq!(parsed.width(), grid.width());
    assert_eq!(parsed.height(), grid.height());
    for x in 0..grid.width() {
        let original = grid.cell(x, 0);
        let restored = parsed.cell(x, 0);
        assert_eq!(restored.glyph, original.glyph);
        assert_eq!(restored.fg, original.fg);
        assert_eq!(restored.bg, original.bg);
    }
    // The transparent cell's alpha collapses to 0 via the -1 sentinel
    assert_eq!(parsed.cell(2, 0).alpha, 0);
    // Visible cells keep their alpha
    assert_eq!(parsed.cell(0, 0).alpha, 255);
}

/// If this breaks, it means: a degenerate zero-width raster produces text
/// the parser rejects, so the serializer no longer round-trips its own
/// output for every convertible input.
#[test]
fn test_zero_width_raster_round_trips() {
    let mosaic = GlyphMosaic::new(Palette::web_safe(), GlyphLibrary::block_elements()).unwrap();
    let raster = Raster::new(Vec::new(), 0, 2 * CELL_SIZE).unwrap();
    let grid = mosaic.convert(&raster);
    assert_eq!(grid.width(), 0);
    assert_eq!(grid.height(), 2);

    let (parsed, _) = parse_grid(&mosaic.write_text(&grid, "web-safe")).unwrap();
    assert_eq!(parsed, grid);
}
