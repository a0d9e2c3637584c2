#![allow(missing_docs)]
//! Host-level tests for glyph lookup and text rendering onto the canvas.

use matrix_clock::canvas::MatrixCanvas;
use matrix_clock::font::{self, CHAR_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH};
use matrix_clock::strip::{Rgb, colors};

type Canvas5x5 = MatrixCanvas<25, 5, 5>;
type Canvas20x5 = MatrixCanvas<100, 20, 5>;

/// Collect the lit `(x, y)` coordinates of a canvas, in row-major order.
fn lit_pixels<const N: usize, const W: usize, const H: usize>(
    canvas: &MatrixCanvas<N, W, H>,
) -> Vec<(usize, usize)> {
    let mut lit = Vec::new();
    for y in 0..H {
        for x in 0..W {
            if canvas.pixel(x, y) != Rgb::new(0, 0, 0) {
                lit.push((x, y));
            }
        }
    }
    lit
}

#[test]
fn glyph_lookup_covers_supported_set() {
    for ch in font::SUPPORTED {
        assert!(font::glyph(ch).is_some(), "missing glyph for {ch:?}");
    }
    assert!(font::glyph('a').is_none());
    assert!(font::glyph(' ').is_none());
    assert!(font::glyph('\u{1F600}').is_none());
}

#[test]
fn glyph_masks_use_only_low_five_bits() {
    for ch in font::SUPPORTED {
        let rows = font::glyph(ch).expect("supported glyph");
        assert_eq!(rows.len(), GLYPH_HEIGHT);
        for &row_bits in rows {
            assert_eq!(
                row_bits >> GLYPH_WIDTH,
                0,
                "glyph {ch:?} sets bits above the low {GLYPH_WIDTH}"
            );
        }
    }
}

#[test]
fn draw_char_one_renders_expected_pixels() {
    let mut canvas = Canvas5x5::new().expect("5x5 canvas must construct");
    canvas.draw_char('1', 0, 0, colors::WHITE);

    // Row masks 00100 01100 00100 00100 01110, leftmost column is bit 4.
    let expected = [
        (2, 0),
        (1, 1),
        (2, 1),
        (2, 2),
        (2, 3),
        (1, 4),
        (2, 4),
        (3, 4),
    ];
    assert_eq!(lit_pixels(&canvas), expected);
}

#[test]
fn draw_char_unknown_renders_nothing() {
    let mut canvas = Canvas5x5::new().expect("5x5 canvas must construct");
    canvas.draw_char('x', 0, 0, colors::WHITE);
    assert!(lit_pixels(&canvas).is_empty());
}

#[test]
fn draw_char_negative_origin_clips_without_panic() {
    let mut canvas = Canvas5x5::new().expect("5x5 canvas must construct");
    canvas.draw_char('8', -3, -3, colors::WHITE);

    // Only the glyph's bottom-right corner overlaps the panel.
    for (x, y) in lit_pixels(&canvas) {
        assert!(x < 2 && y < 2, "pixel ({x}, {y}) should have been clipped");
    }
}

#[test]
fn draw_text_advances_six_columns_per_char() {
    let mut with_gap = Canvas20x5::new().expect("20x5 canvas must construct");
    with_gap.draw_text("1x1", 0, 0, colors::WHITE);

    // The unknown 'x' draws nothing but still consumes an advance, so "1x1"
    // is two '1' glyphs two advances apart.
    let mut two_ones = Canvas20x5::new().expect("20x5 canvas must construct");
    two_ones.draw_char('1', 0, 0, colors::WHITE);
    two_ones.draw_char('1', 2 * CHAR_ADVANCE as i32, 0, colors::WHITE);

    assert_eq!(lit_pixels(&with_gap), lit_pixels(&two_ones));
}

#[test]
fn draw_text_off_right_edge_is_clipped() {
    let mut canvas = Canvas5x5::new().expect("5x5 canvas must construct");
    canvas.draw_text("88", 3, 0, colors::WHITE);

    // Everything that lands on the panel must sit at column 3 or later; the
    // second glyph starts at column 9, entirely off a 5-wide panel.
    let lit = lit_pixels(&canvas);
    assert!(!lit.is_empty());
    assert!(lit.iter().all(|&(x, _)| x >= 3));
}

#[test]
fn draw_text_uses_requested_color() {
    let mut canvas = Canvas20x5::new().expect("20x5 canvas must construct");
    let teal = Rgb::new(0, 20, 50);
    canvas.draw_text("1:", 0, 0, teal);

    let lit = lit_pixels(&canvas);
    assert!(!lit.is_empty());
    for (x, y) in lit {
        assert_eq!(canvas.pixel(x, y), teal);
    }
}
