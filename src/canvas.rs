//! A logical 2D pixel surface over a serpentine-wired LED strip.
//!
//! [`MatrixCanvas`] owns the linear pixel buffer for a `W`×`H` panel built
//! from one continuous LED strip folded back and forth across rows: even rows
//! run left-to-right, odd rows right-to-left. All drawing goes through the
//! `(x, y)` interface; the serpentine index translation happens in exactly
//! one place.
//!
//! Coordinates use a screen-style convention: `(0, 0)` is the top-left
//! corner, `x` increases to the right, and `y` increases downward.

use crate::font::{self, CHAR_ADVANCE, GLYPH_WIDTH};
use crate::strip::{Frame1d, Rgb, StripDriver};
use crate::{Error, Result};

/// Pixel buffer for a `W`×`H` serpentine-wired panel of `N` LEDs.
///
/// The canvas is the in-memory half of a double-buffered display: drawing
/// operations mutate the buffer only, and [`MatrixCanvas::flush`] transmits
/// it to the physical strip in one shot. Out-of-range writes are silently
/// dropped so text running off a panel edge can never corrupt other pixels.
///
/// # Example
///
/// ```rust
/// use matrix_clock::canvas::MatrixCanvas;
/// use matrix_clock::strip::colors;
///
/// let mut canvas = MatrixCanvas::<768, 48, 16>::new().expect("dimensions are positive");
/// canvas.fill(colors::BLACK);
/// canvas.draw_text("12:34", 2, 4, colors::CYAN);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct MatrixCanvas<const N: usize, const W: usize, const H: usize> {
    frame: Frame1d<N>,
}

impl<const N: usize, const W: usize, const H: usize> MatrixCanvas<N, W, H> {
    /// Panel width in pixels (columns).
    pub const WIDTH: usize = W;
    /// Panel height in pixels (rows).
    pub const HEIGHT: usize = H;
    /// Total number of LEDs (`W` × `H`).
    pub const LEN: usize = N;

    /// Create an all-black canvas.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCanvasDimension`] if `W` or `H` is zero; a panel
    /// with no pixels cannot exist and must fail at startup.
    pub fn new() -> Result<Self> {
        if W == 0 || H == 0 {
            return Err(Error::ZeroCanvasDimension);
        }
        assert_eq!(
            W.checked_mul(H).expect("width * height must fit in usize"),
            N,
            "width * height must equal N (total LEDs)"
        );
        Ok(Self {
            frame: Frame1d::new(),
        })
    }

    /// Translate panel coordinates to the LED's position along the strip.
    ///
    /// Even rows are wired left-to-right, odd rows right-to-left:
    ///
    /// ```text
    /// LED0  LED1  LED2  LED3
    /// LED7  LED6  LED5  LED4
    /// LED8  LED9  ...
    /// ```
    ///
    /// Getting the parity branch wrong mirrors every odd row, so this mapping
    /// is pinned down by explicit tests.
    #[must_use]
    pub const fn serpentine_index(x: usize, y: usize) -> usize {
        assert!(x < W, "column out of bounds");
        assert!(y < H, "row out of bounds");
        if y % 2 == 0 {
            y * W + x
        } else {
            y * W + (W - 1 - x)
        }
    }

    /// Write `color` at `(x, y)`; out-of-range coordinates are silently ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= W || y >= H {
            return;
        }
        self.frame[Self::serpentine_index(x, y)] = color;
    }

    /// Read the color at `(x, y)`. Panics when out of range; reads are for
    /// tests and previews, which should never probe off-panel.
    #[must_use]
    pub fn pixel(&self, x: usize, y: usize) -> Rgb {
        self.frame[Self::serpentine_index(x, y)]
    }

    /// Overwrite every pixel with `color`. Does not flush.
    pub fn fill(&mut self, color: Rgb) {
        self.frame = Frame1d::filled(color);
    }

    /// Blit one glyph with its top-left corner at `(x, y)`.
    ///
    /// Unknown characters draw nothing. The most significant of a mask's low
    /// five bits maps to column offset 0 (the glyph's leftmost column).
    pub fn draw_char(&mut self, ch: char, x: i32, y: i32, color: Rgb) {
        let Some(rows) = font::glyph(ch) else {
            return;
        };
        for (row_offset, row_bits) in rows.iter().enumerate() {
            for col_offset in 0..GLYPH_WIDTH {
                if row_bits & (1 << (GLYPH_WIDTH - 1 - col_offset)) != 0 {
                    self.set_pixel(x + col_offset as i32, y + row_offset as i32, color);
                }
            }
        }
    }

    /// Draw `text` left-to-right starting at `(x, y)`.
    ///
    /// The cursor advances by [`CHAR_ADVANCE`] columns per character whether
    /// or not the character is known, so unknown characters leave a gap
    /// instead of shifting everything after them.
    pub fn draw_text(&mut self, text: &str, x: i32, y: i32, color: Rgb) {
        let mut cursor_x = x;
        for ch in text.chars() {
            self.draw_char(ch, cursor_x, y, color);
            cursor_x += CHAR_ADVANCE as i32;
        }
    }

    /// The linear pixel buffer in physical wiring order.
    #[must_use]
    pub const fn pixels(&self) -> &Frame1d<N> {
        &self.frame
    }

    /// Transmit the buffer to the physical strip.
    ///
    /// This is the only operation with a side effect beyond memory.
    ///
    /// # Errors
    ///
    /// Propagates any error from the strip driver.
    pub async fn flush<S: StripDriver<N>>(&self, strip: &mut S) -> Result<()> {
        strip.update_pixels(&self.frame).await
    }
}
