//! The boundary to the physical LED strip driver.
//!
//! A clock canvas never talks to hardware directly: it hands its linear,
//! serpentine-ordered buffer to a [`StripDriver`]. On Pico boards the driver
//! is `embassy-rp`'s PIO WS2812 driver; host tests substitute a recording
//! fake.

use core::ops::{Deref, DerefMut};

use smart_leds::RGB8;

use crate::Result;

/// Predefined RGB color constants from the `smart_leds` crate.
///
/// Common colors include `RED`, `GREEN`, `BLUE`, `YELLOW`, `WHITE`, `BLACK`, `CYAN`, `MAGENTA`.
#[doc(inline)]
pub use smart_leds::colors;

/// RGB color representation re-exported from the `smart_leds` crate.
pub type Rgb = RGB8;

/// A driver that can push a full frame of pixels to a fixed-length LED strip.
///
/// The pixel slice is in physical wiring order; index mapping is the caller's
/// job (see [`MatrixCanvas`](crate::canvas::MatrixCanvas)). `N` must equal
/// the strip's LED count.
pub trait StripDriver<const N: usize> {
    /// Transmit all `N` pixels at once.
    async fn update_pixels(&mut self, pixels: &[Rgb; N]) -> Result<()>;
}

/// [`Rgb`] pixel data for an LED strip, in physical wiring order.
///
/// Frames deref to `[Rgb; N]`, so pixels can be indexed directly.
#[derive(Clone, Copy, Debug)]
pub struct Frame1d<const N: usize>(pub [Rgb; N]);

impl<const N: usize> Frame1d<N> {
    /// Number of LEDs in this frame.
    pub const LEN: usize = N;

    /// Create a new blank (all black) frame.
    #[must_use]
    pub const fn new() -> Self {
        Self([Rgb::new(0, 0, 0); N])
    }

    /// Create a frame filled with a single color.
    #[must_use]
    pub const fn filled(color: Rgb) -> Self {
        Self([color; N])
    }
}

impl<const N: usize> Deref for Frame1d<N> {
    type Target = [Rgb; N];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl<const N: usize> DerefMut for Frame1d<N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<const N: usize> From<[Rgb; N]> for Frame1d<N> {
    fn from(array: [Rgb; N]) -> Self {
        Self(array)
    }
}

impl<const N: usize> From<Frame1d<N>> for [Rgb; N] {
    fn from(frame: Frame1d<N>) -> Self {
        frame.0
    }
}

impl<const N: usize> Default for Frame1d<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(feature = "pico1", feature = "pico2"))]
mod pio_ws2812 {
    use embassy_rp::pio::Instance;
    use embassy_rp::pio_programs::ws2812::{PioWs2812, RgbColorOrder};

    use super::{Rgb, StripDriver};
    use crate::Result;

    impl<'d, PIO, const SM: usize, const N: usize, ORDER> StripDriver<N>
        for PioWs2812<'d, PIO, SM, N, ORDER>
    where
        PIO: Instance,
        ORDER: RgbColorOrder,
    {
        async fn update_pixels(&mut self, pixels: &[Rgb; N]) -> Result<()> {
            self.write(pixels).await;
            Ok(())
        }
    }
}
