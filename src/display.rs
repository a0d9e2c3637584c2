//! The clock's frame loop: clear → draw → flush → wait.
//!
//! [`ClockDisplay`] owns the canvas and renders one frame at a time. Both the
//! time source ([`WallClock`](crate::clock::WallClock)) and the inter-frame
//! delay ([`FrameTicker`]) are injected, so the loop is driven by the embassy
//! timer on hardware and stepped deterministically in host tests.

use core::convert::Infallible;

use embassy_time::Duration;

use crate::Result;
use crate::canvas::MatrixCanvas;
use crate::clock::{WallClock, format_hhmm};
use crate::strip::{Rgb, StripDriver, colors};

/// Reference frame cadence: the face is redrawn twice a second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(500);

/// Paces the frame loop; one call per displayed frame.
pub trait FrameTicker {
    /// Wait until the next frame is due.
    async fn next_frame(&mut self);
}

/// [`FrameTicker`] backed by [`embassy_time::Ticker`].
#[cfg(not(feature = "host"))]
pub struct IntervalTicker {
    ticker: embassy_time::Ticker,
}

#[cfg(not(feature = "host"))]
impl IntervalTicker {
    /// Tick at a fixed `interval`, absorbing render time.
    #[must_use]
    pub fn new(interval: Duration) -> Self {
        Self {
            ticker: embassy_time::Ticker::every(interval),
        }
    }
}

#[cfg(not(feature = "host"))]
impl FrameTicker for IntervalTicker {
    async fn next_frame(&mut self) {
        self.ticker.next().await;
    }
}

/// Renders the current time as `"HH:MM"` on a `W`×`H` serpentine panel.
///
/// The display owns its [`MatrixCanvas`] exclusively; there is no concurrent
/// writer and no locking. Each frame fully repaints the canvas, then flushes
/// it to the strip in one transmission.
pub struct ClockDisplay<const N: usize, const W: usize, const H: usize> {
    canvas: MatrixCanvas<N, W, H>,
    origin: (i32, i32),
    color: Rgb,
}

impl<const N: usize, const W: usize, const H: usize> ClockDisplay<N, W, H> {
    /// Create a display drawing the clock face at `origin` in `color`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ZeroCanvasDimension`](crate::Error::ZeroCanvasDimension)
    /// for a zero-sized panel.
    pub fn new(origin: (i32, i32), color: Rgb) -> Result<Self> {
        Ok(Self {
            canvas: MatrixCanvas::new()?,
            origin,
            color,
        })
    }

    /// Repaint the canvas with `hour:minute`. Does not flush.
    pub fn render(&mut self, hour: u8, minute: u8) {
        let text = format_hhmm(hour, minute);
        self.canvas.fill(colors::BLACK);
        self.canvas
            .draw_text(&text, self.origin.0, self.origin.1, self.color);
    }

    /// Render the clock's current time and flush one frame to the strip.
    ///
    /// # Errors
    ///
    /// Propagates any error from the strip driver.
    pub async fn step<C, S>(&mut self, clock: &C, strip: &mut S) -> Result<()>
    where
        C: WallClock,
        S: StripDriver<N>,
    {
        let (hour, minute) = clock.hour_minute();
        self.render(hour, minute);
        self.canvas.flush(strip).await
    }

    /// Run the frame loop forever: render, flush, wait for the next tick.
    ///
    /// # Errors
    ///
    /// Propagates any error from the strip driver.
    pub async fn run<C, S, T>(
        &mut self,
        clock: &C,
        strip: &mut S,
        ticker: &mut T,
    ) -> Result<Infallible>
    where
        C: WallClock,
        S: StripDriver<N>,
        T: FrameTicker,
    {
        loop {
            self.step(clock, strip).await?;
            ticker.next_frame().await;
        }
    }

    /// The canvas backing this display.
    #[must_use]
    pub const fn canvas(&self) -> &MatrixCanvas<N, W, H> {
        &self.canvas
    }
}
