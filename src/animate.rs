//! Procedural animations rendered onto a [`MatrixCanvas`].
//!
//! An [`Animation`] is a deterministic frame generator: each tick advances
//! its state and repaints the whole canvas. Playback goes through the same
//! injected [`FrameTicker`] and [`StripDriver`] seams as the clock face, so
//! an animation interlude and the clock share one strip path and host tests
//! can step frames without hardware.
//!
//! All pixel math is integer-only: hues live on the `u8` circle (256 units
//! per revolution) and colors come from [`smart_leds::hsv::hsv2rgb`].

use smart_leds::hsv::{Hsv, hsv2rgb};

use crate::Result;
use crate::canvas::MatrixCanvas;
use crate::display::FrameTicker;
use crate::strip::StripDriver;

/// A repainting frame generator over a `W`×`H` canvas.
pub trait Animation<const N: usize, const W: usize, const H: usize> {
    /// Stable identifier for selecting an animation by name.
    fn name(&self) -> &'static str;

    /// Return to the first frame.
    fn reset(&mut self);

    /// Advance one frame and repaint `canvas`.
    fn tick(&mut self, canvas: &mut MatrixCanvas<N, W, H>);
}

/// Play `animation` from its first frame for `frame_count` frames.
///
/// Each frame is painted, flushed to the strip, then held until the ticker's
/// next tick. Returns once the last frame has been displayed; the caller
/// resumes whatever the panel shows next (typically the clock face).
///
/// # Errors
///
/// Propagates any error from the strip driver.
pub async fn play<A, S, T, const N: usize, const W: usize, const H: usize>(
    animation: &mut A,
    canvas: &mut MatrixCanvas<N, W, H>,
    strip: &mut S,
    ticker: &mut T,
    frame_count: usize,
) -> Result<()>
where
    A: Animation<N, W, H>,
    S: StripDriver<N>,
    T: FrameTicker,
{
    animation.reset();
    for _ in 0..frame_count {
        animation.tick(canvas);
        canvas.flush(strip).await?;
        ticker.next_frame().await;
    }
    Ok(())
}

/// A horizontal rainbow drifting across the panel.
///
/// Hue increases left to right across one full revolution per panel width,
/// tilted slightly by row, and the whole gradient slides as the phase
/// advances each frame.
pub struct RainbowCycle {
    phase: u8,
}

impl RainbowCycle {
    /// Hue drift per frame; 256 phase units is one full cycle.
    const PHASE_STEP: u8 = 3;

    /// Start at phase zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { phase: 0 }
    }
}

impl Default for RainbowCycle {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const W: usize, const H: usize> Animation<N, W, H> for RainbowCycle {
    fn name(&self) -> &'static str {
        "rainbow_cycle"
    }

    fn reset(&mut self) {
        self.phase = 0;
    }

    fn tick(&mut self, canvas: &mut MatrixCanvas<N, W, H>) {
        self.phase = self.phase.wrapping_add(Self::PHASE_STEP);
        for y in 0..H {
            for x in 0..W {
                let hue = ((x * 256 / W) as u8)
                    .wrapping_add((y * 256 / (H * 2)) as u8)
                    .wrapping_add(self.phase);
                let color = hsv2rgb(Hsv {
                    hue,
                    sat: 255,
                    val: 255,
                });
                canvas.set_pixel(x as i32, y as i32, color);
            }
        }
    }
}

/// Concentric square pulses expanding from the panel center.
///
/// Rings sit at Chebyshev distances congruent to the frame counter, so every
/// ring moves outward one pixel per frame while new rings emerge from the
/// center.
pub struct PulseRings {
    frame: u8,
}

impl PulseRings {
    /// Chebyshev distance between consecutive rings.
    const RING_SPACING: usize = 6;

    /// Start with a ring at the center.
    #[must_use]
    pub const fn new() -> Self {
        Self { frame: 0 }
    }
}

impl Default for PulseRings {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize, const W: usize, const H: usize> Animation<N, W, H> for PulseRings {
    fn name(&self) -> &'static str {
        "pulse_rings"
    }

    fn reset(&mut self) {
        self.frame = 0;
    }

    fn tick(&mut self, canvas: &mut MatrixCanvas<N, W, H>) {
        self.frame = self.frame.wrapping_add(1);
        let center_x = (W - 1) / 2;
        let center_y = (H - 1) / 2;
        let ring_phase = self.frame as usize % Self::RING_SPACING;
        for y in 0..H {
            for x in 0..W {
                let dist = x.abs_diff(center_x).max(y.abs_diff(center_y));
                let ring_offset = (dist + Self::RING_SPACING - ring_phase) % Self::RING_SPACING;
                let val = match ring_offset {
                    0 => 255,
                    1 => 96,
                    _ => 32,
                };
                let hue = self.frame.wrapping_mul(2).wrapping_add((dist * 10) as u8);
                let color = hsv2rgb(Hsv {
                    hue,
                    sat: 180,
                    val,
                });
                canvas.set_pixel(x as i32, y as i32, color);
            }
        }
    }
}
