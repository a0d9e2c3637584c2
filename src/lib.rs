//! Wall-clock display for serpentine-wired NeoPixel (WS2812) LED matrix panels.
//!
//! The crate renders `"HH:MM"` onto a rectangular LED panel whose strip snakes
//! back and forth across rows (boustrophedon wiring). The pieces:
//!
//! - [`font`] — a fixed 5×5 bitmap font for digits and the colon.
//! - [`canvas::MatrixCanvas`] — a logical `(x, y)` surface over the linear,
//!   serpentine-ordered pixel buffer, with glyph and text blitting.
//! - [`strip::StripDriver`] — the boundary to the physical LED driver;
//!   implemented for `embassy-rp`'s PIO WS2812 driver on Pico boards.
//! - [`display::ClockDisplay`] — the clear → draw → flush frame loop with an
//!   injectable clock and ticker, so it runs identically on hardware and in
//!   host tests.
//! - [`animate`] — procedural animation interludes (rainbow cycle, pulse
//!   rings) played through the same ticker and strip seams.
//! - [`sync`] — the best-effort time-sync boundary (NTP itself is an external
//!   collaborator; failures are logged and swallowed).
//!
//! See `demos/clock_16x48.rs` for the reference 16×48 panel wired end to end.
#![cfg_attr(not(feature = "host"), no_std)]
#![cfg_attr(not(feature = "host"), no_main)]
#![allow(async_fn_in_trait, reason = "single-threaded embedded")]

// Compile-time checks: exactly one board must be selected (unless testing with host feature)
#[cfg(all(not(any(feature = "pico1", feature = "pico2")), not(feature = "host")))]
compile_error!("Must enable exactly one board feature: 'pico1' or 'pico2'");

#[cfg(all(feature = "pico1", feature = "pico2"))]
compile_error!("Cannot enable both 'pico1' and 'pico2' features simultaneously");

// Compile-time check: embedded builds are ARM-only
#[cfg(all(not(feature = "arm"), not(feature = "host")))]
compile_error!("Must enable the 'arm' architecture feature (or test with 'host')");

pub mod animate;
pub mod canvas;
pub mod clock;
pub mod display;
mod error;
pub mod font;
pub mod strip;
#[cfg(not(feature = "host"))]
pub mod sync;
#[cfg(feature = "host")]
pub mod to_png;

// Re-export error types and result (used throughout)
pub use crate::error::{Error, Result};
