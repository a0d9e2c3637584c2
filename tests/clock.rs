#![allow(missing_docs)]
//! Host-level tests for time formatting, unix conversion, and the frame loop.

use embassy_futures::block_on;
use matrix_clock::Result;
use matrix_clock::clock::{WallClock, format_hhmm, hour_minute_from_unix};
use matrix_clock::display::ClockDisplay;
use matrix_clock::strip::{Rgb, StripDriver};
use matrix_clock::to_png::write_canvas_png;

const MATRIX_WIDTH: usize = 48;
const MATRIX_HEIGHT: usize = 16;
const LED_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

// 2025-01-01 12:34:56 UTC
const NEW_YEARS_NOON_ISH: i64 = 1_735_734_896;

/// Fixed-time [`WallClock`] fake.
struct FrozenClock {
    hour: u8,
    minute: u8,
}

impl WallClock for FrozenClock {
    fn hour_minute(&self) -> (u8, u8) {
        (self.hour, self.minute)
    }
}

/// Strip fake that records every transmitted frame.
struct RecordingStrip<const N: usize> {
    frames: Vec<[Rgb; N]>,
}

impl<const N: usize> RecordingStrip<N> {
    fn new() -> Self {
        Self { frames: Vec::new() }
    }
}

impl<const N: usize> StripDriver<N> for RecordingStrip<N> {
    async fn update_pixels(&mut self, pixels: &[Rgb; N]) -> Result<()> {
        self.frames.push(*pixels);
        Ok(())
    }
}

#[test]
fn format_hhmm_zero_pads() {
    assert_eq!(format_hhmm(7, 5).as_str(), "07:05");
    assert_eq!(format_hhmm(0, 0).as_str(), "00:00");
    assert_eq!(format_hhmm(23, 59).as_str(), "23:59");
}

#[test]
fn hour_minute_from_unix_utc() {
    assert_eq!(hour_minute_from_unix(NEW_YEARS_NOON_ISH, 0), (12, 34));
    // The unix epoch itself is midnight.
    assert_eq!(hour_minute_from_unix(0, 0), (0, 0));
}

#[test]
fn hour_minute_from_unix_applies_offset() {
    // +1:30 ahead of UTC.
    assert_eq!(hour_minute_from_unix(NEW_YEARS_NOON_ISH, 90), (14, 4));
    // -5:30 behind UTC.
    assert_eq!(hour_minute_from_unix(NEW_YEARS_NOON_ISH, -330), (7, 4));
    // Offsets can cross the date line.
    assert_eq!(hour_minute_from_unix(NEW_YEARS_NOON_ISH, 12 * 60), (0, 34));
}

#[test]
fn hour_minute_from_unix_degrades_to_midnight() {
    assert_eq!(hour_minute_from_unix(i64::MAX, 0), (0, 0));
    assert_eq!(hour_minute_from_unix(i64::MIN, 0), (0, 0));
    // Saturating, not wrapping, near the extremes.
    assert_eq!(hour_minute_from_unix(i64::MAX - 10, 60), (0, 0));
}

#[test]
fn step_renders_and_flushes_one_frame() {
    let mut display: ClockDisplay<LED_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT> =
        ClockDisplay::new((2, 4), Rgb::new(0, 20, 50)).expect("16x48 display must construct");
    let clock = FrozenClock {
        hour: 12,
        minute: 34,
    };
    let mut strip = RecordingStrip::new();

    block_on(display.step(&clock, &mut strip)).expect("recording strip never fails");

    assert_eq!(strip.frames.len(), 1);
    // The transmitted frame is exactly the canvas buffer, wiring order and all.
    assert_eq!(strip.frames[0], display.canvas().pixels().0);

    // "12:34" starts with '1' at the origin; its top pixel is glyph column 2.
    assert_eq!(display.canvas().pixel(4, 4), Rgb::new(0, 20, 50));
    // The column above the face stays dark.
    assert_eq!(display.canvas().pixel(4, 0), Rgb::new(0, 0, 0));
}

#[test]
fn step_repaints_between_frames() {
    let mut display: ClockDisplay<LED_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT> =
        ClockDisplay::new((2, 4), Rgb::new(0, 20, 50)).expect("16x48 display must construct");
    let mut strip = RecordingStrip::new();

    let eight = FrozenClock {
        hour: 8,
        minute: 8,
    };
    block_on(display.step(&eight, &mut strip)).expect("recording strip never fails");
    let one = FrozenClock {
        hour: 11,
        minute: 11,
    };
    block_on(display.step(&one, &mut strip)).expect("recording strip never fails");

    assert_eq!(strip.frames.len(), 2);
    // "08:08" lights more LEDs than "11:11"; stale pixels would break this.
    let lit = |frame: &[Rgb; LED_COUNT]| {
        frame
            .iter()
            .filter(|&&pixel| pixel != Rgb::new(0, 0, 0))
            .count()
    };
    assert!(lit(&strip.frames[1]) < lit(&strip.frames[0]));
}

#[test]
fn canvas_png_preview_writes_a_file() {
    let mut display: ClockDisplay<LED_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT> =
        ClockDisplay::new((2, 4), Rgb::new(0, 20, 50)).expect("16x48 display must construct");
    display.render(12, 34);

    let output_dir = tempfile::tempdir().expect("temp dir must be creatable");
    let output_path = output_dir.path().join("clock_12_34.png");
    write_canvas_png(display.canvas(), &output_path, 1024).expect("PNG preview must encode");

    let metadata = std::fs::metadata(&output_path).expect("preview file must exist");
    assert!(metadata.len() > 0);
}

#[test]
fn canvas_png_preview_tolerates_tiny_target_dimension() {
    let mut display: ClockDisplay<LED_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT> =
        ClockDisplay::new((2, 4), Rgb::new(0, 20, 50)).expect("16x48 display must construct");
    display.render(23, 59);

    // A target far below the panel width: the preview comes out oversized
    // instead of failing.
    let output_dir = tempfile::tempdir().expect("temp dir must be creatable");
    let output_path = output_dir.path().join("clock_tiny.png");
    write_canvas_png(display.canvas(), &output_path, 8).expect("PNG preview must encode");

    let metadata = std::fs::metadata(&output_path).expect("preview file must exist");
    assert!(metadata.len() > 0);
}
