//! The wall-clock boundary and `"HH:MM"` formatting.
//!
//! The rendering core never reads time itself: anything that can report the
//! current hour and minute implements [`WallClock`], so hardware clocks and
//! test fakes are interchangeable.

use core::fmt::Write as _;

use time::OffsetDateTime;

/// A source of the current wall-clock hour and minute.
///
/// Implementations report local time in 24-hour form: `hour` in `0..24`,
/// `minute` in `0..60`. The display renders whatever it is given; validating
/// sync freshness is explicitly not its job.
pub trait WallClock {
    /// Current `(hour, minute)`.
    fn hour_minute(&self) -> (u8, u8);
}

/// A formatted `"HH:MM"` clock face, e.g. `"07:05"`.
pub type TimeText = heapless::String<5>;

/// Format `hour` and `minute` as zero-padded `"HH:MM"`.
#[must_use]
pub fn format_hhmm(hour: u8, minute: u8) -> TimeText {
    assert!(hour < 24, "hour must be 0..24");
    assert!(minute < 60, "minute must be 0..60");
    let mut text = TimeText::new();
    write!(text, "{hour:02}:{minute:02}").expect("HH:MM fits in TimeText");
    text
}

/// Convert unix seconds plus a UTC offset to a local `(hour, minute)`.
///
/// Out-of-range timestamps degrade to midnight rather than failing; the
/// display always has something to render.
#[must_use]
pub fn hour_minute_from_unix(unix_seconds: i64, offset_minutes: i32) -> (u8, u8) {
    let shifted = unix_seconds.saturating_add(i64::from(offset_minutes) * 60);
    match OffsetDateTime::from_unix_timestamp(shifted) {
        Ok(datetime) => (datetime.hour(), datetime.minute()),
        Err(_) => (0, 0),
    }
}
