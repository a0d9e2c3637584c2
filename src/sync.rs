//! Best-effort time synchronization boundary.
//!
//! Network time sync (NTP, and the WiFi association underneath it) is an
//! external collaborator. This module defines the handshake: a [`TimeSource`]
//! reports [`SyncEvent`]s, and a [`SyncedClock`] consumes them. Failures are
//! logged and swallowed, never escalated; the rendering core has no idea
//! whether time was ever synchronized and happily renders the un-synced
//! default.

#![allow(clippy::future_not_send, reason = "single-threaded")]

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant};
use portable_atomic::{AtomicBool, AtomicI64, AtomicU64, Ordering};

use crate::clock::{WallClock, hour_minute_from_unix};

/// Seconds since the unix epoch.
pub type UnixSeconds = i64;

/// Outcome of one synchronization attempt.
#[derive(Clone, Copy, Debug, defmt::Format)]
pub enum SyncEvent {
    /// The source obtained the current UTC time.
    Synced(UnixSeconds),
    /// The attempt failed; best-effort, so this is logged and dropped.
    Failed(&'static str),
}

/// An external service that periodically attempts time synchronization.
pub trait TimeSource {
    /// Wait for the next synchronization attempt to complete.
    async fn wait_for_sync(&self) -> SyncEvent;
}

/// A shareable clock that extrapolates local time from the last sync.
///
/// Atomics make the clock safe to share between the sync task and the frame
/// loop. Before the first sync it reports time since boot starting at the
/// unix epoch, so the display shows `00:00` rather than nothing.
pub struct SyncedClock {
    base_unix: AtomicI64,
    base_ticks: AtomicU64,
    offset_minutes: i32,
    synced: AtomicBool,
    sync_ready: Signal<CriticalSectionRawMutex, ()>,
}

impl SyncedClock {
    /// Create an un-synced clock with a fixed UTC offset in minutes.
    #[must_use]
    pub const fn new(offset_minutes: i32) -> Self {
        Self {
            base_unix: AtomicI64::new(0),
            base_ticks: AtomicU64::new(0),
            offset_minutes,
            synced: AtomicBool::new(false),
            sync_ready: Signal::new(),
        }
    }

    /// Set the current UTC time and mark the clock as synced.
    pub fn set_utc_time(&self, unix_seconds: UnixSeconds) {
        let now_ticks = Instant::now().as_ticks();
        self.base_unix.store(unix_seconds, Ordering::Release);
        self.base_ticks.store(now_ticks, Ordering::Release);
        self.synced.store(true, Ordering::Release);
        self.sync_ready.signal(());
    }

    /// Wait until at least one sync has succeeded.
    ///
    /// Returns immediately if the clock is already synced.
    pub async fn wait_synced(&self) {
        if self.is_synced() {
            return;
        }
        self.sync_ready.wait().await;
        // Re-arm so any other waiter also wakes.
        self.sync_ready.signal(());
    }

    /// Consume one sync outcome: apply success, log and swallow failure.
    pub fn apply(&self, event: SyncEvent) {
        match event {
            SyncEvent::Synced(unix_seconds) => {
                self.set_utc_time(unix_seconds);
                defmt::info!("time sync ok: unix {}", unix_seconds);
            }
            SyncEvent::Failed(message) => {
                defmt::info!("time sync failed: {}", message);
            }
        }
    }

    /// Whether any sync has succeeded since boot.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        self.synced.load(Ordering::Acquire)
    }

    /// The fixed UTC offset this clock applies.
    #[must_use]
    pub const fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    fn now_unix(&self) -> UnixSeconds {
        let base_unix = self.base_unix.load(Ordering::Acquire);
        let base_ticks = self.base_ticks.load(Ordering::Acquire);
        let now_ticks = Instant::now().as_ticks();
        assert!(now_ticks >= base_ticks);
        let elapsed = Duration::from_micros(now_ticks - base_ticks);
        base_unix.saturating_add(elapsed.as_secs() as i64)
    }
}

impl WallClock for SyncedClock {
    fn hour_minute(&self) -> (u8, u8) {
        hour_minute_from_unix(self.now_unix(), self.offset_minutes)
    }
}

/// Forever feed sync outcomes from `source` into `clock`.
///
/// Failures never propagate; there is nothing useful a caller could do with
/// them beyond the logging [`SyncedClock::apply`] already does.
pub async fn sync_loop<T: TimeSource>(clock: &SyncedClock, source: &T) -> ! {
    loop {
        clock.apply(source.wait_for_sync().await);
    }
}
