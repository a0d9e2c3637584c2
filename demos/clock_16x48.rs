//! Wall clock on a 16×48 serpentine NeoPixel panel, data on PIN_0.
//!
//! The panel is the reference device: one continuous WS2812 strip folded into
//! 16 rows of 48, even rows wired left-to-right. A placeholder time source
//! stands in for a real NTP client; swap in your own [`TimeSource`] to sync
//! over the network.

#![no_std]
#![no_main]
#![allow(clippy::future_not_send, reason = "single-threaded")]

use core::convert::Infallible;
use core::future;

use defmt::info;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio::{InterruptHandler, Pio};
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use matrix_clock::animate::{self, RainbowCycle};
use matrix_clock::canvas::MatrixCanvas;
use matrix_clock::display::{ClockDisplay, FRAME_INTERVAL, IntervalTicker};
use matrix_clock::strip::Rgb;
use matrix_clock::sync::{SyncEvent, SyncedClock, TimeSource, UnixSeconds, sync_loop};
use matrix_clock::{Error, Result};
use portable_atomic::{AtomicBool, Ordering};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    PIO0_IRQ_0 => InterruptHandler<PIO0>;
});

const MATRIX_WIDTH: usize = 48;
const MATRIX_HEIGHT: usize = 16;
const LED_COUNT: usize = MATRIX_WIDTH * MATRIX_HEIGHT;

/// UTC offset applied to synced time; adjust for your timezone.
const OFFSET_MINUTES: i32 = 0;

/// Digit color from the reference device: dim cyan-blue.
const DIGIT_COLOR: Rgb = Rgb::new(0, 20, 50);

/// Boot interlude length: 8 seconds at the 500 ms frame cadence.
const INTRO_FRAMES: usize = 16;

/// Stand-in for a real NTP client: reports one fixed time, then goes quiet.
struct FixedTimeSource {
    unix_seconds: UnixSeconds,
    reported: AtomicBool,
}

impl TimeSource for FixedTimeSource {
    async fn wait_for_sync(&self) -> SyncEvent {
        if self.reported.swap(true, Ordering::AcqRel) {
            future::pending().await
        } else {
            SyncEvent::Synced(self.unix_seconds)
        }
    }
}

static CLOCK: SyncedClock = SyncedClock::new(OFFSET_MINUTES);
static TIME_SOURCE: FixedTimeSource = FixedTimeSource {
    // 2025-01-01 12:34:56 UTC
    unix_seconds: 1_735_734_896,
    reported: AtomicBool::new(false),
};
static WS2812_PROGRAM: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();

#[embassy_executor::task]
async fn sync_task(clock: &'static SyncedClock, source: &'static FixedTimeSource) -> ! {
    sync_loop(clock, source).await
}

#[embassy_executor::main]
async fn main(spawner: Spawner) -> ! {
    let err = inner_main(spawner).await.unwrap_err();
    core::panic!("{err}");
}

async fn inner_main(spawner: Spawner) -> Result<Infallible> {
    let p = embassy_rp::init(Default::default());

    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = WS2812_PROGRAM.init(PioWs2812Program::new(&mut common));
    let mut driver: PioWs2812<'_, PIO0, 0, LED_COUNT> =
        PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_0, program);

    spawner
        .spawn(sync_task(&CLOCK, &TIME_SOURCE))
        .map_err(Error::TaskSpawn)?;

    let mut ticker = IntervalTicker::new(FRAME_INTERVAL);

    info!("rainbow intro: {} frames", INTRO_FRAMES);
    let mut intro = RainbowCycle::new();
    let mut canvas = MatrixCanvas::<LED_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT>::new()?;
    animate::play(&mut intro, &mut canvas, &mut driver, &mut ticker, INTRO_FRAMES).await?;

    info!("clock display starting: {}x{} panel", MATRIX_WIDTH, MATRIX_HEIGHT);
    let mut display =
        ClockDisplay::<LED_COUNT, MATRIX_WIDTH, MATRIX_HEIGHT>::new((2, 4), DIGIT_COLOR)?;
    display.run(&CLOCK, &mut driver, &mut ticker).await
}
