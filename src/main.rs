//! Firmware entry point for the nRF52840 build.
//!
//! Task layout:
//!   - `button_task` waits on GPIO edges for both buttons and feeds the
//!     interrupt-side classifier.
//!   - the main task owns every peripheral adapter and runs the
//!     controller: pull classified button events every pass, fire the
//!     page tick on the 500 ms grid while the ticker is attached.
//!
//! Splash sequences run inline in the main task with the ticker
//! detached, so the frame buffer only ever has one writer.

#![no_std]
#![no_main]

mod board;
mod error;
mod splash;

use core::cell::RefCell;

use defmt::info;
use defmt_rtt as _;
use panic_probe as _;

use embassy_executor::Spawner;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{Input, Level, Output, OutputDrive, Pull};
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::saadc::{self, ChannelConfig, Saadc};
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Instant, Timer};

use templog::config::{KEY_PRIMARY, KEY_SECONDARY, TICK_MS};
use templog::controller::Controller;
use templog::datalog;
use templog::hw::Peripherals;
use templog::input::InputClassifier;

use board::{BoardDisplay, FlashLog, Leds, SensorIn, SoftTicker, UptimeClock};
use splash::Sequences;

bind_interrupts!(struct Irqs {
    SAADC => saadc::InterruptHandler;
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Edge classification state shared between the button task and the
/// main loop's pull step.
static CLASSIFIER: Mutex<CriticalSectionRawMutex, RefCell<InputClassifier>> =
    Mutex::new(RefCell::new(InputClassifier::new()));

/// Feed every edge on either button into the classifier.
///
/// Both pins are sampled at each edge so a simultaneous press is seen
/// as "more than one line high" and classified as a non-event.
#[embassy_executor::task]
async fn button_task(mut primary: Input<'static>, mut secondary: Input<'static>) -> ! {
    loop {
        let fired_primary = match select(
            primary.wait_for_any_edge(),
            secondary.wait_for_any_edge(),
        )
        .await
        {
            Either::First(()) => true,
            Either::Second(()) => false,
        };

        let now_ms = Instant::now().as_millis();
        let levels = [primary.is_high(), secondary.is_high()];
        let rising = if fired_primary { levels[KEY_PRIMARY] } else { levels[KEY_SECONDARY] };

        CLASSIFIER.lock(|cell| {
            let mut classifier = cell.borrow_mut();
            if rising {
                classifier.on_rising_edge(now_ms, levels);
            } else {
                classifier.on_falling_edge(now_ms);
            }
        });
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    let p = embassy_nrf::init(Default::default());
    info!("templog boot");

    // Buttons, active-high with external pull-downs.
    let primary = Input::new(p.P0_11, Pull::Down);
    let secondary = Input::new(p.P0_12, Pull::Down);
    spawner.must_spawn(button_task(primary, secondary));

    // Display on TWI0.
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut display = BoardDisplay::new(i2c);

    // Temperature sensor on AIN0.
    let channel = ChannelConfig::single_ended(p.P0_02);
    let adc = Saadc::new(p.SAADC, Irqs, saadc::Config::default(), [channel]);
    let mut sensor = SensorIn::new(adc);

    // CSV log in internal flash; header goes out once per boot.
    let mut log = FlashLog::new(Nvmc::new(p.NVMC));
    datalog::write_header(&mut log);

    let clock = UptimeClock;
    let mut sequences = Sequences;
    let mut ticker = SoftTicker::default();
    let mut leds = Leds::new(
        Output::new(p.P0_06, Level::High, OutputDrive::Standard),
        Output::new(p.P0_07, Level::High, OutputDrive::Standard),
    );

    let mut controller = Controller::new();
    let mut next_tick = Instant::now();

    loop {
        let (primary, secondary) = CLASSIFIER.lock(|cell| {
            let mut classifier = cell.borrow_mut();
            (
                classifier.read_and_clear(KEY_PRIMARY),
                classifier.read_and_clear(KEY_SECONDARY),
            )
        });

        {
            let mut peripherals = Peripherals {
                display: &mut display,
                adc: &mut sensor,
                log: &mut log,
                clock: &clock,
                splash: &mut sequences,
                ticker: &mut ticker,
                indicators: &mut leds,
            };
            controller.poll(primary, secondary, &mut peripherals);
        }

        // An attach during poll restarts the tick grid from now.
        if ticker.take_rearm() {
            next_tick = Instant::now() + Duration::from_millis(TICK_MS);
        }

        if ticker.attached() && Instant::now() >= next_tick {
            let mut peripherals = Peripherals {
                display: &mut display,
                adc: &mut sensor,
                log: &mut log,
                clock: &clock,
                splash: &mut sequences,
                ticker: &mut ticker,
                indicators: &mut leds,
            };
            controller.tick(&mut peripherals);
            next_tick += Duration::from_millis(TICK_MS);
        }

        Timer::after(Duration::from_millis(10)).await;
    }
}
