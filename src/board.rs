//! Board adapters for the nRF52840 build.
//!
//! Each struct implements one of the collaborator traits over an
//! Embassy driver. The core calls through trait objects and never sees
//! these types.

use defmt::{info, warn};
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_futures::block_on;
use embassy_nrf::gpio::Output;
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::saadc::Saadc;
use embassy_time::{block_for, Duration, Instant};
use embedded_hal::i2c::I2c;
use sequential_storage::cache::NoCache;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::{I2CDisplayInterface, Ssd1306};

use templog::config::{
    BOOT_EPOCH, HEIGHT, LOG_FLASH_PAGE_COUNT, LOG_FLASH_PAGE_START, WIDTH,
};
use templog::framebuffer::FrameBuffer;
use templog::hw::{
    AnalogSource, DisplayDevice, Indicators, LogSink, TickerControl, WallClock,
};

use crate::error::Error;

// ═══════════════════════════════════════════════════════════════════════════
// Display
// ═══════════════════════════════════════════════════════════════════════════

/// The 84x48 raster is centered on the 128x64 SSD1306 panel.
const PANEL_X_OFFSET: u32 = (128 - WIDTH as u32) / 2;
const PANEL_Y_OFFSET: u32 = (64 - HEIGHT as u32) / 2;

/// SSD1306 over I2C in buffered mode.
pub struct BoardDisplay<I2C> {
    oled: Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>,
}

impl<I2C: I2c> BoardDisplay<I2C> {
    pub fn new(i2c: I2C) -> Self {
        let interface = I2CDisplayInterface::new(i2c);
        let oled = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
            .into_buffered_graphics_mode();
        Self { oled }
    }

    fn flush(&mut self) -> Result<(), Error> {
        self.oled.flush().map_err(|_| Error::Display)
    }
}

impl<I2C: I2c> DisplayDevice for BoardDisplay<I2C> {
    fn init(&mut self) {
        if self.oled.init().is_err() {
            warn!("display init failed");
            return;
        }
        let _ = self.oled.set_display_on(true);
        info!("display up");
    }

    fn set_contrast(&mut self, contrast: f32) {
        // The driver exposes five presets; bucket the 0..1 range onto them.
        let brightness = match (contrast.clamp(0.0, 1.0) * 5.0) as u8 {
            0 => Brightness::DIMMEST,
            1 => Brightness::DIM,
            2 => Brightness::NORMAL,
            3 => Brightness::BRIGHT,
            _ => Brightness::BRIGHTEST,
        };
        let _ = self.oled.set_brightness(brightness);
    }

    fn clear(&mut self) {
        self.oled.clear_buffer();
        if self.flush().is_err() {
            warn!("display clear failed");
        }
    }

    fn refresh(&mut self, fb: &FrameBuffer) {
        for x in 0..WIDTH {
            for y in 0..HEIGHT {
                self.oled.set_pixel(
                    x as u32 + PANEL_X_OFFSET,
                    y as u32 + PANEL_Y_OFFSET,
                    fb.get_pixel(x, y),
                );
            }
        }
        if self.flush().is_err() {
            warn!("display refresh failed");
        }
    }

    fn turn_off(&mut self) {
        let _ = self.oled.set_display_on(false);
        info!("display off");
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Sensor
// ═══════════════════════════════════════════════════════════════════════════

/// One SAADC channel on AIN0, 12-bit single-ended.
pub struct SensorIn {
    adc: Saadc<'static, 1>,
}

impl SensorIn {
    pub fn new(adc: Saadc<'static, 1>) -> Self {
        Self { adc }
    }
}

impl AnalogSource for SensorIn {
    fn read(&mut self) -> f32 {
        let mut buf = [0i16; 1];
        block_on(self.adc.sample(&mut buf));
        // Settling gap between the filter's back-to-back conversions.
        block_for(Duration::from_millis(1));
        (buf[0].max(0) as f32 / 4095.0).min(1.0)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Log storage
// ═══════════════════════════════════════════════════════════════════════════

const FLASH_PAGE_SIZE: u32 = 4096;
const LOG_REGION_START: u32 = LOG_FLASH_PAGE_START * FLASH_PAGE_SIZE;
const LOG_REGION_END: u32 = (LOG_FLASH_PAGE_START + LOG_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// CSV lines appended to a flash queue in internal flash, oldest
/// records overwritten once the region fills.
pub struct FlashLog {
    flash: BlockingAsync<Nvmc<'static>>,
}

impl FlashLog {
    pub fn new(nvmc: Nvmc<'static>) -> Self {
        Self {
            flash: BlockingAsync::new(nvmc),
        }
    }

    fn try_append(&mut self, line: &str) -> Result<(), Error> {
        block_on(sequential_storage::queue::push(
            &mut self.flash,
            LOG_REGION_START..LOG_REGION_END,
            &mut NoCache::new(),
            line.as_bytes(),
            true,
        ))
        .map_err(|_| Error::Storage)
    }
}

impl LogSink for FlashLog {
    fn append(&mut self, line: &str) {
        if self.try_append(line).is_err() {
            warn!("log append failed");
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Clock, ticker, indicators
// ═══════════════════════════════════════════════════════════════════════════

/// No battery-backed calendar on this board: wall time is the boot
/// epoch plus uptime.
pub struct UptimeClock;

impl WallClock for UptimeClock {
    fn epoch_seconds(&self) -> u64 {
        BOOT_EPOCH + Instant::now().as_secs()
    }
}

/// Software stand-in for a hardware ticker: the main loop checks
/// `attached` and fires the controller tick on the 500 ms grid.
/// `take_rearm` lets the loop restart the grid from "now" after an
/// attach, so splash sequences do not cause a burst of catch-up ticks.
#[derive(Default)]
pub struct SoftTicker {
    attached: bool,
    rearmed: bool,
}

impl SoftTicker {
    pub fn attached(&self) -> bool {
        self.attached
    }

    pub fn take_rearm(&mut self) -> bool {
        core::mem::take(&mut self.rearmed)
    }
}

impl TickerControl for SoftTicker {
    fn attach(&mut self) {
        self.attached = true;
        self.rearmed = true;
    }

    fn detach(&mut self) {
        self.attached = false;
    }
}

/// Two status LEDs, active low on the DK.
pub struct Leds {
    page: Output<'static>,
    feature: Output<'static>,
}

impl Leds {
    pub fn new(page: Output<'static>, feature: Output<'static>) -> Self {
        Self { page, feature }
    }
}

impl Indicators for Leds {
    fn set_page(&mut self, on: bool) {
        if on {
            self.page.set_low();
        } else {
            self.page.set_high();
        }
    }

    fn set_feature(&mut self, on: bool) {
        if on {
            self.feature.set_low();
        } else {
            self.feature.set_high();
        }
    }
}
