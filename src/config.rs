//! Application-wide constants and compile-time configuration.
//!
//! All panel geometry, timing parameters, sensor constants, and the
//! log-record format live here so they can be tuned in one place.

// Panel geometry

/// Panel width in pixel columns.
pub const WIDTH: usize = 84;

/// Number of byte-banks per column; each bank packs 8 vertical pixels.
pub const BANKS: usize = 6;

/// Logical pixel height of the panel.
pub const HEIGHT: usize = BANKS * 8;

/// Display contrast applied at power-on (0.0 to 1.0).
pub const DISPLAY_CONTRAST: f32 = 0.4;

// Buttons

/// Number of physical buttons (primary = page/power, secondary = feature).
pub const NUM_BUTTONS: usize = 2;

/// Index of the primary button (page switch / power hold).
pub const KEY_PRIMARY: usize = 0;

/// Index of the secondary button (feature toggle).
pub const KEY_SECONDARY: usize = 1;

/// Minimum time between accepted edge events (ms).
/// If one press registers several times, increase; if presses get
/// swallowed, decrease.
pub const DEBOUNCE_MS: u64 = 20;

/// Press duration at or above which a release classifies as Hold (ms).
pub const HOLD_MS: u64 = 1000;

// Sampling cadence

/// Periodic page-update tick (ms).
pub const TICK_MS: u64 = 500;

/// Number of raw readings per median filter pass.
pub const FILTER_LEN: usize = 31;

/// ADC reference voltage (volts).
pub const REFERENCE_VOLTAGE: f32 = 3.3;

/// Sensor transfer function folded into one constant: 10 mV/degC.
pub const SENSOR_SCALE: f32 = 100.0;

/// Ring slots in the moving-average window (one spare beyond the span).
pub const WINDOW_SLOTS: usize = 61;

/// Number of one-second samples averaged into the minute value.
pub const AVG_SPAN: usize = 60;

/// Sample counter wrap point: 120 ticks at 500 ms = one minute.
pub const COUNTER_WRAP: u32 = 120;

/// Ticks between x-axis tick marks on the graph page (10 ticks = 5 s).
pub const AXIS_MARK_EVERY: u32 = 10;

// Extremum tracker sentinels (re-asserted continuously while disabled)

/// Sentinel for the running minimum, above any expected reading.
pub const MIN_SENTINEL: i32 = 40;

/// Sentinel for the running maximum, below any expected reading.
pub const MAX_SENTINEL: i32 = 0;

// Graph page

/// Highest plottable temperature; samples above it are clamped.
pub const GRAPH_CEILING: f32 = 45.0;

/// Pixel row of the graph baseline (value 0 plots here).
pub const GRAPH_BASELINE_Y: usize = 45;

// Data log

/// CSV header row, written once at startup.
pub const LOG_HEADER: &str = "Date,Week,Time,Temperature\n";

/// Wall-clock seed at boot: 2020-01-01 00:00:00 UTC.
/// The board has no battery-backed calendar, so log timestamps are
/// boot epoch + uptime.
pub const BOOT_EPOCH: u64 = 1_577_836_800;

// GPIO pin assignments (nRF52840-DK defaults)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your custom PCB.
//
//   Button PRIMARY   → P0.11
//   Button SECONDARY → P0.12
//   Sensor (SAADC)   → P0.02 / AIN0
//   I²C SDA          → P0.26
//   I²C SCL          → P0.27
//   Page LED         → P0.06
//   Feature LED      → P0.07

// Data-log storage

/// Flash page index where the log region starts (4 KB per page on nRF52840).
pub const LOG_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for the log region.
pub const LOG_FLASH_PAGE_COUNT: u32 = 8;
