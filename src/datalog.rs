//! Data-log record formatting and cadence.
//!
//! One CSV header at startup, then one record per minute while logging
//! is enabled:
//!
//! ```text
//! Date,Week,Time,Temperature
//! 2020-01-01,Wed,00:01:00,23.50
//! ```
//!
//! The board has no calendar RTC, so the wall clock is epoch seconds
//! (boot seed + uptime) converted to a civil date here. Appends are
//! fire-and-forget; a full or failing store silently stops logging.

use core::fmt::Write;

use crate::hw::{LogSink, WallClock};

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// A log line: date, weekday, time, and a value with 2 decimals fit in
/// well under this.
const RECORD_CAP: usize = 48;

/// Civil date from a day count relative to 1970-01-01.
///
/// Days-from-civil inverse, valid for the full u64 second range we can
/// ever see on this device.
fn civil_from_days(days: u64) -> (u32, u32, u32) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = if m <= 2 { y + 1 } else { y };
    (y as u32, m as u32, d as u32)
}

/// Format one record for `epoch` seconds and a temperature value.
fn format_record(epoch: u64, celsius: f32) -> heapless::String<RECORD_CAP> {
    let days = epoch / 86_400;
    let secs = epoch % 86_400;
    let (year, month, day) = civil_from_days(days);
    // 1970-01-01 was a Thursday.
    let weekday = WEEKDAYS[((days + 4) % 7) as usize];

    let mut line: heapless::String<RECORD_CAP> = heapless::String::new();
    let _ = write!(
        line,
        "{:04}-{:02}-{:02},{},{:02}:{:02}:{:02},{:.2}\n",
        year,
        month,
        day,
        weekday,
        secs / 3600,
        (secs % 3600) / 60,
        secs % 60,
        celsius
    );
    line
}

/// Write the CSV header row. Called once at startup.
pub fn write_header(sink: &mut dyn LogSink) {
    sink.append(crate::config::LOG_HEADER);
}

/// Append one timestamped record if logging is enabled.
///
/// The caller invokes this on the minute boundary; the counter wrap is
/// its responsibility and happens whether or not a record was written.
pub fn maybe_log(sink: &mut dyn LogSink, clock: &dyn WallClock, celsius: f32, enabled: bool) {
    if !enabled {
        return;
    }
    let line = format_record(clock.epoch_seconds(), celsius);
    sink.append(line.as_str());
}
