//! Sampling pipeline: median filter, unit conversion, rolling
//! aggregation, extremum tracking, and the tick cadence counter.
//!
//! Everything here is fixed-size and allocated once; the filter scratch
//! array lives on the stack of the tick that uses it.

use crate::config::{
    AVG_SPAN, AXIS_MARK_EVERY, COUNTER_WRAP, FILTER_LEN, MAX_SENTINEL, MIN_SENTINEL,
    REFERENCE_VOLTAGE, SENSOR_SCALE, WINDOW_SLOTS,
};
use crate::hw::AnalogSource;

/// Take `FILTER_LEN` raw readings and return their median.
///
/// Rejects transient spikes without the smoothing bias of a mean.
/// Runs once per tick, so the sort cost is irrelevant at this size.
pub fn filtered_read(adc: &mut dyn AnalogSource) -> f32 {
    let mut buf = [0.0f32; FILTER_LEN];
    for slot in buf.iter_mut() {
        *slot = adc.read();
    }
    buf.sort_unstable_by(|a, b| a.partial_cmp(b).unwrap_or(core::cmp::Ordering::Equal));
    buf[FILTER_LEN / 2]
}

/// Normalized sensor voltage to degrees Celsius.
pub fn to_celsius(normalized: f32) -> f32 {
    normalized * REFERENCE_VOLTAGE * SENSOR_SCALE
}

/// Celsius to Fahrenheit.
pub fn to_fahrenheit(celsius: f32) -> f32 {
    celsius * 1.8 + 32.0
}

/// Fixed ring of one-second readings feeding a 60-sample moving average.
///
/// The ring keeps one slot more than the average span so the value
/// falling out of the window is still at hand; the sum is maintained
/// incrementally on each push.
pub struct SampleWindow {
    ring: [f32; WINDOW_SLOTS],
    head: usize,
    sum: f32,
}

impl Default for SampleWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleWindow {
    pub const fn new() -> Self {
        Self {
            ring: [0.0; WINDOW_SLOTS],
            head: 0,
            sum: 0.0,
        }
    }

    /// Append one one-second reading, dropping the oldest.
    pub fn push_second(&mut self, value: f32) {
        self.ring[self.head] = value;
        self.head = (self.head + 1) % WINDOW_SLOTS;
        // The slot now under head was written AVG_SPAN pushes ago and
        // just left the averaging window.
        self.sum += value - self.ring[self.head];
    }

    /// Average over the most recent `AVG_SPAN` pushes. Slots that have
    /// never been written count as zero, matching a cold start.
    pub fn minute_average(&self) -> f32 {
        self.sum / AVG_SPAN as f32
    }
}

/// Running (min, max) pair, valid only while its feature is enabled.
///
/// While disabled, the sentinel pair is re-asserted on every call, not
/// just at the disable transition, so re-enabling re-arms from the next
/// sample.
pub struct Extremum {
    pub min: i32,
    pub max: i32,
}

impl Default for Extremum {
    fn default() -> Self {
        Self::new()
    }
}

impl Extremum {
    pub const fn new() -> Self {
        Self {
            min: MIN_SENTINEL,
            max: MAX_SENTINEL,
        }
    }

    pub fn update(&mut self, celsius: i32, enabled: bool) {
        if enabled {
            if celsius > self.max {
                self.max = celsius;
            }
            if celsius < self.min {
                self.min = celsius;
            }
        } else {
            self.min = MIN_SENTINEL;
            self.max = MAX_SENTINEL;
        }
    }
}

/// Cyclic tick counter in [1, COUNTER_WRAP] governing cadence.
///
/// Even counts mark one-second aggregation steps; the wrap point marks
/// the one-minute average/log step.
pub struct SampleCounter(u32);

impl Default for SampleCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl SampleCounter {
    pub const fn new() -> Self {
        Self(1)
    }

    pub fn reset(&mut self) {
        self.0 = 1;
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// One-second boundary: every second tick.
    pub fn at_second(&self) -> bool {
        self.0 % 2 == 0
    }

    /// One-minute boundary: the wrap tick.
    pub fn at_minute(&self) -> bool {
        self.0 == COUNTER_WRAP
    }

    /// Graph x-axis tick-mark cadence.
    pub fn at_axis_mark(&self) -> bool {
        self.0 % AXIS_MARK_EVERY == 0
    }

    /// Advance after the tick's cadence checks; wraps to 1 at the
    /// minute boundary regardless of whether anything was logged.
    pub fn advance(&mut self) {
        if self.0 == COUNTER_WRAP {
            self.0 = 1;
        } else {
            self.0 += 1;
        }
    }
}

/// The aggregation state a powered-on device carries between ticks.
pub struct SamplingPipeline {
    pub window: SampleWindow,
    pub extremum: Extremum,
    pub counter: SampleCounter,
}

impl Default for SamplingPipeline {
    fn default() -> Self {
        Self::new()
    }
}

impl SamplingPipeline {
    pub const fn new() -> Self {
        Self {
            window: SampleWindow::new(),
            extremum: Extremum::new(),
            counter: SampleCounter::new(),
        }
    }
}
