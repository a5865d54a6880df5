//! Collaborator traits at the hardware boundary.
//!
//! The core never talks to a peripheral directly; everything physical
//! sits behind one of these traits. The embedded binary implements them
//! over Embassy drivers, host tests implement them over plain structs.
//!
//! None of the methods return errors: out-of-range inputs clamp, failed
//! appends vanish. Single-shot best-effort is the contract (the log can
//! silently stop working; that is a property of the device, not a bug).

use crate::framebuffer::FrameBuffer;
use crate::pages::Page;

/// The pixel panel. `refresh` is the only point of contact between the
/// core's raster and the physical device.
pub trait DisplayDevice {
    fn init(&mut self);
    /// Contrast in 0.0 to 1.0; values outside are clamped by the driver.
    fn set_contrast(&mut self, contrast: f32);
    /// Blank the physical panel.
    fn clear(&mut self);
    /// Flush the owned raster to the panel.
    fn refresh(&mut self, fb: &FrameBuffer);
    fn turn_off(&mut self);
}

/// Analog sensor input: one conversion, normalized to [0, 1].
///
/// No filtering happens at this boundary; the sampling pipeline owns
/// that. Implementations include the inter-sample settling delay.
pub trait AnalogSource {
    fn read(&mut self) -> f32;
}

/// Append-only text log. Failures are unchecked and unsurfaced.
pub trait LogSink {
    fn append(&mut self, line: &str);
}

/// Wall-clock time as seconds since the Unix epoch.
pub trait WallClock {
    fn epoch_seconds(&self) -> u64;
}

/// Boot / shutdown / page-intro sequence playback.
///
/// Pure sequential blits with fixed delays. The caller guarantees the
/// ticker is detached for the whole sequence, so nothing else touches
/// the buffer while a sequence plays.
pub trait SplashPlayer {
    fn play_boot(&mut self, fb: &mut FrameBuffer, display: &mut dyn DisplayDevice);
    fn play_shutdown(&mut self, fb: &mut FrameBuffer, display: &mut dyn DisplayDevice);
    fn play_intro(&mut self, page: Page, fb: &mut FrameBuffer, display: &mut dyn DisplayDevice);
}

/// The periodic page-update timer. Only ever attached or fully
/// detached, never paused and resumed.
pub trait TickerControl {
    fn attach(&mut self);
    fn detach(&mut self);
}

/// Boolean status outputs: current-page indicator and secondary-feature
/// indicator.
pub trait Indicators {
    fn set_page(&mut self, on: bool);
    fn set_feature(&mut self, on: bool);
}

/// Everything the controller needs per call, bundled so its signatures
/// stay flat.
pub struct Peripherals<'a> {
    pub display: &'a mut dyn DisplayDevice,
    pub adc: &'a mut dyn AnalogSource,
    pub log: &'a mut dyn LogSink,
    pub clock: &'a dyn WallClock,
    pub splash: &'a mut dyn SplashPlayer,
    pub ticker: &'a mut dyn TickerControl,
    pub indicators: &'a mut dyn Indicators,
}
