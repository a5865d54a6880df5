//! Top-level device state machine.
//!
//! The main loop calls [`Controller::poll`] with the freshly pulled
//! button states each pass; the 500 ms ticker calls
//! [`Controller::tick`] while attached. Animation sequences run with
//! the ticker detached, so the frame buffer has exactly one writer at
//! any time.
//!
//! State chart:
//!
//! ```text
//!   Off --Hold(primary)--> On.Info <--Pressed(primary)--> On.Graph
//!   On.* --Hold(primary)--> Off
//!   On.* --Pressed(secondary)--> toggle secondary feature
//! ```

use crate::config::{DISPLAY_CONTRAST, GRAPH_CEILING};
use crate::datalog;
use crate::framebuffer::FrameBuffer;
use crate::hw::Peripherals;
use crate::input::KeyState;
use crate::pages::{self, Page};
use crate::sampling::{filtered_read, to_celsius, to_fahrenheit, SamplingPipeline};

/// Process-wide device state, reset to defaults on every power-on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceState {
    pub power: bool,
    pub page: Page,
    pub secondary: bool,
}

impl DeviceState {
    const fn defaults() -> Self {
        Self {
            power: false,
            page: Page::Info,
            secondary: false,
        }
    }
}

/// Owns the frame buffer, the sampling pipeline, and the page/power
/// state; drives everything through the collaborator bundle.
pub struct Controller {
    state: DeviceState,
    fb: FrameBuffer,
    pipeline: SamplingPipeline,
    graph_cursor: usize,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

impl Controller {
    pub const fn new() -> Self {
        Self {
            state: DeviceState::defaults(),
            fb: FrameBuffer::new(),
            pipeline: SamplingPipeline::new(),
            graph_cursor: 0,
        }
    }

    pub fn state(&self) -> &DeviceState {
        &self.state
    }

    pub fn framebuffer(&self) -> &FrameBuffer {
        &self.fb
    }

    pub fn graph_cursor(&self) -> usize {
        self.graph_cursor
    }

    pub fn pipeline(&self) -> &SamplingPipeline {
        &self.pipeline
    }

    /// One main-loop pass over the pulled button states.
    pub fn poll(&mut self, primary: KeyState, secondary: KeyState, p: &mut Peripherals) {
        if primary == KeyState::Hold {
            if self.state.power {
                self.power_off(p);
            } else {
                self.power_on(p);
            }
        }

        if !self.state.power {
            return;
        }

        if primary == KeyState::Pressed {
            self.switch_page(p);
        }
        if secondary == KeyState::Pressed {
            self.state.secondary = !self.state.secondary;
            p.indicators.set_feature(self.state.secondary);
        }
    }

    /// One 500 ms page update: sample, render, advance cadence, flush.
    pub fn tick(&mut self, p: &mut Peripherals) {
        if !self.state.power {
            return;
        }

        let celsius = to_celsius(filtered_read(p.adc));

        match self.state.page {
            Page::Info => {
                if self.pipeline.counter.at_second() {
                    self.pipeline.window.push_second(celsius);
                }
                self.pipeline
                    .extremum
                    .update(celsius as i32, self.state.secondary);
                let minute_avg = if self.pipeline.counter.at_minute() {
                    Some(self.pipeline.window.minute_average() as i32)
                } else {
                    None
                };
                pages::render_info(
                    &mut self.fb,
                    celsius as i32,
                    to_fahrenheit(celsius) as i32,
                    &self.pipeline.extremum,
                    self.state.secondary,
                    minute_avg,
                );
            }
            Page::Graph => {
                let clamped = celsius.min(GRAPH_CEILING);
                pages::render_graph(
                    &mut self.fb,
                    &mut self.graph_cursor,
                    clamped as i32,
                    self.pipeline.counter.at_axis_mark(),
                );
                if self.pipeline.counter.at_minute() {
                    datalog::maybe_log(p.log, p.clock, clamped, self.state.secondary);
                }
            }
        }

        self.pipeline.counter.advance();
        p.display.refresh(&self.fb);
    }

    /// Power-on transition: reset to defaults, bring the display up,
    /// play the boot sequence with the ticker detached, render one
    /// frame, then attach the ticker.
    fn power_on(&mut self, p: &mut Peripherals) {
        self.state = DeviceState {
            power: true,
            ..DeviceState::defaults()
        };
        self.pipeline.counter.reset();
        self.graph_cursor = 0;
        p.indicators.set_page(false);
        p.indicators.set_feature(false);

        p.display.init();
        p.display.set_contrast(DISPLAY_CONTRAST);
        self.fb.clear();
        p.display.clear();
        p.splash.play_boot(&mut self.fb, p.display);
        self.tick(p);
        p.ticker.attach();
    }

    /// Power-off transition: indicators off, ticker detached, shutdown
    /// sequence, panel off.
    fn power_off(&mut self, p: &mut Peripherals) {
        self.state.power = false;
        p.indicators.set_page(false);
        p.indicators.set_feature(false);
        p.ticker.detach();
        self.fb.clear();
        p.splash.play_shutdown(&mut self.fb, p.display);
        p.display.turn_off();
    }

    /// Info/Graph toggle: reset cadence and cursor, drop the secondary
    /// feature, replay the page intro with the ticker detached.
    fn switch_page(&mut self, p: &mut Peripherals) {
        self.state.page = self.state.page.next();
        self.state.secondary = false;
        self.pipeline.counter.reset();
        self.graph_cursor = 0;
        p.indicators.set_page(self.state.page == Page::Graph);
        p.indicators.set_feature(false);

        p.ticker.detach();
        self.fb.clear();
        p.splash.play_intro(self.state.page, &mut self.fb, p.display);
        if self.state.page == Page::Info {
            self.tick(p);
        }
        p.ticker.attach();
    }
}
