//! The two display pages and their render routines.
//!
//! Pages draw into the owned frame buffer only; the controller flushes
//! once per tick. Digit fields are drawn sprite-over-sprite without
//! clearing the buffer, so every glyph cell is rewritten in full each
//! tick (the blitter writes cleared pixels too).
//!
//! Pixel coordinates are the fixed layout of the 84x48 panel art; they
//! are not derived from anything.

use crate::config::{GRAPH_BASELINE_Y, WIDTH};
use crate::framebuffer::FrameBuffer;
use crate::glyphs::{DIGITS_5X7, DIGITS_7X7};
use crate::sampling::Extremum;

/// The closed page set. Primary-button presses cycle through it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    Info,
    Graph,
}

impl Page {
    pub fn next(self) -> Self {
        match self {
            Page::Info => Page::Graph,
            Page::Graph => Page::Info,
        }
    }
}

/// Draw one 7x7 digit; out-of-range values draw nothing.
fn draw_digit(fb: &mut FrameBuffer, x: usize, y: usize, digit: i32) {
    if (0..10).contains(&digit) {
        fb.draw_sprite(x, y, 7, 7, &DIGITS_7X7[digit as usize]);
    }
}

/// Two-digit temperature field. Values outside 0..=99 leave the field
/// untouched rather than rendering garbage.
fn show_temp(fb: &mut FrameBuffer, x: usize, y: usize, temp: i32) {
    if (0..100).contains(&temp) {
        draw_digit(fb, x, y, temp / 10);
        draw_digit(fb, x + 8, y, temp % 10);
    }
}

/// Render the temperature-information page.
///
/// Celsius large at top, Fahrenheit as three digits below, the minute
/// average (only redrawn on its emit tick), and the min/max pair, which
/// reads 0 / 0 while the extremum feature is off.
pub fn render_info(
    fb: &mut FrameBuffer,
    celsius: i32,
    fahrenheit: i32,
    extremum: &Extremum,
    feature_on: bool,
    minute_avg: Option<i32>,
) {
    show_temp(fb, 17, 5, celsius);

    draw_digit(fb, 9, 16, fahrenheit / 100);
    draw_digit(fb, 17, 16, (fahrenheit % 100) / 10);
    draw_digit(fb, 25, 16, fahrenheit % 10);

    if let Some(avg) = minute_avg {
        show_temp(fb, 51, 16, avg);
    }

    if feature_on {
        show_temp(fb, 11, 38, extremum.max);
        show_temp(fb, 51, 38, extremum.min);
    } else {
        show_temp(fb, 11, 38, 0);
        show_temp(fb, 51, 38, 0);
    }
}

/// Draw the static graph frame: y-axis with two labelled gridline
/// points, and the x-axis baseline. Used for the page intro and for the
/// axis redraw after each scroll.
pub fn draw_axes(fb: &mut FrameBuffer) {
    for y in 0..GRAPH_BASELINE_Y {
        fb.set_pixel(0, y, true);
    }
    fb.set_pixel(1, 6, true);
    fb.set_pixel(1, 26, true);
    fb.draw_sprite(3, 4, 5, 7, &DIGITS_5X7[1]);
    fb.draw_sprite(3, 24, 5, 7, &DIGITS_5X7[0]);
    for x in 0..WIDTH {
        fb.set_pixel(x, GRAPH_BASELINE_Y, true);
    }
}

/// Render one live-graph sample.
///
/// While the first screenful is filling, the cursor advances one column
/// per tick. Once full, the buffer scrolls left one column instead and
/// the sample lands in the rightmost column; the axis decorations the
/// scroll displaced are redrawn. `axis_mark` drops a tick mark on the
/// baseline every ten samples.
pub fn render_graph(fb: &mut FrameBuffer, cursor: &mut usize, value: i32, axis_mark: bool) {
    let plot_y = (GRAPH_BASELINE_Y as i32 - value).max(0) as usize;

    if *cursor < WIDTH {
        fb.set_pixel(*cursor, plot_y, true);
        *cursor += 1;
        return;
    }

    fb.scroll(-1, 0);

    // The scroll dragged the gridline labels left; blank their headroom
    // before redrawing the axis.
    for y in 0..5 {
        fb.set_pixel(1, 4 + y, false);
        fb.set_pixel(2, 4 + y, false);
        fb.set_pixel(1, 24 + y, false);
        fb.set_pixel(2, 24 + y, false);
    }
    for y in 0..GRAPH_BASELINE_Y {
        fb.set_pixel(0, y, true);
    }
    fb.set_pixel(1, 6, true);
    fb.set_pixel(1, 26, true);
    fb.draw_sprite(3, 4, 5, 7, &DIGITS_5X7[1]);
    fb.draw_sprite(3, 24, 5, 7, &DIGITS_5X7[0]);

    // Complete the baseline in the vacated column, then plot.
    fb.set_pixel(WIDTH - 1, GRAPH_BASELINE_Y, true);
    fb.set_pixel(WIDTH - 1, plot_y, true);
    if axis_mark {
        fb.set_pixel(WIDTH - 1, GRAPH_BASELINE_Y - 1, true);
    }
}
