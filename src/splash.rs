//! Boot, shutdown, and page-intro sequences.
//!
//! Every sequence is a series of full-frame blits with fixed delays,
//! played while the ticker is detached. Blocking delays are fine here;
//! nothing else runs during a sequence.

use embassy_time::{block_for, Duration};

use templog::config::{HEIGHT, WIDTH};
use templog::framebuffer::FrameBuffer;
use templog::hw::{DisplayDevice, SplashPlayer};
use templog::pages::{draw_axes, Page};

const FRAME_MS: u64 = 80;
const SLIDE_STEP: i32 = 12;
const DWELL_MS: u64 = 2000;

/// Splash playback over the real panel.
pub struct Sequences;

/// Slide artwork in from the right edge: redraw, offset by a shrinking
/// scroll, flush, wait.
fn slide_in(
    fb: &mut FrameBuffer,
    display: &mut dyn DisplayDevice,
    draw: &dyn Fn(&mut FrameBuffer),
) {
    let mut dx = WIDTH as i32 - SLIDE_STEP;
    while dx > 0 {
        fb.clear();
        draw(fb);
        fb.scroll(dx, 0);
        display.refresh(fb);
        block_for(Duration::from_millis(FRAME_MS));
        dx -= SLIDE_STEP;
    }
    fb.clear();
    draw(fb);
    display.refresh(fb);
}

/// Boot artwork: panel border with a thermometer in the middle.
fn draw_logo(fb: &mut FrameBuffer) {
    for x in 0..WIDTH {
        fb.set_pixel(x, 0, true);
        fb.set_pixel(x, HEIGHT - 1, true);
    }
    for y in 0..HEIGHT {
        fb.set_pixel(0, y, true);
        fb.set_pixel(WIDTH - 1, y, true);
    }

    // Tube
    for y in 8..32 {
        fb.set_pixel(40, y, true);
        fb.set_pixel(44, y, true);
    }
    for x in 40..45 {
        fb.set_pixel(x, 8, true);
    }
    // Mercury
    for y in 18..32 {
        fb.set_pixel(42, y, true);
    }
    // Bulb
    for x in 38..47 {
        fb.set_pixel(x, 32, true);
        fb.set_pixel(x, 39, true);
    }
    for y in 32..40 {
        fb.set_pixel(38, y, true);
        fb.set_pixel(46, y, true);
    }
    for x in 40..45 {
        for y in 34..38 {
            fb.set_pixel(x, y, true);
        }
    }
}

/// Info-page chrome: rules between the three temperature rows and a
/// degree mark next to each of the top two fields.
fn draw_info_chrome(fb: &mut FrameBuffer) {
    for x in 0..WIDTH {
        fb.set_pixel(x, 14, true);
        fb.set_pixel(x, 35, true);
    }
    for (mx, my) in [(34, 5), (34, 16)] {
        fb.set_pixel(mx, my, true);
        fb.set_pixel(mx + 2, my, true);
        fb.set_pixel(mx, my + 2, true);
        fb.set_pixel(mx + 2, my + 2, true);
        fb.set_pixel(mx + 1, my, true);
        fb.set_pixel(mx + 1, my + 2, true);
        fb.set_pixel(mx, my + 1, true);
        fb.set_pixel(mx + 2, my + 1, true);
        fb.set_pixel(mx + 1, my + 1, false);
    }
}

impl SplashPlayer for Sequences {
    fn play_boot(&mut self, fb: &mut FrameBuffer, display: &mut dyn DisplayDevice) {
        slide_in(fb, display, &draw_logo);
        block_for(Duration::from_millis(DWELL_MS));
    }

    fn play_shutdown(&mut self, fb: &mut FrameBuffer, display: &mut dyn DisplayDevice) {
        fb.clear();
        draw_logo(fb);
        display.refresh(fb);
        block_for(Duration::from_millis(DWELL_MS));

        // Drop the artwork off the bottom edge.
        let mut shifted = 0;
        while shifted < HEIGHT as i32 {
            fb.scroll(0, -(SLIDE_STEP / 2));
            display.refresh(fb);
            block_for(Duration::from_millis(FRAME_MS));
            shifted += SLIDE_STEP / 2;
        }
    }

    fn play_intro(&mut self, page: Page, fb: &mut FrameBuffer, display: &mut dyn DisplayDevice) {
        match page {
            Page::Info => slide_in(fb, display, &draw_info_chrome),
            Page::Graph => slide_in(fb, display, &draw_axes),
        }
    }
}
