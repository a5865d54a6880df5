//! Packed monochrome frame buffer with a column scroll engine.
//!
//! The buffer is laid out column-major: WIDTH columns of BANKS bytes,
//! each bank byte packing 8 vertically stacked pixels (bit 0 = topmost
//! pixel of the bank). This matches the panel controller's native RAM
//! layout, so `refresh()` on the display side is a straight copy.
//!
//! Scrolling shifts content by whole columns horizontally and by pixel
//! rows vertically. The vertical shift runs each column through a `u64`
//! scratch accumulator (BANKS * 8 = 48 bits), giving well-defined,
//! platform-independent shift semantics with zero fill.

use crate::config::{BANKS, HEIGHT, WIDTH};

/// The owned pixel raster the core draws into.
///
/// Read only by the display collaborator at refresh time.
#[derive(Clone)]
pub struct FrameBuffer {
    columns: [[u8; BANKS]; WIDTH],
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameBuffer {
    /// Create a cleared buffer.
    pub const fn new() -> Self {
        Self {
            columns: [[0; BANKS]; WIDTH],
        }
    }

    /// Clear every pixel.
    pub fn clear(&mut self) {
        self.columns = [[0; BANKS]; WIDTH];
    }

    /// Set or clear one pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, on: bool) {
        if x >= WIDTH || y >= HEIGHT {
            return;
        }
        let bank = y / 8;
        let bit = 1u8 << (y % 8);
        if on {
            self.columns[x][bank] |= bit;
        } else {
            self.columns[x][bank] &= !bit;
        }
    }

    /// Read one pixel. Out-of-range coordinates read as off.
    pub fn get_pixel(&self, x: usize, y: usize) -> bool {
        if x >= WIDTH || y >= HEIGHT {
            return false;
        }
        self.columns[x][y / 8] & (1 << (y % 8)) != 0
    }

    /// Overwrite the whole buffer from a bank-major bitmap:
    /// bank 0 of columns 0..WIDTH first, then bank 1, and so on.
    pub fn load_image(&mut self, bitmap: &[u8; WIDTH * BANKS]) {
        for bank in 0..BANKS {
            let row = bank * WIDTH;
            for x in 0..WIDTH {
                self.columns[x][bank] = bitmap[row + x];
            }
        }
    }

    /// Translate buffer content by `dx` whole columns and `dy` pixel rows.
    ///
    /// `dx > 0` moves content toward higher column indices, `dy > 0`
    /// toward bank 0 (up). Columns whose source would fall outside the
    /// buffer are zeroed; the caller redraws them, as the live-graph
    /// path does. Offsets larger than the buffer on either axis clamp
    /// to 0 for that axis.
    pub fn scroll(&mut self, dx: i32, dy: i32) {
        let dx = if dx.unsigned_abs() as usize > WIDTH { 0 } else { dx };
        let dy = if dy.unsigned_abs() as usize > HEIGHT { 0 } else { dy };

        let mut shifted = [[0u8; BANKS]; WIDTH];
        for dest in 0..WIDTH as i32 {
            let src = dest - dx;
            if src < 0 || src >= WIDTH as i32 {
                continue;
            }
            let mut acc: u64 = 0;
            for (bank, &byte) in self.columns[src as usize].iter().enumerate() {
                acc |= (byte as u64) << (8 * bank);
            }
            if dy >= 0 {
                acc >>= dy as u32;
            } else {
                acc <<= dy.unsigned_abs();
            }
            for (bank, byte) in shifted[dest as usize].iter_mut().enumerate() {
                *byte = (acc >> (8 * bank)) as u8;
            }
        }
        self.columns = shifted;
    }

    /// Blit a fixed glyph at (x, y).
    ///
    /// `rows` holds one byte per sprite row with the leftmost pixel in
    /// the highest of the `w` used bits. Both set and cleared pixels are
    /// written, so redrawing a glyph cell never smears the old digit.
    /// `w` is capped at 8 bits per row.
    pub fn draw_sprite(&mut self, x: usize, y: usize, w: usize, h: usize, rows: &[u8]) {
        let w = w.min(8);
        for (row, &bits) in rows.iter().enumerate().take(h) {
            for col in 0..w {
                let on = (bits >> (w - 1 - col)) & 1 != 0;
                self.set_pixel(x + col, y + row, on);
            }
        }
    }

    /// One packed column, for display adapters that copy bank bytes out.
    pub fn column(&self, x: usize) -> &[u8; BANKS] {
        &self.columns[x]
    }
}
