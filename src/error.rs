//! Error type for the board layer.
//!
//! The core has no error channel at all: geometry clamps, appends are
//! fire-and-forget. The board adapters still name their failures for
//! on-target diagnostics before swallowing them.

use defmt::Format;

#[derive(Debug, Clone, Copy, Format)]
pub enum Error {
    /// I²C transaction to the display failed.
    Display,

    /// Flash append failed or the log region is unusable.
    Storage,
}
