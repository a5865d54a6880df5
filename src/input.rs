//! Edge-driven button classifier.
//!
//! Two momentary buttons share one classifier. The GPIO edge handlers
//! feed it timestamped rising/falling events; the main loop pulls the
//! classified state with [`InputClassifier::read_and_clear`].
//!
//! Debounce is a single shared window: an edge inside `DEBOUNCE_MS` of
//! the previous accepted-or-not edge is not evaluated, but still resets
//! the timers. A release at or past `HOLD_MS` after its press classifies
//! as `Hold`, otherwise `Pressed`.
//!
//! If more than one button reads high during a rising-edge evaluation,
//! the active slot is cleared and the matching release classifies
//! nothing. Simultaneous presses are a defined non-event, not an error.

use crate::config::{DEBOUNCE_MS, HOLD_MS, NUM_BUTTONS};

/// Classified button state, pulled exactly once by the main loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyState {
    Idle,
    Pressed,
    Hold,
}

/// Per-button press/hold classifier fed from edge interrupts.
pub struct InputClassifier {
    states: [KeyState; NUM_BUTTONS],
    /// Index of the button whose press is being timed, or `None` after
    /// an ambiguous (multi-button) rising edge.
    active: Option<usize>,
    /// Timestamp of the last edge event (accepted or not).
    last_edge_ms: u64,
    /// Timestamp the current press started.
    press_start_ms: u64,
}

impl Default for InputClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl InputClassifier {
    pub const fn new() -> Self {
        Self {
            states: [KeyState::Idle; NUM_BUTTONS],
            active: None,
            last_edge_ms: 0,
            press_start_ms: 0,
        }
    }

    /// Rising-edge handler (interrupt context).
    ///
    /// `levels` is a snapshot of every button's raw digital level taken
    /// at the edge. Outside the debounce window the handler selects the
    /// active button: exactly one high level arms the slot, zero or
    /// several clear it. The hold and debounce timers restart either way.
    pub fn on_rising_edge(&mut self, now_ms: u64, levels: [bool; NUM_BUTTONS]) {
        if now_ms.saturating_sub(self.last_edge_ms) >= DEBOUNCE_MS {
            let mut high = levels.iter().enumerate().filter(|(_, &l)| l);
            self.active = match (high.next(), high.next()) {
                (Some((i, _)), None) => Some(i),
                _ => None,
            };
        }
        self.press_start_ms = now_ms;
        self.last_edge_ms = now_ms;
    }

    /// Falling-edge handler (interrupt context).
    ///
    /// Outside the debounce window, a non-empty slot classifies the
    /// elapsed press as `Hold` or `Pressed`. The slot is not cleared
    /// here; the next rising edge overwrites it.
    pub fn on_falling_edge(&mut self, now_ms: u64) {
        if now_ms.saturating_sub(self.last_edge_ms) >= DEBOUNCE_MS {
            if let Some(i) = self.active {
                self.states[i] = if now_ms.saturating_sub(self.press_start_ms) >= HOLD_MS {
                    KeyState::Hold
                } else {
                    KeyState::Pressed
                };
            }
        }
        self.last_edge_ms = now_ms;
    }

    /// Pull the classified state for button `i`, resetting it to Idle.
    ///
    /// States are overwritten, never queued: a button that is not read
    /// holds only its latest classification.
    pub fn read_and_clear(&mut self, i: usize) -> KeyState {
        if i >= NUM_BUTTONS {
            return KeyState::Idle;
        }
        core::mem::replace(&mut self.states[i], KeyState::Idle)
    }
}
