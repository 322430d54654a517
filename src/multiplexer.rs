//! Time-division multiplexing of the digit-select lines.
//!
//! Segment lines are shared by every digit, so only one digit may be selected
//! at a time. [`Multiplexer::refresh_cycle`] scans the digits in order, loading
//! each digit's pattern onto the segment lines before selecting it.

use crate::display::DisplayState;
use crate::time::{Hold, TimeDuration};
use crate::types::{DIGIT_COUNT, Level, Polarity, Segment};

/// Trait for abstracting the display's output lines.
///
/// Implement this for your GPIO hardware to let the multiplexer drive it.
/// Handle any hardware errors internally - these methods cannot fail.
pub trait DisplayLines {
    /// Drives one shared segment line.
    fn set_segment(&mut self, segment: Segment, level: Level);

    /// Drives the select line of digit `digit` (0-based).
    fn set_digit(&mut self, digit: usize, level: Level);
}

/// Drives the display lines from a [`DisplayState`].
pub struct Multiplexer<L: DisplayLines> {
    lines: L,
    polarity: Polarity,
}

impl<L: DisplayLines> Multiplexer<L> {
    /// Creates a multiplexer with every digit deselected and every segment unlit.
    pub fn new(lines: L, polarity: Polarity) -> Self {
        let mut multiplexer = Self { lines, polarity };
        multiplexer.blank();
        multiplexer
    }

    /// Runs one full scan: every digit is shown once for `dwell`, digit 0 first.
    ///
    /// Blocks for roughly `DIGIT_COUNT * dwell`.
    pub fn refresh_cycle<D, H>(&mut self, state: &DisplayState, hold: &mut H, dwell: D)
    where
        D: TimeDuration,
        H: Hold<D>,
    {
        for (digit, pattern) in state.patterns().iter().enumerate() {
            for segment in Segment::ALL {
                let level = self.polarity.segment_level(pattern.is_lit(segment));
                self.lines.set_segment(segment, level);
            }

            self.lines.set_digit(digit, self.polarity.digit_level(true));
            hold.hold(dwell);
            self.lines.set_digit(digit, self.polarity.digit_level(false));
        }
    }

    /// Deselects every digit and turns every segment line off.
    pub fn blank(&mut self) {
        for digit in 0..DIGIT_COUNT {
            self.lines.set_digit(digit, self.polarity.digit_level(false));
        }
        for segment in Segment::ALL {
            self.lines.set_segment(segment, self.polarity.segment_level(false));
        }
    }

    /// Returns a reference to the output lines.
    pub fn lines(&self) -> &L {
        &self.lines
    }
}
