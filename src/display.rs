//! Display state shared between the multiplexer and the command processor.

use crate::types::{DIGIT_COUNT, DisplayError, Pattern, Segment};

/// Which digits a command writes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DigitTarget {
    /// One digit, by index.
    Single(usize),
    /// Every digit on the display.
    All,
}

impl DigitTarget {
    /// Whether `digit` is covered by this target.
    #[inline]
    pub fn includes(&self, digit: usize) -> bool {
        match self {
            DigitTarget::Single(d) => *d == digit,
            DigitTarget::All => digit < DIGIT_COUNT,
        }
    }
}

/// The segment grid: one [`Pattern`] per digit.
///
/// Starts fully unlit. Its dimensions never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    digits: [Pattern; DIGIT_COUNT],
}

impl DisplayState {
    /// Creates a blank display state.
    pub const fn new() -> Self {
        Self {
            digits: [Pattern::BLANK; DIGIT_COUNT],
        }
    }

    /// Writes `pattern` to every digit covered by `target`.
    ///
    /// Out-of-range single targets are ignored.
    pub fn apply(&mut self, target: DigitTarget, pattern: Pattern) {
        for (digit, slot) in self.digits.iter_mut().enumerate() {
            if target.includes(digit) {
                *slot = pattern;
            }
        }
    }

    /// Returns the pattern of one digit.
    pub fn pattern(&self, digit: usize) -> Result<Pattern, DisplayError> {
        self.digits
            .get(digit)
            .copied()
            .ok_or(DisplayError::DigitOutOfRange {
                digit,
                count: DIGIT_COUNT,
            })
    }

    /// Replaces the pattern of one digit.
    pub fn set_pattern(&mut self, digit: usize, pattern: Pattern) -> Result<(), DisplayError> {
        let slot = self
            .digits
            .get_mut(digit)
            .ok_or(DisplayError::DigitOutOfRange {
                digit,
                count: DIGIT_COUNT,
            })?;
        *slot = pattern;
        Ok(())
    }

    /// Whether `segment` of `digit` is lit. Out-of-range digits read as unlit.
    pub fn is_lit(&self, digit: usize, segment: Segment) -> bool {
        self.digits
            .get(digit)
            .is_some_and(|pattern| pattern.is_lit(segment))
    }

    /// Turns every segment of every digit off.
    pub fn clear(&mut self) {
        self.digits = [Pattern::BLANK; DIGIT_COUNT];
    }

    /// All digit patterns, digit 0 first.
    #[inline]
    pub fn patterns(&self) -> &[Pattern; DIGIT_COUNT] {
        &self.digits
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_blank() {
        let state = DisplayState::new();
        assert!(state.patterns().iter().all(|p| *p == Pattern::BLANK));
    }

    #[test]
    fn single_target_writes_one_digit() {
        let mut state = DisplayState::new();
        state.apply(DigitTarget::Single(2), Pattern::FULL);

        assert_eq!(state.pattern(2), Ok(Pattern::FULL));
        assert_eq!(state.pattern(0), Ok(Pattern::BLANK));
        assert_eq!(state.pattern(1), Ok(Pattern::BLANK));
        assert_eq!(state.pattern(3), Ok(Pattern::BLANK));
    }

    #[test]
    fn out_of_range_single_target_is_ignored() {
        let mut state = DisplayState::new();
        state.apply(DigitTarget::Single(DIGIT_COUNT), Pattern::FULL);
        assert_eq!(state, DisplayState::new());
    }

    #[test]
    fn target_coverage() {
        assert!((0..DIGIT_COUNT).all(|d| DigitTarget::All.includes(d)));
        assert!(!DigitTarget::All.includes(DIGIT_COUNT));
        assert!(DigitTarget::Single(1).includes(1));
        assert!(!DigitTarget::Single(1).includes(2));
    }

    #[test]
    fn accessors_reject_out_of_range_digit() {
        let mut state = DisplayState::new();
        let err = DisplayError::DigitOutOfRange { digit: 4, count: 4 };
        assert_eq!(state.pattern(4), Err(err));
        assert_eq!(state.set_pattern(4, Pattern::FULL), Err(err));
        assert!(!state.is_lit(4, Segment::A));
    }
}
