use embedded_hal::digital::v2::OutputPin;
use segment_mux::{DIGIT_COUNT, DisplayLines, Level, SEGMENT_COUNT, Segment};

/// Display lines wired straight to GPIO push-pull outputs
///
/// Segments are shared by all digits; each digit has its own select pin.
/// Polarity is applied by the multiplexer, so this type only writes levels.
pub struct GpioDisplayLines<P: OutputPin> {
    digits: [P; DIGIT_COUNT],
    segments: [P; SEGMENT_COUNT],
}

impl<P: OutputPin> GpioDisplayLines<P> {
    /// Create display lines from digit select pins (digit 0 first) and
    /// segment pins in a, b, c, d, e, f, g, dp order
    pub fn new(digits: [P; DIGIT_COUNT], segments: [P; SEGMENT_COUNT]) -> Self {
        Self { digits, segments }
    }

    fn drive(pin: &mut P, level: Level) {
        // GPIO writes on this chip are infallible
        let _ = match level {
            Level::High => pin.set_high(),
            Level::Low => pin.set_low(),
        };
    }
}

impl<P: OutputPin> DisplayLines for GpioDisplayLines<P> {
    fn set_segment(&mut self, segment: Segment, level: Level) {
        Self::drive(&mut self.segments[segment.index()], level);
    }

    fn set_digit(&mut self, digit: usize, level: Level) {
        if let Some(pin) = self.digits.get_mut(digit) {
            Self::drive(pin, level);
        }
    }
}
