//! Build-time display configuration.

use crate::time::TimeDuration;
use crate::types::Polarity;

/// Default time each digit stays selected during a scan.
///
/// Four digits at 5 ms give a ~20 ms cycle, about 50 Hz.
pub const DEFAULT_DWELL_MS: u64 = 5;

/// Default serial link speed in bits per second.
pub const DEFAULT_BAUD_RATE: u32 = 9600;

/// Display and link settings, fixed for the lifetime of the firmware.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplayConfig<D: TimeDuration> {
    /// Wiring of the display.
    pub polarity: Polarity,
    /// Time each digit stays selected per scan.
    pub dwell: D,
    /// Serial baud rate expected from the host.
    pub baud_rate: u32,
}

impl<D: TimeDuration> DisplayConfig<D> {
    /// Sets the polarity.
    #[must_use]
    pub fn with_polarity(mut self, polarity: Polarity) -> Self {
        self.polarity = polarity;
        self
    }

    /// Sets the per-digit dwell time.
    #[must_use]
    pub fn with_dwell(mut self, dwell: D) -> Self {
        self.dwell = dwell;
        self
    }

    /// Sets the baud rate.
    #[must_use]
    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    /// Expected duration of one full scan.
    pub fn cycle_time(&self) -> D {
        D::from_millis(self.dwell.as_millis() * crate::types::DIGIT_COUNT as u64)
    }
}

impl<D: TimeDuration> Default for DisplayConfig<D> {
    fn default() -> Self {
        Self {
            polarity: Polarity::CommonCathode,
            dwell: D::from_millis(DEFAULT_DWELL_MS),
            baud_rate: DEFAULT_BAUD_RATE,
        }
    }
}
