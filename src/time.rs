//! Time abstraction traits for platform-agnostic timing.

/// Trait for abstracting time sources.
pub trait TimeSource<I: TimeInstant> {
    /// Returns the current time instant.
    fn now(&self) -> I;
}

/// Trait abstraction for duration types.
pub trait TimeDuration: Copy + PartialEq {
    /// Zero duration constant.
    const ZERO: Self;

    /// Converts duration to milliseconds.
    fn as_millis(&self) -> u64;

    /// Creates duration from milliseconds.
    fn from_millis(millis: u64) -> Self;
}

/// Trait abstraction for instant types.
pub trait TimeInstant: Copy {
    /// Duration type for this instant.
    type Duration: TimeDuration;

    /// Calculates duration since an earlier instant.
    fn duration_since(&self, earlier: Self) -> Self::Duration;
}

/// Blocks the caller for a requested duration.
///
/// The multiplexer holds each digit active through this trait, so tests can
/// record requested dwell times instead of waiting on a real clock.
pub trait Hold<D: TimeDuration> {
    /// Returns once `duration` has elapsed.
    fn hold(&mut self, duration: D);
}

/// Busy-wait [`Hold`] driven by a [`TimeSource`].
///
/// Spins on `now()` until the requested duration has elapsed. There is no
/// cancellation path.
pub struct SpinHold<'t, I: TimeInstant, T: TimeSource<I>> {
    time_source: &'t T,
    _instant: core::marker::PhantomData<I>,
}

impl<'t, I: TimeInstant, T: TimeSource<I>> SpinHold<'t, I, T> {
    /// Creates a spinning hold over the given time source.
    pub fn new(time_source: &'t T) -> Self {
        Self {
            time_source,
            _instant: core::marker::PhantomData,
        }
    }
}

impl<I: TimeInstant, T: TimeSource<I>> Hold<I::Duration> for SpinHold<'_, I, T> {
    fn hold(&mut self, duration: I::Duration) {
        let target = duration.as_millis();
        if target == 0 {
            return;
        }

        let start = self.time_source.now();
        while self.time_source.now().duration_since(start).as_millis() < target {
            core::hint::spin_loop();
        }
    }
}
