use core::cell::Cell;
use cortex_m::peripheral::{syst::SystClkSource, SYST};
use critical_section::Mutex;
use segment_mux::{TimeDuration, TimeInstant, TimeSource};

/// Milliseconds since [`start`], advanced by [`on_tick`]. Wraps after ~49.7 days.
static UPTIME_MS: Mutex<Cell<u32>> = Mutex::new(Cell::new(0));

/// Programs SysTick to interrupt once per millisecond from the core clock.
pub fn start(syst: &mut SYST, sysclk_hz: u32) -> SysTickClock {
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(sysclk_hz / 1_000 - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();
    SysTickClock { _private: () }
}

/// Call from the SysTick exception handler.
pub fn on_tick() {
    critical_section::with(|cs| {
        let uptime = UPTIME_MS.borrow(cs);
        uptime.set(uptime.get().wrapping_add(1));
    });
}

/// Span of whole milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Millis(pub u64);

impl TimeDuration for Millis {
    const ZERO: Self = Millis(0);

    fn as_millis(&self) -> u64 {
        self.0
    }

    fn from_millis(millis: u64) -> Self {
        Millis(millis)
    }
}

/// Raw uptime reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp(u32);

impl TimeInstant for Stamp {
    type Duration = Millis;

    fn duration_since(&self, earlier: Self) -> Millis {
        Millis(u64::from(self.0.wrapping_sub(earlier.0)))
    }
}

/// Handle to the running SysTick counter. Only [`start`] hands one out.
pub struct SysTickClock {
    _private: (),
}

impl TimeSource<Stamp> for SysTickClock {
    fn now(&self) -> Stamp {
        critical_section::with(|cs| Stamp(UPTIME_MS.borrow(cs).get()))
    }
}
