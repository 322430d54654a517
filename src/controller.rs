//! Top-level owner of the display state and its two drivers.
//!
//! Provides [`DisplayController`], which owns the [`DisplayState`], the
//! [`Multiplexer`], the [`CommandProcessor`], the transport and the hold
//! capability. Each [`step`](DisplayController::step) runs one full scan and
//! then one poll, so the two components never touch the state at the same time.

use crate::config::DisplayConfig;
use crate::display::DisplayState;
use crate::multiplexer::{DisplayLines, Multiplexer};
use crate::processor::{CommandProcessor, PollOutcome};
use crate::time::{Hold, TimeDuration};
use crate::transport::Transport;

/// Runs the multiplex/poll loop for one display.
///
/// # Type Parameters
/// * `L` - Output line implementation
/// * `T` - Serial transport implementation
/// * `H` - Hold implementation used for the per-digit dwell
/// * `D` - Duration type
pub struct DisplayController<L, T, H, D>
where
    L: DisplayLines,
    T: Transport,
    H: Hold<D>,
    D: TimeDuration,
{
    state: DisplayState,
    multiplexer: Multiplexer<L>,
    processor: CommandProcessor,
    transport: T,
    hold: H,
    config: DisplayConfig<D>,
}

impl<L, T, H, D> DisplayController<L, T, H, D>
where
    L: DisplayLines,
    T: Transport,
    H: Hold<D>,
    D: TimeDuration,
{
    /// Creates a controller with a blank display and all lines released.
    pub fn new(lines: L, transport: T, hold: H, config: DisplayConfig<D>) -> Self {
        Self {
            state: DisplayState::new(),
            multiplexer: Multiplexer::new(lines, config.polarity),
            processor: CommandProcessor::new(),
            transport,
            hold,
            config,
        }
    }

    /// One loop iteration: a full refresh cycle, then one poll of the transport.
    pub fn step(&mut self) -> PollOutcome {
        self.multiplexer
            .refresh_cycle(&self.state, &mut self.hold, self.config.dwell);
        self.processor
            .poll_and_apply(&mut self.transport, &mut self.state)
    }

    /// Loops [`step`](Self::step) forever.
    pub fn run(&mut self) -> ! {
        loop {
            self.step();
        }
    }

    /// Returns the current display state.
    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    /// Returns a reference to the output lines.
    pub fn lines(&self) -> &L {
        self.multiplexer.lines()
    }

    /// Returns a mutable reference to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Returns a reference to the hold implementation.
    pub fn hold(&self) -> &H {
        &self.hold
    }
}
