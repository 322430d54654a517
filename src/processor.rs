//! Serial command processing.
//!
//! Polls the transport once per call and only accepts input when exactly one
//! frame's worth of bytes is pending. Anything else is flushed unread. There
//! is no resynchronisation: a host that splits or merges frames will keep
//! being discarded until its writes line up with a poll again.

use crate::command::{DisplayCommand, FRAME_LEN, Frame};
use crate::display::DisplayState;
use crate::transport::Transport;

/// What a poll found on the transport.
///
/// Purely informational, nothing is reported back to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PollOutcome {
    /// Exactly one frame was pending and has been read.
    Received(Frame),
    /// A byte count other than a full frame was pending and has been dropped.
    Discarded(usize),
    /// Nothing was pending.
    Idle,
}

/// Decodes frames from a [`Transport`] into [`DisplayState`] writes.
///
/// Owns the receive buffer, which keeps the last frame between polls.
#[derive(Debug, Clone, Default)]
pub struct CommandProcessor {
    rx: [u8; FRAME_LEN],
}

impl CommandProcessor {
    /// Creates a processor with a zeroed receive buffer.
    pub const fn new() -> Self {
        Self { rx: [0; FRAME_LEN] }
    }

    /// Polls `transport` once and applies the receive buffer to `state`.
    ///
    /// The buffer is dispatched on every call, so the most recent frame is
    /// re-applied even when nothing new arrived. Applying a frame is
    /// idempotent, so this is invisible unless `state` was changed elsewhere.
    pub fn poll_and_apply<T: Transport>(
        &mut self,
        transport: &mut T,
        state: &mut DisplayState,
    ) -> PollOutcome {
        let pending = transport.available();

        let outcome = if pending == FRAME_LEN {
            for slot in self.rx.iter_mut() {
                // a byte that vanished leaves the previous frame's byte in place
                if let Some(byte) = transport.read_byte() {
                    *slot = byte;
                }
            }
            let frame = self.frame();
            #[cfg(feature = "defmt")]
            defmt::debug!("frame received: opcode {=u8}", frame.opcode());
            PollOutcome::Received(frame)
        } else if pending > 0 {
            #[cfg(feature = "defmt")]
            defmt::warn!("discarding {=usize} pending bytes", pending);
            PollOutcome::Discarded(pending)
        } else {
            PollOutcome::Idle
        };

        transport.discard();
        self.apply(state);

        outcome
    }

    /// Applies the current receive buffer to `state`.
    ///
    /// Returns the decoded command, or `None` if the opcode is not recognised.
    pub fn apply(&self, state: &mut DisplayState) -> Option<DisplayCommand> {
        let command = DisplayCommand::decode(&self.frame())?;
        state.apply(command.target, command.pattern);
        Some(command)
    }

    /// The receive buffer as a frame.
    pub fn frame(&self) -> Frame {
        Frame::from_bytes(self.rx)
    }
}
