//! Wire frames and their decoding into display commands.
//!
//! A frame is 9 bytes: one opcode followed by the eight segment bytes in
//! a, b, c, d, e, f, g, dp order. Segment bytes are booleans by truthiness.

use crate::display::DigitTarget;
use crate::types::{Pattern, SEGMENT_COUNT};

/// Length of a command frame in bytes.
pub const FRAME_LEN: usize = 1 + SEGMENT_COUNT;

/// Recognised opcodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Opcode {
    /// Set the first digit.
    Digit1 = 10,
    /// Set the second digit.
    Digit2 = 20,
    /// Set the third digit.
    Digit3 = 30,
    /// Set the fourth digit.
    Digit4 = 40,
    /// Set every digit to the same pattern.
    All = 50,
}

impl Opcode {
    /// Opcode addressing a single digit, or `None` if the index is off the display.
    pub const fn for_digit(digit: usize) -> Option<Self> {
        match digit {
            0 => Some(Opcode::Digit1),
            1 => Some(Opcode::Digit2),
            2 => Some(Opcode::Digit3),
            3 => Some(Opcode::Digit4),
            _ => None,
        }
    }

    /// Digits this opcode writes to.
    pub const fn target(self) -> DigitTarget {
        match self {
            Opcode::Digit1 => DigitTarget::Single(0),
            Opcode::Digit2 => DigitTarget::Single(1),
            Opcode::Digit3 => DigitTarget::Single(2),
            Opcode::Digit4 => DigitTarget::Single(3),
            Opcode::All => DigitTarget::All,
        }
    }
}

impl TryFrom<u8> for Opcode {
    type Error = u8;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            10 => Ok(Opcode::Digit1),
            20 => Ok(Opcode::Digit2),
            30 => Ok(Opcode::Digit3),
            40 => Ok(Opcode::Digit4),
            50 => Ok(Opcode::All),
            other => Err(other),
        }
    }
}

impl From<Opcode> for u8 {
    fn from(opcode: Opcode) -> Self {
        opcode as u8
    }
}

/// One raw 9-byte command frame.
///
/// The opcode byte is kept raw: frames with unknown opcodes are valid on the
/// wire and simply decode to nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Frame {
    opcode: u8,
    payload: [u8; SEGMENT_COUNT],
}

impl Frame {
    /// Builds a frame from an opcode byte and the eight segment bytes.
    #[inline]
    pub const fn new(opcode: u8, payload: [u8; SEGMENT_COUNT]) -> Self {
        Self { opcode, payload }
    }

    /// Splits raw frame bytes into opcode and payload.
    pub const fn from_bytes(bytes: [u8; FRAME_LEN]) -> Self {
        let mut payload = [0u8; SEGMENT_COUNT];
        let mut i = 0;
        while i < SEGMENT_COUNT {
            payload[i] = bytes[i + 1];
            i += 1;
        }
        Self::new(bytes[0], payload)
    }

    /// Frame that sets one digit to `pattern`, or `None` for an index off the display.
    pub fn for_digit(digit: usize, pattern: &Pattern) -> Option<Self> {
        Opcode::for_digit(digit).map(|opcode| Frame::new(opcode.into(), pattern.to_payload()))
    }

    /// The raw opcode byte.
    #[inline]
    pub const fn opcode(&self) -> u8 {
        self.opcode
    }

    /// The eight segment bytes.
    #[inline]
    pub const fn payload(&self) -> &[u8; SEGMENT_COUNT] {
        &self.payload
    }

    /// The frame as it travels on the wire.
    pub fn to_bytes(&self) -> [u8; FRAME_LEN] {
        let mut bytes = [0u8; FRAME_LEN];
        bytes[0] = self.opcode;
        bytes[1..].copy_from_slice(&self.payload);
        bytes
    }
}

/// A decoded frame: which digits to write and what to show on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayCommand {
    pub target: DigitTarget,
    pub pattern: Pattern,
}

impl DisplayCommand {
    /// Creates command.
    pub fn new(target: DigitTarget, pattern: Pattern) -> Self {
        Self { target, pattern }
    }

    /// Decodes a frame. Unknown opcodes yield `None`.
    pub fn decode(frame: &Frame) -> Option<Self> {
        let opcode = Opcode::try_from(frame.opcode()).ok()?;
        Some(Self::new(opcode.target(), Pattern::from_payload(frame.payload())))
    }
}
