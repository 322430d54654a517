#![cfg_attr(not(feature = "std"), no_std)]
#![doc = include_str!("../README.md")]

//! # Core Concepts
//!
//! - **`DisplayState`**: The 4×8 grid of lit/unlit segments, one `Pattern` per digit
//! - **`Pattern`**: The eight segment states (a..g, dp) of a single digit
//! - **`Multiplexer`**: Scans the digits one at a time, each held for the dwell time
//! - **`CommandProcessor`**: Reads 9-byte frames from a transport and applies them
//! - **`DisplayController`**: Owns all of the above and runs the scan/poll loop
//! - **`DisplayLines`**: Trait to implement for your GPIO hardware
//! - **`Transport`**: Trait to implement for your serial receive path
//! - **`Hold`** / **`TimeSource`**: Traits to implement for your timing system
//!
//! Frames are `[opcode, a, b, c, d, e, f, g, dp]`. Opcodes 10, 20, 30 and 40
//! write digits 1-4, opcode 50 writes every digit, anything else is ignored.
//! Nothing is ever sent back to the host.

pub mod command;
pub mod config;
pub mod controller;
pub mod display;
pub mod multiplexer;
pub mod processor;
pub mod time;
pub mod transport;
pub mod types;

pub use command::{DisplayCommand, FRAME_LEN, Frame, Opcode};
pub use config::{DEFAULT_BAUD_RATE, DEFAULT_DWELL_MS, DisplayConfig};
pub use controller::DisplayController;
pub use display::{DigitTarget, DisplayState};
pub use multiplexer::{DisplayLines, Multiplexer};
pub use processor::{CommandProcessor, PollOutcome};
pub use time::{Hold, SpinHold, TimeDuration, TimeInstant, TimeSource};
pub use transport::{LoopbackTransport, Transport};
pub use types::{DIGIT_COUNT, DisplayError, Level, Pattern, Polarity, SEGMENT_COUNT, Segment};
