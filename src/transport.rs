//! Byte transport abstraction for the serial command link.

use heapless::Deque;

/// Trait for abstracting the serial receive path.
///
/// Implement this over your UART driver's receive buffer. All methods are
/// non-blocking.
pub trait Transport {
    /// Number of bytes currently waiting to be read.
    fn available(&self) -> usize;

    /// Takes the oldest pending byte, or `None` if nothing is pending.
    fn read_byte(&mut self) -> Option<u8>;

    /// Drops every pending byte.
    fn discard(&mut self);
}

/// In-memory [`Transport`] holding up to `N` pending bytes.
///
/// Bytes pushed past capacity are lost, like a hardware receive buffer
/// overrunning. Useful for simulation and tests.
#[derive(Debug, Default)]
pub struct LoopbackTransport<const N: usize> {
    pending: Deque<u8, N>,
}

impl<const N: usize> LoopbackTransport<N> {
    /// Creates an empty transport.
    pub const fn new() -> Self {
        Self {
            pending: Deque::new(),
        }
    }

    /// Queues one incoming byte. Returns `false` if the buffer was full.
    pub fn push(&mut self, byte: u8) -> bool {
        self.pending.push_back(byte).is_ok()
    }

    /// Queues incoming bytes in order and returns how many were accepted.
    pub fn extend(&mut self, bytes: &[u8]) -> usize {
        bytes.iter().take_while(|byte| self.push(**byte)).count()
    }

    /// Whether no bytes are pending.
    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<const N: usize> Transport for LoopbackTransport<N> {
    fn available(&self) -> usize {
        self.pending.len()
    }

    fn read_byte(&mut self) -> Option<u8> {
        self.pending.pop_front()
    }

    fn discard(&mut self) {
        self.pending.clear();
    }
}
