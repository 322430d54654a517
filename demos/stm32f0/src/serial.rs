use core::cell::RefCell;
use critical_section::Mutex;
use embedded_hal::serial::Read;
use heapless::Deque;
use segment_mux::Transport;
use stm32f0xx_hal::{pac::USART1, serial::Rx};

/// Size of the software receive buffer, matching a typical UART driver's 64-byte ring
pub const RX_BUFFER_SIZE: usize = 64;

/// Bytes received by the USART1 interrupt and not yet consumed
static RX_BUFFER: Mutex<RefCell<Deque<u8, RX_BUFFER_SIZE>>> =
    Mutex::new(RefCell::new(Deque::new()));

/// Receiver half of USART1, owned by the interrupt handler
static RX: Mutex<RefCell<Option<Rx<USART1>>>> = Mutex::new(RefCell::new(None));

/// Hands the receiver to the interrupt handler.
///
/// Call once during setup, before unmasking the USART1 interrupt.
pub fn install(rx: Rx<USART1>) {
    critical_section::with(|cs| {
        RX.borrow_ref_mut(cs).replace(rx);
    });
}

/// Drains the USART receive register into the software buffer.
///
/// Call from the USART1 interrupt handler. Bytes arriving while the buffer
/// is full are dropped.
pub fn on_receive() {
    critical_section::with(|cs| {
        if let Some(rx) = RX.borrow_ref_mut(cs).as_mut() {
            let mut buffer = RX_BUFFER.borrow_ref_mut(cs);
            while let Ok(byte) = rx.read() {
                let _ = buffer.push_back(byte);
            }
        }
    });
}

/// [`Transport`] over the interrupt-filled receive buffer
pub struct SerialTransport;

impl SerialTransport {
    pub fn new() -> Self {
        Self
    }
}

impl Transport for SerialTransport {
    fn available(&self) -> usize {
        critical_section::with(|cs| RX_BUFFER.borrow_ref(cs).len())
    }

    fn read_byte(&mut self) -> Option<u8> {
        critical_section::with(|cs| RX_BUFFER.borrow_ref_mut(cs).pop_front())
    }

    fn discard(&mut self) {
        critical_section::with(|cs| RX_BUFFER.borrow_ref_mut(cs).clear());
    }
}
