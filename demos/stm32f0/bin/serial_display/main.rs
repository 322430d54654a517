#![no_std]
#![no_main]

use cortex_m_rt::entry;
use panic_halt as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f0xx_hal::pac::interrupt;

use segment_mux::{DisplayConfig, DisplayController, Polarity, SpinHold};
use stm32f0_demos::serial::{self, SerialTransport};
use stm32f0_demos::clock::{self, Millis};

mod hardware_setup;

/// Wiring of the display on this board
const POLARITY: Polarity = Polarity::CommonCathode;

/// Host link speed
const BAUD_RATE: u32 = 9600;

/// SysTick interrupt handler - called every 1ms
#[cortex_m_rt::exception]
fn SysTick() {
    clock::on_tick();
}

/// USART1 receive interrupt
#[interrupt]
fn USART1() {
    serial::on_receive();
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== 4-Digit Serial Display ===");

    let config = DisplayConfig::<Millis>::default()
        .with_polarity(POLARITY)
        .with_baud_rate(BAUD_RATE);

    let hw = hardware_setup::init_hardware(config.baud_rate);

    let mut controller = DisplayController::new(
        hw.lines,
        SerialTransport::new(),
        SpinHold::new(&hw.clock),
        config,
    );

    rprintln!(
        "=== System Ready === ({:?}, {} ms per digit)",
        POLARITY,
        config.dwell.0
    );

    controller.run()
}
