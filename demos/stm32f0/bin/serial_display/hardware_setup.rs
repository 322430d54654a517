use rtt_target::rprintln;
use stm32f0xx_hal::{
    gpio::{Output, Pin, PushPull},
    pac,
    prelude::*,
    serial::Serial,
};

use stm32f0_demos::clock::{self, SysTickClock};
use stm32f0_demos::display_lines::GpioDisplayLines;
use stm32f0_demos::serial;

/// Type-erased push-pull output used for every display line
pub type LinePin = Pin<Output<PushPull>>;

/// Display lines type used by this board
pub type BoardLines = GpioDisplayLines<LinePin>;

/// Container for all initialized hardware peripherals
pub struct HardwareContext {
    pub lines: BoardLines,
    pub clock: SysTickClock,
}

/// Initialize all hardware peripherals
///
/// - System clock configuration
/// - SysTick timer setup (1ms interrupts)
/// - Display GPIO lines
/// - USART1 at `baud_rate` with receive interrupt
///
/// Pin assignment:
/// - Digit select 1-4: PB12, PB13, PB14, PB15
/// - Segments a, b, c, d, e, f, g, dp: PC0 - PC7
/// - USART1: TX PA9, RX PA10
pub fn init_hardware(baud_rate: u32) -> HardwareContext {
    let mut dp = pac::Peripherals::take().unwrap();
    let mut cp = cortex_m::Peripherals::take().unwrap();

    let mut rcc = configure_clock(&mut dp.FLASH, dp.RCC);
    let clock = clock::start(&mut cp.SYST, rcc.clocks.sysclk().0);
    rprintln!("SysTick configured for 1ms interrupts");

    let gpioa = dp.GPIOA.split(&mut rcc);
    let gpiob = dp.GPIOB.split(&mut rcc);
    let gpioc = dp.GPIOC.split(&mut rcc);

    let lines = cortex_m::interrupt::free(|cs| {
        let digits = [
            gpiob.pb12.into_push_pull_output(cs).downgrade(),
            gpiob.pb13.into_push_pull_output(cs).downgrade(),
            gpiob.pb14.into_push_pull_output(cs).downgrade(),
            gpiob.pb15.into_push_pull_output(cs).downgrade(),
        ];
        let segments = [
            gpioc.pc0.into_push_pull_output(cs).downgrade(),
            gpioc.pc1.into_push_pull_output(cs).downgrade(),
            gpioc.pc2.into_push_pull_output(cs).downgrade(),
            gpioc.pc3.into_push_pull_output(cs).downgrade(),
            gpioc.pc4.into_push_pull_output(cs).downgrade(),
            gpioc.pc5.into_push_pull_output(cs).downgrade(),
            gpioc.pc6.into_push_pull_output(cs).downgrade(),
            gpioc.pc7.into_push_pull_output(cs).downgrade(),
        ];
        GpioDisplayLines::new(digits, segments)
    });
    rprintln!("Display lines configured (digits PB12-PB15, segments PC0-PC7)");

    let (tx, rx) = cortex_m::interrupt::free(|cs| {
        (gpioa.pa9.into_alternate_af1(cs), gpioa.pa10.into_alternate_af1(cs))
    });
    let mut usart = Serial::usart1(dp.USART1, (tx, rx), baud_rate.bps(), &mut rcc);
    usart.listen(stm32f0xx_hal::serial::Event::Rxne);
    let (_tx, rx) = usart.split();
    serial::install(rx);

    // SAFETY: the receiver is installed before the interrupt can fire
    unsafe { cortex_m::peripheral::NVIC::unmask(pac::Interrupt::USART1) };
    rprintln!("USART1 configured at {} baud", baud_rate);

    HardwareContext { lines, clock }
}

/// Configure the system clock to run at maximum speed
fn configure_clock(flash: &mut pac::FLASH, rcc: pac::RCC) -> stm32f0xx_hal::rcc::Rcc {
    let rcc = rcc.configure().freeze(flash);

    let sysclk_freq = rcc.clocks.sysclk();
    rprintln!("System clock configured: {} Hz", sysclk_freq.0);

    rcc
}
