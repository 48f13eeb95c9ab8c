#![no_std]
#![no_main]

use cortex_m::delay::Delay;
use fugit::RateExtU32;
use panic_halt as _;
use rp_pico::entry;
use rp_pico::hal::{
    Clock, Sio, Timer,
    clocks::init_clocks_and_plls,
    gpio::FunctionUart,
    pac,
    pio::PIOExt,
    uart::{DataBits, StopBits, UartConfig, UartPeripheral},
    watchdog::Watchdog,
};
use rtt_target::{rprintln, rtt_init_print};
use ws2812_pio::Ws2812Direct;

use rp_pico_doorbell::serial::NbSerial;
use rp_pico_doorbell::strip::SmartStrip;
use rp_pico_doorbell::time::HardwareTimer;

use mirror_doorbell::{DoorbellConfig, Runner, TOTAL_LEDS};

pub const BAUD_RATE: u32 = 115_200;

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("=== RP Pico Mirror Doorbell ===");
    rprintln!("Starting initialization...");

    // Get peripherals
    let mut pac = pac::Peripherals::take().unwrap();
    let core = pac::CorePeripherals::take().unwrap();

    // Set up watchdog driver
    let mut watchdog = Watchdog::new(pac.WATCHDOG);

    // Configure clocks (125 MHz)
    let clocks = init_clocks_and_plls(
        rp_pico::XOSC_CRYSTAL_FREQ,
        pac.XOSC,
        pac.CLOCKS,
        pac.PLL_SYS,
        pac.PLL_USB,
        &mut pac.RESETS,
        &mut watchdog,
    )
    .ok()
    .unwrap();

    rprintln!(
        "System clock configured: {} Hz",
        clocks.system_clock.freq().to_Hz()
    );

    let sio = Sio::new(pac.SIO);
    let pins = rp_pico::Pins::new(
        pac.IO_BANK0,
        pac.PADS_BANK0,
        sio.gpio_bank0,
        &mut pac.RESETS,
    );

    // RGBW strip on GPIO0: mirror ring first, button ring chained after it
    let (mut pio, sm0, _, _, _) = pac.PIO0.split(&mut pac.RESETS);
    let ws2812 = Ws2812Direct::<_, _, _, ws2812_pio::Rgbw>::new(
        pins.gpio0.into_function(),
        &mut pio,
        sm0,
        clocks.peripheral_clock.freq(),
    );
    let strip = SmartStrip::new(ws2812);
    rprintln!("Strip configured on GPIO0 ({} LEDs)", TOTAL_LEDS);

    // Button to ground on GPIO1, heartbeat on the onboard LED
    let button = pins.gpio1.into_pull_up_input();
    let heartbeat = pins.led.into_push_pull_output();

    // Host link on UART0 (GPIO16 TX, GPIO17 RX)
    let uart_pins = (
        pins.gpio16.into_function::<FunctionUart>(),
        pins.gpio17.into_function::<FunctionUart>(),
    );
    let uart = UartPeripheral::new(pac.UART0, uart_pins, &mut pac.RESETS)
        .enable(
            UartConfig::new(BAUD_RATE.Hz(), DataBits::Eight, None, StopBits::One),
            clocks.peripheral_clock.freq(),
        )
        .unwrap();
    let serial = NbSerial::new(uart);
    rprintln!("UART0 configured at {} baud", BAUD_RATE);

    let timer = Timer::new(pac.TIMER, &mut pac.RESETS, &clocks);
    let time_source = HardwareTimer::new(timer);
    let delay = Delay::new(core.SYST, clocks.system_clock.freq().to_Hz());

    rprintln!("=== Hardware Ready ===");

    let config = DoorbellConfig::default();
    rprintln!(
        "{} fps, ring {} ms, notify {} ms",
        config.frame_rate(),
        config.ring_duration_ms(),
        config.notify_duration_ms()
    );

    Runner::new(
        config,
        &time_source,
        strip,
        button,
        heartbeat,
        serial,
        delay,
    )
    .run()
}
