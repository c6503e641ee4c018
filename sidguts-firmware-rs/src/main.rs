//! sidguts-firmware
//!
//! SID GUTS front-panel controller firmware for the Raspberry Pi Pico 2.
//! Wires the three library crates into the 50 Hz control loop:
//!
//! 1. The multiplexer samples the switches, pots and CV jacks.
//! 2. The controller derives the voice configuration and writes changed
//!    registers to the sound chip over the parallel bus.
//! 3. Settings are saved to flash while a switch is held.
//! 4. The status LEDs are refreshed.
//!
//! Every driver is blocking, so a tick runs start to finish before the
//! ticker is awaited again.

#![no_std]
#![no_main]

mod analog;
mod flash_store;

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::adc::{self, Adc, Channel};
use embassy_rp::block::ImageDef;
use embassy_rp::flash::{Blocking, Flash};
use embassy_rp::gpio::{Level, Output, Pull};
use embassy_rp::pwm::{self, Pwm};
use embassy_time::{Delay, Duration, Ticker, Timer};
use {defmt_rtt as _, panic_probe as _};

use sid_bus_driver::SidChip;
use sidguts::control::{ControlConfig, Controller, Hardware};
use sidguts_panel::{Multiplexer, MultiplexerConfig, ShiftRegisterLeds};

use crate::analog::AdcInput;
use crate::flash_store::FLASH_SIZE;

// ---------------------------------------------------------------------------
// Boot block
// ---------------------------------------------------------------------------

/// Tell the RP2350 Boot ROM about our application.
#[link_section = ".start_block"]
#[used]
pub static IMAGE_DEF: ImageDef = embassy_rp::block::ImageDef::secure_exe();

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// PWM wrap value for a 1 MHz chip clock from the 150 MHz system clock.
const SID_CLOCK_TOP: u16 = 149;

/// Time the chip needs after power-up before it accepts writes.
const CHIP_STARTUP_MS: u64 = 2000;

// ---------------------------------------------------------------------------
// Main
// ---------------------------------------------------------------------------

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    let p = embassy_rp::init(Default::default());
    info!("sidguts-firmware starting");

    // —— Pin assignments ————————————————————————————————————————————————————
    // BUS_D0..D7   → GP0..GP7    chip data bus, bit 0 first
    // BUS_LATCH    → GP8         address latch strobe, active high
    // BUS_CS       → GP9         chip select, active low
    // MUX_A..D     → GP10..GP13  multiplexer select, A = LSB
    // LED_DATA     → GP14
    // LED_CLOCK    → GP15
    // SID_CLOCK    → GP16        PWM0 A, 1 MHz
    // LED_ENABLE   → GP17
    // LED_SYNC     → GP18
    // MUX_OUT      → GP26        ADC0
    // ———————————————————————————————————————————————————————————————————————

    // The chip has no oscillator of its own. Bound for the whole of main,
    // which never returns, so the clock keeps running.
    let mut clock_config = pwm::Config::default();
    clock_config.top = SID_CLOCK_TOP;
    clock_config.compare_a = (SID_CLOCK_TOP + 1) / 2;
    let _sid_clock = Pwm::new_output_a(p.PWM_SLICE0, p.PIN_16, clock_config);

    let data = [
        Output::new(p.PIN_0, Level::Low),
        Output::new(p.PIN_1, Level::Low),
        Output::new(p.PIN_2, Level::Low),
        Output::new(p.PIN_3, Level::Low),
        Output::new(p.PIN_4, Level::Low),
        Output::new(p.PIN_5, Level::Low),
        Output::new(p.PIN_6, Level::Low),
        Output::new(p.PIN_7, Level::Low),
    ];
    let latch = Output::new(p.PIN_8, Level::Low);
    let chip_select = Output::new(p.PIN_9, Level::High);
    let mut chip = unwrap!(SidChip::new(data, latch, chip_select, Delay));

    let select = [
        Output::new(p.PIN_10, Level::Low),
        Output::new(p.PIN_11, Level::Low),
        Output::new(p.PIN_12, Level::Low),
        Output::new(p.PIN_13, Level::Low),
    ];
    let adc = Adc::new_blocking(p.ADC, adc::Config::default());
    let mux_out = Channel::new_pin(p.PIN_26, Pull::None);
    let inputs = Multiplexer::new(
        select,
        AdcInput::new(adc, mux_out),
        Delay,
        MultiplexerConfig::default(),
    );

    let leds = ShiftRegisterLeds::new(
        Output::new(p.PIN_14, Level::Low),
        Output::new(p.PIN_15, Level::Low),
        Output::new(p.PIN_17, Level::High),
        Output::new(p.PIN_18, Level::Low),
    );

    let flash = Flash::<_, Blocking, FLASH_SIZE>::new_blocking(p.FLASH);
    let store = unwrap!(flash_store::open(flash));

    // —— Chip initialisation ———————————————————————————————————————————————

    Timer::after_millis(CHIP_STARTUP_MS).await;

    if let Err(e) = chip.reset() {
        error!("Chip reset failed: {}", e);
    }

    let mut hw = Hardware::new(chip, inputs, store, leds);

    let config = ControlConfig::default();
    let mut controller = match Controller::load(config, &mut hw.store) {
        Ok(controller) => controller,
        Err(e) => {
            warn!("Could not load settings ({}); using defaults", e);
            Controller::new(config)
        }
    };

    if let Err(e) = controller.power_on(&mut hw) {
        error!("Chip power-on sequence failed: {}", e);
    }

    // —— Control loop ——————————————————————————————————————————————————————

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_period_ms()));
    info!("Control loop running every {} ms", config.tick_period_ms());

    loop {
        if let Err(e) = controller.tick(&mut hw) {
            error!("Control tick failed: {}", e);
        }
        ticker.next().await;
    }
}
