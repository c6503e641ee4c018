//! Low-level parallel bus driver.
//!
//! Drives the eight shared data lines, the address latch strobe and the
//! chip-select line. Each strobe is held for a fixed time with a blocking
//! delay.
//!
//! This module is crate-private — consumers interact with [`SidChip`]
//! in `sid_chip.rs` instead.
//!
//! [`SidChip`]: crate::SidChip

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::error::SidError;
use crate::registers::BUS_WIDTH;

/// Pin-level bus driver.
///
/// Owns every bus pin and the delay source. `data[0]` is bus bit 0.
pub(crate) struct ParallelBus<P, D> {
    data: [P; BUS_WIDTH],
    latch: P,
    chip_select: P,
    delay: D,
}

impl<P, D> ParallelBus<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the pins and drive them to the idle state:
    /// latch low, chip-select inactive (high).
    pub fn new(
        data: [P; BUS_WIDTH],
        latch: P,
        chip_select: P,
        delay: D,
    ) -> Result<Self, SidError<P::Error>> {
        let mut bus = Self {
            data,
            latch,
            chip_select,
            delay,
        };
        bus.latch.set_low()?;
        bus.chip_select.set_high()?;
        Ok(bus)
    }

    // -----------------------------------------------------------------------
    // Bus primitives
    // -----------------------------------------------------------------------

    /// Drive `value` onto the data lines, bit 0 first.
    pub fn present(&mut self, value: u8) -> Result<(), SidError<P::Error>> {
        for (bit, pin) in self.data.iter_mut().enumerate() {
            pin.set_state(PinState::from(value & (1 << bit) != 0))?;
        }
        Ok(())
    }

    /// Pulse the address latch high for `hold_us`.
    pub fn strobe_latch(&mut self, hold_us: u32) -> Result<(), SidError<P::Error>> {
        self.latch.set_high()?;
        self.delay.delay_us(hold_us);
        self.latch.set_low()?;
        Ok(())
    }

    /// Pulse chip-select low (active) for `hold_us`.
    pub fn strobe_select(&mut self, hold_us: u32) -> Result<(), SidError<P::Error>> {
        self.chip_select.set_low()?;
        self.delay.delay_us(hold_us);
        self.chip_select.set_high()?;
        Ok(())
    }

    /// Force chip-select inactive.
    pub fn deselect(&mut self) -> Result<(), SidError<P::Error>> {
        self.chip_select.set_high()?;
        Ok(())
    }
}
