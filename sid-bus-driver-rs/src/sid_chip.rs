//! High-level interface for the sound chip's register bus.
//!
//! [`SidChip`] wraps the pin-level bus driver with address validation and
//! the latch-then-select write sequence.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use sidguts::control::ChipBus;

use crate::driver::ParallelBus;
use crate::error::SidError;
use crate::registers::{BUS_HOLD_US, BUS_WIDTH, MAX_ADDRESS, RESET_HOLD_US, RESET_INACTIVE};

/// Register-level access to a SID-family chip.
///
/// # Example
///
/// ```ignore
/// use sid_bus_driver::SidChip;
///
/// let mut chip = SidChip::new(data_pins, latch, chip_select, delay)?;
/// chip.write_register(4, 0x41)?; // voice 1: pulse, gate on
/// ```
pub struct SidChip<P, D> {
    bus: ParallelBus<P, D>,
}

impl<P, D> SidChip<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    /// Take ownership of the bus pins and park them idle.
    ///
    /// # Arguments
    /// * `data` — data lines, bus bit 0 first
    /// * `latch` — address latch strobe (active high)
    /// * `chip_select` — chip-select (active low)
    /// * `delay` — blocking delay used for every hold time
    pub fn new(
        data: [P; BUS_WIDTH],
        latch: P,
        chip_select: P,
        delay: D,
    ) -> Result<Self, SidError<P::Error>> {
        Ok(Self {
            bus: ParallelBus::new(data, latch, chip_select, delay)?,
        })
    }

    /// Write `data` to register `address`.
    ///
    /// 1. With chip-select inactive, latch `address | 0x20` (reset held off).
    /// 2. Present `data` and pulse chip-select low.
    ///
    /// Both strobes are held for [`BUS_HOLD_US`].
    ///
    /// # Errors
    /// * [`SidError::InvalidRegister`] if `address > 0x1F`; no pin is touched
    /// * [`SidError::Pin`] if a pin fails; the write is not retried
    pub fn write_register(&mut self, address: u8, data: u8) -> Result<(), SidError<P::Error>> {
        if address > MAX_ADDRESS {
            return Err(SidError::InvalidRegister(address));
        }

        self.bus.deselect()?;
        self.bus.present(address | RESET_INACTIVE)?;
        self.bus.strobe_latch(BUS_HOLD_US)?;

        self.bus.present(data)?;
        self.bus.strobe_select(BUS_HOLD_US)?;

        Ok(())
    }

    /// Pulse the chip's reset line through the address latch.
    ///
    /// Every register reads zero afterwards.
    pub fn reset(&mut self) -> Result<(), SidError<P::Error>> {
        self.bus.deselect()?;
        self.bus.present(0)?;
        self.bus.strobe_latch(RESET_HOLD_US)?;
        self.bus.present(RESET_INACTIVE)?;
        self.bus.strobe_latch(BUS_HOLD_US)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("sound chip reset");

        Ok(())
    }
}

impl<P, D> ChipBus for SidChip<P, D>
where
    P: OutputPin,
    D: DelayNs,
{
    type Error = SidError<P::Error>;

    fn write_register(&mut self, address: u8, data: u8) -> Result<(), Self::Error> {
        SidChip::write_register(self, address, data)
    }
}
