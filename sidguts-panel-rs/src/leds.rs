//! Status LEDs behind an 8-bit serial-in shift register.
//!
//! The low byte of a [`LedMask`] is clocked in most significant bit first
//! while the register's enable line is low; raising enable transfers it to
//! the outputs. Bit 8 (the SYNC indicator) has its own pin.

use embedded_hal::digital::{OutputPin, PinState};

use sidguts::control::{LedMask, StatusLeds};

use crate::error::PanelError;

/// Driver for the LED shift register and the discrete SYNC line.
pub struct ShiftRegisterLeds<P> {
    data: P,
    clock: P,
    enable: P,
    sync: P,
}

impl<P> ShiftRegisterLeds<P>
where
    P: OutputPin,
{
    pub fn new(data: P, clock: P, enable: P, sync: P) -> Self {
        Self {
            data,
            clock,
            enable,
            sync,
        }
    }

    /// Light exactly the indicators in `mask`.
    pub fn show(&mut self, mask: LedMask) -> Result<(), PanelError<P::Error>> {
        self.sync.set_state(PinState::from(mask.sync()))?;

        self.enable.set_low()?;
        self.shift_out(mask.shift_byte())?;
        self.enable.set_high()?;
        Ok(())
    }

    fn shift_out(&mut self, byte: u8) -> Result<(), PanelError<P::Error>> {
        for bit in (0..8).rev() {
            self.data.set_state(PinState::from(byte & (1 << bit) != 0))?;
            self.clock.set_high()?;
            self.clock.set_low()?;
        }
        Ok(())
    }
}

impl<P> StatusLeds for ShiftRegisterLeds<P>
where
    P: OutputPin,
{
    type Error = PanelError<P::Error>;

    fn show(&mut self, mask: LedMask) -> Result<(), Self::Error> {
        ShiftRegisterLeds::show(self, mask)
    }
}
