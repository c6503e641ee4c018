//! Multiplexer output sampled by the RP2350 ADC.

use embassy_rp::adc::{self, Adc, Channel};

use sidguts_panel::AnalogSource;

/// The ADC converts to 12 bits; the controller works in 10.
const ADC_SHIFT: u16 = 2;

pub struct AdcInput {
    adc: Adc<'static, adc::Blocking>,
    channel: Channel<'static>,
}

impl AdcInput {
    pub fn new(adc: Adc<'static, adc::Blocking>, channel: Channel<'static>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogSource for AdcInput {
    type Error = adc::Error;

    fn read(&mut self) -> Result<u16, Self::Error> {
        Ok(self.adc.blocking_read(&mut self.channel)? >> ADC_SHIFT)
    }
}
