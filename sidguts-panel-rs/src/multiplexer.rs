//! Sixteen-way analog input multiplexer.
//!
//! Contains [`MultiplexerConfig`] and the [`Multiplexer`] driver. Four
//! select lines pick one input; its voltage is then sampled through a
//! single [`AnalogSource`].

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use sidguts::control::InputPanel;

use crate::error::PanelError;

/// Number of multiplexed inputs.
pub const CHANNEL_COUNT: u8 = 16;

/// Largest reading reported by [`Multiplexer::read_analog`].
const SAMPLE_MAX: u16 = 1023;

// ── AnalogSource ─────────────────────────────────────────────────────────

/// One-shot conversion of the multiplexer's common output.
///
/// `embedded-hal` 1.0 has no ADC trait; the firmware adapts its ADC
/// channel to this. Implementations return a 10-bit reading.
pub trait AnalogSource {
    type Error;

    fn read(&mut self) -> Result<u16, Self::Error>;
}

// ── MultiplexerConfig ────────────────────────────────────────────────────

/// Multiplexer timing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MultiplexerConfig {
    /// Wait after changing channel before sampling, in µs. Default: 500.
    pub settle_us: u32,
}

impl Default for MultiplexerConfig {
    fn default() -> Self {
        Self { settle_us: 500 }
    }
}

// ── Multiplexer ──────────────────────────────────────────────────────────

/// Driver for a 4-bit-select analog multiplexer.
///
/// `select[0]` is select line A, the least significant channel bit.
pub struct Multiplexer<P, A, D> {
    select: [P; 4],
    source: A,
    delay: D,
    config: MultiplexerConfig,
}

impl<P, A, D> Multiplexer<P, A, D>
where
    P: OutputPin,
    A: AnalogSource,
    D: DelayNs,
{
    pub fn new(select: [P; 4], source: A, delay: D, config: MultiplexerConfig) -> Self {
        Self {
            select,
            source,
            delay,
            config,
        }
    }

    /// Drive the select lines for `channel` and wait for the output to settle.
    ///
    /// # Errors
    /// * [`PanelError::InvalidChannel`] if `channel >= 16`; no pin is touched
    /// * [`PanelError::Pin`] on a select line failure
    pub fn select_channel(&mut self, channel: u8) -> Result<(), PanelError<P::Error>> {
        if channel >= CHANNEL_COUNT {
            return Err(PanelError::InvalidChannel(channel));
        }
        for (bit, pin) in self.select.iter_mut().enumerate() {
            pin.set_state(PinState::from(channel & (1 << bit) != 0))?;
        }
        self.delay.delay_us(self.config.settle_us);
        Ok(())
    }

    /// Select `channel` and return its 10-bit reading.
    pub fn read_analog(&mut self, channel: u8) -> Result<u16, PanelError<P::Error>> {
        self.select_channel(channel)?;
        let raw = self.source.read().map_err(|_| PanelError::Adc)?;
        Ok(raw.min(SAMPLE_MAX))
    }

    /// Select `channel` and report whether it reads above the switch threshold.
    pub fn read_digital(&mut self, channel: u8) -> Result<bool, PanelError<P::Error>> {
        Ok(self.read_analog(channel)? > sidguts::control::DIGITAL_THRESHOLD)
    }
}

impl<P, A, D> InputPanel for Multiplexer<P, A, D>
where
    P: OutputPin,
    A: AnalogSource,
    D: DelayNs,
{
    type Error = PanelError<P::Error>;

    fn read_analog(&mut self, channel: u8) -> Result<u16, Self::Error> {
        Multiplexer::read_analog(self, channel)
    }

    fn read_digital(&mut self, channel: u8) -> Result<bool, Self::Error> {
        Multiplexer::read_digital(self, channel)
    }
}
