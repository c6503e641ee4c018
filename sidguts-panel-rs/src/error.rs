//! Error types for the panel drivers.

use core::fmt;

/// Errors that can occur while sampling inputs or driving the LEDs.
///
/// ADC errors are collapsed into [`PanelError::Adc`] so the type stays
/// generic over the pin error only.
#[derive(Debug, PartialEq, Eq)]
pub enum PanelError<E> {
    /// Underlying output pin error.
    Pin(E),
    /// The ADC conversion failed.
    Adc,
    /// Multiplexer channel out of range (must be 0–15).
    InvalidChannel(u8),
}

impl<E> From<E> for PanelError<E> {
    fn from(error: E) -> Self {
        PanelError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for PanelError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PanelError::Pin(e) => write!(f, "Pin error: {:?}", e),
            PanelError::Adc => write!(f, "ADC conversion failed"),
            PanelError::InvalidChannel(channel) => {
                write!(f, "Invalid multiplexer channel {} (must be 0-15)", channel)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for PanelError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            PanelError::Pin(e) => defmt::write!(f, "Pin error: {}", e),
            PanelError::Adc => defmt::write!(f, "ADC conversion failed"),
            PanelError::InvalidChannel(channel) => {
                defmt::write!(f, "Invalid multiplexer channel {}", channel)
            }
        }
    }
}
