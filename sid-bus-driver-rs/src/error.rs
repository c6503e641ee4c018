//! Error types for the bus driver.

use core::fmt;

/// Errors that can occur when writing to the chip.
#[derive(Debug, PartialEq, Eq)]
pub enum SidError<E> {
    /// Underlying output pin error.
    Pin(E),

    /// Register address outside the chip's 5-bit space (must be 0x00–0x1F).
    InvalidRegister(u8),
}

// Allow ergonomic `?` propagation from raw pin errors.
impl<E> From<E> for SidError<E> {
    fn from(error: E) -> Self {
        SidError::Pin(error)
    }
}

impl<E: fmt::Debug> fmt::Display for SidError<E> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SidError::Pin(e) => write!(f, "Pin error: {:?}", e),
            SidError::InvalidRegister(address) => {
                write!(f, "Invalid register address 0x{:02X} (must be 0x00-0x1F)", address)
            }
        }
    }
}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for SidError<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            SidError::Pin(e) => defmt::write!(f, "Pin error: {}", e),
            SidError::InvalidRegister(address) => {
                defmt::write!(f, "Invalid register address {=u8:#x}", address)
            }
        }
    }
}
