use core::fmt;

/// Errors that can abort a control tick.
///
/// The hardware traits carry their own error types; the controller only
/// records which collaborator failed. None of these are recoverable inside
/// the tick: the caller logs them and runs the next tick as usual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlError {
    /// A register write to the sound chip failed.
    Bus,
    /// Sampling a multiplexed input failed.
    Input,
    /// Loading or saving persisted settings failed.
    Storage,
    /// Updating the status LEDs failed.
    Leds,
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ControlError::Bus => write!(f, "sound chip register write failed"),
            ControlError::Input => write!(f, "input multiplexer read failed"),
            ControlError::Storage => write!(f, "settings storage access failed"),
            ControlError::Leds => write!(f, "status LED update failed"),
        }
    }
}
