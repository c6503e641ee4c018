/// A 10-bit reading from the input multiplexer.
///
/// Construction clamps to [`Sample::MAX`], so a `Sample` can always be used
/// as a frequency table index without further checks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample(u16);

impl Sample {
    /// Largest value the 10-bit ADC can report.
    pub const MAX: u16 = 1023;

    /// Wrap a raw ADC reading, clamping anything above 10 bits.
    pub const fn new(raw: u16) -> Self {
        if raw > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(raw)
        }
    }

    /// The raw reading.
    pub const fn get(self) -> u16 {
        self.0
    }
}
