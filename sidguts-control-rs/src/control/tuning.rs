/// Calibration offset added to every main-CV frequency lookup.
///
/// Always within `[MIN, MAX]`: every constructor and mutator clamps, which
/// keeps `sample + offset` inside the frequency table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TuningOffset(u16);

impl TuningOffset {
    /// Lowest offset (inclusive).
    pub const MIN: u16 = 0;
    /// Highest offset (inclusive).
    pub const MAX: u16 = 613;
    /// Offset used on a fresh or erased unit: the middle of the range.
    pub const DEFAULT: TuningOffset = TuningOffset(Self::MAX / 2);

    /// Build an offset from any integer, clamping to `[MIN, MAX]`.
    pub fn new(value: i32) -> Self {
        Self(value.clamp(Self::MIN as i32, Self::MAX as i32) as u16)
    }

    /// Decode the persisted word.
    ///
    /// The word is stored as a signed 16-bit value, so an erased word
    /// (`0xFFFF`) reads as -1 and clamps to `MIN`.
    pub fn from_stored_word(word: u16) -> Self {
        Self::new(word as i16 as i32)
    }

    /// The offset value.
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Raise the offset by one step, saturating at `MAX`.
    pub fn increment(&mut self) {
        *self = Self::new(self.0 as i32 + 1);
    }

    /// Lower the offset by one step, saturating at `MIN`.
    pub fn decrement(&mut self) {
        *self = Self::new(self.0 as i32 - 1);
    }
}

impl Default for TuningOffset {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_half_of_max() {
        assert_eq!(TuningOffset::default().get(), 306);
    }

    #[test]
    fn new_clamps_both_ends() {
        assert_eq!(TuningOffset::new(-5).get(), 0);
        assert_eq!(TuningOffset::new(10_000).get(), 613);
        assert_eq!(TuningOffset::new(42).get(), 42);
    }

    #[test]
    fn increment_saturates_at_max() {
        let mut offset = TuningOffset::new(612);
        offset.increment();
        assert_eq!(offset.get(), 613);
        offset.increment();
        assert_eq!(offset.get(), 613);
    }

    #[test]
    fn decrement_saturates_at_min() {
        let mut offset = TuningOffset::new(1);
        offset.decrement();
        assert_eq!(offset.get(), 0);
        offset.decrement();
        assert_eq!(offset.get(), 0);
    }

    #[test]
    fn stored_word_is_read_as_signed() {
        assert_eq!(TuningOffset::from_stored_word(0xFFFF).get(), 0);
        assert_eq!(TuningOffset::from_stored_word(300).get(), 300);
        assert_eq!(TuningOffset::from_stored_word(0x7FFF).get(), 613);
    }
}
