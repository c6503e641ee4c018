//! Main-CV to oscillator frequency translation.
//!
//! The table maps a 1 V/octave control voltage, sampled by the 10-bit ADC
//! at 5 V full scale (204.8 steps per octave), to the chip's 16-bit
//! oscillator frequency register at a 1 MHz chip clock. Entry 0 is 27.5 Hz
//! (A0). It is generated at compile time with Q32 fixed-point arithmetic so
//! the firmware carries no floating point code.

use super::sample::Sample;
use super::tuning::TuningOffset;

/// Number of table entries: every sample plus every tuning offset.
pub const FREQUENCY_TABLE_LEN: usize = Sample::MAX as usize + 1 + TuningOffset::MAX as usize + 1;

/// 27.5 Hz as a frequency register value (`hz * 2^24 / 1 MHz`), Q32.
const BASE_Q32: u128 = 1_981_583_836_043;

/// `2^(1 / 204.8)`, Q32.
const STEP_RATIO_Q32: u128 = 4_309_528_273;

const HALF_Q32: u128 = 1 << 31;

const fn build_table() -> [u16; FREQUENCY_TABLE_LEN] {
    let mut table = [0u16; FREQUENCY_TABLE_LEN];
    let mut acc = BASE_Q32;
    let mut i = 0;
    while i < FREQUENCY_TABLE_LEN {
        let rounded = (acc + HALF_Q32) >> 32;
        // Notes above the register range saturate.
        table[i] = if rounded > u16::MAX as u128 {
            u16::MAX
        } else {
            rounded as u16
        };
        acc = (acc * STEP_RATIO_Q32) >> 32;
        i += 1;
    }
    table
}

/// Frequency register values indexed by `sample + offset`.
///
/// Strictly increasing until the values reach `u16::MAX`, non-decreasing
/// over the whole table.
pub static FREQUENCY_TABLE: [u16; FREQUENCY_TABLE_LEN] = build_table();

/// Translate a CV sample plus calibration offset into a frequency register value.
///
/// Both arguments are range-checked by their types, so the table index is
/// always valid.
///
/// # Examples
///
/// ```
/// use sidguts::control::{translate, Sample, TuningOffset};
///
/// let low = translate(Sample::new(100), TuningOffset::default());
/// let high = translate(Sample::new(101), TuningOffset::default());
/// assert!(low < high);
/// ```
pub fn translate(sample: Sample, offset: TuningOffset) -> u16 {
    FREQUENCY_TABLE[sample.get() as usize + offset.get() as usize]
}
