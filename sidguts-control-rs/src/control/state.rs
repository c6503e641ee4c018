use super::sample::Sample;

/// Pot readings at or below this are treated as "pot not in use".
pub(crate) const WAVEFORM_POT_FLOOR: u16 = 50;

/// Oscillator waveform of the main voice.
///
/// Variants are ordered the way the WAVEFORM switch steps through them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Waveform {
    Triangle,
    Sawtooth,
    Pulse,
    Noise,
}

impl Waveform {
    /// Every waveform, in switch order.
    pub const ALL: [Waveform; 4] = [
        Waveform::Triangle,
        Waveform::Sawtooth,
        Waveform::Pulse,
        Waveform::Noise,
    ];

    /// Waveform select bit in the voice control register (bits 4–7).
    pub const fn bits(self) -> u8 {
        match self {
            Waveform::Triangle => 0x10,
            Waveform::Sawtooth => 0x20,
            Waveform::Pulse => 0x40,
            Waveform::Noise => 0x80,
        }
    }

    /// Inverse of [`bits`](Self::bits). Returns `None` for anything that is
    /// not exactly one waveform bit.
    pub const fn from_bits(bits: u8) -> Option<Self> {
        match bits {
            0x10 => Some(Waveform::Triangle),
            0x20 => Some(Waveform::Sawtooth),
            0x40 => Some(Waveform::Pulse),
            0x80 => Some(Waveform::Noise),
            _ => None,
        }
    }

    /// The waveform the WAVEFORM switch selects next.
    ///
    /// Equivalent to doubling the select bit and wrapping from noise back
    /// to triangle.
    pub const fn next(self) -> Self {
        match self {
            Waveform::Triangle => Waveform::Sawtooth,
            Waveform::Sawtooth => Waveform::Pulse,
            Waveform::Pulse => Waveform::Noise,
            Waveform::Noise => Waveform::Triangle,
        }
    }

    /// Waveform chosen by the waveform pot, or `None` while the pot sits
    /// at its noise floor.
    ///
    /// Bands, ascending: noise, triangle, sawtooth, pulse.
    pub fn from_pot(sample: Sample) -> Option<Self> {
        match sample.get() {
            0..=WAVEFORM_POT_FLOOR => None,
            51..=349 => Some(Waveform::Noise),
            350..=549 => Some(Waveform::Triangle),
            550..=774 => Some(Waveform::Sawtooth),
            _ => Some(Waveform::Pulse),
        }
    }
}

/// Response of the chip's multimode filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FilterType {
    LowPass,
    BandPass,
    HighPass,
    Notch,
}

impl FilterType {
    /// Every filter type, in switch order.
    pub const ALL: [FilterType; 4] = [
        FilterType::LowPass,
        FilterType::BandPass,
        FilterType::HighPass,
        FilterType::Notch,
    ];

    /// Position in the switch cycle (0–3). Also the persisted encoding.
    pub const fn index(self) -> u8 {
        match self {
            FilterType::LowPass => 0,
            FilterType::BandPass => 1,
            FilterType::HighPass => 2,
            FilterType::Notch => 3,
        }
    }

    /// Inverse of [`index`](Self::index); only the low two bits are used.
    pub const fn from_index(index: u8) -> Self {
        match index & 0x03 {
            0 => FilterType::LowPass,
            1 => FilterType::BandPass,
            2 => FilterType::HighPass,
            _ => FilterType::Notch,
        }
    }

    /// The filter type the FILTER switch selects next.
    pub const fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// LP/BP/HP enable bits of the mode/volume register.
    ///
    /// Notch is high-pass and low-pass together.
    pub const fn mode_bits(self) -> u8 {
        match self {
            FilterType::LowPass => 0x10,
            FilterType::BandPass => 0x20,
            FilterType::HighPass => 0x40,
            FilterType::Notch => 0x50,
        }
    }
}

/// How oscillator 3 modulates the main voice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Osc3Mode {
    /// No modulation.
    Off,
    /// Hard sync to oscillator 3.
    Sync,
    /// Ring modulation by oscillator 3. Needs a triangle carrier.
    Ring,
}

impl Osc3Mode {
    /// Every mode, in switch order.
    pub const ALL: [Osc3Mode; 3] = [Osc3Mode::Off, Osc3Mode::Sync, Osc3Mode::Ring];

    /// The mode the RING/SYNC switch selects next.
    pub const fn next(self) -> Self {
        match self {
            Osc3Mode::Off => Osc3Mode::Sync,
            Osc3Mode::Sync => Osc3Mode::Ring,
            Osc3Mode::Ring => Osc3Mode::Off,
        }
    }

    /// Persisted encoding.
    pub const fn code(self) -> u8 {
        match self {
            Osc3Mode::Off => 0,
            Osc3Mode::Ring => 1,
            Osc3Mode::Sync => 2,
        }
    }

    /// Inverse of [`code`](Self::code). The unused code 3 decodes to `Off`.
    pub const fn from_code(code: u8) -> Self {
        match code & 0x03 {
            1 => Osc3Mode::Ring,
            2 => Osc3Mode::Sync,
            _ => Osc3Mode::Off,
        }
    }
}

/// Logical state of the voice, mutated once per tick.
///
/// The `Option` fields cache the last value written to the chip. They start
/// as `None` so the first tick always writes, and afterwards a register is
/// only rewritten when its source reading changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SynthState {
    pub waveform: Waveform,
    pub filter_type: FilterType,
    pub osc3_mode: Osc3Mode,
    /// Voice silenced by the WAVEFORM + RING/SYNC combo.
    pub gate_off: bool,
    /// Last main CV sample sent to the frequency registers.
    pub main_cv: Option<Sample>,
    /// Last oscillator 3 CV sample sent to its frequency registers.
    pub osc3_cv: Option<Sample>,
    /// Last pulse width written, always within `[PULSE_WIDTH_MIN, PULSE_WIDTH_MAX]`.
    pub pulse_width: Option<u16>,
    /// Last 11-bit filter cutoff written.
    pub filter_cutoff: Option<u16>,
    /// Last 4-bit resonance written.
    pub resonance: Option<u8>,
}

impl Default for SynthState {
    fn default() -> Self {
        Self {
            waveform: Waveform::Pulse,
            filter_type: FilterType::LowPass,
            osc3_mode: Osc3Mode::Off,
            gate_off: false,
            main_cv: None,
            osc3_cv: None,
            pulse_width: None,
            filter_cutoff: None,
            resonance: None,
        }
    }
}

/// Narrowest audible pulse (40 ADC steps, scaled to 12 bits).
pub const PULSE_WIDTH_MIN: u16 = 160;
/// Widest pulse the 12-bit register holds.
pub const PULSE_WIDTH_MAX: u16 = 4095;

/// Pulse width register value for a pot reading.
pub fn pulse_width(sample: Sample) -> u16 {
    (sample.get() << 2).clamp(PULSE_WIDTH_MIN, PULSE_WIDTH_MAX)
}

/// 11-bit filter cutoff for a pot reading.
pub fn filter_cutoff(sample: Sample) -> u16 {
    sample.get() << 1
}

/// 4-bit resonance for a pot reading.
pub fn resonance(sample: Sample) -> u8 {
    (sample.get() >> 6).min(15) as u8
}
