use super::state::{FilterType, Osc3Mode, SynthState, Waveform};

/// Front-panel status indicators.
///
/// Bits 0–7 sit on the LED shift register in board order; bit 8 is the
/// discrete SYNC line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u16)]
pub enum Led {
    Triangle = 1 << 0,
    Sawtooth = 1 << 1,
    Pulse = 1 << 2,
    Noise = 1 << 3,
    High = 1 << 4,
    Mid = 1 << 5,
    Low = 1 << 6,
    Ring = 1 << 7,
    Sync = 1 << 8,
}

impl Led {
    pub const fn bit(self) -> u16 {
        self as u16
    }

    /// Indicator for a waveform.
    pub const fn for_waveform(waveform: Waveform) -> Self {
        match waveform {
            Waveform::Triangle => Led::Triangle,
            Waveform::Sawtooth => Led::Sawtooth,
            Waveform::Pulse => Led::Pulse,
            Waveform::Noise => Led::Noise,
        }
    }
}

/// A set of lit indicators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LedMask(u16);

impl LedMask {
    pub const OFF: LedMask = LedMask(0);

    /// Indicators lit while tuning, on top of the normal status.
    const TUNING: LedMask = LedMask(
        Led::High.bit() | Led::Low.bit() | Led::Mid.bit() | Led::Sync.bit() | Led::Ring.bit(),
    );

    pub const fn from_bits(bits: u16) -> Self {
        Self(bits & 0x01FF)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, led: Led) -> bool {
        self.0 & led.bit() != 0
    }

    pub fn insert(&mut self, led: Led) {
        self.0 |= led.bit();
    }

    pub fn remove(&mut self, led: Led) {
        self.0 &= !led.bit();
    }

    /// The byte clocked into the shift register.
    pub const fn shift_byte(self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Level of the discrete SYNC line.
    pub const fn sync(self) -> bool {
        self.contains(Led::Sync)
    }

    /// Status display for the current voice state.
    ///
    /// The waveform indicator is dark while the gate is muted. Ring mode
    /// forces the triangle indicator because the chip ring-modulates a
    /// triangle regardless of the selected waveform.
    pub fn status(state: &SynthState, tuning: bool) -> Self {
        let mut mask = LedMask::OFF;

        match state.filter_type {
            FilterType::LowPass => mask.insert(Led::Low),
            FilterType::BandPass => mask.insert(Led::Mid),
            FilterType::HighPass => mask.insert(Led::High),
            FilterType::Notch => {
                mask.insert(Led::High);
                mask.insert(Led::Low);
            }
        }

        if !state.gate_off {
            mask.insert(Led::for_waveform(state.waveform));

            match state.osc3_mode {
                Osc3Mode::Off => {}
                Osc3Mode::Sync => mask.insert(Led::Sync),
                Osc3Mode::Ring => {
                    mask.insert(Led::Ring);
                    mask.remove(Led::Pulse);
                    mask.remove(Led::Sawtooth);
                    mask.remove(Led::Noise);
                    mask.insert(Led::Triangle);
                }
            }
        }

        if tuning {
            mask.0 |= Self::TUNING.0;
        }

        mask
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(waveform: Waveform, filter_type: FilterType, osc3_mode: Osc3Mode) -> SynthState {
        SynthState {
            waveform,
            filter_type,
            osc3_mode,
            ..SynthState::default()
        }
    }

    #[test]
    fn default_state_lights_pulse_and_low() {
        let mask = LedMask::status(&SynthState::default(), false);
        assert_eq!(mask.bits(), Led::Pulse.bit() | Led::Low.bit());
        assert!(!mask.sync());
    }

    #[test]
    fn filter_indicators() {
        let cases = [
            (FilterType::LowPass, Led::Low.bit()),
            (FilterType::BandPass, Led::Mid.bit()),
            (FilterType::HighPass, Led::High.bit()),
            (FilterType::Notch, Led::High.bit() | Led::Low.bit()),
        ];
        for (filter, expected) in cases {
            let mut s = state(Waveform::Pulse, filter, Osc3Mode::Off);
            s.gate_off = true;
            assert_eq!(LedMask::status(&s, false).bits(), expected);
        }
    }

    #[test]
    fn ring_mode_forces_triangle_indicator() {
        let s = state(Waveform::Noise, FilterType::LowPass, Osc3Mode::Ring);
        let mask = LedMask::status(&s, false);
        assert!(mask.contains(Led::Ring));
        assert!(mask.contains(Led::Triangle));
        assert!(!mask.contains(Led::Noise));
    }

    #[test]
    fn sync_mode_drives_sync_line() {
        let s = state(Waveform::Sawtooth, FilterType::LowPass, Osc3Mode::Sync);
        let mask = LedMask::status(&s, false);
        assert!(mask.sync());
        assert!(mask.contains(Led::Sawtooth));
        assert_eq!(mask.shift_byte(), (Led::Sawtooth.bit() | Led::Low.bit()) as u8);
    }

    #[test]
    fn muted_gate_hides_waveform_and_modulation() {
        let mut s = state(Waveform::Triangle, FilterType::BandPass, Osc3Mode::Ring);
        s.gate_off = true;
        assert_eq!(LedMask::status(&s, false).bits(), Led::Mid.bit());
    }

    #[test]
    fn tuning_lights_every_filter_and_mode_indicator() {
        let mask = LedMask::status(&SynthState::default(), true);
        for led in [Led::High, Led::Mid, Led::Low, Led::Sync, Led::Ring, Led::Pulse] {
            assert!(mask.contains(led), "{:?}", led);
        }
    }
}
