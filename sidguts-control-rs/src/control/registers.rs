//! Sound chip register map and the values the controller writes.

use super::state::Waveform;

// Voice 1
pub const V1_FREQ_LO: u8 = 0;
pub const V1_FREQ_HI: u8 = 1;
pub const V1_PW_LO: u8 = 2;
pub const V1_PW_HI: u8 = 3;
pub const V1_CONTROL: u8 = 4;
pub const V1_ATTACK_DECAY: u8 = 5;
pub const V1_SUSTAIN_RELEASE: u8 = 6;

// Voice 3 (modulation source)
pub const V3_FREQ_LO: u8 = 14;
pub const V3_FREQ_HI: u8 = 15;
pub const V3_CONTROL: u8 = 18;

// Filter and volume
pub const FC_LO: u8 = 21;
pub const FC_HI: u8 = 22;
pub const RES_FILT: u8 = 23;
pub const MODE_VOL: u8 = 24;

/// Number of writable registers, `0..REGISTER_COUNT`.
pub const REGISTER_COUNT: u8 = 25;

/// Sustain at full level, instant release.
pub const SUSTAIN_FULL: u8 = 0xF0;
/// Sustain at zero. Clearing the gate bit alone does not silence every chip.
pub const SUSTAIN_MUTED: u8 = 0x00;
/// Instant attack and decay.
pub const ATTACK_DECAY_FAST: u8 = 0x00;

/// Disconnects voice 3 from the audio output (mode/volume bit 7).
pub const VOICE3_OFF: u8 = 0x80;
pub const MASTER_VOLUME: u8 = 15;
/// Voice 1 and the external input routed through the filter (res/filt bits 0 and 3).
pub const FILTER_ROUTING: u8 = 0x09;

/// Voice 1 control written at power on: sawtooth with the gate open.
pub const POWER_ON_CONTROL: u8 = 0x21;

const GATE: u8 = 1 << 0;
const SYNC: u8 = 1 << 1;
const RING: u8 = 1 << 2;

/// Contents of a voice control register.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoiceControl {
    pub waveform: Waveform,
    pub ring: bool,
    pub sync: bool,
    pub gate: bool,
}

impl VoiceControl {
    /// Waveform only, all control bits clear.
    pub const fn idle(waveform: Waveform) -> Self {
        Self {
            waveform,
            ring: false,
            sync: false,
            gate: false,
        }
    }

    pub const fn bits(self) -> u8 {
        let mut bits = self.waveform.bits();
        if self.ring {
            bits |= RING;
        }
        if self.sync {
            bits |= SYNC;
        }
        if self.gate {
            bits |= GATE;
        }
        bits
    }
}

/// Mode/volume register for a filter mode.
pub const fn mode_volume(filter_mode_bits: u8) -> u8 {
    VOICE3_OFF | filter_mode_bits | MASTER_VOLUME
}

/// Resonance/filter-routing register for a 4-bit resonance.
pub const fn resonance_routing(resonance: u8) -> u8 {
    (resonance & 0x0F) << 4 | FILTER_ROUTING
}

/// Split an 11-bit cutoff into its low (bits 0–2) and high (bits 3–10) registers.
pub const fn cutoff_bytes(cutoff: u16) -> (u8, u8) {
    ((cutoff & 0x07) as u8, ((cutoff >> 3) & 0xFF) as u8)
}

/// Split a 16-bit value into low and high bytes.
pub const fn word_bytes(word: u16) -> (u8, u8) {
    ((word & 0xFF) as u8, (word >> 8) as u8)
}
