use super::switches::Switch;

// ── ChannelMap ───────────────────────────────────────────────────────────

/// Multiplexer channel of every front-panel input.
///
/// [`ChannelMap::default()`] is the production board wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelMap {
    /// Pulse width pot. Default: 4.
    pub pulse_width: u8,
    /// Resonance pot. Default: 5.
    pub resonance: u8,
    /// Filter cutoff pot. Default: 6.
    pub cutoff: u8,
    /// FILTER switch. Default: 7.
    pub filter_switch: u8,
    /// RING/SYNC switch. Default: 9.
    pub ring_sync_switch: u8,
    /// 1 V/octave pitch CV. Default: 10.
    pub main_cv: u8,
    /// Oscillator 3 pitch CV. Default: 11.
    pub osc3_cv: u8,
    /// Waveform pot. Default: 12.
    pub waveform_pot: u8,
    /// WAVEFORM switch. Default: 13.
    pub waveform_switch: u8,
    /// Ring/sync mode select CV. Default: 14.
    pub ring_sync_select: u8,
}

impl Default for ChannelMap {
    fn default() -> Self {
        Self {
            pulse_width: 4,
            resonance: 5,
            cutoff: 6,
            filter_switch: 7,
            ring_sync_switch: 9,
            main_cv: 10,
            osc3_cv: 11,
            waveform_pot: 12,
            waveform_switch: 13,
            ring_sync_select: 14,
        }
    }
}

impl ChannelMap {
    /// Channel wired to `switch`.
    pub const fn switch(&self, switch: Switch) -> u8 {
        match switch {
            Switch::Filter => self.filter_switch,
            Switch::Waveform => self.waveform_switch,
            Switch::RingSync => self.ring_sync_switch,
        }
    }
}

// ── ControlConfig ────────────────────────────────────────────────────────

/// Controller configuration.
///
/// [`ControlConfig::default()`] ticks at 50 Hz, the rate the chip's own
/// host machine updated it at, with the production channel wiring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ControlConfig {
    /// Tick rate in Hz. Default: 50.
    pub tick_frequency_hz: u32,
    pub channels: ChannelMap,
}

impl Default for ControlConfig {
    fn default() -> Self {
        Self {
            tick_frequency_hz: 50,
            channels: ChannelMap::default(),
        }
    }
}

impl ControlConfig {
    /// Convert the configured tick rate to a timer period in milliseconds.
    ///
    /// Formula: `1000 / tick_frequency_hz`.
    pub fn tick_period_ms(&self) -> u64 {
        1000 / self.tick_frequency_hz.max(1) as u64
    }
}
