//! Settings that survive power loss.
//!
//! ```text
//! address 0   byte   WWWW FF OO    W: waveform bit, F: filter type, O: osc 3 mode
//! address 1   word   tuning offset, little-endian, signed
//! ```

use super::hardware::SettingsStore;
use super::state::{FilterType, Osc3Mode, Waveform};
use super::tuning::TuningOffset;

/// Address of the packed settings byte.
pub const SETTINGS_ADDRESS: u16 = 0;
/// Address of the tuning offset word.
pub const TUNING_ADDRESS: u16 = 1;
/// Settings byte of an erased store. No valid packing produces it.
pub const SETTINGS_ERASED: u8 = 0xFF;

/// The voice selections packed into the settings byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PackedSettings {
    pub waveform: Waveform,
    pub filter_type: FilterType,
    pub osc3_mode: Osc3Mode,
}

impl Default for PackedSettings {
    fn default() -> Self {
        Self {
            waveform: Waveform::Pulse,
            filter_type: FilterType::LowPass,
            osc3_mode: Osc3Mode::Off,
        }
    }
}

impl PackedSettings {
    pub const fn to_byte(self) -> u8 {
        self.waveform.bits() | self.filter_type.index() << 2 | self.osc3_mode.code()
    }

    /// Decode a settings byte.
    ///
    /// An unset or unknown waveform nibble falls back to pulse. The erased
    /// byte is not special here; see [`StoredSettings::load`].
    pub const fn from_byte(byte: u8) -> Self {
        let waveform = match Waveform::from_bits(byte & 0xF0) {
            Some(waveform) => waveform,
            None => Waveform::Pulse,
        };
        Self {
            waveform,
            filter_type: FilterType::from_index((byte & 0x0F) >> 2),
            osc3_mode: Osc3Mode::from_code(byte & 0x03),
        }
    }
}

/// Everything loaded from the store at boot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoredSettings {
    pub settings: PackedSettings,
    pub tuning: TuningOffset,
}

impl StoredSettings {
    /// Read settings and tuning, repairing anything out of range.
    ///
    /// An erased settings byte yields the defaults without reading the
    /// tuning word.
    pub fn load<S: SettingsStore>(store: &mut S) -> Result<Self, S::Error> {
        let byte = store.load_byte(SETTINGS_ADDRESS)?;
        if byte == SETTINGS_ERASED {
            #[cfg(feature = "defmt")]
            defmt::info!("settings store erased, using defaults");
            return Ok(Self::default());
        }

        let tuning = TuningOffset::from_stored_word(store.load_word(TUNING_ADDRESS)?);
        Ok(Self {
            settings: PackedSettings::from_byte(byte),
            tuning,
        })
    }
}

/// Persist the settings byte.
pub fn save_settings<S: SettingsStore>(store: &mut S, settings: PackedSettings) -> Result<(), S::Error> {
    store.save_byte(SETTINGS_ADDRESS, settings.to_byte())
}

/// Persist the tuning offset.
pub fn save_tuning<S: SettingsStore>(store: &mut S, tuning: TuningOffset) -> Result<(), S::Error> {
    store.save_word(TUNING_ADDRESS, tuning.get())
}
