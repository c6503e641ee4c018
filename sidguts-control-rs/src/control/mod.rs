//! Per-tick control state machine for the SID GUTS voice.
//!
//! [`Controller`] owns the synthesizer's logical state and, once per tick,
//! turns the front panel (three momentary switches, pots and CV jacks read
//! through a 16-way multiplexer) into register writes on the sound chip.
//!
//! # Tick overview
//!
//! ```text
//! switches ─► SwitchTracker ─┐
//!                            ├─► Controller::tick ─► ChipBus (only on change)
//! pots / CV ─► Sample ───────┘         │
//!                                      ├─► SettingsStore (while a switch is held)
//!                                      └─► StatusLeds (every tick)
//! ```
//!
//! # Switch handling
//!
//! A switch fires once per continuous press. Consuming a press marks the
//! switch in an ignore mask that is only cleared when every switch reads
//! released; see [`SwitchTracker`]. Two-switch combinations toggle tuning
//! mode (FILTER + RING/SYNC) and mute the gate (WAVEFORM + RING/SYNC).
//!
//! # `no_std` Compatibility
//!
//! No heap allocation is used. The frequency table is generated at compile
//! time and lives in flash.

mod config;
mod error;
mod frequency;
pub mod hardware;
mod leds;
mod machine;
mod mirror;
pub mod registers;
mod sample;
mod settings;
mod state;
mod switches;
mod tuning;

#[cfg(test)]
mod mock;

pub use config::{ChannelMap, ControlConfig};
pub use error::ControlError;
pub use frequency::{translate, FREQUENCY_TABLE, FREQUENCY_TABLE_LEN};
pub use hardware::{ChipBus, Hardware, InputPanel, SettingsStore, StatusLeds, DIGITAL_THRESHOLD};
pub use leds::{Led, LedMask};
pub use machine::Controller;
pub use mirror::{MirrorError, MirroredStore, PageFlash};
pub use sample::Sample;
pub use settings::{PackedSettings, StoredSettings, SETTINGS_ADDRESS, SETTINGS_ERASED, TUNING_ADDRESS};
pub use state::{FilterType, Osc3Mode, SynthState, Waveform};
pub use switches::{Switch, SwitchMask, SwitchTracker};
pub use tuning::TuningOffset;
