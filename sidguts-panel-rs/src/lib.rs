//! Front-panel drivers for the SID GUTS controller board.
//!
//! This crate provides [`Multiplexer`], which samples the sixteen
//! multiplexed pots, CV jacks and switches through one ADC input, and
//! [`ShiftRegisterLeds`], which clocks the status mask into the LED shift
//! register. They implement [`InputPanel`] and [`StatusLeds`] from the
//! `sidguts` control crate.
//!
//! Both drivers are blocking: the multiplexer settle time is a busy-wait and
//! the LED clock is toggled back to back with no delay, so a control tick
//! never yields part way through.
//!
//! # Quick Start
//!
//! ```ignore
//! use sidguts_panel::{Multiplexer, MultiplexerConfig, ShiftRegisterLeds};
//!
//! let mut inputs = Multiplexer::new(select_pins, adc_source, delay, MultiplexerConfig::default());
//! let cutoff = inputs.read_analog(6)?;
//!
//! let mut leds = ShiftRegisterLeds::new(data, clock, enable, sync);
//! leds.show(LedMask::from_bits(0x44))?;
//! ```
//!
//! # Crate Features
//!
//! - **`defmt`** — structured logging via [`defmt`].
//!
//! [`InputPanel`]: sidguts::control::InputPanel
//! [`StatusLeds`]: sidguts::control::StatusLeds

#![cfg_attr(not(test), no_std)]

pub mod error;
pub mod leds;
pub mod multiplexer;

#[cfg(test)]
mod mock;

// ── Re-exports for convenience ───────────────────────────────────────────

pub use error::PanelError;
pub use leds::ShiftRegisterLeds;
pub use multiplexer::{AnalogSource, Multiplexer, MultiplexerConfig, CHANNEL_COUNT};
