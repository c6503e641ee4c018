//! Blocking driver for the parallel register bus of a SID-family sound chip.
//!
//! The chip sits behind an 8-bit data bus shared by the register address and
//! the data byte. An address latch captures the address (plus the chip's
//! reset line on bit 5), then chip-select strobes the data byte in.
//!
//! # Architecture
//!
//! - **`driver`** (crate-private) — Pin-level bus primitives: present a byte,
//!   strobe the latch, strobe chip-select, each with the required hold time.
//! - **[`SidChip`]** (public) — Validated register writes and the reset
//!   pulse. Implements [`sidguts::control::ChipBus`].
//!
//! All waits are busy-waits through [`embedded_hal::delay::DelayNs`], so a
//! register write never yields to an executor.
//!
//! # Quick start
//!
//! ```ignore
//! use sid_bus_driver::SidChip;
//!
//! // Any `embedded-hal` 1.0 output pins and delay
//! let mut chip = SidChip::new(data_pins, latch, chip_select, delay)?;
//!
//! chip.reset()?;
//! chip.write_register(24, 0x0F)?; // master volume
//! ```
//!
//! # Features
//!
//! - **`defmt`** — Enable [`defmt::Format`] implementations on error types
//!   for embedded logging.

#![cfg_attr(not(test), no_std)]

pub use error::SidError;
pub use registers::{BUS_HOLD_US, MAX_ADDRESS, RESET_INACTIVE};
pub use sid_chip::SidChip;

mod driver;
mod error;
mod registers;
mod sid_chip;

#[cfg(test)]
mod mock;
