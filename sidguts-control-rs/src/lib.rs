//! Control logic for the SID GUTS synthesizer voice.
//!
//! The [`control`] module holds everything that runs on the 50 Hz tick:
//! switch edge tracking, mode derivation, CV-to-frequency translation and
//! the decision of which chip registers to rewrite. It talks to the outside
//! world only through the traits in [`control::hardware`], so it builds for
//! the host and is tested there with recording mocks.
//!
//! # Features
//!
//! - **`defmt`** — structured logging of mode changes and `defmt::Format`
//!   implementations on the public types.

#![cfg_attr(not(test), no_std)]

pub mod control;
