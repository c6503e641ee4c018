//! Bus protocol constants.
//!
//! The chip decodes a 5-bit register address. The address latch is eight
//! bits wide; bit 5 of the latched value drives the chip's active-low reset
//! line, so every address is presented with that bit set.

// ---------------------------------------------------------------------------
// Addressing
// ---------------------------------------------------------------------------

/// Highest register address the chip decodes.
pub const MAX_ADDRESS: u8 = 0x1F;

/// Latch bit that holds the chip's reset line inactive (high).
pub const RESET_INACTIVE: u8 = 0x20;

// ---------------------------------------------------------------------------
// Timing
// ---------------------------------------------------------------------------

/// Hold time in microseconds for the latch strobe and the chip-select pulse.
pub const BUS_HOLD_US: u32 = 10;

/// Reset pulse length in microseconds. The chip needs at least ten cycles
/// of its 1 MHz clock with reset asserted.
pub const RESET_HOLD_US: u32 = 20;

/// Width of the shared data bus.
pub const BUS_WIDTH: usize = 8;
