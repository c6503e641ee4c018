//! Interfaces between the controller and the board.
//!
//! Each trait is implemented by a driver crate (`sid-bus-driver`,
//! `sidguts-panel`) or by the firmware. All calls are blocking: a tick
//! runs to completion without yielding.

/// Analog readings above this count as a closed switch.
pub const DIGITAL_THRESHOLD: u16 = 512;

/// Register writes on the sound chip.
pub trait ChipBus {
    type Error;

    /// Write `data` to the chip register at `address`.
    fn write_register(&mut self, address: u8, data: u8) -> Result<(), Self::Error>;
}

/// The multiplexed front-panel inputs.
pub trait InputPanel {
    type Error;

    /// Select `channel` and return its 10-bit reading.
    fn read_analog(&mut self, channel: u8) -> Result<u16, Self::Error>;

    /// Select `channel` and threshold its reading.
    fn read_digital(&mut self, channel: u8) -> Result<bool, Self::Error> {
        Ok(self.read_analog(channel)? > DIGITAL_THRESHOLD)
    }
}

/// Non-volatile byte store.
///
/// Words are little-endian over two consecutive byte addresses unless the
/// implementation overrides the word methods.
pub trait SettingsStore {
    type Error;

    fn load_byte(&mut self, address: u16) -> Result<u8, Self::Error>;

    fn save_byte(&mut self, address: u16, value: u8) -> Result<(), Self::Error>;

    fn load_word(&mut self, address: u16) -> Result<u16, Self::Error> {
        let low = self.load_byte(address)?;
        let high = self.load_byte(address + 1)?;
        Ok(u16::from_le_bytes([low, high]))
    }

    fn save_word(&mut self, address: u16, value: u16) -> Result<(), Self::Error> {
        let [low, high] = value.to_le_bytes();
        self.save_byte(address, low)?;
        self.save_byte(address + 1, high)
    }
}

/// Write-only status indicator output.
pub trait StatusLeds {
    type Error;

    fn show(&mut self, mask: super::LedMask) -> Result<(), Self::Error>;
}

/// Everything a tick touches, bundled so the controller takes one argument.
pub struct Hardware<B, I, S, L> {
    pub bus: B,
    pub inputs: I,
    pub store: S,
    pub leds: L,
}

impl<B, I, S, L> Hardware<B, I, S, L>
where
    B: ChipBus,
    I: InputPanel,
    S: SettingsStore,
    L: StatusLeds,
{
    pub fn new(bus: B, inputs: I, store: S, leds: L) -> Self {
        Self {
            bus,
            inputs,
            store,
            leds,
        }
    }
}
