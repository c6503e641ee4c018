//! Recording hardware for controller tests.

use super::hardware::{ChipBus, Hardware, InputPanel, SettingsStore, StatusLeds};
use super::leds::LedMask;

/// Records every register write.
#[derive(Debug, Default)]
pub struct MockBus {
    pub writes: Vec<(u8, u8)>,
    pub fail: bool,
}

impl MockBus {
    /// Writes recorded so far, clearing the log.
    pub fn take(&mut self) -> Vec<(u8, u8)> {
        core::mem::take(&mut self.writes)
    }

    /// Last value written to `address`, if any.
    pub fn last(&self, address: u8) -> Option<u8> {
        self.writes
            .iter()
            .rev()
            .find(|(a, _)| *a == address)
            .map(|(_, data)| *data)
    }
}

impl ChipBus for MockBus {
    type Error = ();

    fn write_register(&mut self, address: u8, data: u8) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        self.writes.push((address, data));
        Ok(())
    }
}

/// Sixteen settable input channels.
#[derive(Debug, Default)]
pub struct MockInputs {
    pub channels: [u16; 16],
    pub fail: bool,
}

impl MockInputs {
    pub fn set(&mut self, channel: u8, value: u16) {
        self.channels[channel as usize] = value;
    }

    pub fn press(&mut self, channel: u8) {
        self.set(channel, 1023);
    }

    pub fn release(&mut self, channel: u8) {
        self.set(channel, 0);
    }
}

impl InputPanel for MockInputs {
    type Error = ();

    fn read_analog(&mut self, channel: u8) -> Result<u16, ()> {
        if self.fail {
            return Err(());
        }
        Ok(self.channels[channel as usize & 0x0F])
    }
}

/// Byte-addressed memory that starts erased.
#[derive(Debug)]
pub struct MemoryStore {
    pub bytes: [u8; 8],
    pub byte_writes: usize,
    pub fail: bool,
}

impl MemoryStore {
    pub fn erased() -> Self {
        Self {
            bytes: [0xFF; 8],
            byte_writes: 0,
            fail: false,
        }
    }
}

impl SettingsStore for MemoryStore {
    type Error = ();

    fn load_byte(&mut self, address: u16) -> Result<u8, ()> {
        self.bytes.get(address as usize).copied().ok_or(())
    }

    fn save_byte(&mut self, address: u16, value: u8) -> Result<(), ()> {
        if self.fail {
            return Err(());
        }
        let slot = self.bytes.get_mut(address as usize).ok_or(())?;
        *slot = value;
        self.byte_writes += 1;
        Ok(())
    }
}

/// Records every mask shown.
#[derive(Debug, Default)]
pub struct MockLeds {
    pub shown: Vec<LedMask>,
}

impl MockLeds {
    pub fn current(&self) -> Option<LedMask> {
        self.shown.last().copied()
    }
}

impl StatusLeds for MockLeds {
    type Error = ();

    fn show(&mut self, mask: LedMask) -> Result<(), ()> {
        self.shown.push(mask);
        Ok(())
    }
}

pub type MockHardware = Hardware<MockBus, MockInputs, MemoryStore, MockLeds>;

pub fn mock_hardware() -> MockHardware {
    Hardware::new(
        MockBus::default(),
        MockInputs::default(),
        MemoryStore::erased(),
        MockLeds::default(),
    )
}
