//! Recording pins and delay for driver tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use crate::SidChip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Data(u8),
    Latch,
    ChipSelect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    DelayNs(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockPinError;

impl digital::Error for MockPinError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

type Log = Rc<RefCell<Vec<Event>>>;

pub struct MockPin {
    line: Line,
    log: Log,
    fail: Rc<Cell<bool>>,
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl MockPin {
    fn set(&mut self, high: bool) -> Result<(), MockPinError> {
        if self.fail.get() {
            return Err(MockPinError);
        }
        self.log.borrow_mut().push(Event::Set(self.line, high));
        Ok(())
    }
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

pub struct MockDelay {
    log: Log,
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::DelayNs(ns));
    }
}

/// Shared event log for one chip's pins.
pub struct MockBoard {
    log: Log,
    fail: Rc<Cell<bool>>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            fail: Rc::new(Cell::new(false)),
        }
    }

    fn pin(&self, line: Line) -> MockPin {
        MockPin {
            line,
            log: Rc::clone(&self.log),
            fail: Rc::clone(&self.fail),
        }
    }

    pub fn chip(&self) -> SidChip<MockPin, MockDelay> {
        let data = core::array::from_fn(|bit| self.pin(Line::Data(bit as u8)));
        let delay = MockDelay {
            log: Rc::clone(&self.log),
        };
        match SidChip::new(data, self.pin(Line::Latch), self.pin(Line::ChipSelect), delay) {
            Ok(chip) => chip,
            Err(_) => panic!("mock pins never fail during construction"),
        }
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }

    pub fn fail_pins(&self) {
        self.fail.set(true);
    }
}

/// The byte on the data lines each time the latch rises or chip-select falls.
pub fn bus_state_at_strobes(events: &[Event]) -> Vec<(Line, u8)> {
    let mut bus = 0u8;
    let mut strobes = Vec::new();
    for event in events {
        match *event {
            Event::Set(Line::Data(bit), high) => {
                if high {
                    bus |= 1 << bit;
                } else {
                    bus &= !(1 << bit);
                }
            }
            Event::Set(Line::Latch, true) => strobes.push((Line::Latch, bus)),
            Event::Set(Line::ChipSelect, false) => strobes.push((Line::ChipSelect, bus)),
            _ => {}
        }
    }
    strobes
}
