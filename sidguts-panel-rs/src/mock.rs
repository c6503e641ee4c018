//! Recording pins, ADC and delay for panel tests.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, ErrorKind, ErrorType, OutputPin};

use crate::multiplexer::AnalogSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Select(u8),
    LedData,
    LedClock,
    LedEnable,
    Sync,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Set(Line, bool),
    DelayNs(u32),
    AdcRead,
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
}

impl ErrorType for MockPin {
    type Error = MockPinError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Set(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Set(self.line, true));
        Ok(())
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

pub struct MockAdc {
    log: Log,
    value: Rc<Cell<u16>>,
    fail: Rc<Cell<bool>>,
}

impl AnalogSource for MockAdc {
    type Error = ();

    fn read(&mut self) -> Result<u16, ()> {
        if self.fail.get() {
            return Err(());
        }
        self.log.borrow_mut().push(Event::AdcRead);
        Ok(self.value.get())
    }
}

/// Shared event log and ADC level for one set of mock parts.
pub struct MockBoard {
    log: Log,
    adc_value: Rc<Cell<u16>>,
    adc_fail: Rc<Cell<bool>>,
}

impl MockBoard {
    pub fn new() -> Self {
        Self {
            log: Rc::new(RefCell::new(Vec::new())),
            adc_value: Rc::new(Cell::new(0)),
            adc_fail: Rc::new(Cell::new(false)),
        }
    }

    pub fn pin(&self, line: Line) -> MockPin {
        MockPin {
            line,
            log: Rc::clone(&self.log),
        }
    }

    pub fn delay(&self) -> MockDelay {
        MockDelay {
            log: Rc::clone(&self.log),
        }
    }

    pub fn adc(&self) -> MockAdc {
        MockAdc {
            log: Rc::clone(&self.log),
            value: Rc::clone(&self.adc_value),
            fail: Rc::clone(&self.adc_fail),
        }
    }

    pub fn set_adc(&self, value: u16) {
        self.adc_value.set(value);
    }

    pub fn fail_adc(&self) {
        self.adc_fail.set(true);
    }

    pub fn events(&self) -> Vec<Event> {
        self.log.borrow().clone()
    }

    pub fn clear(&self) {
        self.log.borrow_mut().clear();
    }
}
