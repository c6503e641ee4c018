/// A front-panel momentary switch.
///
/// The discriminant is the switch's bit in a [`SwitchMask`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Switch {
    Filter = 1 << 2,
    Waveform = 1 << 3,
    RingSync = 1 << 4,
}

impl Switch {
    /// Every switch, in the order they are sampled.
    pub const ALL: [Switch; 3] = [Switch::Filter, Switch::RingSync, Switch::Waveform];

    pub const fn bit(self) -> u8 {
        self as u8
    }
}

/// A set of switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchMask(u8);

impl SwitchMask {
    pub const EMPTY: SwitchMask = SwitchMask(0);

    pub const fn contains(self, switch: Switch) -> bool {
        self.0 & switch.bit() != 0
    }

    pub fn insert(&mut self, switch: Switch) {
        self.0 |= switch.bit();
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Add `switch` to the set, builder style.
    pub const fn with(self, switch: Switch) -> Self {
        Self(self.0 | switch.bit())
    }
}

/// Turns per-tick switch levels into one event per press.
///
/// A pressed switch is *fresh* until it is consumed. Consuming marks it
/// ignored, and the ignore mask is only cleared at the end of a tick in
/// which every switch reads released. Holding a switch therefore produces
/// exactly one event, and a two-switch combo still fires when one of its
/// switches was already consumed this press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SwitchTracker {
    pressed: SwitchMask,
    ignored: SwitchMask,
}

impl SwitchTracker {
    pub const fn new() -> Self {
        Self {
            pressed: SwitchMask::EMPTY,
            ignored: SwitchMask::EMPTY,
        }
    }

    /// Record this tick's switch levels.
    pub fn begin_tick(&mut self, pressed: SwitchMask) {
        self.pressed = pressed;
    }

    /// Level of `switch` this tick, regardless of the ignore mask.
    pub fn is_pressed(&self, switch: Switch) -> bool {
        self.pressed.contains(switch)
    }

    /// `switch` is held and has not been consumed during this press.
    pub fn is_fresh(&self, switch: Switch) -> bool {
        self.pressed.contains(switch) && !self.ignored.contains(switch)
    }

    pub fn is_ignored(&self, switch: Switch) -> bool {
        self.ignored.contains(switch)
    }

    /// Mark `switch` as handled for the rest of this press.
    pub fn consume(&mut self, switch: Switch) {
        self.ignored.insert(switch);
    }

    /// Two-switch combination check.
    ///
    /// Fires when both are fresh, or when one is fresh and the other was
    /// already consumed during this press.
    pub fn combo(&self, a: Switch, b: Switch) -> bool {
        (self.is_fresh(a) && self.is_fresh(b))
            || (self.is_fresh(a) && self.is_ignored(b))
            || (self.is_fresh(b) && self.is_ignored(a))
    }

    /// Finish the tick: forget consumed presses once every switch is up.
    pub fn end_tick(&mut self) {
        if self.pressed.is_empty() {
            self.ignored = SwitchMask::EMPTY;
        }
    }
}
