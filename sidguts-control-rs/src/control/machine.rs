use super::config::ControlConfig;
use super::error::ControlError;
use super::frequency::translate;
use super::hardware::{ChipBus, Hardware, InputPanel, SettingsStore, StatusLeds};
use super::leds::LedMask;
use super::registers::{self, VoiceControl};
use super::sample::Sample;
use super::settings::{save_settings, save_tuning, PackedSettings, StoredSettings};
use super::state::{self, Osc3Mode, SynthState, Waveform};
use super::switches::{Switch, SwitchMask, SwitchTracker};
use super::tuning::TuningOffset;

/// Ring/sync select readings at or below this force modulation off.
const SELECT_OFF_MAX: u16 = 100;
/// Readings above this select a modulation mode; between the two nothing changes.
const SELECT_DEAD_ZONE_MAX: u16 = 300;
/// Readings from here up select ring modulation, below it sync.
const SELECT_RING_MIN: u16 = 750;

/// The control state machine.
///
/// Owns the voice state, tuning calibration and switch tracking. The
/// firmware calls [`tick`](Self::tick) at `config.tick_frequency_hz`; each
/// tick samples the panel, writes changed registers and refreshes the LEDs.
#[derive(Debug, Clone)]
pub struct Controller {
    config: ControlConfig,
    state: SynthState,
    tuning: TuningOffset,
    tuning_mode: bool,
    switches: SwitchTracker,
    first_tick: bool,
}

impl Controller {
    /// Controller with default voice settings.
    pub fn new(config: ControlConfig) -> Self {
        Self {
            config,
            state: SynthState::default(),
            tuning: TuningOffset::default(),
            tuning_mode: false,
            switches: SwitchTracker::new(),
            first_tick: true,
        }
    }

    /// Controller restored from persisted settings.
    pub fn load<S: SettingsStore>(config: ControlConfig, store: &mut S) -> Result<Self, ControlError> {
        let stored = StoredSettings::load(store).map_err(|_| ControlError::Storage)?;

        #[cfg(feature = "defmt")]
        defmt::info!(
            "settings loaded: {} {} {} tuning {}",
            stored.settings.waveform,
            stored.settings.filter_type,
            stored.settings.osc3_mode,
            stored.tuning.get()
        );

        let mut controller = Self::new(config);
        controller.state.waveform = stored.settings.waveform;
        controller.state.filter_type = stored.settings.filter_type;
        controller.state.osc3_mode = stored.settings.osc3_mode;
        controller.tuning = stored.tuning;
        Ok(controller)
    }

    pub fn state(&self) -> &SynthState {
        &self.state
    }

    pub fn tuning(&self) -> TuningOffset {
        self.tuning
    }

    pub fn is_tuning(&self) -> bool {
        self.tuning_mode
    }

    /// Put the chip into a known state before the first tick.
    ///
    /// Clears every register, opens the volume and envelope, gates voice 1
    /// and blanks the LEDs. Register caches are dropped so the next tick
    /// rewrites everything.
    pub fn power_on<B, I, S, L>(&mut self, hw: &mut Hardware<B, I, S, L>) -> Result<(), ControlError>
    where
        B: ChipBus,
        I: InputPanel,
        S: SettingsStore,
        L: StatusLeds,
    {
        for address in 0..registers::REGISTER_COUNT {
            poke(&mut hw.bus, address, 0)?;
        }
        poke(&mut hw.bus, registers::MODE_VOL, registers::MASTER_VOLUME)?;
        poke(&mut hw.bus, registers::V1_ATTACK_DECAY, registers::ATTACK_DECAY_FAST)?;
        poke(&mut hw.bus, registers::V1_SUSTAIN_RELEASE, registers::SUSTAIN_FULL)?;
        poke(&mut hw.bus, registers::V1_CONTROL, registers::POWER_ON_CONTROL)?;
        hw.leds.show(LedMask::OFF).map_err(|_| ControlError::Leds)?;

        self.state = SynthState {
            waveform: self.state.waveform,
            filter_type: self.state.filter_type,
            osc3_mode: self.state.osc3_mode,
            gate_off: self.state.gate_off,
            ..SynthState::default()
        };
        self.first_tick = true;

        #[cfg(feature = "defmt")]
        defmt::debug!("sound chip initialised");

        Ok(())
    }

    /// Run one control cycle and return the LED mask that was shown.
    ///
    /// # Errors
    ///
    /// Any hardware failure aborts the tick with the matching
    /// [`ControlError`]. State changes made before the failure are kept.
    pub fn tick<B, I, S, L>(&mut self, hw: &mut Hardware<B, I, S, L>) -> Result<LedMask, ControlError>
    where
        B: ChipBus,
        I: InputPanel,
        S: SettingsStore,
        L: StatusLeds,
    {
        let channels = self.config.channels;

        let pressed = self.read_switches(&mut hw.inputs)?;
        self.switches.begin_tick(pressed);

        let mut osc3_mode = self.state.osc3_mode;
        let mut resync_waveform = false;
        let mut resync_filter = false;
        let mut rearm = false;

        // ── Tuning mode ──────────────────────────────────────────────
        if self.switches.combo(Switch::Filter, Switch::RingSync) {
            // Consumed before saving: a failed save must not refire the combo.
            self.switches.consume(Switch::Filter);
            self.switches.consume(Switch::RingSync);
            if self.tuning_mode {
                // Stay in tuning mode until the offset is stored.
                save_tuning(&mut hw.store, self.tuning).map_err(|_| ControlError::Storage)?;
                self.tuning_mode = false;
            } else {
                self.tuning_mode = true;
                // The ring/sync press that started the combo may have
                // changed the modulation mode last tick.
                osc3_mode = Osc3Mode::Off;
            }

            #[cfg(feature = "defmt")]
            defmt::info!("tuning mode: {}, offset {}", self.tuning_mode, self.tuning.get());
        }

        if self.tuning_mode {
            if self.switches.is_pressed(Switch::Filter) {
                self.tuning.decrement();
            }
            if self.switches.is_pressed(Switch::RingSync) {
                self.tuning.increment();
            }
        }

        // ── Gate mute ────────────────────────────────────────────────
        if self.switches.combo(Switch::Waveform, Switch::RingSync) {
            self.switches.consume(Switch::Waveform);
            if !self.state.gate_off {
                poke(&mut hw.bus, registers::V1_SUSTAIN_RELEASE, registers::SUSTAIN_MUTED)?;
                self.state.gate_off = true;
                resync_waveform = true;
            }
        }

        // ── Filter type ──────────────────────────────────────────────
        if self.switches.is_fresh(Switch::Filter) {
            if !self.tuning_mode {
                self.state.filter_type = self.state.filter_type.next();
                resync_filter = true;
            }
            self.switches.consume(Switch::Filter);
        }

        if self.first_tick {
            self.first_tick = false;
            resync_filter = true;
            resync_waveform = true;
        }

        // ── Waveform ─────────────────────────────────────────────────
        let mut waveform = self.state.waveform;
        if self.switches.is_fresh(Switch::Waveform) {
            if self.state.gate_off {
                poke(&mut hw.bus, registers::V1_SUSTAIN_RELEASE, registers::SUSTAIN_FULL)?;
                self.state.gate_off = false;
                resync_waveform = true;
            } else {
                waveform = waveform.next();
                rearm = true;
            }
            self.switches.consume(Switch::Waveform);
        }

        if let Some(selected) = Waveform::from_pot(read_sample(&mut hw.inputs, channels.waveform_pot)?) {
            waveform = selected;
            if waveform != self.state.waveform {
                rearm = true;
            }
        }

        if waveform != self.state.waveform {
            self.state.waveform = waveform;
            resync_waveform = true;
        }

        // ── Continuous controls ──────────────────────────────────────
        let main_cv = read_sample(&mut hw.inputs, channels.main_cv)?;
        if self.state.main_cv != Some(main_cv) || self.tuning_mode {
            self.state.main_cv = Some(main_cv);
            let (low, high) = registers::word_bytes(translate(main_cv, self.tuning));
            poke(&mut hw.bus, registers::V1_FREQ_LO, low)?;
            poke(&mut hw.bus, registers::V1_FREQ_HI, high)?;
        }

        let pulse_width = state::pulse_width(read_sample(&mut hw.inputs, channels.pulse_width)?);
        if self.state.pulse_width != Some(pulse_width) {
            let (low, high) = registers::word_bytes(pulse_width);
            poke(&mut hw.bus, registers::V1_PW_LO, low)?;
            poke(&mut hw.bus, registers::V1_PW_HI, high)?;
            self.state.pulse_width = Some(pulse_width);
        }

        let cutoff = state::filter_cutoff(read_sample(&mut hw.inputs, channels.cutoff)?);
        if self.state.filter_cutoff != Some(cutoff) {
            let (low, high) = registers::cutoff_bytes(cutoff);
            poke(&mut hw.bus, registers::FC_LO, low)?;
            poke(&mut hw.bus, registers::FC_HI, high)?;
            self.state.filter_cutoff = Some(cutoff);
        }

        let resonance = state::resonance(read_sample(&mut hw.inputs, channels.resonance)?);
        if self.state.resonance != Some(resonance) {
            poke(&mut hw.bus, registers::RES_FILT, registers::resonance_routing(resonance))?;
            self.state.resonance = Some(resonance);
        }

        if resync_filter {
            poke(
                &mut hw.bus,
                registers::MODE_VOL,
                registers::mode_volume(self.state.filter_type.mode_bits()),
            )?;
        }

        // ── Oscillator 3 modulation ──────────────────────────────────
        if self.switches.is_fresh(Switch::RingSync) {
            if !self.tuning_mode && !self.state.gate_off {
                osc3_mode = osc3_mode.next();
                if osc3_mode == Osc3Mode::Off {
                    resync_waveform = true;
                }
            }
            self.switches.consume(Switch::RingSync);
        }

        let select = read_sample(&mut hw.inputs, channels.ring_sync_select)?.get();
        if select <= SELECT_OFF_MAX {
            if osc3_mode != Osc3Mode::Off {
                osc3_mode = Osc3Mode::Off;
                resync_waveform = true;
                rearm = true;
            }
        } else if select > SELECT_DEAD_ZONE_MAX {
            osc3_mode = if select < SELECT_RING_MIN {
                Osc3Mode::Sync
            } else {
                Osc3Mode::Ring
            };
            if osc3_mode != self.state.osc3_mode {
                rearm = true;
            }
        }

        if osc3_mode != Osc3Mode::Off {
            let osc3_cv = read_sample(&mut hw.inputs, channels.osc3_cv)?;
            if self.state.osc3_cv != Some(osc3_cv) {
                self.state.osc3_cv = Some(osc3_cv);
                let (low, high) = registers::word_bytes(translate(osc3_cv, TuningOffset::new(0)));
                poke(&mut hw.bus, registers::V3_FREQ_LO, low)?;
                poke(&mut hw.bus, registers::V3_FREQ_HI, high)?;
            }
        }

        // ── Voice control ────────────────────────────────────────────
        let waveform = self.state.waveform;
        if rearm {
            poke(&mut hw.bus, registers::V1_CONTROL, VoiceControl::idle(waveform).bits())?;
        }

        let mode_changed = osc3_mode != self.state.osc3_mode;
        if resync_waveform || mode_changed {
            let gate = !self.state.gate_off;

            if osc3_mode == Osc3Mode::Off && mode_changed {
                poke(&mut hw.bus, registers::V3_CONTROL, VoiceControl::idle(waveform).bits())?;
            }

            match osc3_mode {
                Osc3Mode::Ring => {
                    let carrier = VoiceControl {
                        waveform: Waveform::Triangle,
                        ring: true,
                        sync: false,
                        gate,
                    };
                    let modulator = VoiceControl {
                        gate,
                        ..VoiceControl::idle(waveform)
                    };
                    poke(&mut hw.bus, registers::V1_CONTROL, carrier.bits())?;
                    poke(&mut hw.bus, registers::V3_CONTROL, modulator.bits())?;
                }
                Osc3Mode::Sync | Osc3Mode::Off => {
                    let control = VoiceControl {
                        waveform,
                        ring: false,
                        sync: osc3_mode == Osc3Mode::Sync,
                        gate,
                    };
                    poke(&mut hw.bus, registers::V1_CONTROL, control.bits())?;
                }
            }
        }

        #[cfg(feature = "defmt")]
        {
            if mode_changed {
                defmt::debug!("osc3 mode {} -> {}", self.state.osc3_mode, osc3_mode);
            }
        }
        self.state.osc3_mode = osc3_mode;

        // ── Persistence ──────────────────────────────────────────────
        if !pressed.is_empty() {
            save_settings(&mut hw.store, self.packed_settings()).map_err(|_| ControlError::Storage)?;
        }
        self.switches.end_tick();

        // ── LEDs ─────────────────────────────────────────────────────
        let mask = LedMask::status(&self.state, self.tuning_mode);
        hw.leds.show(mask).map_err(|_| ControlError::Leds)?;
        Ok(mask)
    }

    fn packed_settings(&self) -> PackedSettings {
        PackedSettings {
            waveform: self.state.waveform,
            filter_type: self.state.filter_type,
            osc3_mode: self.state.osc3_mode,
        }
    }

    fn read_switches<I: InputPanel>(&self, inputs: &mut I) -> Result<SwitchMask, ControlError> {
        let mut mask = SwitchMask::EMPTY;
        for switch in Switch::ALL {
            let channel = self.config.channels.switch(switch);
            if inputs.read_digital(channel).map_err(|_| ControlError::Input)? {
                mask.insert(switch);
            }
        }
        Ok(mask)
    }
}

fn poke<B: ChipBus>(bus: &mut B, address: u8, data: u8) -> Result<(), ControlError> {
    bus.write_register(address, data).map_err(|_| ControlError::Bus)
}

fn read_sample<I: InputPanel>(inputs: &mut I, channel: u8) -> Result<Sample, ControlError> {
    inputs
        .read_analog(channel)
        .map(Sample::new)
        .map_err(|_| ControlError::Input)
}
