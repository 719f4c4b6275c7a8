//! Recording fake host shared by the integration tests.
//!
//! Every resource handed to the driver writes into one trace so tests can
//! assert on the exact interleaving of supplies, lines, DSI packets and
//! delays.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin, PinState};
use lt070me05000::{
    Backlight, BacklightPower, Device, DsiConfig, DsiHost, Lt070me05000, ModeFlag, ModeFlags,
    PanelConfig, PanelHost, Pins, RegulatorBulk,
};

pub const EIO: i32 = -5;
pub const ENODEV: i32 = -19;
pub const ENOENT: i32 = -2;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Dcs(u8, Vec<u8>),
    Generic(Vec<u8>),
    LowPower(bool),
    SupplyEnable,
    SupplyDisable,
    Pin(&'static str, PinState),
    DelayMs(u32),
    DelayUs(u32),
    DelayNs(u32),
    Backlight(BacklightPower),
    BacklightUpdate,
    Attach(DsiConfig),
    Detach,
    PanelAdd,
    PanelDetach,
    PanelRemove,
}

#[derive(Default)]
pub struct State {
    pub trace: Vec<Event>,
    pub flags: ModeFlags,
    /// DSI writes issued so far
    pub transfers: usize,
    /// Fail the n-th DSI write (1-based) with `EIO`
    pub fail_transfer_at: Option<usize>,
    pub fail_supply_enable: Option<i32>,
    pub fail_supply_disable: Option<i32>,
    pub fail_backlight: bool,
    pub fail_pins: bool,
    pub fail_regulator_get: Option<i32>,
    pub fail_add_panel: Option<i32>,
    pub fail_attach: Option<i32>,
    pub fail_detach: Option<i32>,
    pub missing: Vec<&'static str>,
    pub no_backlight: bool,
    pub requested_supplies: Vec<&'static str>,
    pub requested_lines: Vec<&'static str>,
}

/// Handle to the shared trace
#[derive(Clone, Default)]
pub struct Bus(Rc<RefCell<State>>);

impl Bus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(&self, f: impl FnOnce(&mut State)) -> &Self {
        f(&mut self.0.borrow_mut());
        self
    }

    pub fn state(&self) -> std::cell::Ref<'_, State> {
        self.0.borrow()
    }

    pub fn trace(&self) -> Vec<Event> {
        self.0.borrow().trace.clone()
    }

    pub fn take_trace(&self) -> Vec<Event> {
        std::mem::take(&mut self.0.borrow_mut().trace)
    }

    fn push(&self, event: Event) {
        self.0.borrow_mut().trace.push(event);
    }

    fn transfer(&self, event: Event) -> Result<(), i32> {
        let mut state = self.0.borrow_mut();
        state.transfers += 1;
        if state.fail_transfer_at == Some(state.transfers) {
            return Err(EIO);
        }
        state.trace.push(event);
        Ok(())
    }

    pub fn dsi(&self) -> FakeDsi {
        FakeDsi(self.clone())
    }

    pub fn supplies(&self) -> FakeSupplies {
        FakeSupplies(self.clone())
    }

    pub fn pin(&self, name: &'static str) -> FakePin {
        FakePin {
            bus: self.clone(),
            name,
        }
    }

    pub fn backlight(&self) -> FakeBacklight {
        FakeBacklight(self.clone())
    }

    pub fn delay(&self) -> FakeDelay {
        FakeDelay(self.clone())
    }

    pub fn device(&self) -> FakeDevice {
        FakeDevice(self.clone())
    }

    pub fn host(&self) -> FakeHost {
        FakeHost(self.clone())
    }

    /// All four lines wired
    pub fn pins(&self) -> Pins<FakePin> {
        Pins {
            vcc: Some(self.pin("vcc")),
            reset: Some(self.pin("reset")),
            pwm: Some(self.pin("pwm")),
            enable: Some(self.pin("enable")),
        }
    }

    /// Panel with every line and a backlight, built without probing
    pub fn panel(&self, config: PanelConfig) -> TestPanel {
        self.panel_with_pins(self.pins(), config)
    }

    pub fn panel_with_pins(&self, pins: Pins<FakePin>, config: PanelConfig) -> TestPanel {
        Lt070me05000::new(
            self.dsi(),
            self.supplies(),
            pins,
            Some(self.backlight()),
            self.delay(),
            config,
        )
    }
}

pub type TestPanel = Lt070me05000<FakeDsi, FakeSupplies, FakePin, FakeBacklight, FakeDelay>;

pub struct FakeDsi(Bus);

impl DsiHost for FakeDsi {
    type Error = i32;

    fn mode_flags(&self) -> ModeFlags {
        self.0.state().flags
    }

    fn set_mode_flags(&mut self, flags: ModeFlags) {
        let mut state = self.0.0.borrow_mut();
        let was = state.flags.contains(ModeFlag::LowPowerMode);
        let now = flags.contains(ModeFlag::LowPowerMode);
        state.flags = flags;
        if was != now {
            state.trace.push(Event::LowPower(now));
        }
    }

    fn dcs_write(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
        self.0.transfer(Event::Dcs(command, params.to_vec()))
    }

    fn generic_write(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        self.0.transfer(Event::Generic(payload.to_vec()))
    }

    fn attach(&mut self, config: &DsiConfig) -> Result<(), Self::Error> {
        if let Some(code) = self.0.state().fail_attach {
            return Err(code);
        }
        self.0.push(Event::Attach(*config));
        Ok(())
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        if let Some(code) = self.0.state().fail_detach {
            return Err(code);
        }
        self.0.push(Event::Detach);
        Ok(())
    }
}

pub struct FakeSupplies(Bus);

impl RegulatorBulk for FakeSupplies {
    type Error = i32;

    fn enable(&mut self) -> Result<(), Self::Error> {
        if let Some(code) = self.0.state().fail_supply_enable {
            return Err(code);
        }
        self.0.push(Event::SupplyEnable);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        if let Some(code) = self.0.state().fail_supply_disable {
            return Err(code);
        }
        self.0.push(Event::SupplyDisable);
        Ok(())
    }
}

pub struct FakePin {
    bus: Bus,
    name: &'static str,
}

impl ErrorType for FakePin {
    type Error = ErrorKind;
}

impl OutputPin for FakePin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set_state(PinState::Low)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set_state(PinState::High)
    }

    fn set_state(&mut self, state: PinState) -> Result<(), Self::Error> {
        if self.bus.state().fail_pins {
            return Err(ErrorKind::Other);
        }
        self.bus.push(Event::Pin(self.name, state));
        Ok(())
    }
}

pub struct FakeBacklight(Bus);

impl Backlight for FakeBacklight {
    type Error = i32;

    fn set_power(&mut self, power: BacklightPower) {
        self.0.push(Event::Backlight(power));
    }

    fn update_status(&mut self) -> Result<(), Self::Error> {
        if self.0.state().fail_backlight {
            return Err(EIO);
        }
        self.0.push(Event::BacklightUpdate);
        Ok(())
    }
}

pub struct FakeDelay(Bus);

impl DelayNs for FakeDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.0.push(Event::DelayNs(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.0.push(Event::DelayUs(us));
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.push(Event::DelayMs(ms));
    }
}

pub struct FakeDevice(Bus);

impl Device for FakeDevice {
    type Supplies = FakeSupplies;
    type Pin = FakePin;
    type Backlight = FakeBacklight;
    type Error = i32;

    fn regulator_bulk_get(&mut self, names: &[&'static str]) -> Result<Self::Supplies, Self::Error> {
        let mut state = self.0.0.borrow_mut();
        state.requested_supplies.extend_from_slice(names);
        match state.fail_regulator_get {
            Some(code) => Err(code),
            None => Ok(self.0.supplies()),
        }
    }

    fn gpio_get(&mut self, con_id: &'static str) -> Result<Self::Pin, Self::Error> {
        let mut state = self.0.0.borrow_mut();
        state.requested_lines.push(con_id);
        if state.missing.contains(&con_id) {
            return Err(ENOENT);
        }
        Ok(self.0.pin(con_id))
    }

    fn backlight(&mut self) -> Option<Self::Backlight> {
        if self.0.state().no_backlight {
            None
        } else {
            Some(self.0.backlight())
        }
    }
}

pub struct FakeHost(Bus);

impl PanelHost for FakeHost {
    type Error = i32;

    fn add_panel(&mut self) -> Result<(), Self::Error> {
        if let Some(code) = self.0.state().fail_add_panel {
            return Err(code);
        }
        self.0.push(Event::PanelAdd);
        Ok(())
    }

    fn detach_panel(&mut self) {
        self.0.push(Event::PanelDetach);
    }

    fn remove_panel(&mut self) {
        self.0.push(Event::PanelRemove);
    }
}

/// Every DSI packet of the initialization sequence, in order
pub fn init_transfers() -> Vec<Event> {
    vec![
        Event::Dcs(0x01, vec![]),
        Event::Dcs(0x3A, vec![0x70]),
        Event::Dcs(0x2A, vec![0x00, 0x00, 0x04, 0xAF]),
        Event::Dcs(0x2B, vec![0x00, 0x00, 0x07, 0x7F]),
        Event::Dcs(0x35, vec![0x00]),
        Event::Dcs(0x44, vec![0x03, 0x00]),
        Event::Dcs(0x51, vec![0xFF]),
        Event::Dcs(0x53, vec![0x24]),
        Event::Dcs(0x55, vec![0x00]),
        Event::Dcs(0x11, vec![]),
        Event::Generic(vec![0xB0, 0x00]),
        Event::Generic(vec![0xB3, 0x26, 0x08, 0x00, 0x20, 0x00]),
        Event::Generic(vec![0xB0, 0x03]),
    ]
}

/// Number of DSI writes in a full `prepare` (init + display on)
pub const PREPARE_TRANSFERS: usize = 14;

/// Only the DSI packets of a trace
pub fn transfers(trace: &[Event]) -> Vec<Event> {
    trace
        .iter()
        .filter(|e| matches!(e, Event::Dcs(..) | Event::Generic(..)))
        .cloned()
        .collect()
}

/// Only the line writes of a trace
pub fn pin_writes(trace: &[Event]) -> Vec<Event> {
    trace
        .iter()
        .filter(|e| matches!(e, Event::Pin(..)))
        .cloned()
        .collect()
}
