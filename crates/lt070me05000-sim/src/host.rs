//! Logging host the simulator binds the driver to.

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};
use lt070me05000::{
    Backlight, BacklightPower, Device, DsiConfig, DsiHost, ModeFlag, ModeFlags, PanelHost,
    RegulatorBulk,
};

/// Error code reported by injected failures (EIO)
const EIO: i32 = -5;
/// Error code reported for unwired lines (ENOENT)
const ENOENT: i32 = -2;

/// Negative errno, the way the host reports failures
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Errno(pub i32);

/// Failures to inject
#[derive(Default)]
pub struct Faults {
    pub missing: Vec<&'static str>,
    pub fail_transfer_at: Option<usize>,
    pub no_backlight: bool,
}

#[derive(Default)]
struct State {
    faults: Faults,
    flags: ModeFlags,
    transfers: usize,
    delayed_ns: u64,
}

#[derive(Clone)]
pub struct SimBus(Rc<RefCell<State>>);

impl SimBus {
    pub fn new(faults: Faults) -> Self {
        Self(Rc::new(RefCell::new(State {
            faults,
            ..Default::default()
        })))
    }

    pub fn dsi(&self) -> SimDsi {
        SimDsi(self.clone())
    }

    pub fn delay(&self) -> SimDelay {
        SimDelay(self.clone())
    }

    pub fn device(&self) -> SimDevice {
        SimDevice(self.clone())
    }

    pub fn host(&self) -> SimHost {
        SimHost
    }

    pub fn transfers(&self) -> usize {
        self.0.borrow().transfers
    }

    pub fn delayed_ms(&self) -> u64 {
        self.0.borrow().delayed_ns / 1_000_000
    }

    fn transfer(&self, kind: &str, bytes: &[u8]) -> Result<(), Errno> {
        let mut state = self.0.borrow_mut();
        state.transfers += 1;
        let lp = if state.flags.contains(ModeFlag::LowPowerMode) {
            "LP"
        } else {
            "HS"
        };
        if state.faults.fail_transfer_at == Some(state.transfers) {
            log::warn!("[DSI] #{} {kind} {bytes:02X?} ({lp}) -> injected failure", state.transfers);
            return Err(Errno(EIO));
        }
        log::trace!("[DSI] #{} {kind} {bytes:02X?} ({lp})", state.transfers);
        Ok(())
    }
}

pub struct SimDsi(SimBus);

impl DsiHost for SimDsi {
    type Error = Errno;

    fn mode_flags(&self) -> ModeFlags {
        self.0.0.borrow().flags
    }

    fn set_mode_flags(&mut self, flags: ModeFlags) {
        self.0.0.borrow_mut().flags = flags;
    }

    fn dcs_write(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
        let mut bytes = Vec::with_capacity(params.len() + 1);
        bytes.push(command);
        bytes.extend_from_slice(params);
        self.0.transfer("dcs", &bytes)
    }

    fn generic_write(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        self.0.transfer("generic", payload)
    }

    fn attach(&mut self, config: &DsiConfig) -> Result<(), Self::Error> {
        log::info!(
            "[DSI] attach: {} lanes, {:?} ({} bpp), flags {:?}",
            config.lanes,
            config.format,
            config.format.bits_per_pixel(),
            config.mode_flags
        );
        Ok(())
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        log::info!("[DSI] detach");
        Ok(())
    }
}

pub struct SimSupplies;

impl RegulatorBulk for SimSupplies {
    type Error = Errno;

    fn enable(&mut self) -> Result<(), Self::Error> {
        log::trace!("[REG] power, vddp, dcdc_en on");
        Ok(())
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        log::trace!("[REG] power, vddp, dcdc_en off");
        Ok(())
    }
}

pub struct SimPin(&'static str);

impl ErrorType for SimPin {
    type Error = Infallible;
}

impl OutputPin for SimPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        log::trace!("[GPIO] {} low", self.0);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        log::trace!("[GPIO] {} high", self.0);
        Ok(())
    }
}

pub struct SimBacklight {
    power: BacklightPower,
}

impl Backlight for SimBacklight {
    type Error = Errno;

    fn set_power(&mut self, power: BacklightPower) {
        self.power = power;
    }

    fn update_status(&mut self) -> Result<(), Self::Error> {
        log::trace!("[BL] {:?}", self.power);
        Ok(())
    }
}

pub struct SimDelay(SimBus);

impl DelayNs for SimDelay {
    fn delay_ns(&mut self, ns: u32) {
        log::trace!("[DELAY] {ns} ns");
        self.0.0.borrow_mut().delayed_ns += u64::from(ns);
    }

    fn delay_us(&mut self, us: u32) {
        log::trace!("[DELAY] {us} us");
        self.0.0.borrow_mut().delayed_ns += u64::from(us) * 1_000;
    }

    fn delay_ms(&mut self, ms: u32) {
        log::trace!("[DELAY] {ms} ms");
        self.0.0.borrow_mut().delayed_ns += u64::from(ms) * 1_000_000;
    }
}

pub struct SimDevice(SimBus);

impl Device for SimDevice {
    type Supplies = SimSupplies;
    type Pin = SimPin;
    type Backlight = SimBacklight;
    type Error = Errno;

    fn regulator_bulk_get(&mut self, names: &[&'static str]) -> Result<Self::Supplies, Self::Error> {
        log::info!("[REG] acquired {}", names.join(", "));
        Ok(SimSupplies)
    }

    fn gpio_get(&mut self, con_id: &'static str) -> Result<Self::Pin, Self::Error> {
        if self.0.0.borrow().faults.missing.contains(&con_id) {
            return Err(Errno(ENOENT));
        }
        Ok(SimPin(con_id))
    }

    fn backlight(&mut self) -> Option<Self::Backlight> {
        if self.0.0.borrow().faults.no_backlight {
            return None;
        }
        Some(SimBacklight {
            power: BacklightPower::Powerdown,
        })
    }
}

pub struct SimHost;

impl PanelHost for SimHost {
    type Error = Errno;

    fn add_panel(&mut self) -> Result<(), Self::Error> {
        log::info!("[HOST] panel added");
        Ok(())
    }

    fn detach_panel(&mut self) {
        log::info!("[HOST] panel detached");
    }

    fn remove_panel(&mut self) {
        log::info!("[HOST] panel removed");
    }
}
