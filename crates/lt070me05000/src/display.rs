//! Core panel operations

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{OutputPin, PinState};

use crate::backlight::{Backlight, BacklightPower};
use crate::command::*;
use crate::config::PanelConfig;
use crate::dcs::{Dcs, TearMode};
use crate::driver::Released;
use crate::dsi::DsiHost;
use crate::error::Error;
use crate::mode::{DEFAULT_MODE, DisplayMode, ModeSink};
use crate::panel::Panel;
use crate::pins::{POWER_OFF_ORDER, POWER_ON_ORDER, Pins, ROLLBACK_ORDER};
use crate::power::RegulatorBulk;

/// Settle time after the supplies come up
const SUPPLY_SETTLE_MS: u32 = 20;
/// Settle time after each control line is raised
const LINE_SETTLE_US: u32 = 10;
/// Settle time after the display is switched off
const POWER_OFF_SETTLE_MS: u32 = 100;

/// Driver for one LT070ME05000 panel
///
/// Owns the DSI link, supplies, control lines, backlight and delay for the
/// lifetime of the binding. Built by [`probe`](crate::driver::probe), or
/// directly with [`new`](Self::new) when the resources are already at hand.
pub struct Lt070me05000<DSI, R, P, B, D> {
    dsi: DSI,
    supplies: R,
    pins: Pins<P>,
    backlight: Option<B>,
    delay: D,
    config: PanelConfig,
    mode: &'static DisplayMode,
    prepared: bool,
    enabled: bool,
}

impl<DSI, R, P, B, D> Lt070me05000<DSI, R, P, B, D>
where
    DSI: DsiHost,
    R: RegulatorBulk,
    P: OutputPin,
    B: Backlight,
    D: DelayNs,
{
    /// Create a panel in the powered-off state
    pub fn new(
        dsi: DSI,
        supplies: R,
        pins: Pins<P>,
        backlight: Option<B>,
        delay: D,
        config: PanelConfig,
    ) -> Self {
        Self {
            dsi,
            supplies,
            pins,
            backlight,
            delay,
            config,
            mode: &DEFAULT_MODE,
            prepared: false,
            enabled: false,
        }
    }

    /// Run the initialization command stream
    ///
    /// Soft reset, frame window, tearing effect, brightness, sleep out, then
    /// the manufacturer writes. Stops at the first failing write.
    fn init(&mut self) -> Result<(), DSI::Error> {
        let (width, height) = self.mode.resolution();

        self.dsi.set_low_power(true);

        self.dsi.soft_reset()?;
        self.delay.delay_ms(10);

        self.dsi.set_pixel_format(PIXEL_FORMAT)?;
        self.dsi.set_column_address(0, width - 1)?;
        self.dsi.set_page_address(0, height - 1)?;

        self.dsi.set_tear_on(TearMode::VBlank)?;
        self.delay.delay_ms(5);
        self.dsi.set_tear_scanline(TEAR_SCANLINE)?;

        self.dsi.dcs_write(SET_DISPLAY_BRIGHTNESS, &[MAX_BRIGHTNESS])?;
        self.dsi.dcs_write(WRITE_CONTROL_DISPLAY, &[CONTROL_DISPLAY])?;
        self.dsi.dcs_write(WRITE_POWER_SAVE, &[POWER_SAVE_OFF])?;

        self.dsi.exit_sleep_mode()?;
        self.delay.delay_ms(120);

        for (payload, settle_ms) in VENDOR_INIT {
            self.dsi.generic_write(payload)?;
            if settle_ms > 0 {
                self.delay.delay_ms(settle_ms);
            }
        }

        Ok(())
    }

    fn on(&mut self) -> Result<(), DSI::Error> {
        self.dsi.set_low_power(true);
        self.dsi.set_display_on()
    }

    fn off(&mut self) -> Result<(), DSI::Error> {
        self.dsi.set_low_power(false);
        self.dsi.set_display_off()?;
        self.dsi.enter_sleep_mode()?;
        self.dsi.set_tear_off()?;
        self.delay.delay_ms(POWER_OFF_SETTLE_MS);
        Ok(())
    }

    /// Undo a partial bring-up
    fn power_off_lines(&mut self) {
        self.pins.deassert(&ROLLBACK_ORDER);

        if self.config.rollback_regulators {
            if let Err(e) = self.supplies.disable() {
                log::error!("[PANEL] regulator disable failed: {:?}", e);
            }
        }
    }

    fn set_backlight(&mut self, power: BacklightPower) {
        if let Some(backlight) = self.backlight.as_mut() {
            backlight.set_power(power);
            if let Err(e) = backlight.update_status() {
                log::warn!("[PANEL] backlight update failed: {:?}", e);
            }
        }
    }

    /// Whether power is applied and the controller initialized
    pub fn is_prepared(&self) -> bool {
        self.prepared
    }

    /// Whether the backlight has been switched on
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// The mode the panel is driven with
    pub fn mode(&self) -> &'static DisplayMode {
        self.mode
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Access the control lines
    pub fn pins(&self) -> &Pins<P> {
        &self.pins
    }

    pub fn has_backlight(&self) -> bool {
        self.backlight.is_some()
    }

    pub(crate) fn dsi_mut(&mut self) -> &mut DSI {
        &mut self.dsi
    }

    /// Give back the owned resources
    pub fn release(self) -> Released<DSI, R, P, B, D> {
        (self.dsi, self.supplies, self.pins, self.backlight, self.delay)
    }
}

impl<DSI, R, P, B, D> Panel for Lt070me05000<DSI, R, P, B, D>
where
    DSI: DsiHost,
    R: RegulatorBulk,
    P: OutputPin,
    B: Backlight,
    D: DelayNs,
{
    type Error = Error<DSI::Error, R::Error>;

    fn disable(&mut self) -> Result<(), Self::Error> {
        if !self.enabled {
            return Ok(());
        }

        log::debug!("[PANEL] disable");

        self.set_backlight(BacklightPower::Powerdown);
        self.enabled = false;

        Ok(())
    }

    fn unprepare(&mut self) -> Result<(), Self::Error> {
        if !self.prepared {
            return Ok(());
        }

        log::debug!("[PANEL] unprepare");

        if let Err(e) = self.off() {
            log::error!("[PANEL] failed to set panel off: {:?}", e);
            return Err(Error::Transport(e));
        }

        if let Err(e) = self.supplies.disable() {
            log::error!("[PANEL] regulator disable failed: {:?}", e);
            return Err(Error::Regulator(e));
        }

        self.pins.deassert(&POWER_OFF_ORDER);

        self.prepared = false;

        Ok(())
    }

    fn prepare(&mut self) -> Result<(), Self::Error> {
        if self.prepared {
            return Ok(());
        }

        log::debug!("[PANEL] prepare");

        if let Err(e) = self.supplies.enable() {
            log::error!("[PANEL] regulator enable failed: {:?}", e);
            return Err(Error::Regulator(e));
        }

        self.delay.delay_ms(SUPPLY_SETTLE_MS);

        for line in POWER_ON_ORDER {
            if self.pins.drive(line, PinState::High) {
                self.delay.delay_us(LINE_SETTLE_US);
            }
        }

        if let Err(e) = self.init() {
            log::error!("[PANEL] failed to init panel: {:?}", e);
            self.power_off_lines();
            return Err(Error::Transport(e));
        }

        if let Err(e) = self.on() {
            log::error!("[PANEL] failed to set panel on: {:?}", e);
            self.power_off_lines();
            return Err(Error::Transport(e));
        }

        self.prepared = true;

        Ok(())
    }

    fn enable(&mut self) -> Result<(), Self::Error> {
        if self.enabled {
            return Ok(());
        }

        log::debug!("[PANEL] enable");

        self.set_backlight(BacklightPower::Unblank);
        self.enabled = true;

        Ok(())
    }

    fn get_modes(&mut self, sink: &mut dyn ModeSink) -> Result<usize, Self::Error> {
        let mode = self.mode.duplicate();

        if let Err(e) = sink.add_probed(mode) {
            log::error!(
                "[PANEL] failed to add mode {}x{}@{}",
                self.mode.hdisplay,
                self.mode.vdisplay,
                self.mode.vrefresh
            );
            return Err(e.into());
        }

        Ok(1)
    }
}

#[cfg(feature = "graphics")]
impl<DSI, R, P, B, D> embedded_graphics_core::geometry::OriginDimensions
    for Lt070me05000<DSI, R, P, B, D>
{
    fn size(&self) -> embedded_graphics_core::geometry::Size {
        embedded_graphics_core::geometry::OriginDimensions::size(self.mode)
    }
}
