//! Device binding
//!
//! Glue between the panel and the platform it is bound on: compatible
//! matching, resource acquisition at probe time, and the remove/shutdown
//! paths.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lt070me05000::{driver, PanelConfig};
//!
//! if driver::matches(node.compatible()) {
//!     let mut panel = driver::probe(dsi, &mut device, &mut host, delay, PanelConfig::default())?;
//!     // ...
//!     let (dsi, supplies, pins, backlight, delay) = driver::remove(panel, &mut host);
//! }
//! ```

use core::fmt::Debug;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;

use crate::backlight::Backlight;
use crate::config::PanelConfig;
use crate::display::Lt070me05000;
use crate::dsi::DsiHost;
use crate::error::ProbeError;
use crate::panel::Panel;
use crate::pins::{ACQUIRE_ORDER, Pins};
use crate::power::RegulatorBulk;

/// Driver name
pub const DRIVER_NAME: &str = "panel-jdi-lt070me05000";

/// Compatible strings this driver binds to
pub const OF_MATCH: &[&str] = &["jdi,lt070me05000"];

/// Whether a device with the given compatible string is handled here
pub fn matches(compatible: &str) -> bool {
    OF_MATCH.contains(&compatible)
}

/// Resources of the device being bound
pub trait Device {
    type Supplies: RegulatorBulk;
    type Pin: OutputPin;
    type Backlight: Backlight;
    type Error: Debug;

    /// Acquire the named supplies as one group
    fn regulator_bulk_get(&mut self, names: &[&'static str]) -> Result<Self::Supplies, Self::Error>;

    /// Acquire a GPIO line by connection id
    fn gpio_get(&mut self, con_id: &'static str) -> Result<Self::Pin, Self::Error>;

    /// The backlight wired to this panel, if any
    fn backlight(&mut self) -> Option<Self::Backlight>;
}

/// The display subsystem panels register with
pub trait PanelHost {
    type Error: Debug;

    /// Make the panel available to display pipelines
    fn add_panel(&mut self) -> Result<(), Self::Error>;

    /// Detach the panel from the connector it drives
    fn detach_panel(&mut self);

    /// Withdraw the panel
    fn remove_panel(&mut self);
}

/// Panel type produced by [`probe`] for a given device
pub type BoundPanel<DSI, DEV, D> = Lt070me05000<
    DSI,
    <DEV as Device>::Supplies,
    <DEV as Device>::Pin,
    <DEV as Device>::Backlight,
    D,
>;

/// Bind the driver to a device
///
/// Configures the link, acquires the supplies (fatal on failure), the four
/// control lines (each optional), and the backlight (optional), registers
/// the panel with `host` and finally attaches to the DSI host.
pub fn probe<DSI, DEV, H, D>(
    mut dsi: DSI,
    device: &mut DEV,
    host: &mut H,
    delay: D,
    config: PanelConfig,
) -> Result<BoundPanel<DSI, DEV, D>, ProbeError<DEV::Error, H::Error, DSI::Error>>
where
    DSI: DsiHost,
    DEV: Device,
    H: PanelHost,
    D: DelayNs,
{
    const SUPPLIES: [&str; 3] = ["power", "vddp", "dcdc_en"];

    dsi.set_mode_flags(config.dsi.mode_flags);

    let supplies = device.regulator_bulk_get(&SUPPLIES).map_err(|e| {
        log::error!("[PANEL] failed to init regulator: {:?}", e);
        ProbeError::Regulator(e)
    })?;

    let mut pins = Pins::none();
    for line in ACQUIRE_ORDER {
        match device.gpio_get(line.name()) {
            Ok(mut pin) => {
                if let Err(e) = pin.set_low() {
                    log::warn!("[PANEL] {}-gpio set failed: {:?}", line.name(), e);
                }
                pins.set(line, Some(pin));
            }
            Err(e) => {
                log::error!("[PANEL] cannot get {}-gpio: {:?}", line.name(), e);
            }
        }
    }

    let backlight = device.backlight();

    host.add_panel().map_err(ProbeError::Host)?;

    if let Err(e) = dsi.attach(&config.dsi) {
        log::error!("[PANEL] failed to attach to DSI host: {:?}", e);
        host.remove_panel();
        return Err(ProbeError::Transport(e));
    }

    log::info!(
        "[PANEL] {} bound: {}-lane, backlight={}",
        DRIVER_NAME,
        config.dsi.lanes,
        backlight.is_some()
    );

    Ok(Lt070me05000::new(dsi, supplies, pins, backlight, delay, config))
}

/// Resources handed back by [`remove`]
pub type Released<DSI, R, P, B, D> = (DSI, R, Pins<P>, Option<B>, D);

/// Unbind the driver
///
/// Switches the backlight off, detaches from the DSI host and withdraws the
/// panel. Failures are logged; the unbind always completes. The panel is
/// consumed and its resources are returned.
pub fn remove<DSI, R, P, B, D, H>(
    mut panel: Lt070me05000<DSI, R, P, B, D>,
    host: &mut H,
) -> Released<DSI, R, P, B, D>
where
    DSI: DsiHost,
    R: RegulatorBulk,
    P: OutputPin,
    B: Backlight,
    D: DelayNs,
    H: PanelHost,
{
    if let Err(e) = panel.disable() {
        log::error!("[PANEL] failed to disable panel: {:?}", e);
    }

    if let Err(e) = panel.dsi_mut().detach() {
        log::error!("[PANEL] failed to detach from DSI host: {:?}", e);
    }

    host.detach_panel();
    host.remove_panel();

    panel.release()
}

/// Quiesce the panel before the system powers off
///
/// Only the backlight is switched off; the link stays attached.
pub fn shutdown<DSI, R, P, B, D>(panel: &mut Lt070me05000<DSI, R, P, B, D>)
where
    DSI: DsiHost,
    R: RegulatorBulk,
    P: OutputPin,
    B: Backlight,
    D: DelayNs,
{
    if let Err(e) = panel.disable() {
        log::error!("[PANEL] failed to disable panel: {:?}", e);
    }
}
