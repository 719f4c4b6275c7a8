//! # LT070ME05000 Panel Driver
//!
//! A `no_std` driver for the JDI LT070ME05000, a 1200x1920 MIPI-DSI video
//! mode LCD panel (the panel of the 2013 Nexus 7).
//!
//! The driver owns the power-up and power-down recipe of the panel: three
//! regulators, four optional GPIO lines, a fixed DCS/vendor command stream
//! and the settle delays between them. Everything it talks to is supplied by
//! the host through traits:
//!
//! - [`DsiHost`] - the DSI link the commands are written to
//! - [`RegulatorBulk`] - the `power`, `vddp` and `dcdc_en` supplies
//! - [`OutputPin`](embedded_hal::digital::OutputPin) - the `vcc`, `reset`,
//!   `pwm` and `enable` lines
//! - [`Backlight`] - an optional backlight device
//! - [`DelayNs`](embedded_hal::delay::DelayNs) - settle delays
//!
//! ## Lifecycle
//!
//! ```text
//!   probe ──> prepare ──> enable ──> disable ──> unprepare ──> remove
//!             (power,     (backlight  (backlight  (display off,
//!              init, on)   on)         off)        power down)
//! ```
//!
//! [`prepare`](Panel::prepare)/[`unprepare`](Panel::unprepare) switch the
//! rails and run the command stream. [`enable`](Panel::enable) and
//! [`disable`](Panel::disable) only gate the backlight. Every entry point is
//! idempotent.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lt070me05000::{driver, Panel, PanelConfig};
//!
//! let mut panel = driver::probe(dsi, &mut device, &mut host, delay, PanelConfig::default())?;
//!
//! let mut modes: heapless::Vec<_, 4> = heapless::Vec::new();
//! panel.get_modes(&mut modes)?;
//!
//! panel.prepare()?;
//! panel.enable()?;
//! ```

#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod backlight;
pub mod command;
pub mod config;
pub mod dcs;
pub mod display;
pub mod driver;
pub mod dsi;
pub mod error;
pub mod mode;
pub mod panel;
pub mod pins;
pub mod power;

pub use backlight::{Backlight, BacklightPower};
pub use config::{Builder, PanelConfig};
pub use dcs::{Dcs, TearMode};
pub use display::Lt070me05000;
pub use driver::{Device, PanelHost};
pub use dsi::{DsiConfig, DsiHost, ModeFlag, ModeFlags, PixelFormat};
pub use error::{Error, OutOfMemory, ProbeError};
pub use mode::{DEFAULT_MODE, DisplayMode, ModeSink};
pub use panel::Panel;
pub use pins::{Line, Pins};
pub use power::RegulatorBulk;
