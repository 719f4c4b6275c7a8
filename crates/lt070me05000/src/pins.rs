//! Optional control lines
//!
//! The panel has four GPIO-driven inputs. Boards wire any subset of them, so
//! each is held as an `Option`: a missing line is simply skipped by every
//! sequence.
//!
//! | line | role |
//! |---|---|
//! | `vcc` | logic supply switch |
//! | `reset` | controller reset (active low) |
//! | `pwm` | backlight PWM enable |
//! | `enable` | panel enable |

use embedded_hal::digital::{OutputPin, PinState};

/// One of the panel's control lines
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Line {
    Vcc,
    Reset,
    Pwm,
    Enable,
}

impl Line {
    /// Connection id used when requesting the line from the device
    pub const fn name(self) -> &'static str {
        match self {
            Line::Vcc => "vcc",
            Line::Reset => "reset",
            Line::Pwm => "pwm",
            Line::Enable => "enable",
        }
    }
}

/// Lines driven high, in order, while powering up
pub const POWER_ON_ORDER: [Line; 4] = [Line::Vcc, Line::Reset, Line::Pwm, Line::Enable];

/// Lines driven low, in order, after the supplies are switched off
pub const POWER_OFF_ORDER: [Line; 3] = [Line::Vcc, Line::Reset, Line::Enable];

/// Lines driven low, in order, when bring-up fails
pub const ROLLBACK_ORDER: [Line; 3] = [Line::Reset, Line::Enable, Line::Vcc];

/// Order lines are requested in at probe time
pub const ACQUIRE_ORDER: [Line; 4] = [Line::Vcc, Line::Reset, Line::Enable, Line::Pwm];

/// The panel's control lines
#[derive(Debug)]
pub struct Pins<P> {
    pub vcc: Option<P>,
    pub reset: Option<P>,
    pub pwm: Option<P>,
    pub enable: Option<P>,
}

impl<P> Default for Pins<P> {
    fn default() -> Self {
        Self::none()
    }
}

impl<P> Pins<P> {
    /// No line wired
    pub const fn none() -> Self {
        Self {
            vcc: None,
            reset: None,
            pwm: None,
            enable: None,
        }
    }

    pub fn get(&self, line: Line) -> Option<&P> {
        match line {
            Line::Vcc => self.vcc.as_ref(),
            Line::Reset => self.reset.as_ref(),
            Line::Pwm => self.pwm.as_ref(),
            Line::Enable => self.enable.as_ref(),
        }
    }

    pub fn get_mut(&mut self, line: Line) -> Option<&mut P> {
        match line {
            Line::Vcc => self.vcc.as_mut(),
            Line::Reset => self.reset.as_mut(),
            Line::Pwm => self.pwm.as_mut(),
            Line::Enable => self.enable.as_mut(),
        }
    }

    /// Store a line, replacing any previous one
    pub fn set(&mut self, line: Line, pin: Option<P>) {
        match line {
            Line::Vcc => self.vcc = pin,
            Line::Reset => self.reset = pin,
            Line::Pwm => self.pwm = pin,
            Line::Enable => self.enable = pin,
        }
    }

    pub fn is_present(&self, line: Line) -> bool {
        self.get(line).is_some()
    }
}

impl<P: OutputPin> Pins<P> {
    /// Drive a line if it is wired
    ///
    /// Returns `false` when the line is absent. A pin error is logged and
    /// otherwise ignored: the sequences treat line writes as infallible.
    pub fn drive(&mut self, line: Line, state: PinState) -> bool {
        let Some(pin) = self.get_mut(line) else {
            return false;
        };
        if let Err(e) = pin.set_state(state) {
            log::warn!("[PANEL] {}-gpio set failed: {:?}", line.name(), e);
        }
        true
    }

    /// Drive every wired line of `lines` low, in order
    pub fn deassert(&mut self, lines: &[Line]) {
        for &line in lines {
            self.drive(line, PinState::Low);
        }
    }
}
