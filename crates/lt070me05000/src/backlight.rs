//! Backlight device notification

use core::fmt::Debug;

/// Requested backlight power state
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BacklightPower {
    /// Backlight on
    Unblank,
    /// Backlight off
    Powerdown,
}

/// A backlight device the panel forwards enable/disable to
pub trait Backlight {
    /// Error type for status updates
    type Error: Debug;

    /// Set the requested power state; takes effect on the next
    /// [`update_status`](Backlight::update_status)
    fn set_power(&mut self, power: BacklightPower);

    /// Apply the requested state to the hardware
    fn update_status(&mut self) -> Result<(), Self::Error>;
}
