//! The panel capability

use crate::mode::ModeSink;

/// Entry points the display subsystem drives a panel through
///
/// The expected call order is `prepare` → `enable` → `disable` →
/// `unprepare`. Every method is idempotent: calling it again in the state it
/// already produced is a successful no-op.
pub trait Panel {
    type Error;

    /// Turn the backlight off
    fn disable(&mut self) -> Result<(), Self::Error>;

    /// Stop the display and remove power
    fn unprepare(&mut self) -> Result<(), Self::Error>;

    /// Apply power and run the initialization sequence
    fn prepare(&mut self) -> Result<(), Self::Error>;

    /// Turn the backlight on
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Add the supported modes to `sink`, returning how many were added
    fn get_modes(&mut self, sink: &mut dyn ModeSink) -> Result<usize, Self::Error>;
}
