//! Supply rails

use core::fmt::Debug;

/// A group of regulators switched together
///
/// The panel is fed by three supplies, `power`, `vddp` and `dcdc_en`, that
/// are always enabled and disabled as one group.
pub trait RegulatorBulk {
    /// Error type reported by the regulator framework
    type Error: Debug;

    /// Enable every supply in the group
    ///
    /// On failure no supply of the group is left enabled.
    fn enable(&mut self) -> Result<(), Self::Error>;

    /// Disable every supply in the group
    fn disable(&mut self) -> Result<(), Self::Error>;
}

impl<T: RegulatorBulk + ?Sized> RegulatorBulk for &mut T {
    type Error = T::Error;

    fn enable(&mut self) -> Result<(), Self::Error> {
        T::enable(self)
    }

    fn disable(&mut self) -> Result<(), Self::Error> {
        T::disable(self)
    }
}
