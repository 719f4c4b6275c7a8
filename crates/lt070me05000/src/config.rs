//! Panel configuration and builder

use crate::dsi::DsiConfig;

/// Panel configuration
///
/// Use [`Builder`] to create a `PanelConfig`, or take the defaults.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelConfig {
    /// Link parameters requested at attach time
    pub dsi: DsiConfig,
    /// Also switch the supplies off when bring-up fails
    ///
    /// By default a failed [`prepare`](crate::Panel::prepare) only drops the
    /// `reset`, `enable` and `vcc` lines and leaves the rails on.
    pub rollback_regulators: bool,
}

/// Builder for constructing panel configuration
///
/// # Example
///
/// ```
/// use lt070me05000::Builder;
///
/// let config = Builder::new().rollback_regulators(true).build();
/// assert!(config.rollback_regulators);
/// assert_eq!(config.dsi.lanes, 4);
/// ```
#[derive(Default)]
pub struct Builder {
    rollback_regulators: bool,
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the supplies off again when bring-up fails
    pub fn rollback_regulators(mut self, value: bool) -> Self {
        self.rollback_regulators = value;
        self
    }

    /// Build the configuration
    pub fn build(self) -> PanelConfig {
        PanelConfig {
            dsi: DsiConfig::default(),
            rollback_regulators: self.rollback_regulators,
        }
    }
}
