//! DSI link abstraction
//!
//! This module provides the [`DsiHost`] trait the driver writes its command
//! stream through, and the [`DsiConfig`] the panel asks the host for when it
//! attaches.
//!
//! ## Example
//!
//! ```rust,ignore
//! use lt070me05000::{DsiHost, Dcs};
//!
//! // Raw DCS write: command byte + parameters
//! dsi.dcs_write(0x51, &[0xFF])?;
//!
//! // Generic (manufacturer) write: payload only
//! dsi.generic_write(&[0xB0, 0x00])?;
//!
//! // Typed helpers from the `Dcs` extension trait
//! dsi.set_display_on()?;
//! ```

use core::fmt::Debug;

use enumset::{EnumSet, EnumSetType};

/// DSI device mode flags
#[derive(Debug, EnumSetType)]
pub enum ModeFlag {
    /// Video mode (as opposed to command mode)
    Video,
    /// Send horizontal sync end packets
    VideoHse,
    /// Horizontal front porch as blanking packets
    VideoHfp,
    /// Horizontal back porch as blanking packets
    VideoHbp,
    /// Horizontal sync active as blanking packets
    VideoHsa,
    /// Clock lane may stop between transfers
    ClockNonContinuous,
    /// Transmit commands in low power mode
    LowPowerMode,
}

/// Set of [`ModeFlag`]s
pub type ModeFlags = EnumSet<ModeFlag>;

/// Pixel format on the DSI link
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PixelFormat {
    /// 24 bits per pixel
    #[default]
    Rgb888,
    /// 18 bits per pixel, loosely packed
    Rgb666,
    /// 18 bits per pixel, packed
    Rgb666Packed,
    /// 16 bits per pixel
    Rgb565,
}

impl PixelFormat {
    /// Bits per pixel on the wire
    pub const fn bits_per_pixel(self) -> u8 {
        match self {
            PixelFormat::Rgb888 | PixelFormat::Rgb666 => 24,
            PixelFormat::Rgb666Packed => 18,
            PixelFormat::Rgb565 => 16,
        }
    }
}

/// Link parameters the panel requests from the DSI host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DsiConfig {
    /// Number of data lanes
    pub lanes: u8,
    /// Pixel format
    pub format: PixelFormat,
    /// Mode flags
    pub mode_flags: ModeFlags,
}

impl Default for DsiConfig {
    fn default() -> Self {
        Self {
            lanes: 4,
            format: PixelFormat::Rgb888,
            mode_flags: ModeFlag::Video
                | ModeFlag::VideoHse
                | ModeFlag::VideoHfp
                | ModeFlag::VideoHbp
                | ModeFlag::VideoHsa
                | ModeFlag::ClockNonContinuous,
        }
    }
}

/// Trait for the DSI host the panel is connected to
///
/// Implementations forward packets to the DSI controller. A write returning
/// an error aborts whichever sequence issued it; the driver never retries.
pub trait DsiHost {
    /// Error type for link operations
    type Error: Debug;

    /// Current mode flags of the device
    fn mode_flags(&self) -> ModeFlags;

    /// Replace the mode flags of the device
    fn set_mode_flags(&mut self, flags: ModeFlags);

    /// Send a DCS command with its parameters
    fn dcs_write(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error>;

    /// Send a generic (manufacturer) write
    fn generic_write(&mut self, payload: &[u8]) -> Result<(), Self::Error>;

    /// Attach the device to the host with the given link parameters
    fn attach(&mut self, config: &DsiConfig) -> Result<(), Self::Error>;

    /// Detach the device from the host
    fn detach(&mut self) -> Result<(), Self::Error>;
}

impl<T: DsiHost + ?Sized> DsiHost for &mut T {
    type Error = T::Error;

    fn mode_flags(&self) -> ModeFlags {
        T::mode_flags(self)
    }

    fn set_mode_flags(&mut self, flags: ModeFlags) {
        T::set_mode_flags(self, flags)
    }

    fn dcs_write(&mut self, command: u8, params: &[u8]) -> Result<(), Self::Error> {
        T::dcs_write(self, command, params)
    }

    fn generic_write(&mut self, payload: &[u8]) -> Result<(), Self::Error> {
        T::generic_write(self, payload)
    }

    fn attach(&mut self, config: &DsiConfig) -> Result<(), Self::Error> {
        T::attach(self, config)
    }

    fn detach(&mut self) -> Result<(), Self::Error> {
        T::detach(self)
    }
}
