//! Display timing published to the display subsystem

use core::fmt::Write;

use crate::error::OutOfMemory;

/// Maximum length of a mode name
pub const DISPLAY_MODE_LEN: usize = 32;

/// Mode flags (sync polarities, interlace, ...)
///
/// The panel uses none; the field exists so consumers get the full
/// descriptor.
pub type SyncFlags = u32;

/// A display timing descriptor
///
/// Horizontal values are in pixels, vertical values in lines, `clock` in kHz.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayMode {
    pub clock: u32,
    pub hdisplay: u16,
    pub hsync_start: u16,
    pub hsync_end: u16,
    pub htotal: u16,
    pub vdisplay: u16,
    pub vsync_start: u16,
    pub vsync_end: u16,
    pub vtotal: u16,
    pub vrefresh: u16,
    pub flags: SyncFlags,
    /// `"<hdisplay>x<vdisplay>"` once named, empty before
    pub name: heapless::String<DISPLAY_MODE_LEN>,
}

/// The one mode the panel supports: 1200x1920@60
pub static DEFAULT_MODE: DisplayMode = DisplayMode {
    clock: 155_493,
    hdisplay: 1200,
    hsync_start: 1200 + 48,
    hsync_end: 1200 + 48 + 32,
    htotal: 1200 + 48 + 32 + 60,
    vdisplay: 1920,
    vsync_start: 1920 + 3,
    vsync_end: 1920 + 3 + 5,
    vtotal: 1920 + 3 + 5 + 6,
    vrefresh: 60,
    flags: 0,
    name: heapless::String::new(),
};

impl DisplayMode {
    /// Copy of this mode, named after its active area
    pub fn duplicate(&self) -> DisplayMode {
        let mut mode = self.clone();
        mode.set_name();
        mode
    }

    /// Set `name` to `"<hdisplay>x<vdisplay>"`
    pub fn set_name(&mut self) {
        self.name.clear();
        // Two u16 values and a separator always fit.
        let _ = write!(self.name, "{}x{}", self.hdisplay, self.vdisplay);
    }

    /// Horizontal front porch
    ///
    /// This and the other porch/sync accessors clamp to 0 when the timings
    /// are out of order.
    pub fn hfront_porch(&self) -> u16 {
        self.hsync_start.saturating_sub(self.hdisplay)
    }

    pub fn hsync_len(&self) -> u16 {
        self.hsync_end.saturating_sub(self.hsync_start)
    }

    pub fn hback_porch(&self) -> u16 {
        self.htotal.saturating_sub(self.hsync_end)
    }

    pub fn vfront_porch(&self) -> u16 {
        self.vsync_start.saturating_sub(self.vdisplay)
    }

    pub fn vsync_len(&self) -> u16 {
        self.vsync_end.saturating_sub(self.vsync_start)
    }

    pub fn vback_porch(&self) -> u16 {
        self.vtotal.saturating_sub(self.vsync_end)
    }

    /// Active area as (width, height)
    pub fn resolution(&self) -> (u16, u16) {
        (self.hdisplay, self.vdisplay)
    }
}

#[cfg(feature = "graphics")]
impl embedded_graphics_core::geometry::OriginDimensions for DisplayMode {
    fn size(&self) -> embedded_graphics_core::geometry::Size {
        embedded_graphics_core::geometry::Size::new(
            u32::from(self.hdisplay),
            u32::from(self.vdisplay),
        )
    }
}

/// The display subsystem's list of probed modes
pub trait ModeSink {
    /// Take ownership of a probed mode
    ///
    /// # Errors
    ///
    /// Returns [`OutOfMemory`] if the mode cannot be stored.
    fn add_probed(&mut self, mode: DisplayMode) -> Result<(), OutOfMemory>;
}

impl<const N: usize> ModeSink for heapless::Vec<DisplayMode, N> {
    fn add_probed(&mut self, mode: DisplayMode) -> Result<(), OutOfMemory> {
        self.push(mode).map_err(|_| OutOfMemory)
    }
}

#[cfg(feature = "alloc")]
impl ModeSink for alloc::vec::Vec<DisplayMode> {
    fn add_probed(&mut self, mode: DisplayMode) -> Result<(), OutOfMemory> {
        self.try_reserve(1).map_err(|_| OutOfMemory)?;
        self.push(mode);
        Ok(())
    }
}
