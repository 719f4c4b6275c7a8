//! Typed DCS helpers on top of [`DsiHost`]

use crate::command::*;
use crate::dsi::{DsiHost, ModeFlag};

/// Tearing effect output mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum TearMode {
    /// TE pulses on vertical blanking only
    VBlank = 0x00,
    /// TE pulses on vertical and horizontal blanking
    VHBlank = 0x01,
}

/// DCS commands used by the panel, provided for every [`DsiHost`]
pub trait Dcs: DsiHost {
    /// Switch command transmission between low power and high speed
    fn set_low_power(&mut self, enabled: bool) {
        let mut flags = self.mode_flags();
        if enabled {
            flags.insert(ModeFlag::LowPowerMode);
        } else {
            flags.remove(ModeFlag::LowPowerMode);
        }
        self.set_mode_flags(flags);
    }

    fn soft_reset(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(SOFT_RESET, &[])
    }

    fn set_pixel_format(&mut self, format: u8) -> Result<(), Self::Error> {
        self.dcs_write(SET_PIXEL_FORMAT, &[format])
    }

    /// Set the column window, both ends inclusive
    fn set_column_address(&mut self, start: u16, end: u16) -> Result<(), Self::Error> {
        let [s_hi, s_lo] = start.to_be_bytes();
        let [e_hi, e_lo] = end.to_be_bytes();
        self.dcs_write(SET_COLUMN_ADDRESS, &[s_hi, s_lo, e_hi, e_lo])
    }

    /// Set the page (row) window, both ends inclusive
    fn set_page_address(&mut self, start: u16, end: u16) -> Result<(), Self::Error> {
        let [s_hi, s_lo] = start.to_be_bytes();
        let [e_hi, e_lo] = end.to_be_bytes();
        self.dcs_write(SET_PAGE_ADDRESS, &[s_hi, s_lo, e_hi, e_lo])
    }

    fn set_tear_on(&mut self, mode: TearMode) -> Result<(), Self::Error> {
        self.dcs_write(SET_TEAR_ON, &[mode as u8])
    }

    fn set_tear_off(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(SET_TEAR_OFF, &[])
    }

    fn set_tear_scanline(&mut self, scanline: u16) -> Result<(), Self::Error> {
        self.dcs_write(SET_TEAR_SCANLINE, &scanline.to_be_bytes())
    }

    fn exit_sleep_mode(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(EXIT_SLEEP_MODE, &[])
    }

    fn enter_sleep_mode(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(ENTER_SLEEP_MODE, &[])
    }

    fn set_display_on(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(SET_DISPLAY_ON, &[])
    }

    fn set_display_off(&mut self) -> Result<(), Self::Error> {
        self.dcs_write(SET_DISPLAY_OFF, &[])
    }
}

impl<T: DsiHost + ?Sized> Dcs for T {}
