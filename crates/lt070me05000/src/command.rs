// MIPI DCS command definitions

// Power and sleep
pub const SOFT_RESET: u8 = 0x01; // Software reset
pub const ENTER_SLEEP_MODE: u8 = 0x10; // Enter sleep mode
pub const EXIT_SLEEP_MODE: u8 = 0x11; // Exit sleep mode

// Display on/off
pub const SET_DISPLAY_OFF: u8 = 0x28; // Blank the display
pub const SET_DISPLAY_ON: u8 = 0x29; // Show frame memory

// Frame memory window
pub const SET_COLUMN_ADDRESS: u8 = 0x2A; // Column start/end
pub const SET_PAGE_ADDRESS: u8 = 0x2B; // Page (row) start/end
pub const SET_PIXEL_FORMAT: u8 = 0x3A; // Interface pixel format

// Tearing effect
pub const SET_TEAR_OFF: u8 = 0x34; // TE output off
pub const SET_TEAR_ON: u8 = 0x35; // TE output on
pub const SET_TEAR_SCANLINE: u8 = 0x44; // TE scanline

// Brightness and power save
pub const SET_DISPLAY_BRIGHTNESS: u8 = 0x51; // Display brightness
pub const WRITE_CONTROL_DISPLAY: u8 = 0x53; // Brightness control block
pub const WRITE_POWER_SAVE: u8 = 0x55; // Content adaptive brightness

// Panel parameters
pub const PIXEL_FORMAT: u8 = 0x70;
pub const TEAR_SCANLINE: u16 = 0x0300;
pub const MAX_BRIGHTNESS: u8 = 0xFF;
pub const CONTROL_DISPLAY: u8 = 0x24; // BCTRL | BL
pub const POWER_SAVE_OFF: u8 = 0x00;

/// Manufacturer register writes sent after sleep out, with the delay in
/// milliseconds that follows each one.
///
/// Undocumented. Sent byte-for-byte as generic writes.
pub const VENDOR_INIT: [(&[u8], u32); 3] = [
    (&[0xB0, 0x00], 10),
    (&[0xB3, 0x26, 0x08, 0x00, 0x20, 0x00], 20),
    (&[0xB0, 0x03], 0),
];
