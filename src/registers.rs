//! Register map and constants for the FocalTech FT5206/FT6x36 family.
//! Addresses follow the vendor register map; decode helpers cover the
//! nibble-packed coordinate and version fields.

/// Default I2C address for the whole family (7-bit).
pub const DEFAULT_I2C_ADDRESS: u8 = 0x38;

/// Register addresses.
pub mod addr {
    /// Device mode. Low 2 bits select the operating mode; the same register
    /// starts the 16-byte touch block read.
    pub const MODE: u8 = 0x00;
    /// Gesture code byte.
    pub const GESTURE: u8 = 0x01;
    /// Touch status. Low nibble is the touch count.
    pub const STATUS: u8 = 0x02;
    /// First touch point, X high byte (event flag in bits 7:6, X[11:8] in the
    /// low nibble).
    pub const TOUCH1_X_HIGH: u8 = 0x03;
    pub const TOUCH1_X_LOW: u8 = 0x04;
    /// First touch point, Y high byte (touch id in bits 7:4, Y[11:8] in the
    /// low nibble).
    pub const TOUCH1_Y_HIGH: u8 = 0x05;
    pub const TOUCH1_Y_LOW: u8 = 0x06;
    /// Touch detection threshold.
    pub const THRESHOLD: u8 = 0x80;
    /// Monitor-mode entry time, in seconds.
    pub const MONITOR_TIME: u8 = 0x87;
    /// Power mode. The vendor map overloads 0x87: monitor time, power mode
    /// and the auto-calibration switch all live at this address.
    pub const POWER_MODE: u8 = MONITOR_TIME;
    /// Vendor library version, big-endian across 0xA1/0xA2.
    pub const LIB_VERSION_HIGH: u8 = 0xA1;
    pub const LIB_VERSION_LOW: u8 = 0xA2;
    /// Chip identifier (0x06/0x36/0x64 depending on the part).
    pub const CHIP_ID: u8 = 0xA3;
    /// Interrupt mode. 0x00 enables the INT line, 0x01 disables it.
    pub const INT_STATUS: u8 = 0xA4;
    /// Panel vendor identifier; 0x11 on FocalTech panels.
    pub const VENDOR_ID: u8 = 0xA8;
    /// Error status code.
    pub const ERROR_STATUS: u8 = 0xA9;
}

/// Known chip identifiers reported in the CHIP_ID register.
pub const CHIP_ID_FT6206: u8 = 0x06;
pub const CHIP_ID_FT6236: u8 = 0x36;
/// Shared by the FT6236U and FT5206U.
pub const CHIP_ID_FT6236U: u8 = 0x64;

/// Panel vendor id reported in VENDOR_ID on FocalTech panels.
pub const FOCALTECH_VENDOR_ID: u8 = 0x11;

/// The controller reports at most two simultaneous touches.
pub const MAX_TOUCHES: usize = 2;
/// Byte stride between consecutive touch slots in the touch block.
pub const TOUCH_SLOT_STRIDE: usize = 6;
/// Length of the full touch block read starting at MODE.
pub const TOUCH_BLOCK_LEN: usize = 16;
/// Length of the primary-point read starting at STATUS.
pub const POINT_READ_LEN: usize = 5;

/// Values written to MONITOR_TIME to toggle auto-calibration.
pub const AUTO_CALIBRATION_ON: u8 = 0x00;
pub const AUTO_CALIBRATION_OFF: u8 = 0xFF;

/// Values written to INT_STATUS.
pub const INT_ENABLE: u8 = 0x00;
pub const INT_DISABLE: u8 = 0x01;

/// Mask for the device-mode field in MODE.
pub const DEVICE_MODE_MASK: u8 = 0x03;

/// Compose a 12-bit coordinate from its high-nibble and low-byte registers.
pub fn compose_coord(high: u8, low: u8) -> u16 {
    (((high & 0x0F) as u16) << 8) | low as u16
}

/// Touch identifier stored in the high nibble of a Y-high byte.
pub fn touch_id(y_high: u8) -> u8 {
    y_high >> 4
}

/// Event flag code stored in the top 2 bits of an X-high byte.
pub fn event_flag_bits(x_high: u8) -> u8 {
    x_high >> 6
}

/// Compose the 16-bit library version from its two registers.
pub fn compose_version(high: u8, low: u8) -> u16 {
    ((high as u16) << 8) | low as u16
}
