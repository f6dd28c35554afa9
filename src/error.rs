//! Error definitions for the FT5206 driver.

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum Error<I2cError> {
    /// Underlying I2C transaction failed.
    I2c(I2cError),
    /// The CHIP_ID register reported an id outside the known family.
    UnknownChipId(u8),
    /// A burst write exceeded the staging buffer.
    BufferOverflow,
}

impl<I2cError: core::fmt::Debug> core::fmt::Display for Error<I2cError> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::I2c(e) => write!(f, "I2C error: {:?}", e),
            Error::UnknownChipId(id) => write!(f, "unknown chip id: 0x{:02X}", id),
            Error::BufferOverflow => write!(f, "burst write exceeds staging buffer"),
        }
    }
}
