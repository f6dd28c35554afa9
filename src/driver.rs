//! Driver for the FT5206/FT6x36 touch controller family.
//! Provides blocking I2C queries; the async version mirrors this API behind
//! the `async` feature.

use crate::data_types::{ChipVariant, Gesture, PowerMode, PrimaryTouch, TouchReport};
use crate::error::Error;
use crate::registers::{
    AUTO_CALIBRATION_OFF, AUTO_CALIBRATION_ON, DEFAULT_I2C_ADDRESS, DEVICE_MODE_MASK, INT_DISABLE,
    INT_ENABLE, POINT_READ_LEN, TOUCH_BLOCK_LEN, addr, compose_version,
};

/// FT5206 family driver.
pub struct Ft5206<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> Ft5206<I2C> {
    /// Create a new driver instance with the default I2C address (0x38).
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            address: DEFAULT_I2C_ADDRESS,
        }
    }

    /// Create a new driver instance with a custom I2C address.
    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Return the 7-bit I2C address configured for this instance.
    pub fn address(&self) -> u8 {
        self.address
    }

    /// Release the underlying I2C peripheral.
    pub fn free(self) -> I2C {
        self.i2c
    }
}

impl<I2C> Ft5206<I2C>
where
    I2C: embedded_hal::i2c::I2c,
{
    /// Probe the device: read CHIP_ID and check it against the known family
    /// members. Fails with [`Error::UnknownChipId`] on anything else.
    pub fn init(&mut self) -> Result<ChipVariant, Error<I2C::Error>> {
        let id = self.read_reg(addr::CHIP_ID)?;
        ChipVariant::from_id(id).ok_or(Error::UnknownChipId(id))
    }

    /// Write a single register.
    pub fn write_reg(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[reg, value])
            .map_err(Error::I2c)
    }

    /// Read a single register.
    pub fn read_reg(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    /// Read a burst starting at a register.
    pub fn read_regs(&mut self, start_reg: u8, data: &mut [u8]) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[start_reg], data)
            .map_err(Error::I2c)
    }

    /// Write a burst starting at a register.
    pub fn write_regs(&mut self, start_reg: u8, data: &[u8]) -> Result<(), Error<I2C::Error>> {
        let mut buf = [0u8; 8];
        if data.len() + 1 > buf.len() {
            return Err(Error::BufferOverflow);
        }
        buf[0] = start_reg;
        buf[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address, &buf[..=data.len()])
            .map_err(Error::I2c)
    }

    /// Read the 2-bit device mode field from MODE.
    pub fn read_device_mode(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_reg(addr::MODE)? & DEVICE_MODE_MASK)
    }

    /// Read and decode the gesture register.
    pub fn read_gesture(&mut self) -> Result<Gesture, Error<I2C::Error>> {
        Ok(Gesture::from_raw(self.read_reg(addr::GESTURE)?))
    }

    /// Set the touch detection threshold.
    pub fn set_threshold(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::THRESHOLD, value)
    }

    /// Read the touch detection threshold.
    pub fn get_threshold(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg(addr::THRESHOLD)
    }

    /// Read the monitor-mode entry time, in seconds.
    pub fn get_monitor_time(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg(addr::MONITOR_TIME)
    }

    /// Set the monitor-mode entry time, in seconds.
    pub fn set_monitor_time(&mut self, seconds: u8) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::MONITOR_TIME, seconds)
    }

    /// Enable auto-calibration (vendor overload of the MONITOR_TIME register).
    pub fn enable_auto_calibration(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::MONITOR_TIME, AUTO_CALIBRATION_ON)
    }

    /// Disable auto-calibration.
    pub fn disable_auto_calibration(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::MONITOR_TIME, AUTO_CALIBRATION_OFF)
    }

    /// Select a power mode. POWER_MODE shares address 0x87 with MONITOR_TIME.
    pub fn set_power_mode(&mut self, mode: PowerMode) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::POWER_MODE, mode as u8)
    }

    /// Read the 16-bit vendor library version.
    pub fn read_library_version(&mut self) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.read_regs(addr::LIB_VERSION_HIGH, &mut buf)?;
        Ok(compose_version(buf[0], buf[1]))
    }

    /// Enable the interrupt line.
    pub fn enable_interrupt(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::INT_STATUS, INT_ENABLE)
    }

    /// Disable the interrupt line.
    pub fn disable_interrupt(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg(addr::INT_STATUS, INT_DISABLE)
    }

    /// Read the first touch point along with its event flag.
    ///
    /// Issues a 5-byte read starting at STATUS. Returns `Ok(None)` when the
    /// touch count byte is zero.
    pub fn read_primary_touch(&mut self) -> Result<Option<PrimaryTouch>, Error<I2C::Error>> {
        let mut buf = [0u8; POINT_READ_LEN];
        self.read_regs(addr::STATUS, &mut buf)?;
        Ok(PrimaryTouch::parse(&buf))
    }

    /// Read the full multi-touch report.
    ///
    /// Issues a 16-byte read starting at MODE and decodes up to two touch
    /// slots. Returns `Ok(None)` when the reported count is zero or above
    /// two.
    pub fn read_touch_report(&mut self) -> Result<Option<TouchReport>, Error<I2C::Error>> {
        let mut buf = [0u8; TOUCH_BLOCK_LEN];
        self.read_regs(addr::MODE, &mut buf)?;
        Ok(TouchReport::parse(&buf))
    }

    /// Read the raw STATUS byte. The low nibble holds the touch count; the
    /// value is returned unfiltered.
    pub fn read_touch_count(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg(addr::STATUS)
    }

    /// Read the chip identifier register.
    pub fn read_chip_id(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg(addr::CHIP_ID)
    }

    /// Read the panel vendor identifier register.
    pub fn read_vendor_id(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg(addr::VENDOR_ID)
    }

    /// Read the error status register.
    pub fn read_error_code(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg(addr::ERROR_STATUS)
    }
}

#[cfg(feature = "async")]
impl<I2C> Ft5206<I2C>
where
    I2C: embedded_hal_async::i2c::I2c,
{
    /// Async version of [`init`](Self::init).
    pub async fn init_async(&mut self) -> Result<ChipVariant, Error<I2C::Error>> {
        let id = self.read_reg_async(addr::CHIP_ID).await?;
        ChipVariant::from_id(id).ok_or(Error::UnknownChipId(id))
    }

    pub async fn write_reg_async(&mut self, reg: u8, value: u8) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write(self.address, &[reg, value])
            .await
            .map_err(Error::I2c)
    }

    pub async fn read_reg_async(&mut self, reg: u8) -> Result<u8, Error<I2C::Error>> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(self.address, &[reg], &mut buf)
            .await
            .map_err(Error::I2c)?;
        Ok(buf[0])
    }

    pub async fn read_regs_async(
        &mut self,
        start_reg: u8,
        data: &mut [u8],
    ) -> Result<(), Error<I2C::Error>> {
        self.i2c
            .write_read(self.address, &[start_reg], data)
            .await
            .map_err(Error::I2c)
    }

    pub async fn write_regs_async(
        &mut self,
        start_reg: u8,
        data: &[u8],
    ) -> Result<(), Error<I2C::Error>> {
        let mut buf = [0u8; 8];
        if data.len() + 1 > buf.len() {
            return Err(Error::BufferOverflow);
        }
        buf[0] = start_reg;
        buf[1..=data.len()].copy_from_slice(data);
        self.i2c
            .write(self.address, &buf[..=data.len()])
            .await
            .map_err(Error::I2c)
    }

    pub async fn read_device_mode_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        Ok(self.read_reg_async(addr::MODE).await? & DEVICE_MODE_MASK)
    }

    pub async fn read_gesture_async(&mut self) -> Result<Gesture, Error<I2C::Error>> {
        Ok(Gesture::from_raw(self.read_reg_async(addr::GESTURE).await?))
    }

    pub async fn set_threshold_async(&mut self, value: u8) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::THRESHOLD, value).await
    }

    pub async fn get_threshold_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg_async(addr::THRESHOLD).await
    }

    pub async fn get_monitor_time_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg_async(addr::MONITOR_TIME).await
    }

    pub async fn set_monitor_time_async(&mut self, seconds: u8) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::MONITOR_TIME, seconds).await
    }

    pub async fn enable_auto_calibration_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::MONITOR_TIME, AUTO_CALIBRATION_ON)
            .await
    }

    pub async fn disable_auto_calibration_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::MONITOR_TIME, AUTO_CALIBRATION_OFF)
            .await
    }

    pub async fn set_power_mode_async(&mut self, mode: PowerMode) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::POWER_MODE, mode as u8).await
    }

    pub async fn read_library_version_async(&mut self) -> Result<u16, Error<I2C::Error>> {
        let mut buf = [0u8; 2];
        self.read_regs_async(addr::LIB_VERSION_HIGH, &mut buf)
            .await?;
        Ok(compose_version(buf[0], buf[1]))
    }

    pub async fn enable_interrupt_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::INT_STATUS, INT_ENABLE).await
    }

    pub async fn disable_interrupt_async(&mut self) -> Result<(), Error<I2C::Error>> {
        self.write_reg_async(addr::INT_STATUS, INT_DISABLE).await
    }

    pub async fn read_primary_touch_async(
        &mut self,
    ) -> Result<Option<PrimaryTouch>, Error<I2C::Error>> {
        let mut buf = [0u8; POINT_READ_LEN];
        self.read_regs_async(addr::STATUS, &mut buf).await?;
        Ok(PrimaryTouch::parse(&buf))
    }

    pub async fn read_touch_report_async(
        &mut self,
    ) -> Result<Option<TouchReport>, Error<I2C::Error>> {
        let mut buf = [0u8; TOUCH_BLOCK_LEN];
        self.read_regs_async(addr::MODE, &mut buf).await?;
        Ok(TouchReport::parse(&buf))
    }

    pub async fn read_touch_count_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg_async(addr::STATUS).await
    }

    pub async fn read_chip_id_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg_async(addr::CHIP_ID).await
    }

    pub async fn read_vendor_id_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg_async(addr::VENDOR_ID).await
    }

    pub async fn read_error_code_async(&mut self) -> Result<u8, Error<I2C::Error>> {
        self.read_reg_async(addr::ERROR_STATUS).await
    }
}
