//! Data types decoded from the FT5206/FT6x36 register map.

use crate::registers::{
    self, CHIP_ID_FT6206, CHIP_ID_FT6236, CHIP_ID_FT6236U, MAX_TOUCHES, POINT_READ_LEN,
    TOUCH_BLOCK_LEN, TOUCH_SLOT_STRIDE, addr,
};

/// Gesture codes reported in the GESTURE register.
///
/// The controller reports exactly these byte values; anything else decodes to
/// [`Gesture::None`].
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Gesture {
    None,
    MoveUp,
    MoveLeft,
    MoveDown,
    MoveRight,
    ZoomIn,
    ZoomOut,
}

impl Gesture {
    /// Decode a raw GESTURE register byte.
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0x10 => Gesture::MoveUp,
            0x14 => Gesture::MoveLeft,
            0x18 => Gesture::MoveDown,
            0x1C => Gesture::MoveRight,
            0x48 => Gesture::ZoomIn,
            0x49 => Gesture::ZoomOut,
            _ => Gesture::None,
        }
    }
}

/// Event flag carried in the top 2 bits of a touch slot's X-high byte.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EventFlag {
    PressDown,
    LiftUp,
    Contact,
    None,
}

impl EventFlag {
    /// Decode from an X-high register byte (flag in bits 7:6).
    pub fn from_status_byte(byte: u8) -> Self {
        match registers::event_flag_bits(byte) {
            0b00 => EventFlag::PressDown,
            0b01 => EventFlag::LiftUp,
            0b10 => EventFlag::Contact,
            _ => EventFlag::None,
        }
    }
}

/// Power modes accepted by the POWER_MODE register.
///
/// Value 2 is reserved by the controller and has no variant.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum PowerMode {
    Active = 0,
    Monitor = 1,
    DeepSleep = 3,
}

/// Chip identifiers reported in the CHIP_ID register.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ChipVariant {
    Ft6206,
    Ft6236,
    /// Also reported by the FT5206U; the two parts share an id.
    Ft6236u,
}

impl ChipVariant {
    /// Map a CHIP_ID byte to a known family member.
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            CHIP_ID_FT6206 => Some(ChipVariant::Ft6206),
            CHIP_ID_FT6236 => Some(ChipVariant::Ft6236),
            CHIP_ID_FT6236U => Some(ChipVariant::Ft6236u),
            _ => None,
        }
    }

    /// The raw id byte for this variant.
    pub fn id(self) -> u8 {
        match self {
            ChipVariant::Ft6206 => CHIP_ID_FT6206,
            ChipVariant::Ft6236 => CHIP_ID_FT6236,
            ChipVariant::Ft6236u => CHIP_ID_FT6236U,
        }
    }
}

/// First touch point, read as a 5-byte block starting at STATUS.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct PrimaryTouch {
    /// X position, 12 bits.
    pub x: u16,
    /// Y position, 12 bits.
    pub y: u16,
    /// Event flag for this contact.
    pub event: EventFlag,
}

impl PrimaryTouch {
    /// Decode a 5-byte STATUS..TOUCH1_Y_LOW read. Byte 0 is the touch count;
    /// a count of zero means no contact and yields `None`.
    pub fn parse(block: &[u8; POINT_READ_LEN]) -> Option<Self> {
        if block[0] == 0 {
            return None;
        }
        Some(PrimaryTouch {
            x: registers::compose_coord(block[1], block[2]),
            y: registers::compose_coord(block[3], block[4]),
            event: EventFlag::from_status_byte(block[1]),
        })
    }
}

/// One slot of a multi-touch report.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TouchRecord {
    /// X position, 12 bits.
    pub x: u16,
    /// Y position, 12 bits.
    pub y: u16,
    /// Touch identifier, 4 bits.
    pub id: u8,
}

/// Up to two decoded touch slots from a 16-byte block read at MODE.
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TouchReport {
    points: [Option<TouchRecord>; MAX_TOUCHES],
}

impl TouchReport {
    /// Decode a 16-byte MODE..TOUCH2_Y_LOW read.
    ///
    /// The touch count sits at the STATUS offset within the block. Counts of
    /// zero or above two are invalid and yield `None`. Only `count` slots are
    /// decoded; the remainder stay empty rather than carrying stale bytes.
    pub fn parse(block: &[u8; TOUCH_BLOCK_LEN]) -> Option<Self> {
        let count = block[addr::STATUS as usize] as usize;
        if count == 0 || count > MAX_TOUCHES {
            return None;
        }
        let mut points = [None; MAX_TOUCHES];
        for (slot, point) in points.iter_mut().enumerate().take(count) {
            let base = addr::TOUCH1_X_HIGH as usize + slot * TOUCH_SLOT_STRIDE;
            *point = Some(TouchRecord {
                x: registers::compose_coord(block[base], block[base + 1]),
                y: registers::compose_coord(block[base + 2], block[base + 3]),
                id: registers::touch_id(block[base + 2]),
            });
        }
        Some(TouchReport { points })
    }

    /// Number of decoded touches, 1 or 2.
    pub fn count(&self) -> usize {
        self.points.iter().flatten().count()
    }

    /// Touch slot by index (0 or 1), if present.
    pub fn point(&self, index: usize) -> Option<TouchRecord> {
        self.points.get(index).copied().flatten()
    }
}
