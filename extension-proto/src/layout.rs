//! Static control layouts, one table per controller type.
//!
//! Each [`Layout`] lists which descriptors decode which named control.
//! Lookups go through [`layout_for`], keyed by [`ControllerType`], so the
//! decoding path stays total and allocation-free.

use crate::data::MIN_REQUEST_SIZE;
use crate::maps::{extract_bit, extract_combined, BitMap, ByteMap};
use crate::types::ControllerType;

/// Named analog control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Axis {
    LeftJoyX,
    LeftJoyY,
    RightJoyX,
    RightJoyY,
    TriggerL,
    TriggerR,
}

/// Named digital control.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Button {
    DpadUp,
    DpadDown,
    DpadLeft,
    DpadRight,
    A,
    B,
    X,
    Y,
    L,
    R,
    ZL,
    ZR,
    Plus,
    Minus,
    Home,
    C,
    Z,
}

/// Descriptor table for one controller type.
#[derive(Debug)]
pub struct Layout {
    /// Controller this layout decodes.
    pub controller: ControllerType,
    /// Report size the layout needs.
    pub request_size: usize,
    pub axes: &'static [(Axis, &'static [ByteMap])],
    pub buttons: &'static [(Button, BitMap)],
}

impl Layout {
    /// Decode an analog control, or `None` if this layout has no such axis.
    #[must_use]
    pub fn axis(&self, data: &[u8], axis: Axis) -> Option<u8> {
        self.axes
            .iter()
            .find(|(a, _)| *a == axis)
            .map(|(_, maps)| extract_combined(data, maps))
    }

    /// Decode a digital control, or `None` if this layout has no such button.
    #[must_use]
    pub fn button(&self, data: &[u8], button: Button) -> Option<bool> {
        self.buttons
            .iter()
            .find(|(b, _)| *b == button)
            .map(|&(_, map)| extract_bit(data, map))
    }

    /// Pressed buttons as a bit mask. Bit `i` is entry `i` of [`buttons`].
    ///
    /// [`buttons`]: Self::buttons
    #[must_use]
    pub fn pressed(&self, data: &[u8]) -> u32 {
        self.buttons
            .iter()
            .enumerate()
            .filter(|(_, (_, map))| extract_bit(data, *map))
            .fold(0, |mask, (i, _)| mask | 1 << i)
    }
}

/// Classic Controller descriptors (6-byte report).
///
/// ```text
/// byte | 7    6    5    4    3    2    1    0
/// -----+---------------------------------------
///   0  | RX4  RX3  LX5  ..                 LX0
///   1  | RX2  RX1  LY5  ..                 LY0
///   2  | RX0  LT4  LT3  RY4  ..            RY0
///   3  | LT2  LT1  LT0  RT4  ..            RT0
///   4  | BDR  BDD  BLT  B-   BH   B+   BRT  1
///   5  | BZL  BB   BY   BA   BX   BZR  BDL  BDU
/// ```
pub mod classic {
    use super::{BitMap, ByteMap};

    pub const LEFT_JOY_X: &[ByteMap] = &[ByteMap::new(0, 6, 0, 0)];
    pub const LEFT_JOY_Y: &[ByteMap] = &[ByteMap::new(1, 6, 0, 0)];
    pub const RIGHT_JOY_X: &[ByteMap] = &[
        ByteMap::new(0, 2, 6, 3),
        ByteMap::new(1, 2, 6, 5),
        ByteMap::new(2, 1, 7, 7),
    ];
    pub const RIGHT_JOY_Y: &[ByteMap] = &[ByteMap::new(2, 5, 0, 0)];
    pub const TRIGGER_L: &[ByteMap] = &[ByteMap::new(2, 2, 5, 2), ByteMap::new(3, 3, 5, 5)];
    pub const TRIGGER_R: &[ByteMap] = &[ByteMap::new(3, 5, 0, 0)];

    pub const DPAD_UP: BitMap = BitMap::new(5, 0);
    pub const DPAD_DOWN: BitMap = BitMap::new(4, 6);
    pub const DPAD_LEFT: BitMap = BitMap::new(5, 1);
    pub const DPAD_RIGHT: BitMap = BitMap::new(4, 7);

    pub const BUTTON_A: BitMap = BitMap::new(5, 4);
    pub const BUTTON_B: BitMap = BitMap::new(5, 6);
    pub const BUTTON_X: BitMap = BitMap::new(5, 3);
    pub const BUTTON_Y: BitMap = BitMap::new(5, 5);

    pub const BUTTON_L: BitMap = BitMap::new(4, 5);
    pub const BUTTON_R: BitMap = BitMap::new(4, 1);
    pub const BUTTON_ZL: BitMap = BitMap::new(5, 7);
    pub const BUTTON_ZR: BitMap = BitMap::new(5, 2);

    pub const BUTTON_PLUS: BitMap = BitMap::new(4, 2);
    pub const BUTTON_MINUS: BitMap = BitMap::new(4, 4);
    pub const BUTTON_HOME: BitMap = BitMap::new(4, 3);
}

/// Nunchuk descriptors (6-byte report). Stick axes are full bytes.
pub mod nunchuk {
    use super::{BitMap, ByteMap};

    pub const JOY_X: &[ByteMap] = &[ByteMap::full(0)];
    pub const JOY_Y: &[ByteMap] = &[ByteMap::full(1)];

    pub const BUTTON_C: BitMap = BitMap::new(5, 1);
    pub const BUTTON_Z: BitMap = BitMap::new(5, 0);
}

pub static CLASSIC_LAYOUT: Layout = Layout {
    controller: ControllerType::ClassicController,
    request_size: MIN_REQUEST_SIZE,
    axes: &[
        (Axis::LeftJoyX, classic::LEFT_JOY_X),
        (Axis::LeftJoyY, classic::LEFT_JOY_Y),
        (Axis::RightJoyX, classic::RIGHT_JOY_X),
        (Axis::RightJoyY, classic::RIGHT_JOY_Y),
        (Axis::TriggerL, classic::TRIGGER_L),
        (Axis::TriggerR, classic::TRIGGER_R),
    ],
    buttons: &[
        (Button::DpadUp, classic::DPAD_UP),
        (Button::DpadDown, classic::DPAD_DOWN),
        (Button::DpadLeft, classic::DPAD_LEFT),
        (Button::DpadRight, classic::DPAD_RIGHT),
        (Button::A, classic::BUTTON_A),
        (Button::B, classic::BUTTON_B),
        (Button::X, classic::BUTTON_X),
        (Button::Y, classic::BUTTON_Y),
        (Button::L, classic::BUTTON_L),
        (Button::R, classic::BUTTON_R),
        (Button::ZL, classic::BUTTON_ZL),
        (Button::ZR, classic::BUTTON_ZR),
        (Button::Plus, classic::BUTTON_PLUS),
        (Button::Minus, classic::BUTTON_MINUS),
        (Button::Home, classic::BUTTON_HOME),
    ],
};

pub static NUNCHUK_LAYOUT: Layout = Layout {
    controller: ControllerType::Nunchuk,
    request_size: MIN_REQUEST_SIZE,
    // The stick is held in the left hand
    axes: &[
        (Axis::LeftJoyX, nunchuk::JOY_X),
        (Axis::LeftJoyY, nunchuk::JOY_Y),
    ],
    buttons: &[
        (Button::C, nunchuk::BUTTON_C),
        (Button::Z, nunchuk::BUTTON_Z),
    ],
};

/// Look up the layout table for a controller type.
#[must_use]
pub fn layout_for(controller: ControllerType) -> Option<&'static Layout> {
    match controller {
        ControllerType::ClassicController => Some(&CLASSIC_LAYOUT),
        ControllerType::Nunchuk => Some(&NUNCHUK_LAYOUT),
        _ => None,
    }
}
