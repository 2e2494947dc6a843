//! Controller identity types.

use core::fmt;

/// Kind of extension controller attached to the bus.
///
/// Produced by identification on every (re)connect. [`AnyController`] is
/// never produced by identification; it only appears as the expected type
/// of a session that accepts whatever device is plugged in.
///
/// [`AnyController`]: ControllerType::AnyController
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControllerType {
    /// Nothing answered on the bus.
    #[default]
    NoController,
    /// A device answered but its signature is not in the known table.
    UnknownController,
    /// Wildcard used as an expected type.
    AnyController,
    Nunchuk,
    ClassicController,
    GuitarController,
    DrumController,
    DJTurntable,
    UDrawTablet,
    DrawsomeTablet,
}

impl ControllerType {
    /// Whether this type stands for a device that actually answered.
    #[inline]
    #[must_use]
    pub const fn is_connected(self) -> bool {
        !matches!(self, Self::NoController)
    }

    /// Whether this type is one of the known, named devices.
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(
            self,
            Self::NoController | Self::UnknownController | Self::AnyController
        )
    }

    /// Human-readable device name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoController => "No Controller",
            Self::UnknownController => "Unknown Controller",
            Self::AnyController => "Any Controller",
            Self::Nunchuk => "Nunchuk",
            Self::ClassicController => "Classic Controller",
            Self::GuitarController => "Guitar Controller",
            Self::DrumController => "Drum Controller",
            Self::DJTurntable => "DJ Turntable",
            Self::UDrawTablet => "uDraw Tablet",
            Self::DrawsomeTablet => "Drawsome Tablet",
        }
    }
}

impl fmt::Display for ControllerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
