//! Driver error type.

use core::fmt;
use extension_proto::ControllerType;

/// Error type for controller operations.
///
/// None of these are fatal. The usual response is to treat the controller as
/// disconnected and call [`update`] or [`reconnect`] again on the next cycle.
///
/// [`update`]: crate::ExtensionController::update
/// [`reconnect`]: crate::ExtensionController::reconnect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A register write or burst read did not complete.
    Bus(E),
    /// Nothing is connected, so the bus was not touched.
    NoController,
    /// A device answered but it is not the expected type.
    TypeMismatch {
        expected: ControllerType,
        found: ControllerType,
    },
    /// The report read back as all `0x00` or all `0xFF`.
    BadData,
    /// Requested report size is outside the supported range.
    InvalidRequestSize(usize),
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus error: {:?}", e),
            Self::NoController => write!(f, "no controller connected"),
            Self::TypeMismatch { expected, found } => {
                write!(f, "expected {}, found {}", expected, found)
            }
            Self::BadData => write!(f, "control data failed verification"),
            Self::InvalidRequestSize(size) => write!(f, "invalid request size {}", size),
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;
    use std::string::ToString;

    use super::*;

    #[test]
    fn test_display() {
        let err: Error<()> = Error::TypeMismatch {
            expected: ControllerType::ClassicController,
            found: ControllerType::Nunchuk,
        };
        assert_eq!(err.to_string(), "expected Classic Controller, found Nunchuk");
        assert_eq!(Error::Bus(7u8).to_string(), "bus error: 7");
        assert_eq!(
            Error::<()>::InvalidRequestSize(22).to_string(),
            "invalid request size 22"
        );
    }
}
