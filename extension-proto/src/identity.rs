//! Identity signature decoding.
//!
//! Every extension controller exposes a 6-byte signature at register
//! [`IDENTITY_POINTER`]. Bytes 2 and 3 are `A4 20` for all genuine and
//! third-party devices; the remaining bytes select the device.
//!
//! | Device          | Signature           |
//! |-----------------|---------------------|
//! | Nunchuk         | `.. .. A4 20 00 00` |
//! | Classic         | `.. .. A4 20 01 01` |
//! | Guitar          | `00 00 A4 20 01 03` |
//! | Drums           | `01 00 A4 20 01 03` |
//! | DJ Turntable    | `03 00 A4 20 01 03` |
//! | uDraw Tablet    | `FF 00 A4 20 01 12` |
//! | Drawsome Tablet | `FF 00 A4 20 00 13` |

use crate::types::ControllerType;

/// Number of bytes in an identity signature.
pub const ID_SIZE: usize = 6;

/// Register pointer of the identity signature.
pub const IDENTITY_POINTER: u8 = 0xFA;

/// Classify an identity signature.
///
/// Returns [`ControllerType::UnknownController`] for any signature not in
/// the table above. A failed read never reaches this function; callers map
/// that case to [`ControllerType::NoController`].
///
/// # Example
///
/// ```
/// use extension_proto::{decode_identity, ControllerType};
///
/// let id = [0x00, 0x00, 0xA4, 0x20, 0x01, 0x01];
/// assert_eq!(decode_identity(&id), ControllerType::ClassicController);
/// ```
#[must_use]
pub fn decode_identity(id: &[u8; ID_SIZE]) -> ControllerType {
    if id[2] != 0xA4 || id[3] != 0x20 {
        return ControllerType::UnknownController;
    }

    match (id[0], id[1], id[4], id[5]) {
        (_, _, 0x00, 0x00) => ControllerType::Nunchuk,
        (_, _, 0x01, 0x01) => ControllerType::ClassicController,
        // Guitar Hero family shares 01 03 and is told apart by byte 0
        (0x00, 0x00, 0x01, 0x03) => ControllerType::GuitarController,
        (0x01, 0x00, 0x01, 0x03) => ControllerType::DrumController,
        (0x03, 0x00, 0x01, 0x03) => ControllerType::DJTurntable,
        (0xFF, 0x00, 0x01, 0x12) => ControllerType::UDrawTablet,
        (0xFF, 0x00, 0x00, 0x13) => ControllerType::DrawsomeTablet,
        _ => ControllerType::UnknownController,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_signatures() {
        let table: [([u8; ID_SIZE], ControllerType); 7] = [
            ([0x00, 0x00, 0xA4, 0x20, 0x00, 0x00], ControllerType::Nunchuk),
            ([0x00, 0x00, 0xA4, 0x20, 0x01, 0x01], ControllerType::ClassicController),
            ([0x00, 0x00, 0xA4, 0x20, 0x01, 0x03], ControllerType::GuitarController),
            ([0x01, 0x00, 0xA4, 0x20, 0x01, 0x03], ControllerType::DrumController),
            ([0x03, 0x00, 0xA4, 0x20, 0x01, 0x03], ControllerType::DJTurntable),
            ([0xFF, 0x00, 0xA4, 0x20, 0x01, 0x12], ControllerType::UDrawTablet),
            ([0xFF, 0x00, 0xA4, 0x20, 0x00, 0x13], ControllerType::DrawsomeTablet),
        ];

        for (id, expected) in table {
            assert_eq!(decode_identity(&id), expected, "signature {:02X?}", id);
        }
    }

    #[test]
    fn test_nunchuk_and_classic_ignore_leading_bytes() {
        // Third-party clones often put garbage in the first two bytes
        assert_eq!(
            decode_identity(&[0x12, 0x34, 0xA4, 0x20, 0x00, 0x00]),
            ControllerType::Nunchuk
        );
        assert_eq!(
            decode_identity(&[0x01, 0x00, 0xA4, 0x20, 0x01, 0x01]),
            ControllerType::ClassicController
        );
    }

    #[test]
    fn test_unknown_guitar_family_member() {
        assert_eq!(
            decode_identity(&[0x02, 0x00, 0xA4, 0x20, 0x01, 0x03]),
            ControllerType::UnknownController
        );
    }

    #[test]
    fn test_missing_header_is_unknown() {
        assert_eq!(
            decode_identity(&[0x00, 0x00, 0xA5, 0x20, 0x01, 0x01]),
            ControllerType::UnknownController
        );
        assert_eq!(
            decode_identity(&[0xFF; ID_SIZE]),
            ControllerType::UnknownController
        );
    }
}
