//! Control data report sizes and integrity check.

/// Register pointer of the control data report.
pub const CONTROL_DATA_POINTER: u8 = 0x00;

/// Capacity of the control data buffer (largest reporting mode).
pub const CONTROL_DATA_SIZE: usize = 21;

/// Smallest report a session may request.
pub const MIN_REQUEST_SIZE: usize = 6;

/// Largest report a session may request.
pub const MAX_REQUEST_SIZE: usize = CONTROL_DATA_SIZE;

/// Raw control data buffer shared by every view of one bus endpoint.
pub type ControlData = [u8; CONTROL_DATA_SIZE];

/// Sanity-check a freshly read report.
///
/// A report made only of `0x00` or only of `0xFF` bytes comes from a
/// floating or unresponsive bus. Idle devices still report analog
/// midpoints, so a real report always has at least one differing byte.
/// This catches gross bus failure only, not bit-level corruption.
///
/// An empty slice is rejected.
#[must_use]
pub fn verify_data(data: &[u8]) -> bool {
    let Some((&first, rest)) = data.split_first() else {
        return false;
    };

    if first != 0x00 && first != 0xFF {
        return true;
    }
    rest.iter().any(|&b| b != first)
}
