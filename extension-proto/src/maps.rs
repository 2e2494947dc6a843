//! Byte and bit descriptors for decoding control data.
//!
//! A controller layout is a table of descriptors. Each descriptor names
//! where one field lives inside the raw report; the extraction functions
//! below turn the report into values.
//!
//! Buttons on the extension bus are active-low: a `0` bit means pressed.
//! [`extract_bit`] applies that inversion so callers get `true` for pressed.

/// Location of an unsigned field inside one report byte.
///
/// Extracts `(data[index] & mask) >> shift`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ByteMap {
    pub index: usize,
    pub mask: u8,
    pub shift: u8,
}

impl ByteMap {
    /// Describe `size` bits starting at bit `position` of `data[index]`,
    /// moved down by `shift` bits in the result.
    ///
    /// `size` must be in `1..=8` and `size + position` at most 8.
    #[must_use]
    pub const fn new(index: usize, size: u8, position: u8, shift: u8) -> Self {
        Self {
            index,
            mask: (0xFF >> (8 - size)) << position,
            shift,
        }
    }

    /// Describe a field by its raw mask.
    #[must_use]
    pub const fn with_mask(index: usize, mask: u8, shift: u8) -> Self {
        Self { index, mask, shift }
    }

    /// A whole byte, unshifted.
    #[must_use]
    pub const fn full(index: usize) -> Self {
        Self::with_mask(index, 0xFF, 0)
    }
}

/// Location of a single active-low flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BitMap {
    pub index: usize,
    pub position: u8,
}

impl BitMap {
    #[must_use]
    pub const fn new(index: usize, position: u8) -> Self {
        Self { index, position }
    }
}

/// Extract one unsigned field.
///
/// # Panics
///
/// Panics if `map.index` is outside `data`. Descriptors are authored once
/// per layout, so that is a programming error.
#[inline]
#[must_use]
pub fn extract_byte(data: &[u8], map: ByteMap) -> u8 {
    (data[map.index] & map.mask) >> map.shift
}

/// Extract a field whose bits are scattered across several report bytes.
///
/// The partial results are OR-ed together, so the descriptors must cover
/// disjoint bits of the result. Overlapping descriptors silently corrupt
/// the value.
#[inline]
#[must_use]
pub fn extract_combined(data: &[u8], maps: &[ByteMap]) -> u8 {
    maps.iter().fold(0u8, |acc, &map| acc | extract_byte(data, map))
}

/// Extract one active-low flag: `true` when the bit is `0`.
#[inline]
#[must_use]
pub fn extract_bit(data: &[u8], map: BitMap) -> bool {
    (data[map.index] >> map.position) & 1 == 0
}
