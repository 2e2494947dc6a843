//! Identity, report layout and decoding tables for extension controllers.
//!
//! Extension controllers (Nunchuk, Classic Controller, Guitar, ...) sit on a
//! two-wire bus at address `0x52` and answer with a short binary report.
//! This crate holds everything needed to make sense of those bytes without
//! touching the bus itself:
//!
//! - [`types`]: [`ControllerType`]
//! - [`identity`]: 6-byte identity signatures ([`decode_identity`])
//! - [`data`]: report sizes and the integrity check ([`verify_data`])
//! - [`maps`]: byte/bit descriptors ([`ByteMap`], [`BitMap`]) and extraction
//! - [`layout`]: static descriptor tables per controller ([`layout_for`])
//!
//! # Example
//!
//! ```
//! use extension_proto::{layout_for, Axis, Button, ControllerType};
//!
//! let report = [0xA0, 0x20, 0x10, 0x00, 0xFF, 0xEF];
//! let classic = layout_for(ControllerType::ClassicController).unwrap();
//!
//! assert_eq!(classic.axis(&report, Axis::LeftJoyX), Some(32));
//! assert_eq!(classic.button(&report, Button::A), Some(true));
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting (for embedded logging)
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

pub mod data;
pub mod identity;
pub mod layout;
pub mod maps;
pub mod types;

// Re-export types at crate root for convenience
pub use data::{
    verify_data, ControlData, CONTROL_DATA_POINTER, CONTROL_DATA_SIZE, MAX_REQUEST_SIZE,
    MIN_REQUEST_SIZE,
};
pub use identity::{decode_identity, IDENTITY_POINTER, ID_SIZE};
pub use layout::{layout_for, Axis, Button, Layout, CLASSIC_LAYOUT, NUNCHUK_LAYOUT};
pub use maps::{extract_bit, extract_byte, extract_combined, BitMap, ByteMap};
pub use types::ControllerType;
