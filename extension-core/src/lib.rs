//! Platform-agnostic driver for two-wire extension controllers.
//!
//! This crate talks to a Nunchuk, Classic Controller or compatible device
//! over a blocking bus and keeps the raw report that
//! [`extension_proto`] knows how to decode. It can be used both in embedded
//! `no_std` environments and on host for testing.
//!
//! # Overview
//!
//! - [`transport`]: Bus access trait ([`Transport`]) and the embedded-hal
//!   implementation ([`I2cTransport`])
//! - [`endpoint`]: One physical port: transport, identified type and report
//!   buffer ([`BusEndpoint`])
//! - [`controller`]: Connect / update / reset state machine and decoding
//!   front end ([`ExtensionController`])
//! - [`error`]: Driver errors ([`Error`])
//!
//! # Lifecycle
//!
//! ```text
//! Disconnected --connect--> Initialized --identify--> Identified --update ok--> Connected
//!      ^                                                   ^                        |
//!      |                                                   +------ bad data --------+
//!      +-------------------- bus failure / reset -----------------------------------+
//! ```
//!
//! # Example
//!
//! ```ignore
//! use extension_core::{Axis, Button, ControllerType, ExtensionController, I2cTransport};
//!
//! let mut classic = ExtensionController::new(I2cTransport::new(i2c, delay))
//!     .expecting(ControllerType::ClassicController);
//!
//! if classic.connect().is_ok() {
//!     let lx = classic.axis(Axis::LeftJoyX);
//!     let home = classic.button(Button::Home);
//! }
//! ```
//!
//! # Features
//!
//! - **`std`**: Enable standard library support (for host testing)
//! - **`defmt`**: Enable defmt formatting and logging (for embedded logging)
//! - **`log`**: Log through the `log` facade instead of defmt
//!
//! # No-std Support
//!
//! This crate is `#![no_std]` by default and uses no heap allocations.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "std")]
extern crate std;

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod controller;
pub mod endpoint;
pub mod error;
pub mod transport;

#[cfg(test)]
mod mock;

// Re-export main types at crate root
pub use controller::{ExtensionController, Port, SessionState};
pub use endpoint::{BusEndpoint, INIT_REGISTER, INIT_SETTLE_MS, INIT_VALUE};
pub use error::Error;
pub use transport::{I2cTransport, Transport, CONVERSION_DELAY_US, I2C_ADDR};

pub use extension_proto::{
    Axis, BitMap, Button, ByteMap, ControlData, ControllerType, Layout, CONTROL_DATA_SIZE,
    MAX_REQUEST_SIZE, MIN_REQUEST_SIZE,
};
