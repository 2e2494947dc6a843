//! Extension controller reader for RP2040.
//!
//! Polls one extension controller (Nunchuk, Classic Controller, ...) over
//! blocking I2C and logs the decoded controls over RTT.
//!
//! # Overview
//!
//! The firmware runs on a Raspberry Pi Pico (RP2040) and:
//! 1. Switches the controller into unencrypted mode and identifies it
//! 2. Polls the report every [`POLL_INTERVAL_MS`]
//! 3. Reconnects after [`RETRY_INTERVAL_MS`] whenever the bus fails, or
//!    after [`BAD_REPORT_LIMIT`] rejected reports in a row
//!
//! # Hardware Configuration
//!
//! | Function | GPIO | Description |
//! |----------|------|-------------|
//! | I2C0 SDA | 4    | Extension data line (pull-up to 3V3) |
//! | I2C0 SCL | 5    | Extension clock line (pull-up to 3V3) |
//! | LED      | 25   | On-board LED (error indicator) |
//!
//! # Architecture
//!
//! Two embassy tasks share the latest [`Snapshot`] through a
//! [`Signal`](embassy_sync::signal::Signal) with "latest value wins"
//! semantics:
//!
//! - **Poll Task**: Owns the controller session, drives connect/update
//! - **Report Task**: Decodes snapshots and logs them
//!
//! # Features
//!
//! - **`dev-panic`** (default): Use `panic-probe` for development (prints panic info via RTT)
//! - **`prod-panic`**: Use `panic-reset` for production (silent watchdog reset)

#![no_std]

#[cfg(all(feature = "dev-panic", feature = "prod-panic"))]
compile_error!("Cannot enable both `dev-panic` and `prod-panic` features");

// Re-export driver types for convenience
pub use extension_core::{
    Axis, BusEndpoint, Button, ControlData, ControllerType, Error, ExtensionController,
    I2cTransport, SessionState, Transport,
};

pub mod snapshot;

pub use snapshot::Snapshot;

/// Bus clock. Third-party controllers are not reliable above standard mode.
pub const I2C_FREQUENCY_HZ: u32 = 100_000;

/// Report polling period.
pub const POLL_INTERVAL_MS: u64 = 10;

/// Pause between reconnect attempts while nothing answers.
pub const RETRY_INTERVAL_MS: u64 = 500;

/// Rejected reports in a row before the controller is re-initialized.
///
/// All-`0x00` or all-`0xFF` reports mean the bus is dead or the device
/// dropped out of unencrypted mode; polling alone never recovers.
pub const BAD_REPORT_LIMIT: u8 = 3;
