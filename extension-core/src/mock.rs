//! Scripted transport for host tests.

extern crate std;

use std::vec::Vec;

use extension_proto::{ControlData, CONTROL_DATA_POINTER, IDENTITY_POINTER, ID_SIZE};

use crate::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transfer {
    Write(u8, u8),
    Read(u8, usize),
}

/// Answers identity and control data reads from fixed tables.
///
/// `None` makes the matching read fail after scribbling over the caller's
/// buffer, the way a half-finished I2C transfer would.
#[derive(Debug, Default)]
pub struct MockBus {
    pub identity: Option<[u8; ID_SIZE]>,
    pub report: Option<ControlData>,
    pub fail_writes: bool,
    pub transfers: Vec<Transfer>,
    pub delays_ms: Vec<u32>,
}

impl MockBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identity(identity: [u8; ID_SIZE]) -> Self {
        Self {
            identity: Some(identity),
            ..Self::default()
        }
    }

    /// Identity plus a report whose first bytes are `report`, rest `0x80`.
    pub fn with_device(identity: [u8; ID_SIZE], report: &[u8]) -> Self {
        let mut data = [0x80; extension_proto::CONTROL_DATA_SIZE];
        data[..report.len()].copy_from_slice(report);
        Self {
            identity: Some(identity),
            report: Some(data),
            ..Self::default()
        }
    }

    pub fn reads_from(&self, pointer: u8) -> usize {
        self.transfers
            .iter()
            .filter(|t| matches!(t, Transfer::Read(p, _) if *p == pointer))
            .count()
    }
}

impl Transport for MockBus {
    type Error = MockError;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        if self.fail_writes {
            return Err(MockError);
        }
        self.transfers.push(Transfer::Write(register, value));
        Ok(())
    }

    fn read_registers(&mut self, pointer: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.transfers.push(Transfer::Read(pointer, buf.len()));

        let source: Option<&[u8]> = match pointer {
            IDENTITY_POINTER => self.identity.as_ref().map(|id| &id[..]),
            CONTROL_DATA_POINTER => self.report.as_ref().map(|data| &data[..]),
            _ => None,
        };

        match source {
            Some(bytes) => {
                buf.copy_from_slice(&bytes[..buf.len()]);
                Ok(())
            }
            None => {
                buf.fill(0xEE);
                Err(MockError)
            }
        }
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delays_ms.push(ms);
    }
}
