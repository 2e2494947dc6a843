//! Shared bus endpoint: transport, identified type and control data.

use extension_proto::{
    decode_identity, ControlData, ControllerType, CONTROL_DATA_POINTER, CONTROL_DATA_SIZE,
    IDENTITY_POINTER, ID_SIZE,
};

use crate::transport::Transport;

/// Register written to switch the controller into unencrypted mode.
pub const INIT_REGISTER: u8 = 0xF0;

/// Value written to [`INIT_REGISTER`].
pub const INIT_VALUE: u8 = 0x55;

/// Time the controller needs to apply the init write (ms).
pub const INIT_SETTLE_MS: u32 = 10;

/// One physical extension port.
///
/// Holds the transport, the last identified [`ControllerType`] and the raw
/// control data. Several controller views can take turns on one endpoint
/// through [`ExtensionController::shared`]; whichever view is active drives
/// the bus and all of them read the same buffer.
///
/// [`ExtensionController::shared`]: crate::ExtensionController::shared
pub struct BusEndpoint<T> {
    transport: T,
    connected: ControllerType,
    control_data: ControlData,
}

impl<T: Transport> BusEndpoint<T> {
    /// Create an endpoint with nothing identified and a zeroed buffer.
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            connected: ControllerType::NoController,
            control_data: [0; CONTROL_DATA_SIZE],
        }
    }

    /// Switch the controller into unencrypted reporting mode.
    ///
    /// Works on genuine and third-party devices alike. Waits
    /// [`INIT_SETTLE_MS`] after the write. Do not identify or poll if this
    /// fails.
    pub fn initialize(&mut self) -> Result<(), T::Error> {
        self.transport.write_register(INIT_REGISTER, INIT_VALUE)?;
        self.transport.delay_ms(INIT_SETTLE_MS);
        Ok(())
    }

    /// Read the raw identity signature.
    pub fn request_identity(&mut self) -> Result<[u8; ID_SIZE], T::Error> {
        let mut id = [0u8; ID_SIZE];
        self.transport.read_registers(IDENTITY_POINTER, &mut id)?;
        Ok(id)
    }

    /// Read and classify the identity signature, storing the result.
    ///
    /// A failed read yields [`ControllerType::NoController`]. Every call
    /// overwrites the previous classification.
    pub fn identify(&mut self) -> ControllerType {
        self.connected = match self.request_identity() {
            Ok(id) => decode_identity(&id),
            Err(_) => ControllerType::NoController,
        };
        debug!("Identified {}", self.connected);
        self.connected
    }

    /// Burst-read `size` bytes of control data into the buffer.
    ///
    /// The read lands in a scratch buffer first, so a failed transfer leaves
    /// the last good report untouched.
    ///
    /// # Panics
    ///
    /// Panics if `size` exceeds [`CONTROL_DATA_SIZE`].
    pub fn request_control_data(&mut self, size: usize) -> Result<(), T::Error> {
        let mut scratch: ControlData = [0; CONTROL_DATA_SIZE];
        self.transport
            .read_registers(CONTROL_DATA_POINTER, &mut scratch[..size])?;
        self.control_data[..size].copy_from_slice(&scratch[..size]);
        Ok(())
    }

    /// Mark the port as empty without touching the buffer.
    pub fn disconnect(&mut self) {
        self.connected = ControllerType::NoController;
    }

    /// Mark the port as empty and zero the whole buffer.
    pub fn reset(&mut self) {
        self.connected = ControllerType::NoController;
        self.control_data = [0; CONTROL_DATA_SIZE];
    }

    /// Last identified controller type.
    #[inline]
    #[must_use]
    pub fn controller_type(&self) -> ControllerType {
        self.connected
    }

    /// Full control data buffer, including bytes beyond the last read.
    #[inline]
    #[must_use]
    pub fn control_data(&self) -> &ControlData {
        &self.control_data
    }

    /// Overwrite one byte of control data.
    ///
    /// Useful for injecting reports in tests and for controllers that patch
    /// their own report after a read.
    pub fn set_control_data(&mut self, index: usize, value: u8) {
        self.control_data[index] = value;
    }

    /// Get a reference to the transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Get a mutable reference to the transport.
    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    /// Decompose the endpoint, returning the transport.
    pub fn into_transport(self) -> T {
        self.transport
    }
}
