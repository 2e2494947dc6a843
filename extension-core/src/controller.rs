//! Controller session: the connect / update / reset state machine.

use core::ops::{Deref, DerefMut};

use extension_proto::{
    extract_bit, extract_byte, extract_combined, layout_for, verify_data, Axis, BitMap, Button,
    ByteMap, ControllerType, Layout, MAX_REQUEST_SIZE, MIN_REQUEST_SIZE,
};

use crate::endpoint::BusEndpoint;
use crate::error::Error;
use crate::transport::Transport;

/// How a session holds its endpoint.
///
/// An owned endpoint is dropped with the session. A borrowed one outlives
/// it and can be handed to the next view once this session is gone.
pub enum Port<'a, T> {
    Owned(BusEndpoint<T>),
    Borrowed(&'a mut BusEndpoint<T>),
}

impl<T> Port<'_, T> {
    #[inline]
    #[must_use]
    pub fn is_owned(&self) -> bool {
        matches!(self, Port::Owned(_))
    }
}

impl<T> Deref for Port<'_, T> {
    type Target = BusEndpoint<T>;

    fn deref(&self) -> &Self::Target {
        match self {
            Port::Owned(endpoint) => endpoint,
            Port::Borrowed(endpoint) => &**endpoint,
        }
    }
}

impl<T> DerefMut for Port<'_, T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        match self {
            Port::Owned(endpoint) => endpoint,
            Port::Borrowed(endpoint) => &mut **endpoint,
        }
    }
}

/// Lifecycle of a controller session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SessionState {
    /// Nothing connected, or the last bus transfer failed.
    Disconnected,
    /// Unencrypted mode accepted, identity not read yet.
    Initialized,
    /// A device answered; no verified report yet.
    Identified,
    /// The last report passed verification.
    Connected,
}

/// Front end for one extension controller.
///
/// Drives initialization, identification and polling against a
/// [`BusEndpoint`] and decodes the resulting report.
///
/// # Example
///
/// ```ignore
/// use extension_core::{ExtensionController, I2cTransport};
/// use extension_proto::{Axis, Button, ControllerType};
///
/// let transport = I2cTransport::new(i2c, delay);
/// let mut classic =
///     ExtensionController::new(transport).expecting(ControllerType::ClassicController);
///
/// classic.connect()?;
/// loop {
///     if classic.update().is_ok() {
///         let x = classic.axis(Axis::LeftJoyX);
///         let a = classic.button(Button::A);
///     } else {
///         let _ = classic.reconnect();
///     }
/// }
/// ```
///
/// # Sharing an endpoint
///
/// Several views may take turns on one endpoint. Only the view currently
/// holding the borrow can talk to the bus, so one owner drives the shared
/// buffer at a time:
///
/// ```ignore
/// let mut port = BusEndpoint::new(transport);
/// ExtensionController::shared(&mut port).connect()?;
///
/// let mut nunchuk = ExtensionController::shared(&mut port).expecting(ControllerType::Nunchuk);
/// nunchuk.update()?;
/// ```
pub struct ExtensionController<'a, T> {
    port: Port<'a, T>,
    expected: ControllerType,
    enforce: bool,
    request_size: usize,
    state: SessionState,
    bad_reports: u8,
}

impl<'a, T: Transport> ExtensionController<'a, T> {
    /// Create a session that owns a fresh endpoint on `transport`.
    ///
    /// Accepts any connected controller until [`expecting`] narrows it.
    ///
    /// [`expecting`]: Self::expecting
    #[must_use]
    pub fn new(transport: T) -> Self {
        Self::from_port(Port::Owned(BusEndpoint::new(transport)))
    }

    /// Create a session on an endpoint owned elsewhere.
    ///
    /// The identified type and the report already in the endpoint carry
    /// over, so a view created after another view connected can decode
    /// right away.
    #[must_use]
    pub fn shared(endpoint: &'a mut BusEndpoint<T>) -> Self {
        Self::from_port(Port::Borrowed(endpoint))
    }

    /// Create a session from an explicit [`Port`].
    #[must_use]
    pub fn from_port(port: Port<'a, T>) -> Self {
        let state = if port.controller_type().is_connected() {
            SessionState::Identified
        } else {
            SessionState::Disconnected
        };

        Self {
            port,
            expected: ControllerType::AnyController,
            enforce: false,
            request_size: MIN_REQUEST_SIZE,
            state,
            bad_reports: 0,
        }
    }

    /// Only accept `controller`, and request the report size its layout
    /// needs. [`ControllerType::AnyController`] turns enforcement off.
    #[must_use]
    pub fn expecting(mut self, controller: ControllerType) -> Self {
        self.expected = controller;
        self.enforce = controller != ControllerType::AnyController;
        if let Some(layout) = layout_for(controller) {
            self.request_size = layout.request_size;
        }
        self
    }

    /// Initialize, identify and seed the report.
    ///
    /// A failed init write clears the identified type and skips
    /// identification. A type mismatch is reported without clearing the
    /// identified type, so [`controller_type`] still tells what was found.
    ///
    /// [`controller_type`]: Self::controller_type
    pub fn connect(&mut self) -> Result<(), Error<T::Error>> {
        if let Err(e) = self.port.initialize() {
            warn!("Extension init failed");
            self.port.disconnect();
            self.state = SessionState::Disconnected;
            return Err(Error::Bus(e));
        }
        self.state = SessionState::Initialized;
        self.bad_reports = 0;

        let found = self.port.identify();
        self.state = if found.is_connected() {
            SessionState::Identified
        } else {
            SessionState::Disconnected
        };

        if let Err(e) = self.check_type() {
            if let Error::TypeMismatch { expected, found } = e {
                warn!("Expected {}, found {}", expected, found);
            }
            return Err(e);
        }

        info!("Connected {}", found);
        self.update()
    }

    /// Clear everything, then [`connect`](Self::connect) again.
    ///
    /// Use when the physical device may have been swapped.
    pub fn reconnect(&mut self) -> Result<(), Error<T::Error>> {
        self.reset();
        self.connect()
    }

    /// Poll one report.
    ///
    /// Fails without touching the bus unless the identified type matches
    /// the expectation. A bus failure marks the port as disconnected but
    /// keeps the last good report. A report that reads back as all `0x00` or
    /// all `0xFF` is kept in the buffer, reported as [`Error::BadData`] and
    /// counted in [`consecutive_bad_reports`](Self::consecutive_bad_reports).
    pub fn update(&mut self) -> Result<(), Error<T::Error>> {
        self.check_type()?;

        if let Err(e) = self.port.request_control_data(self.request_size) {
            trace!("Control data read failed");
            self.port.disconnect();
            self.state = SessionState::Disconnected;
            return Err(Error::Bus(e));
        }

        if verify_data(self.control_data()) {
            self.state = SessionState::Connected;
            self.bad_reports = 0;
            Ok(())
        } else {
            trace!("Control data failed verification");
            self.state = SessionState::Identified;
            self.bad_reports = self.bad_reports.saturating_add(1);
            Err(Error::BadData)
        }
    }

    /// Forget the identified type and zero the entire report buffer.
    pub fn reset(&mut self) {
        debug!("Resetting extension port");
        self.port.reset();
        self.state = SessionState::Disconnected;
        self.bad_reports = 0;
    }

    /// Whether the identified type satisfies this session.
    ///
    /// True when it equals the expected type, or when enforcement is off
    /// and anything at all is connected. Never true with nothing connected,
    /// even when the expected type is [`ControllerType::NoController`].
    #[must_use]
    pub fn controller_id_matches(&self) -> bool {
        let connected = self.port.controller_type();
        connected.is_connected() && (connected == self.expected || !self.enforce)
    }

    fn check_type(&self) -> Result<(), Error<T::Error>> {
        if self.controller_id_matches() {
            return Ok(());
        }

        let found = self.port.controller_type();
        if found.is_connected() {
            Err(Error::TypeMismatch {
                expected: self.expected,
                found,
            })
        } else {
            Err(Error::NoController)
        }
    }

    /// Type identified on the last (re)connect.
    #[inline]
    #[must_use]
    pub fn controller_type(&self) -> ControllerType {
        self.port.controller_type()
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        // Another view on the same endpoint may have reset it
        if self.port.controller_type().is_connected() {
            self.state
        } else {
            SessionState::Disconnected
        }
    }

    /// Reports rejected in a row since the last good one.
    ///
    /// An all-`0x00` or all-`0xFF` stream usually means the device lost its
    /// init. Callers should [`reconnect`](Self::reconnect) once this grows.
    #[inline]
    #[must_use]
    pub fn consecutive_bad_reports(&self) -> u8 {
        self.bad_reports
    }

    #[inline]
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state() == SessionState::Connected
    }

    /// The requested part of the report buffer.
    #[inline]
    #[must_use]
    pub fn control_data(&self) -> &[u8] {
        &self.port.control_data()[..self.request_size]
    }

    /// One raw report byte.
    ///
    /// # Panics
    ///
    /// Panics if `index` is outside the report buffer.
    #[inline]
    #[must_use]
    pub fn control_byte(&self, index: usize) -> u8 {
        self.port.control_data()[index]
    }

    /// One active-low report bit: `true` when the bit is `0`.
    #[inline]
    #[must_use]
    pub fn control_bit(&self, index: usize, position: u8) -> bool {
        self.flag(BitMap::new(index, position))
    }

    /// Decode one byte descriptor against the report.
    #[inline]
    #[must_use]
    pub fn field(&self, map: ByteMap) -> u8 {
        extract_byte(self.port.control_data(), map)
    }

    /// Decode a field assembled from several byte descriptors.
    #[inline]
    #[must_use]
    pub fn field_combined(&self, maps: &[ByteMap]) -> u8 {
        extract_combined(self.port.control_data(), maps)
    }

    /// Decode one bit descriptor against the report.
    #[inline]
    #[must_use]
    pub fn flag(&self, map: BitMap) -> bool {
        extract_bit(self.port.control_data(), map)
    }

    /// Layout table of the connected controller, if one is known.
    #[must_use]
    pub fn layout(&self) -> Option<&'static Layout> {
        layout_for(self.controller_type())
    }

    /// Decode a named analog control of the connected controller.
    #[must_use]
    pub fn axis(&self, axis: Axis) -> Option<u8> {
        self.layout()?.axis(self.port.control_data(), axis)
    }

    /// Decode a named button of the connected controller.
    #[must_use]
    pub fn button(&self, button: Button) -> Option<bool> {
        self.layout()?.button(self.port.control_data(), button)
    }

    #[inline]
    #[must_use]
    pub fn expected_type(&self) -> ControllerType {
        self.expected
    }

    pub fn set_expected_type(&mut self, controller: ControllerType) {
        self.expected = controller;
    }

    #[inline]
    #[must_use]
    pub fn enforces_type(&self) -> bool {
        self.enforce
    }

    /// Reject controllers other than the expected type.
    pub fn set_enforce_type(&mut self, enforce: bool) {
        self.enforce = enforce;
    }

    #[inline]
    #[must_use]
    pub fn request_size(&self) -> usize {
        self.request_size
    }

    /// Set how many report bytes each [`update`](Self::update) reads.
    ///
    /// Sizes outside `MIN_REQUEST_SIZE..=MAX_REQUEST_SIZE` are rejected and
    /// leave the current size in place.
    pub fn set_request_size(&mut self, size: usize) -> Result<(), Error<T::Error>> {
        if !(MIN_REQUEST_SIZE..=MAX_REQUEST_SIZE).contains(&size) {
            return Err(Error::InvalidRequestSize(size));
        }
        self.request_size = size;
        Ok(())
    }

    /// Get a reference to the endpoint.
    pub fn endpoint(&self) -> &BusEndpoint<T> {
        &self.port
    }

    /// Get a mutable reference to the endpoint.
    pub fn endpoint_mut(&mut self) -> &mut BusEndpoint<T> {
        &mut self.port
    }

    /// Get a reference to the port.
    pub fn port(&self) -> &Port<'a, T> {
        &self.port
    }

    /// Take back an owned endpoint. Borrowed endpoints yield `None`.
    pub fn into_endpoint(self) -> Option<BusEndpoint<T>> {
        match self.port {
            Port::Owned(endpoint) => Some(endpoint),
            Port::Borrowed(_) => None,
        }
    }
}
