//! Latest report handed from the poll task to the report task.

use extension_core::{Axis, Button, ControlData, ControllerType, ExtensionController, Transport};
use extension_proto::layout_for;

/// Copy of one verified report together with the type that produced it.
#[derive(Clone, Copy, Debug, defmt::Format)]
pub struct Snapshot {
    pub controller: ControllerType,
    pub data: ControlData,
    pub len: usize,
}

impl Snapshot {
    /// Capture the current report of `session`.
    #[must_use]
    pub fn capture<T: Transport>(session: &ExtensionController<'_, T>) -> Self {
        Self {
            controller: session.controller_type(),
            data: *session.endpoint().control_data(),
            len: session.request_size(),
        }
    }

    /// The requested part of the report.
    #[inline]
    #[must_use]
    pub fn report(&self) -> &[u8] {
        &self.data[..self.len]
    }

    #[must_use]
    pub fn axis(&self, axis: Axis) -> Option<u8> {
        layout_for(self.controller)?.axis(&self.data, axis)
    }

    #[must_use]
    pub fn button(&self, button: Button) -> Option<bool> {
        layout_for(self.controller)?.button(&self.data, button)
    }

    /// Pressed buttons as a bit mask, in layout table order.
    ///
    /// Zero when the controller has no known layout.
    #[must_use]
    pub fn pressed(&self) -> u32 {
        layout_for(self.controller).map_or(0, |layout| layout.pressed(&self.data))
    }
}
