/// Device trait - the created rendering device
///
/// The render-loop guard drives a device through scene begin/end and
/// cooperative loss recovery; everything else the device can do
/// (resource creation, draw submission) is out of scope here.

use crate::error::Result;
use crate::adapter::adapter::WindowHandle;
use crate::adapter::present::PresentParameters;

/// Cooperative-level status of a device
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceStatus {
    /// Device is usable
    Operational,
    /// Device lost and not yet resettable; do not render, poll again
    Lost,
    /// Device lost but resettable; release resources and reset
    NotReset,
}

/// A created rendering device
///
/// All calls run on the thread that owns the device; none suspend or
/// block. Loss recovery is driven by the caller polling [`status`]
/// through the render-loop guard.
///
/// [`status`]: Device::status
pub trait Device {
    /// Poll the cooperative-level status
    fn status(&self) -> DeviceStatus;

    /// Reset the device with new presentation parameters
    ///
    /// Only meaningful after [`DeviceStatus::NotReset`]; all
    /// device-dependent resources must have been released first.
    fn reset(&mut self, present: &PresentParameters) -> Result<()>;

    /// Start a native scene
    fn begin_scene(&mut self) -> Result<()>;

    /// End the native scene
    fn end_scene(&mut self);

    /// Present the backbuffer
    ///
    /// # Arguments
    ///
    /// * `dest` - Destination window; `None` presents to the device
    ///   window given at creation
    fn present(&mut self, dest: Option<WindowHandle>);
}
