/// Render-loop guard - per-device begin/end-of-frame state machine
///
/// Wraps scene begin/end with device-loss detection and cooperative
/// recovery. Each guard owns its device and its mid-frame state, so
/// multiple independent devices never share loss-recovery bookkeeping.

use crate::astra_info;
use crate::adapter::{Device, DeviceStatus, PresentParameters, WindowHandle};
use crate::error::{Error, Result};

/// Caller-supplied resource lifecycle callback
///
/// Returns whether the resource walk succeeded; the guard proceeds
/// either way, matching the cooperative recovery contract.
pub type ResourceCallback = Box<dyn FnMut() -> bool>;

/// Frame state of a guard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RenderState {
    Idle,
    InScene,
}

/// Per-device render-loop guard
///
/// Drives one device through `begin_render`/`end_render` pairs. On
/// `begin_render` the device health is polled: a lost device yields
/// [`Error::DeviceLost`] (poll again later); a resettable device
/// triggers the release callback, a reset attempt, and the recreate
/// callback, yielding [`Error::DeviceNotReset`] (skip this frame).
/// Both callbacks are mandatory constructor inputs.
///
/// Unmatched calls (`begin_render` mid-scene, `end_render` while idle)
/// are contract violations reported as [`Error::InvalidCall`] without
/// touching the device.
pub struct RenderGuard {
    device: Box<dyn Device>,
    present: PresentParameters,
    release_resources: ResourceCallback,
    recreate_resources: ResourceCallback,
    state: RenderState,
}

impl RenderGuard {
    /// Create a guard for a device
    ///
    /// # Arguments
    ///
    /// * `device` - The device to drive
    /// * `present` - Parameters to reset the device with after loss
    /// * `release_resources` - Releases all device-dependent resources
    ///   before a reset
    /// * `recreate_resources` - Recreates them after a successful reset
    pub fn new(
        device: Box<dyn Device>,
        present: PresentParameters,
        release_resources: impl FnMut() -> bool + 'static,
        recreate_resources: impl FnMut() -> bool + 'static,
    ) -> Self {
        Self {
            device,
            present,
            release_resources: Box::new(release_resources),
            recreate_resources: Box::new(recreate_resources),
            state: RenderState::Idle,
        }
    }

    /// Begin a frame
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidCall`] - a scene is already open, or the
    ///   native scene could not be started
    /// * [`Error::DeviceLost`] - device lost; render nothing, poll again
    /// * [`Error::DeviceNotReset`] - device was resettable; resources
    ///   were cycled through the callbacks, skip this frame
    pub fn begin_render(&mut self) -> Result<()> {
        if self.state == RenderState::InScene {
            return Err(Error::InvalidCall(
                "begin_render called while a scene is open".to_string(),
            ));
        }

        match self.device.status() {
            DeviceStatus::Lost => {
                // Lost and not yet resettable: render nothing, wait
                astra_info!("astra::RenderGuard", "device lost");
                Err(Error::DeviceLost)
            }
            DeviceStatus::NotReset => {
                astra_info!("astra::RenderGuard", "device lost, attempting reset");
                let _ = (self.release_resources)();
                if self.device.reset(&self.present).is_ok() {
                    let _ = (self.recreate_resources)();
                }
                // The frame is skipped regardless of the reset outcome
                Err(Error::DeviceNotReset)
            }
            DeviceStatus::Operational => {
                self.device.begin_scene().map_err(|_| {
                    Error::InvalidCall("the native scene could not be started".to_string())
                })?;
                self.state = RenderState::InScene;
                Ok(())
            }
        }
    }

    /// End the frame and present
    ///
    /// # Arguments
    ///
    /// * `dest` - Destination window; `None` presents to the device
    ///   window
    ///
    /// # Errors
    ///
    /// * [`Error::InvalidCall`] - no scene is open
    pub fn end_render(&mut self, dest: Option<WindowHandle>) -> Result<()> {
        if self.state == RenderState::Idle {
            return Err(Error::InvalidCall(
                "end_render called with no scene open".to_string(),
            ));
        }

        self.device.end_scene();
        self.device.present(dest);
        self.state = RenderState::Idle;
        Ok(())
    }

    /// Whether a scene is currently open
    pub fn is_in_scene(&self) -> bool {
        self.state == RenderState::InScene
    }

    /// The guarded device
    pub fn device(&self) -> &dyn Device {
        self.device.as_ref()
    }

    /// The guarded device, mutably
    pub fn device_mut(&mut self) -> &mut dyn Device {
        self.device.as_mut()
    }

    /// The presentation parameters used for resets
    pub fn present_parameters(&self) -> &PresentParameters {
        &self.present
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "render_guard_tests.rs"]
mod tests;
