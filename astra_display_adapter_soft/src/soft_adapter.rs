/// SoftAdapter - table-driven implementation of the adapter boundary
///
/// Every capability query is a lookup in the [`SoftAdapterCaps`]
/// profile. Created devices are [`SoftDevice`]s; their shared state
/// handles are retained so tests can observe devices created through
/// the negotiation glue.

use std::sync::{Arc, Mutex};

use astra_display::astra::adapter::{
    Adapter, CreateFlags, Device, DeviceKind, DisplayMode, Format, Multisample,
    PresentParameters, WindowHandle,
};
use astra_display::astra::{Error, Result};

use crate::caps::SoftAdapterCaps;
use crate::soft_device::{SoftDevice, SoftDeviceState};

/// Software adapter over a capability profile
pub struct SoftAdapter {
    caps: SoftAdapterCaps,
    creation_attempts: Mutex<Vec<CreateFlags>>,
    created_devices: Mutex<Vec<Arc<SoftDeviceState>>>,
}

impl SoftAdapter {
    /// Create an adapter over the given profile
    pub fn new(caps: SoftAdapterCaps) -> Self {
        Self {
            caps,
            creation_attempts: Mutex::new(Vec::new()),
            created_devices: Mutex::new(Vec::new()),
        }
    }

    /// An adapter over the [`SoftAdapterCaps::typical`] profile
    pub fn typical() -> Self {
        Self::new(SoftAdapterCaps::typical())
    }

    /// The capability profile
    pub fn caps(&self) -> &SoftAdapterCaps {
        &self.caps
    }

    /// Creation attempts observed so far, in order
    pub fn creation_attempts(&self) -> Vec<CreateFlags> {
        self.creation_attempts.lock().unwrap().clone()
    }

    /// State handles of every device created through this adapter
    pub fn created_devices(&self) -> Vec<Arc<SoftDeviceState>> {
        self.created_devices.lock().unwrap().clone()
    }
}

impl Adapter for SoftAdapter {
    fn supports_depth_format(
        &self,
        _adapter_index: u32,
        _device_kind: DeviceKind,
        display: Format,
        depth: Format,
    ) -> bool {
        self.caps.depth_surfaces.contains(&(display, depth))
    }

    fn supports_depth_match(
        &self,
        _adapter_index: u32,
        _device_kind: DeviceKind,
        display: Format,
        backbuffer: Format,
        depth: Format,
    ) -> bool {
        self.caps.depth_matches.contains(&(display, backbuffer, depth))
    }

    fn multisample_quality_levels(
        &self,
        _adapter_index: u32,
        _device_kind: DeviceKind,
        surface: Format,
        _windowed: bool,
        samples: Multisample,
    ) -> Option<u32> {
        if samples.is_none() {
            return Some(0);
        }
        self.caps.multisample.get(&(surface, samples)).copied()
    }

    fn supports_device_type(
        &self,
        _adapter_index: u32,
        _device_kind: DeviceKind,
        display: Format,
        backbuffer: Format,
        windowed: bool,
    ) -> bool {
        self.caps.device_types.contains(&(display, backbuffer, windowed))
    }

    fn mode_count(&self, _adapter_index: u32, display: Format) -> u32 {
        self.caps.modes.get(&display).map_or(0, |modes| modes.len() as u32)
    }

    fn mode(&self, _adapter_index: u32, display: Format, index: u32) -> Option<DisplayMode> {
        self.caps
            .modes
            .get(&display)
            .and_then(|modes| modes.get(index as usize))
            .copied()
    }

    fn current_refresh_rate(&self) -> u32 {
        self.caps.refresh_rate
    }

    fn supports_hardware_tnl(&self, _adapter_index: u32, _device_kind: DeviceKind) -> bool {
        self.caps.hardware_tnl
    }

    fn focused_window(&self) -> Option<WindowHandle> {
        self.caps.focused_window
    }

    fn create_device(
        &self,
        _adapter_index: u32,
        _device_kind: DeviceKind,
        _window: WindowHandle,
        flags: CreateFlags,
        _present: &PresentParameters,
    ) -> Result<Box<dyn Device>> {
        self.creation_attempts.lock().unwrap().push(flags);
        if self.caps.failing_tiers.intersects(flags) {
            return Err(Error::NotAvailable);
        }
        let device = SoftDevice::new();
        self.created_devices.lock().unwrap().push(device.state());
        Ok(Box::new(device))
    }
}
