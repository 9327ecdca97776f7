/// Mock adapter and device for unit tests (no backend required)
///
/// Capability answers are plain membership lists so each gate of the
/// negotiation cascade can be opened or closed independently. The mock
/// device drains a scripted status queue and records every call it
/// receives.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::adapter::{
    Adapter, CreateFlags, Device, DeviceKind, DeviceStatus, DisplayMode, Format, Multisample,
    PresentParameters, WindowHandle,
};
use crate::error::{Error, Result};

// ============================================================================
// Mock Adapter
// ============================================================================

pub struct MockAdapter {
    /// Formats accepted as depth/stencil surfaces
    pub usable_depth_formats: Vec<Format>,
    /// Formats accepted as depth/backbuffer pairings
    pub matching_depth_formats: Vec<Format>,
    /// (surface, quality levels) supported at any non-trivial multisample level
    pub multisampled_formats: Vec<(Format, u32)>,
    /// (display, backbuffer) combinations the device kind can drive
    pub supported_pairs: Vec<(Format, Format)>,
    /// Enumerable native modes (filtered by display format on query)
    pub modes: Vec<DisplayMode>,
    /// Current monitor refresh rate
    pub refresh_rate: u32,
    /// Whether the device kind reports hardware transform and lighting
    pub hardware_tnl: bool,
    /// The window with input focus, if any
    pub focused_window: Option<WindowHandle>,
    /// Vertex-processing tiers whose creation attempts fail
    pub failing_tiers: CreateFlags,
    /// Record of creation attempts, in order
    pub creation_attempts: Mutex<Vec<CreateFlags>>,
}

impl MockAdapter {
    /// An adapter that accepts every query the cascade can make
    pub fn permissive() -> Self {
        Self {
            usable_depth_formats: vec![
                Format::D24S8,
                Format::D24X4S4,
                Format::D24X8,
                Format::D32,
                Format::D15S1,
                Format::D16,
            ],
            matching_depth_formats: vec![
                Format::D24S8,
                Format::D24X4S4,
                Format::D24X8,
                Format::D32,
                Format::D15S1,
                Format::D16,
            ],
            multisampled_formats: vec![
                (Format::A8R8G8B8, 4),
                (Format::X8R8G8B8, 4),
                (Format::A1R5G5B5, 2),
                (Format::X1R5G5B5, 2),
                (Format::R5G6B5, 2),
                (Format::D24S8, 4),
                (Format::D24X4S4, 4),
                (Format::D24X8, 4),
                (Format::D32, 4),
                (Format::D15S1, 2),
                (Format::D16, 2),
            ],
            supported_pairs: vec![
                (Format::X8R8G8B8, Format::A8R8G8B8),
                (Format::X8R8G8B8, Format::X8R8G8B8),
                (Format::X1R5G5B5, Format::A1R5G5B5),
                (Format::X1R5G5B5, Format::X1R5G5B5),
                (Format::R5G6B5, Format::R5G6B5),
            ],
            modes: vec![
                DisplayMode { width: 800, height: 600, refresh_rate: 60, format: Format::X8R8G8B8 },
                DisplayMode { width: 1024, height: 768, refresh_rate: 60, format: Format::X8R8G8B8 },
                DisplayMode { width: 800, height: 600, refresh_rate: 60, format: Format::X1R5G5B5 },
                DisplayMode { width: 800, height: 600, refresh_rate: 60, format: Format::R5G6B5 },
            ],
            refresh_rate: 60,
            hardware_tnl: true,
            focused_window: Some(WindowHandle::from_raw(1)),
            failing_tiers: CreateFlags::empty(),
            creation_attempts: Mutex::new(Vec::new()),
        }
    }
}

impl Adapter for MockAdapter {
    fn supports_depth_format(
        &self,
        _adapter_index: u32,
        _device_kind: DeviceKind,
        _display: Format,
        depth: Format,
    ) -> bool {
        self.usable_depth_formats.contains(&depth)
    }

    fn supports_depth_match(
        &self,
        _adapter_index: u32,
        _device_kind: DeviceKind,
        _display: Format,
        _backbuffer: Format,
        depth: Format,
    ) -> bool {
        self.matching_depth_formats.contains(&depth)
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
        self.multisampled_formats
            .iter()
            .find(|(f, _)| *f == surface)
            .map(|(_, levels)| *levels)
    }

    fn supports_device_type(
        &self,
        _adapter_index: u32,
        _device_kind: DeviceKind,
        display: Format,
        backbuffer: Format,
        _windowed: bool,
    ) -> bool {
        self.supported_pairs.contains(&(display, backbuffer))
    }

    fn mode_count(&self, _adapter_index: u32, display: Format) -> u32 {
        self.modes.iter().filter(|m| m.format == display).count() as u32
    }

    fn mode(&self, _adapter_index: u32, display: Format, index: u32) -> Option<DisplayMode> {
        self.modes
            .iter()
            .filter(|m| m.format == display)
            .nth(index as usize)
            .copied()
    }

    fn current_refresh_rate(&self) -> u32 {
        self.refresh_rate
    }

    fn supports_hardware_tnl(&self, _adapter_index: u32, _device_kind: DeviceKind) -> bool {
        self.hardware_tnl
    }

    fn focused_window(&self) -> Option<WindowHandle> {
        self.focused_window
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
        if self.failing_tiers.intersects(flags) {
            return Err(Error::NotAvailable);
        }
        Ok(Box::new(MockDevice::operational()))
    }
}

// ============================================================================
// Mock Device
// ============================================================================

pub struct MockDevice {
    /// Statuses returned by successive status() polls (Operational when drained)
    statuses: Mutex<VecDeque<DeviceStatus>>,
    /// Call record: "begin_scene", "end_scene", "present", "reset"
    pub events: Arc<Mutex<Vec<String>>>,
    /// Make begin_scene fail
    pub fail_begin_scene: bool,
    /// Make reset fail
    pub fail_reset: bool,
}

impl MockDevice {
    /// A healthy device
    pub fn operational() -> Self {
        Self::scripted(Vec::new())
    }

    /// A device whose status() polls drain the given sequence
    pub fn scripted(statuses: Vec<DeviceStatus>) -> Self {
        Self {
            statuses: Mutex::new(statuses.into()),
            events: Arc::new(Mutex::new(Vec::new())),
            fail_begin_scene: false,
            fail_reset: false,
        }
    }

    /// Shared handle to the call record
    pub fn events_handle(&self) -> Arc<Mutex<Vec<String>>> {
        self.events.clone()
    }
}

impl Device for MockDevice {
    fn status(&self) -> DeviceStatus {
        self.statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(DeviceStatus::Operational)
    }

    fn reset(&mut self, _present: &PresentParameters) -> Result<()> {
        self.events.lock().unwrap().push("reset".to_string());
        if self.fail_reset {
            return Err(Error::NotAvailable);
        }
        Ok(())
    }

    fn begin_scene(&mut self) -> Result<()> {
        if self.fail_begin_scene {
            return Err(Error::InvalidCall("begin_scene failed".to_string()));
        }
        self.events.lock().unwrap().push("begin_scene".to_string());
        Ok(())
    }

    fn end_scene(&mut self) {
        self.events.lock().unwrap().push("end_scene".to_string());
    }

    fn present(&mut self, dest: Option<WindowHandle>) {
        let event = match dest {
            Some(window) => format!("present:{}", window.as_raw()),
            None => "present".to_string(),
        };
        self.events.lock().unwrap().push(event);
    }
}
