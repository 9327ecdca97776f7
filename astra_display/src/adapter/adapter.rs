/// Adapter trait - capability oracle and device factory
///
/// This is the narrow interface through which the negotiation core
/// consumes the native graphics subsystem. Every question the format
/// cascade asks ("is this depth format usable with that display
/// format?", "how many modes exist under this format?") is one method
/// here, and backends answer from the real driver.

use crate::error::Result;
use crate::adapter::format::Format;
use crate::adapter::device::Device;
use crate::adapter::present::{CreateFlags, PresentParameters};

/// Index of the default adapter in the system
pub const DEFAULT_ADAPTER: u32 = 0;

/// Native device type to negotiate against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    /// Hardware rasterization
    Hardware,
    /// Reference (software) rasterizer, for validation
    Reference,
    /// Pluggable software device
    Software,
}

/// Multisampling level
///
/// The negotiation cascade only distinguishes `None` from the sampled
/// levels; the concrete level is passed through to the adapter queries
/// unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multisample {
    None,
    X2,
    X4,
    X6,
    X8,
    X16,
}

impl Multisample {
    /// Whether this is the trivial (non-multisampled) level
    pub fn is_none(self) -> bool {
        matches!(self, Multisample::None)
    }
}

/// Opaque host window handle
///
/// Window-system integration is out of scope for this crate; the handle
/// is carried through to the backend without interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(u64);

impl WindowHandle {
    /// Wrap a raw host window handle value
    pub fn from_raw(raw: u64) -> Self {
        WindowHandle(raw)
    }

    /// The raw host window handle value
    pub fn as_raw(self) -> u64 {
        self.0
    }
}

/// One native enumerable display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayMode {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Refresh rate in Hz
    pub refresh_rate: u32,
    /// Display surface format
    pub format: Format,
}

/// Capability oracle and device factory for one native graphics API
///
/// Implemented by backends (driver bindings, or the soft adapter for
/// headless use). All queries are synchronous and treated as immediate;
/// `adapter_index` selects the physical adapter on every call, matching
/// the native API's stateless query model.
pub trait Adapter: Send + Sync {
    /// Whether `depth` is usable as a depth/stencil surface under the
    /// given display format
    fn supports_depth_format(
        &self,
        adapter_index: u32,
        device_kind: DeviceKind,
        display: Format,
        depth: Format,
    ) -> bool;

    /// Whether `depth` is a valid depth/stencil pairing for the given
    /// display and backbuffer formats
    fn supports_depth_match(
        &self,
        adapter_index: u32,
        device_kind: DeviceKind,
        display: Format,
        backbuffer: Format,
        depth: Format,
    ) -> bool;

    /// Multisampling support for a surface format
    ///
    /// # Returns
    ///
    /// `Some(levels)` with the number of quality levels available at
    /// `samples`, or `None` if the level is unsupported.
    fn multisample_quality_levels(
        &self,
        adapter_index: u32,
        device_kind: DeviceKind,
        surface: Format,
        windowed: bool,
        samples: Multisample,
    ) -> Option<u32>;

    /// Whether the device kind can drive the given display/backbuffer
    /// format combination in windowed or fullscreen mode
    fn supports_device_type(
        &self,
        adapter_index: u32,
        device_kind: DeviceKind,
        display: Format,
        backbuffer: Format,
        windowed: bool,
    ) -> bool;

    /// Number of native display modes under a display format
    fn mode_count(&self, adapter_index: u32, display: Format) -> u32;

    /// Enumerate one native display mode
    ///
    /// # Returns
    ///
    /// `None` when `index` is out of range or the mode cannot be
    /// enumerated; the caller skips such entries.
    fn mode(&self, adapter_index: u32, display: Format, index: u32) -> Option<DisplayMode>;

    /// Current refresh rate of the monitor, in Hz
    ///
    /// Used as the anchor rate when reducing the enumerated mode list.
    fn current_refresh_rate(&self) -> u32;

    /// Whether the device kind offers hardware transform and lighting
    fn supports_hardware_tnl(&self, adapter_index: u32, device_kind: DeviceKind) -> bool;

    /// The window that currently has input focus, if any
    fn focused_window(&self) -> Option<WindowHandle>;

    /// Create a rendering device
    ///
    /// # Arguments
    ///
    /// * `window` - Window the device presents into
    /// * `flags` - Requested vertex-processing tier
    /// * `present` - Presentation parameters to create with
    ///
    /// # Returns
    ///
    /// The created device, or an error when this tier/parameter
    /// combination cannot be created (the negotiator falls back to the
    /// next tier).
    fn create_device(
        &self,
        adapter_index: u32,
        device_kind: DeviceKind,
        window: WindowHandle,
        flags: CreateFlags,
        present: &PresentParameters,
    ) -> Result<Box<dyn Device>>;
}
