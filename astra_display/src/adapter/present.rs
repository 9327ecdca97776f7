/// Presentation parameters and device-creation flags
///
/// These are the values handed across the device-creation boundary.
/// The negotiator assembles them from a chosen video mode; backends
/// consume them verbatim.

use bitflags::bitflags;
use crate::adapter::adapter::{Multisample, WindowHandle};
use crate::adapter::format::Format;

/// Backbuffer swap behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapEffect {
    /// Backbuffer contents are discarded after presenting
    Discard,
    /// Backbuffers rotate in order
    Flip,
    /// Backbuffer is copied to the front buffer
    Copy,
}

/// Presentation interval (vsync behavior)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentInterval {
    /// Present immediately, without waiting for vertical sync
    Immediate,
    /// Wait for one vertical sync per present
    One,
}

bitflags! {
    /// Device-creation behavior flags
    ///
    /// The vertex-processing tier flags are mutually exclusive; the
    /// negotiator picks exactly one per creation attempt.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CreateFlags: u32 {
        /// Transform and lighting on the GPU
        const HARDWARE_VERTEX_PROCESSING = 1 << 0;
        /// Transform and lighting split between GPU and CPU
        const MIXED_VERTEX_PROCESSING = 1 << 1;
        /// Transform and lighting on the CPU
        const SOFTWARE_VERTEX_PROCESSING = 1 << 2;
    }
}

/// Parameters a device is created (and reset) with
///
/// Assembled by the negotiator from a validated [`VideoMode`]; the
/// backbuffer extent is zeroed in windowed mode (the backend sizes it
/// to the window), and the fullscreen refresh rate is zeroed likewise.
///
/// [`VideoMode`]: crate::videomode::VideoMode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentParameters {
    /// Backbuffer width in pixels (0 in windowed mode)
    pub backbuffer_width: u32,
    /// Backbuffer height in pixels (0 in windowed mode)
    pub backbuffer_height: u32,
    /// Backbuffer pixel format
    pub backbuffer_format: Format,
    /// Number of backbuffers
    pub backbuffer_count: u32,
    /// Multisampling level
    pub multisample: Multisample,
    /// Multisampling quality tier
    pub multisample_quality: u32,
    /// Swap behavior
    pub swap_effect: SwapEffect,
    /// Window the device presents into
    pub device_window: WindowHandle,
    /// Windowed (true) or fullscreen (false)
    pub windowed: bool,
    /// Whether the backend manages the depth/stencil surface
    pub auto_depth_stencil: bool,
    /// Format of the managed depth/stencil surface
    pub auto_depth_stencil_format: Format,
    /// Fullscreen refresh rate in Hz (0 in windowed mode)
    pub fullscreen_refresh_rate: u32,
    /// Vsync behavior
    pub presentation_interval: PresentInterval,
}
