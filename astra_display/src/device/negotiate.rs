/// Device negotiator - creation with vertex-processing fallback
///
/// Assembles presentation parameters from a chosen video mode and
/// attempts hardware, then mixed, then software vertex processing.
/// On adapters without hardware transform and lighting only the
/// software tier is tried.

use crate::{astra_error, astra_info};
use crate::adapter::{
    Adapter, CreateFlags, Device, DeviceKind, Multisample, PresentInterval, PresentParameters,
    SwapEffect, WindowHandle, DEFAULT_ADAPTER,
};
use crate::error::{Error, Result};
use crate::videomode::VideoMode;

/// Options for device creation
#[derive(Debug, Clone, Copy)]
pub struct DeviceRequest {
    /// Multisampling level to create with
    pub samples: Multisample,
    /// Multisampling quality tier (bounded by the negotiated ceiling)
    pub quality: u32,
    /// Windowed (true) or fullscreen (false)
    pub windowed: bool,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
    /// Window to attach the device to; defaults to the focused window
    pub window: Option<WindowHandle>,
    /// Adapter to create on
    pub adapter_index: u32,
    /// Device kind to create
    pub device_kind: DeviceKind,
}

impl Default for DeviceRequest {
    fn default() -> Self {
        Self {
            samples: Multisample::None,
            quality: 0,
            windowed: false,
            vsync: false,
            window: None,
            adapter_index: DEFAULT_ADAPTER,
            device_kind: DeviceKind::Hardware,
        }
    }
}

/// Outcome of a successful device negotiation
pub struct NegotiatedDevice {
    /// The created device
    pub device: Box<dyn Device>,
    /// The presentation parameters actually used (needed for resets)
    pub present: PresentParameters,
    /// The vertex-processing tier actually obtained
    pub vertex_processing: CreateFlags,
}

/// Create a rendering device for a negotiated video mode
///
/// The target window defaults to the window with input focus when
/// `request.window` is unset. Vertex-processing tiers are tried from
/// hardware down to software; the first successful creation wins and
/// the parameters/tier actually used are returned alongside the device.
///
/// # Errors
///
/// * [`Error::NoPreliminaryDone`] - no window given and none focused
/// * [`Error::NotAvailable`] - every creation attempt failed
pub fn negotiate_device(
    api: &dyn Adapter,
    mode: &VideoMode,
    request: &DeviceRequest,
) -> Result<NegotiatedDevice> {
    let window = request
        .window
        .or_else(|| api.focused_window())
        .ok_or_else(|| {
            Error::NoPreliminaryDone("no window given and none has input focus".to_string())
        })?;

    let present = PresentParameters {
        // The backend sizes the backbuffer to the window when windowed
        backbuffer_width: if request.windowed { 0 } else { mode.width() },
        backbuffer_height: if request.windowed { 0 } else { mode.height() },
        backbuffer_format: mode.display_mode.format,
        backbuffer_count: 1,
        multisample: request.samples,
        multisample_quality: request.quality,
        swap_effect: SwapEffect::Discard,
        device_window: window,
        windowed: request.windowed,
        auto_depth_stencil: true,
        auto_depth_stencil_format: mode.depth_format,
        fullscreen_refresh_rate: if request.windowed { 0 } else { mode.refresh_rate() },
        presentation_interval: if request.vsync {
            PresentInterval::One
        } else {
            PresentInterval::Immediate
        },
    };

    let tiers: &[CreateFlags] =
        if api.supports_hardware_tnl(request.adapter_index, request.device_kind) {
            &[
                CreateFlags::HARDWARE_VERTEX_PROCESSING,
                CreateFlags::MIXED_VERTEX_PROCESSING,
                CreateFlags::SOFTWARE_VERTEX_PROCESSING,
            ]
        } else {
            &[CreateFlags::SOFTWARE_VERTEX_PROCESSING]
        };

    for &vertex_processing in tiers {
        match api.create_device(
            request.adapter_index,
            request.device_kind,
            window,
            vertex_processing,
            &present,
        ) {
            Ok(device) => {
                astra_info!(
                    "astra::device",
                    "device created with {:?}",
                    vertex_processing
                );
                return Ok(NegotiatedDevice {
                    device,
                    present,
                    vertex_processing,
                });
            }
            // Creation failure is non-fatal; fall through to the next tier
            Err(_) => continue,
        }
    }

    astra_error!("astra::device", "all vertex-processing tiers failed");
    Err(Error::NotAvailable)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "negotiate_tests.rs"]
mod tests;
