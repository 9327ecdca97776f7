/// Video-mode enumerator - the format-negotiation cascade
///
/// Walks the (display, backbuffer) preference table for the requested
/// bit depth, validates each pair against the adapter (device support,
/// multisampling, depth-format resolution), enumerates every native
/// mode under the first surviving pair, and reduces the result to one
/// mode per resolution anchored on the current monitor refresh rate.

use crate::astra_debug;
use crate::adapter::{Adapter, DeviceKind, Format, Multisample, DEFAULT_ADAPTER};
use crate::error::{Error, Result};
use crate::videomode::depth_format::find_depth_format;
use crate::videomode::reduce::reduce_to_closest_refresh;
use crate::videomode::video_mode::VideoMode;

/// One entry of a (display, backbuffer) preference table
#[derive(Debug, Clone, Copy)]
pub struct FormatPair {
    /// Display surface format (opaque counterpart of the backbuffer)
    pub display: Format,
    /// Backbuffer format
    pub backbuffer: Format,
    /// Whether the backbuffer format carries alpha (kept under `alpha_only`)
    pub alpha: bool,
}

/// Format pairs for a 32-bit screen buffer, in preference order
pub const FORMAT_PAIRS_32: &[FormatPair] = &[
    FormatPair { display: Format::X8R8G8B8, backbuffer: Format::A8R8G8B8, alpha: true },
    FormatPair { display: Format::X8R8G8B8, backbuffer: Format::X8R8G8B8, alpha: false },
];

/// Format pairs for a 16-bit screen buffer, in preference order
pub const FORMAT_PAIRS_16: &[FormatPair] = &[
    FormatPair { display: Format::X1R5G5B5, backbuffer: Format::A1R5G5B5, alpha: true },
    FormatPair { display: Format::X1R5G5B5, backbuffer: Format::X1R5G5B5, alpha: false },
    FormatPair { display: Format::R5G6B5, backbuffer: Format::R5G6B5, alpha: false },
];

/// Constraints for a video-mode search
#[derive(Debug, Clone, Copy)]
pub struct FindModesRequest {
    /// Bits per pixel of the screen buffer; must be 16 or 32
    pub bits_per_pixel: u8,
    /// Requested multisampling level
    pub samples: Multisample,
    /// Windowed (true) or fullscreen (false) operation
    pub windowed: bool,
    /// Consider only backbuffer formats carrying an alpha channel
    pub alpha_only: bool,
    /// Consider only depth formats carrying stencil bits
    pub stencil_only: bool,
    /// Adapter to query
    pub adapter_index: u32,
    /// Device kind to negotiate against
    pub device_kind: DeviceKind,
}

impl Default for FindModesRequest {
    fn default() -> Self {
        Self {
            bits_per_pixel: 32,
            samples: Multisample::None,
            windowed: false,
            alpha_only: false,
            stencil_only: false,
            adapter_index: DEFAULT_ADAPTER,
            device_kind: DeviceKind::Hardware,
        }
    }
}

/// Enumerate the usable video modes for the given constraints
///
/// Runs the negotiation cascade: the first (display, backbuffer) pair
/// in preference order that the adapter supports, that passes the
/// multisample check, and for which a depth format resolves, wins;
/// every native mode under its display format is then enumerated and
/// reduced ([`reduce_to_closest_refresh`]) with the current monitor
/// refresh rate as anchor.
///
/// `quality_levels` is an in/out multisample-quality ceiling: the
/// backbuffer check writes the available level count through it, and
/// the depth-format resolution lowers it further if the depth surface
/// supports fewer levels.
///
/// The call is pure with respect to the adapter state: repeated calls
/// with the same constraints yield the identical list in the identical
/// order.
///
/// # Errors
///
/// * [`Error::InvalidCall`] - `bits_per_pixel` is neither 16 nor 32
/// * [`Error::NotFound`] - no format pair survived the cascade
pub fn find_video_modes(
    api: &dyn Adapter,
    request: &FindModesRequest,
    mut quality_levels: Option<&mut u32>,
) -> Result<Vec<VideoMode>> {
    let pairs: &[FormatPair] = match request.bits_per_pixel {
        32 => FORMAT_PAIRS_32,
        16 => FORMAT_PAIRS_16,
        other => {
            return Err(Error::InvalidCall(format!(
                "bits per pixel must be 16 or 32, got {}",
                other
            )));
        }
    };

    // Walk the preference table; the first fully-validated pair wins
    let mut winner: Option<(FormatPair, Format)> = None;
    for pair in pairs {
        if request.alpha_only && !pair.alpha {
            continue;
        }

        if !api.supports_device_type(
            request.adapter_index,
            request.device_kind,
            pair.display,
            pair.backbuffer,
            request.windowed,
        ) {
            continue;
        }

        if !request.samples.is_none() {
            let Some(levels) = api.multisample_quality_levels(
                request.adapter_index,
                request.device_kind,
                pair.backbuffer,
                request.windowed,
                request.samples,
            ) else {
                continue;
            };
            if let Some(ceiling) = quality_levels.as_deref_mut() {
                *ceiling = levels;
            }
        }

        let Some(depth_format) = find_depth_format(
            api,
            request.bits_per_pixel,
            pair.display,
            pair.backbuffer,
            request.samples,
            quality_levels.as_deref_mut(),
            request.windowed,
            request.stencil_only,
            request.adapter_index,
            request.device_kind,
        ) else {
            continue;
        };

        winner = Some((*pair, depth_format));
        break;
    }

    let Some((pair, depth_format)) = winner else {
        return Err(Error::NotFound);
    };

    astra_debug!(
        "astra::videomode",
        "format pair won: display {:?}, backbuffer {:?}, depth {:?}",
        pair.display,
        pair.backbuffer,
        depth_format
    );

    // Enumerate every native mode under the winning display format;
    // unenumerable indices are skipped
    let count = api.mode_count(request.adapter_index, pair.display);
    let mut modes = Vec::with_capacity(count as usize);
    for index in 0..count {
        let Some(display_mode) = api.mode(request.adapter_index, pair.display, index) else {
            continue;
        };
        modes.push(VideoMode {
            display_mode,
            bits_per_pixel: request.bits_per_pixel,
            alpha_in_backbuffer: display_mode.format.has_alpha(),
            stencil: depth_format.has_stencil(),
            depth_format,
        });
    }

    reduce_to_closest_refresh(&mut modes, api.current_refresh_rate());

    Ok(modes)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "enumerate_tests.rs"]
mod tests;
