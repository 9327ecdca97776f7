/// Depth-format resolver - first preference-order match wins
///
/// The candidate tables are fixed, hand-ordered data: combined
/// depth+stencil at highest precision first, then the depth-only
/// formats, with the 16-bit formats as the final fallback of the 32-bit
/// search. Preference order lives in the tables, not in the search.

use crate::adapter::{Adapter, DeviceKind, Format, Multisample};

/// One entry of a depth-format preference table
#[derive(Debug, Clone, Copy)]
pub struct DepthCandidate {
    /// Candidate depth/stencil surface format
    pub format: Format,
    /// Whether the format carries stencil bits (kept under `stencil_only`)
    pub stencil: bool,
}

/// Depth candidates for a 32-bit screen buffer, in preference order.
/// The 16-bit entries at the tail are the last-resort fallback.
pub const DEPTH_CANDIDATES_32: &[DepthCandidate] = &[
    DepthCandidate { format: Format::D24S8, stencil: true },
    DepthCandidate { format: Format::D24X4S4, stencil: true },
    DepthCandidate { format: Format::D24X8, stencil: false },
    DepthCandidate { format: Format::D32, stencil: false },
    DepthCandidate { format: Format::D15S1, stencil: true },
    DepthCandidate { format: Format::D16, stencil: false },
];

/// Depth candidates for a 16-bit screen buffer, in preference order
pub const DEPTH_CANDIDATES_16: &[DepthCandidate] = &[
    DepthCandidate { format: Format::D15S1, stencil: true },
    DepthCandidate { format: Format::D16, stencil: false },
];

/// Find the preferred usable depth/stencil format
///
/// Walks the candidate table for `bits_per_pixel` in order and returns
/// the first format that (a) is usable as a depth/stencil surface under
/// `display`, (b) is a valid pairing with `backbuffer`, and (c) when a
/// non-trivial multisample level is requested, supports that level.
/// `stencil_only` removes the depth-only candidates from consideration.
///
/// When a candidate passes the multisample check, the quality-level
/// count reported by the adapter is intersected with the caller's
/// `quality_levels` ceiling: the ceiling is lowered if the adapter
/// reports fewer levels, and never raised.
///
/// Iteration stops at the first fully-passing candidate; there is no
/// search for a "best" match beyond the table order. Returns `None`
/// when every candidate fails.
pub fn find_depth_format(
    api: &dyn Adapter,
    bits_per_pixel: u8,
    display: Format,
    backbuffer: Format,
    samples: Multisample,
    mut quality_levels: Option<&mut u32>,
    windowed: bool,
    stencil_only: bool,
    adapter_index: u32,
    device_kind: DeviceKind,
) -> Option<Format> {
    let candidates = if bits_per_pixel == 32 {
        DEPTH_CANDIDATES_32
    } else {
        DEPTH_CANDIDATES_16
    };

    for candidate in candidates {
        if stencil_only && !candidate.stencil {
            continue;
        }

        // Usable as a depth/stencil surface under the display format
        if !api.supports_depth_format(adapter_index, device_kind, display, candidate.format) {
            continue;
        }

        // Valid pairing with the backbuffer format
        if !api.supports_depth_match(
            adapter_index,
            device_kind,
            display,
            backbuffer,
            candidate.format,
        ) {
            continue;
        }

        // Supported at the requested multisample level
        if !samples.is_none() {
            let Some(levels) = api.multisample_quality_levels(
                adapter_index,
                device_kind,
                candidate.format,
                windowed,
                samples,
            ) else {
                continue;
            };
            if let Some(ceiling) = quality_levels.as_deref_mut() {
                if *ceiling > levels {
                    *ceiling = levels;
                }
            }
        }

        return Some(candidate.format);
    }

    None
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "depth_format_tests.rs"]
mod tests;
