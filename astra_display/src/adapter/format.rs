/// Pixel formats of the native API and their static metadata.
///
/// Formats are opaque identifiers compared by identity. The metadata
/// tables (bits per pixel, alpha presence, stencil presence) are fixed
/// lookup data; nothing here queries the adapter.

/// Pixel format identifier
///
/// Covers display/backbuffer color formats and depth/stencil surface
/// formats. The naming follows the native API convention: channel
/// letters with per-channel bit counts, `X` for unused bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    // Color formats
    R8G8B8,
    A8R8G8B8,
    X8R8G8B8,
    R5G6B5,
    X1R5G5B5,
    A1R5G5B5,
    A4R4G4B4,
    R3G3B2,
    A8,
    A8R3G3B2,
    X4R4G4B4,

    // Palettized formats
    P8,
    A8P8,

    // Luminance formats
    L8,
    A8L8,
    A4L4,

    // Bump-map formats
    V8U8,
    L6V5U5,
    X8L8V8U8,
    Q8W8V8U8,
    V16U16,

    // Depth/stencil formats
    D16Lockable,
    D32,
    D15S1,
    D24S8,
    D24X8,
    D24X4S4,
    D16,
}

impl Format {
    /// Bits per pixel for this format
    pub fn bits_per_pixel(self) -> u32 {
        match self {
            Format::R8G8B8 => 24,
            Format::A8R8G8B8 => 32,
            Format::X8R8G8B8 => 32,
            Format::R5G6B5 => 16,
            Format::X1R5G5B5 => 16,
            Format::A1R5G5B5 => 16,
            Format::A4R4G4B4 => 32,
            Format::R3G3B2 => 8,
            Format::A8 => 8,
            Format::A8R3G3B2 => 16,
            Format::X4R4G4B4 => 16,
            Format::P8 => 8,

            Format::D32 => 32,
            Format::D16 => 16,
            Format::D24S8 => 32,

            Format::A8P8 => 16,
            Format::L8 => 8,
            Format::A8L8 => 16,
            Format::A4L4 => 8,
            Format::V8U8 => 16,
            Format::L6V5U5 => 16,
            Format::X8L8V8U8 => 32,
            Format::Q8W8V8U8 => 32,
            Format::V16U16 => 32,

            Format::D16Lockable => 16,
            Format::D15S1 => 16,
            Format::D24X8 => 32,
            Format::D24X4S4 => 32,
        }
    }

    /// Whether the format carries an alpha channel
    ///
    /// Known gap: only the formats that can appear in the backbuffer
    /// preference tables are listed; other alpha-bearing formats
    /// (A4R4G4B4, A8, ...) fall through to `false`.
    pub fn has_alpha(self) -> bool {
        match self {
            Format::A8R8G8B8 => true,
            Format::X8R8G8B8 => false,
            Format::R5G6B5 => false,
            Format::X1R5G5B5 => false,
            Format::A1R5G5B5 => true,
            _ => false,
        }
    }

    /// Whether the format carries stencil bits
    ///
    /// Known gap: only the formats that can appear in the depth
    /// candidate tables are listed; anything else falls through to
    /// `false`.
    pub fn has_stencil(self) -> bool {
        match self {
            Format::D32 => false,
            Format::D16 => false,
            Format::D24S8 => true,
            Format::D15S1 => true,
            Format::D24X8 => false,
            Format::D24X4S4 => true,
            _ => false,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
