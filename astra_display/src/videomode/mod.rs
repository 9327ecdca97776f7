/// Video-mode module - discovery and filtering of device configurations
///
/// The negotiation core: walks the format preference tables against the
/// adapter's capability oracle, resolves a depth format, enumerates the
/// native modes under the winning display format, and reduces the list
/// to one entry per resolution by refresh-rate proximity.

// Module declarations
pub mod video_mode;
pub mod depth_format;
pub mod enumerate;
pub mod reduce;

// Re-exports
pub use video_mode::*;
pub use depth_format::*;
pub use enumerate::*;
pub use reduce::*;

// Mock adapter for unit tests (no backend required)
#[cfg(test)]
pub mod mock_adapter;
