//! Error types for Astra Display
//!
//! One enum covers the whole outcome taxonomy of the negotiation core:
//! malformed calls, exhausted format searches, failed device creation,
//! missing preconditions, and the two recoverable device-loss states
//! the render loop is expected to poll past.

use std::fmt;

/// Result type for Astra Display operations
pub type Result<T> = std::result::Result<T, Error>;

/// Astra Display errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Malformed input or API misuse (out-of-range bit depth, unmatched
    /// begin/end render calls)
    InvalidCall(String),

    /// No compatible format combination exists for the given constraints
    NotFound,

    /// Requested capability unsupported even after all fallback attempts
    NotAvailable,

    /// A precondition the caller should have satisfied is missing
    /// (e.g., no focused window to attach the device to)
    NoPreliminaryDone(String),

    /// Device lost and not yet resettable; skip rendering and poll again
    DeviceLost,

    /// Device lost, a reset was attempted; skip this frame
    DeviceNotReset,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidCall(msg) => write!(f, "Invalid call: {}", msg),
            Error::NotFound => write!(f, "No compatible format combination found"),
            Error::NotAvailable => write!(f, "Requested capability not available"),
            Error::NoPreliminaryDone(msg) => write!(f, "Missing precondition: {}", msg),
            Error::DeviceLost => write!(f, "Device lost"),
            Error::DeviceNotReset => write!(f, "Device lost, reset attempted"),
        }
    }
}

impl std::error::Error for Error {}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
