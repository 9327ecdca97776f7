/// Adapter module - the native graphics API boundary
///
/// Everything the negotiation core needs from the host graphics
/// subsystem is expressed here: the pixel-format space, the capability
/// oracle (`Adapter`), the created-device contract (`Device`), and the
/// presentation-parameter types handed across the boundary.

// Module declarations
pub mod format;
pub mod adapter;
pub mod device;
pub mod present;

// Re-export everything from adapter.rs
pub use adapter::*;

// Re-export from other modules
pub use format::*;
pub use device::*;
pub use present::*;
