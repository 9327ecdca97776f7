/*!
# Astra Display

Video-mode negotiation and device bring-up for a native 3D rendering API.

This crate enumerates the valid display/backbuffer/depth-buffer format
combinations an adapter supports, filters the candidate list down to a
deduplicated, preference-ordered set, and drives a created rendering
device through loss/reset cycles. The native API itself is consumed only
through the [`adapter::Adapter`] and [`adapter::Device`] traits; backend
implementations (a real driver binding, or the table-driven soft adapter)
live in separate crates.

## Architecture

- **Adapter**: capability-oracle and device-factory trait
- **Device**: created rendering device trait (scene begin/end, reset)
- **videomode**: format negotiation cascade, mode enumeration, reduction
- **device**: presentation-parameter assembly and the render-loop guard

Backend implementations provide concrete types that implement the traits.
*/

// Internal modules
mod error;
mod engine;
pub mod log;
pub mod adapter;
pub mod videomode;
pub mod device;

// Main astra namespace module
pub mod astra {
    // Error types
    pub use crate::error::{Error, Result};

    // Engine singleton (logger host)
    pub use crate::engine::Engine;

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
        // Note: astra_* macros are NOT re-exported here - they are exported at crate root
    }

    // Adapter boundary sub-module
    pub mod adapter {
        pub use crate::adapter::*;
    }

    // Video-mode negotiation sub-module
    pub mod videomode {
        pub use crate::videomode::*;
    }

    // Device negotiation and render-loop sub-module
    pub mod device {
        pub use crate::device::*;
    }
}
