/// Device module - device creation glue and the render-loop guard
///
/// Thin sequential glue around the adapter boundary: presentation
/// parameter assembly with vertex-processing fallback, and the
/// per-device begin/end-of-frame state machine with loss recovery.

// Module declarations
pub mod negotiate;
pub mod render_guard;

// Re-exports
pub use negotiate::*;
pub use render_guard::*;
