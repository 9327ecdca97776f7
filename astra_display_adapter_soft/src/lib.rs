/*!
# Astra Display - Soft Adapter Backend

Software implementation of the astra_display adapter boundary.

This crate provides a table-driven backend that implements the
astra_display `Adapter` and `Device` traits without touching any real
graphics driver. Capability answers come from a configurable
[`SoftAdapterCaps`] profile, which makes the backend suitable for
headless use, integration testing, and scripting device-loss scenarios.
*/

// Soft implementation modules
mod caps;
mod soft_adapter;
mod soft_device;

pub use caps::SoftAdapterCaps;
pub use soft_adapter::SoftAdapter;
pub use soft_device::SoftDevice;
