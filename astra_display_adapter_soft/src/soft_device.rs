/// SoftDevice - scriptable software rendering device
///
/// Implements the device contract with counters instead of GPU work.
/// Loss scenarios are scripted by queueing cooperative-level statuses;
/// once the queue drains the device reports itself operational again.
/// State lives behind a shared handle so it stays observable after the
/// device is boxed into a guard.

use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::{Arc, Mutex};

use astra_display::astra::adapter::{
    Device, DeviceStatus, PresentParameters, WindowHandle,
};
use astra_display::astra::{Error, Result};

/// Observable state of a [`SoftDevice`]
#[derive(Default)]
pub struct SoftDeviceState {
    statuses: Mutex<VecDeque<DeviceStatus>>,
    scenes_begun: AtomicU32,
    scenes_ended: AtomicU32,
    presents: AtomicU32,
    resets: AtomicU32,
    fail_reset: AtomicBool,
    last_present_dest: Mutex<Option<Option<WindowHandle>>>,
}

impl SoftDeviceState {
    /// Queue a cooperative-level status to be reported by the next poll
    pub fn queue_status(&self, status: DeviceStatus) {
        self.statuses.lock().unwrap().push_back(status);
    }

    /// Make subsequent reset attempts fail
    pub fn set_fail_reset(&self, fail: bool) {
        self.fail_reset.store(fail, Ordering::SeqCst);
    }

    /// Number of scenes begun
    pub fn scenes_begun(&self) -> u32 {
        self.scenes_begun.load(Ordering::SeqCst)
    }

    /// Number of scenes ended
    pub fn scenes_ended(&self) -> u32 {
        self.scenes_ended.load(Ordering::SeqCst)
    }

    /// Number of presents
    pub fn presents(&self) -> u32 {
        self.presents.load(Ordering::SeqCst)
    }

    /// Number of resets attempted
    pub fn resets(&self) -> u32 {
        self.resets.load(Ordering::SeqCst)
    }

    /// Destination of the most recent present, if any happened
    pub fn last_present_dest(&self) -> Option<Option<WindowHandle>> {
        *self.last_present_dest.lock().unwrap()
    }
}

/// Software device with scriptable loss behavior
pub struct SoftDevice {
    state: Arc<SoftDeviceState>,
}

impl SoftDevice {
    /// A healthy device
    pub fn new() -> Self {
        Self {
            state: Arc::new(SoftDeviceState::default()),
        }
    }

    /// A device whose next polls report the given statuses in order
    pub fn scripted(statuses: impl IntoIterator<Item = DeviceStatus>) -> Self {
        let device = Self::new();
        for status in statuses {
            device.state.queue_status(status);
        }
        device
    }

    /// Shared handle to the observable state
    pub fn state(&self) -> Arc<SoftDeviceState> {
        self.state.clone()
    }
}

impl Default for SoftDevice {
    fn default() -> Self {
        Self::new()
    }
}

impl Device for SoftDevice {
    fn status(&self) -> DeviceStatus {
        self.state
            .statuses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(DeviceStatus::Operational)
    }

    fn reset(&mut self, _present: &PresentParameters) -> Result<()> {
        self.state.resets.fetch_add(1, Ordering::SeqCst);
        if self.state.fail_reset.load(Ordering::SeqCst) {
            return Err(Error::NotAvailable);
        }
        Ok(())
    }

    fn begin_scene(&mut self) -> Result<()> {
        self.state.scenes_begun.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn end_scene(&mut self) {
        self.state.scenes_ended.fetch_add(1, Ordering::SeqCst);
    }

    fn present(&mut self, dest: Option<WindowHandle>) {
        self.state.presents.fetch_add(1, Ordering::SeqCst);
        *self.state.last_present_dest.lock().unwrap() = Some(dest);
    }
}
