/// Sync - GL fence sync object
///
/// Unlike the other wrappers a fence is not generated up front: `new`
/// creates an empty holder and `insert` places a fence into the command
/// stream, deleting any fence inserted before.

use std::fmt;
use std::rc::Rc;

use crate::device::{consts, Device};
use crate::gls_check;

/// GL fence sync object
pub struct Sync<D: Device> {
    device: Rc<D>,
    fence: Option<D::Fence>,
}

impl<D: Device> Sync<D> {
    /// Empty holder (no fence inserted yet)
    pub fn new(device: Rc<D>) -> Self {
        Self { device, fence: None }
    }

    /// Native fence handle, if one was inserted
    #[inline]
    pub fn fence(&self) -> Option<D::Fence> {
        self.fence
    }

    /// Insert a new fence after all previously issued commands
    pub fn insert(&mut self) {
        self.delete_fence();
        let device = &self.device;
        self.fence = gls_check!(device, device.fence_sync());
    }

    /// Block until the fence is signaled or `timeout_ns` elapsed
    ///
    /// Flushes pending commands first. Returns true if the fence was
    /// signaled. An empty holder counts as signaled. The full `u64` budget
    /// is honored even when the device can only wait up to `i32::MAX`
    /// nanoseconds per call (the glow backend waits repeatedly).
    pub fn wait(&self, timeout_ns: u64) -> bool {
        let Some(fence) = self.fence else {
            return true;
        };
        let device = &self.device;
        let result = gls_check!(
            device,
            device.client_wait_sync(fence, consts::SYNC_FLUSH_COMMANDS_BIT, timeout_ns)
        );
        result == consts::ALREADY_SIGNALED || result == consts::CONDITION_SATISFIED
    }

    /// Non-blocking check whether the fence was signaled
    pub fn is_expired(&self) -> bool {
        self.wait(0)
    }

    /// Make the server wait for the fence before executing further commands
    pub fn server_wait(&self) {
        let Some(fence) = self.fence else {
            return;
        };
        let device = &self.device;
        gls_check!(device, device.flush());
        gls_check!(device, device.wait_sync(fence));
    }

    /// Exchange fences with another holder
    pub fn swap(&mut self, other: &mut Self) {
        std::mem::swap(self, other);
    }

    fn delete_fence(&mut self) {
        if let Some(fence) = self.fence.take() {
            let device = &self.device;
            gls_check!(device, device.delete_sync(fence));
        }
    }
}

impl<D: Device> Drop for Sync<D> {
    fn drop(&mut self) {
        self.delete_fence();
    }
}

impl<D: Device> fmt::Debug for Sync<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sync")
            .field("inserted", &self.fence.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "sync_tests.rs"]
mod tests;
