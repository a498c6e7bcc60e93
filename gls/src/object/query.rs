/// Query - GL query object for a fixed target
///
/// A query is "waiting" from `begin` until a poll finds its result
/// available. While waiting, `begin` and `run` do not start a new query so
/// a pending result is never overwritten.

use std::rc::Rc;

use crate::device::{consts, Device, Name};
use crate::gls_check;
use super::kinds::QueryKind;
use super::object::Object;

/// GL query object on `TARGET` (SAMPLES_PASSED, TIME_ELAPSED, ...)
pub struct Query<D: Device, const TARGET: u32> {
    object: Object<QueryKind, D>,
    waiting: bool,
}

impl<D: Device, const TARGET: u32> Query<D, TARGET> {
    pub fn new(device: Rc<D>) -> Self {
        Self {
            object: Object::new(device),
            waiting: false,
        }
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.object.name()
    }

    /// True between `begin` and the poll that finds the result available
    #[inline]
    pub fn is_waiting(&self) -> bool {
        self.waiting
    }

    /// Start the query unless a previous result is still pending
    pub fn begin(&mut self) {
        if self.waiting {
            return;
        }
        self.waiting = true;

        let device = self.object.device();
        gls_check!(device, device.begin_query(TARGET, self.name()));
    }

    pub fn end(&self) {
        let device = self.object.device();
        gls_check!(device, device.end_query(TARGET));
    }

    /// Run `commands` inside begin/end
    ///
    /// While a result is pending, `commands` still runs but is not measured.
    pub fn run<F: FnOnce()>(&mut self, commands: F) {
        if self.waiting {
            commands();
            return;
        }
        self.begin();
        commands();
        self.end();
    }

    /// Result of the last query, or None while it is not available yet
    pub fn poll_result(&mut self) -> Option<u32> {
        if self.waiting && !self.ready() {
            return None;
        }
        let device = self.object.device();
        Some(gls_check!(device, device.query_result_u32(self.name(), consts::QUERY_RESULT)))
    }

    /// Signed form of `poll_result` (glGetQueryObjectiv)
    pub fn poll_result_i32(&mut self) -> Option<i32> {
        if self.waiting && !self.ready() {
            return None;
        }
        let device = self.object.device();
        Some(gls_check!(device, device.query_result_i32(self.name(), consts::QUERY_RESULT)))
    }

    fn ready(&mut self) -> bool {
        let device = self.object.device();
        let available = gls_check!(
            device,
            device.query_result_u32(self.name(), consts::QUERY_RESULT_AVAILABLE)
        );
        self.waiting = available == consts::FALSE;
        available == consts::TRUE
    }
}

#[cfg(test)]
#[path = "query_tests.rs"]
mod tests;
