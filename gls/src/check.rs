//! GL error checking
//!
//! `gls_check!(device, call)` evaluates a device call and, in builds with
//! `debug_assertions` or the `error-check` feature, drains one error flag with
//! `get_error` and logs it with the call text and location. Otherwise it
//! expands to the bare call.

use crate::device::{consts, Device};
use crate::log::LogSeverity;
use crate::Diagnostics;

/// Symbolic name of a GL error code, `0x%04x` for codes GLS does not know
pub fn error_name(code: u32) -> String {
    match code {
        consts::NO_ERROR => "GL_NO_ERROR".to_string(),
        consts::INVALID_ENUM => "GL_INVALID_ENUM".to_string(),
        consts::INVALID_VALUE => "GL_INVALID_VALUE".to_string(),
        consts::INVALID_OPERATION => "GL_INVALID_OPERATION".to_string(),
        consts::STACK_OVERFLOW => "GL_STACK_OVERFLOW".to_string(),
        consts::STACK_UNDERFLOW => "GL_STACK_UNDERFLOW".to_string(),
        consts::OUT_OF_MEMORY => "GL_OUT_OF_MEMORY".to_string(),
        consts::INVALID_FRAMEBUFFER_OPERATION => "GL_INVALID_FRAMEBUFFER_OPERATION".to_string(),
        other => format!("0x{:04x}", other),
    }
}

/// Query the device error flag and log it if set
///
/// Returns the code so callers can react; `NO_ERROR` when clean.
pub fn check_error<D: Device + ?Sized>(device: &D, call: &str, file: &'static str, line: u32) -> u32 {
    report_error(device.get_error(), call, file, line)
}

/// Log an already-fetched error code if it is not `NO_ERROR`
pub fn report_error(code: u32, call: &str, file: &'static str, line: u32) -> u32 {
    if code != consts::NO_ERROR {
        let error = crate::Error::GlError { call: call.to_string(), code };
        Diagnostics::log_detailed(LogSeverity::Error, "gls::check", error.to_string(), file, line);
    }
    code
}

/// Evaluate a device call and check the GL error flag afterwards
///
/// ```ignore
/// gls_check!(device, device.bind_buffer(consts::ARRAY_BUFFER, name));
/// ```
#[cfg(any(debug_assertions, feature = "error-check"))]
#[macro_export]
macro_rules! gls_check {
    ($device:expr, $call:expr) => {{
        #[allow(unused_imports)]
        use $crate::device::Device as _;
        let result = $call;
        $crate::check::report_error($device.get_error(), stringify!($call), file!(), line!());
        result
    }};
}

/// Evaluate a device call (error checks compiled out)
#[cfg(not(any(debug_assertions, feature = "error-check")))]
#[macro_export]
macro_rules! gls_check {
    ($device:expr, $call:expr) => {
        $call
    };
}

/// True when `gls_check!` queries the error flag in this build
pub const fn checks_enabled() -> bool {
    cfg!(any(debug_assertions, feature = "error-check"))
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
