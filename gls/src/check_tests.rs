//! Unit tests for check.rs
//!
//! Tests that swap the global logger are marked with #[serial].

use crate::check::{check_error, checks_enabled, error_name};
use crate::device::consts;
use crate::device::mock_device::MockDevice;
use crate::log::{LogEntry, LogSeverity, Logger};
use crate::{gls_check, Device, Diagnostics};
use serial_test::serial;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

struct CaptureLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CaptureLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

fn install_capture() -> Arc<Mutex<Vec<LogEntry>>> {
    let entries = Arc::new(Mutex::new(Vec::new()));
    Diagnostics::set_logger(CaptureLogger { entries: entries.clone() });
    entries
}

fn check_entries(entries: &Arc<Mutex<Vec<LogEntry>>>) -> Vec<LogEntry> {
    entries
        .lock()
        .unwrap()
        .iter()
        .filter(|e| e.source == "gls::check")
        .cloned()
        .collect()
}

// ============================================================================
// ERROR NAME TESTS
// ============================================================================

#[test]
fn test_error_name_known_codes() {
    assert_eq!(error_name(consts::NO_ERROR), "GL_NO_ERROR");
    assert_eq!(error_name(consts::INVALID_ENUM), "GL_INVALID_ENUM");
    assert_eq!(error_name(consts::INVALID_VALUE), "GL_INVALID_VALUE");
    assert_eq!(error_name(consts::INVALID_OPERATION), "GL_INVALID_OPERATION");
    assert_eq!(error_name(consts::OUT_OF_MEMORY), "GL_OUT_OF_MEMORY");
    assert_eq!(
        error_name(consts::INVALID_FRAMEBUFFER_OPERATION),
        "GL_INVALID_FRAMEBUFFER_OPERATION"
    );
}

#[test]
fn test_error_name_unknown_code_is_hex() {
    assert_eq!(error_name(0x1234), "0x1234");
    assert_eq!(error_name(0x7), "0x0007");
}

// ============================================================================
// CHECK ERROR TESTS
// ============================================================================

#[test]
#[serial]
fn test_check_error_clean_logs_nothing() {
    let entries = install_capture();
    let device = MockDevice::new();

    let code = check_error(&device, "flush()", "check_tests.rs", 1);

    assert_eq!(code, consts::NO_ERROR);
    assert!(check_entries(&entries).is_empty());
    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_check_error_logs_symbolic_code_and_location() {
    let entries = install_capture();
    let device = MockDevice::new();
    device.push_error(consts::INVALID_ENUM);

    let code = check_error(&device, "bind_texture(7, 1)", "texture.rs", 33);

    assert_eq!(code, consts::INVALID_ENUM);
    let logged = check_entries(&entries);
    assert_eq!(logged.len(), 1);
    assert_eq!(logged[0].severity, LogSeverity::Error);
    assert_eq!(logged[0].message, "GL error GL_INVALID_ENUM in bind_texture(7, 1)");
    assert_eq!(logged[0].file, Some("texture.rs"));
    assert_eq!(logged[0].line, Some(33));
    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_check_error_drains_one_flag_per_call() {
    let _entries = install_capture();
    let device = MockDevice::new();
    device.push_error(consts::INVALID_VALUE);
    device.push_error(consts::OUT_OF_MEMORY);

    assert_eq!(check_error(&device, "a", "x.rs", 1), consts::INVALID_VALUE);
    assert_eq!(check_error(&device, "b", "x.rs", 2), consts::OUT_OF_MEMORY);
    assert_eq!(check_error(&device, "c", "x.rs", 3), consts::NO_ERROR);
    Diagnostics::reset_logger();
}

// ============================================================================
// MACRO TESTS
// ============================================================================

#[test]
#[serial]
fn test_gls_check_returns_call_value() {
    let _entries = install_capture();
    let device = Rc::new(MockDevice::new());

    let status = gls_check!(device, device.check_framebuffer_status(consts::FRAMEBUFFER));

    assert_eq!(status, consts::FRAMEBUFFER_COMPLETE);
    Diagnostics::reset_logger();
}

#[test]
#[serial]
fn test_gls_check_reports_call_text_when_enabled() {
    let entries = install_capture();
    let device = Rc::new(MockDevice::new());
    device.push_error(consts::INVALID_OPERATION);

    gls_check!(device, device.flush());

    let logged = check_entries(&entries);
    if checks_enabled() {
        assert_eq!(logged.len(), 1);
        assert!(logged[0].message.contains("GL_INVALID_OPERATION"));
        assert!(logged[0].message.contains("device.flush()"));
        assert!(logged[0].file.unwrap().ends_with("check_tests.rs"));
    } else {
        assert!(logged.is_empty());
        // Flag is left for the caller
        assert_eq!(device.get_error(), consts::INVALID_OPERATION);
    }
    Diagnostics::reset_logger();
}

#[test]
#[serial]
#[deny(unused_imports)]
fn test_gls_check_with_device_trait_already_in_scope() {
    let _entries = install_capture();
    let device = Rc::new(MockDevice::new());

    // Device is imported at module level; the macro's own import must not warn
    let code = gls_check!(device, device.get_error());

    assert_eq!(code, consts::NO_ERROR);
    Diagnostics::reset_logger();
}

