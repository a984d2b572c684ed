//! Source error types

use thiserror::Error;

/// Errors that can occur while talking to a capability source
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Device not found: {0}")]
    DeviceNotFound(String),

    #[error("Device disconnected")]
    Disconnected,

    // HID-specific errors
    #[error("HID error: {0}")]
    HidError(String),

    #[error("HID permission denied: {0}")]
    HidPermissionDenied(String),

    #[error("Short feature report 0x{report_id:02X}: expected {expected} bytes, got {actual}")]
    ShortRead {
        report_id: u8,
        expected: usize,
        actual: usize,
    },

    #[error("Report 0x{0:02X} is not available")]
    ReportUnavailable(u8),

    #[error("String index {0} is not available")]
    StringUnavailable(u16),

    #[error("Not supported: {0}")]
    Unsupported(String),

    #[error("Capability snapshot error: {0}")]
    Snapshot(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<hidapi::HidError> for SourceError {
    fn from(e: hidapi::HidError) -> Self {
        let msg = e.to_string();
        if msg.contains("Permission denied") || msg.contains("EPERM") {
            SourceError::HidPermissionDenied(msg)
        } else {
            SourceError::HidError(msg)
        }
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(e: serde_json::Error) -> Self {
        SourceError::Snapshot(e.to_string())
    }
}
