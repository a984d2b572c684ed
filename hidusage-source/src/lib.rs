//! Capability source layer for HID usage classification
//!
//! This crate provides the device-facing half of hidusage:
//!
//! - Capability descriptors (value/button fields per report kind)
//! - A byte-level feature report channel keyed by report ID
//! - Backends: hidapi devices with a capability snapshot, and an in-memory
//!   scripted device for tests and demos

pub mod error;
pub mod memory;
pub mod types;

mod discovery;
mod hid_source;
mod strings;

pub use discovery::{HidDiscovery, PageFilter};
pub use error::SourceError;
pub use hid_source::HidSource;
pub use memory::MemorySource;
pub use strings::{trim_device_string, MAX_DEVICE_STRING_CHARS};
pub use types::{
    group_by_collection, ButtonCapability, Capability, CapabilityGroup,
    CapabilitySet, DiscoveredDevice, ReportKind, SourceDeviceInfo, ValueCapability,
};

/// Build a feature report buffer: report ID byte followed by `len` zeroed payload bytes
pub fn feature_buffer(report_id: u8, len: usize) -> Vec<u8> {
    let mut buf = vec![0u8; len + 1];
    buf[0] = report_id;
    buf
}

/// An open device handle for one query pass
///
/// Implementations release the underlying handle when dropped.
pub trait FeatureChannel {
    /// Read up to `len` payload bytes of a feature report (report ID byte excluded)
    ///
    /// A report shorter than `len` yields the bytes the device sent. An empty
    /// report is a `ShortRead`.
    fn get_feature(&mut self, report_id: u8, len: usize) -> Result<Vec<u8>, SourceError>;

    /// Write a feature report payload (report ID byte is prepended)
    fn set_feature(&mut self, report_id: u8, payload: &[u8]) -> Result<(), SourceError>;

    /// Read an indexed string descriptor
    fn indexed_string(&mut self, index: u16) -> Result<String, SourceError>;

    /// Currently asserted buttons as (link collection, usage) pairs
    fn button_states(
        &mut self,
        kind: ReportKind,
        capability: &ButtonCapability,
    ) -> Result<Vec<(u16, u16)>, SourceError>;

    /// Read a 1-byte feature value
    fn get_feature_u8(&mut self, report_id: u8) -> Result<u8, SourceError> {
        let payload = self.get_feature(report_id, 1)?;
        payload
            .first()
            .copied()
            .ok_or(SourceError::ShortRead {
                report_id,
                expected: 1,
                actual: 0,
            })
    }

    /// Read a 2-byte little-endian feature value
    fn get_feature_i16(&mut self, report_id: u8) -> Result<i16, SourceError> {
        let payload = self.get_feature(report_id, 2)?;
        Ok(i16::from_le_bytes(fixed(report_id, &payload)?))
    }

    /// Read a 4-byte little-endian feature value
    fn get_feature_i32(&mut self, report_id: u8) -> Result<i32, SourceError> {
        let payload = self.get_feature(report_id, 4)?;
        Ok(i32::from_le_bytes(fixed(report_id, &payload)?))
    }

    /// Read an 8-byte little-endian feature value
    fn get_feature_i64(&mut self, report_id: u8) -> Result<i64, SourceError> {
        let payload = self.get_feature(report_id, 8)?;
        Ok(i64::from_le_bytes(fixed(report_id, &payload)?))
    }

    /// Read an integer field of up to `width` bytes (at most 8)
    ///
    /// Shorter reports are zero-extended, or sign-extended from the last byte
    /// received when `signed` is set.
    fn get_feature_int(
        &mut self,
        report_id: u8,
        width: usize,
        signed: bool,
    ) -> Result<i64, SourceError> {
        let payload = self.get_feature(report_id, width.min(8))?;
        let payload = &payload[..payload.len().min(width)];
        decode_le_int(payload, signed).ok_or(SourceError::ShortRead {
            report_id,
            expected: width,
            actual: 0,
        })
    }

    /// Write a 4-byte little-endian feature value
    fn set_feature_i32(&mut self, report_id: u8, value: i32) -> Result<(), SourceError> {
        self.set_feature(report_id, &value.to_le_bytes())
    }
}

/// Little-endian integer from 1..=8 bytes; `None` for an empty slice
pub fn decode_le_int(bytes: &[u8], signed: bool) -> Option<i64> {
    let bytes = &bytes[..bytes.len().min(8)];
    let last = *bytes.last()?;
    let fill = if signed && last & 0x80 != 0 { 0xFF } else { 0x00 };
    let mut buf = [fill; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    Some(i64::from_le_bytes(buf))
}

fn fixed<const N: usize>(report_id: u8, payload: &[u8]) -> Result<[u8; N], SourceError> {
    payload
        .get(..N)
        .and_then(|bytes| bytes.try_into().ok())
        .ok_or(SourceError::ShortRead {
            report_id,
            expected: N,
            actual: payload.len(),
        })
}

/// A device session: capability arrays plus a way to open the device
pub trait CapabilitySource {
    /// Device identification
    fn device_info(&self) -> &SourceDeviceInfo;

    /// Capability arrays acquired for this session
    fn capabilities(&self) -> &CapabilitySet;

    /// Open the device for one query pass
    fn open(&self) -> Result<Box<dyn FeatureChannel + '_>, SourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_layout() {
        let buf = feature_buffer(0x0C, 4);
        assert_eq!(buf, vec![0x0C, 0, 0, 0, 0]);
    }

    #[test]
    fn fixed_rejects_short_payload() {
        let err = fixed::<4>(3, &[1, 2]).unwrap_err();
        assert!(matches!(
            err,
            SourceError::ShortRead {
                report_id: 3,
                expected: 4,
                actual: 2
            }
        ));
        assert_eq!(fixed::<2>(3, &[1, 2, 3]).unwrap(), [1, 2]);
    }

    #[test]
    fn short_integers_extend() {
        assert_eq!(decode_le_int(&[37], false), Some(37));
        assert_eq!(decode_le_int(&[0xF6], false), Some(0xF6));
        assert_eq!(decode_le_int(&[0xF6], true), Some(-10));
        assert_eq!(decode_le_int(&[0x8C, 0x0A], false), Some(2700));
        assert_eq!(decode_le_int(&[0x18, 0xFC], true), Some(-1000));
        assert_eq!(decode_le_int(&[0xFF; 4], true), Some(-1));
        assert_eq!(decode_le_int(&[], true), None);
    }
}
