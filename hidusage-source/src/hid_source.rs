//! hidapi-backed capability source
//!
//! Capability arrays come from a JSON snapshot captured from the platform HID
//! parser; feature reports, strings and button bits are read live through
//! hidapi. One device handle is opened per query pass and closed when the
//! channel is dropped.

use std::ffi::CString;

use hidapi::{HidApi, HidDevice};
use tracing::debug;

use crate::error::SourceError;
use crate::feature_buffer;
use crate::strings::trim_device_string;
use crate::types::{
    ButtonCapability, Capability, CapabilitySet, DiscoveredDevice, ReportKind, SourceDeviceInfo,
};
use crate::{CapabilitySource, FeatureChannel};

/// Largest report read when decoding button bits (report ID byte included)
const REPORT_SIZE: usize = 65;

/// Capability source for a physical HID device
pub struct HidSource {
    api: HidApi,
    path: CString,
    info: SourceDeviceInfo,
    capabilities: CapabilitySet,
}

impl HidSource {
    /// Create a source for a discovered device using a capability snapshot
    pub fn new(
        api: HidApi,
        device: &DiscoveredDevice,
        capabilities: CapabilitySet,
    ) -> Result<Self, SourceError> {
        let path = CString::new(device.info.device_path.clone())
            .map_err(|e| SourceError::DeviceNotFound(e.to_string()))?;
        Ok(Self {
            api,
            path,
            info: device.info.clone(),
            capabilities,
        })
    }

    /// Read manufacturer/product/serial strings from the device itself
    pub fn refresh_strings(&mut self) -> Result<(), SourceError> {
        let device = self.api.open_path(&self.path)?;
        let read = |s: Option<String>| s.map(|s| trim_device_string(&s)).filter(|s| !s.is_empty());
        self.info.manufacturer = read(device.get_manufacturer_string()?);
        self.info.product_name = read(device.get_product_string()?);
        self.info.serial = read(device.get_serial_number_string()?);
        Ok(())
    }
}

impl CapabilitySource for HidSource {
    fn device_info(&self) -> &SourceDeviceInfo {
        &self.info
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    fn open(&self) -> Result<Box<dyn FeatureChannel + '_>, SourceError> {
        let device = self.api.open_path(&self.path)?;
        debug!("Opened {}", self.info.device_path);
        Ok(Box::new(HidChannel { device }))
    }
}

struct HidChannel {
    device: HidDevice,
}

impl HidChannel {
    fn read_report(&self, kind: ReportKind, report_id: u8) -> Result<Vec<u8>, SourceError> {
        let mut buf = feature_buffer(report_id, REPORT_SIZE - 1);
        let n = match kind {
            ReportKind::Feature => self.device.get_feature_report(&mut buf)?,
            ReportKind::Input => self.device.get_input_report(&mut buf)?,
            ReportKind::Output => {
                return Err(SourceError::Unsupported(
                    "output reports cannot be read back".into(),
                ))
            }
        };
        buf.truncate(n);
        Ok(buf)
    }
}

impl FeatureChannel for HidChannel {
    fn get_feature(&mut self, report_id: u8, len: usize) -> Result<Vec<u8>, SourceError> {
        let mut buf = feature_buffer(report_id, len);
        let n = self.device.get_feature_report(&mut buf)?;
        debug!("Feature 0x{:02X} ({} bytes): {:02X?}", report_id, n, &buf[..n.min(buf.len())]);
        // n counts the report ID byte
        if n < 2 {
            return Err(SourceError::ShortRead {
                report_id,
                expected: len,
                actual: 0,
            });
        }
        Ok(buf[1..n.min(len + 1)].to_vec())
    }

    fn set_feature(&mut self, report_id: u8, payload: &[u8]) -> Result<(), SourceError> {
        let mut buf = Vec::with_capacity(payload.len() + 1);
        buf.push(report_id);
        buf.extend_from_slice(payload);
        debug!("Set feature 0x{:02X}: {:02X?}", report_id, payload);
        self.device.send_feature_report(&buf)?;
        Ok(())
    }

    fn indexed_string(&mut self, index: u16) -> Result<String, SourceError> {
        let text = self
            .device
            .get_indexed_string(i32::from(index))?
            .map(|s| trim_device_string(&s))
            .filter(|s| !s.is_empty());
        text.ok_or(SourceError::StringUnavailable(index))
    }

    fn button_states(
        &mut self,
        kind: ReportKind,
        capability: &ButtonCapability,
    ) -> Result<Vec<(u16, u16)>, SourceError> {
        let first_bit = bit_position(capability)?;
        let report = self.read_report(kind, capability.report_id)?;
        let payload = report.get(1..).unwrap_or_default();
        Ok(decode_buttons(payload, first_bit, capability))
    }
}

fn bit_position(capability: &ButtonCapability) -> Result<u16, SourceError> {
    capability.bit_position.ok_or_else(|| {
        SourceError::Unsupported(format!(
            "button 0x{:04X}:0x{:04X} has no bit position in the capability snapshot",
            capability.usage_page, capability.usage
        ))
    })
}

/// Asserted (link collection, usage) pairs of a button field starting at
/// `first_bit` of the report payload; bits past the payload read as clear
fn decode_buttons(payload: &[u8], first_bit: u16, capability: &ButtonCapability) -> Vec<(u16, u16)> {
    capability
        .usages()
        .enumerate()
        .filter(|&(offset, _)| {
            let bit = usize::from(first_bit) + offset;
            payload
                .get(bit / 8)
                .is_some_and(|byte| byte & (1 << (bit % 8)) != 0)
        })
        .map(|(_, usage)| (capability.link_collection(), usage))
        .collect()
}
