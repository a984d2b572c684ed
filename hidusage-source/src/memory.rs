//! In-memory capability source
//!
//! A scripted device: feature reports, indexed strings and asserted buttons
//! are preloaded, writes are recorded. Used by tests and the `demo` command.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::Mutex;
use tracing::debug;

use crate::error::SourceError;
use crate::types::{ButtonCapability, CapabilitySet, ReportKind, SourceDeviceInfo};
use crate::{CapabilitySource, FeatureChannel};

#[derive(Debug, Default)]
struct MemoryState {
    /// Feature report payloads by report ID (report ID byte excluded)
    features: HashMap<u8, Vec<u8>>,
    strings: HashMap<u16, String>,
    /// Asserted (link collection, usage) pairs per report kind
    pressed: HashMap<ReportKind, Vec<(u16, u16)>>,
    /// Reports that fail on access, simulating I/O errors
    failing: HashSet<u8>,
    /// Every successful set_feature call, in order
    writes: Vec<(u8, Vec<u8>)>,
}

/// Scripted in-memory device
#[derive(Debug)]
pub struct MemorySource {
    info: SourceDeviceInfo,
    capabilities: CapabilitySet,
    state: Mutex<MemoryState>,
    opens: AtomicUsize,
    open_handles: AtomicUsize,
    offline: bool,
}

impl MemorySource {
    pub fn new(info: SourceDeviceInfo, capabilities: CapabilitySet) -> Self {
        Self {
            info,
            capabilities,
            state: Mutex::new(MemoryState::default()),
            opens: AtomicUsize::new(0),
            open_handles: AtomicUsize::new(0),
            offline: false,
        }
    }

    /// Preload a feature report payload
    pub fn with_feature(self, report_id: u8, payload: &[u8]) -> Self {
        self.state.lock().features.insert(report_id, payload.to_vec());
        self
    }

    /// Preload a 4-byte little-endian feature value
    pub fn with_feature_i32(self, report_id: u8, value: i32) -> Self {
        self.with_feature(report_id, &value.to_le_bytes())
    }

    /// Preload an indexed string
    pub fn with_string(self, index: u16, text: &str) -> Self {
        self.state.lock().strings.insert(index, text.to_string());
        self
    }

    /// Mark a button usage as asserted
    pub fn with_pressed(self, kind: ReportKind, link_collection: u16, usage: u16) -> Self {
        self.state
            .lock()
            .pressed
            .entry(kind)
            .or_default()
            .push((link_collection, usage));
        self
    }

    /// Make every access to a report fail
    pub fn with_failing_report(self, report_id: u8) -> Self {
        self.state.lock().failing.insert(report_id);
        self
    }

    /// Make `open` fail, as if the device was unplugged
    pub fn offline(mut self) -> Self {
        self.offline = true;
        self
    }

    /// Replace a feature report payload on a live source
    pub fn set_feature_payload(&self, report_id: u8, payload: &[u8]) {
        self.state.lock().features.insert(report_id, payload.to_vec());
    }

    /// Number of times the device has been opened
    pub fn open_count(&self) -> usize {
        self.opens.load(Ordering::Relaxed)
    }

    /// Number of handles currently open
    pub fn open_handles(&self) -> usize {
        self.open_handles.load(Ordering::Relaxed)
    }

    /// Recorded feature writes
    pub fn writes(&self) -> Vec<(u8, Vec<u8>)> {
        self.state.lock().writes.clone()
    }
}

impl CapabilitySource for MemorySource {
    fn device_info(&self) -> &SourceDeviceInfo {
        &self.info
    }

    fn capabilities(&self) -> &CapabilitySet {
        &self.capabilities
    }

    fn open(&self) -> Result<Box<dyn FeatureChannel + '_>, SourceError> {
        if self.offline {
            return Err(SourceError::Disconnected);
        }
        self.opens.fetch_add(1, Ordering::Relaxed);
        self.open_handles.fetch_add(1, Ordering::Relaxed);
        debug!("Opened memory device {}", self.info.device_path);
        Ok(Box::new(MemoryChannel { source: self }))
    }
}

struct MemoryChannel<'a> {
    source: &'a MemorySource,
}

impl MemoryChannel<'_> {
    fn check(&self, report_id: u8) -> Result<(), SourceError> {
        if self.source.state.lock().failing.contains(&report_id) {
            return Err(SourceError::HidError(format!(
                "simulated failure on report 0x{report_id:02X}"
            )));
        }
        Ok(())
    }
}

impl FeatureChannel for MemoryChannel<'_> {
    fn get_feature(&mut self, report_id: u8, len: usize) -> Result<Vec<u8>, SourceError> {
        self.check(report_id)?;
        let state = self.source.state.lock();
        let payload = state
            .features
            .get(&report_id)
            .ok_or(SourceError::ReportUnavailable(report_id))?;
        if payload.is_empty() {
            return Err(SourceError::ShortRead {
                report_id,
                expected: len,
                actual: 0,
            });
        }
        Ok(payload[..len.min(payload.len())].to_vec())
    }

    fn set_feature(&mut self, report_id: u8, payload: &[u8]) -> Result<(), SourceError> {
        self.check(report_id)?;
        let mut state = self.source.state.lock();
        state.features.insert(report_id, payload.to_vec());
        state.writes.push((report_id, payload.to_vec()));
        Ok(())
    }

    fn indexed_string(&mut self, index: u16) -> Result<String, SourceError> {
        self.source
            .state
            .lock()
            .strings
            .get(&index)
            .cloned()
            .ok_or(SourceError::StringUnavailable(index))
    }

    fn button_states(
        &mut self,
        kind: ReportKind,
        capability: &ButtonCapability,
    ) -> Result<Vec<(u16, u16)>, SourceError> {
        self.check(capability.report_id)?;
        let state = self.source.state.lock();
        Ok(state.pressed.get(&kind).cloned().unwrap_or_default())
    }
}

impl Drop for MemoryChannel<'_> {
    fn drop(&mut self) {
        self.source.open_handles.fetch_sub(1, Ordering::Relaxed);
    }
}
