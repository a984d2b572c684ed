//! Live value queries
//!
//! A query pass walks a [`UsageCollection`], fetches the current value of
//! every selected leaf from the device, and returns a fresh snapshot. The
//! tree itself is never modified. The device is opened at most once per pass,
//! on the first fetch, and released when the pass ends.
//!
//! Per-leaf failures do not abort a pass: the leaf is left out of the
//! snapshot and recorded in the [`QueryReport`].

use hidusage_source::{CapabilitySource, FeatureChannel, ReportKind, SourceError};
use tracing::{debug, warn};

use crate::catalog::{page, ReportKinds, UsageTypes};
use crate::chemistry::DeviceChemistry;
use crate::collection::{CapabilityRef, CollectionEntry, UsageCollection, UsageNode};
use crate::error::UsageError;
use crate::value::{AudibleAlarmControl, PowerTestState, UsageValue};

/// Battery System `iDeviceChemistry`
pub const DEVICE_CHEMISTRY: u16 = 0x89;
/// Power Device `Test`
pub const POWER_TEST: u16 = 0x58;
/// Power Device `AudibleAlarmControl`
pub const AUDIBLE_ALARM_CONTROL: u16 = 0x5A;

/// Collections and their successfully valued leaves
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueSnapshot {
    entries: Vec<CollectionEntry>,
}

impl ValueSnapshot {
    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollectionEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every valued leaf, in collection order
    pub fn leaves(&self) -> impl Iterator<Item = &UsageNode> {
        self.entries.iter().flat_map(|e| e.children.iter())
    }

    /// First valued leaf with `usage_id` on `usage_page`
    pub fn find(&self, usage_page: u16, usage_id: u16) -> Option<&UsageNode> {
        self.leaves()
            .find(|n| n.usage_page() == usage_page && n.usage_id() == usage_id)
    }

    /// Value of the first leaf with `usage_id` on `usage_page`
    pub fn value_of(&self, usage_page: u16, usage_id: u16) -> Option<&UsageValue> {
        self.find(usage_page, usage_id).and_then(|n| n.value())
    }

    /// Union with another snapshot; leaves already present are kept
    fn merge(&mut self, other: ValueSnapshot) {
        for entry in other.entries {
            match self.entries.iter_mut().find(|e| e.key() == entry.key()) {
                Some(existing) => {
                    for child in entry.children {
                        if existing.child(child.usage_id()).is_none() {
                            existing.children.push(child);
                        }
                    }
                }
                None => self.entries.push(entry),
            }
        }
    }
}

/// A leaf whose value could not be fetched
#[derive(Debug)]
pub struct NodeFailure {
    pub usage_page: u16,
    pub usage_id: u16,
    pub collection_id: u16,
    pub name: String,
    pub error: SourceError,
}

/// What went wrong during a query pass
#[derive(Debug, Default)]
pub struct QueryReport {
    pub failures: Vec<NodeFailure>,
    /// Set when the device could not be opened; no leaf was fetched
    pub open_error: Option<SourceError>,
    /// Leaves not attempted because the device could not be opened
    pub skipped: usize,
}

impl QueryReport {
    /// True when every selected leaf produced a value
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && self.open_error.is_none()
    }
}

/// Result of a query pass
#[derive(Debug, Default)]
pub struct QueryOutcome {
    pub snapshot: ValueSnapshot,
    pub report: QueryReport,
}

/// One device handle, opened on demand
struct QueryPass<'s, S: CapabilitySource + ?Sized> {
    source: &'s S,
    channel: Option<Box<dyn FeatureChannel + 's>>,
    report: QueryReport,
}

impl<'s, S: CapabilitySource + ?Sized> QueryPass<'s, S> {
    fn new(source: &'s S) -> Self {
        Self {
            source,
            channel: None,
            report: QueryReport::default(),
        }
    }

    fn channel(&mut self) -> Option<&mut (dyn FeatureChannel + 's)> {
        if self.channel.is_none() && self.report.open_error.is_none() {
            match self.source.open() {
                Ok(channel) => {
                    debug!("Opened {} for query pass", self.source.device_info().device_path);
                    self.channel = Some(channel);
                }
                Err(e) => {
                    warn!("Failed to open device: {}", e);
                    self.report.open_error = Some(e);
                }
            }
        }
        self.channel.as_deref_mut()
    }

    /// Fetch one leaf, recording failures
    fn fetch(&mut self, node: &UsageNode) -> Option<UsageNode> {
        let Some(channel) = self.channel() else {
            self.report.skipped += 1;
            return None;
        };
        match fetch_value(channel, node) {
            Ok(value) => Some(node.with_value(value)),
            Err(e) => {
                warn!(
                    "Failed to read {} (0x{:02X}:0x{:02X}): {}",
                    node.name(),
                    node.usage_page(),
                    node.usage_id(),
                    e
                );
                self.report.failures.push(NodeFailure {
                    usage_page: node.usage_page(),
                    usage_id: node.usage_id(),
                    collection_id: node.collection_id(),
                    name: node.name().to_string(),
                    error: e,
                });
                None
            }
        }
    }

    fn finish(self) -> QueryReport {
        // channel dropped here, releasing the device
        self.report
    }
}

/// Read and decode the current value of a leaf
pub fn fetch_value(
    channel: &mut dyn FeatureChannel,
    node: &UsageNode,
) -> Result<UsageValue, SourceError> {
    match node.capability() {
        Some(CapabilityRef::Button(cap)) => {
            let asserted = channel.button_states(node.report_kind(), cap)?;
            // Only the usage is compared; the collection of the pair is ignored
            let on = asserted.iter().any(|&(_, usage)| usage == node.usage_id());
            Ok(UsageValue::Flag(on))
        }
        Some(CapabilityRef::Value(cap)) if cap.string_index != 0 => {
            let text = channel.indexed_string(cap.string_index)?;
            if node.usage_page() == page::BATTERY_SYSTEM && node.usage_id() == DEVICE_CHEMISTRY {
                if let Some(chemistry) = DeviceChemistry::from_code(&text) {
                    return Ok(UsageValue::Chemistry(chemistry));
                }
            }
            Ok(UsageValue::Text(text))
        }
        Some(CapabilityRef::Value(cap)) => {
            let raw = channel.get_feature_int(node.report_id(), cap.field_width(), cap.is_signed())?;
            Ok(decode_numeric(node.usage_page(), node.usage_id(), raw))
        }
        None => Err(SourceError::Unsupported(format!(
            "{} has no capability",
            node.name()
        ))),
    }
}

/// Reinterpret a raw integer for usages with enumerated values
pub fn decode_numeric(usage_page: u16, usage_id: u16, raw: i64) -> UsageValue {
    if usage_page != page::POWER_DEVICE {
        return UsageValue::Integer(raw);
    }
    match usage_id {
        AUDIBLE_ALARM_CONTROL => AudibleAlarmControl::from_raw(raw)
            .map(UsageValue::AlarmControl)
            .unwrap_or(UsageValue::Integer(raw)),
        POWER_TEST => PowerTestState::from_raw(raw)
            .map(UsageValue::Test)
            .unwrap_or(UsageValue::Integer(raw)),
        _ => UsageValue::Integer(raw),
    }
}

/// Whether a collection's leaves take part in a query
///
/// Classified collections match on the collection tags of `collection_mask`.
/// Unclassified ones (link collection 0, reserved) are opt-in through
/// `include_unlinked`.
pub fn collection_selected(
    collection: &UsageNode,
    collection_mask: UsageTypes,
    include_unlinked: bool,
) -> bool {
    let types = collection.types();
    if types.is_unclassified_collection() {
        include_unlinked
    } else {
        types.intersects(collection_mask & UsageTypes::COLLECTIONS)
    }
}

/// Live queries over one session's usage tree
pub struct LiveQueryEngine<'a, S: CapabilitySource + ?Sized> {
    collection: &'a UsageCollection,
    source: &'a S,
}

impl<'a, S: CapabilitySource + ?Sized> LiveQueryEngine<'a, S> {
    pub fn new(collection: &'a UsageCollection, source: &'a S) -> Self {
        Self { collection, source }
    }

    pub fn collection(&self) -> &UsageCollection {
        self.collection
    }

    pub fn source(&self) -> &S {
        self.source
    }

    /// Fetch values of leaves matching `usage_mask` in selected collections
    pub fn get_feature_values(
        &self,
        collection_mask: UsageTypes,
        usage_mask: UsageTypes,
        include_unlinked: bool,
    ) -> QueryOutcome {
        let mut pass = QueryPass::new(self.source);
        let snapshot = self.run(&mut pass, collection_mask, usage_mask, include_unlinked);
        QueryOutcome {
            snapshot,
            report: pass.finish(),
        }
    }

    /// Dynamic values and flags of all collections, plus dynamic values left
    /// in unclassified collections
    pub fn refresh_dynamic_values(&self) -> QueryOutcome {
        let mut pass = QueryPass::new(self.source);
        let mut snapshot = self.run(
            &mut pass,
            UsageTypes::COLLECTIONS,
            UsageTypes::DYNAMIC_VALUE | UsageTypes::DYNAMIC_FLAG,
            false,
        );
        let unlinked = self.run(&mut pass, UsageTypes::RESERVED, UsageTypes::DYNAMIC_VALUE, true);
        snapshot.merge(unlinked);
        QueryOutcome {
            snapshot,
            report: pass.finish(),
        }
    }

    fn run(
        &self,
        pass: &mut QueryPass<'a, S>,
        collection_mask: UsageTypes,
        usage_mask: UsageTypes,
        include_unlinked: bool,
    ) -> ValueSnapshot {
        let mut snapshot = ValueSnapshot::default();
        for entry in self.collection.iter() {
            if !collection_selected(&entry.collection, collection_mask, include_unlinked) {
                continue;
            }
            let children: Vec<UsageNode> = entry
                .children
                .iter()
                .filter(|child| child.types().intersects(usage_mask))
                .filter_map(|child| pass.fetch(child))
                .collect();
            if !children.is_empty() {
                snapshot.entries.push(CollectionEntry {
                    collection: entry.collection.clone(),
                    children,
                });
            }
        }
        debug!(
            "Query pass ({} / {}): {} values",
            collection_mask,
            usage_mask,
            snapshot.leaves().count()
        );
        snapshot
    }

    /// First leaf with `usage_id` (in `collection_id` when nonzero), in build
    /// order, optionally with its current value
    pub fn lookup_value(
        &self,
        usage_id: u16,
        collection_id: u16,
        retrieve_value: bool,
    ) -> Result<Option<UsageNode>, UsageError> {
        let Some(node) = self.collection.find_leaf(usage_id, collection_id) else {
            return Ok(None);
        };
        if !retrieve_value {
            return Ok(Some(node.clone()));
        }
        let mut channel = self.source.open()?;
        let value = fetch_value(channel.as_mut(), node)?;
        Ok(Some(node.with_value(value)))
    }

    /// Write a value to a writable Feature leaf, sized to its field
    pub fn set_feature_value(
        &self,
        usage_id: u16,
        collection_id: u16,
        value: i32,
    ) -> Result<(), UsageError> {
        let node = self
            .collection
            .leaves()
            .find(|(collection, leaf)| {
                leaf.usage_id() == usage_id
                    && leaf.report_kind() == ReportKind::Feature
                    && (collection_id == 0 || collection.collection_id() == collection_id)
            })
            .map(|(_, leaf)| leaf)
            .ok_or(UsageError::UsageNotFound {
                usage_id,
                collection_id,
            })?;

        let definition = node.definition();
        if !definition.writable() || !definition.reports.contains(ReportKinds::FEATURE) {
            return Err(UsageError::NotWritable(node.name().to_string()));
        }
        let Some(cap) = node.value_capability() else {
            return Err(UsageError::NoValueCapability(node.name().to_string()));
        };

        // Truncated to the field width, little-endian
        let bytes = value.to_le_bytes();
        let mut channel = self.source.open()?;
        channel.set_feature(node.report_id(), &bytes[..cap.field_width()])?;
        debug!(
            "Wrote {} = {} (report 0x{:02X})",
            node.name(),
            value,
            node.report_id()
        );
        Ok(())
    }
}
