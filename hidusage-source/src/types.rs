//! Common types for capability sources

use std::fmt;
use std::ops::RangeInclusive;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::SourceError;

/// Report channel a capability belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ReportKind {
    Input,
    Output,
    Feature,
}

impl ReportKind {
    /// Order in which the collection builder walks report kinds
    pub const ALL: [ReportKind; 3] = [ReportKind::Feature, ReportKind::Input, ReportKind::Output];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Input => "Input",
            Self::Output => "Output",
            Self::Feature => "Feature",
        }
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Shape shared by value and button capabilities
pub trait Capability {
    /// Usage page of the field
    fn usage_page(&self) -> u16;
    /// Link collection index tying the field to its parent collection
    fn link_collection(&self) -> u16;
    /// Report ID carrying the field
    fn report_id(&self) -> u8;
    /// First usage (or the only usage when not a range)
    fn usage_min(&self) -> u16;
    /// Last usage (equal to `usage_min` when not a range)
    fn usage_max(&self) -> u16;
    /// Whether the capability describes a usage range
    fn is_range(&self) -> bool;

    /// Every usage covered by this capability
    fn usages(&self) -> RangeInclusive<u16> {
        if self.is_range() && self.usage_max() >= self.usage_min() {
            self.usage_min()..=self.usage_max()
        } else {
            self.usage_min()..=self.usage_min()
        }
    }
}

fn is_zero<T: Default + PartialEq>(v: &T) -> bool {
    *v == T::default()
}

/// Descriptor of one value field
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueCapability {
    pub usage_page: u16,
    /// Usage, or first usage of the range
    pub usage: u16,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub usage_max: u16,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_range: bool,
    pub report_id: u8,
    pub link_collection: u16,
    #[serde(default)]
    pub link_usage: u16,
    #[serde(default)]
    pub link_usage_page: u16,
    /// Index of the string descriptor holding the value (0 = numeric field)
    #[serde(default, skip_serializing_if = "is_zero")]
    pub string_index: u16,
    #[serde(default)]
    pub logical_min: i32,
    #[serde(default)]
    pub logical_max: i32,
    #[serde(default)]
    pub physical_min: i32,
    #[serde(default)]
    pub physical_max: i32,
    #[serde(default)]
    pub bit_size: u16,
    #[serde(default)]
    pub report_count: u16,
    #[serde(default)]
    pub units: u32,
    #[serde(default)]
    pub unit_exponent: i32,
}

impl ValueCapability {
    /// Plain value field for a single usage
    pub fn new(usage_page: u16, usage: u16, report_id: u8, link_collection: u16) -> Self {
        Self {
            usage_page,
            usage,
            usage_max: usage,
            report_id,
            link_collection,
            bit_size: 32,
            report_count: 1,
            ..Default::default()
        }
    }

    /// Value field backed by an indexed string descriptor
    pub fn with_string_index(mut self, string_index: u16) -> Self {
        self.string_index = string_index;
        self
    }

    /// Set logical range
    pub fn with_logical(mut self, min: i32, max: i32) -> Self {
        self.logical_min = min;
        self.logical_max = max;
        self
    }

    /// Set field size in bits
    pub fn with_bit_size(mut self, bit_size: u16) -> Self {
        self.bit_size = bit_size;
        self
    }

    /// Payload bytes holding the field: bit size rounded up, capped at 4
    /// (4 when the size is unknown)
    pub fn field_width(&self) -> usize {
        match self.bit_size {
            0 => 4,
            bits => usize::from(bits).div_ceil(8).min(4),
        }
    }

    /// Negative logical minimum means two's complement
    pub fn is_signed(&self) -> bool {
        self.logical_min < 0
    }
}

impl Capability for ValueCapability {
    fn usage_page(&self) -> u16 {
        self.usage_page
    }
    fn link_collection(&self) -> u16 {
        self.link_collection
    }
    fn report_id(&self) -> u8 {
        self.report_id
    }
    fn usage_min(&self) -> u16 {
        self.usage
    }
    fn usage_max(&self) -> u16 {
        self.usage_max
    }
    fn is_range(&self) -> bool {
        self.is_range
    }
}

/// Descriptor of one button (1-bit) field or button array
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonCapability {
    pub usage_page: u16,
    /// Usage, or first usage of the range
    pub usage: u16,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub usage_max: u16,
    #[serde(default, skip_serializing_if = "is_zero")]
    pub is_range: bool,
    pub report_id: u8,
    pub link_collection: u16,
    #[serde(default)]
    pub link_usage: u16,
    #[serde(default)]
    pub link_usage_page: u16,
    /// Bit offset of the first usage inside the report payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bit_position: Option<u16>,
}

impl ButtonCapability {
    /// Single button
    pub fn new(usage_page: u16, usage: u16, report_id: u8, link_collection: u16) -> Self {
        Self {
            usage_page,
            usage,
            usage_max: usage,
            report_id,
            link_collection,
            ..Default::default()
        }
    }

    /// Button range `usage..=usage_max`
    pub fn range(
        usage_page: u16,
        usage: u16,
        usage_max: u16,
        report_id: u8,
        link_collection: u16,
    ) -> Self {
        Self {
            usage_max,
            is_range: true,
            ..Self::new(usage_page, usage, report_id, link_collection)
        }
    }

    /// Set bit offset of the first usage
    pub fn at_bit(mut self, bit_position: u16) -> Self {
        self.bit_position = Some(bit_position);
        self
    }
}

impl Capability for ButtonCapability {
    fn usage_page(&self) -> u16 {
        self.usage_page
    }
    fn link_collection(&self) -> u16 {
        self.link_collection
    }
    fn report_id(&self) -> u8 {
        self.report_id
    }
    fn usage_min(&self) -> u16 {
        self.usage
    }
    fn usage_max(&self) -> u16 {
        self.usage_max
    }
    fn is_range(&self) -> bool {
        self.is_range
    }
}

/// Capabilities sharing one (usage page, link collection) key
#[derive(Debug)]
pub struct CapabilityGroup<'a, T> {
    pub usage_page: u16,
    pub link_collection: u16,
    pub items: Vec<&'a Arc<T>>,
}

/// Group capabilities by (usage page, link collection), keeping first-seen order
pub fn group_by_collection<T: Capability>(items: &[Arc<T>]) -> Vec<CapabilityGroup<'_, T>> {
    let mut groups: Vec<CapabilityGroup<'_, T>> = Vec::new();
    for item in items {
        let key = (item.usage_page(), item.link_collection());
        match groups
            .iter_mut()
            .find(|g| (g.usage_page, g.link_collection) == key)
        {
            Some(group) => group.items.push(item),
            None => groups.push(CapabilityGroup {
                usage_page: key.0,
                link_collection: key.1,
                items: vec![item],
            }),
        }
    }
    groups
}

/// All capability arrays of one device session
///
/// Serializes to the JSON capability snapshot format read by [`crate::HidSource`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    #[serde(default)]
    pub feature_values: Vec<Arc<ValueCapability>>,
    #[serde(default)]
    pub feature_buttons: Vec<Arc<ButtonCapability>>,
    #[serde(default)]
    pub input_values: Vec<Arc<ValueCapability>>,
    #[serde(default)]
    pub input_buttons: Vec<Arc<ButtonCapability>>,
    #[serde(default)]
    pub output_values: Vec<Arc<ValueCapability>>,
    #[serde(default)]
    pub output_buttons: Vec<Arc<ButtonCapability>>,
}

impl CapabilitySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value capabilities for a report kind
    pub fn values(&self, kind: ReportKind) -> &[Arc<ValueCapability>] {
        match kind {
            ReportKind::Feature => &self.feature_values,
            ReportKind::Input => &self.input_values,
            ReportKind::Output => &self.output_values,
        }
    }

    /// Button capabilities for a report kind
    pub fn buttons(&self, kind: ReportKind) -> &[Arc<ButtonCapability>] {
        match kind {
            ReportKind::Feature => &self.feature_buttons,
            ReportKind::Input => &self.input_buttons,
            ReportKind::Output => &self.output_buttons,
        }
    }

    /// Add a value capability
    pub fn push_value(&mut self, kind: ReportKind, cap: ValueCapability) -> &mut Self {
        let list = match kind {
            ReportKind::Feature => &mut self.feature_values,
            ReportKind::Input => &mut self.input_values,
            ReportKind::Output => &mut self.output_values,
        };
        list.push(Arc::new(cap));
        self
    }

    /// Add a button capability
    pub fn push_button(&mut self, kind: ReportKind, cap: ButtonCapability) -> &mut Self {
        let list = match kind {
            ReportKind::Feature => &mut self.feature_buttons,
            ReportKind::Input => &mut self.input_buttons,
            ReportKind::Output => &mut self.output_buttons,
        };
        list.push(Arc::new(cap));
        self
    }

    /// Value capabilities grouped by (usage page, link collection)
    pub fn value_groups(&self, kind: ReportKind) -> Vec<CapabilityGroup<'_, ValueCapability>> {
        group_by_collection(self.values(kind))
    }

    /// Button capabilities grouped by (usage page, link collection)
    pub fn button_groups(&self, kind: ReportKind) -> Vec<CapabilityGroup<'_, ButtonCapability>> {
        group_by_collection(self.buttons(kind))
    }

    /// Total number of capability records
    pub fn len(&self) -> usize {
        ReportKind::ALL
            .iter()
            .map(|k| self.values(*k).len() + self.buttons(*k).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Parse a JSON capability snapshot
    pub fn from_json(json: &str) -> Result<Self, SourceError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a JSON capability snapshot from disk
    pub fn load(path: &Path) -> Result<Self, SourceError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serialize as a JSON capability snapshot
    pub fn to_json(&self) -> Result<String, SourceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Device identification information
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceDeviceInfo {
    /// USB Vendor ID
    pub vid: u16,
    /// USB Product ID
    pub pid: u16,
    /// Top-level usage page of the interface
    pub usage_page: u16,
    /// Top-level usage of the interface
    pub usage: u16,
    /// Device path or identifier (backend-specific)
    pub device_path: String,
    pub manufacturer: Option<String>,
    pub product_name: Option<String>,
    pub serial: Option<String>,
}

/// Discovered device that can be opened
#[derive(Debug, Clone)]
pub struct DiscoveredDevice {
    pub info: SourceDeviceInfo,
    pub interface_number: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_keep_first_seen_order() {
        let mut caps = CapabilitySet::new();
        caps.push_value(ReportKind::Feature, ValueCapability::new(0x84, 0x30, 1, 0x24))
            .push_value(ReportKind::Feature, ValueCapability::new(0x85, 0x66, 2, 0x02))
            .push_value(ReportKind::Feature, ValueCapability::new(0x84, 0x35, 3, 0x24));

        let groups = caps.value_groups(ReportKind::Feature);
        assert_eq!(groups.len(), 2);
        assert_eq!((groups[0].usage_page, groups[0].link_collection), (0x84, 0x24));
        assert_eq!(groups[0].items.len(), 2);
        assert_eq!(groups[0].items[1].usage, 0x35);
        assert_eq!((groups[1].usage_page, groups[1].link_collection), (0x85, 0x02));
    }

    #[test]
    fn range_usages() {
        let cap = ButtonCapability::range(0x09, 1, 4, 1, 0);
        assert_eq!(cap.usages().collect::<Vec<_>>(), vec![1, 2, 3, 4]);

        // Inverted range collapses to the first usage
        let mut bad = cap.clone();
        bad.usage_max = 0;
        assert_eq!(bad.usages().count(), 1);
    }

    #[test]
    fn field_width_follows_bit_size() {
        let cap = ValueCapability::new(0x84, 0x35, 2, 0x24);
        assert_eq!(cap.field_width(), 4);
        assert_eq!(cap.clone().with_bit_size(8).field_width(), 1);
        assert_eq!(cap.clone().with_bit_size(12).field_width(), 2);
        assert_eq!(cap.clone().with_bit_size(64).field_width(), 4);
        assert_eq!(cap.clone().with_bit_size(0).field_width(), 4);
        assert!(!cap.is_signed());
        assert!(cap.with_logical(-100, 100).is_signed());
    }

    #[test]
    fn snapshot_json_defaults() {
        let json = r#"{
            "feature_values": [
                { "usage_page": 132, "usage": 48, "report_id": 1, "link_collection": 36 }
            ],
            "input_buttons": [
                { "usage_page": 132, "usage": 96, "report_id": 2, "link_collection": 2, "bit_position": 3 }
            ]
        }"#;
        let caps = CapabilitySet::from_json(json).unwrap();
        assert_eq!(caps.len(), 2);
        assert_eq!(caps.feature_values[0].string_index, 0);
        assert_eq!(caps.input_buttons[0].bit_position, Some(3));
        assert!(caps.output_values.is_empty());

        let again = CapabilitySet::from_json(&caps.to_json().unwrap()).unwrap();
        assert_eq!(again, caps);
    }

    #[test]
    fn malformed_snapshot_is_error() {
        let err = CapabilitySet::from_json("{ \"feature_values\": 3 }").unwrap_err();
        assert!(matches!(err, SourceError::Snapshot(_)));
    }
}
