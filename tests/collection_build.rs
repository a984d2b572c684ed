//! Integration tests for building usage collection trees.
//!
//! Capability arrays are built by hand or taken from the demo UPS; no device
//! is opened.

use hidusage::catalog::{page, CatalogRegistry};
use hidusage::collection::{UsageCollection, UsageCollectionBuilder};
use hidusage::demo::{demo_capabilities, BATTERY_STATUS, POWER_SUMMARY, PRESENT_STATUS};
use hidusage_source::{ButtonCapability, CapabilitySet, ReportKind, ValueCapability};

// ── demo tree shape ──

#[test]
fn demo_tree_shape() {
    let tree = UsageCollection::build(&demo_capabilities());

    let summary = tree
        .get(page::POWER_DEVICE, POWER_SUMMARY, ReportKind::Feature)
        .unwrap();
    let names: Vec<&str> = summary.children.iter().map(|c| c.name()).collect();
    assert_eq!(
        names,
        ["Voltage", "PercentLoad", "AudibleAlarmControl", "Test", "ConfigVoltage"]
    );

    let status = tree
        .get(page::POWER_DEVICE, PRESENT_STATUS, ReportKind::Input)
        .unwrap();
    assert!(status.collection.is_button_group());
    assert_eq!(status.children.len(), 3);

    let battery = tree
        .get(page::BATTERY_SYSTEM, BATTERY_STATUS, ReportKind::Feature)
        .unwrap();
    assert_eq!(battery.collection.name(), "SMBBatteryStatus");
    assert!(battery.child(0x89).is_some());

    // unlinked Frequency lands under "Undefined"
    let unlinked = tree.get(page::POWER_DEVICE, 0, ReportKind::Input).unwrap();
    assert_eq!(unlinked.collection.name(), "Undefined");
    assert_eq!(unlinked.children[0].name(), "Frequency");
}

#[test]
fn leaves_carry_their_capability() {
    let caps = demo_capabilities();
    let tree = UsageCollection::build(&caps);
    let chemistry = tree.find_leaf(0x89, BATTERY_STATUS).unwrap();
    assert_eq!(chemistry.report_id(), 0x0A);
    assert_eq!(chemistry.report_kind(), ReportKind::Feature);
    assert_eq!(chemistry.value_capability().unwrap().string_index, 4);
    assert!(chemistry.value().is_none());
}

// ── determinism ──

#[test]
fn identical_input_builds_identical_tree() {
    let caps = demo_capabilities();
    let a = UsageCollection::build(&caps);
    let b = UsageCollection::build(&caps.clone());
    assert_eq!(a, b);

    let registry = CatalogRegistry::new().unwrap();
    let c = UsageCollectionBuilder::with_registry(&registry).build(&caps);
    assert_eq!(a, c);
}

#[test]
fn snapshot_roundtrip_builds_same_tree() {
    let caps = demo_capabilities();
    let restored = CapabilitySet::from_json(&caps.to_json().unwrap()).unwrap();
    assert_eq!(UsageCollection::build(&caps), UsageCollection::build(&restored));
}

// ── exclusion rules ──

#[test]
fn reserved_battery_usages_never_appear() {
    let mut caps = CapabilitySet::new();
    for usage in 0xC3..=0xCF {
        caps.push_value(
            ReportKind::Feature,
            ValueCapability::new(page::BATTERY_SYSTEM, usage, 1, BATTERY_STATUS),
        );
    }
    // reserved ids used as a link collection drop the whole group
    caps.push_value(
        ReportKind::Feature,
        ValueCapability::new(page::BATTERY_SYSTEM, 0x66, 2, 0xC3),
    );
    let tree = UsageCollection::build(&caps);
    assert_eq!(tree.leaf_count(), 0);
    assert!(tree.leaves().all(|(_, leaf)| !leaf.definition().is_reserved()));
    assert!(tree.get(page::BATTERY_SYSTEM, 0xC3, ReportKind::Feature).is_none());
}

#[test]
fn value_and_button_passes_share_a_collection() {
    let mut caps = CapabilitySet::new();
    caps.push_value(
        ReportKind::Input,
        ValueCapability::new(page::POWER_DEVICE, 0x30, 1, PRESENT_STATUS),
    )
    .push_button(
        ReportKind::Input,
        ButtonCapability::new(page::POWER_DEVICE, 0x30, 1, PRESENT_STATUS),
    )
    .push_button(
        ReportKind::Input,
        ButtonCapability::new(page::POWER_DEVICE, 0x65, 1, PRESENT_STATUS),
    );
    let tree = UsageCollection::build(&caps);
    assert_eq!(tree.len(), 1);
    let entry = &tree.entries()[0];
    assert!(!entry.collection.is_button_group());
    // value pass ran first, so Voltage keeps its value capability
    assert!(!entry.children[0].is_button());
    assert!(entry.children[1].is_button());
    assert_eq!(entry.children.len(), 2);
}

#[test]
fn report_kinds_are_kept_apart() {
    let mut caps = CapabilitySet::new();
    caps.push_value(
        ReportKind::Feature,
        ValueCapability::new(page::POWER_DEVICE, 0x30, 1, POWER_SUMMARY),
    )
    .push_value(
        ReportKind::Input,
        ValueCapability::new(page::POWER_DEVICE, 0x30, 2, POWER_SUMMARY),
    );
    let tree = UsageCollection::build(&caps);
    assert_eq!(tree.len(), 2);
    let kinds: Vec<ReportKind> = tree.iter().map(|e| e.collection.report_kind()).collect();
    assert_eq!(kinds, [ReportKind::Feature, ReportKind::Input]);
}

#[test]
fn button_range_expands() {
    let mut caps = CapabilitySet::new();
    caps.push_button(
        ReportKind::Input,
        ButtonCapability::range(page::BUTTON, 1, 8, 1, 0x02),
    );
    // Button page link collection 0x02 resolves to "Button"
    let tree = UsageCollection::build(&caps);
    assert_eq!(tree.leaf_count(), 8);
}
