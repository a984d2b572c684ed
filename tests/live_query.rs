//! Integration tests for live value queries against the in-memory demo UPS.
//!
//! The demo source counts how often it is opened, so these also check that a
//! query pass holds a single device handle.

use hidusage::catalog::{page, UsageTypes};
use hidusage::collection::UsageCollection;
use hidusage::demo::{demo_capabilities, demo_ups, BATTERY_STATUS, POWER_SUMMARY};
use hidusage::query::LiveQueryEngine;
use hidusage::value::{AudibleAlarmControl, PowerTestState, UsageValue};
use hidusage::{DeviceChemistry, UsageError};
use hidusage_source::{
    ButtonCapability, CapabilitySet, CapabilitySource, MemorySource, ReportKind, SourceDeviceInfo,
    SourceError, ValueCapability,
};

// ── refresh ──

#[test]
fn refresh_reads_dynamic_values() {
    let ups = demo_ups();
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);

    let outcome = engine.refresh_dynamic_values();
    assert!(outcome.report.is_complete());
    let snap = &outcome.snapshot;

    assert_eq!(snap.value_of(page::POWER_DEVICE, 0x30), Some(&UsageValue::Integer(230)));
    assert_eq!(
        snap.value_of(page::POWER_DEVICE, 0x5A),
        Some(&UsageValue::AlarmControl(AudibleAlarmControl::Enabled))
    );
    assert_eq!(
        snap.value_of(page::POWER_DEVICE, 0x58),
        Some(&UsageValue::Test(PowerTestState::NoTestInitiated))
    );
    // unlinked dynamic value picked up by the second sweep
    assert_eq!(snap.value_of(page::POWER_DEVICE, 0x32), Some(&UsageValue::Integer(50)));
    // static values are not refreshed
    assert!(snap.find(page::BATTERY_SYSTEM, 0x89).is_none());
    assert!(snap.find(page::POWER_DEVICE, 0xFD).is_none());
}

#[test]
fn one_device_handle_per_pass() {
    let ups = demo_ups();
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);

    engine.refresh_dynamic_values();
    assert_eq!(ups.open_count(), 1);
    assert_eq!(ups.open_handles(), 0);

    engine.get_feature_values(UsageTypes::COLLECTIONS, UsageTypes::all(), true);
    assert_eq!(ups.open_count(), 2);
    assert_eq!(ups.open_handles(), 0);
}

#[test]
fn snapshot_leaves_tree_untouched() {
    let ups = demo_ups();
    let tree = UsageCollection::build(ups.capabilities());
    let before = tree.clone();
    let engine = LiveQueryEngine::new(&tree, &ups);
    let outcome = engine.refresh_dynamic_values();
    assert!(outcome.snapshot.leaves().all(|n| n.value().is_some()));
    assert_eq!(tree, before);
    assert!(tree.leaves().all(|(_, leaf)| leaf.value().is_none()));
}

// ── value kinds ──

#[test]
fn buttons_are_flags() {
    let ups = demo_ups();
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);
    let snap = engine
        .get_feature_values(UsageTypes::COLLECTIONS, UsageTypes::DYNAMIC_FLAG, false)
        .snapshot;

    assert_eq!(snap.value_of(page::POWER_DEVICE, 0x60), Some(&UsageValue::Flag(true)));
    assert_eq!(snap.value_of(page::POWER_DEVICE, 0x61), Some(&UsageValue::Flag(true)));
    // not asserted: defaults to false
    assert_eq!(snap.value_of(page::POWER_DEVICE, 0x69), Some(&UsageValue::Flag(false)));
    assert_eq!(snap.value_of(page::BATTERY_SYSTEM, 0x44), Some(&UsageValue::Flag(true)));
}

#[test]
fn button_match_ignores_collection() {
    let mut caps = CapabilitySet::new();
    caps.push_button(
        ReportKind::Input,
        ButtonCapability::new(page::POWER_DEVICE, 0x65, 1, 0x02),
    );
    // asserted in a different collection
    let src = MemorySource::new(SourceDeviceInfo::default(), caps)
        .with_pressed(ReportKind::Input, 0x24, 0x65);
    let tree = UsageCollection::build(src.capabilities());
    let node = LiveQueryEngine::new(&tree, &src)
        .lookup_value(0x65, 0, true)
        .unwrap()
        .unwrap();
    assert_eq!(node.value(), Some(&UsageValue::Flag(true)));
}

#[test]
fn strings_and_chemistry() {
    let ups = demo_ups();
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);
    let snap = engine
        .get_feature_values(UsageTypes::COLLECTIONS, UsageTypes::STATIC_VALUE, false)
        .snapshot;

    assert_eq!(
        snap.value_of(page::BATTERY_SYSTEM, 0x89),
        Some(&UsageValue::Chemistry(DeviceChemistry::LeadAcid))
    );
    assert_eq!(
        snap.value_of(page::POWER_DEVICE, 0xFD),
        Some(&UsageValue::Text("Demo Power".to_string()))
    );
}

#[test]
fn unknown_chemistry_keeps_text() {
    let ups = demo_ups().with_string(hidusage::demo::STRING_CHEMISTRY, "Graphene");
    let tree = UsageCollection::build(ups.capabilities());
    let node = LiveQueryEngine::new(&tree, &ups)
        .lookup_value(0x89, BATTERY_STATUS, true)
        .unwrap()
        .unwrap();
    assert_eq!(node.value(), Some(&UsageValue::Text("Graphene".to_string())));
}

#[test]
fn out_of_range_enumeration_stays_integer() {
    let ups = demo_ups().with_feature_i32(0x03, 9);
    let tree = UsageCollection::build(ups.capabilities());
    let node = LiveQueryEngine::new(&tree, &ups)
        .lookup_value(0x5A, POWER_SUMMARY, true)
        .unwrap()
        .unwrap();
    assert_eq!(node.value(), Some(&UsageValue::Integer(9)));
}

// ── inclusion rules ──

#[test]
fn reserved_mask_without_opt_in_is_empty() {
    let ups = demo_ups();
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);

    let outcome = engine.get_feature_values(UsageTypes::RESERVED, UsageTypes::DYNAMIC_VALUE, false);
    assert!(outcome.snapshot.is_empty());
    assert_eq!(ups.open_count(), 0);

    let outcome = engine.get_feature_values(UsageTypes::RESERVED, UsageTypes::DYNAMIC_VALUE, true);
    let names: Vec<&str> = outcome.snapshot.leaves().map(|n| n.name()).collect();
    assert_eq!(names, ["Frequency"]);
}

#[test]
fn collection_mask_filters() {
    let ups = demo_ups();
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);
    // PowerSummary is CL/CP, UPS is CA
    let snap = engine
        .get_feature_values(UsageTypes::COLLECTION_APPLICATION, UsageTypes::all(), false)
        .snapshot;
    assert_eq!(snap.len(), 1);
    assert_eq!(snap.entries()[0].collection.name(), "UPS");
}

// ── failures ──

#[test]
fn failing_report_is_omitted_and_reported() {
    let ups = demo_ups().with_failing_report(0x02);
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);
    let outcome = engine.refresh_dynamic_values();

    assert!(outcome.snapshot.find(page::POWER_DEVICE, 0x35).is_none());
    assert!(outcome.snapshot.find(page::POWER_DEVICE, 0x30).is_some());
    assert_eq!(outcome.report.failures.len(), 1);
    let failure = &outcome.report.failures[0];
    assert_eq!(failure.name, "PercentLoad");
    assert_eq!(failure.collection_id, POWER_SUMMARY);
    assert!(matches!(failure.error, SourceError::HidError(_)));
}

#[test]
fn missing_report_is_omitted() {
    let mut caps = demo_capabilities();
    caps.push_value(
        ReportKind::Feature,
        ValueCapability::new(page::POWER_DEVICE, 0x31, 0x20, POWER_SUMMARY),
    );
    let ups = MemorySource::new(SourceDeviceInfo::default(), caps).with_feature_i32(0x01, 120);
    let tree = UsageCollection::build(ups.capabilities());
    let outcome = LiveQueryEngine::new(&tree, &ups)
        .get_feature_values(UsageTypes::COLLECTIONS, UsageTypes::DYNAMIC_VALUE, false);
    let names: Vec<&str> = outcome.snapshot.leaves().map(|n| n.name()).collect();
    assert_eq!(names, ["Voltage"]);
    assert!(outcome
        .report
        .failures
        .iter()
        .any(|f| matches!(f.error, SourceError::ReportUnavailable(0x20))));
}

#[test]
fn offline_device_yields_empty_snapshot() {
    let ups = MemorySource::new(SourceDeviceInfo::default(), demo_capabilities()).offline();
    let tree = UsageCollection::build(ups.capabilities());
    let outcome = LiveQueryEngine::new(&tree, &ups).refresh_dynamic_values();
    assert!(outcome.snapshot.is_empty());
    assert!(matches!(outcome.report.open_error, Some(SourceError::Disconnected)));
    assert!(outcome.report.skipped > 0);
    assert!(outcome.report.failures.is_empty());
}

#[test]
fn missing_string_is_omitted_and_reported() {
    let ups = MemorySource::new(SourceDeviceInfo::default(), demo_capabilities())
        .with_feature_i32(0x05, 230)
        .with_string(hidusage::demo::STRING_MANUFACTURER, "Demo Power");
    let tree = UsageCollection::build(ups.capabilities());
    let outcome = LiveQueryEngine::new(&tree, &ups)
        .get_feature_values(UsageTypes::COLLECTIONS, UsageTypes::STATIC_VALUE, false);

    assert!(outcome.snapshot.find(page::BATTERY_SYSTEM, 0x89).is_none());
    assert!(outcome.snapshot.find(page::POWER_DEVICE, 0xFD).is_some());
    assert_eq!(outcome.report.failures.len(), 1);
    let failure = &outcome.report.failures[0];
    assert_eq!((failure.usage_page, failure.usage_id), (page::BATTERY_SYSTEM, 0x89));
    assert_eq!(failure.collection_id, BATTERY_STATUS);
    assert!(matches!(failure.error, SourceError::StringUnavailable(4)));
}

// ── field widths ──

#[test]
fn short_reports_are_zero_extended() {
    let ups = demo_ups().with_feature(0x02, &[37]).with_feature(0x07, &[0x8C, 0x0A]);
    let tree = UsageCollection::build(ups.capabilities());
    let outcome = LiveQueryEngine::new(&tree, &ups).refresh_dynamic_values();

    assert!(outcome.report.is_complete());
    assert_eq!(outcome.snapshot.value_of(page::POWER_DEVICE, 0x35), Some(&UsageValue::Integer(37)));
    assert_eq!(outcome.snapshot.value_of(page::BATTERY_SYSTEM, 0x68), Some(&UsageValue::Integer(2700)));
}

#[test]
fn narrow_enumeration_decodes() {
    let ups = demo_ups().with_feature(0x03, &[1]).with_feature(0x04, &[3]);
    let tree = UsageCollection::build(ups.capabilities());
    let snap = LiveQueryEngine::new(&tree, &ups).refresh_dynamic_values().snapshot;
    assert_eq!(
        snap.value_of(page::POWER_DEVICE, 0x5A),
        Some(&UsageValue::AlarmControl(AudibleAlarmControl::Disabled))
    );
    assert_eq!(
        snap.value_of(page::POWER_DEVICE, 0x58),
        Some(&UsageValue::Test(PowerTestState::DoneError))
    );
}

fn narrow_fields() -> CapabilitySet {
    let mut caps = CapabilitySet::new();
    caps.push_value(
        ReportKind::Feature,
        ValueCapability::new(page::POWER_DEVICE, 0x31, 0x20, POWER_SUMMARY)
            .with_bit_size(8)
            .with_logical(-128, 127),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(page::POWER_DEVICE, 0x40, 0x21, POWER_SUMMARY)
            .with_bit_size(16)
            .with_logical(0, 500),
    );
    caps
}

#[test]
fn signed_fields_sign_extend() {
    // a device answering with more bytes than the field still reads one byte
    let ups = MemorySource::new(SourceDeviceInfo::default(), narrow_fields())
        .with_feature(0x20, &[0xF6, 0x55])
        .with_feature(0x21, &[0xE6, 0x00]);
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);

    let current = engine.lookup_value(0x31, 0, true).unwrap().unwrap();
    assert_eq!(current.value(), Some(&UsageValue::Integer(-10)));
    let voltage = engine.lookup_value(0x40, 0, true).unwrap().unwrap();
    assert_eq!(voltage.value(), Some(&UsageValue::Integer(230)));
}

#[test]
fn set_writes_field_width() {
    let ups = MemorySource::new(SourceDeviceInfo::default(), narrow_fields());
    let tree = UsageCollection::build(ups.capabilities());
    LiveQueryEngine::new(&tree, &ups)
        .set_feature_value(0x40, POWER_SUMMARY, 120)
        .unwrap();
    assert_eq!(ups.writes(), vec![(0x21, vec![120, 0])]);
}

// ── lookup and set ──

#[test]
fn lookup_is_first_match_in_build_order() {
    let mut caps = CapabilitySet::new();
    caps.push_value(
        ReportKind::Feature,
        ValueCapability::new(page::POWER_DEVICE, 0x30, 1, 0x1A),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(page::POWER_DEVICE, 0x30, 2, 0x1C),
    );
    let src = MemorySource::new(SourceDeviceInfo::default(), caps)
        .with_feature_i32(1, 231)
        .with_feature_i32(2, 229);
    let tree = UsageCollection::build(src.capabilities());
    let engine = LiveQueryEngine::new(&tree, &src);

    let first = engine.lookup_value(0x30, 0, true).unwrap().unwrap();
    assert_eq!(first.collection_id(), 0x1A);
    assert_eq!(first.value(), Some(&UsageValue::Integer(231)));

    let output = engine.lookup_value(0x30, 0x1C, true).unwrap().unwrap();
    assert_eq!(output.value(), Some(&UsageValue::Integer(229)));

    let no_read = engine.lookup_value(0x30, 0x1C, false).unwrap().unwrap();
    assert!(no_read.value().is_none());
    assert_eq!(src.open_count(), 2);

    assert!(engine.lookup_value(0x31, 0, true).unwrap().is_none());
}

#[test]
fn lookup_propagates_device_errors() {
    let ups = demo_ups().with_failing_report(0x01);
    let tree = UsageCollection::build(ups.capabilities());
    let err = LiveQueryEngine::new(&tree, &ups)
        .lookup_value(0x30, 0, true)
        .unwrap_err();
    assert!(matches!(err, UsageError::Source(SourceError::HidError(_))));
}

#[test]
fn set_then_read_back() {
    let ups = demo_ups();
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);

    engine
        .set_feature_value(0x5A, POWER_SUMMARY, AudibleAlarmControl::Muted.raw())
        .unwrap();
    assert_eq!(ups.writes(), vec![(0x03, 3i32.to_le_bytes().to_vec())]);

    let node = engine.lookup_value(0x5A, 0, true).unwrap().unwrap();
    assert_eq!(node.value(), Some(&UsageValue::AlarmControl(AudibleAlarmControl::Muted)));
}

#[test]
fn set_rejects_read_only_and_unknown() {
    let ups = demo_ups();
    let tree = UsageCollection::build(ups.capabilities());
    let engine = LiveQueryEngine::new(&tree, &ups);

    assert!(matches!(
        engine.set_feature_value(0x35, 0, 10),
        Err(UsageError::NotWritable(_))
    ));
    assert!(matches!(
        engine.set_feature_value(0x5A, BATTERY_STATUS, 1),
        Err(UsageError::UsageNotFound { .. })
    ));
    assert!(ups.writes().is_empty());
}
