//! Integration tests for the built-in usage page tables.
//!
//! These go through the public registry only, the way the collection builder
//! resolves usages.

use std::sync::Arc;

use hidusage::catalog::{catalog_registry, page, Catalog, CatalogError, Directive, ReportKinds, UsageTypes};
use hidusage::PowerUnit;

// ── registry identity ──

#[test]
fn specialized_catalogs_share_identity() {
    let reg = catalog_registry();
    for p in [page::POWER_DEVICE, page::BATTERY_SYSTEM, page::KEYBOARD] {
        let first = reg.catalog_for(p);
        for _ in 0..3 {
            assert!(Arc::ptr_eq(&first, &reg.catalog_for(p)));
        }
    }
}

#[test]
fn registry_is_process_wide() {
    assert!(std::ptr::eq(catalog_registry(), catalog_registry()));
}

// ── seed directives ──

#[test]
fn audible_alarm_control_entry() {
    let def = catalog_registry()
        .catalog_for(page::POWER_DEVICE)
        .resolve(page::POWER_DEVICE, 0x5A)
        .cloned()
        .unwrap();
    assert_eq!(def.id, 0x5A);
    assert!(def.reports.contains(ReportKinds::FEATURE));
    assert!(!def.reports.contains(ReportKinds::INPUT));
    assert!(def.readable());
    assert!(def.writable());
    assert_eq!(def.types, UsageTypes::DYNAMIC_VALUE);
}

#[test]
fn range_directive_expands_per_id() {
    let catalog = Catalog::from_directives(
        page::BATTERY_SYSTEM,
        "Battery System",
        &[Directive::range("C3-CF", "Reserved")],
    )
    .unwrap();
    assert_eq!(catalog.len(), 13);
    let ids: Vec<u16> = catalog.iter().map(|d| d.id).collect();
    assert_eq!(ids, (0xC3..=0xCF).collect::<Vec<_>>());
    assert!(catalog.iter().all(|d| d.name == "Reserved"));
}

#[test]
fn every_range_in_a_directive_list_is_counted() {
    for (range, expected) in [("00-00", 1), ("10-14", 5), ("01-FF", 255)] {
        let defs = Directive::range(range, "Reserved").expand(0x42).unwrap();
        assert_eq!(defs.len(), expected, "{range}");
    }
}

#[test]
fn malformed_directive_is_an_error() {
    let err = Catalog::from_directives(
        page::POWER_DEVICE,
        "broken",
        &[Directive::usage(0x30, "Voltage").types("DV").reports("IZ")],
    )
    .unwrap_err();
    assert!(matches!(err, CatalogError::InvalidReportToken { .. }));
    assert!(err.to_string().contains("Voltage"));
}

// ── page traits ──

#[test]
fn battery_level_marker() {
    let battery = catalog_registry().catalog_for(page::BATTERY_SYSTEM);
    let remaining = battery.resolve(page::BATTERY_SYSTEM, 0x66).unwrap();
    assert!(remaining.traits.supports_battery_level_reporting);
    assert_eq!(remaining.traits.inferred_unit, Some(PowerUnit::Capacity));

    let charging = battery.resolve(page::BATTERY_SYSTEM, 0x44).unwrap();
    assert!(!charging.traits.supports_battery_level_reporting);
}

#[test]
fn power_units_inferred() {
    let power = catalog_registry().catalog_for(page::POWER_DEVICE);
    let unit = |id| power.resolve(page::POWER_DEVICE, id).unwrap().traits.inferred_unit;
    assert_eq!(unit(0x30), Some(PowerUnit::Volt));
    assert_eq!(unit(0x32), Some(PowerUnit::Hertz));
    assert_eq!(unit(0x35), Some(PowerUnit::Percent));
    assert_eq!(unit(0x57), Some(PowerUnit::Second));
    assert_eq!(unit(0x5A), None);
}

#[test]
fn keyboard_table() {
    let kb = catalog_registry().catalog_for(page::KEYBOARD);
    assert_eq!(kb.resolve(page::KEYBOARD, 0x04).unwrap().name, "A");
    assert_eq!(kb.resolve(page::KEYBOARD, 0x29).unwrap().name, "Escape");
    assert_eq!(kb.resolve(page::KEYBOARD, 0xE1).unwrap().name, "LShift");
    assert!(kb.resolve(page::KEYBOARD, 0xA0).unwrap().is_reserved());
    assert!(kb.resolve(page::KEYBOARD, 0xE0).unwrap().traits.inferred_unit.is_none());
}

#[test]
fn generic_pages() {
    let reg = catalog_registry();
    let buttons = reg.catalog_for(page::BUTTON);
    assert_eq!(buttons.len(), 256);
    assert_eq!(buttons.resolve(page::BUTTON, 0x10).unwrap().name, "Button");
    assert_eq!(reg.catalog_for(page::LED).resolve(page::LED, 0x02).unwrap().name, "CapsLock");
    assert!(reg.catalog_for(0x0F).is_empty());
}
