//! Built-in demo UPS
//!
//! A scripted line-interactive UPS used by the `demo` command and the
//! integration tests. Report layout:
//!
//! | Report | Usage                        | Collection       |
//! |--------|------------------------------|------------------|
//! | 0x01   | Voltage (Power)              | PowerSummary     |
//! | 0x02   | PercentLoad (Power)          | PowerSummary     |
//! | 0x03   | AudibleAlarmControl (Power)  | PowerSummary     |
//! | 0x04   | Test (Power)                 | PowerSummary     |
//! | 0x05   | ConfigVoltage (Power)        | PowerSummary     |
//! | 0x06   | RemainingCapacity (Battery)  | SMBBatteryStatus |
//! | 0x07   | RunTimeToEmpty (Battery)     | SMBBatteryStatus |
//! | 0x08   | Frequency (Power)            | unlinked         |
//! | 0x09   | iManufacturer (Power)        | UPS              |
//! | 0x0A   | iDeviceChemistry (Battery)   | SMBBatteryStatus |
//! | 0x10   | Present/Good/ShutdownImminent| PresentStatus    |
//! | 0x11   | Charging (Battery)           | SMBBatteryStatus |

use hidusage_source::{
    ButtonCapability, CapabilitySet, MemorySource, ReportKind, SourceDeviceInfo, ValueCapability,
};

use crate::catalog::page;

pub const DEMO_VID: u16 = 0x0463;
pub const DEMO_PID: u16 = 0xFFFF;

/// PowerSummary (Power Device 0x24)
pub const POWER_SUMMARY: u16 = 0x24;
/// PresentStatus (Power Device 0x02)
pub const PRESENT_STATUS: u16 = 0x02;
/// SMBBatteryStatus (Battery System 0x02)
pub const BATTERY_STATUS: u16 = 0x02;
/// UPS application collection (Power Device 0x04)
pub const UPS: u16 = 0x04;

/// String indices
pub const STRING_MANUFACTURER: u16 = 1;
pub const STRING_CHEMISTRY: u16 = 4;

/// Capability arrays of the demo UPS
pub fn demo_capabilities() -> CapabilitySet {
    let power = page::POWER_DEVICE;
    let battery = page::BATTERY_SYSTEM;
    let mut caps = CapabilitySet::new();

    caps.push_value(
        ReportKind::Feature,
        ValueCapability::new(power, 0x30, 0x01, POWER_SUMMARY).with_logical(0, 250),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(power, 0x35, 0x02, POWER_SUMMARY).with_logical(0, 100),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(power, 0x5A, 0x03, POWER_SUMMARY).with_logical(1, 3),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(power, 0x58, 0x04, POWER_SUMMARY).with_logical(1, 6),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(power, 0x40, 0x05, POWER_SUMMARY).with_logical(0, 250),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(power, 0xFD, 0x09, UPS).with_string_index(STRING_MANUFACTURER),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(battery, 0x66, 0x06, BATTERY_STATUS).with_logical(0, 100),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(battery, 0x68, 0x07, BATTERY_STATUS).with_logical(0, 65535),
    )
    .push_value(
        ReportKind::Feature,
        ValueCapability::new(battery, 0x89, 0x0A, BATTERY_STATUS)
            .with_string_index(STRING_CHEMISTRY),
    )
    .push_value(
        ReportKind::Input,
        ValueCapability::new(power, 0x32, 0x08, 0).with_logical(0, 70),
    )
    .push_button(
        ReportKind::Input,
        ButtonCapability::new(power, 0x60, 0x10, PRESENT_STATUS).at_bit(0),
    )
    .push_button(
        ReportKind::Input,
        ButtonCapability::new(power, 0x61, 0x10, PRESENT_STATUS).at_bit(1),
    )
    .push_button(
        ReportKind::Input,
        ButtonCapability::new(power, 0x69, 0x10, PRESENT_STATUS).at_bit(2),
    )
    .push_button(
        ReportKind::Input,
        ButtonCapability::new(battery, 0x44, 0x11, BATTERY_STATUS).at_bit(0),
    );

    caps
}

/// Demo UPS on mains power, charging, alarm enabled
pub fn demo_ups() -> MemorySource {
    let info = SourceDeviceInfo {
        vid: DEMO_VID,
        pid: DEMO_PID,
        usage_page: page::POWER_DEVICE,
        usage: UPS,
        device_path: "demo:ups".to_string(),
        manufacturer: Some("Demo Power".to_string()),
        product_name: Some("Demo UPS 1500".to_string()),
        serial: Some("DEMO0001".to_string()),
    };

    MemorySource::new(info, demo_capabilities())
        .with_feature_i32(0x01, 230)
        .with_feature_i32(0x02, 37)
        .with_feature_i32(0x03, 2)
        .with_feature_i32(0x04, 6)
        .with_feature_i32(0x05, 230)
        .with_feature_i32(0x06, 88)
        .with_feature_i32(0x07, 2700)
        .with_feature_i32(0x08, 50)
        .with_string(STRING_MANUFACTURER, "Demo Power")
        .with_string(STRING_CHEMISTRY, "PbAc")
        .with_pressed(ReportKind::Input, PRESENT_STATUS, 0x60)
        .with_pressed(ReportKind::Input, PRESENT_STATUS, 0x61)
        .with_pressed(ReportKind::Input, BATTERY_STATUS, 0x44)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hidusage_source::CapabilitySource;

    #[test]
    fn demo_snapshot_roundtrip() {
        let caps = demo_capabilities();
        let json = caps.to_json().unwrap();
        assert_eq!(CapabilitySet::from_json(&json).unwrap(), caps);
    }

    #[test]
    fn demo_identity() {
        let ups = demo_ups();
        assert_eq!(ups.device_info().vid, DEMO_VID);
        assert_eq!(ups.capabilities().len(), 14);
    }
}
