//! Power Device usage page (0x84)
//!
//! USB HID Usage Tables for Power Devices, section 4.1.

use super::Directive;

pub(super) const NAME: &str = "Power Device";

#[rustfmt::skip]
pub(super) const DIRECTIVES: &[Directive] = &[
    Directive::usage(0x00, "Undefined"),
    Directive::usage(0x01, "iName").types("SV").reports("F").access("R/O").section("4.1.1"),
    Directive::usage(0x02, "PresentStatus").types("CL").section("4.1.1"),
    Directive::usage(0x03, "ChangedStatus").types("CL").section("4.1.1"),
    Directive::usage(0x04, "UPS").types("CA").section("4.1.1"),
    Directive::usage(0x05, "PowerSupply").types("CA").section("4.1.1"),
    Directive::range("06-0F", "Reserved"),

    // Power device collections and their IDs
    Directive::usage(0x10, "BatterySystem").types("CP").section("4.1.2"),
    Directive::usage(0x11, "BatterySystemID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x12, "Battery").types("CP").section("4.1.2"),
    Directive::usage(0x13, "BatteryID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x14, "Charger").types("CP").section("4.1.2"),
    Directive::usage(0x15, "ChargerID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x16, "PowerConverter").types("CP").section("4.1.2"),
    Directive::usage(0x17, "PowerConverterID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x18, "OutletSystem").types("CP").section("4.1.2"),
    Directive::usage(0x19, "OutletSystemID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x1A, "Input").types("CP").section("4.1.2"),
    Directive::usage(0x1B, "InputID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x1C, "Output").types("CP").section("4.1.2"),
    Directive::usage(0x1D, "OutputID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x1E, "Flow").types("CP").section("4.1.2"),
    Directive::usage(0x1F, "FlowID").types("Item").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x20, "Outlet").types("CP").section("4.1.2"),
    Directive::usage(0x21, "OutletID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x22, "Gang").types("CL/CP").section("4.1.2"),
    Directive::usage(0x23, "GangID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::usage(0x24, "PowerSummary").types("CL/CP").section("4.1.2"),
    Directive::usage(0x25, "PowerSummaryID").types("SV").reports("F").access("R/O").section("4.1.2"),
    Directive::range("26-2F", "Reserved"),

    // Measures
    Directive::usage(0x30, "Voltage").types("DV").reports("IF").access("R/O").section("4.1.3"),
    Directive::usage(0x31, "Current").types("DV").reports("IF").access("R/O").section("4.1.3"),
    Directive::usage(0x32, "Frequency").types("DV").reports("IF").access("R/O").section("4.1.3"),
    Directive::usage(0x33, "ApparentPower").types("DV").reports("IF").access("R/O").section("4.1.3"),
    Directive::usage(0x34, "ActivePower").types("DV").reports("IF").access("R/O").section("4.1.3"),
    Directive::usage(0x35, "PercentLoad").types("DV").reports("IF").access("R/O").section("4.1.3"),
    Directive::usage(0x36, "Temperature").types("DV").reports("IF").access("R/O").section("4.1.3"),
    Directive::usage(0x37, "Humidity").types("DV").reports("IF").access("R/O").section("4.1.3"),
    Directive::usage(0x38, "BadCount").types("DV").reports("IF").access("R/O").section("4.1.3"),
    Directive::range("39-3F", "Reserved"),

    // Configuration
    Directive::usage(0x40, "ConfigVoltage").types("SV/DV").reports("F").access("R/W").section("4.1.3"),
    Directive::usage(0x41, "ConfigCurrent").types("SV/DV").reports("F").access("R/W").section("4.1.3"),
    Directive::usage(0x42, "ConfigFrequency").types("SV/DV").reports("F").access("R/W").section("4.1.3"),
    Directive::usage(0x43, "ConfigApparentPower").types("SV/DV").reports("F").access("R/W").section("4.1.3"),
    Directive::usage(0x44, "ConfigActivePower").types("SV/DV").reports("F").access("R/W").section("4.1.3"),
    Directive::usage(0x45, "ConfigPercentLoad").types("SV/DV").reports("F").access("R/W").section("4.1.3"),
    Directive::usage(0x46, "ConfigTemperature").types("SV/DV").reports("F").access("R/W").section("4.1.3"),
    Directive::usage(0x47, "ConfigHumidity").types("SV/DV").reports("F").access("R/W").section("4.1.3"),
    Directive::range("48-4F", "Reserved"),

    // Controls
    Directive::usage(0x50, "SwitchOnControl").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x51, "SwitchOffControl").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x52, "ToggleControl").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x53, "LowVoltageTransfer").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x54, "HighVoltageTransfer").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x55, "DelayBeforeReboot").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x56, "DelayBeforeStartup").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x57, "DelayBeforeShutdown").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x58, "Test").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x59, "ModuleReset").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::usage(0x5A, "AudibleAlarmControl").types("DV").reports("F").access("R/W").section("4.1.4"),
    Directive::range("5B-5F", "Reserved"),

    // Generic status
    Directive::usage(0x60, "Present").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x61, "Good").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x62, "InternalFailure").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x63, "VoltageOutOfRange").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x64, "FrequencyOutOfRange").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x65, "Overload").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x66, "OverCharged").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x67, "OverTemperature").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x68, "ShutdownRequested").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x69, "ShutdownImminent").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::range("6A-6A", "Reserved"),
    Directive::usage(0x6B, "SwitchOnOff").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x6C, "Switchable").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x6D, "Used").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x6E, "Boost").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x6F, "Buck").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x70, "Initialized").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x71, "Tested").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x72, "AwaitingPower").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::usage(0x73, "CommunicationLost").types("DF").reports("IOF").access("R/O").section("4.1.5"),
    Directive::range("74-FC", "Reserved"),

    // Device identification
    Directive::usage(0xFD, "iManufacturer").types("SV").reports("F").access("R/O").section("4.1.6"),
    Directive::usage(0xFE, "iProduct").types("SV").reports("F").access("R/O").section("4.1.6"),
    Directive::usage(0xFF, "iSerialNumber").types("SV").reports("F").access("R/O").section("4.1.6"),
];
