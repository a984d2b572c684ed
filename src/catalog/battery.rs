//! Battery System usage page (0x85)
//!
//! USB HID Usage Tables for Power Devices, section 4.2. Usages marked `sbml()`
//! report smart battery level data.

use super::Directive;

pub(super) const NAME: &str = "Battery System";

#[rustfmt::skip]
pub(super) const DIRECTIVES: &[Directive] = &[
    Directive::usage(0x00, "Undefined"),

    // Smart Battery Data collections
    Directive::usage(0x01, "SMBBatteryMode").types("CL").section("4.2.1"),
    Directive::usage(0x02, "SMBBatteryStatus").types("CL").section("4.2.1"),
    Directive::usage(0x03, "SMBAlarmWarning").types("CL").section("4.2.1"),
    Directive::usage(0x04, "SMBChargerMode").types("CL").section("4.2.1"),
    Directive::usage(0x05, "SMBChargerStatus").types("CL").section("4.2.1"),
    Directive::usage(0x06, "SMBChargerSpecInfo").types("CL").section("4.2.1"),
    Directive::usage(0x07, "SMBSelectorState").types("CL").section("4.2.1"),
    Directive::usage(0x08, "SMBSelectorPresets").types("CL").section("4.2.1"),
    Directive::usage(0x09, "SMBSelectorInfo").types("CL").section("4.2.1"),
    Directive::range("0A-0F", "Reserved"),

    // Battery system controls
    Directive::range("10-14", "OptionalMfgFunction").types("DV").reports("F").access("R/W").section("4.2.2"),
    Directive::range("15-17", "Reserved"),
    Directive::usage(0x18, "ConnectionToSMBus").types("DF").reports("IOF").access("R/W").section("4.2.2"),
    Directive::usage(0x19, "OutputConnection").types("DF").reports("IOF").access("R/W").section("4.2.2"),
    Directive::usage(0x1A, "ChargerConnection").types("DF").reports("IOF").access("R/W").section("4.2.2"),
    Directive::usage(0x1B, "BatteryInsertion").types("DF").reports("IOF").access("R/W").section("4.2.2"),
    Directive::usage(0x1C, "UseNext").types("DF").reports("IOF").access("R/W").section("4.2.2"),
    Directive::usage(0x1D, "OKToUse").types("DF").reports("IOF").access("R/W").section("4.2.2"),
    Directive::usage(0x1E, "BatterySupported").types("DF").reports("IOF").access("R/W").section("4.2.2"),
    Directive::usage(0x1F, "SelectorRevision").types("DF").reports("IOF").access("R/W").section("4.2.2"),
    Directive::usage(0x20, "ChargingIndicator").types("DF").reports("IOF").access("R/W").section("4.2.2"),
    Directive::range("21-27", "Reserved"),

    // Battery controls
    Directive::usage(0x28, "ManufacturerAccess").types("DV").reports("F").access("R/W").section("4.2.3"),
    Directive::usage(0x29, "RemainingCapacityLimit").types("DV").reports("F").access("R/W").section("4.2.3").sbml(),
    Directive::usage(0x2A, "RemainingTimeLimit").types("DV").reports("F").access("R/W").section("4.2.3").sbml(),
    Directive::usage(0x2B, "AtRate").types("DV").reports("F").access("R/W").section("4.2.3"),
    Directive::usage(0x2C, "CapacityMode").types("DV").reports("F").access("R/W").section("4.2.3"),
    Directive::usage(0x2D, "BroadcastToCharger").types("DV").reports("F").access("R/W").section("4.2.3"),
    Directive::usage(0x2E, "PrimaryBattery").types("DV").reports("F").access("R/W").section("4.2.3"),
    Directive::usage(0x2F, "ChargeController").types("DV").reports("F").access("R/W").section("4.2.3"),
    Directive::range("30-3F", "Reserved"),

    // Battery status
    Directive::usage(0x40, "TerminateCharge").types("DF").reports("IF").access("R/O").section("4.2.4"),
    Directive::usage(0x41, "TerminateDischarge").types("DF").reports("IF").access("R/O").section("4.2.4"),
    Directive::usage(0x42, "BelowRemainingCapacityLimit").types("DF").reports("IF").access("R/O").section("4.2.4").sbml(),
    Directive::usage(0x43, "RemainingTimeLimitExpired").types("DF").reports("IF").access("R/O").section("4.2.4").sbml(),
    Directive::usage(0x44, "Charging").types("DF").reports("IF").access("R/O").section("4.2.4"),
    Directive::usage(0x45, "Discharging").types("DF").reports("IF").access("R/O").section("4.2.4"),
    Directive::usage(0x46, "FullyCharged").types("DF").reports("IF").access("R/O").section("4.2.4").sbml(),
    Directive::usage(0x47, "FullyDischarged").types("DF").reports("IF").access("R/O").section("4.2.4").sbml(),
    Directive::usage(0x48, "ConditioningFlag").types("DF").reports("IF").access("R/O").section("4.2.4"),
    Directive::usage(0x49, "AtRateOK").types("DF").reports("IF").access("R/O").section("4.2.4"),
    Directive::usage(0x4A, "SMBErrorCode").types("DV").reports("IF").access("R/O").section("4.2.4"),
    Directive::usage(0x4B, "NeedReplacement").types("DF").reports("IF").access("R/O").section("4.2.4"),
    Directive::range("4C-5F", "Reserved"),

    // Battery measures
    Directive::usage(0x60, "AtRateTimeToFull").types("DV").reports("IF").access("R/O").section("4.2.5"),
    Directive::usage(0x61, "AtRateTimeToEmpty").types("DV").reports("IF").access("R/O").section("4.2.5"),
    Directive::usage(0x62, "AverageCurrent").types("DV").reports("IF").access("R/O").section("4.2.5"),
    Directive::usage(0x63, "MaxError").types("DV").reports("IF").access("R/O").section("4.2.5"),
    Directive::usage(0x64, "RelativeStateOfCharge").types("DV").reports("IF").access("R/O").section("4.2.5").sbml(),
    Directive::usage(0x65, "AbsoluteStateOfCharge").types("DV").reports("IF").access("R/O").section("4.2.5").sbml(),
    Directive::usage(0x66, "RemainingCapacity").types("DV").reports("IF").access("R/O").section("4.2.5").sbml(),
    Directive::usage(0x67, "FullChargeCapacity").types("DV").reports("IF").access("R/O").section("4.2.5").sbml(),
    Directive::usage(0x68, "RunTimeToEmpty").types("DV").reports("IF").access("R/O").section("4.2.5").sbml(),
    Directive::usage(0x69, "AverageTimeToEmpty").types("DV").reports("IF").access("R/O").section("4.2.5").sbml(),
    Directive::usage(0x6A, "AverageTimeToFull").types("DV").reports("IF").access("R/O").section("4.2.5").sbml(),
    Directive::usage(0x6B, "CycleCount").types("DV").reports("IF").access("R/O").section("4.2.5"),
    Directive::range("6C-7F", "Reserved"),

    // Battery settings
    Directive::usage(0x80, "BattPackModelLevel").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x81, "InternalChargeController").types("SF").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x82, "PrimaryBatterySupport").types("SF").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x83, "DesignCapacity").types("SV").reports("F").access("R/O").section("4.2.6").sbml(),
    Directive::usage(0x84, "SpecificationInfo").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x85, "ManufacturerDate").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x86, "SerialNumber").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x87, "iManufacturerName").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x88, "iDeviceName").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x89, "iDeviceChemistry").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x8A, "ManufacturerData").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x8B, "Rechargeable").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::usage(0x8C, "WarningCapacityLimit").types("SV").reports("F").access("R/W").section("4.2.6").sbml(),
    Directive::usage(0x8D, "CapacityGranularity1").types("SV").reports("F").access("R/O").section("4.2.6").sbml(),
    Directive::usage(0x8E, "CapacityGranularity2").types("SV").reports("F").access("R/O").section("4.2.6").sbml(),
    Directive::usage(0x8F, "iOEMInformation").types("SV").reports("F").access("R/O").section("4.2.6"),
    Directive::range("90-BF", "Reserved"),

    // Charger controls
    Directive::usage(0xC0, "InhibitCharge").types("DF").reports("IOF").access("R/W").section("4.2.7"),
    Directive::usage(0xC1, "EnablePolling").types("DF").reports("IOF").access("R/W").section("4.2.7"),
    Directive::usage(0xC2, "ResetToZero").types("DF").reports("IOF").access("R/W").section("4.2.7"),
    Directive::range("C3-CF", "Reserved"),

    // Charger status
    Directive::usage(0xD0, "ACPresent").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xD1, "BatteryPresent").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xD2, "PowerFail").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xD3, "AlarmInhibited").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xD4, "ThermistorUnderRange").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xD5, "ThermistorHot").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xD6, "ThermistorCold").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xD7, "ThermistorOverRange").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xD8, "VoltageOutOfRange").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xD9, "CurrentOutOfRange").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xDA, "CurrentNotRegulated").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xDB, "VoltageNotRegulated").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::usage(0xDC, "MasterMode").types("DV").reports("IOF").access("R/O").section("4.2.8"),
    Directive::range("DD-EF", "Reserved"),

    // Charger specification
    Directive::usage(0xF0, "ChargerSelectorSupport").types("SF").reports("F").access("R/O").section("4.2.9"),
    Directive::usage(0xF1, "ChargerSpec").types("SV").reports("F").access("R/O").section("4.2.9"),
    Directive::usage(0xF2, "Level2").types("SF").reports("F").access("R/O").section("4.2.9"),
    Directive::usage(0xF3, "Level3").types("SF").reports("F").access("R/O").section("4.2.9"),
    Directive::range("F4-FF", "Reserved"),
];
