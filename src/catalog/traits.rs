//! Page-specific usage traits
//!
//! Power Device and Battery System usages carry a physical unit that can be
//! inferred from the usage name; Battery System usages may additionally be
//! marked as supporting smart battery level reporting.

use std::fmt;

use super::page;

/// Physical unit of a Power Device / Battery System value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PowerUnit {
    Volt,
    Ampere,
    Hertz,
    VoltAmpere,
    Watt,
    Percent,
    Kelvin,
    Second,
    /// mAh or mWh depending on the battery's CapacityMode
    Capacity,
    Count,
}

impl PowerUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Volt => "V",
            Self::Ampere => "A",
            Self::Hertz => "Hz",
            Self::VoltAmpere => "VA",
            Self::Watt => "W",
            Self::Percent => "%",
            Self::Kelvin => "K",
            Self::Second => "s",
            Self::Capacity => "cap",
            Self::Count => "",
        }
    }
}

impl fmt::Display for PowerUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Capabilities derived from a usage's page and name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UsageTraits {
    pub supports_battery_level_reporting: bool,
    pub inferred_unit: Option<PowerUnit>,
}

/// Name fragments mapped to units, checked in order
const POWER_UNITS: &[(&str, PowerUnit)] = &[
    ("ApparentPower", PowerUnit::VoltAmpere),
    ("ActivePower", PowerUnit::Watt),
    ("PercentLoad", PowerUnit::Percent),
    ("Voltage", PowerUnit::Volt),
    ("Current", PowerUnit::Ampere),
    ("Frequency", PowerUnit::Hertz),
    ("Temperature", PowerUnit::Kelvin),
    ("Humidity", PowerUnit::Percent),
    ("DelayBefore", PowerUnit::Second),
];

const BATTERY_UNITS: &[(&str, PowerUnit)] = &[
    ("StateOfCharge", PowerUnit::Percent),
    ("MaxError", PowerUnit::Percent),
    ("TimeTo", PowerUnit::Second),
    ("RunTime", PowerUnit::Second),
    ("TimeLimit", PowerUnit::Second),
    ("Capacity", PowerUnit::Capacity),
    ("AverageCurrent", PowerUnit::Ampere),
    ("AtRate", PowerUnit::Ampere),
    ("CycleCount", PowerUnit::Count),
];

/// Classify a usage by page and name
///
/// Battery System names are matched against the battery table first, then
/// the Power Device table (the Battery page reuses the power measures).
pub fn classify(usage_page: u16, name: &str, sbml: bool) -> UsageTraits {
    let lookup = |table: &[(&str, PowerUnit)]| {
        table
            .iter()
            .find(|(fragment, _)| name.contains(fragment))
            .map(|(_, unit)| *unit)
    };

    match usage_page {
        page::POWER_DEVICE => UsageTraits {
            supports_battery_level_reporting: false,
            inferred_unit: lookup(POWER_UNITS),
        },
        page::BATTERY_SYSTEM => UsageTraits {
            supports_battery_level_reporting: sbml,
            inferred_unit: lookup(BATTERY_UNITS).or_else(|| lookup(POWER_UNITS)),
        },
        _ => UsageTraits::default(),
    }
}
