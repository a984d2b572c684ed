//! Battery chemistry codes
//!
//! Smart batteries report their chemistry through the `iDeviceChemistry`
//! string (Battery System page, usage 0x89) as a short code such as `LION`.

use std::fmt;

use serde::Serialize;

/// Battery chemistry decoded from a device chemistry string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum DeviceChemistry {
    LeadAcid,
    LithiumIon,
    LithiumPolymer,
    NickelCadmium,
    NickelMetalHydride,
    NickelZinc,
    RechargeableAlkalineManganese,
    ZincAir,
    LithiumManganese,
    LithiumIronPhosphate,
}

/// Known codes, uppercase
const CODES: &[(&str, DeviceChemistry)] = &[
    ("PBAC", DeviceChemistry::LeadAcid),
    ("LION", DeviceChemistry::LithiumIon),
    ("LI-ION", DeviceChemistry::LithiumIon),
    ("LIP", DeviceChemistry::LithiumPolymer),
    ("NICD", DeviceChemistry::NickelCadmium),
    ("NIMH", DeviceChemistry::NickelMetalHydride),
    ("NIZN", DeviceChemistry::NickelZinc),
    ("RAM", DeviceChemistry::RechargeableAlkalineManganese),
    ("ZNAR", DeviceChemistry::ZincAir),
    ("LIMN", DeviceChemistry::LithiumManganese),
    ("LIFE", DeviceChemistry::LithiumIronPhosphate),
    ("LFP", DeviceChemistry::LithiumIronPhosphate),
];

impl DeviceChemistry {
    /// Decode a chemistry code, ignoring case and surrounding whitespace/NULs
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code
            .trim_matches(|c: char| c == '\0' || c.is_whitespace())
            .to_ascii_uppercase();
        CODES
            .iter()
            .find(|(known, _)| *known == code)
            .map(|(_, chemistry)| *chemistry)
    }

    /// Canonical short code
    pub fn code(&self) -> &'static str {
        match self {
            Self::LeadAcid => "PbAc",
            Self::LithiumIon => "LION",
            Self::LithiumPolymer => "LiP",
            Self::NickelCadmium => "NiCd",
            Self::NickelMetalHydride => "NiMH",
            Self::NickelZinc => "NiZn",
            Self::RechargeableAlkalineManganese => "RAM",
            Self::ZincAir => "ZnAr",
            Self::LithiumManganese => "LiMn",
            Self::LithiumIronPhosphate => "LiFe",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::LeadAcid => "Lead Acid",
            Self::LithiumIon => "Lithium Ion",
            Self::LithiumPolymer => "Lithium Polymer",
            Self::NickelCadmium => "Nickel Cadmium",
            Self::NickelMetalHydride => "Nickel Metal Hydride",
            Self::NickelZinc => "Nickel Zinc",
            Self::RechargeableAlkalineManganese => "Rechargeable Alkaline-Manganese",
            Self::ZincAir => "Zinc Air",
            Self::LithiumManganese => "Lithium Manganese",
            Self::LithiumIronPhosphate => "Lithium Iron Phosphate",
        }
    }
}

impl fmt::Display for DeviceChemistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.description(), self.code())
    }
}
