//! Usage page reference catalogs
//!
//! Each catalog maps usage IDs of one usage page to a [`UsageDefinition`].
//! Catalogs are seeded from literal [`Directive`] tables and are read-only
//! once built. Use [`catalog_registry`] to look one up by page.

mod battery;
mod directive;
mod generic;
mod keyboard;
mod power;
mod registry;
mod traits;

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use bitflags::bitflags;
use thiserror::Error;

pub use directive::Directive;
pub use registry::{catalog_registry, CatalogRegistry};
pub use traits::{classify, PowerUnit, UsageTraits};

/// Usage page IDs with specialized catalogs
pub mod page {
    pub const GENERIC_DESKTOP: u16 = 0x01;
    pub const KEYBOARD: u16 = 0x07;
    pub const LED: u16 = 0x08;
    pub const BUTTON: u16 = 0x09;
    pub const CONSUMER: u16 = 0x0C;
    pub const POWER_DEVICE: u16 = 0x84;
    pub const BATTERY_SYSTEM: u16 = 0x85;
}

bitflags! {
    /// Usage type classification from the HID usage tables
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UsageTypes: u16 {
        const COLLECTION_PHYSICAL = 1 << 0;
        const COLLECTION_LOGICAL = 1 << 1;
        const COLLECTION_APPLICATION = 1 << 2;
        const DYNAMIC_VALUE = 1 << 3;
        const DYNAMIC_FLAG = 1 << 4;
        const STATIC_VALUE = 1 << 5;
        const STATIC_FLAG = 1 << 6;
        const SELECTOR = 1 << 7;
        const ITEM = 1 << 8;
        const ON_OFF_CONTROL = 1 << 9;
        const ONE_SHOT_CONTROL = 1 << 10;
        const LINEAR_CONTROL = 1 << 11;
        const MOMENTARY_CONTROL = 1 << 12;
        const RESERVED = 1 << 15;

        const COLLECTIONS = Self::COLLECTION_PHYSICAL.bits()
            | Self::COLLECTION_LOGICAL.bits()
            | Self::COLLECTION_APPLICATION.bits();
    }
}

impl UsageTypes {
    /// Parse one type token (`CP`, `DV`, `Sel`, ...)
    pub fn from_token(token: &str) -> Option<Self> {
        Some(match token {
            "CP" => Self::COLLECTION_PHYSICAL,
            "CL" => Self::COLLECTION_LOGICAL,
            "CA" => Self::COLLECTION_APPLICATION,
            "DV" => Self::DYNAMIC_VALUE,
            "DF" => Self::DYNAMIC_FLAG,
            "SV" => Self::STATIC_VALUE,
            "SF" => Self::STATIC_FLAG,
            "Sel" => Self::SELECTOR,
            "Item" => Self::ITEM,
            "OOC" => Self::ON_OFF_CONTROL,
            "OSC" => Self::ONE_SHOT_CONTROL,
            "LC" => Self::LINEAR_CONTROL,
            "MC" => Self::MOMENTARY_CONTROL,
            "Reserved" => Self::RESERVED,
            _ => return None,
        })
    }

    /// Any collection tag set
    pub fn is_collection(&self) -> bool {
        self.intersects(Self::COLLECTIONS)
    }

    /// No collection tag set (reserved or leaf-only classification)
    pub fn is_unclassified_collection(&self) -> bool {
        !self.is_collection()
    }
}

impl fmt::Display for UsageTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const TOKENS: &[(UsageTypes, &str)] = &[
            (UsageTypes::COLLECTION_PHYSICAL, "CP"),
            (UsageTypes::COLLECTION_LOGICAL, "CL"),
            (UsageTypes::COLLECTION_APPLICATION, "CA"),
            (UsageTypes::DYNAMIC_VALUE, "DV"),
            (UsageTypes::DYNAMIC_FLAG, "DF"),
            (UsageTypes::STATIC_VALUE, "SV"),
            (UsageTypes::STATIC_FLAG, "SF"),
            (UsageTypes::SELECTOR, "Sel"),
            (UsageTypes::ITEM, "Item"),
            (UsageTypes::ON_OFF_CONTROL, "OOC"),
            (UsageTypes::ONE_SHOT_CONTROL, "OSC"),
            (UsageTypes::LINEAR_CONTROL, "LC"),
            (UsageTypes::MOMENTARY_CONTROL, "MC"),
            (UsageTypes::RESERVED, "Reserved"),
        ];
        let tokens: Vec<&str> = TOKENS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, token)| *token)
            .collect();
        f.write_str(&tokens.join("/"))
    }
}

bitflags! {
    /// Report kinds a usage participates in
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ReportKinds: u8 {
        const INPUT = 1 << 0;
        const OUTPUT = 1 << 1;
        const FEATURE = 1 << 2;
    }
}

impl ReportKinds {
    /// Parse an `I`/`O`/`F` combination token such as `IF` or `IOF`
    pub fn from_token(token: &str) -> Option<Self> {
        if token.is_empty() {
            return None;
        }
        let mut kinds = Self::empty();
        for c in token.chars() {
            let kind = match c {
                'I' => Self::INPUT,
                'O' => Self::OUTPUT,
                'F' => Self::FEATURE,
                _ => return None,
            };
            if kinds.contains(kind) {
                return None;
            }
            kinds |= kind;
        }
        Some(kinds)
    }
}

bitflags! {
    /// Access rights of a usage
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Access: u8 {
        const READ = 1 << 0;
        const WRITE = 1 << 1;
    }
}

impl Access {
    /// Parse `R/O` or `R/W`
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "R/O" => Some(Self::READ),
            "R/W" => Some(Self::READ | Self::WRITE),
            _ => None,
        }
    }
}

/// Errors raised while building a catalog from directives
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("Unknown usage type token {token:?} in {name:?}")]
    UnknownTypeToken { name: String, token: String },

    #[error("Invalid report kind token {token:?} in {name:?}")]
    InvalidReportToken { name: String, token: String },

    #[error("Invalid access token {token:?} in {name:?}")]
    InvalidAccessToken { name: String, token: String },

    #[error("Invalid capability token {token:?} in {name:?}")]
    InvalidCapabilityToken { name: String, token: String },

    #[error("Malformed usage range {range:?} in {name:?}")]
    InvalidRange { name: String, range: String },

    #[error("SBML marker on {name:?} is only valid on the Battery System page (got page 0x{page:02X})")]
    SbmlOutsideBattery { name: String, page: u16 },

    #[error("Duplicate usage 0x{id:02X} on page 0x{page:02X}")]
    DuplicateUsage { page: u16, id: u16 },
}

/// One catalog entry: semantic metadata for (usage page, usage ID)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsageDefinition {
    pub page: u16,
    pub id: u16,
    pub name: String,
    pub types: UsageTypes,
    pub reports: ReportKinds,
    pub access: Access,
    /// Section of the usage table document defining this usage
    pub section: Option<String>,
    pub traits: UsageTraits,
}

impl UsageDefinition {
    pub fn is_collection(&self) -> bool {
        self.types.is_collection()
    }

    pub fn is_reserved(&self) -> bool {
        self.name == "Reserved"
    }

    pub fn readable(&self) -> bool {
        self.access.contains(Access::READ)
    }

    pub fn writable(&self) -> bool {
        self.access.contains(Access::WRITE)
    }
}

/// Reference table for one usage page
#[derive(Debug, Clone)]
pub struct Catalog {
    page: u16,
    name: String,
    entries: Vec<Arc<UsageDefinition>>,
    index: HashMap<u16, usize>,
}

impl Catalog {
    /// Build a catalog from seed directives, in directive order
    pub fn from_directives(
        page: u16,
        name: &str,
        directives: &[Directive],
    ) -> Result<Self, CatalogError> {
        let mut entries = Vec::new();
        let mut index = HashMap::new();
        for directive in directives {
            for definition in directive.expand(page)? {
                let id = definition.id;
                if index.insert(id, entries.len()).is_some() {
                    return Err(CatalogError::DuplicateUsage { page, id });
                }
                entries.push(Arc::new(definition));
            }
        }
        Ok(Self {
            page,
            name: name.to_string(),
            entries,
            index,
        })
    }

    /// Catalog with no entries
    pub fn empty(page: u16) -> Self {
        Self {
            page,
            name: format!("Page 0x{page:02X}"),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Look up a usage; `None` when the page differs or the ID is unknown
    pub fn resolve(&self, page: u16, id: u16) -> Option<&Arc<UsageDefinition>> {
        if page != self.page {
            return None;
        }
        self.index.get(&id).and_then(|i| self.entries.get(*i))
    }

    pub fn page(&self) -> u16 {
        self.page
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Entries in directive order
    pub fn iter(&self) -> impl Iterator<Item = &Arc<UsageDefinition>> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
