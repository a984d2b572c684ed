//! Catalog seed directives
//!
//! A directive describes one usage, or a range of usages sharing the same
//! metadata. Fields are named rather than positional:
//!
//! ```
//! use hidusage::catalog::Directive;
//!
//! let alarm = Directive::usage(0x5A, "AudibleAlarmControl")
//!     .types("DV")
//!     .reports("F")
//!     .access("R/W")
//!     .section("4.1.4");
//! let gap = Directive::range("C3-CF", "Reserved");
//! # let _ = (alarm, gap);
//! ```
//!
//! Tokens are validated when the catalog is built, not when the directive is
//! written, so the tables can stay `const`.

use super::traits::classify;
use super::{page, Access, CatalogError, ReportKinds, UsageDefinition, UsageTypes};

/// The only valid capability marker token
const SBML_TOKEN: &str = "SBML";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ids {
    Single(u16),
    /// `"<hex>-<hex>"`, inclusive
    Range(&'static str),
}

/// One seed directive of a usage page table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Directive {
    ids: Ids,
    name: &'static str,
    types: Option<&'static str>,
    reports: Option<&'static str>,
    access: Option<&'static str>,
    section: Option<&'static str>,
    capability: Option<&'static str>,
}

impl Directive {
    const fn new(ids: Ids, name: &'static str) -> Self {
        Self {
            ids,
            name,
            types: None,
            reports: None,
            access: None,
            section: None,
            capability: None,
        }
    }

    /// Single-usage directive
    pub const fn usage(id: u16, name: &'static str) -> Self {
        Self::new(Ids::Single(id), name)
    }

    /// Range directive, `range` is `"<hex>-<hex>"` inclusive
    pub const fn range(range: &'static str, name: &'static str) -> Self {
        Self::new(Ids::Range(range), name)
    }

    /// `/`-joined usage type tokens (`"CL/CP"`, `"DV"`, ...)
    pub const fn types(mut self, tokens: &'static str) -> Self {
        self.types = Some(tokens);
        self
    }

    /// Report kind token, any combination of `I`, `O`, `F`
    pub const fn reports(mut self, token: &'static str) -> Self {
        self.reports = Some(token);
        self
    }

    /// Access token, `"R/O"` or `"R/W"`
    pub const fn access(mut self, token: &'static str) -> Self {
        self.access = Some(token);
        self
    }

    /// Section reference in the usage table document
    pub const fn section(mut self, reference: &'static str) -> Self {
        self.section = Some(reference);
        self
    }

    /// Capability marker token; only `"SBML"` on the Battery System page
    pub const fn capability(mut self, token: &'static str) -> Self {
        self.capability = Some(token);
        self
    }

    /// Shorthand for `.capability("SBML")`
    pub const fn sbml(self) -> Self {
        self.capability(SBML_TOKEN)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Usage IDs covered by this directive, ascending
    pub fn ids(&self) -> Result<std::ops::RangeInclusive<u16>, CatalogError> {
        match self.ids {
            Ids::Single(id) => Ok(id..=id),
            Ids::Range(range) => parse_range(range).ok_or_else(|| CatalogError::InvalidRange {
                name: self.name.to_string(),
                range: range.to_string(),
            }),
        }
    }

    /// Expand into one definition per usage ID
    pub fn expand(&self, page: u16) -> Result<Vec<UsageDefinition>, CatalogError> {
        let types = self.parse_types()?;
        let reports = match self.reports {
            Some(token) => {
                ReportKinds::from_token(token).ok_or_else(|| CatalogError::InvalidReportToken {
                    name: self.name.to_string(),
                    token: token.to_string(),
                })?
            }
            None => ReportKinds::empty(),
        };
        let access = match self.access {
            Some(token) => {
                Access::from_token(token).ok_or_else(|| CatalogError::InvalidAccessToken {
                    name: self.name.to_string(),
                    token: token.to_string(),
                })?
            }
            None => Access::empty(),
        };
        let sbml = match self.capability {
            Some(SBML_TOKEN) if page == page::BATTERY_SYSTEM => true,
            Some(SBML_TOKEN) => {
                return Err(CatalogError::SbmlOutsideBattery {
                    name: self.name.to_string(),
                    page,
                })
            }
            Some(token) => {
                return Err(CatalogError::InvalidCapabilityToken {
                    name: self.name.to_string(),
                    token: token.to_string(),
                })
            }
            None => false,
        };
        let traits = classify(page, self.name, sbml);

        Ok(self
            .ids()?
            .map(|id| UsageDefinition {
                page,
                id,
                name: self.name.to_string(),
                types,
                reports,
                access,
                section: self.section.map(str::to_string),
                traits,
            })
            .collect())
    }

    fn parse_types(&self) -> Result<UsageTypes, CatalogError> {
        let Some(tokens) = self.types else {
            // Untyped entries are placeholders
            return Ok(UsageTypes::RESERVED);
        };
        let mut types = UsageTypes::empty();
        for token in tokens.split('/') {
            types |= UsageTypes::from_token(token).ok_or_else(|| CatalogError::UnknownTypeToken {
                name: self.name.to_string(),
                token: token.to_string(),
            })?;
        }
        Ok(types)
    }
}

fn parse_range(range: &str) -> Option<std::ops::RangeInclusive<u16>> {
    let (start, end) = range.split_once('-')?;
    let start = u16::from_str_radix(start.trim(), 16).ok()?;
    let end = u16::from_str_radix(end.trim(), 16).ok()?;
    (start <= end).then_some(start..=end)
}
