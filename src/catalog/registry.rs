// Catalog Registry - Usage page reference tables
//
// Single source of truth for page classification.
// The collection builder and the query engine both resolve through here.

use super::{battery, generic, keyboard, page, power, Catalog, CatalogError};
use std::sync::{Arc, OnceLock};

/// Registry of built-in usage page catalogs
///
/// The Power Device, Battery System and Keyboard catalogs are shared: every
/// lookup for those pages returns the same instance. Other pages get a fresh
/// catalog per call.
pub struct CatalogRegistry {
    power: Arc<Catalog>,
    battery: Arc<Catalog>,
    keyboard: Arc<Catalog>,
    generic: Vec<Catalog>,
}

impl CatalogRegistry {
    /// Build every built-in table
    pub fn new() -> Result<Self, CatalogError> {
        let generic = generic::PAGES
            .iter()
            .filter_map(|&p| generic::directives_for(p).map(|(name, d)| (p, name, d)))
            .map(|(p, name, directives)| Catalog::from_directives(p, name, directives))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            power: Arc::new(Catalog::from_directives(
                page::POWER_DEVICE,
                power::NAME,
                power::DIRECTIVES,
            )?),
            battery: Arc::new(Catalog::from_directives(
                page::BATTERY_SYSTEM,
                battery::NAME,
                battery::DIRECTIVES,
            )?),
            keyboard: Arc::new(Catalog::from_directives(
                page::KEYBOARD,
                keyboard::NAME,
                keyboard::DIRECTIVES,
            )?),
            generic,
        })
    }

    /// Catalog for a usage page
    pub fn catalog_for(&self, usage_page: u16) -> Arc<Catalog> {
        match usage_page {
            page::POWER_DEVICE => Arc::clone(&self.power),
            page::BATTERY_SYSTEM => Arc::clone(&self.battery),
            page::KEYBOARD => Arc::clone(&self.keyboard),
            _ => Arc::new(
                self.generic
                    .iter()
                    .find(|c| c.page() == usage_page)
                    .cloned()
                    .unwrap_or_else(|| Catalog::empty(usage_page)),
            ),
        }
    }

    /// Whether a page has a shared specialized catalog
    pub fn is_specialized(&self, usage_page: u16) -> bool {
        matches!(
            usage_page,
            page::POWER_DEVICE | page::BATTERY_SYSTEM | page::KEYBOARD
        )
    }

    /// Pages with a built-in table, specialized first
    pub fn known_pages(&self) -> Vec<u16> {
        let mut pages = vec![page::POWER_DEVICE, page::BATTERY_SYSTEM, page::KEYBOARD];
        pages.extend(self.generic.iter().map(|c| c.page()));
        pages
    }
}

// Global singleton registry
static REGISTRY: OnceLock<CatalogRegistry> = OnceLock::new();

/// Get the global catalog registry
///
/// # Panics
///
/// Panics if a built-in table is malformed. The tables are compiled-in
/// literals, so this is a defect in the crate rather than a runtime condition.
pub fn catalog_registry() -> &'static CatalogRegistry {
    REGISTRY.get_or_init(|| match CatalogRegistry::new() {
        Ok(registry) => registry,
        Err(e) => panic!("built-in usage table is malformed: {e}"),
    })
}
