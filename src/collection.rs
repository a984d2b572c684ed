//! Usage collection tree
//!
//! The builder turns the flat capability arrays of a device session into a
//! two-level tree: collection nodes, each with an ordered list of leaf nodes.
//! Every node carries the catalog definition it was classified as.

use std::collections::HashMap;
use std::sync::Arc;

use hidusage_source::{
    ButtonCapability, Capability, CapabilityGroup, CapabilitySet, ReportKind, ValueCapability,
};
use tracing::{debug, trace};

use crate::catalog::{catalog_registry, Catalog, CatalogRegistry, UsageDefinition, UsageTypes};
use crate::value::UsageValue;

/// The capability a leaf was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapabilityRef {
    Value(Arc<ValueCapability>),
    Button(Arc<ButtonCapability>),
}

/// A classified usage: catalog definition plus report linkage and value
#[derive(Debug, Clone, PartialEq)]
pub struct UsageNode {
    definition: Arc<UsageDefinition>,
    report_id: u8,
    capability: Option<CapabilityRef>,
    report_kind: ReportKind,
    /// Link collection of the group this node belongs to
    collection_id: u16,
    is_button_group: bool,
    value: Option<UsageValue>,
}

impl UsageNode {
    fn collection(
        definition: Arc<UsageDefinition>,
        report_kind: ReportKind,
        is_button_group: bool,
    ) -> Self {
        Self {
            collection_id: definition.id,
            definition,
            report_id: 0,
            capability: None,
            report_kind,
            is_button_group,
            value: None,
        }
    }

    fn leaf(
        definition: Arc<UsageDefinition>,
        capability: CapabilityRef,
        report_id: u8,
        report_kind: ReportKind,
        collection_id: u16,
    ) -> Self {
        Self {
            definition,
            report_id,
            capability: Some(capability),
            report_kind,
            collection_id,
            is_button_group: false,
            value: None,
        }
    }

    pub fn definition(&self) -> &UsageDefinition {
        &self.definition
    }

    pub fn usage_page(&self) -> u16 {
        self.definition.page
    }

    pub fn usage_id(&self) -> u16 {
        self.definition.id
    }

    pub fn name(&self) -> &str {
        &self.definition.name
    }

    pub fn types(&self) -> UsageTypes {
        self.definition.types
    }

    pub fn report_id(&self) -> u8 {
        self.report_id
    }

    pub fn report_kind(&self) -> ReportKind {
        self.report_kind
    }

    pub fn collection_id(&self) -> u16 {
        self.collection_id
    }

    pub fn capability(&self) -> Option<&CapabilityRef> {
        self.capability.as_ref()
    }

    pub fn value_capability(&self) -> Option<&Arc<ValueCapability>> {
        match &self.capability {
            Some(CapabilityRef::Value(cap)) => Some(cap),
            _ => None,
        }
    }

    pub fn button_capability(&self) -> Option<&Arc<ButtonCapability>> {
        match &self.capability {
            Some(CapabilityRef::Button(cap)) => Some(cap),
            _ => None,
        }
    }

    /// Leaf built from a button capability
    pub fn is_button(&self) -> bool {
        matches!(self.capability, Some(CapabilityRef::Button(_)))
    }

    /// Collection node first discovered through button capabilities
    pub fn is_button_group(&self) -> bool {
        self.is_button_group
    }

    pub fn is_collection(&self) -> bool {
        self.definition.is_collection()
    }

    pub fn value(&self) -> Option<&UsageValue> {
        self.value.as_ref()
    }

    /// Copy of this node carrying a value
    pub fn with_value(&self, value: UsageValue) -> Self {
        Self {
            value: Some(value),
            ..self.clone()
        }
    }
}

/// A collection node and its leaves
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionEntry {
    pub collection: UsageNode,
    pub children: Vec<UsageNode>,
}

impl CollectionEntry {
    /// Key a collection is accumulated under
    pub fn key(&self) -> (u16, u16, ReportKind) {
        (
            self.collection.usage_page(),
            self.collection.collection_id(),
            self.collection.report_kind(),
        )
    }

    /// Leaf with a usage id, if present
    pub fn child(&self, usage_id: u16) -> Option<&UsageNode> {
        self.children.iter().find(|c| c.usage_id() == usage_id)
    }
}

/// Two-level usage tree of one device session, in build order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UsageCollection {
    entries: Vec<CollectionEntry>,
}

impl UsageCollection {
    /// Build from a session's capabilities using the global catalog registry
    pub fn build(capabilities: &CapabilitySet) -> Self {
        UsageCollectionBuilder::new().build(capabilities)
    }

    pub fn entries(&self) -> &[CollectionEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &CollectionEntry> {
        self.entries.iter()
    }

    /// Number of collection nodes
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of leaves
    pub fn leaf_count(&self) -> usize {
        self.entries.iter().map(|e| e.children.len()).sum()
    }

    /// Every (collection, leaf) pair in build order
    pub fn leaves(&self) -> impl Iterator<Item = (&UsageNode, &UsageNode)> {
        self.entries
            .iter()
            .flat_map(|e| e.children.iter().map(move |c| (&e.collection, c)))
    }

    /// First leaf with `usage_id`, restricted to `collection_id` when nonzero
    pub fn find_leaf(&self, usage_id: u16, collection_id: u16) -> Option<&UsageNode> {
        self.leaves()
            .find(|(collection, leaf)| {
                leaf.usage_id() == usage_id
                    && (collection_id == 0 || collection.collection_id() == collection_id)
            })
            .map(|(_, leaf)| leaf)
    }

    /// Entry for a (page, collection id, report kind) key
    pub fn get(&self, usage_page: u16, collection_id: u16, kind: ReportKind) -> Option<&CollectionEntry> {
        self.entries
            .iter()
            .find(|e| e.key() == (usage_page, collection_id, kind))
    }
}

/// Builds a [`UsageCollection`] from capability arrays
pub struct UsageCollectionBuilder<'r> {
    registry: &'r CatalogRegistry,
}

impl UsageCollectionBuilder<'static> {
    pub fn new() -> Self {
        Self {
            registry: catalog_registry(),
        }
    }
}

impl Default for UsageCollectionBuilder<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> UsageCollectionBuilder<'r> {
    /// Builder resolving through a specific registry
    pub fn with_registry(registry: &'r CatalogRegistry) -> Self {
        Self { registry }
    }

    /// Run the six passes (Feature/Input/Output, values then buttons)
    pub fn build(&self, capabilities: &CapabilitySet) -> UsageCollection {
        let mut pass = BuildPass::new(self.registry);
        for kind in ReportKind::ALL {
            for group in capabilities.value_groups(kind) {
                pass.add_group(kind, group, false, |cap| {
                    CapabilityRef::Value(Arc::clone(cap))
                });
            }
            for group in capabilities.button_groups(kind) {
                pass.add_group(kind, group, true, |cap| {
                    CapabilityRef::Button(Arc::clone(cap))
                });
            }
        }
        let collection = UsageCollection {
            entries: pass.entries,
        };
        debug!(
            "Built usage collection: {} collections, {} leaves from {} capabilities",
            collection.len(),
            collection.leaf_count(),
            capabilities.len()
        );
        collection
    }
}

/// Accumulator shared by all passes of one build
struct BuildPass<'r> {
    registry: &'r CatalogRegistry,
    catalogs: HashMap<u16, Arc<Catalog>>,
    entries: Vec<CollectionEntry>,
    index: HashMap<(u16, u16, ReportKind), usize>,
}

impl<'r> BuildPass<'r> {
    fn new(registry: &'r CatalogRegistry) -> Self {
        Self {
            registry,
            catalogs: HashMap::new(),
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Resolve against the page's catalog; reserved entries count as misses
    fn resolve(&mut self, usage_page: u16, id: u16) -> Option<Arc<UsageDefinition>> {
        let registry = self.registry;
        let catalog = self
            .catalogs
            .entry(usage_page)
            .or_insert_with(|| registry.catalog_for(usage_page));
        catalog
            .resolve(usage_page, id)
            .filter(|def| !def.is_reserved())
            .cloned()
    }

    fn add_group<T: Capability>(
        &mut self,
        kind: ReportKind,
        group: CapabilityGroup<'_, T>,
        is_button: bool,
        make_ref: impl Fn(&Arc<T>) -> CapabilityRef,
    ) {
        let page = group.usage_page;
        let collection_id = group.link_collection;
        let Some(collection_def) = self.resolve(page, collection_id) else {
            trace!(
                "Skipping {kind} group: collection 0x{collection_id:02X} on page 0x{page:02X} not classifiable"
            );
            return;
        };

        let key = (page, collection_id, kind);
        let existing = self.index.get(&key).copied();
        let mut children = match existing {
            Some(i) => std::mem::take(&mut self.entries[i].children),
            None => Vec::new(),
        };

        for item in group.items {
            for usage in item.usages() {
                let Some(definition) = self.resolve(item.usage_page(), usage) else {
                    trace!("Skipping usage 0x{usage:02X} on page 0x{page:02X}: not classifiable");
                    continue;
                };
                if children.iter().any(|c| c.usage_id() == usage) {
                    trace!("Skipping duplicate usage {} in collection 0x{collection_id:02X}", definition.name);
                    continue;
                }
                children.push(UsageNode::leaf(
                    definition,
                    make_ref(item),
                    item.report_id(),
                    kind,
                    collection_id,
                ));
            }
        }

        match existing {
            Some(i) => self.entries[i].children = children,
            None => {
                self.index.insert(key, self.entries.len());
                self.entries.push(CollectionEntry {
                    collection: UsageNode::collection(collection_def, kind, is_button),
                    children,
                });
            }
        }
    }
}
