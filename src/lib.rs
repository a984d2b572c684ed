// HID usage classification - Shared Library
// Usage page catalogs, usage collection trees and live value queries

pub mod catalog;
pub mod chemistry;
pub mod collection;
pub mod config;
pub mod demo;
pub mod error;
pub mod query;
pub mod value;

pub use catalog::{
    catalog_registry, Catalog, CatalogError, CatalogRegistry, Directive, PowerUnit, UsageDefinition,
    UsageTypes,
};
pub use chemistry::DeviceChemistry;
pub use collection::{CapabilityRef, CollectionEntry, UsageCollection, UsageCollectionBuilder, UsageNode};
pub use error::UsageError;
pub use query::{LiveQueryEngine, NodeFailure, QueryOutcome, QueryReport, ValueSnapshot};
pub use value::{AudibleAlarmControl, PowerTestState, UsageValue};

// Re-export the source layer
pub use hidusage_source as source;
