//! Usage engine error types

use hidusage_source::SourceError;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors from collection and query operations
#[derive(Error, Debug)]
pub enum UsageError {
    /// Capability source error
    #[error("Source error: {0}")]
    Source(#[from] SourceError),

    /// Catalog construction error
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// No leaf with this usage under the requested collection
    #[error("Usage 0x{usage_id:02X} not found (collection 0x{collection_id:02X})")]
    UsageNotFound { usage_id: u16, collection_id: u16 },

    /// Usage is read-only or has no feature report
    #[error("Usage {0} is not writable")]
    NotWritable(String),

    /// Usage has no value capability to write through
    #[error("Usage {0} has no value capability")]
    NoValueCapability(String),
}
