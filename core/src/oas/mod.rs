#![deny(missing_docs)]

//! # OpenAPI Module
//!
//! Loading, classification and per-service partitioning of OpenAPI documents.

/// Path to service classification.
pub mod classify;

/// Document loading from JSON/YAML files.
pub mod document;

/// Per-service document reconstruction.
pub mod partition;

/// `$ref` closure used by schema pruning.
pub(crate) mod refs;

pub use classify::{classify, COMMON_SERVICE};
pub use document::load_document;
pub use partition::{
    partition, partition_with, PartitionOptions, PartitionSet, ScopeHint, ServicePartition,
    DEFAULT_OPENAPI_VERSION,
};
