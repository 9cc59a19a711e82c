#![deny(missing_docs)]

//! # Effio Codegen Core
//!
//! Splits combined OpenAPI documents into one document per service and drives
//! an external schema-to-model compiler over each of them.

/// Shared error types.
pub mod error;

/// Generation settings.
pub mod config;

/// OpenAPI (OAS) loading and partitioning.
pub mod oas;

/// Output file naming.
pub mod naming;

/// Schema-to-model compiler interface.
pub mod generator;

/// Temporary partition files.
pub mod staging;

/// The generation driver.
pub mod pipeline;

pub use config::{GenerationConfig, GeneratorConfig};
pub use error::{AppError, AppResult};
pub use generator::{GenerationRequest, ModelGenerator};
pub use naming::{artifact_name, name_for};
pub use oas::{
    classify, load_document, partition, partition_with, PartitionOptions, PartitionSet, ScopeHint,
    ServicePartition,
};
pub use pipeline::{run, DocumentOutcome, DocumentReport, PartitionReport, RunReport};
pub use staging::{StagingArea, STAGING_PREFIX};
