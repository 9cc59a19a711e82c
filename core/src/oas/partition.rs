#![deny(missing_docs)]

//! # Document Partitioning
//!
//! Splits a combined OpenAPI document into one minimal document per service.
//!
//! Each partition receives:
//! - `openapi` copied from the source (`3.0.0` when absent)
//! - `info` copied from the source, `title` suffixed with the service name
//! - the subset of `paths` classified to that service
//! - the full source `components`, unfiltered unless pruning is requested

use crate::oas::classify::classify;
use crate::oas::refs::prune_schemas;
use indexmap::IndexMap;
use serde_json::{Map, Value};
use std::fmt;

/// OpenAPI version written when the source document declares none.
pub const DEFAULT_OPENAPI_VERSION: &str = "3.0.0";

/// Partitions keyed by service name, in the order services first appear in `paths`.
pub type PartitionSet = IndexMap<String, ServicePartition>;

/// Options controlling partition reconstruction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PartitionOptions {
    /// Restrict `components.schemas` to the schemas reachable from the partition's paths.
    pub prune_components: bool,
}

/// Sections of a document the external generator is asked to traverse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScopeHint {
    /// The `paths` section.
    Paths,
    /// The `components.schemas` section.
    Schemas,
}

impl ScopeHint {
    /// Command line spelling of the hint.
    pub fn as_str(&self) -> &'static str {
        match self {
            ScopeHint::Paths => "paths",
            ScopeHint::Schemas => "schemas",
        }
    }
}

impl fmt::Display for ScopeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A derived OpenAPI document scoped to a single service.
#[derive(Debug, Clone, PartialEq)]
pub struct ServicePartition {
    service: String,
    document: Map<String, Value>,
}

impl ServicePartition {
    fn new(service: &str, source: &Map<String, Value>) -> Self {
        let openapi = source
            .get("openapi")
            .cloned()
            .unwrap_or_else(|| Value::String(DEFAULT_OPENAPI_VERSION.to_string()));

        let mut info = source
            .get("info")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));
        if let Some(Value::String(title)) = info.get_mut("title") {
            title.push_str(" - ");
            title.push_str(&capitalize(service));
        }

        let components = source
            .get("components")
            .cloned()
            .unwrap_or_else(|| Value::Object(Map::new()));

        let mut document = Map::new();
        document.insert("openapi".into(), openapi);
        document.insert("info".into(), info);
        document.insert("paths".into(), Value::Object(Map::new()));
        document.insert("components".into(), components);

        Self {
            service: service.to_string(),
            document,
        }
    }

    fn insert_path(&mut self, path: &str, item: &Value) {
        if let Some(Value::Object(paths)) = self.document.get_mut("paths") {
            paths.insert(path.to_string(), item.clone());
        }
    }

    /// The service this partition belongs to.
    pub fn service(&self) -> &str {
        &self.service
    }

    /// The reconstructed document.
    pub fn document(&self) -> &Map<String, Value> {
        &self.document
    }

    /// The `paths` mapping of this partition.
    pub fn paths(&self) -> Option<&Map<String, Value>> {
        self.document.get("paths").and_then(Value::as_object)
    }

    /// The `components` mapping of this partition.
    pub fn components(&self) -> Option<&Map<String, Value>> {
        self.document.get("components").and_then(Value::as_object)
    }

    /// Path strings of this partition, in document order.
    pub fn path_names(&self) -> Vec<String> {
        self.paths()
            .map(|paths| paths.keys().cloned().collect())
            .unwrap_or_default()
    }

    /// Sections the generator should traverse for this partition.
    pub fn scope_hints(&self) -> Vec<ScopeHint> {
        let mut hints = Vec::new();
        if self.paths().is_some_and(|p| !p.is_empty()) {
            hints.push(ScopeHint::Paths);
        }
        let has_schemas = self
            .components()
            .and_then(|c| c.get("schemas"))
            .and_then(Value::as_object)
            .is_some_and(|s| !s.is_empty());
        if has_schemas {
            hints.push(ScopeHint::Schemas);
        }
        hints
    }

    /// Consumes the partition, returning the document as a JSON value.
    pub fn into_document(self) -> Value {
        Value::Object(self.document)
    }
}

/// Splits `document` into per-service partitions with the shared, unfiltered `components`.
pub fn partition(document: &Value) -> PartitionSet {
    partition_with(document, &PartitionOptions::default())
}

/// Splits `document` into per-service partitions.
///
/// A document without a `paths` mapping, or with an empty one, yields an empty set.
pub fn partition_with(document: &Value, options: &PartitionOptions) -> PartitionSet {
    let mut partitions = PartitionSet::new();

    let Some(source) = document.as_object() else {
        return partitions;
    };
    let Some(paths) = source.get("paths").and_then(Value::as_object) else {
        return partitions;
    };

    for (path, item) in paths {
        let service = classify(path);
        partitions
            .entry(service)
            .or_insert_with_key(|service| ServicePartition::new(service, source))
            .insert_path(path, item);
    }

    if options.prune_components {
        for partition in partitions.values_mut() {
            prune_schemas(&mut partition.document);
        }
    }

    partitions
}

/// Uppercases the first character and lowercases the rest.
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
