#![deny(missing_docs)]

//! # OpenAPI Document Loading
//!
//! Reads an input document from disk into a `serde_json::Value` tree.
//! Key order is preserved (`preserve_order`), so `paths` iterate in file order.

use crate::error::{AppError, AppResult};
use serde_json::Value;
use std::fs;
use std::path::Path;

/// Loads and decodes the document at `path`.
///
/// `.yaml` / `.yml` files are decoded as YAML, everything else as JSON.
/// The root must be a mapping.
pub fn load_document(path: &Path) -> AppResult<Value> {
    let content = fs::read_to_string(path).map_err(|e| AppError::DocumentRead {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| matches!(ext, "yaml" | "yml"));

    let parsed = if is_yaml {
        parse_yaml_document(&content)
    } else {
        parse_json_document(&content)
    };
    let value = parsed.map_err(|reason| AppError::DocumentRead {
        path: path.to_path_buf(),
        reason,
    })?;

    if !value.is_object() {
        return Err(AppError::DocumentRead {
            path: path.to_path_buf(),
            reason: "document root is not a mapping".into(),
        });
    }

    Ok(value)
}

fn parse_json_document(content: &str) -> Result<Value, String> {
    serde_json::from_str(content).map_err(|e| format!("Failed to parse OpenAPI JSON: {}", e))
}

fn parse_yaml_document(content: &str) -> Result<Value, String> {
    serde_yaml::from_str(content).map_err(|e| format!("Failed to parse OpenAPI YAML: {}", e))
}
