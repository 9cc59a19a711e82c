#![deny(missing_docs)]

//! # Reference Closure
//!
//! Optional pruning of `components.schemas` down to the schemas a partition
//! actually reaches through local `$ref`s.
//!
//! Roots are the partition's `paths` and every non-schema component section
//! (responses, parameters, request bodies, ...), which are kept verbatim.
//! External references are never followed.

use percent_encoding::percent_decode_str;
use serde_json::{Map, Value};
use std::collections::{BTreeSet, VecDeque};

const SCHEMAS_POINTER: &str = "components/schemas";

/// Removes every schema from `document.components.schemas` that is not
/// transitively referenced from the rest of the document.
pub(crate) fn prune_schemas(document: &mut Map<String, Value>) {
    let reachable = {
        let Some(schemas) = document
            .get("components")
            .and_then(|c| c.get("schemas"))
            .and_then(Value::as_object)
        else {
            return;
        };

        let mut queue: VecDeque<String> = VecDeque::new();
        if let Some(paths) = document.get("paths") {
            collect_schema_refs(paths, &mut queue);
        }
        if let Some(Value::Object(components)) = document.get("components") {
            for (section, value) in components {
                if section != "schemas" {
                    collect_schema_refs(value, &mut queue);
                }
            }
        }

        let mut reachable = BTreeSet::new();
        while let Some(name) = queue.pop_front() {
            if !reachable.insert(name.clone()) {
                continue;
            }
            if let Some(schema) = schemas.get(&name) {
                collect_schema_refs(schema, &mut queue);
            }
        }
        reachable
    };

    if let Some(Value::Object(schemas)) = document
        .get_mut("components")
        .and_then(|c| c.get_mut("schemas"))
    {
        schemas.retain(|name, _| reachable.contains(name));
    }
}

/// Pushes the name of every `#/components/schemas/{name}` reference found under `value`.
fn collect_schema_refs(value: &Value, out: &mut VecDeque<String>) {
    match value {
        Value::Object(map) => {
            if let Some(Value::String(reference)) = map.get("$ref") {
                if let Some(name) = local_schema_name(reference) {
                    out.push_back(name);
                }
            }
            for v in map.values() {
                collect_schema_refs(v, out);
            }
        }
        Value::Array(items) => {
            for v in items {
                collect_schema_refs(v, out);
            }
        }
        _ => {}
    }
}

/// Extracts the schema name from a local reference.
///
/// e.g. `#/components/schemas/User` -> `User`,
/// `#/components/schemas/User/properties/id` -> `User`
pub(crate) fn local_schema_name(reference: &str) -> Option<String> {
    let pointer = reference.strip_prefix("#/")?;
    let rest = pointer.strip_prefix(SCHEMAS_POINTER)?.strip_prefix('/')?;
    let segment = rest.split('/').next()?;

    let name = decode_pointer_segment(segment);
    if name.is_empty() {
        None
    } else {
        Some(name)
    }
}

/// Decodes a JSON Pointer segment (handles `~1` and `~0`).
fn decode_pointer_segment(segment: &str) -> String {
    let decoded = percent_decode_str(segment).decode_utf8_lossy();
    decoded.replace("~1", "/").replace("~0", "~")
}
