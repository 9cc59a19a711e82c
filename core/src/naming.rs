#![deny(missing_docs)]

//! # Artifact Naming
//!
//! Derives output file names for generated models.
//!
//! The version marker of the source file name (`openapi_v2.json`) is carried
//! into the artifact name so that two versions of the same service do not
//! overwrite each other. Version 1 is the implicit default and gets no suffix.

use regex::Regex;
use std::sync::OnceLock;

/// Extension of the model files written by the external generator.
pub const MODEL_EXTENSION: &str = "py";

/// Returns the model file name for `service` generated from `source_filename`.
///
/// e.g. `("account", "openapi_v2.json")` -> `account_v2.py`
pub fn name_for(service: &str, source_filename: &str) -> String {
    artifact_name(service, source_filename, MODEL_EXTENSION)
}

/// Like [`name_for`], with an explicit extension (without the leading dot).
pub fn artifact_name(service: &str, source_filename: &str, extension: &str) -> String {
    format!(
        "{}{}.{}",
        service,
        version_suffix(source_filename),
        extension
    )
}

/// `_v{N}` for the first `v{N}` marker in `source_filename`, empty for `v1` or no marker.
pub fn version_suffix(source_filename: &str) -> String {
    static VERSION_RE: OnceLock<Regex> = OnceLock::new();
    let version_re = VERSION_RE.get_or_init(|| Regex::new(r"v(\d+)").expect("Invalid regex"));

    match version_re
        .captures(source_filename)
        .and_then(|caps| caps.get(1))
    {
        Some(version) if version.as_str() == "1" => String::new(),
        Some(version) => format!("_v{}", version.as_str()),
        None => String::new(),
    }
}
