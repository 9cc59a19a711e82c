#![deny(missing_docs)]

//! # Generation Configuration
//!
//! Settings for one generation pass. Every field has a default, so a
//! configuration file only needs the keys it changes.
//!
//! ```yaml
//! input_dir: specs
//! output_dir: effio/generated
//! extensions: [json, yaml]
//! generator:
//!   program: datamodel-codegen
//!   field_constraints: false
//! ```

use crate::error::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Settings of the generation driver.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    /// Directory scanned (non-recursively) for input documents.
    pub input_dir: PathBuf,
    /// Directory receiving the generated model files.
    pub output_dir: PathBuf,
    /// File extensions, without the dot, that mark input documents.
    pub extensions: Vec<String>,
    /// Empty file created in `output_dir` so it can be imported as a package.
    pub package_marker: String,
    /// Restrict each partition's `components.schemas` to what its paths reference.
    pub prune_components: bool,
    /// External generator settings.
    pub generator: GeneratorConfig,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            input_dir: PathBuf::from("."),
            output_dir: PathBuf::from("effio/generated"),
            extensions: vec!["json".to_string()],
            package_marker: "__init__.py".to_string(),
            prune_components: false,
            generator: GeneratorConfig::default(),
        }
    }
}

impl GenerationConfig {
    /// Loads a configuration from a YAML or JSON file.
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppError::Config {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        Self::from_yaml_str(&content).map_err(|reason| AppError::Config {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn from_yaml_str(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| e.to_string())
    }

    /// Returns `true` if `path` has one of the configured input extensions.
    pub fn matches_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|allowed| allowed == ext))
    }
}

/// Command line contract of the external schema-to-model compiler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Executable to run.
    pub program: String,
    /// Value of `--output-model-type`.
    pub output_model_type: String,
    /// Pass `--use-schema-description`.
    pub use_schema_description: bool,
    /// Pass `--use-field-description`.
    pub use_field_description: bool,
    /// Pass `--field-constraints`.
    pub field_constraints: bool,
    /// Pass `--output-datetime-class AwareDatetime`.
    pub aware_datetime: bool,
    /// Appended verbatim after the generated arguments.
    pub extra_args: Vec<String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            program: "datamodel-codegen".to_string(),
            output_model_type: "pydantic_v2.BaseModel".to_string(),
            use_schema_description: true,
            use_field_description: true,
            field_constraints: true,
            aware_datetime: true,
            extra_args: Vec::new(),
        }
    }
}
