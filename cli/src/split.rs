#![deny(missing_docs)]

//! # Split Command
//!
//! Writes the per-service partitions of one OpenAPI document as standalone
//! JSON documents, without running the model generator.

use effio_codegen_core::naming::artifact_name;
use effio_codegen_core::{load_document, partition_with, AppError, AppResult, PartitionOptions};
use std::fs;
use std::path::{Path, PathBuf};

/// Arguments for the split command.
#[derive(clap::Args, Debug, Clone)]
pub struct SplitArgs {
    /// Path to the combined OpenAPI document (JSON or YAML).
    #[clap(long)]
    pub input: PathBuf,

    /// Output directory for the per-service documents.
    #[clap(long, default_value = "partitions")]
    pub output_dir: PathBuf,

    /// Keep only the schemas each service actually references.
    #[clap(long)]
    pub prune_components: bool,
}

/// Executes the split, returning the written files.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &SplitArgs) -> AppResult<Vec<PathBuf>> {
    let document = load_document(&args.input)?;
    let partitions = partition_with(
        &document,
        &PartitionOptions {
            prune_components: args.prune_components,
        },
    );

    if partitions.is_empty() {
        tracing::info!("No paths found in {}.", args.input.display());
        return Ok(Vec::new());
    }

    fs::create_dir_all(&args.output_dir).map_err(|e| AppError::OutputDirectory {
        path: args.output_dir.clone(),
        reason: e.to_string(),
    })?;

    let source_name = file_name(&args.input);
    let mut written = Vec::with_capacity(partitions.len());
    for (service, partition) in partitions {
        let path = args
            .output_dir
            .join(artifact_name(&service, &source_name, "json"));
        let paths = partition.path_names().len();

        let body = serde_json::to_string_pretty(&partition.into_document())?;
        fs::write(&path, body).map_err(|e| AppError::OutputWrite {
            path: path.clone(),
            reason: e.to_string(),
        })?;

        tracing::info!("  -> {} ({} paths)", path.display(), paths);
        written.push(path);
    }

    Ok(written)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}
