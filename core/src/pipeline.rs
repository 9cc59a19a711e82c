#![deny(missing_docs)]

//! # Generation Pipeline
//!
//! Drives one generation pass over an input directory:
//!
//! 1. Prepares the output directory and its package marker.
//! 2. Discovers input documents by extension.
//! 3. Loads and partitions each document by service.
//! 4. Stages each partition and hands it to the [`ModelGenerator`].
//! 5. Removes every staged file, whatever the generator reported.
//!
//! Failures are isolated: an unreadable document skips only that document and
//! a failing service skips only that service. Only an unusable output or input
//! directory aborts the run.

use crate::config::GenerationConfig;
use crate::error::{AppError, AppResult};
use crate::generator::{GenerationRequest, ModelGenerator};
use crate::naming::name_for;
use crate::oas::{load_document, partition_with, PartitionOptions, ScopeHint, ServicePartition};
use crate::staging::{is_staging_name, StagingArea};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

/// Outcome of a whole generation pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunReport {
    /// One entry per discovered document, in discovery order.
    pub documents: Vec<DocumentReport>,
}

impl RunReport {
    /// All partition reports of the run.
    pub fn partitions(&self) -> impl Iterator<Item = &PartitionReport> {
        self.documents
            .iter()
            .flat_map(|doc| match &doc.outcome {
                DocumentOutcome::Partitioned(parts) => parts.as_slice(),
                _ => &[],
            })
    }

    /// Number of model files generated successfully.
    pub fn generated(&self) -> usize {
        self.partitions().filter(|p| p.succeeded()).count()
    }

    /// Number of failed documents plus failed partitions.
    pub fn failures(&self) -> usize {
        let documents = self
            .documents
            .iter()
            .filter(|d| matches!(d.outcome, DocumentOutcome::Unreadable(_)))
            .count();
        documents + self.partitions().filter(|p| !p.succeeded()).count()
    }
}

/// Outcome for one input document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentReport {
    /// Path of the input document.
    pub source: PathBuf,
    /// What happened to it.
    pub outcome: DocumentOutcome,
}

/// What happened to one input document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentOutcome {
    /// The document could not be read or decoded.
    Unreadable(String),
    /// The document has no paths; nothing was generated.
    NoPaths,
    /// The document was partitioned; one report per service.
    Partitioned(Vec<PartitionReport>),
}

/// Outcome for one (document, service) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct PartitionReport {
    /// Service name.
    pub service: String,
    /// Model file the generator was asked to write.
    pub output: PathBuf,
    /// Paths included in the partition.
    pub paths: Vec<String>,
    /// Scope hints passed to the generator.
    pub scopes: Vec<ScopeHint>,
    /// Failure message, `None` on success.
    pub error: Option<String>,
}

impl PartitionReport {
    /// `true` when the generator reported success.
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }
}

/// Runs a generation pass described by `config` using `generator`.
pub fn run<G>(config: &GenerationConfig, generator: &G) -> AppResult<RunReport>
where
    G: ModelGenerator + ?Sized,
{
    prepare_output_dir(&config.output_dir, &config.package_marker)?;

    let documents = discover_documents(config)?;
    info!(
        "Found {} input document(s) in {}",
        documents.len(),
        config.input_dir.display()
    );

    let mut pass = Pass {
        config,
        generator,
        options: PartitionOptions {
            prune_components: config.prune_components,
        },
        outputs: HashMap::new(),
    };

    let mut report = RunReport::default();
    for source in documents {
        let outcome = pass.process_document(&source);
        report.documents.push(DocumentReport { source, outcome });
    }

    info!(
        "Generation finished: {} model file(s) generated, {} failure(s)",
        report.generated(),
        report.failures()
    );
    Ok(report)
}

/// Creates `dir` (recursively) and an empty `marker` file inside it if missing.
///
/// An existing marker is left untouched. An empty `marker` name skips the marker.
pub fn prepare_output_dir(dir: &Path, marker: &str) -> AppResult<()> {
    fs::create_dir_all(dir).map_err(|e| AppError::OutputDirectory {
        path: dir.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !marker.is_empty() {
        let marker_path = dir.join(marker);
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&marker_path)
            .map_err(|e| AppError::OutputDirectory {
                path: dir.to_path_buf(),
                reason: format!("cannot create {}: {}", marker_path.display(), e),
            })?;
    }

    Ok(())
}

/// Lists input documents directly inside `config.input_dir`, sorted by file name.
///
/// Entries carrying the staging prefix are skipped, as are entries that cannot
/// be inspected (e.g. dangling symlinks). Only a directory that cannot be
/// listed at all is an error.
pub fn discover_documents(config: &GenerationConfig) -> AppResult<Vec<PathBuf>> {
    let input_dir = &config.input_dir;
    let dir_error = |reason: String| AppError::InputDirectory {
        path: input_dir.clone(),
        reason,
    };

    if !input_dir.is_dir() {
        return Err(dir_error("not a directory".into()));
    }

    let mut documents = Vec::new();
    let walker = WalkDir::new(input_dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) if e.depth() == 0 => return Err(dir_error(e.to_string())),
            Err(e) => {
                warn!("Skipping unreadable entry in {}: {}", input_dir.display(), e);
                continue;
            }
        };
        if is_staging_name(&entry.file_name().to_string_lossy()) {
            debug!("Ignoring staging leftover {}", entry.path().display());
            continue;
        }
        if entry.path().is_file() && config.matches_extension(entry.path()) {
            documents.push(entry.into_path());
        }
    }

    Ok(documents)
}

/// State shared by every document of one run.
struct Pass<'a, G: ?Sized> {
    config: &'a GenerationConfig,
    generator: &'a G,
    options: PartitionOptions,
    /// Output file -> source document that last produced it.
    outputs: HashMap<PathBuf, PathBuf>,
}

impl<G: ModelGenerator + ?Sized> Pass<'_, G> {
    fn process_document(&mut self, source: &Path) -> DocumentOutcome {
        info!("Processing {}...", source.display());

        let document = match load_document(source) {
            Ok(document) => document,
            Err(e) => {
                error!("Skipping {}: {}", source.display(), e);
                return DocumentOutcome::Unreadable(e.to_string());
            }
        };

        let partitions = partition_with(&document, &self.options);
        if partitions.is_empty() {
            debug!("No paths in {}, nothing to generate", source.display());
            return DocumentOutcome::NoPaths;
        }

        let staging = StagingArea::create_in(&self.config.input_dir).map_err(|e| e.to_string());
        if let Err(reason) = &staging {
            error!("Cannot stage partitions of {}: {}", source.display(), reason);
        }

        let reports: Vec<PartitionReport> = partitions
            .into_values()
            .map(|partition| self.generate_partition(source, &partition, staging.as_ref()))
            .collect();

        if let Ok(area) = staging {
            if let Err(e) = area.close() {
                warn!("Failed to remove staging area for {}: {}", source.display(), e);
            }
        }

        DocumentOutcome::Partitioned(reports)
    }

    fn generate_partition(
        &mut self,
        source: &Path,
        partition: &ServicePartition,
        staging: Result<&StagingArea, &String>,
    ) -> PartitionReport {
        let service = partition.service();
        let file_name = source
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = source
            .file_stem()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        let output = self.config.output_dir.join(name_for(service, &file_name));
        let scopes = partition.scope_hints();
        let paths = partition.path_names();

        if let Some(previous) = self.outputs.insert(output.clone(), source.to_path_buf()) {
            if previous != source {
                warn!(
                    "{} from {} overwrites the models generated from {}",
                    output.display(),
                    source.display(),
                    previous.display()
                );
            }
        }

        let result = staging
            .map_err(|reason| AppError::StagingWrite {
                service: service.to_string(),
                reason: reason.clone(),
            })
            .and_then(|area| {
                let staged = area.stage(&stem, service, partition.document())?;
                let request = GenerationRequest {
                    service,
                    input: staged.path(),
                    output: &output,
                    scopes: &scopes,
                };
                self.generator.generate(&request)
            });

        match &result {
            Ok(()) => info!(
                "Generated {} ({} path(s)) from {}",
                output.display(),
                paths.len(),
                file_name
            ),
            Err(e) => error!(
                "Failed to generate schemas for '{}' from {}: {}",
                service, file_name, e
            ),
        }

        PartitionReport {
            service: service.to_string(),
            output,
            paths,
            scopes,
            error: result.err().map(|e| e.to_string()),
        }
    }
}
