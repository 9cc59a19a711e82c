//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the workspace.

use derive_more::{Display, From};
use std::path::PathBuf;

/// The Global Error Enum.
///
/// Only `Io` and `Json` convert implicitly; every other variant carries the
/// document or service it failed on and must be built explicitly.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// Wrapper for standard IO errors.
    #[from]
    #[display("IO Error: {_0}")]
    Io(std::io::Error),

    /// Wrapper for JSON (de)serialization errors.
    #[from]
    #[display("JSON Error: {_0}")]
    Json(serde_json::Error),

    /// The configuration file could not be read or decoded.
    #[display("Invalid configuration {}: {reason}", path.display())]
    Config {
        /// Configuration file path.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// The input directory could not be listed. Fatal for the run.
    #[display("Failed to read input directory {}: {reason}", path.display())]
    InputDirectory {
        /// Input directory path.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// An input document is missing, unreadable, or not a structured mapping.
    #[display("Failed to read document {}: {reason}", path.display())]
    DocumentRead {
        /// Document path.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// A partition could not be written to the staging area.
    #[display("Failed to stage partition '{service}': {reason}")]
    StagingWrite {
        /// Service whose partition was being staged.
        service: String,
        /// Underlying cause.
        reason: String,
    },

    /// The external generator could not be spawned or exited non-zero.
    #[display("Generator failed: {_0}")]
    GeneratorInvocation(String),

    /// The output directory or its package marker could not be created. Fatal for the run.
    #[display("Failed to prepare output directory {}: {reason}", path.display())]
    OutputDirectory {
        /// Output directory path.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// A file could not be written into the output directory.
    #[display("Failed to write {}: {reason}", path.display())]
    OutputWrite {
        /// File being written.
        path: PathBuf,
        /// Underlying cause.
        reason: String,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
