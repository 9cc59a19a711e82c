#![deny(missing_docs)]

//! # Generator Interface
//!
//! The capability the pipeline needs from a schema-to-model compiler.
//!
//! The pipeline never inspects what a generator writes; it only needs a
//! synchronous call that reports success or failure.

use crate::error::AppResult;
use crate::oas::ScopeHint;
use std::path::Path;

/// One generation job: a staged partition and where its models should go.
#[derive(Debug, Clone, Copy)]
pub struct GenerationRequest<'a> {
    /// Service the partition belongs to.
    pub service: &'a str,
    /// Staged partition document.
    pub input: &'a Path,
    /// Model file to produce.
    pub output: &'a Path,
    /// Sections of the input the generator should traverse.
    pub scopes: &'a [ScopeHint],
}

/// A schema-to-model compiler, in-process or external.
pub trait ModelGenerator {
    /// Generates models for `request`.
    ///
    /// Returns `AppError::GeneratorInvocation` when the generator cannot run or reports failure.
    fn generate(&self, request: &GenerationRequest<'_>) -> AppResult<()>;
}

impl<G: ModelGenerator + ?Sized> ModelGenerator for &G {
    fn generate(&self, request: &GenerationRequest<'_>) -> AppResult<()> {
        (**self).generate(request)
    }
}
