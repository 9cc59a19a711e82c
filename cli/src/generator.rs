#![deny(missing_docs)]

//! # Generator
//!
//! Wraps the `datamodel-codegen` utility behind the core `ModelGenerator` interface.
//!
//! Command execution goes through a `CommandExecutor` so the argument
//! assembly and exit-status handling can be tested without the tool installed.

use effio_codegen_core::{AppError, AppResult, GenerationRequest, GeneratorConfig, ModelGenerator};
use std::process::{Command, Output};

/// Interface for executing the generation command.
pub trait CommandExecutor {
    /// Executes the command and returns the output.
    fn execute(&self, program: &str, args: &[&str]) -> AppResult<Output>;
}

impl<E: CommandExecutor + ?Sized> CommandExecutor for &E {
    fn execute(&self, program: &str, args: &[&str]) -> AppResult<Output> {
        (**self).execute(program, args)
    }
}

/// Standard executor using `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShellExecutor;

impl CommandExecutor for ShellExecutor {
    fn execute(&self, program: &str, args: &[&str]) -> AppResult<Output> {
        let output = Command::new(program).args(args).output()?;
        Ok(output)
    }
}

/// `datamodel-codegen` invocation for OpenAPI partitions.
#[derive(Debug, Clone)]
pub struct DatamodelCodegen<E> {
    config: GeneratorConfig,
    executor: E,
}

impl<E: CommandExecutor> DatamodelCodegen<E> {
    /// Creates a generator running `config.program` through `executor`.
    pub fn new(config: GeneratorConfig, executor: E) -> Self {
        Self { config, executor }
    }

    /// Builds the argument list for `request`.
    ///
    /// usage: datamodel-codegen --input <file> --output <file> --input-file-type openapi ...
    pub fn arguments(&self, request: &GenerationRequest<'_>) -> Vec<String> {
        let mut args = vec![
            "--input".to_string(),
            request.input.to_string_lossy().into_owned(),
            "--output".to_string(),
            request.output.to_string_lossy().into_owned(),
            "--input-file-type".to_string(),
            "openapi".to_string(),
            "--output-model-type".to_string(),
            self.config.output_model_type.clone(),
        ];

        if !request.scopes.is_empty() {
            args.push("--openapi-scopes".to_string());
            args.extend(request.scopes.iter().map(|s| s.as_str().to_string()));
        }

        let flags = [
            (self.config.use_schema_description, "--use-schema-description"),
            (self.config.use_field_description, "--use-field-description"),
            (self.config.field_constraints, "--field-constraints"),
        ];
        args.extend(
            flags
                .into_iter()
                .filter(|(enabled, _)| *enabled)
                .map(|(_, flag)| flag.to_string()),
        );
        if self.config.aware_datetime {
            args.push("--output-datetime-class".to_string());
            args.push("AwareDatetime".to_string());
        }

        args.extend(self.config.extra_args.iter().cloned());
        args
    }
}

impl<E: CommandExecutor> ModelGenerator for DatamodelCodegen<E> {
    fn generate(&self, request: &GenerationRequest<'_>) -> AppResult<()> {
        let args = self.arguments(request);
        let arg_refs: Vec<&str> = args.iter().map(String::as_str).collect();
        tracing::debug!("Running {} {}", self.config.program, args.join(" "));

        let output = self
            .executor
            .execute(&self.config.program, &arg_refs)
            .map_err(|e| {
                AppError::GeneratorInvocation(format!(
                    "cannot run {}: {}",
                    self.config.program, e
                ))
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::GeneratorInvocation(format!(
                "{} failed with status {}: {}",
                self.config.program,
                output.status,
                stderr.trim()
            )));
        }

        Ok(())
    }
}
