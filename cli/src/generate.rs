#![deny(missing_docs)]

//! # Generate Command
//!
//! Runs the full pipeline: discover documents -> partition by service ->
//! stage -> `datamodel-codegen` -> cleanup.
//!
//! Settings come from the defaults, then the optional `--config` file, then
//! the flags given on the command line.

use crate::generator::{CommandExecutor, DatamodelCodegen};
use clap::{Args, Command, FromArgMatches};
use effio_codegen_core::{pipeline, AppError, AppResult, GenerationConfig};
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Configuration file (YAML or JSON).
    #[clap(long, env = "EFFIO_CODEGEN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Directory containing the combined OpenAPI documents.
    #[clap(long, env = "EFFIO_CODEGEN_INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory receiving the generated model files (e.g. `effio/generated`).
    #[clap(long, env = "EFFIO_CODEGEN_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Input file extension without the dot. Repeatable; replaces the configured list.
    #[clap(long = "extension")]
    pub extensions: Vec<String>,

    /// Keep only the schemas each service actually references.
    #[clap(long)]
    pub prune_components: bool,

    /// Generator executable (defaults to `datamodel-codegen` on PATH).
    #[clap(long, env = "EFFIO_CODEGEN_GENERATOR")]
    pub generator: Option<String>,

    /// Exit with an error if any document or service failed.
    #[clap(long)]
    pub strict: bool,
}

impl GenerateArgs {
    /// Arguments of a run without flags: defaults plus the `EFFIO_CODEGEN_*` variables.
    pub fn from_env() -> AppResult<Self> {
        let matches = Self::augment_args(Command::new("generate"))
            .try_get_matches_from(["generate"])
            .map_err(|e| AppError::General(e.to_string()))?;
        Self::from_arg_matches(&matches).map_err(|e| AppError::General(e.to_string()))
    }

    /// Merges defaults, the config file and the flags into one configuration.
    pub fn resolve_config(&self) -> AppResult<GenerationConfig> {
        let mut config = match &self.config {
            Some(path) => GenerationConfig::from_file(path)?,
            None => GenerationConfig::default(),
        };

        if let Some(dir) = &self.input_dir {
            config.input_dir = dir.clone();
        }
        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if !self.extensions.is_empty() {
            config.extensions = self
                .extensions
                .iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();
        }
        if self.prune_components {
            config.prune_components = true;
        }
        if let Some(program) = &self.generator {
            config.generator.program = program.clone();
        }

        Ok(config)
    }
}

/// Executes the generation pass.
///
/// # Arguments
///
/// * `args` - Command arguments.
/// * `executor` - The command runner (use `ShellExecutor` for real execution).
pub fn execute(args: &GenerateArgs, executor: impl CommandExecutor) -> AppResult<()> {
    let config = args.resolve_config()?;
    let generator = DatamodelCodegen::new(config.generator.clone(), executor);

    let report = pipeline::run(&config, &generator)?;

    let failures = report.failures();
    if args.strict && failures > 0 {
        return Err(AppError::General(format!(
            "{} failure(s) during generation",
            failures
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::os::unix::process::ExitStatusExt;
    use std::process::{ExitStatus, Output};
    use tempfile::tempdir;

    struct ExitWith(i32);

    impl CommandExecutor for ExitWith {
        fn execute(&self, _program: &str, args: &[&str]) -> AppResult<Output> {
            if self.0 == 0 {
                let output = args
                    .iter()
                    .position(|a| *a == "--output")
                    .and_then(|i| args.get(i + 1))
                    .ok_or_else(|| AppError::General("no --output".into()))?;
                fs::write(output, "# models\n")?;
            }
            Ok(Output {
                status: ExitStatus::from_raw(self.0 << 8),
                stdout: Vec::new(),
                stderr: Vec::new(),
            })
        }
    }

    fn setup() -> (tempfile::TempDir, GenerateArgs) {
        let dir = tempdir().unwrap();
        let specs = dir.path().join("specs");
        fs::create_dir(&specs).unwrap();
        fs::write(
            specs.join("openapi_v2.json"),
            r#"{"openapi":"3.0.0","info":{"title":"Effio"},"paths":{"/v2/payments/charge":{"post":{}}}}"#,
        )
        .unwrap();

        let args = GenerateArgs {
            input_dir: Some(specs),
            output_dir: Some(dir.path().join("generated")),
            ..GenerateArgs::default()
        };
        (dir, args)
    }

    #[test]
    fn test_flags_override_config_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("contracts.yaml");
        fs::write(
            &config_path,
            "input_dir: from_file\noutput_dir: out_from_file\nextensions: [yaml]\n",
        )
        .unwrap();

        let args = GenerateArgs {
            config: Some(config_path),
            input_dir: Some(PathBuf::from("from_flag")),
            extensions: vec![".json".into()],
            generator: Some("codegen".into()),
            ..GenerateArgs::default()
        };
        let config = args.resolve_config().unwrap();
        assert_eq!(config.input_dir, PathBuf::from("from_flag"));
        assert_eq!(config.output_dir, PathBuf::from("out_from_file"));
        assert_eq!(config.extensions, ["json"]);
        assert_eq!(config.generator.program, "codegen");
        assert!(!config.prune_components);
    }

    #[test]
    fn test_execute_writes_models() {
        let (dir, args) = setup();
        execute(&args, ExitWith(0)).unwrap();

        let out = dir.path().join("generated");
        assert!(out.join("__init__.py").is_file());
        assert!(out.join("payments_v2.py").is_file());
    }

    #[test]
    fn test_failures_only_fail_in_strict_mode() {
        let (_dir, mut args) = setup();
        assert!(execute(&args, ExitWith(1)).is_ok());

        args.strict = true;
        assert!(matches!(
            execute(&args, ExitWith(1)),
            Err(AppError::General(_))
        ));
    }
}
