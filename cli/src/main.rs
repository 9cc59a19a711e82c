#![deny(missing_docs)]

//! # Effio Contracts CLI
//!
//! Generates per-service data models from combined OpenAPI documents.
//!
//! Supported Commands:
//! - `generate` (default): split every input document by service and run `datamodel-codegen` on each part.
//! - `split`: write the per-service documents of one input for inspection.

use clap::{Parser, Subcommand};
use effio_codegen_core::AppResult;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::generator::ShellExecutor;

mod generate;
mod generator;
mod split;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Effio contracts generator")]
struct Cli {
    /// Log debug output (overridden by `RUST_LOG`).
    #[clap(short, long, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate models for every service found in the input documents.
    Generate(generate::GenerateArgs),
    /// Write the per-service OpenAPI documents of one input file.
    Split(split::SplitArgs),
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Some(Commands::Split(args)) => {
            split::execute(&args)?;
        }
        Some(Commands::Generate(args)) => generate::execute(&args, ShellExecutor)?,
        None => generate::execute(&generate::GenerateArgs::from_env()?, ShellExecutor)?,
    }

    Ok(())
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
