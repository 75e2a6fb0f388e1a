mod commands;
mod environment;
mod error;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::commands::Commands;
use crate::environment::Environment;
use crate::error::CliError;

#[derive(Parser)]
#[command(name = "changesets-release")]
#[command(bin_name = "changesets-release")]
#[command(version = env!("CHANGESETS_RELEASE_VERSION"))]
#[command(about = "Publish changeset-managed packages and tag releases", long_about = None)]
struct Cli {
    /// Directory the pipeline runs in (default: current directory)
    #[arg(long = "path", short = 'C', global = true)]
    path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> ExitCode {
    // Log to stderr; stdout carries the pipeline summary.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let start_path = match resolve_start_path(cli.path) {
        Ok(path) => path,
        Err(e) => {
            print_error(&e);
            return ExitCode::FAILURE;
        }
    };
    debug!(path = %start_path.display(), "resolved working directory");

    let environment = Environment::from_process();

    if let Err(e) = cli.command.execute(&start_path, &environment) {
        print_error(&e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn resolve_start_path(path: Option<PathBuf>) -> Result<PathBuf, CliError> {
    match path {
        Some(p) => Ok(p),
        None => std::env::current_dir().map_err(CliError::CurrentDir),
    }
}

fn print_error(error: &CliError) {
    eprintln!("error: {error}");

    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        eprintln!("caused by: {cause}");
        source = std::error::Error::source(cause);
    }
}
