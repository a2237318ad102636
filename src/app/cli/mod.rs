//! CLI Adapter.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::app::api;
use crate::domain::AppError;

#[derive(Parser)]
#[command(name = "depgen")]
#[command(version)]
#[command(
    about = "Generate CMake dependency declarations from JSON descriptors",
    long_about = None
)]
struct Cli {
    /// Configuration file (defaults to ./depgen.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compile descriptors into CMake statements
    #[clap(visible_alias = "g")]
    Generate {
        /// Descriptor document (defaults to stdin; .yml/.yaml files are read as YAML)
        #[arg(short, long)]
        input: Option<PathBuf>,
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Suppress progress lines on stderr
        #[arg(short, long)]
        quiet: bool,
    },
    /// Report git-pinned dependencies with newer upstream tags
    #[clap(visible_alias = "c")]
    Check {
        /// Descriptor document (defaults to the configured descriptor)
        descriptor: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result = api::load_config(cli.config.as_deref()).and_then(|config| match cli.command {
        Commands::Generate { input, output, quiet } => {
            api::generate(&config, input.as_deref(), output.as_deref(), quiet).map(|_| ())
        }
        Commands::Check { descriptor } => run_check(&config, descriptor),
    });

    if let Err(e) = result {
        match e {
            AppError::UnsupportedOrigin { .. } => eprintln!("{}", e),
            _ => eprintln!("Error: {}", e),
        }
        std::process::exit(e.exit_code());
    }
}

fn run_check(config: &api::AppConfig, descriptor: Option<PathBuf>) -> Result<(), AppError> {
    let notices = api::check(config, descriptor.as_deref())?;
    for notice in &notices {
        println!("{}", notice);
    }
    Ok(())
}
