//! API facade for the application.
//!
//! Glues configuration, adapters and command execution together for the CLI and
//! for library callers.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::adapters::descriptor_file::{FileDescriptorSource, StdinDescriptorSource};
use crate::adapters::github_tag_client::GitHubTagClient;
use crate::adapters::stderr_diagnostics::StderrDiagnostics;
use crate::app::commands::{check, generate};
use crate::domain::cmake::{Emitter, compile_dependency};
use crate::domain::{configuration, parse_descriptors};
use crate::ports::{DescriptorSource, Diagnostics, NoopDiagnostics, TagSource};

pub use crate::app::commands::check::UpgradeNotice;
pub use crate::app::commands::generate::{GenerateOptions, GenerateResult};
pub use crate::domain::{AppConfig, AppError, DescriptorFormat};

/// Load `depgen.toml` from the current directory, or the explicit path when given.
pub fn load_config(explicit: Option<&Path>) -> Result<AppConfig, AppError> {
    configuration::load_config(explicit, &std::env::current_dir()?)
}

// =============================================================================
// Generate Command API
// =============================================================================

/// Compile descriptors into CMake statements.
///
/// Reads from `input` (stdin when `None`) and writes to `output` (stdout when
/// `None`). The whole document is parsed before `output` is opened. Progress
/// goes to stderr unless `quiet`.
pub fn generate(
    config: &AppConfig,
    input: Option<&Path>,
    output: Option<&Path>,
    quiet: bool,
) -> Result<GenerateResult, AppError> {
    let mut source: Box<dyn DescriptorSource> = match input {
        Some(path) => Box::new(FileDescriptorSource::new(path)),
        None => Box::new(StdinDescriptorSource),
    };
    let descriptors = source.read_descriptors()?;

    // Opened only once the document parsed, so a bad input leaves an existing file untouched.
    let mut out: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(io::stdout().lock()),
    };
    let mut diagnostics: Box<dyn Diagnostics> =
        if quiet { Box::new(NoopDiagnostics) } else { Box::new(StderrDiagnostics) };

    let options = GenerateOptions { fetch_command: config.generate.fetch_command.clone() };
    generate::execute(&descriptors, out.as_mut(), diagnostics.as_mut(), &options)
}

/// Compile a descriptor document held in memory and return the statements.
pub fn generate_str(
    content: &str,
    format: DescriptorFormat,
    options: &GenerateOptions,
) -> Result<String, AppError> {
    let descriptors = parse_descriptors(content, format)?;
    let mut out = Vec::new();
    {
        let mut emitter = Emitter::new(&mut out);
        for descriptor in &descriptors {
            compile_dependency(&mut emitter, descriptor, &options.fetch_command)?;
        }
    }
    Ok(String::from_utf8_lossy(&out).into_owned())
}

// =============================================================================
// Check Command API
// =============================================================================

/// Check git-pinned dependencies of a descriptor file against GitHub.
///
/// Uses the configured default descriptor when `descriptor` is `None`.
pub fn check(
    config: &AppConfig,
    descriptor: Option<&Path>,
) -> Result<Vec<UpgradeNotice>, AppError> {
    let tags = GitHubTagClient::from_env_with_config(&config.github)?;
    check_with(config, descriptor, &tags)
}

/// Check a descriptor file against an arbitrary tag source.
pub fn check_with(
    config: &AppConfig,
    descriptor: Option<&Path>,
    tags: &impl TagSource,
) -> Result<Vec<UpgradeNotice>, AppError> {
    let mut source = match descriptor {
        Some(path) => FileDescriptorSource::new(path),
        None => FileDescriptorSource::new(&config.check.descriptor),
    };
    let descriptors = source.read_descriptors()?;
    check::execute(&descriptors, tags)
}
