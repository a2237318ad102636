//! Compile a descriptor document into CMake statements.

use std::io::Write;

use crate::domain::cmake::{DEFAULT_FETCH_COMMAND, Emitter, compile_dependency};
use crate::domain::{AppError, DependencyDescriptor};
use crate::ports::Diagnostics;

/// Options for the generate command.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// CMake function used for fetch declarations.
    pub fetch_command: String,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self { fetch_command: DEFAULT_FETCH_COMMAND.to_string() }
    }
}

/// Result of a generate run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateResult {
    /// Dependencies compiled, in emission order.
    pub dependencies: Vec<String>,
}

/// Write the statements of every descriptor to `out`, in document order.
///
/// Each dependency's output is flushed once it is complete, so a failure leaves
/// the statements of earlier dependencies intact.
pub fn execute(
    descriptors: &[DependencyDescriptor],
    out: &mut dyn Write,
    diagnostics: &mut dyn Diagnostics,
    options: &GenerateOptions,
) -> Result<GenerateResult, AppError> {
    let mut emitter = Emitter::new(out);
    let mut dependencies = Vec::with_capacity(descriptors.len());
    for descriptor in descriptors {
        diagnostics.progress(&format!("Updating dependency definitions for {}", descriptor.name));
        compile_dependency(&mut emitter, descriptor, &options.fetch_command)?;
        dependencies.push(descriptor.name.clone());
    }

    Ok(GenerateResult { dependencies })
}
