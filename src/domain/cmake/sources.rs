//! Expansion of `srcs` into a CMake source list.

use super::emitter::{Emitter, Statement};
use super::paths::PathResolver;
use crate::domain::AppError;

const WILDCARDS: [char; 2] = ['*', '?'];

/// Name of the variable holding the glob results of `target_id`.
pub fn glob_variable(target_id: &str) -> String {
    format!("{}_SRCS", target_id.replace('.', "_"))
}

/// Expand `srcs` of `target_id` into the source arguments of its library.
///
/// Glob patterns are collected by one recursive glob statement, emitted before
/// returning; its variable comes first in the result, followed by the literal
/// paths in descriptor order.
pub fn enumerate_sources(
    out: &mut Emitter<'_>,
    paths: &PathResolver,
    target_id: &str,
    srcs: &[String],
) -> Result<Vec<String>, AppError> {
    let (globs, literals): (Vec<&String>, Vec<&String>) =
        srcs.iter().partition(|src| src.contains(WILDCARDS));

    let mut sources = Vec::with_capacity(literals.len() + 1);
    if !globs.is_empty() {
        let variable = glob_variable(target_id);
        out.statement(
            &Statement::new("file")
                .arg("GLOB_RECURSE")
                .arg(&variable)
                .arg("CONFIGURE_DEPENDS")
                .lines(globs.iter().map(|glob| paths.resolve(glob))),
        )?;
        sources.push(format!("${{{}}}", variable));
    }
    sources.extend(literals.iter().map(|literal| paths.resolve(literal)));

    Ok(sources)
}
