//! Target declarations.

use super::attributes::emit_all;
use super::emitter::{Emitter, Statement};
use super::literal::format_literal;
use super::paths::{PROJECT_ROOT, PathResolver};
use super::sources::enumerate_sources;
use crate::domain::AppError;
use crate::domain::descriptor::{Scope, TargetDescriptor, TargetKind};

/// Emit the declarations of one target of `dependency`.
pub fn compile_target(
    out: &mut Emitter<'_>,
    paths: &PathResolver,
    dependency: &str,
    target: &TargetDescriptor,
) -> Result<(), AppError> {
    let target_id = target.id(dependency);
    let nested;
    let paths = match &target.root {
        Some(root) => {
            nested = paths.nested(root);
            &nested
        }
        None => paths,
    };

    match &target.kind {
        TargetKind::Library { kind, srcs, attributes } => {
            let sources = enumerate_sources(out, paths, &target_id, srcs)?;
            let mut statement = Statement::new("add_library").arg(&target_id).arg(kind.keyword());
            if kind.excluded_from_all() {
                statement = statement.arg("EXCLUDE_FROM_ALL");
            }
            out.statement(&statement.lines(sources))?;
            emit_all(out, paths, &target_id, Scope::Public, attributes)
        }
        TargetKind::Interface { attributes } => {
            out.statement(&Statement::new("add_library").arg(&target_id).arg("INTERFACE"))?;
            emit_all(out, paths, &target_id, Scope::Interface, attributes)
        }
        TargetKind::Imported => out.statement(
            &Statement::new("add_library").arg(&target_id).arg("UNKNOWN").arg("IMPORTED"),
        ),
        TargetKind::Subdirectory { cache } => {
            // Only boolean entries become cache overrides.
            for (variable, value) in cache {
                if value.as_bool().is_some() {
                    out.statement(
                        &Statement::new("set")
                            .arg(variable)
                            .arg(format_literal(value))
                            .arg("CACHE")
                            .arg("INTERNAL")
                            .arg("\"\"")
                            .arg("FORCE"),
                    )?;
                }
            }
            out.statement(
                &Statement::new("add_subdirectory")
                    .arg(paths.source_root())
                    .arg(paths.binary_root()),
            )
        }
        TargetKind::Cmake { file } => out.statement(
            &Statement::new("include")
                .arg(format!("{}/{}", PROJECT_ROOT, file.trim_start_matches('/'))),
        ),
    }
}
