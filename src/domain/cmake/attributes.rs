//! Scoped attribute and property declarations.

use indexmap::IndexMap;

use super::emitter::{Emitter, Statement};
use super::literal::format_literal;
use super::paths::PathResolver;
use crate::domain::AppError;
use crate::domain::descriptor::{
    AttributeEntry, AttributeSet, Family, SCOPED_VARIANTS, Scalar, Scope,
};

/// Render an entry as written: items verbatim, pairs as `KEY=value` or bare `KEY`.
pub fn render_entry(entry: &AttributeEntry) -> String {
    match entry {
        AttributeEntry::Item(item) => item.clone(),
        AttributeEntry::Pair { key, value: Some(value) } => {
            format!("{}={}", key, format_literal(value))
        }
        AttributeEntry::Pair { key, value: None } => key.clone(),
    }
}

/// Emit one declaration of `command` covering the four scoped variants of `field`.
///
/// Unscoped entries take `default_scope`. Nothing is emitted when all variants
/// are empty.
#[allow(clippy::too_many_arguments)]
pub fn emit_family<F>(
    out: &mut Emitter<'_>,
    command: &str,
    target_id: &str,
    field: &str,
    default_scope: Scope,
    attributes: &AttributeSet,
    normalize: F,
    system: bool,
) -> Result<(), AppError>
where
    F: Fn(&AttributeEntry) -> String,
{
    let entries: Vec<String> = SCOPED_VARIANTS
        .iter()
        .flat_map(|(prefix, scope)| {
            let scope = scope.unwrap_or(default_scope);
            attributes
                .get(&format!("{}{}", prefix, field))
                .iter()
                .map(move |entry| (scope, entry))
        })
        .map(|(scope, entry)| format!("{} {}", scope, normalize(entry)))
        .collect();

    if entries.is_empty() {
        return Ok(());
    }

    let mut statement = Statement::new(command).arg(target_id);
    if system {
        statement = statement.arg("SYSTEM");
    }
    out.statement(&statement.lines(entries))
}

/// Emit `set_target_properties` for a non-empty property mapping.
pub fn emit_properties(
    out: &mut Emitter<'_>,
    target_id: &str,
    properties: &IndexMap<String, Scalar>,
) -> Result<(), AppError> {
    if properties.is_empty() {
        return Ok(());
    }

    out.statement(
        &Statement::new("set_target_properties")
            .arg(target_id)
            .arg("PROPERTIES")
            .lines(properties.iter().map(|(name, value)| {
                format!("{} {}", name, format_literal(value))
            })),
    )
}

/// Emit every attribute family, then the properties, of a compilable target.
pub fn emit_all(
    out: &mut Emitter<'_>,
    paths: &PathResolver,
    target_id: &str,
    default_scope: Scope,
    attributes: &AttributeSet,
) -> Result<(), AppError> {
    for family in Family::ALL {
        let resolves = family.resolves_paths();
        emit_family(
            out,
            family.command(),
            target_id,
            family.key(),
            default_scope,
            attributes,
            |entry| {
                let rendered = render_entry(entry);
                if resolves { paths.resolve(&rendered) } else { rendered }
            },
            family.is_system(),
        )?;
    }
    emit_properties(out, target_id, &attributes.properties)
}
