//! Per-dependency declaration driver.

use super::emitter::{Emitter, Statement};
use super::literal::{format_literal, quote};
use super::paths::PathResolver;
use super::target::compile_target;
use crate::domain::AppError;
use crate::domain::descriptor::{
    ConfigureAction, ConfigureKind, DependencyDescriptor, FetchOrigin, SchemaError,
};

/// CMake function declaring a dependency's download, unless configured otherwise.
pub const DEFAULT_FETCH_COMMAND: &str = "import_dependency";

/// Emit every declaration of one dependency.
///
/// Order: header comment, fetch declaration, configure actions, targets,
/// aliases and extra includes, trailing blank line. Output is flushed once the
/// dependency is complete.
pub fn compile_dependency(
    out: &mut Emitter<'_>,
    descriptor: &DependencyDescriptor,
    fetch_command: &str,
) -> Result<(), AppError> {
    let name = descriptor.name.as_str();
    let paths = PathResolver::new(name);
    let fetch = fetch_declaration(descriptor, fetch_command)?;

    out.comment(&format!("-- Dependency: {}", name))?;
    if let Some(statement) = fetch {
        out.statement(&statement)?;
    }

    for (output, action) in &descriptor.configure {
        let statement = configure_statement(&paths, name, output, action)?;
        out.statement(&statement)?;
    }
    if !descriptor.configure.is_empty() {
        out.blank_line()?;
    }

    for (index, target) in descriptor.targets().iter().enumerate() {
        if index > 0 {
            out.blank_line()?;
        }
        compile_target(out, &paths, name, target)?;
    }

    let aliases = descriptor.aliases();
    let extra_cmake = descriptor.extra_cmake();
    if !aliases.is_empty() || !extra_cmake.is_empty() {
        out.ensure_separator()?;
    }
    for (alias, source) in aliases {
        out.statement(&Statement::new("add_library").arg(alias).arg("ALIAS").arg(source))?;
    }
    for path in extra_cmake {
        out.statement(&Statement::new("include").arg(paths.resolve(path)))?;
    }

    out.blank_line()?;
    out.flush()
}

/// Build the fetch declaration, or `None` when nothing is fetched.
fn fetch_declaration(
    descriptor: &DependencyDescriptor,
    fetch_command: &str,
) -> Result<Option<Statement>, AppError> {
    let mut fields: Vec<(&str, String)> = Vec::new();
    match descriptor.origin() {
        Some(FetchOrigin::Git(git)) => {
            let repo = git.github_repo(&descriptor.name)?;
            fields.push(("URL", repo.archive_url(&git.tag)));
            fields.push(("DOWNLOAD_NAME", repo.archive_name(&git.tag)));
        }
        Some(FetchOrigin::Urls(urls)) => fields.push(("URL", urls.join(" "))),
        None => {}
    }

    if let Some(download_name) = &descriptor.download_name {
        match fields.iter_mut().find(|(key, _)| *key == "DOWNLOAD_NAME") {
            Some((_, value)) => *value = download_name.clone(),
            None => fields.push(("DOWNLOAD_NAME", download_name.clone())),
        }
    }

    if fields.is_empty() {
        return Ok(None);
    }

    let width = fields.iter().map(|(key, _)| key.len()).max().unwrap_or_default();
    let lines = fields.iter().map(|(key, value)| format!("{:<width$}    {}", key, value));
    Ok(Some(Statement::new(fetch_command).arg(&descriptor.name).lines(lines)))
}

fn configure_statement(
    paths: &PathResolver,
    dependency: &str,
    output: &str,
    action: &ConfigureAction,
) -> Result<Statement, AppError> {
    let output_path = paths.resolve(output);
    match action.kind {
        ConfigureKind::Configure => {
            let input = action.input.as_deref().ok_or_else(|| SchemaError::MissingField {
                dependency: dependency.to_string(),
                field: format!("configure.{}.input", output),
            })?;
            Ok(Statement::new("configure_file").arg(paths.resolve(input)).arg(output_path))
        }
        ConfigureKind::Generate => {
            let mut statement = Statement::new("file").arg("GENERATE").arg("OUTPUT").arg(output_path);
            if let Some(content) = &action.content {
                statement = statement.line(format!("CONTENT {}", format_literal(content)));
            }
            if let Some(input) = &action.input {
                statement = statement.line(format!("INPUT {}", paths.resolve(input)));
            }
            if let Some(condition) = &action.condition {
                statement = statement.line(format!("CONDITION {}", quote(condition)));
            }
            Ok(statement)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::descriptor::{DescriptorFormat, parse_descriptors};

    fn compile(json: &str) -> Result<String, AppError> {
        let descriptors = parse_descriptors(json, DescriptorFormat::Json)?;
        let mut out = Vec::new();
        {
            let mut emitter = Emitter::new(&mut out);
            for descriptor in &descriptors {
                compile_dependency(&mut emitter, descriptor, DEFAULT_FETCH_COMMAND)?;
            }
        }
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn git_origin_becomes_github_archive() {
        let output = compile(
            r#"{"widget": {
                "git": {"repository": "https://github.com/acme/widget.git", "tag": "v1.2.0"},
                "target": {"type": "imported"}
            }}"#,
        )
        .unwrap();

        assert_eq!(
            output,
            "# -- Dependency: widget\n\
             import_dependency(widget\n        \
             URL              https://github.com/acme/widget/archive/v1.2.0.zip\n        \
             DOWNLOAD_NAME    widget-v1.2.0.zip)\n\
             add_library(widget UNKNOWN IMPORTED)\n\
             \n"
        );
    }

    #[test]
    fn url_origin_joins_urls_and_honors_download_name() {
        let output = compile(
            r#"{"z": {
                "url": ["https://a/z.zip", "https://b/z.zip"],
                "download_name": "z-1.3.zip",
                "target": {"type": "imported"}
            }}"#,
        )
        .unwrap();

        assert!(output.contains("URL              https://a/z.zip https://b/z.zip\n"));
        assert!(output.contains("DOWNLOAD_NAME    z-1.3.zip)\n"));
    }

    #[test]
    fn download_name_overrides_derived_name() {
        let output = compile(
            r#"{"widget": {
                "git": {"repository": "https://github.com/acme/widget", "tag": "v1"},
                "download_name": "custom.zip",
                "target": {"type": "imported"}
            }}"#,
        )
        .unwrap();

        assert!(output.contains("DOWNLOAD_NAME    custom.zip)"));
        assert!(!output.contains("widget-v1.zip"));
    }

    #[test]
    fn no_origin_means_no_fetch_declaration() {
        let output = compile(r#"{"local": {"target": {"type": "cmake", "file": "cmake/local.cmake"}}}"#)
            .unwrap();

        assert_eq!(
            output,
            "# -- Dependency: local\ninclude(${PROJECT_SOURCE_DIR}/cmake/local.cmake)\n\n"
        );
    }

    #[test]
    fn unsupported_host_fails_before_any_output_for_the_dependency() {
        let json = r#"{"widget": {
            "git": {"repository": "https://gitlab.com/acme/widget.git", "tag": "v1"},
            "target": {"type": "imported"}
        }}"#;
        let descriptors = parse_descriptors(json, DescriptorFormat::Json).unwrap();
        let mut out = Vec::new();

        let result = compile_dependency(&mut Emitter::new(&mut out), &descriptors[0], "fetch");

        assert!(matches!(result, Err(AppError::UnsupportedOrigin { .. })));
        assert!(out.is_empty());
    }

    #[test]
    fn configure_actions_precede_targets_followed_by_blank_line() {
        let output = compile(
            r#"{"foo": {
                "configure": {
                    ":include/config.h": {"input": "config.h.in"},
                    ":version.txt": {"type": "generate", "content": "1.0 final", "condition": "$<CONFIG:Release>"}
                },
                "target": {"type": "interface"}
            }}"#,
        )
        .unwrap();

        assert_eq!(
            output,
            "# -- Dependency: foo\n\
             configure_file(${foo_SOURCE_DIR}/config.h.in ${CMAKE_CURRENT_BINARY_DIR}/foo/include/config.h)\n\
             file(GENERATE OUTPUT ${CMAKE_CURRENT_BINARY_DIR}/foo/version.txt\n        \
             CONTENT \"1.0 final\"\n        \
             CONDITION $<CONFIG:Release>)\n\
             \n\
             add_library(foo INTERFACE)\n\
             \n"
        );
    }

    #[test]
    fn generate_fields_follow_fixed_order() {
        let output = compile(
            r#"{"foo": {
                "configure": {":out.h": {"type": "generate", "condition": "1", "input": "in.h", "content": "x"}},
                "target": {"type": "interface"}
            }}"#,
        )
        .unwrap();

        let content = output.find("CONTENT x").unwrap();
        let input = output.find("INPUT ${foo_SOURCE_DIR}/in.h").unwrap();
        let condition = output.find("CONDITION 1").unwrap();
        assert!(content < input && input < condition);
    }

    #[test]
    fn configure_without_input_is_a_schema_error_without_partial_statement() {
        let json = r#"{"foo": {
            "configure": {":config.h": {"type": "configure"}},
            "target": {"type": "interface"}
        }}"#;
        let descriptors = parse_descriptors(json, DescriptorFormat::Json).unwrap();
        let mut out = Vec::new();

        let result = compile_dependency(&mut Emitter::new(&mut out), &descriptors[0], "fetch");

        assert!(matches!(
            result,
            Err(AppError::Schema(SchemaError::MissingField { ref field, .. }))
                if field == "configure.:config.h.input"
        ));
        let output = String::from_utf8(out).unwrap();
        assert!(!output.contains("configure_file"));
    }

    #[test]
    fn multiple_targets_are_separated_by_one_blank_line() {
        let output = compile(
            r#"{"foo": {"target": [
                {"type": "interface", "name": "headers"},
                {"type": "imported", "name": "prebuilt"}
            ]}}"#,
        )
        .unwrap();

        assert_eq!(
            output,
            "# -- Dependency: foo\n\
             add_library(foo.headers INTERFACE)\n\
             \n\
             add_library(foo.prebuilt UNKNOWN IMPORTED)\n\
             \n"
        );
    }

    #[test]
    fn aliases_and_extra_includes_share_one_separator() {
        let output = compile(
            r#"{"foo": {
                "aliases": {"foo::foo": "foo"},
                "extra_cmake": "/cmake/foo-extra.cmake",
                "target": {"type": "interface"}
            }}"#,
        )
        .unwrap();

        assert_eq!(
            output,
            "# -- Dependency: foo\n\
             add_library(foo INTERFACE)\n\
             \n\
             add_library(foo::foo ALIAS foo)\n\
             include(${PROJECT_SOURCE_DIR}/cmake/foo-extra.cmake)\n\
             \n"
        );
    }

    #[test]
    fn dependencies_follow_document_order() {
        let output = compile(
            r#"{"b": {"target": {"type": "interface"}}, "a": {"target": {"type": "interface"}}}"#,
        )
        .unwrap();

        assert!(output.find("Dependency: b").unwrap() < output.find("Dependency: a").unwrap());
    }

    #[test]
    fn attribute_keys_on_imported_target_are_dropped() {
        let output = compile(r#"{"w": {"target": {"type": "imported", "includes": "x"}}}"#).unwrap();

        assert_eq!(output, "# -- Dependency: w\nadd_library(w UNKNOWN IMPORTED)\n\n");
    }

    #[test]
    fn null_property_becomes_empty_argument() {
        let output = compile(
            r#"{"w": {"target": {"type": "interface", "properties": {"VERSION": null}}}}"#,
        )
        .unwrap();

        assert!(output.contains("VERSION \"\""), "{}", output);
    }
}
