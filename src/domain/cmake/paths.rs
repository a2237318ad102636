//! Resolution of descriptor path references into CMake paths.

/// Placeholder for the top-level project source directory.
pub const PROJECT_ROOT: &str = "${PROJECT_SOURCE_DIR}";

/// Placeholder for the binary directory of the including CMake list.
pub const CURRENT_BINARY_DIR: &str = "${CMAKE_CURRENT_BINARY_DIR}";

/// Resolves path references on behalf of one dependency.
///
/// Addressing modes:
/// - `/x`: relative to the project root
/// - `:x`: relative to the dependency's binary root
/// - `${...}`: already qualified, kept as is
/// - `.` or empty: the dependency's source root
/// - anything else: relative to the dependency's source root
///
/// No normalization happens; `..` and duplicate slashes pass through.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathResolver {
    source_root: String,
    binary_root: String,
}

impl PathResolver {
    /// Resolver with the default roots of dependency `owner`.
    pub fn new(owner: &str) -> Self {
        Self::with_roots(owner, None, None)
    }

    /// Resolver for `owner` with optional overrides of its source and binary roots.
    pub fn with_roots(owner: &str, source_root: Option<&str>, binary_root: Option<&str>) -> Self {
        Self {
            source_root: source_root
                .map(str::to_string)
                .unwrap_or_else(|| format!("${{{}_SOURCE_DIR}}", owner)),
            binary_root: binary_root
                .map(str::to_string)
                .unwrap_or_else(|| format!("{}/{}", CURRENT_BINARY_DIR, owner)),
        }
    }

    /// Resolver for the subtree `root` of this resolver's dependency.
    ///
    /// The source root becomes `resolve(root)`; a plain relative `root` is also
    /// appended to the binary root so build outputs mirror the source layout.
    pub fn nested(&self, root: &str) -> Self {
        let source_root = self.resolve(root);
        let binary_root = if is_plain_relative(root) {
            format!("{}/{}", self.binary_root, root)
        } else {
            self.binary_root.clone()
        };
        Self { source_root, binary_root }
    }

    pub fn source_root(&self) -> &str {
        &self.source_root
    }

    pub fn binary_root(&self) -> &str {
        &self.binary_root
    }

    /// Resolve a descriptor path reference.
    pub fn resolve(&self, path: &str) -> String {
        if let Some(rest) = path.strip_prefix('/') {
            format!("{}/{}", PROJECT_ROOT, rest)
        } else if let Some(rest) = path.strip_prefix(':') {
            format!("{}/{}", self.binary_root, rest)
        } else if path.starts_with("${") {
            path.to_string()
        } else if path.is_empty() || path == "." {
            self.source_root.clone()
        } else {
            format!("{}/{}", self.source_root, path)
        }
    }
}

fn is_plain_relative(path: &str) -> bool {
    !(path.is_empty()
        || path == "."
        || path.starts_with('/')
        || path.starts_with(':')
        || path.starts_with("${"))
}
