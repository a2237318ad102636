//! Shared testing utilities for depgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Testing harness providing an isolated working directory for CLI runs.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");

        Self { root, work_dir }
    }

    /// Path to the directory used as the working directory of CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `depgen` binary in the work directory.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("depgen").expect("Failed to locate depgen binary");
        cmd.current_dir(self.work_dir()).env("HOME", self.root.path()).env_remove("GITHUB_TOKEN");
        cmd
    }

    /// Write `content` to `name` inside the work directory and return its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.work_dir.join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, content).expect("Failed to write test file");
        path
    }

    /// Read a file from the work directory.
    pub fn read_file(&self, name: &str) -> String {
        fs::read_to_string(self.work_dir.join(name)).expect("Failed to read test file")
    }
}

/// Descriptor document exercising a git origin, a library and an alias.
#[allow(dead_code)]
pub const FMT_DESCRIPTOR: &str = r#"{
    "fmt": {
        "git": {"repository": "https://github.com/fmtlib/fmt.git", "tag": "10.2.1"},
        "target": {
            "type": "static",
            "srcs": ["src/format.cc", "src/os.cc"],
            "includes": "include",
            "defines": {"FMT_USE_FULL_CACHE_DRAGONBOX": 1}
        },
        "aliases": {"fmt::fmt": "fmt"}
    }
}"#;

/// Statements expected for [`FMT_DESCRIPTOR`].
#[allow(dead_code)]
pub const FMT_STATEMENTS: &str = "# -- Dependency: fmt
import_dependency(fmt
        URL              https://github.com/fmtlib/fmt/archive/10.2.1.zip
        DOWNLOAD_NAME    fmt-10.2.1.zip)
add_library(fmt STATIC EXCLUDE_FROM_ALL
        ${fmt_SOURCE_DIR}/src/format.cc
        ${fmt_SOURCE_DIR}/src/os.cc)
target_include_directories(fmt SYSTEM
        PUBLIC ${fmt_SOURCE_DIR}/include)
target_compile_definitions(fmt
        PUBLIC FMT_USE_FULL_CACHE_DRAGONBOX=1)

add_library(fmt::fmt ALIAS fmt)

";
