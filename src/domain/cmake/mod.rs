//! CMake statement generation.
//!
//! Descriptors are compiled dependency by dependency into statements written
//! through an [`Emitter`]. Path references are resolved per dependency by a
//! [`PathResolver`]; targets may move the resolver's roots with `root`.

mod attributes;
mod dependency;
mod emitter;
mod literal;
mod paths;
mod sources;
mod target;

pub use attributes::{emit_all, emit_family, emit_properties, render_entry};
pub use dependency::{DEFAULT_FETCH_COMMAND, compile_dependency};
pub use emitter::{ARGUMENT_INDENT, Emitter, Statement};
pub use literal::{format_literal, quote};
pub use paths::{CURRENT_BINARY_DIR, PROJECT_ROOT, PathResolver};
pub use sources::{enumerate_sources, glob_variable};
pub use target::compile_target;
