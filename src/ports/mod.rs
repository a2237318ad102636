mod descriptor_source;
mod diagnostics;
mod tag_source;

pub use descriptor_source::DescriptorSource;
pub use diagnostics::{Diagnostics, NoopDiagnostics};
pub use tag_source::TagSource;
