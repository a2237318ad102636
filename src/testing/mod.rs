mod fake_tag_source;
mod memory_descriptor_source;
mod recording_diagnostics;

pub use fake_tag_source::FakeTagSource;
pub use memory_descriptor_source::MemoryDescriptorSource;
pub use recording_diagnostics::RecordingDiagnostics;
