/// Port for human-readable progress reporting.
///
/// Diagnostics never share a stream with generated output.
pub trait Diagnostics {
    /// Report a progress line.
    fn progress(&mut self, message: &str);
}

/// Diagnostics sink that discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {
    fn progress(&mut self, _message: &str) {}
}
