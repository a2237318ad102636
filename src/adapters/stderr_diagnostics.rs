use crate::ports::Diagnostics;

/// Progress lines on standard error.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrDiagnostics;

impl Diagnostics for StderrDiagnostics {
    fn progress(&mut self, message: &str) {
        eprintln!("{}", message);
    }
}
