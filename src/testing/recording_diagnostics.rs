use crate::ports::Diagnostics;

#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    pub messages: Vec<String>,
}

impl Diagnostics for RecordingDiagnostics {
    fn progress(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}
