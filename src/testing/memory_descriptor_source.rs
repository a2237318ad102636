use crate::domain::{AppError, DescriptorFormat};
use crate::ports::DescriptorSource;

pub struct MemoryDescriptorSource {
    content: String,
    format: DescriptorFormat,
}

impl MemoryDescriptorSource {
    pub fn json(content: &str) -> Self {
        Self { content: content.to_string(), format: DescriptorFormat::Json }
    }

    pub fn yaml(content: &str) -> Self {
        Self { content: content.to_string(), format: DescriptorFormat::Yaml }
    }
}

impl DescriptorSource for MemoryDescriptorSource {
    fn format(&self) -> DescriptorFormat {
        self.format
    }

    fn read_document(&mut self) -> Result<String, AppError> {
        Ok(self.content.clone())
    }
}
