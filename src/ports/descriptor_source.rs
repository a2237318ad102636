use crate::domain::{AppError, DependencyDescriptor, DescriptorFormat, parse_descriptors};

/// Port for reading a descriptor document.
pub trait DescriptorSource {
    /// Serialization format of the document.
    fn format(&self) -> DescriptorFormat;

    /// Read the whole document.
    fn read_document(&mut self) -> Result<String, AppError>;

    /// Read and parse the document into descriptors, in document order.
    fn read_descriptors(&mut self) -> Result<Vec<DependencyDescriptor>, AppError> {
        let content = self.read_document()?;
        parse_descriptors(&content, self.format())
    }
}
