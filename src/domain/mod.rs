pub mod cmake;
pub mod configuration;
pub mod descriptor;
pub mod error;

pub use configuration::{AppConfig, CheckConfig, GenerateConfig, GitHubApiConfig};
pub use descriptor::{
    DependencyDescriptor, DescriptorFormat, GitHubRepo, SchemaError, parse_descriptors,
};
pub use error::AppError;
