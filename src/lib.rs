//! depgen: Generate CMake dependency declarations from JSON descriptors.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    AppConfig, DescriptorFormat, GenerateOptions, GenerateResult, UpgradeNotice, check,
    check_with, generate, generate_str, load_config,
};
pub use domain::AppError;
