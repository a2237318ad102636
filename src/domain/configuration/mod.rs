pub mod app_config;
pub mod loader;

pub use app_config::{AppConfig, CheckConfig, GenerateConfig, GitHubApiConfig};
pub use loader::{CONFIG_FILE_NAME, load_config, parse_config_content};
