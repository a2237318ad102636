//! Configuration file discovery and parsing.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::domain::{AppConfig, AppError};

/// File name looked up in the working directory when no path is given.
pub const CONFIG_FILE_NAME: &str = "depgen.toml";

/// Load the configuration.
///
/// An explicit path must exist. Without one, `depgen.toml` in `dir` is used
/// when present and defaults apply otherwise.
pub fn load_config(explicit: Option<&Path>, dir: &Path) -> Result<AppConfig, AppError> {
    let path = match explicit {
        Some(path) => {
            if !path.is_file() {
                return Err(AppError::ConfigNotFound(path.display().to_string()));
            }
            path.to_path_buf()
        }
        None => dir.join(CONFIG_FILE_NAME),
    };

    match fs::read_to_string(&path) {
        Ok(content) => parse_config_content(&content),
        Err(err) if err.kind() == ErrorKind::NotFound && explicit.is_none() => {
            Ok(AppConfig::default())
        }
        Err(err) => Err(err.into()),
    }
}

/// Parse configuration from string content.
pub fn parse_config_content(content: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
