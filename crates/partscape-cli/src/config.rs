//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system directory).

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use partscape::{PartscapeError, config::AppConfig};

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for PartscapeError {
    fn from(err: ConfigError) -> Self {
        PartscapeError::Config(err.to_string())
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (partscape/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or holds invalid values
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, PartscapeError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("partscape/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "partscape", "partscape") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load and validate configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, PartscapeError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

/// Parse TOML configuration text and validate its values.
pub fn parse_config(content: &str) -> Result<AppConfig, PartscapeError> {
    let config: AppConfig =
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    config
        .style()
        .blueprint_wire_color()
        .map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_config() {
        let config = parse_config(
            r#"
            [diagram]
            node_width = 200.0
            ordering_sweeps = 4
            "#,
        )
        .unwrap();

        assert_eq!(config.diagram().node_width(), 200.0);
        assert_eq!(config.diagram().node_height(), 80.0);
        assert_eq!(config.diagram().ordering_sweeps(), 4);
    }

    #[test]
    fn test_parse_style_config() {
        let config = parse_config(
            r##"
            [style]
            blueprint_wire_color = "#ff8800"
            "##,
        )
        .unwrap();
        assert_eq!(
            config.style().blueprint_wire_color().unwrap().as_css(),
            "#ff8800"
        );
    }

    #[test]
    fn test_invalid_color_is_rejected() {
        let result = parse_config(
            r#"
            [style]
            blueprint_wire_color = "glowing"
            "#,
        );
        assert!(matches!(result, Err(PartscapeError::Config(_))));
    }

    #[test]
    fn test_invalid_toml() {
        let result = parse_config("[diagram\nnode_width = ");
        assert!(matches!(result, Err(PartscapeError::Config(_))));
    }

    #[test]
    fn test_missing_explicit_file() {
        let result = load_config(Some("/definitely/not/here/config.toml"));
        assert!(matches!(result, Err(PartscapeError::Config(_))));
    }
}
