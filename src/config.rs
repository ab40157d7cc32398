use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Represents the complete configuration for release-gate.
///
/// Everything the tool needs is carried here explicitly; no environment
/// variables are read at startup.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    /// Directory holding the project manifests (Cargo.toml, package.json)
    #[serde(default = "default_project_dir")]
    pub project_dir: String,

    #[serde(default)]
    pub release: ReleaseConfig,
}

fn default_project_dir() -> String {
    ".".to_string()
}

/// Configuration for the seed release created by `release-gate init`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    #[serde(default = "default_initial_tag")]
    pub initial_tag: String,

    #[serde(default = "default_initial_title")]
    pub initial_title: String,

    #[serde(default = "default_initial_notes")]
    pub initial_notes: String,
}

fn default_initial_tag() -> String {
    "v0.0.1".to_string()
}

fn default_initial_title() -> String {
    "Initial Release".to_string()
}

fn default_initial_notes() -> String {
    "Initial release of the project.".to_string()
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            initial_tag: default_initial_tag(),
            initial_title: default_initial_title(),
            initial_notes: default_initial_notes(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            project_dir: default_project_dir(),
            release: ReleaseConfig::default(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `releasegate.toml` in current directory
/// 3. `~/.config/.releasegate.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read or parsed
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./releasegate.toml").exists() {
        fs::read_to_string("./releasegate.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(".releasegate.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
}
