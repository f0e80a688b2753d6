//! Project configuration for blockbaker.
//! An optional `blockbaker.json`, `blockbaker.yml` or `blockbaker.yaml` in the
//! project root overrides the default source layout and generated settings.

use crate::constants::{CONFIG_FILES, DEFAULT_TARGET_VERSION};
use crate::error::{Error, Result};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// Project-level settings. Every key is optional.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Java base package; the mod id is appended to it.
    pub package: String,
    /// Resources root, relative to the project root.
    pub resources_dir: String,
    /// Main source root, relative to the project root.
    pub java_dir: String,
    /// Client source root, relative to the project root.
    pub client_java_dir: String,
    pub target_version: String,
    pub aux_feature: bool,
    /// Java expression passed to the generated block constructor.
    pub block_settings: String,
    /// Java expression passed to the generated item constructor.
    pub item_settings: String,
    /// Glob patterns over model names that scanning skips.
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: "com.tntstudios".to_string(),
            resources_dir: "src/main/resources".to_string(),
            java_dir: "src/main/java".to_string(),
            client_java_dir: "src/client/java".to_string(),
            target_version: DEFAULT_TARGET_VERSION.to_string(),
            aux_feature: false,
            block_settings: "AbstractBlock.Settings.create().strength(0.2f).nonOpaque()"
                .to_string(),
            item_settings: "new Item.Settings()".to_string(),
            exclude: Vec::new(),
        }
    }
}

/// Loads the raw configuration from a project directory, trying each supported file name.
///
/// # Returns
/// * `Result<Option<String>>` - Contents of the first found configuration file,
///   `None` when the project has none
pub fn load_config<P: AsRef<Path>>(project_dir: P, config_files: &[&str]) -> Result<Option<String>> {
    for file in config_files {
        let config_path = project_dir.as_ref().join(file);
        if config_path.exists() {
            debug!("Loading configuration from {}", config_path.display());
            return Ok(Some(std::fs::read_to_string(&config_path).map_err(Error::IoError)?));
        }
    }
    debug!("No configuration file found (tried: {})", config_files.join(", "));
    Ok(None)
}

/// Parses configuration content, trying JSON first and YAML second.
///
/// # Errors
/// * `Error::ConfigError` if neither format accepts the content
pub fn parse_config(content: &str) -> Result<Config> {
    let config = match serde_json::from_str::<Config>(content) {
        Ok(config) => config,
        Err(_) => serde_yaml::from_str(content)
            .map_err(|e| Error::ConfigError(format!("Invalid configuration format: {}", e)))?,
    };

    if config.package.trim().is_empty() {
        return Err(Error::ConfigError("'package' must not be empty".to_string()));
    }
    Ok(config)
}

/// Returns the project configuration, or the defaults when the project has none.
pub fn get_config<P: AsRef<Path>>(project_dir: P) -> Result<Config> {
    match load_config(project_dir, &CONFIG_FILES)? {
        Some(content) => parse_config(&content),
        None => Ok(Config::default()),
    }
}
