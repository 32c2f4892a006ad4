use serde::{Deserialize, Serialize};
use std::path::Path;

use teamdex_core::species::client::POKEAPI_BASE_URL;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CliConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_data_dir() -> String {
    "data".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_api_base_url() -> String {
    POKEAPI_BASE_URL.to_string()
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: default_log_level(),
            api_base_url: default_api_base_url(),
        }
    }
}

impl CliConfig {
    /// Load the config file; a missing file just means defaults, a present
    /// but unparsable file is an error worth surfacing.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: CliConfig = toml::from_str(&content)?;
        Ok(config)
    }
}
