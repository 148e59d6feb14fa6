//! Configuration structures and loading logic.

use crate::error::{Error, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub user: UserConfig,

    #[serde(default)]
    pub misc: MiscConfig,

    #[serde(default)]
    pub network: NetworkConfig,
}

/// Login credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Value of the `SESSDATA` cookie. Empty when not logged in.
    #[serde(default)]
    pub sessdata: String,
}

/// Presentation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MiscConfig {
    /// List extra series sections (PVs, extras) next to the main feature.
    #[serde(default = "default_true")]
    pub show_sections: bool,
}

impl Default for MiscConfig {
    fn default() -> Self {
        Self {
            show_sections: true,
        }
    }
}

/// HTTP options for metadata requests.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Browser user agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Optional proxy URL (http, https or socks5).
    #[serde(default)]
    pub proxy: Option<String>,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_seconds: default_timeout(),
            proxy: None,
        }
    }
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36".to_string()
}

fn default_true() -> bool {
    true
}

fn default_timeout() -> u64 {
    8
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Per-user config file location, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "bili-picker").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// Whether a login cookie is configured.
    pub fn is_authenticated(&self) -> bool {
        !self.user.sessdata.trim().is_empty()
    }
}
