use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level Luach configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LuachConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerToml,

    /// Product catalogue settings.
    #[serde(default)]
    pub catalog: CatalogToml,

    /// Calendar settings.
    #[serde(default)]
    pub calendar: CalendarToml,
}

impl LuachConfig {
    /// Reads the config file at `path`, or returns defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerToml {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerToml {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    5000
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogToml {
    /// CSV file to load; the bundled catalogue is used when unset.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalendarToml {
    #[serde(default = "default_rite")]
    pub rite: String,
}

impl Default for CalendarToml {
    fn default() -> Self {
        Self {
            rite: default_rite(),
        }
    }
}

fn default_rite() -> String {
    "diaspora".to_string()
}
