//! Server configuration at ~/.config/iljeong/server.toml.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;

pub const DEFAULT_PORT: u16 = 5174;

fn default_port() -> u16 {
    DEFAULT_PORT
}

#[derive(Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_port")]
    pub port: u16,

    /// JSON file with the initial event list, shaped `{"events": [...]}`.
    pub seed_file: Option<PathBuf>,
}

impl ServerConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("iljeong");

        Ok(config_dir.join("server.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: ServerConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .context("Could not read server config")?
            .try_deserialize()
            .context("Could not parse server config")?;

        Ok(config)
    }

    /// Seed file path with `~` expanded, when one is configured.
    pub fn seed_path(&self) -> Option<PathBuf> {
        let raw = self.seed_file.as_ref()?;
        let expanded = shellexpand::tilde(&raw.to_string_lossy()).into_owned();
        Some(PathBuf::from(expanded))
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let contents = format!(
            "\
# iljeong server configuration

# Port to listen on:
# port = {DEFAULT_PORT}

# JSON file with initial events, shaped {{\"events\": [...]}}:
# seed_file = \"~/.local/share/iljeong/events.json\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }
}
