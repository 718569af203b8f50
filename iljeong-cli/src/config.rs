//! CLI configuration at ~/.config/iljeong/cli.toml.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;

use iljeong_core::View;

use crate::client::DEFAULT_SERVER_URL;

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

#[derive(Deserialize, Clone)]
pub struct CliConfig {
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// View `list` opens with when no flag is given.
    #[serde(default)]
    pub default_view: View,
}

impl CliConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("iljeong");

        Ok(config_dir.join("cli.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: CliConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .context("Could not read CLI config")?
            .try_deserialize()
            .context("Could not parse CLI config")?;

        Ok(config)
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> Result<()> {
        let default_view = View::default();
        let contents = format!(
            "\
# iljeong CLI configuration

# Where iljeong-server listens:
# server_url = \"{DEFAULT_SERVER_URL}\"

# View `list` opens with (week or month):
# default_view = \"{default_view}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Could not create config directory")?;
        }

        std::fs::write(path, contents).context("Could not write config file")?;

        Ok(())
    }
}
