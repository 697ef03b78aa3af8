//! CLI configuration.
//!
//! Reads JSON from `~/.config/steamcmd-runner/config.json`. Command-line
//! flags take precedence over values from the file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use steamcmd::SteamCmdSettings;

const CONFIG_DIR_NAME: &str = "steamcmd-runner";
const CONFIG_FILE_NAME: &str = "config.json";

/// On-disk config format.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CliConfig {
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub pass: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub install_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_base_path: Option<PathBuf>,
    #[serde(default)]
    pub debug: bool,
}

impl CliConfig {
    /// Loads the config at `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        match serde_json::from_str::<CliConfig>(&content) {
            Ok(config) => Ok(config),
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "failed to parse config, using defaults"
                );
                Ok(Self::default())
            }
        }
    }

    /// Builds runner settings. `install_dir` defaults to the library's temp
    /// location; `app_base_path` defaults relative to `install_dir`.
    pub fn settings(&self) -> SteamCmdSettings {
        let mut settings = match &self.install_dir {
            Some(dir) => SteamCmdSettings::with_install_dir(dir),
            None => SteamCmdSettings::default(),
        };
        if let Some(base) = &self.app_base_path {
            settings.app_base_path = base.clone();
        }
        settings.debug = self.debug;
        settings
    }
}

/// Returns the default config file path.
pub fn config_file_path() -> anyhow::Result<PathBuf> {
    let home = std::env::var_os("HOME")
        .map(PathBuf::from)
        .ok_or_else(|| anyhow::anyhow!("HOME is not set"))?;
    Ok(home
        .join(".config")
        .join(CONFIG_DIR_NAME)
        .join(CONFIG_FILE_NAME))
}
