//! Per-app configuration persisted as `{app_name}.json` in the working directory.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::Result;

/// The full set of settings for one app.
///
/// All fields are required once written; unknown keys in the file are a parse
/// error so a stale or hand-edited config fails fast at load time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Name of the container image built for this app.
    pub image_name: String,
    /// AWS credential profile used by processing and make jobs.
    pub aws_profile: String,
    /// AWS region passed through to the wrapper scripts.
    pub aws_region: String,
    /// Directory holding the generated `easy_sm_base` module.
    pub easy_sm_module_dir: String,
    /// Directory holding the renv dependency environment.
    pub renv_dir: String,
}

/// Path of the config file for `app_name`, relative to the working directory.
pub fn config_file_path(app_name: &str) -> PathBuf {
    PathBuf::from(format!("{app_name}.json"))
}

/// Sole mediator of config reads and writes. Stateless: every call goes
/// straight to the file.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self { path: path.as_ref().to_path_buf() }
    }

    /// Parses the config file, or returns a default record when the file does
    /// not exist yet.
    pub fn get_config(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Ok(AppConfig::default());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Serializes `config` to the file, overwriting any existing content.
    pub fn set_config(&self, config: &AppConfig) -> Result<()> {
        let content = serde_json::to_string_pretty(config)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}
