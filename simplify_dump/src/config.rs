use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use toml;

use crate::error::SimplifyError;

pub const CONFIG_PATH: &str = "./Config/simplify.toml";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    pub log_level: String,
    pub progress_interval: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from("french_dict.json"),
            output_path: PathBuf::from("simplified_dictionary.json"),
            log_level: "info".to_string(),
            progress_interval: 100_000,
        }
    }
}

impl Config {
    pub fn from_file(file: &Path) -> Result<Self, SimplifyError> {
        let content = std::fs::read_to_string(file).map_err(|e| SimplifyError::Config {
            path: file.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config: Config = toml::from_str(&content).map_err(|e| SimplifyError::Config {
            path: file.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(config)
    }

    /// Loads `file` if it exists, defaults otherwise.
    pub fn load_or_default(file: &Path) -> Result<Self, SimplifyError> {
        if file.exists() {
            Self::from_file(file)
        } else {
            Ok(Self::default())
        }
    }
}
