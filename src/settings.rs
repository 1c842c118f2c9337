use crate::config::{ConfigError, ParserStrategy, DEFAULT_ENV_FILE};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default number of sample rows requested per table
pub const DEFAULT_SAMPLE: u32 = 5;

/// Tool settings shared by `check-env` and `db-inspect`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Name of the environment file searched for
    pub env_file: String,
    /// Directory the upward search starts from (current directory when unset)
    pub root: Option<PathBuf>,
    /// Parser used when loading the environment file
    pub parser: ParserStrategy,
    /// Let file values replace live environment values when `db-inspect`
    /// resolves its connection URL
    #[serde(rename = "override")]
    pub override_existing: bool,
    /// Editor settings file, relative to the project root
    pub editor_settings: PathBuf,
    /// Sample rows requested per table by `db-inspect`
    pub sample: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            env_file: DEFAULT_ENV_FILE.to_string(),
            root: None,
            parser: ParserStrategy::default(),
            override_existing: false,
            editor_settings: PathBuf::from(".vscode").join("settings.json"),
            sample: DEFAULT_SAMPLE,
        }
    }
}

impl Settings {
    /// Load settings from a TOML file; missing keys take their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let settings: Self = toml::from_str(&contents)?;
        Ok(settings)
    }

    /// Directory the environment file search starts from
    pub fn start_dir(&self) -> Result<PathBuf, ConfigError> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}
