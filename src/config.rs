use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::extract::DEFAULT_GLOBALS;

pub const CONFIG_FILE_NAME: &str = ".transpilerc.json";

pub const DEFAULT_OUTPUT_DIR: &str = "./transpiled-components";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_globals")]
    pub globals: Vec<String>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_globals() -> Vec<String> {
    DEFAULT_GLOBALS.iter().map(|name| name.to_string()).collect()
}

fn default_output_dir() -> String {
    DEFAULT_OUTPUT_DIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            globals: default_globals(),
            output_dir: default_output_dir(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if `globals` is empty or holds a name that cannot be
    /// a JavaScript identifier.
    pub fn validate(&self) -> Result<()> {
        if self.globals.is_empty() {
            bail!("'globals' must list at least one identifier");
        }
        for name in &self.globals {
            if !is_identifier(name) {
                bail!("Invalid identifier in 'globals': \"{}\"", name);
            }
        }
        if self.output_dir.trim().is_empty() {
            bail!("'outputDir' must not be empty");
        }
        Ok(())
    }
}

/// ASCII approximation of the ECMAScript IdentifierName grammar, plus any
/// non-ASCII alphabetic character.
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    let is_start = |c: char| c == '$' || c == '_' || c.is_alphabetic();
    is_start(first) && chars.all(|c| is_start(c) || c.is_ascii_digit())
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Path the config was read from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            path: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
