use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::strategy::{Strategy, StrategyKind};

pub const CONFIG_FILE_NAME: &str = ".hexportrc.json";

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_root")]
    pub source_root: String,
    #[serde(default = "default_output_root")]
    pub output_root: String,
    #[serde(default = "default_umbrella_file")]
    pub umbrella_file: String,
    #[serde(default)]
    pub strategy: StrategyKind,
    #[serde(default = "default_export_keyword")]
    pub export_keyword: String,
    #[serde(default = "default_extern_keyword")]
    pub extern_keyword: String,
    #[serde(default = "default_extern_replacement")]
    pub extern_replacement: String,
    #[serde(default = "default_block_start")]
    pub block_start: String,
    #[serde(default = "default_block_end")]
    pub block_end: String,
    #[serde(default = "default_header_extension")]
    pub header_extension: String,
    #[serde(default)]
    pub ignores: Vec<String>,
    #[serde(default)]
    pub clean_output: bool,
}

fn default_source_root() -> String {
    "./".to_string()
}

fn default_output_root() -> String {
    "./api".to_string()
}

fn default_umbrella_file() -> String {
    "kernel.h".to_string()
}

fn default_export_keyword() -> String {
    "EXPORT".to_string()
}

fn default_extern_keyword() -> String {
    "EXTERN".to_string()
}

fn default_extern_replacement() -> String {
    "extern".to_string()
}

fn default_block_start() -> String {
    "EXPORT_API".to_string()
}

fn default_block_end() -> String {
    "END_EXPORT_API".to_string()
}

fn default_header_extension() -> String {
    "h".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_root: default_source_root(),
            output_root: default_output_root(),
            umbrella_file: default_umbrella_file(),
            strategy: StrategyKind::default(),
            export_keyword: default_export_keyword(),
            extern_keyword: default_extern_keyword(),
            extern_replacement: default_extern_replacement(),
            block_start: default_block_start(),
            block_end: default_block_end(),
            header_extension: default_header_extension(),
            ignores: Vec::new(),
            clean_output: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any lexical marker is empty or if any glob
    /// pattern in `ignores` is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.export_keyword.trim().is_empty() {
            anyhow::bail!("'exportKeyword' must not be empty");
        }
        if self.extern_keyword.trim().is_empty() {
            anyhow::bail!("'externKeyword' must not be empty");
        }
        if self.block_start.trim().is_empty() || self.block_end.trim().is_empty() {
            anyhow::bail!("'blockStart' and 'blockEnd' must not be empty");
        }
        if self.umbrella_file.trim().is_empty() {
            anyhow::bail!("'umbrellaFile' must not be empty");
        }

        for pattern in &self.ignores {
            if pattern.contains('*') || pattern.contains('?') {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in 'ignores': \"{}\"", pattern)
                })?;
            }
        }

        Ok(())
    }

    /// Build the resolved extraction strategy from the selector fields.
    pub fn strategy(&self) -> Strategy {
        match self.strategy {
            StrategyKind::Keyword => Strategy::SingleKeyword {
                keyword: self.export_keyword.clone(),
                extern_keyword: self.extern_keyword.clone(),
                extern_replacement: self.extern_replacement.clone(),
            },
            StrategyKind::Markers => Strategy::BlockMarkers {
                start: self.block_start.clone(),
                end: self.block_end.clone(),
            },
        }
    }

    /// Source root as the literal prefix string stripped from include paths,
    /// always with a trailing slash.
    pub fn source_prefix(&self) -> String {
        if self.source_root.ends_with('/') {
            self.source_root.clone()
        } else {
            format!("{}/", self.source_root)
        }
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
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
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
