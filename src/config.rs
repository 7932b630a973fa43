use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::MergeMode;
use crate::registry::Options;

pub const CONFIG_FILE_NAME: &str = ".langtreerc.json";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Directory holding one subdirectory per language.
    #[serde(default = "default_root")]
    pub root: String,
    #[serde(default = "default_language")]
    pub default_language: String,
    #[serde(default = "default_language")]
    pub fallback_language: String,
    /// Languages loaded on startup.
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default)]
    pub merge_mode: MergeMode,
}

fn default_root() -> String {
    "./lang".to_string()
}

fn default_language() -> String {
    "en".to_string()
}

fn default_languages() -> Vec<String> {
    vec![default_language()]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root: default_root(),
            default_language: default_language(),
            fallback_language: default_language(),
            languages: default_languages(),
            merge_mode: MergeMode::default(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// The language list must not be empty and must contain both the default
    /// and the fallback language.
    pub fn validate(&self) -> Result<()> {
        if self.languages.is_empty() {
            bail!("'languages' must list at least one language");
        }

        for (field, language) in [
            ("defaultLanguage", &self.default_language),
            ("fallbackLanguage", &self.fallback_language),
        ] {
            if !self.languages.contains(language) {
                bail!(
                    "'{}' is \"{}\" but it is not listed in 'languages'",
                    field,
                    language
                );
            }
        }

        Ok(())
    }

    /// Registry options equivalent to this configuration.
    pub fn to_options(&self) -> Options {
        Options::new(&self.default_language, &self.fallback_language)
            .with_languages(&self.languages)
            .with_merge_mode(self.merge_mode)
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
    /// Path of the file the config came from, `None` when using defaults.
    pub path: Option<PathBuf>,
}

impl ConfigLoadResult {
    pub fn from_file(&self) -> bool {
        self.path.is_some()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {:?}", path))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config
                .validate()
                .with_context(|| format!("Invalid config file: {:?}", path))?;
            Ok(ConfigLoadResult {
                config,
                path: Some(path),
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            path: None,
        }),
    }
}
