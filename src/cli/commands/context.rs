use std::{
    env,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Result};

use super::super::args::CommonArgs;
use crate::config::{CONFIG_FILE_NAME, Config, load_config};
use crate::registry::Registry;
use crate::source::DirectorySource;

/// Open a registry from the nearest config file and the command-line overrides.
///
/// Priority: CLI args > config file > defaults.
pub fn open_registry(common: &CommonArgs) -> Result<Registry> {
    let current_dir = env::current_dir().context("Failed to read the current directory.")?;
    let config_result = load_config(&current_dir)?;

    if common.verbose && !config_result.from_file() {
        eprintln!(
            "Note: No {} found, using default configuration",
            CONFIG_FILE_NAME
        );
    }

    // Relative roots are relative to the directory holding the config file.
    let base_dir = config_result
        .path
        .as_deref()
        .and_then(Path::parent)
        .map(Path::to_path_buf)
        .unwrap_or(current_dir);

    let config = apply_overrides(config_result.config, common);
    let root = match &common.root {
        Some(root) => root.clone(),
        None => resolve_root(&base_dir, &config.root),
    };

    let source = DirectorySource::new(&root)
        .with_context(|| format!("Failed to open document root {:?}", root))?;
    let registry = Registry::with_source(source, &config.to_options())
        .with_context(|| format!("Failed to load languages from {:?}", root))?;

    if common.verbose {
        eprintln!(
            "Note: Loaded {} from {}",
            registry.languages().join(", "),
            root.display()
        );
    }

    Ok(registry)
}

fn apply_overrides(mut config: Config, common: &CommonArgs) -> Config {
    if let Some(ref language) = common.default_language {
        config.default_language = language.clone();
    }
    if let Some(ref language) = common.fallback_language {
        config.fallback_language = language.clone();
    }
    if !common.languages.is_empty() {
        config.languages = common.languages.clone();
    }
    if let Some(merge_mode) = common.merge_mode {
        config.merge_mode = merge_mode;
    }

    // An overridden default or fallback language is loaded even when the
    // language list does not name it.
    for language in [
        config.fallback_language.clone(),
        config.default_language.clone(),
    ] {
        if !config.languages.contains(&language) {
            config.languages.push(language);
        }
    }
    config
}

fn resolve_root(base_dir: &Path, root: &str) -> PathBuf {
    let p = Path::new(root);
    if p.is_absolute() {
        return p.to_path_buf();
    }
    let is_cur_dir = base_dir
        .components()
        .all(|c| matches!(c, Component::CurDir));
    if is_cur_dir {
        p.to_path_buf()
    } else {
        // "<base>/lang" rather than "<base>/./lang".
        let rel = p.strip_prefix(Path::new(".")).unwrap_or(p);
        base_dir.join(rel)
    }
}
