use std::{fs, path::Path};

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use super::super::report::{FAILURE_MARK, SUCCESS_MARK};
use crate::config::{CONFIG_FILE_NAME, Config, default_config_json};

pub fn init() -> Result<ExitStatus> {
    let config_path = Path::new(CONFIG_FILE_NAME);

    if config_path.exists() {
        eprintln!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("{} already exists", CONFIG_FILE_NAME).red()
        );
        return Ok(ExitStatus::Failure);
    }

    fs::write(config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", CONFIG_FILE_NAME))?;
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!("Created {}", CONFIG_FILE_NAME).green()
    );
    println!(
        "Put language documents under {}/<language>/",
        Config::default().root.trim_end_matches('/')
    );

    Ok(ExitStatus::Success)
}
