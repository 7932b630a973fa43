use anyhow::Result;
use colored::Colorize;

use super::super::args::HasCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{FAILURE_MARK, SUCCESS_MARK};
use crate::registry::Registry;

pub fn has(registry: &Registry, cmd: HasCommand) -> Result<ExitStatus> {
    let languages: Vec<&str> = cmd.in_languages.iter().map(String::as_str).collect();
    let (found, contains) = registry.has_path(&cmd.path, &languages);

    if !found {
        println!(
            "{} {}",
            FAILURE_MARK.red(),
            format!("[{}] not found in any language", cmd.path).red()
        );
        return Ok(ExitStatus::Failure);
    }

    for language in contains {
        println!("{} {}", SUCCESS_MARK.green(), language);
    }
    Ok(ExitStatus::Success)
}
