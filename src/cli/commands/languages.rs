use anyhow::Result;
use colored::Colorize;

use super::super::exit_status::ExitStatus;
use crate::registry::Registry;

pub fn languages(registry: &Registry) -> Result<ExitStatus> {
    for language in registry.languages() {
        let mut roles = Vec::new();
        if language == registry.default_language() {
            roles.push("default");
        }
        if language == registry.fallback_language() {
            roles.push("fallback");
        }

        if roles.is_empty() {
            println!("{}", language);
        } else {
            println!("{} {}", language, format!("({})", roles.join(", ")).dimmed());
        }
    }
    Ok(ExitStatus::Success)
}
