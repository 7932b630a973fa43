use anyhow::{Result, bail};

use super::super::args::DumpCommand;
use super::super::exit_status::ExitStatus;
use super::super::report::{leaves_to_json, print_leaves};
use crate::registry::Registry;

/// Print every leaf of one language as stored, templates unexpanded.
pub fn dump(registry: &Registry, cmd: DumpCommand) -> Result<ExitStatus> {
    let language = cmd
        .language
        .as_deref()
        .unwrap_or_else(|| registry.default_language());
    let Some(tree) = registry.tree(language) else {
        bail!("Language [{}] is not loaded", language);
    };

    let leaves = tree.flatten();
    if cmd.json {
        println!("{}", leaves_to_json(&leaves)?);
    } else {
        print_leaves(&leaves)?;
    }
    Ok(ExitStatus::Success)
}
