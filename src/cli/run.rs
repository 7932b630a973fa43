use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{context::open_registry, dump::dump, get::get, has::has, init::init, languages::languages},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
///
/// Every command except `init` works on a registry opened from the
/// configuration and the common arguments.
pub fn run(Arguments { common, command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Init) => init(),
        Some(Command::Get(cmd)) => get(&open_registry(&common)?, cmd),
        Some(Command::Has(cmd)) => has(&open_registry(&common)?, cmd),
        Some(Command::Languages) => languages(&open_registry(&common)?),
        Some(Command::Dump(cmd)) => dump(&open_registry(&common)?, cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
