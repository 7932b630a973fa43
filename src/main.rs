use std::{env, io, process::ExitCode};

use clap::Parser;
use langtree::cli::{Arguments, ExitStatus};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_logging(args.verbose());

    match langtree::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}

/// Log to stderr. `RUST_LOG` wins; otherwise warnings only, or debug with `-v`.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "langtree=debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(io::stderr)
        .with_ansi(env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .init();
}
