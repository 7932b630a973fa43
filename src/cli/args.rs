//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `get`: Resolve a path and print the value
//! - `has`: List the languages that contain a path
//! - `languages`: List loaded languages
//! - `dump`: Print every leaf of a language
//! - `init`: Initialize langtree configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand, ValueEnum};

use crate::core::MergeMode;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(flatten)]
    pub common: CommonArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    pub fn verbose(&self) -> bool {
        self.common.verbose
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Document root holding one directory per language (overrides config file)
    #[arg(long, global = true, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Default language (overrides config file)
    #[arg(long, global = true, value_name = "LANG")]
    pub default_language: Option<String>,

    /// Fallback language (overrides config file)
    #[arg(long, global = true, value_name = "LANG")]
    pub fallback_language: Option<String>,

    /// Languages to load; repeat for several (overrides config file)
    #[arg(short = 'l', long = "language", global = true, value_name = "LANG")]
    pub languages: Vec<String>,

    /// How documents of one language treat colliding keys (overrides config file)
    #[arg(long, global = true, value_enum)]
    pub merge_mode: Option<MergeMode>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Type a `get` result is converted to before printing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ValueType {
    #[default]
    String,
    Int,
    Float,
    Bool,
    /// Sequence of strings, one per line
    List,
    /// The value as stored; fails when the path does not resolve
    Raw,
}

#[derive(Debug, Args)]
pub struct GetCommand {
    /// Dotted resource path, e.g. `menu.items[0].label`
    pub path: String,

    /// Read only this language instead of default then fallback
    #[arg(long = "in", value_name = "LANG")]
    pub language: Option<String>,

    #[arg(long = "as", value_enum, default_value_t)]
    pub value_type: ValueType,

    /// Positional arguments for printf-style verbs in the value
    #[arg(long, num_args = 1.., value_name = "ARG")]
    pub args: Vec<String>,
}

#[derive(Debug, Args)]
pub struct HasCommand {
    pub path: String,

    /// Languages to check; repeat for several (default: all loaded)
    #[arg(long = "in", value_name = "LANG")]
    pub in_languages: Vec<String>,
}

#[derive(Debug, Args)]
pub struct DumpCommand {
    /// Language to dump (default: the default language)
    #[arg(long = "in", value_name = "LANG")]
    pub language: Option<String>,

    /// Print a JSON object instead of aligned lines
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve a resource path and print its value
    Get(GetCommand),
    /// Print every loaded language that contains a resource path
    Has(HasCommand),
    /// List loaded languages
    Languages,
    /// Print every leaf of a language
    Dump(DumpCommand),
    /// Initialize a new .langtreerc.json configuration file
    Init,
}
