use anyhow::Result;
use colored::Colorize;

use super::super::args::{GetCommand, ValueType};
use super::super::exit_status::ExitStatus;
use super::super::report::{FAILURE_MARK, render_value};
use crate::core::Arg;
use crate::registry::Registry;

pub fn get(registry: &Registry, cmd: GetCommand) -> Result<ExitStatus> {
    let language = cmd.language.as_deref();
    let path = cmd.path.as_str();

    match cmd.value_type {
        ValueType::String if cmd.args.is_empty() => {
            let text = match language {
                Some(language) => registry.get_string_in(language, path),
                None => registry.get_string(path),
            };
            println!("{}", text);
        }
        ValueType::String => {
            let args: Vec<Arg> = cmd.args.iter().map(|raw| parse_arg(raw)).collect();
            let text = match language {
                Some(language) => registry.get_formatted_in(language, path, &args),
                None => registry.get_formatted(path, &args),
            };
            println!("{}", text);
        }
        ValueType::Int => {
            let value = match language {
                Some(language) => registry.get_int_in(language, path),
                None => registry.get_int(path),
            };
            println!("{}", value);
        }
        ValueType::Float => {
            let value = match language {
                Some(language) => registry.get_float_in(language, path),
                None => registry.get_float(path),
            };
            println!("{}", value);
        }
        ValueType::Bool => {
            let value = match language {
                Some(language) => registry.get_bool_in(language, path),
                None => registry.get_bool(path),
            };
            println!("{}", value);
        }
        ValueType::List => {
            let items: Vec<String> = match language {
                Some(language) => registry.get_list_in(language, path),
                None => registry.get_list(path),
            };
            for item in items {
                println!("{}", item);
            }
        }
        ValueType::Raw => return get_raw(registry, language, path),
    }

    Ok(ExitStatus::Success)
}

/// Print the stored value, or report why nothing resolved.
///
/// A lookup miss exits with [`ExitStatus::Failure`]; any other error is
/// propagated.
fn get_raw(registry: &Registry, language: Option<&str>, path: &str) -> Result<ExitStatus> {
    let languages = match language {
        Some(language) => vec![language],
        None => vec![registry.default_language(), registry.fallback_language()],
    };

    let mut last_error = None;
    for language in languages {
        match registry.lookup_in(language, path) {
            Ok(value) => {
                println!("{}", render_value(&value)?);
                return Ok(ExitStatus::Success);
            }
            Err(err) if err.is_lookup_miss() => last_error = Some(err),
            Err(err) => return Err(err.into()),
        }
    }

    if let Some(err) = last_error {
        eprintln!("{} {}", FAILURE_MARK.red(), err.to_string().red());
    }
    Ok(ExitStatus::Failure)
}

/// Interpret a command-line argument as the most specific [`Arg`] it parses as.
fn parse_arg(raw: &str) -> Arg {
    if let Ok(int) = raw.parse::<i64>() {
        return Arg::Int(int);
    }
    if let Ok(float) = raw.parse::<f64>()
        && float.is_finite()
    {
        return Arg::Float(float);
    }
    match raw {
        "true" => Arg::Bool(true),
        "false" => Arg::Bool(false),
        _ => Arg::Str(raw.to_string()),
    }
}
