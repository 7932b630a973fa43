//! Typed accessors.
//!
//! Every `*_in` accessor reads one language. The language-agnostic forms read
//! the default language and, when that yields the caller's default, retry the
//! fallback language.

use super::{Registry, Resolution};
use crate::core::{Arg, Convert, DEFAULT_STRING, Value, format_positional};
use crate::error::{Error, Result};

impl Registry {
    /// Resolve `path` in `language` and convert it to `T`, keeping the reason
    /// for a miss.
    pub fn resolve_in<T: Convert>(&self, language: &str, path: &str) -> Resolution<T> {
        match self.lookup_in(language, path) {
            Err(err) => Resolution::NotFound(err),
            Ok(value) => match T::convert(&value) {
                Some(converted) => Resolution::Found(converted),
                None => Resolution::TypeMismatch {
                    found: value.kind(),
                },
            },
        }
    }

    // ==== Generic ====

    /// Resolve with an explicit converter; `default` is returned on a miss.
    pub fn get_with_in<T, F>(&self, language: &str, path: &str, convert: F, default: T) -> T
    where
        F: Fn(&Value) -> T,
    {
        match self.lookup_in(language, path) {
            Ok(value) => convert(&value),
            Err(_) => default,
        }
    }

    pub fn get_with<T, F>(&self, path: &str, convert: F, default: T) -> T
    where
        T: PartialEq + Clone,
        F: Fn(&Value) -> T,
    {
        let state = self.state();
        let value = self.get_with_in(&state.default_language, path, &convert, default.clone());
        if value != default {
            return value;
        }
        self.get_with_in(&state.fallback_language, path, &convert, default)
    }

    /// Resolve and convert with the type's own conversion.
    ///
    /// A value that exists but fails to convert yields the type's sentinel,
    /// not `default`.
    pub fn get_in<T: Convert>(&self, language: &str, path: &str, default: T) -> T {
        self.get_with_in(language, path, T::convert_or_sentinel, default)
    }

    pub fn get<T: Convert>(&self, path: &str, default: T) -> T {
        self.get_with(path, T::convert_or_sentinel, default)
    }

    /// The resolved value itself. A default is mandatory.
    pub fn get_value_in(&self, language: &str, path: &str, default: Option<Value>) -> Result<Value> {
        let default = default.ok_or(Error::MissingDefault)?;
        Ok(self.lookup_in(language, path).unwrap_or(default))
    }

    pub fn get_value(&self, path: &str, default: Option<Value>) -> Result<Value> {
        let default = default.ok_or(Error::MissingDefault)?;
        let state = self.state();
        let value = self
            .lookup_in(&state.default_language, path)
            .unwrap_or_else(|_| default.clone());
        if value != default {
            return Ok(value);
        }
        Ok(self
            .lookup_in(&state.fallback_language, path)
            .unwrap_or(default))
    }

    // ==== Scalars ====

    /// Found values equal to the type's sentinel count as misses.
    fn scalar_in<T: Convert>(&self, language: &str, path: &str, default: T) -> T {
        match self.resolve_in::<T>(language, path) {
            Resolution::Found(value) if value != T::sentinel() => value,
            _ => default,
        }
    }

    fn scalar<T: Convert>(&self, path: &str, default: T) -> T {
        let state = self.state();
        let value = self.scalar_in(&state.default_language, path, default.clone());
        if value != default {
            return value;
        }
        self.scalar_in(&state.fallback_language, path, default)
    }

    pub fn get_string_in(&self, language: &str, path: &str) -> String {
        self.scalar_in(language, path, String::sentinel())
    }

    pub fn get_string_in_or(&self, language: &str, path: &str, default: &str) -> String {
        self.scalar_in(language, path, default.to_string())
    }

    /// String at `path` in the default language, then the fallback language.
    /// Returns `""` when neither has one.
    pub fn get_string(&self, path: &str) -> String {
        self.scalar(path, String::sentinel())
    }

    pub fn get_string_or(&self, path: &str, default: &str) -> String {
        self.scalar(path, default.to_string())
    }

    pub fn get_int_in(&self, language: &str, path: &str) -> i64 {
        self.scalar_in(language, path, i64::sentinel())
    }

    pub fn get_int_in_or(&self, language: &str, path: &str, default: i64) -> i64 {
        self.scalar_in(language, path, default)
    }

    /// Integer at `path`; floats are truncated. Returns `-1` when missing.
    pub fn get_int(&self, path: &str) -> i64 {
        self.scalar(path, i64::sentinel())
    }

    pub fn get_int_or(&self, path: &str, default: i64) -> i64 {
        self.scalar(path, default)
    }

    pub fn get_float_in(&self, language: &str, path: &str) -> f64 {
        self.scalar_in(language, path, f64::sentinel())
    }

    pub fn get_float_in_or(&self, language: &str, path: &str, default: f64) -> f64 {
        self.scalar_in(language, path, default)
    }

    pub fn get_float(&self, path: &str) -> f64 {
        self.scalar(path, f64::sentinel())
    }

    pub fn get_float_or(&self, path: &str, default: f64) -> f64 {
        self.scalar(path, default)
    }

    pub fn get_bool_in(&self, language: &str, path: &str) -> bool {
        self.scalar_in(language, path, bool::sentinel())
    }

    pub fn get_bool_in_or(&self, language: &str, path: &str, default: bool) -> bool {
        self.scalar_in(language, path, default)
    }

    pub fn get_bool(&self, path: &str) -> bool {
        self.scalar(path, bool::sentinel())
    }

    pub fn get_bool_or(&self, path: &str, default: bool) -> bool {
        self.scalar(path, default)
    }

    // ==== Lists ====

    /// Sequence at `path`, each element converted (or its sentinel on failure).
    /// Anything that is not a sequence yields `default`.
    pub fn get_list_in_or<T: Convert>(&self, language: &str, path: &str, default: Vec<T>) -> Vec<T> {
        match self.lookup_in(language, path) {
            Ok(Value::Seq(items)) => items.iter().map(T::convert_or_sentinel).collect(),
            _ => default,
        }
    }

    pub fn get_list_in<T: Convert>(&self, language: &str, path: &str) -> Vec<T> {
        self.get_list_in_or(language, path, Vec::new())
    }

    pub fn get_list_or<T: Convert>(&self, path: &str, default: Vec<T>) -> Vec<T> {
        let state = self.state();
        let value = self.get_list_in_or(&state.default_language, path, default.clone());
        if value != default {
            return value;
        }
        self.get_list_in_or(&state.fallback_language, path, default)
    }

    pub fn get_list<T: Convert>(&self, path: &str) -> Vec<T> {
        self.get_list_or(path, Vec::new())
    }

    // ==== Formatted ====

    /// String at `path` with printf-style verbs filled from `args`.
    pub fn get_formatted_in(&self, language: &str, path: &str, args: &[Arg]) -> String {
        let template = self.get_string_in(language, path);
        if template == DEFAULT_STRING {
            return template;
        }
        format_positional(&template, args)
    }

    pub fn get_formatted(&self, path: &str, args: &[Arg]) -> String {
        let template = self.get_string(path);
        if template == DEFAULT_STRING {
            return template;
        }
        format_positional(&template, args)
    }
}
