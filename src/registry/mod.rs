//! Caller-owned translation registry.
//!
//! A [`Registry`] owns one [`LanguageTree`] per loaded language together with
//! the document source they came from and the default/fallback languages.
//! It starts uninitialized, becomes initialized through
//! [`Registry::initialize`], and [`Registry::reset`] discards everything.
//!
//! Reads take `&self` and loads take `&mut self`; wrap the registry in a
//! `std::sync::RwLock` to share it between threads.

mod accessors;
mod resolution;

use std::{collections::HashMap, fmt};

pub use resolution::Resolution;

use crate::core::{LanguageTree, MergeMode, ResourcePath, Value, interpolate};
use crate::error::{Error, Result};
use crate::source::{DocumentSource, parse_document};

/// What to load when a registry is initialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Language consulted first by the language-agnostic accessors.
    pub default_language: String,
    /// Language consulted when the default language yields nothing.
    pub fallback_language: String,
    /// Languages loaded during initialization, in order. Must include the
    /// default and fallback languages.
    pub languages: Vec<String>,
    pub merge_mode: MergeMode,
}

impl Options {
    pub fn new(default_language: impl Into<String>, fallback_language: impl Into<String>) -> Self {
        Self {
            default_language: default_language.into(),
            fallback_language: fallback_language.into(),
            languages: Vec::new(),
            merge_mode: MergeMode::default(),
        }
    }

    pub fn with_languages<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_merge_mode(mut self, merge_mode: MergeMode) -> Self {
        self.merge_mode = merge_mode;
        self
    }
}

/// Translation registry. See the [module docs](self).
#[derive(Default)]
pub struct Registry {
    state: Option<State>,
}

/// Everything an initialized registry holds; dropped as a whole on reset.
struct State {
    source: Box<dyn DocumentSource>,
    trees: HashMap<String, LanguageTree>,
    default_language: String,
    fallback_language: String,
    merge_mode: MergeMode,
}

impl State {
    /// Re-read every document of `language` and merge it into that language's tree.
    ///
    /// Documents merge into a copy of the current tree, which replaces the
    /// current one only when every document merged cleanly.
    fn load_language(&mut self, language: &str) -> Result<()> {
        if !self.source.language_exists(language) {
            return Err(Error::LanguageNotOnStorage(language.to_string()));
        }
        let documents = self.source.documents(language)?;

        let mut tree = self
            .trees
            .get(language)
            .cloned()
            .unwrap_or_else(|| LanguageTree::new(language));
        for document in &documents {
            let mapping = parse_document(document)?;
            let leaves = tree.merge(&mapping, self.merge_mode)?;
            tracing::debug!(language, document = %document.name, leaves, "merged document");
        }

        self.trees.insert(language.to_string(), tree);
        tracing::debug!(language, documents = documents.len(), "loaded language");
        Ok(())
    }

    fn lookup_raw(&self, language: &str, path: &ResourcePath) -> Result<&Value> {
        self.trees
            .get(language)
            .ok_or_else(|| Error::LanguageNotLoaded(language.to_string()))?
            .lookup(path)
    }

    /// Resolve `path` and expand templates in a string result.
    ///
    /// References are resolved raw, so expansion is exactly one level deep.
    fn resolve(&self, language: &str, path: &ResourcePath) -> Result<Value> {
        match self.lookup_raw(language, path)? {
            Value::String(text) => Ok(Value::String(interpolate(
                text,
                language,
                |language, path| self.lookup_raw(language, path).cloned(),
            ))),
            other => Ok(other.clone()),
        }
    }
}

impl Registry {
    /// An uninitialized registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create and initialize a registry in one step.
    pub fn with_source(source: impl DocumentSource + 'static, options: &Options) -> Result<Self> {
        let mut registry = Self::new();
        registry.initialize(source, options)?;
        Ok(registry)
    }

    /// Load `options.languages` from `source` and set the default and fallback
    /// languages.
    ///
    /// The registry only becomes initialized if every step succeeds; on error
    /// it stays uninitialized and nothing is kept.
    pub fn initialize(
        &mut self,
        source: impl DocumentSource + 'static,
        options: &Options,
    ) -> Result<()> {
        if self.state.is_some() {
            return Err(Error::AlreadyInitialized);
        }

        let mut state = State {
            source: Box::new(source),
            trees: HashMap::new(),
            default_language: options.default_language.clone(),
            fallback_language: options.fallback_language.clone(),
            merge_mode: options.merge_mode,
        };
        for language in &options.languages {
            state.load_language(language)?;
        }

        for (role, language) in [
            ("fallback", &options.fallback_language),
            ("default", &options.default_language),
        ] {
            if !state.trees.contains_key(language) {
                return Err(Error::DistinguishedLanguageMissing {
                    role,
                    language: language.clone(),
                });
            }
        }

        tracing::debug!(
            default = %state.default_language,
            fallback = %state.fallback_language,
            languages = state.trees.len(),
            "registry initialized"
        );
        self.state = Some(state);
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.state.is_some()
    }

    /// Discard every tree, the source and the distinguished languages.
    pub fn reset(&mut self) {
        if self.state.take().is_some() {
            tracing::debug!("registry reset");
        }
    }

    /// Load (or re-load) a language from the registry's source.
    ///
    /// Loading an already loaded language merges its documents again on top of
    /// the existing tree.
    pub fn load_language(&mut self, language: &str) -> Result<()> {
        self.state
            .as_mut()
            .ok_or(Error::NotInitialized)?
            .load_language(language)
    }

    /// # Panics
    ///
    /// Panics if the registry is not initialized.
    pub fn has_language(&self, language: &str) -> bool {
        self.state().trees.contains_key(language)
    }

    /// Loaded languages, sorted.
    ///
    /// # Panics
    ///
    /// Panics if the registry is not initialized.
    pub fn languages(&self) -> Vec<String> {
        let mut languages: Vec<String> = self.state().trees.keys().cloned().collect();
        languages.sort();
        languages
    }

    pub fn default_language(&self) -> &str {
        &self.state().default_language
    }

    pub fn fallback_language(&self) -> &str {
        &self.state().fallback_language
    }

    /// The merged tree of a loaded language.
    pub fn tree(&self, language: &str) -> Option<&LanguageTree> {
        self.state().trees.get(language)
    }

    /// Resolve `path` in `language`, expanding templates in string values.
    ///
    /// This is the raw lookup underneath every accessor; it reports why a
    /// lookup failed instead of substituting a default.
    ///
    /// # Panics
    ///
    /// Panics if the registry is not initialized.
    pub fn lookup_in(&self, language: &str, path: &str) -> Result<Value> {
        let state = self.state();
        let path = ResourcePath::parse(path)?;
        state.resolve(language, &path)
    }

    /// Report which languages resolve `path`.
    ///
    /// An empty `languages` slice checks every loaded language. Returns whether
    /// any language matched, and the matching languages in the order checked.
    ///
    /// # Panics
    ///
    /// Panics if the registry is not initialized.
    pub fn has_path(&self, path: &str, languages: &[&str]) -> (bool, Vec<String>) {
        let candidates: Vec<String> = if languages.is_empty() {
            self.languages()
        } else {
            languages.iter().map(|l| l.to_string()).collect()
        };

        let contains: Vec<String> = candidates
            .into_iter()
            .filter(|language| self.lookup_in(language, path).is_ok())
            .collect();
        (!contains.is_empty(), contains)
    }

    fn state(&self) -> &State {
        match &self.state {
            Some(state) => state,
            None => panic!("{}", Error::NotInitialized),
        }
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.state {
            Some(state) => {
                let mut languages: Vec<&String> = state.trees.keys().collect();
                languages.sort();
                f.debug_struct("Registry")
                    .field("default_language", &state.default_language)
                    .field("fallback_language", &state.fallback_language)
                    .field("languages", &languages)
                    .field("merge_mode", &state.merge_mode)
                    .finish()
            }
            None => f.write_str("Registry(uninitialized)"),
        }
    }
}
