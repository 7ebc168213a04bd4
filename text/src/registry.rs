//! Name → tokenizer factory lookup.

use std::collections::HashMap;
use std::sync::{OnceLock, RwLock};

use tracing::warn;

use crate::backend::Backends;
use crate::error::TokenizerError;
use crate::tokenizer::{Tokenizer, TokenizerOptions};
use crate::tokenizers::builtin_factories;

/// Builds a tokenizer from its options and the available backends.
pub type TokenizerFactory = fn(TokenizerOptions, &Backends) -> Box<dyn Tokenizer>;

/// A registry of tokenizer factories keyed by scheme name.
///
/// The first registration of a name wins; later ones are ignored.
#[derive(Debug, Clone, Default)]
pub struct TokenizerRegistry {
    factories: HashMap<String, TokenizerFactory>,
}

impl TokenizerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the builtin schemes.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, factory) in builtin_factories() {
            registry.register(name, factory);
        }
        registry
    }

    /// Registers `factory` under `name`.
    ///
    /// Returns `false`, leaving the existing entry in place, when the name
    /// is already taken.
    pub fn register(&mut self, name: impl Into<String>, factory: TokenizerFactory) -> bool {
        let name = name.into();
        if self.factories.contains_key(&name) {
            warn!(name = %name, "tokenizer: already registered, keeping the first");
            return false;
        }
        self.factories.insert(name, factory);
        true
    }

    /// Returns the factory registered under `name`.
    pub fn get(&self, name: &str) -> Result<TokenizerFactory, TokenizerError> {
        self.factories
            .get(name)
            .copied()
            .ok_or_else(|| TokenizerError::UnknownTokenizer(name.to_string()))
    }

    /// Builds the tokenizer registered under `name`.
    pub fn build(
        &self,
        name: &str,
        options: TokenizerOptions,
        backends: &Backends,
    ) -> Result<Box<dyn Tokenizer>, TokenizerError> {
        let factory = self.get(name)?;
        Ok(factory(options, backends))
    }

    /// Returns the registered names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.keys().cloned().collect();
        names.sort();
        names
    }
}

fn default_registry() -> &'static RwLock<TokenizerRegistry> {
    static DEFAULT_REGISTRY: OnceLock<RwLock<TokenizerRegistry>> = OnceLock::new();
    DEFAULT_REGISTRY.get_or_init(|| RwLock::new(TokenizerRegistry::with_builtins()))
}

/// Registers a factory in the process-wide registry.
pub fn register(name: impl Into<String>, factory: TokenizerFactory) -> bool {
    let mut registry = default_registry()
        .write()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.register(name, factory)
}

/// Looks up a factory in the process-wide registry.
pub fn get_tokenizer_by_name(name: &str) -> Result<TokenizerFactory, TokenizerError> {
    let registry = default_registry()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.get(name)
}

/// Builds a tokenizer from the process-wide registry.
pub fn new_tokenizer(
    name: &str,
    options: TokenizerOptions,
    backends: &Backends,
) -> Result<Box<dyn Tokenizer>, TokenizerError> {
    let factory = get_tokenizer_by_name(name)?;
    Ok(factory(options, backends))
}

/// Names in the process-wide registry.
pub fn tokenizer_names() -> Vec<String> {
    let registry = default_registry()
        .read()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    registry.names()
}
