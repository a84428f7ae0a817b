//! Format drivers that load a language directory and answer lookups.

mod error;
pub mod json;
pub mod toml;

use std::borrow::Cow;
use std::fmt;

use tracing::debug;

use crate::config::Options;
use crate::store::TranslationStore;
use crate::value::Value;

pub use error::{DecodeError, LoadError};
pub use json::{JsonFormat, JsonParser};
pub use self::toml::{TomlFormat, TomlParser};

/// A loader for one translation file format.
///
/// A parser moves through three states: created, configured (after
/// [`configure`](Self::configure)) and loaded (after a successful
/// [`load`](Self::load)). Lookups before loading miss every key.
pub trait Parser: Send + Sync + fmt::Debug {
    /// Stores the options the next [`load`](Self::load) will use. No I/O.
    fn configure(&mut self, options: &Options);

    /// Reads every language file under the configured directory.
    fn load(&mut self) -> Result<(), LoadError>;

    /// Resolves a dotted key against the configured default language.
    fn lookup(&self, key: &str) -> Option<&Value>;

    /// Like [`lookup`](Self::lookup), returning `default` as a string value on a miss.
    fn lookup_or<'a>(&'a self, key: &str, default: &str) -> Cow<'a, Value> {
        match self.lookup(key) {
            Some(value) => Cow::Borrowed(value),
            None => Cow::Owned(Value::from(default)),
        }
    }
}

/// Decoding of a single file's contents into a value tree.
pub trait Format: Send + Sync + fmt::Debug {
    /// Name the format is registered under.
    fn name(&self) -> &'static str;

    /// File extension (without the dot) stripped to form the namespace.
    fn extension(&self) -> &'static str;

    /// Decodes a whole file. The top level must be an object.
    fn decode(&self, contents: &[u8]) -> Result<Value, DecodeError>;
}

/// A [`Parser`] backed by a directory of files in format `F`.
#[derive(Debug, Default)]
pub struct FormatParser<F> {
    format: F,
    options: Option<Options>,
    store: TranslationStore,
}

impl<F: Format> FormatParser<F> {
    pub fn new(format: F) -> Self {
        Self {
            format,
            options: None,
            store: TranslationStore::default(),
        }
    }

    /// Everything loaded so far; empty until [`Parser::load`] succeeds.
    pub fn store(&self) -> &TranslationStore {
        &self.store
    }
}

impl<F: Format> Parser for FormatParser<F> {
    fn configure(&mut self, options: &Options) {
        self.options = Some(options.clone());
    }

    fn load(&mut self) -> Result<(), LoadError> {
        let options = self.options.as_ref().ok_or(LoadError::NotConfigured)?;
        debug!(
            format = self.format.name(),
            root = %options.lang_directory().display(),
            "loading language directory"
        );

        // Replace the store only once the whole directory decoded.
        self.store = TranslationStore::load(options.lang_directory(), &self.format)?;
        Ok(())
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        let options = self.options.as_ref()?;
        self.store.resolve(options.default_lang(), key)
    }
}
