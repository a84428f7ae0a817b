//! The lookup facade tying options, registry and parser together.

use std::borrow::Cow;

use tracing::debug;

use crate::config::{ConfigError, Options};
use crate::parser::Parser;
use crate::registry::ParserRegistry;
use crate::value::Value;
use crate::Error;

/// Loaded translations for one language directory.
///
/// Built once through [`I18n::builder`] or [`I18n::new`]; construction picks
/// the configured parser, loads every language file and fails on the first
/// error. Lookups afterwards are plain reads.
///
/// ## Example
///
/// ```no_run
/// use dragon_i18n::{I18n, Options};
///
/// let i18n = I18n::new(
///     Options::builder()
///         .lang_directory("./language")
///         .default_lang("en-us")
///         .build()?,
/// )?;
///
/// let title = i18n.get_or("error.err2.bb.cc", "missing");
/// println!("{title}");
/// # Ok::<(), dragon_i18n::Error>(())
/// ```
#[derive(Debug)]
pub struct I18n {
    options: Options,
    parser: Box<dyn Parser>,
}

impl I18n {
    /// Creates a new builder for constructing an `I18n`.
    pub fn builder() -> I18nBuilder {
        I18nBuilder {
            options: None,
            registry: None,
        }
    }

    /// Builds an `I18n` using the built-in parsers.
    pub fn new(options: Options) -> Result<Self, Error> {
        Self::builder().with_options(options).build()
    }

    /// Resolves a dotted key against the default language.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.parser.lookup(key)
    }

    /// Resolves a dotted key, returning `default` on a miss.
    pub fn get_or<'a>(&'a self, key: &str, default: &str) -> Cow<'a, Value> {
        self.parser.lookup_or(key, default)
    }

    /// Resolves a dotted key to text. Objects and arrays are not text.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.get(key)? {
            Value::Object(_) | Value::Array(_) => None,
            value => Some(value.to_string()),
        }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Name of the parser that loaded the translations.
    pub fn parser_name(&self) -> &str {
        self.options.default_parser()
    }
}

/// Builder for constructing an [`I18n`].
#[derive(Debug)]
#[must_use = "builders do nothing until .build() is called"]
pub struct I18nBuilder {
    options: Option<Options>,
    registry: Option<ParserRegistry>,
}

impl I18nBuilder {
    /// Attaches the options, usually the result of
    /// [`Options::builder().build()`](crate::OptionsBuilder::build).
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Uses `registry` to find the parser instead of
    /// [`ParserRegistry::with_defaults`].
    pub fn with_registry(mut self, registry: ParserRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Selects the parser, configures it and loads the language directory.
    ///
    /// Returns an error if no options were provided, the parser name is not
    /// registered, or loading fails.
    pub fn build(self) -> Result<I18n, Error> {
        let options = self.options.ok_or(Error::MissingOptions)?;
        let registry = self.registry.unwrap_or_else(ParserRegistry::with_defaults);

        let name = options.default_parser();
        let mut parser = registry
            .get(name)
            .ok_or_else(|| ConfigError::UnknownParser(name.to_string()))?;
        debug!(parser = name, lang = options.default_lang(), "selected parser");

        parser.configure(&options);
        parser.load()?;

        Ok(I18n { options, parser })
    }
}
