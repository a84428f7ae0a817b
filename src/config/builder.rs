use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::env::load_env_vars;
use super::file::load_options_file;
use super::ConfigError;

/// Language used by lookups when none is configured.
pub const DEFAULT_LANG: &str = "zh-cn";

/// Format driver used when none is configured.
pub const DEFAULT_PARSER: &str = "json";

/// Settings consumed by the [`I18n`](crate::I18n) facade and handed to the
/// selected parser through [`Parser::configure`](crate::Parser::configure).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    lang_directory: PathBuf,
    default_lang: String,
    default_parser: String,
}

impl Options {
    /// Creates a new options builder.
    pub fn builder() -> OptionsBuilder {
        OptionsBuilder::default()
    }

    /// Root directory holding one sub-directory per language.
    pub fn lang_directory(&self) -> &Path {
        &self.lang_directory
    }

    /// Language every lookup reads from, as configured (not normalized).
    pub fn default_lang(&self) -> &str {
        &self.default_lang
    }

    /// Name of the registered parser that loads the language files.
    pub fn default_parser(&self) -> &str {
        &self.default_parser
    }
}

/// Shape of an options table, whether it came from a file or the environment.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawOptions {
    lang_directory: Option<PathBuf>,
    default_lang: Option<String>,
    default_parser: Option<String>,
}

#[derive(Debug)]
enum OptionsSource {
    File { path: PathBuf, required: bool },
    Env { prefix: String, separator: String },
}

/// Builder for [`Options`].
///
/// Layered sources (TOML files and environment variables) are merged in
/// registration order, later ones overriding earlier ones. Values set directly
/// on the builder override every layered source.
///
/// ## Example
///
/// ```no_run
/// use dragon_i18n::Options;
///
/// let options = Options::builder()
///     .with_file("config/i18n.toml", false)
///     .with_env("I18N", "__")
///     .lang_directory("./language")
///     .build()?;
///
/// assert_eq!(options.default_parser(), "json");
/// # Ok::<(), dragon_i18n::ConfigError>(())
/// ```
#[derive(Debug, Default)]
#[must_use = "builders do nothing until .build() is called"]
pub struct OptionsBuilder {
    sources: Vec<OptionsSource>,
    overrides: RawOptions,
}

impl OptionsBuilder {
    /// Adds a TOML options file.
    ///
    /// If `required` is `true`, the build will fail if the file doesn't exist.
    /// Optional files that are missing are silently skipped.
    pub fn with_file(mut self, path: impl AsRef<Path>, required: bool) -> Self {
        self.sources.push(OptionsSource::File {
            path: path.as_ref().to_path_buf(),
            required,
        });
        self
    }

    /// Reads options from environment variables with the given prefix,
    /// e.g. `I18N__LANG_DIRECTORY` for prefix `I18N` and separator `__`.
    pub fn with_env(mut self, prefix: impl Into<String>, separator: impl Into<String>) -> Self {
        self.sources.push(OptionsSource::Env {
            prefix: prefix.into(),
            separator: separator.into(),
        });
        self
    }

    pub fn lang_directory(mut self, path: impl AsRef<Path>) -> Self {
        self.overrides.lang_directory = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn default_lang(mut self, lang: impl Into<String>) -> Self {
        self.overrides.default_lang = Some(lang.into());
        self
    }

    pub fn default_parser(mut self, name: impl Into<String>) -> Self {
        self.overrides.default_parser = Some(name.into());
        self
    }

    /// Merges every source, applies explicit values and fills in defaults.
    ///
    /// Fails with [`ConfigError::MissingLangDirectory`] when no source set
    /// the language directory.
    pub fn build(self) -> Result<Options, ConfigError> {
        let mut merged = toml::Table::new();

        for source in self.sources {
            match source {
                OptionsSource::File { path, required } => {
                    if let Some(table) = load_options_file(&path, required)? {
                        merged.extend(table);
                    }
                }
                OptionsSource::Env { prefix, separator } => {
                    load_env_vars(&mut merged, &prefix, &separator);
                }
            }
        }

        let layered: RawOptions = toml::Value::Table(merged).try_into()?;
        let overrides = self.overrides;

        let lang_directory = overrides
            .lang_directory
            .or(layered.lang_directory)
            .ok_or(ConfigError::MissingLangDirectory)?;

        Ok(Options {
            lang_directory,
            default_lang: overrides
                .default_lang
                .or(layered.default_lang)
                .unwrap_or_else(|| DEFAULT_LANG.to_string()),
            default_parser: overrides
                .default_parser
                .or(layered.default_parser)
                .unwrap_or_else(|| DEFAULT_PARSER.to_string()),
        })
    }
}
