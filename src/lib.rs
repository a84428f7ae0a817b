//! Nested translation lookup over a directory of per-language files.
//!
//! ```text
//! language/
//! ├── en-us/error.json
//! └── zh-cn/error.json   {"err2": {"bb": {"cc": "..."}}}
//! ```
//!
//! With `default_lang = "zh-cn"`, the key `error.err2.bb.cc` reads the `error`
//! namespace of `zh-cn` and descends through `err2` and `bb`.

pub mod config;
pub mod engine;
mod error;
pub mod parser;
pub mod registry;
pub mod store;
pub mod value;
pub mod walker;

pub use config::{ConfigError, Options, OptionsBuilder};
pub use engine::{I18n, I18nBuilder};
pub use error::Error;
pub use parser::{
    DecodeError, Format, FormatParser, JsonFormat, JsonParser, LoadError, Parser, TomlFormat,
    TomlParser,
};
pub use registry::ParserRegistry;
pub use store::{normalize_lang, TranslationStore};
pub use value::Value;
