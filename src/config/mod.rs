//! Options loading and management.

mod builder;
mod env;
mod error;
mod file;

pub use builder::{Options, OptionsBuilder, DEFAULT_LANG, DEFAULT_PARSER};
pub use error::ConfigError;
