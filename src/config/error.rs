use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("language directory is required but was not set")]
    MissingLangDirectory,

    #[error("no parser registered under the name '{0}'")]
    UnknownParser(String),

    #[error("required options file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("failed to read options file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse options file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("failed to deserialize options: {0}")]
    DeserializeError(#[from] toml::de::Error),
}
