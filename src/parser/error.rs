use std::path::PathBuf;
use thiserror::Error;

/// Failure while loading a language directory. Any of these aborts the whole load.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LoadError {
    #[error("parser was loaded before being configured")]
    NotConfigured,

    #[error("failed to read language directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("bad directory layout, expected <lang>/<file>: {path}")]
    Layout { path: PathBuf },

    #[error("failed to read language file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode language file '{path}': {source}")]
    Decode { path: PathBuf, source: DecodeError },
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DecodeError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("language file is not valid UTF-8: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    #[error("invalid TOML: {0}")]
    Toml(#[from] ::toml::de::Error),

    #[error("top-level value is not an object")]
    NotAnObject,
}
