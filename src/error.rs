use crate::config::ConfigError;
use crate::parser::LoadError;
use thiserror::Error;

/// Top-level error type for the dragon-i18n library.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to load translations: {0}")]
    Load(#[from] LoadError),

    #[error("i18n requires options")]
    MissingOptions,
}
