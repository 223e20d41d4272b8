use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read mapping file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse field mappings: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid field mapping: {0}")]
    InvalidMapping(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
