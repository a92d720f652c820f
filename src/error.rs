// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VitalsError {
    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("Project root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Generic error: {0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, VitalsError>;

// Allow `?` on std::io::Error by converting to VitalsError::Io with unknown path.
impl From<std::io::Error> for VitalsError {
    fn from(source: std::io::Error) -> Self {
        VitalsError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}

// Gracefully convert WalkDir errors
impl From<walkdir::Error> for VitalsError {
    fn from(e: walkdir::Error) -> Self {
        VitalsError::Other(e.to_string())
    }
}

impl From<toml::de::Error> for VitalsError {
    fn from(e: toml::de::Error) -> Self {
        VitalsError::Config(e.to_string())
    }
}
