use std::path::PathBuf;
use thiserror::Error;

/// Coarse classification of a [`MetadataError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    NotFound,
    Lookup,
    Parse,
    Io,
}

#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("{0}")]
    Config(String),

    #[error("Missing file: {}", .0.display())]
    NotFound(PathBuf),

    #[error("{0}")]
    Lookup(String),

    #[error("Invalid JSON in {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MetadataError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            MetadataError::Config(_) => ErrorKind::Config,
            MetadataError::NotFound(_) => ErrorKind::NotFound,
            MetadataError::Lookup(_) => ErrorKind::Lookup,
            MetadataError::Parse { .. } => ErrorKind::Parse,
            MetadataError::Io(_) => ErrorKind::Io,
        }
    }
}

pub type Result<T> = std::result::Result<T, MetadataError>;
