use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Input file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{} is not valid UTF-8 (invalid byte sequence at offset {offset})", path.display())]
    Encoding { path: PathBuf, offset: usize },
}

impl SourceError {
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => SourceError::NotFound { path },
            _ => SourceError::Read { path, source },
        }
    }

    pub fn operation(&self) -> &'static str {
        match self {
            SourceError::NotFound { .. } | SourceError::Read { .. } => "read",
            SourceError::Encoding { .. } => "decode",
        }
    }

    pub fn path(&self) -> &PathBuf {
        match self {
            SourceError::NotFound { path }
            | SourceError::Read { path, .. }
            | SourceError::Encoding { path, .. } => path,
        }
    }
}

#[derive(Error, Debug)]
pub enum SinkError {
    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SinkError {
    pub fn path(&self) -> &PathBuf {
        match self {
            SinkError::Write { path, .. } => path,
        }
    }
}
