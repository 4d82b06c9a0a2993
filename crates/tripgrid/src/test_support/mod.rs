//! In-memory port implementations for use case and presenter tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io;
use std::path::Path;
use std::path::PathBuf;

use crate::usecases::ports::GridSink;
use crate::usecases::ports::InputSource;
use crate::usecases::ports::SinkError;
use crate::usecases::ports::SourceDocument;
use crate::usecases::ports::SourceError;

#[derive(Debug, Default)]
pub struct MemorySource {
    files: HashMap<PathBuf, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: impl Into<PathBuf>, text: &str) -> Self {
        self.with_bytes(path, text.as_bytes().to_vec())
    }

    pub fn with_bytes(mut self, path: impl Into<PathBuf>, bytes: Vec<u8>) -> Self {
        self.files.insert(path.into(), bytes);
        self
    }
}

impl InputSource for MemorySource {
    fn read(&self, path: &Path) -> Result<SourceDocument, SourceError> {
        let bytes = self.files.get(path).cloned().ok_or_else(|| {
            SourceError::from_io(path, io::Error::new(io::ErrorKind::NotFound, "no such file"))
        })?;
        SourceDocument::decode(path, bytes)
    }
}

#[derive(Debug, Default)]
pub struct MemorySink {
    files: RefCell<HashMap<PathBuf, String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contents(&self, path: impl AsRef<Path>) -> Option<String> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn is_empty(&self) -> bool {
        self.files.borrow().is_empty()
    }
}

impl GridSink for MemorySink {
    fn write(&self, path: &Path, text: &str) -> Result<(), SinkError> {
        self.files
            .borrow_mut()
            .insert(path.to_path_buf(), text.to_string());
        Ok(())
    }
}

/// Sink that rejects every write, as a full or read-only disk would.
#[derive(Debug, Default)]
pub struct FailingSink;

impl GridSink for FailingSink {
    fn write(&self, path: &Path, _text: &str) -> Result<(), SinkError> {
        Err(SinkError::Write {
            path: path.to_path_buf(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "read-only filesystem"),
        })
    }
}
