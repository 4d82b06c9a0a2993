use std::fs;
use std::path::Path;

use tracing::debug;

use crate::usecases::ports::InputSource;
use crate::usecases::ports::SourceDocument;
use crate::usecases::ports::SourceError;

/// Reads the whole input file in one call; the handle is closed before decoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsInputSource;

impl InputSource for FsInputSource {
    fn read(&self, path: &Path) -> Result<SourceDocument, SourceError> {
        let bytes = fs::read(path).map_err(|e| SourceError::from_io(path, e))?;
        debug!(path = %path.display(), bytes = bytes.len(), "Read input file");
        SourceDocument::decode(path, bytes)
    }
}
