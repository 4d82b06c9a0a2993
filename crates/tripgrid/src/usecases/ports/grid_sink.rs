use std::path::Path;

use super::errors::SinkError;

/// Destination for rendered grid text.
///
/// Implementations must leave an existing file at `path` untouched when the
/// write fails.
pub trait GridSink {
    fn write(&self, path: &Path, text: &str) -> Result<(), SinkError>;
}

impl<T: GridSink + ?Sized> GridSink for &T {
    fn write(&self, path: &Path, text: &str) -> Result<(), SinkError> {
        (**self).write(path, text)
    }
}
