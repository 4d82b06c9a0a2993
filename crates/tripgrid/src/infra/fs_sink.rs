use std::ffi::OsString;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use tracing::debug;
use tracing::warn;

use crate::usecases::ports::GridSink;
use crate::usecases::ports::SinkError;

/// Writes through a sibling temp file renamed into place, so a failed write
/// never leaves a truncated output behind.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsGridSink;

impl GridSink for FsGridSink {
    fn write(&self, path: &Path, text: &str) -> Result<(), SinkError> {
        let to_sink_error = |source: std::io::Error| SinkError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_sink_error)?;
        }

        let tmp_path = temp_path_for(path);
        if let Err(e) = fs::write(&tmp_path, text) {
            discard(&tmp_path);
            return Err(to_sink_error(e));
        }
        if let Err(e) = fs::rename(&tmp_path, path) {
            discard(&tmp_path);
            return Err(to_sink_error(e));
        }

        debug!(path = %path.display(), bytes = text.len(), "Wrote output file");
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("tripgrid-output"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn discard(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Err(e) if e.kind() != std::io::ErrorKind::NotFound => {
            warn!(path = %tmp_path.display(), error = %e, "Failed to remove temp file");
        }
        _ => {}
    }
}
