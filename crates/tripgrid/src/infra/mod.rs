//! Filesystem adapters for the use case ports.

mod fs_sink;
mod fs_source;

pub use fs_sink::FsGridSink;
pub use fs_source::FsInputSource;
