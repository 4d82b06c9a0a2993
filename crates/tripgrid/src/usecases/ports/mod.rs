pub mod errors;
pub mod grid_sink;
pub mod input_source;

pub use errors::{SinkError, SourceError};
pub use grid_sink::GridSink;
pub use input_source::{InputSource, SourceDocument};
