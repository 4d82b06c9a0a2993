//! Render use case: read, fingerprint, tokenize, parse, rasterize, write.

use std::path::PathBuf;

use thiserror::Error;
use tracing::debug;
use tracing::info;
use tripgrid_common::ErrorCategory;
use tripgrid_domain::DEFAULT_FILLER;
use tripgrid_domain::Fingerprint;
use tripgrid_domain::GlyphGrid;
use tripgrid_domain::GridError;
use tripgrid_domain::Rendered;
use tripgrid_domain::Triplet;
use tripgrid_domain::parse_triplets;
use tripgrid_domain::tokenize;

use crate::usecases::ports::GridSink;
use crate::usecases::ports::InputSource;
use crate::usecases::ports::SinkError;
use crate::usecases::ports::SourceError;

pub const DEFAULT_INPUT: &str = "data.txt";
pub const DEFAULT_OUTPUT: &str = "out.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    #[default]
    Write,
    /// Verify and render only; the output file is left alone.
    Check,
}

/// Everything one run needs to know. Built once by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filler: char,
    pub mode: WriteMode,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            filler: DEFAULT_FILLER,
            mode: WriteMode::Write,
        }
    }
}

/// Input that has been read, fingerprinted and split into tokens.
///
/// Available before parsing, so it can be reported even when a later stage fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedInput {
    pub input: PathBuf,
    pub fingerprint: Fingerprint,
    pub tokens: Vec<String>,
}

impl LoadedInput {
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOutput {
    pub input: PathBuf,
    pub fingerprint: Fingerprint,
    pub token_count: usize,
    pub triplets: Vec<Triplet>,
    pub rendered: Rendered,
    /// Set when the grid was written.
    pub written_to: Option<PathBuf>,
    pub output: PathBuf,
}

#[derive(Error, Debug)]
pub enum RenderError {
    #[error(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Sink(#[from] SinkError),
}

impl RenderError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RenderError::Source(SourceError::NotFound { .. }) => ErrorCategory::NotFound,
            RenderError::Source(SourceError::Read { .. }) => ErrorCategory::External,
            RenderError::Source(SourceError::Encoding { .. }) => ErrorCategory::InvalidInput,
            RenderError::Grid(_) => ErrorCategory::InvalidInput,
            RenderError::Sink(_) => ErrorCategory::Output,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RenderError::Source(SourceError::NotFound { .. }) => "input_not_found",
            RenderError::Source(SourceError::Read { .. }) => "input_unreadable",
            RenderError::Source(SourceError::Encoding { .. }) => "invalid_encoding",
            RenderError::Grid(e) => e.kind(),
            RenderError::Sink(_) => "output_unwritable",
        }
    }

    pub fn suggestion(&self) -> String {
        match self {
            RenderError::Source(SourceError::NotFound { path }) => format!(
                "Create {} or pass the input path as the first argument.",
                path.display()
            ),
            RenderError::Source(SourceError::Read { .. }) => {
                "Check that the input file is readable by the current user.".to_string()
            }
            RenderError::Source(SourceError::Encoding { .. }) => {
                "Re-save the input file as UTF-8.".to_string()
            }
            RenderError::Grid(e) => e.suggestion(),
            RenderError::Sink(e) => format!(
                "Check that {} is writable, or choose another path with --output.",
                e.path().display()
            ),
        }
    }

    pub fn is_retryable(&self) -> bool {
        false
    }
}

pub trait RenderUseCase {
    /// Reads and tokenizes the input.
    fn load(&self, config: &RenderConfig) -> Result<LoadedInput, RenderError>;

    /// Parses and rasterizes loaded input, then writes it unless in check mode.
    fn render(
        &self,
        loaded: &LoadedInput,
        config: &RenderConfig,
    ) -> Result<RenderOutput, RenderError>;
}

pub struct RenderUseCaseImpl<S: InputSource, K: GridSink> {
    source: S,
    sink: K,
}

impl<S: InputSource, K: GridSink> RenderUseCaseImpl<S, K> {
    pub fn new(source: S, sink: K) -> Self {
        Self { source, sink }
    }
}

impl<S: InputSource, K: GridSink> RenderUseCase for RenderUseCaseImpl<S, K> {
    fn load(&self, config: &RenderConfig) -> Result<LoadedInput, RenderError> {
        let document = self.source.read(&config.input)?;
        info!(
            path = %config.input.display(),
            bytes = document.byte_len(),
            fingerprint = %document.fingerprint,
            "Input read"
        );

        let tokens: Vec<String> = tokenize(&document.raw)
            .into_iter()
            .map(str::to_owned)
            .collect();
        debug!(tokens = tokens.len(), "Input tokenized");

        Ok(LoadedInput {
            input: config.input.clone(),
            fingerprint: document.fingerprint,
            tokens,
        })
    }

    fn render(
        &self,
        loaded: &LoadedInput,
        config: &RenderConfig,
    ) -> Result<RenderOutput, RenderError> {
        let triplets = parse_triplets(&loaded.tokens)?;
        debug!(triplets = triplets.len(), "Triplets parsed");

        let grid = GlyphGrid::from_triplets(&triplets)?;
        let (width, height) = grid.dimensions();
        debug!(width, height, "Grid allocated");
        let rendered = grid.render(config.filler);

        let written_to = match config.mode {
            WriteMode::Write => {
                self.sink.write(&config.output, &rendered.to_text())?;
                info!(path = %config.output.display(), "Rendered grid written");
                Some(config.output.clone())
            }
            WriteMode::Check => {
                debug!("Check mode, skipping write");
                None
            }
        };

        Ok(RenderOutput {
            input: loaded.input.clone(),
            fingerprint: loaded.fingerprint.clone(),
            token_count: loaded.token_count(),
            triplets,
            rendered,
            written_to,
            output: config.output.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FailingSink;
    use crate::test_support::MemorySink;
    use crate::test_support::MemorySource;
    use std::path::Path;

    fn config() -> RenderConfig {
        RenderConfig::default()
    }

    fn run<S: InputSource, K: GridSink>(
        usecase: &RenderUseCaseImpl<S, K>,
        config: &RenderConfig,
    ) -> Result<RenderOutput, RenderError> {
        let loaded = usecase.load(config)?;
        usecase.render(&loaded, config)
    }

    #[test]
    fn test_render_scenario_a_writes_output() {
        let source = MemorySource::new().with_file(DEFAULT_INPUT, "0\nA\n0\n1\nB\n0\n0\nC\n1\n");
        let sink = MemorySink::new();
        let usecase = RenderUseCaseImpl::new(source, &sink);

        let output = run(&usecase, &config()).unwrap();

        assert_eq!(output.token_count, 9);
        assert_eq!(output.triplets.len(), 3);
        assert_eq!(output.rendered.lines, vec!["AB", "C "]);
        assert_eq!((output.rendered.width, output.rendered.height), (2, 2));
        assert_eq!(output.written_to.as_deref(), Some(Path::new(DEFAULT_OUTPUT)));
        assert_eq!(sink.contents(DEFAULT_OUTPUT).as_deref(), Some("AB\nC "));
    }

    #[test]
    fn test_render_fingerprint_covers_raw_bytes() {
        let raw = "3\r\nX\r\n2\r\n";
        let source = MemorySource::new().with_file(DEFAULT_INPUT, raw);
        let sink = MemorySink::new();
        let output = run(&RenderUseCaseImpl::new(source, &sink), &config())
            .unwrap();

        assert_eq!(output.fingerprint, Fingerprint::of_bytes(raw.as_bytes()));
        assert_eq!(output.rendered.lines, vec!["    ", "    ", "   X"]);
    }

    #[test]
    fn test_render_bad_count_writes_nothing() {
        let source = MemorySource::new().with_file(DEFAULT_INPUT, "0\nA\n0\n1\n");
        let sink = MemorySink::new();
        let err = run(&RenderUseCaseImpl::new(source, &sink), &config())
            .unwrap_err();

        assert!(matches!(
            err,
            RenderError::Grid(GridError::TokenCount { count: 4 })
        ));
        assert_eq!(err.category(), ErrorCategory::InvalidInput);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_load_succeeds_before_parse_fails() {
        let raw = "0\nA\n0\n1\n";
        let source = MemorySource::new().with_file(DEFAULT_INPUT, raw);
        let sink = MemorySink::new();
        let usecase = RenderUseCaseImpl::new(source, &sink);

        let loaded = usecase.load(&config()).unwrap();
        assert_eq!(loaded.token_count(), 4);
        assert_eq!(loaded.fingerprint, Fingerprint::of_bytes(raw.as_bytes()));
        assert_eq!(loaded.input, PathBuf::from(DEFAULT_INPUT));

        let err = usecase.render(&loaded, &config()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Grid(GridError::TokenCount { count: 4 })
        ));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_render_oversized_grid_writes_nothing() {
        let source = MemorySource::new().with_file(DEFAULT_INPUT, "1000000000\nA\n9\n");
        let sink = MemorySink::new();
        let err = run(&RenderUseCaseImpl::new(source, &sink), &config()).unwrap_err();

        assert_eq!(err.kind(), "too_large");
        assert_eq!(err.category(), ErrorCategory::InvalidInput);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_render_empty_input_writes_nothing() {
        let source = MemorySource::new().with_file(DEFAULT_INPUT, "\n  \n");
        let sink = MemorySink::new();
        let err = run(&RenderUseCaseImpl::new(source, &sink), &config())
            .unwrap_err();

        assert!(matches!(err, RenderError::Grid(GridError::EmptyInput)));
        assert_eq!(err.kind(), "empty_input");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_render_missing_input() {
        let sink = MemorySink::new();
        let err = run(&RenderUseCaseImpl::new(MemorySource::new(), &sink), &config())
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::NotFound);
        assert!(err.suggestion().contains(DEFAULT_INPUT));
        assert!(sink.is_empty());
    }

    #[test]
    fn test_render_invalid_utf8() {
        let source = MemorySource::new().with_bytes(DEFAULT_INPUT, vec![b'1', 0xc3, 0x28]);
        let sink = MemorySink::new();
        let err = run(&RenderUseCaseImpl::new(source, &sink), &config())
            .unwrap_err();

        assert_eq!(err.kind(), "invalid_encoding");
        assert_eq!(err.category(), ErrorCategory::InvalidInput);
    }

    #[test]
    fn test_render_check_mode_skips_write() {
        let source = MemorySource::new().with_file(DEFAULT_INPUT, "0\nA\n0\n");
        let sink = MemorySink::new();
        let cfg = RenderConfig {
            mode: WriteMode::Check,
            ..config()
        };

        let output = run(&RenderUseCaseImpl::new(source, &sink), &cfg).unwrap();

        assert!(output.written_to.is_none());
        assert_eq!(output.rendered.lines, vec!["A"]);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_render_uses_configured_paths_and_filler() {
        let source = MemorySource::new().with_file("art/in.txt", "0\n.\n0\n1\n░\n0\n");
        let sink = MemorySink::new();
        let cfg = RenderConfig {
            input: PathBuf::from("art/in.txt"),
            output: PathBuf::from("art/out.txt"),
            filler: '.',
            mode: WriteMode::Write,
        };

        let output = run(&RenderUseCaseImpl::new(source, &sink), &cfg).unwrap();

        assert_eq!(output.input, PathBuf::from("art/in.txt"));
        assert_eq!(sink.contents("art/out.txt").as_deref(), Some(" ░"));
    }

    #[test]
    fn test_render_sink_failure_is_output_error() {
        let source = MemorySource::new().with_file(DEFAULT_INPUT, "0\nA\n0\n");
        let err = run(&RenderUseCaseImpl::new(source, FailingSink), &config())
            .unwrap_err();

        assert_eq!(err.category(), ErrorCategory::Output);
        assert_eq!(err.kind(), "output_unwritable");
        assert!(err.suggestion().contains("--output"));
        assert!(!err.is_retryable());
    }
}
