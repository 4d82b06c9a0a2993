//! Tracing setup.
//!
//! Stdout belongs to the report, so log lines go to stderr or, when
//! `TRIPGRID_LOG=<path>` is set, are appended to that file. The level is
//! `warn`, or `debug` with `--verbose`; a non-empty `RUST_LOG` replaces either.
//! `TRIPGRID_LOG_FORMAT=json` switches to one JSON object per line.

use std::fs::OpenOptions;
use std::io;
use std::io::IsTerminal;
use std::path::Path;
use std::path::PathBuf;

use tracing::Subscriber;
use tracing::warn;
use tracing_appender::non_blocking::NonBlocking;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

pub const LOG_FILE_ENV: &str = "TRIPGRID_LOG";
pub const LOG_FORMAT_ENV: &str = "TRIPGRID_LOG_FORMAT";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(|v| v.trim().to_ascii_lowercase()).as_deref() {
            Some("json") => LogFormat::Json,
            _ => LogFormat::Text,
        }
    }
}

/// Logging knobs gathered from the command line and the environment.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogSettings {
    pub verbose: bool,
    /// Filter directives from `RUST_LOG`.
    pub directives: Option<String>,
    pub file: Option<PathBuf>,
    pub format: LogFormat,
}

impl LogSettings {
    pub fn from_env(verbose: bool) -> Self {
        Self {
            verbose,
            directives: std::env::var(EnvFilter::DEFAULT_ENV)
                .ok()
                .filter(|d| !d.trim().is_empty()),
            file: std::env::var_os(LOG_FILE_ENV)
                .filter(|p| !p.is_empty())
                .map(PathBuf::from),
            format: LogFormat::parse(std::env::var(LOG_FORMAT_ENV).ok().as_deref()),
        }
    }

    fn default_level(&self) -> &'static str {
        if self.verbose { "debug" } else { "warn" }
    }

    /// `RUST_LOG` directives when they parse, the verbosity level otherwise.
    fn env_filter(&self) -> EnvFilter {
        self.directives
            .as_deref()
            .and_then(|d| EnvFilter::try_new(d).ok())
            .unwrap_or_else(|| EnvFilter::new(self.default_level()))
    }
}

/// Keeps the background file writer alive; drop it last so buffered lines flush.
#[derive(Debug)]
pub struct TelemetryGuard {
    _writer: Option<WorkerGuard>,
}

pub fn init_tracing(settings: &LogSettings) -> TelemetryGuard {
    let mut file_error = None;
    let (writer, guard, ansi) = match settings.file.as_deref().map(file_writer) {
        Some(Ok((file, guard))) => (BoxMakeWriter::new(file), Some(guard), false),
        Some(Err(err)) => {
            file_error = Some(err);
            stderr_writer()
        }
        None => stderr_writer(),
    };

    let subscriber = build_subscriber(settings.env_filter(), settings.format, writer, ansi);
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return TelemetryGuard { _writer: None };
    }

    if let (Some(err), Some(path)) = (file_error, settings.file.as_deref()) {
        warn!(path = %path.display(), error = %err, "Cannot open log file, logging to stderr");
    }

    TelemetryGuard { _writer: guard }
}

fn stderr_writer() -> (BoxMakeWriter, Option<WorkerGuard>, bool) {
    (
        BoxMakeWriter::new(io::stderr),
        None,
        io::stderr().is_terminal(),
    )
}

/// Appends to `path`, creating it if needed, through a background writer thread.
fn file_writer(path: &Path) -> io::Result<(NonBlocking, WorkerGuard)> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(tracing_appender::non_blocking(file))
}

fn build_subscriber(
    filter: EnvFilter,
    format: LogFormat,
    writer: BoxMakeWriter,
    ansi: bool,
) -> Box<dyn Subscriber + Send + Sync> {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer);
    match format {
        LogFormat::Json => Box::new(builder.with_ansi(false).json().finish()),
        LogFormat::Text => Box::new(builder.with_ansi(ansi).finish()),
    }
}
