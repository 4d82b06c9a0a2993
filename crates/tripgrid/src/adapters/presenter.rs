#![expect(clippy::print_stdout, reason = "CLI output is emitted here")]

//! CLI output presenter.

use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;
use tripgrid_common::Colors;
use tripgrid_domain::Fingerprint;
use tripgrid_domain::GROUP_SIZE;
use tripgrid_domain::Triplet;
use tripgrid_domain::TripletList;

use crate::usecases::LoadedInput;
use crate::usecases::RenderOutput;

/// Number of triplets shown at each end of the preview.
pub const PREVIEW_LEN: usize = 5;

pub const SECTION_HEADER: &str = "=== RENDERED OUTPUT ===";

/// Output format for CLI commands
#[derive(Clone, Copy, Debug, ValueEnum, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// View of a finished run, borrowed from the use case output.
#[derive(Debug, Clone, Copy)]
pub struct RenderReport<'a> {
    pub input: &'a Path,
    pub output: &'a Path,
    pub fingerprint: &'a Fingerprint,
    pub token_count: usize,
    pub triplets: &'a [Triplet],
    pub lines: &'a [String],
    pub width: usize,
    pub height: usize,
    pub written: bool,
}

impl<'a> RenderReport<'a> {
    pub fn from_output(output: &'a RenderOutput) -> Self {
        Self {
            input: &output.input,
            output: &output.output,
            fingerprint: &output.fingerprint,
            token_count: output.token_count,
            triplets: &output.triplets,
            lines: &output.rendered.lines,
            width: output.rendered.width,
            height: output.rendered.height,
            written: output.written_to.is_some(),
        }
    }

    pub fn head(&self) -> TripletList<'a> {
        TripletList::head(self.triplets, PREVIEW_LEN)
    }

    pub fn tail(&self) -> TripletList<'a> {
        TripletList::tail(self.triplets, PREVIEW_LEN)
    }
}

pub trait Presenter {
    fn present_report(&self, report: &RenderReport<'_>);

    /// Reports what was read when a later stage failed.
    fn present_loaded_input(&self, loaded: &LoadedInput);
}

pub struct TextPresenter;

impl TextPresenter {
    /// Fingerprint and token count, the first two lines of every text report.
    pub fn input_lines(
        input: &Path,
        fingerprint: &Fingerprint,
        token_count: usize,
    ) -> [String; 2] {
        [
            format!("SHA256 of {}: {}", input.display(), fingerprint),
            format!(
                "Non-empty tokens: {}  (should be divisible by {})",
                token_count, GROUP_SIZE
            ),
        ]
    }

    pub fn lines(report: &RenderReport<'_>) -> Vec<String> {
        let mut out = Vec::with_capacity(report.lines.len() + 10);
        out.extend(Self::input_lines(
            report.input,
            report.fingerprint,
            report.token_count,
        ));
        out.push(format!("Triplets: {}", report.triplets.len()));
        out.push(format!("First {} triplets: {}", PREVIEW_LEN, report.head()));
        out.push(format!("Last {} triplets:  {}", PREVIEW_LEN, report.tail()));
        out.push(format!(
            "Grid size: width={}, height={}",
            report.width, report.height
        ));
        out.push(String::new());
        out.push(Colors::bold(SECTION_HEADER));
        out.extend(report.lines.iter().cloned());
        out.push(String::new());
        if report.written {
            out.push(format!(
                "Saved rendered output to {}",
                report.output.display()
            ));
        } else {
            out.push(format!(
                "{} rendered output not written to {}",
                Colors::warning("Check only:"),
                report.output.display()
            ));
        }
        out
    }
}

impl Presenter for TextPresenter {
    fn present_report(&self, report: &RenderReport<'_>) {
        for line in Self::lines(report) {
            println!("{}", line);
        }
    }

    fn present_loaded_input(&self, loaded: &LoadedInput) {
        let lines = Self::input_lines(&loaded.input, &loaded.fingerprint, loaded.token_count());
        for line in lines {
            println!("{}", line);
        }
    }
}

pub struct JsonPresenter;

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    success: bool,
    input: String,
    fingerprint: &'a Fingerprint,
    algorithm: &'static str,
    token_count: usize,
    triplet_count: usize,
    first: &'a [Triplet],
    last: &'a [Triplet],
    width: usize,
    height: usize,
    lines: &'a [String],
    output: String,
    written: bool,
}

impl JsonPresenter {
    pub fn to_value(report: &RenderReport<'_>) -> serde_json::Value {
        let doc = JsonReport {
            success: true,
            input: report.input.display().to_string(),
            fingerprint: report.fingerprint,
            algorithm: Fingerprint::ALGORITHM,
            token_count: report.token_count,
            triplet_count: report.triplets.len(),
            first: report.head().as_slice(),
            last: report.tail().as_slice(),
            width: report.width,
            height: report.height,
            lines: report.lines,
            output: report.output.display().to_string(),
            written: report.written,
        };
        serde_json::to_value(doc).unwrap_or_default()
    }
}

impl Presenter for JsonPresenter {
    fn present_report(&self, report: &RenderReport<'_>) {
        println!(
            "{}",
            serde_json::to_string_pretty(&Self::to_value(report)).unwrap_or_default()
        );
    }

    /// Stdout stays a single JSON document; the error payload carries the input summary.
    fn present_loaded_input(&self, _loaded: &LoadedInput) {}
}

pub fn create_presenter(format: OutputFormat) -> Box<dyn Presenter> {
    match format {
        OutputFormat::Json => Box::new(JsonPresenter),
        OutputFormat::Text => Box::new(TextPresenter),
    }
}
