use clap::Parser;
use clap::ValueHint;
use std::path::PathBuf;

use crate::adapters::OutputFormat;
use crate::usecases::DEFAULT_INPUT;
use crate::usecases::DEFAULT_OUTPUT;
use crate::usecases::RenderConfig;
use crate::usecases::WriteMode;
use tripgrid_domain::DEFAULT_FILLER;

const LONG_ABOUT: &str = "\
Verify a triplet file and render it onto a text grid.\n\
\n\
The input holds one token per non-blank line, in groups of three:\n\
x coordinate, glyph, y coordinate. The file is fingerprinted (SHA-256),\n\
checked, rasterized onto a width = max(x)+1 by height = max(y)+1 grid,\n\
printed, and saved to the output file.";

const AFTER_LONG_HELP: &str = r#"INPUT FORMAT:
    0        x of the first triplet
    A        glyph
    0        y
    1        x of the second triplet
    B
    0

EXAMPLES:
    tripgrid                          # data.txt -> out.txt
    tripgrid art.txt -o art.out       # explicit paths
    tripgrid --check art.txt          # verify and print, write nothing
    tripgrid --json | jq .fingerprint"#;

#[derive(Parser, Debug)]
#[command(name = "tripgrid")]
#[command(author, version)]
#[command(about = "Verify (x, glyph, y) triplet files and render them onto a text grid")]
#[command(long_about = LONG_ABOUT)]
#[command(after_long_help = AFTER_LONG_HELP)]
pub struct Cli {
    /// Triplet file to read
    #[arg(
        value_name = "INPUT",
        value_hint = ValueHint::FilePath,
        env = "TRIPGRID_INPUT",
        default_value = DEFAULT_INPUT
    )]
    pub input: PathBuf,

    /// Where to write the rendered grid
    #[arg(
        short,
        long,
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        env = "TRIPGRID_OUTPUT",
        default_value = DEFAULT_OUTPUT
    )]
    pub output: PathBuf,

    /// Glyph rendered as blank space in the output
    #[arg(long, value_name = "CHAR", default_value_t = DEFAULT_FILLER)]
    pub filler: char,

    /// Verify and print the grid without writing the output file
    #[arg(long)]
    pub check: bool,

    /// Output format (text or json)
    #[arg(
        short,
        long,
        value_enum,
        value_name = "FORMAT",
        default_value_t = OutputFormat::Text,
        help_heading = "Output Options"
    )]
    pub format: OutputFormat,

    /// Shorthand for --format json
    #[arg(long, help_heading = "Output Options")]
    pub json: bool,

    /// Disable colored output (also respects NO_COLOR)
    #[arg(
        long,
        env = "NO_COLOR",
        value_parser = clap::builder::FalseyValueParser::new(),
        help_heading = "Output Options"
    )]
    pub no_color: bool,

    /// Enable debug logging on stderr
    #[arg(short, long, help_heading = "Debug Options")]
    pub verbose: bool,
}

impl Cli {
    pub fn effective_format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            self.format
        }
    }

    pub fn render_config(&self) -> RenderConfig {
        RenderConfig {
            input: self.input.clone(),
            output: self.output.clone(),
            filler: self.filler,
            mode: if self.check {
                WriteMode::Check
            } else {
                WriteMode::Write
            },
        }
    }
}
