#![expect(clippy::print_stderr, reason = "CLI errors are emitted here")]

//! CLI application layer and composition root wiring.

use anyhow::Context;
use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tripgrid_common::Colors;
use tripgrid_common::color_init;
use tripgrid_common::error_codes::exit_codes;
use tripgrid_common::telemetry;

pub mod commands;
pub mod error;

use crate::adapters::OutputFormat;
use crate::adapters::Presenter;
use crate::adapters::RenderReport;
use crate::adapters::create_presenter;
use crate::app::commands::Cli;
use crate::app::error::CliError;
use crate::infra::FsGridSink;
use crate::infra::FsInputSource;
use crate::usecases::LoadedInput;
use crate::usecases::RenderError;
use crate::usecases::RenderUseCase;
use crate::usecases::RenderUseCaseImpl;

const PROGRAM_NAME: &str = "tripgrid";

pub struct Application;

impl Application {
    pub fn new() -> Self {
        Self
    }

    pub fn run(&self) -> Result<i32> {
        let exit_code = match self.execute() {
            Ok(()) => exit_codes::SUCCESS,
            Err(e) => self.handle_error(e),
        };
        Ok(exit_code)
    }

    fn execute(&self) -> Result<()> {
        let cli = Cli::parse();
        let _telemetry = telemetry::init_tracing(&telemetry::LogSettings::from_env(cli.verbose));
        color_init(cli.no_color);
        let format = cli.effective_format();
        let config = cli.render_config();
        debug!(config = ?config, format = ?format, "CLI arguments parsed");

        let usecase = RenderUseCaseImpl::new(FsInputSource, FsGridSink);
        let presenter = create_presenter(format);
        let loaded = usecase
            .load(&config)
            .map_err(|e| self.wrap_error(e, None, format))
            .with_context(|| format!("failed to read {}", config.input.display()))?;

        let output = match usecase.render(&loaded, &config) {
            Ok(output) => output,
            Err(e) => {
                presenter.present_loaded_input(&loaded);
                return Err(self
                    .wrap_error(e, Some(&loaded), format)
                    .context(format!("failed to render {}", config.input.display())));
            }
        };

        presenter.present_report(&RenderReport::from_output(&output));
        Ok(())
    }

    fn wrap_error(
        &self,
        error: RenderError,
        loaded: Option<&LoadedInput>,
        format: OutputFormat,
    ) -> anyhow::Error {
        anyhow::Error::new(CliError::from_render_error(&error, loaded, format))
    }

    fn handle_error(&self, e: anyhow::Error) -> i32 {
        if let Some(cli_error) = find_error::<CliError>(&e) {
            print_cli_error(cli_error);
            return cli_error.exit_code;
        }

        print_cli_error(&CliError::general(OutputFormat::Text, format!("{:#}", e)));
        exit_codes::GENERAL_ERROR
    }
}

impl Default for Application {
    fn default() -> Self {
        Self::new()
    }
}

fn find_error<T: std::error::Error + 'static>(error: &anyhow::Error) -> Option<&T> {
    error.chain().find_map(|source| source.downcast_ref::<T>())
}

fn print_cli_error(error: &CliError) {
    match error.format {
        OutputFormat::Json => {
            if let Some(json) = &error.json {
                eprintln!("{}", json);
            } else {
                let output = serde_json::json!({
                    "success": false,
                    "message": error.message,
                });
                eprintln!(
                    "{}",
                    serde_json::to_string_pretty(&output).unwrap_or_default()
                );
            }
        }
        OutputFormat::Text => {
            eprintln!(
                "{}: {} {}",
                PROGRAM_NAME,
                Colors::error("Error:"),
                error.message
            );
            if let Some(suggestion) = &error.suggestion {
                eprintln!("{} {}", Colors::dim("Suggestion:"), suggestion);
            }
        }
    }
}
