//! CLI entrypoint for tripgrid.

use anyhow::Result;
use tripgrid::Application;

fn main() -> Result<()> {
    let app = Application::new();
    let exit_code = app.run()?;
    std::process::exit(exit_code);
}
