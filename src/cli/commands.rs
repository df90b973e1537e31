//! Dispatch a parsed command line to the runner

use std::io::Write;

use tracing::{debug, instrument};

use crate::application::{IoResultExt, Runner};
use crate::cli::args::Cli;
use crate::cli::error::CliResult;
use crate::config::Settings;

/// Run the script with settings loaded once at startup and return its exit code.
#[instrument(level = "debug", skip(settings, out))]
pub fn execute_command<W: Write + ?Sized>(
    cli: &Cli,
    settings: Settings,
    out: &mut W,
) -> CliResult<i32> {
    debug!(trace_level = %settings.trace_level, "executing");

    let runner = Runner::new(settings);
    let code = runner.run(&cli.invocation(), out)?;
    out.flush().with_context("flush output")?;
    Ok(code)
}
