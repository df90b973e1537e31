use std::io;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use script_template::cli::{execute_command, output, Cli, CliError};
use script_template::domain::TraceLevel;
use script_template::infrastructure::RealProcessEnv;
use script_template::Settings;

fn main() {
    let cli = Cli::parse_raw(std::env::args_os());

    let settings = match Settings::load(&RealProcessEnv) {
        Ok(settings) => settings,
        Err(e) => exit_with(CliError::from(e)),
    };
    setup_logging(settings.trace_level);

    let mut stdout = io::stdout().lock();
    match execute_command(&cli, settings, &mut stdout) {
        Ok(code) => std::process::exit(code),
        Err(e) => exit_with(e),
    }
}

fn exit_with(e: CliError) -> ! {
    output::error(&e);
    std::process::exit(e.exit_code());
}

/// Operator log on stderr; its verbosity follows the script trace level.
fn setup_logging(level: TraceLevel) {
    let filter = match level.value() {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();

    match filter {
        LevelFilter::INFO => tracing::info!("Debug mode: info"),
        LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
        LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
        _ => {}
    }
}
