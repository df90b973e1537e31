//! CLI argument definitions using clap

use std::ffi::OsString;

use clap::Parser;
use tracing::debug;

use crate::domain::Invocation;

/// Starting point for shell automation scripts: takes "p1" "p2", traces per WSHTRACE
///
/// clap's own `--help`/`--version` are disabled: the first argument is matched
/// against `-help`, `-?`, `/help` and `/?` by the runner, and every argument,
/// hyphenated or not, is passed through verbatim.
#[derive(Parser, Debug, Default)]
#[command(name = "script-template")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true, disable_version_flag = true)]
pub struct Cli {
    /// Script parameters: "p1" "p2"
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    pub args: Vec<OsString>,
}

impl Cli {
    /// Parse `argv` (program name first) keeping every argument the script was given.
    ///
    /// clap consumes a `--` as its escape token, so the positional list is
    /// always taken from the raw `argv`, not from clap's matches. A command line
    /// clap rejects still reaches the runner and ends on the usage path.
    pub fn parse_raw<I, T>(argv: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
        let mut cli = Self::try_parse_from(argv.iter().cloned()).unwrap_or_else(|e| {
            debug!(kind = ?e.kind(), "command line rejected by clap, passing it through");
            Self::default()
        });
        cli.args = argv.into_iter().skip(1).collect();
        cli
    }

    /// Arguments as strings; invalid unicode is replaced with `U+FFFD`.
    pub fn invocation(&self) -> Invocation {
        Invocation::new(
            self.args
                .iter()
                .map(|a| a.to_string_lossy().into_owned()),
        )
    }
}
