//! Starting point for two-parameter shell automation scripts.
//!
//! Echoes a banner, reads the trace level from `WSHTRACE`, answers `-help`,
//! `-?`, `/help` and `/?` with a usage line, and otherwise validates that
//! exactly two parameters were given before printing its diagnostic blocks.
//!
//! ```
//! let mut out = Vec::new();
//! let args = vec!["foo".to_string(), "bar".to_string()];
//! let code = script_template::run(&args, Some("abc"), &mut out).unwrap();
//!
//! let out = String::from_utf8(out).unwrap();
//! assert_eq!(code, 0);
//! assert!(out.contains("foo") && out.contains("bar"));
//! ```

use std::io::Write;

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use application::{ApplicationError, ApplicationResult, Runner};
pub use config::{Settings, TRACE_ENV_VAR};
pub use domain::{is_alpha, is_numeric, Invocation, ScriptInfo, TraceLevel};

use infrastructure::MapEnv;

/// Run the script for `args` with `trace_env` standing in for `WSHTRACE`.
///
/// Output goes to `out`; the returned value is the process exit code.
pub fn run<W: Write + ?Sized>(
    args: &[String],
    trace_env: Option<&str>,
    out: &mut W,
) -> ApplicationResult<i32> {
    let env = match trace_env {
        Some(value) => MapEnv::new().with_var(TRACE_ENV_VAR, value),
        None => MapEnv::new(),
    };
    let settings = Settings::load(&env)?;
    Runner::new(settings).run(&Invocation::new(args.iter().cloned()), out)
}
