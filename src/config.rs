//! Startup settings, built once and handed to the runner
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults (tracing off)
//! 2. Environment variable: `WSHTRACE`
//!
//! The environment is read through [`ProcessEnv`], never directly, so tests can
//! supply a fixed map.

use config::{Config, ConfigError, Environment};
use serde::Deserialize;
use tracing::{debug, instrument};

use crate::application::ApplicationError;
use crate::domain::{ScriptInfo, TraceLevel, SCRIPT_VERSION};
use crate::infrastructure::ProcessEnv;

/// Environment variable holding the trace level.
pub const TRACE_ENV_VAR: &str = "WSHTRACE";

/// Raw settings as read from the environment, before validation.
///
/// The config crate lowercases environment keys, hence `wshtrace`.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub wshtrace: Option<String>,
}

/// Process-wide settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Verbosity of console diagnostics
    pub trace_level: TraceLevel,
    /// Runtime metadata of the running script
    pub script: ScriptInfo,
}

impl Settings {
    pub fn new(trace_level: TraceLevel, script: ScriptInfo) -> Self {
        Self {
            trace_level,
            script,
        }
    }

    /// Load settings from the given environment.
    ///
    /// A malformed `WSHTRACE` is not an error: it means tracing is off.
    #[instrument(level = "debug", skip(env))]
    pub fn load(env: &dyn ProcessEnv) -> Result<Self, ApplicationError> {
        let raw = load_raw_settings(env)?;
        let trace_level = TraceLevel::parse(raw.wshtrace.as_deref());
        if let Some(value) = raw.wshtrace.as_deref() {
            if !trace_level.is_enabled() {
                debug!("{TRACE_ENV_VAR}={value:?} does not enable tracing");
            }
        }

        let script = ScriptInfo::from_path(&env.script_path(), SCRIPT_VERSION);
        debug!(?trace_level, script = %script.path, "settings loaded");

        Ok(Self::new(trace_level, script))
    }
}

/// Collect the `WSHTRACE` entry of `env` into [`RawSettings`].
fn load_raw_settings(env: &dyn ProcessEnv) -> Result<RawSettings, ApplicationError> {
    let source: config::Map<String, String> = env
        .var(TRACE_ENV_VAR)
        .map(|value| (TRACE_ENV_VAR.to_string(), value))
        .into_iter()
        .collect();

    let config = Config::builder()
        .add_source(Environment::default().source(Some(source)))
        .build()
        .map_err(config_err)?;

    config.try_deserialize().map_err(config_err)
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
