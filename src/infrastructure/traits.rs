//! I/O boundary traits for testability
//!
//! The process environment is read through [`ProcessEnv`] so that settings can be
//! built from a fixed map in tests instead of the real environment.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Read access to the environment of the running process.
pub trait ProcessEnv: Send + Sync {
    /// Value of an environment variable, `None` if unset or not valid unicode.
    fn var(&self, key: &str) -> Option<String>;

    /// Path of the running script/executable.
    fn script_path(&self) -> String;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real process environment.
#[derive(Debug, Default)]
pub struct RealProcessEnv;

impl ProcessEnv for RealProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn script_path(&self) -> String {
        std::env::current_exe()
            .ok()
            .or_else(|| std::env::args_os().next().map(PathBuf::from))
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
    }
}

/// Fixed, in-memory environment.
#[derive(Debug, Clone)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
    script_path: String,
}

impl Default for MapEnv {
    fn default() -> Self {
        Self {
            vars: BTreeMap::new(),
            script_path: env!("CARGO_PKG_NAME").to_string(),
        }
    }
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    pub fn with_script_path(mut self, path: impl Into<String>) -> Self {
        self.script_path = path.into();
        self
    }
}

impl ProcessEnv for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn script_path(&self) -> String {
        self.script_path.clone()
    }
}
