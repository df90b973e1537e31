//! Domain entities: invocation, bound parameters and script metadata

use crate::domain::error::DomainError;

/// First-argument tokens that request the usage message (compared lowercased).
pub const HELP_FLAGS: [&str; 4] = ["-help", "-?", "/help", "/?"];

/// Number of positional parameters the script takes.
pub const REQUIRED_ARGUMENTS: usize = 2;

/// Version reported in the banner and the runtime block.
pub const SCRIPT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Second banner line.
pub const SCRIPT_ATTRIBUTION: &str = concat!(
    "script-template project, licensed under ",
    env!("CARGO_PKG_LICENSE"),
    "."
);

/// True if `arg` is one of [`HELP_FLAGS`], ignoring case.
pub fn is_help_flag(arg: &str) -> bool {
    let lowered = arg.to_lowercase();
    HELP_FLAGS.contains(&lowered.as_str())
}

/// Arguments supplied at process start, in order, without the program name.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Invocation {
    args: Vec<String>,
}

impl Invocation {
    pub fn new<I, S>(args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    /// Only the first argument is inspected; anything after it is ignored.
    pub fn is_help_request(&self) -> bool {
        self.args.first().is_some_and(|a| is_help_flag(a))
    }

    /// Validate the argument count and bind the two parameters.
    pub fn bind(&self) -> Result<ScriptParameters, DomainError> {
        match self.args.as_slice() {
            [p1, p2] => Ok(ScriptParameters {
                parameter1: p1.clone(),
                parameter2: p2.clone(),
            }),
            _ => Err(DomainError::ArgumentCount {
                expected: REQUIRED_ARGUMENTS,
                actual: self.args.len(),
            }),
        }
    }
}

/// The two validated positional parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptParameters {
    pub parameter1: String,
    pub parameter2: String,
}

/// Standard runtime metadata of the running script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptInfo {
    /// Full path as reported by the process
    pub path: String,
    /// File name, e.g. `Template.js`
    pub name: String,
    /// File name up to its first `.`, e.g. `Template`
    pub name_no_ext: String,
    /// `path` with `name` removed; keeps the trailing separator
    pub folder: String,
    pub version: String,
}

impl ScriptInfo {
    /// Split a script path into its parts. Both `/` and `\` count as separators.
    pub fn from_path(path: &str, version: &str) -> Self {
        let name = path.rsplit(['/', '\\']).next().unwrap_or(path).to_string();
        let folder = path[..path.len() - name.len()].to_string();
        let name_no_ext = match name.find('.') {
            Some(i) => name[..i].to_string(),
            None => name.clone(),
        };
        Self {
            path: path.to_string(),
            name,
            name_no_ext,
            folder,
            version: version.to_string(),
        }
    }
}
