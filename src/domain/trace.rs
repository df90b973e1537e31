//! Trace verbosity and the categories of diagnostic lines it gates

use std::fmt;

use crate::domain::validate::is_numeric;

/// Verbosity of diagnostic console output.
///
/// | Level | Output |
/// |-------|--------|
/// | 0 | nothing |
/// | 1 | routine enter/exit, routine arguments, critical errors |
/// | 2 | level 1 plus debug text, variable dumps and warnings |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct TraceLevel(u32);

impl TraceLevel {
    pub const OFF: Self = Self(0);
    pub const BASIC: Self = Self(1);
    pub const VERBOSE: Self = Self(2);

    pub fn new(level: u32) -> Self {
        Self(level)
    }

    /// Derive a level from a raw environment value.
    ///
    /// Digits-only input is read as a decimal number, saturating at `u32::MAX`.
    /// Anything else, including an absent or empty value, means tracing is off.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some(digits) if is_numeric(digits) => {
                // only overflow can fail here
                Self(digits.parse().unwrap_or(u32::MAX))
            }
            _ => Self::OFF,
        }
    }

    pub fn value(self) -> u32 {
        self.0
    }

    pub fn is_enabled(self) -> bool {
        self.0 > 0
    }

    /// Whether a line of `category` is printed at this level.
    pub fn allows(self, category: TraceCategory) -> bool {
        self >= category.min_level()
    }
}

impl fmt::Display for TraceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Kind of diagnostic line, identified on the console by its leading token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceCategory {
    /// `>  ` entering a routine
    Enter,
    /// `<  ` leaving a routine
    Exit,
    /// `A[n]: ` routine argument
    Argument,
    /// `E: ` critical error
    Error,
    /// `D: ` debugging text
    Debug,
    /// `V: ` variable dump
    Variable,
    /// `W: ` warning
    Warning,
}

impl TraceCategory {
    pub fn min_level(self) -> TraceLevel {
        match self {
            Self::Enter | Self::Exit | Self::Argument | Self::Error => TraceLevel::BASIC,
            Self::Debug | Self::Variable | Self::Warning => TraceLevel::VERBOSE,
        }
    }

    /// Line prefix. `Argument` tokens carry an index and are built by the caller.
    pub fn token(self) -> &'static str {
        match self {
            Self::Enter => ">  ",
            Self::Exit => "<  ",
            Self::Argument => "A",
            Self::Error => "E: ",
            Self::Debug => "D: ",
            Self::Variable => "V: ",
            Self::Warning => "W: ",
        }
    }
}
