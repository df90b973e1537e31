//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Domain errors represent invocation rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("expected {expected} arguments, got {actual}")]
    ArgumentCount { expected: usize, actual: usize },
}
