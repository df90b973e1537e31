//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => crate::exitcode::CONFIG,
                ApplicationError::Output { .. } => crate::exitcode::IOERR,
                ApplicationError::Domain(_) => crate::exitcode::FAILURE,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DomainError;
    use crate::exitcode;

    #[test]
    fn given_each_application_error_when_exit_code_then_mapped() {
        let config = CliError::from(ApplicationError::Config {
            message: "bad".into(),
        });
        let output = CliError::from(ApplicationError::Output {
            context: "write".into(),
            source: std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"),
        });
        let domain = CliError::from(ApplicationError::from(DomainError::ArgumentCount {
            expected: 2,
            actual: 3,
        }));

        assert_eq!(config.exit_code(), exitcode::CONFIG);
        assert_eq!(output.exit_code(), exitcode::IOERR);
        assert_eq!(domain.exit_code(), exitcode::FAILURE);
    }

    #[test]
    fn given_domain_error_when_displayed_then_message_passes_through() {
        let err = CliError::from(ApplicationError::from(DomainError::ArgumentCount {
            expected: 2,
            actual: 0,
        }));
        assert_eq!(err.to_string(), "expected 2 arguments, got 0");
    }
}
