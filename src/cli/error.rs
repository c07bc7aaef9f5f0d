//! CLI-level errors (wraps application errors)

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;
use crate::exitcode;

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Application(#[from] ApplicationError),

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Io { .. } => exitcode::NOINPUT,
            CliError::Application(e) => match e {
                ApplicationError::Config { .. } => exitcode::CONFIG,
                ApplicationError::Scenario { .. } => exitcode::DATAERR,
                ApplicationError::Domain(DomainError::TicketUnavailable) => exitcode::UNAVAILABLE,
                ApplicationError::Domain(_) => exitcode::REFUSED,
            },
        }
    }
}
