//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map startup errors (`ConfigError`, `ClientError`) to exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (Unix standard: 128 + SIGINT).

use splunk_catalog_client::ClientError;
use splunk_catalog_config::ConfigError;

use crate::cancellation::SIGINT_EXIT_CODE;

/// Structured exit codes for splunk-catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure, including any failed catalog operation.
    GeneralError = 1,

    /// Network, TLS, or timeout failure.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Invalid configuration or arguments.
    ///
    /// Scripts should fix the input and not retry.
    ValidationError = 5,

    /// SIGINT/Ctrl+C.
    Interrupted = SIGINT_EXIT_CODE,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Timeout(_) | ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) if e.is_connect() || e.is_timeout() => {
                ExitCode::ConnectionError
            }
            ClientError::HttpError(_) => ExitCode::GeneralError,

            ClientError::MissingArgument(_)
            | ClientError::InvalidArgument { .. }
            | ClientError::InvalidResponse(_)
            | ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,

            ClientError::ApiError { .. } => ExitCode::GeneralError,
            ClientError::Cancelled => ExitCode::Interrupted,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
            if cause.downcast_ref::<ConfigError>().is_some() {
                return ExitCode::ValidationError;
            }
        }
        ExitCode::GeneralError
    }
}
