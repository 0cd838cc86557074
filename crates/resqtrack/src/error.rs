//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with
//! actionable help text and a process exit code.

use miette::Diagnostic;
use thiserror::Error;

use resqtrack_config::ConfigError;
use resqtrack_core::{ApiError, CoreError};

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const REJECTED: i32 = 6;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
    pub const PROTOCOL: i32 = 9;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to backend at {url}")]
    #[diagnostic(
        code(resqtrack::connection_failed),
        help(
            "Check that the backend is running and reachable.\n\
             Reason: {reason}\n\
             Try: resqtrack --backend http://localhost:5000 stats"
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(resqtrack::timeout),
        help("Increase timeout with --timeout or check backend responsiveness.")
    )]
    Timeout,

    // ── Backend responses ────────────────────────────────────────────
    #[error("Not found: {message}")]
    #[diagnostic(code(resqtrack::not_found), help("Run: resqtrack cases list"))]
    NotFound { message: String },

    #[error("HTTP error! status: {status}")]
    #[diagnostic(code(resqtrack::http))]
    Http {
        status: u16,
        #[help]
        message: Option<String>,
    },

    #[error("Invalid response from server: {reason}")]
    #[diagnostic(
        code(resqtrack::protocol),
        help("The backend answered with something other than a JSON envelope.\nRun with -vvv to see the response body.")
    )]
    InvalidResponse { reason: String },

    #[error("{message}")]
    #[diagnostic(code(resqtrack::rejected))]
    Rejected { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(resqtrack::validation))]
    Validation { field: String, reason: String },

    #[error("Operation '{action}' requires confirmation")]
    #[diagnostic(
        code(resqtrack::confirmation_required),
        help("Use --all or --yes (-y) in non-interactive contexts.")
    )]
    NonInteractiveRequiresYes { action: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(resqtrack::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: resqtrack config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error(transparent)]
    #[diagnostic(code(resqtrack::config))]
    Config(Box<ConfigError>),

    // ── IO ───────────────────────────────────────────────────────────
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::InvalidResponse { .. } => exit_code::PROTOCOL,
            Self::Rejected { .. } => exit_code::REJECTED,
            Self::Validation { .. } | Self::NonInteractiveRequiresYes { .. } => exit_code::USAGE,
            Self::Http { .. } | Self::ProfileNotFound { .. } | Self::Config(_) | Self::Io(_) => {
                exit_code::GENERAL
            }
        }
    }
}

// ── CoreError → CliError mapping ─────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Timeout => Self::Timeout,
            CoreError::NotFound { message } => Self::NotFound { message },
            CoreError::Http { status, message } => Self::Http { status, message },
            CoreError::InvalidResponse { reason } => Self::InvalidResponse { reason },
            CoreError::Rejected { message } => Self::Rejected { message },
            CoreError::Config { message } => Self::Validation {
                field: "backend".into(),
                reason: message,
            },
        }
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        CoreError::from(err).into()
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            other => Self::Config(Box::new(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn core_errors_map_to_exit_codes() {
        let cases = [
            (
                CoreError::ConnectionFailed {
                    url: "http://localhost:5000".into(),
                    reason: "refused".into(),
                },
                exit_code::CONNECTION,
            ),
            (CoreError::Timeout, exit_code::TIMEOUT),
            (
                CoreError::NotFound {
                    message: "Case not found".into(),
                },
                exit_code::NOT_FOUND,
            ),
            (
                CoreError::InvalidResponse {
                    reason: "expected value".into(),
                },
                exit_code::PROTOCOL,
            ),
            (
                CoreError::Rejected {
                    message: "Invalid status".into(),
                },
                exit_code::REJECTED,
            ),
            (
                CoreError::Http {
                    status: 500,
                    message: None,
                },
                exit_code::GENERAL,
            ),
        ];
        for (core, code) in cases {
            assert_eq!(CliError::from(core).exit_code(), code);
        }
    }

    #[test]
    fn config_validation_is_a_usage_error() {
        let err = CliError::from(ConfigError::Validation {
            field: "backend".into(),
            reason: "invalid URL: nope".into(),
        });
        assert_eq!(err.exit_code(), exit_code::USAGE);
    }
}
