// ── Core error types ──
//
// User-facing errors from resqtrack-core. The dashboard itself never lets
// these escape (fetchers and mutators degrade to empty tables and toasts);
// they surface through the CLI, which wants real exit codes.

use thiserror::Error;

use resqtrack_api::Error as ApiError;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Network ──────────────────────────────────────────────────────
    #[error("Cannot reach backend at {url}: {reason}")]
    ConnectionFailed { url: String, reason: String },

    #[error("Backend request timed out")]
    Timeout,

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Backend returned HTTP {status}")]
    Http {
        status: u16,
        message: Option<String>,
    },

    // ── Protocol ─────────────────────────────────────────────────────
    #[error("Invalid response from server: {reason}")]
    InvalidResponse { reason: String },

    // ── Application ──────────────────────────────────────────────────
    #[error("Rejected by backend: {message}")]
    Rejected { message: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<ApiError> for CoreError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Http {
                status: 404,
                message,
            } => CoreError::NotFound {
                message: message.unwrap_or_else(|| "resource".into()),
            },
            ApiError::Http { status, message } => CoreError::Http { status, message },
            ApiError::Transport(ref e) => {
                if e.is_timeout() {
                    CoreError::Timeout
                } else {
                    CoreError::ConnectionFailed {
                        url: e
                            .url()
                            .map_or_else(|| "<unknown>".into(), ToString::to_string),
                        reason: e.to_string(),
                    }
                }
            }
            ApiError::Protocol { reason, body: _ } => CoreError::InvalidResponse { reason },
            ApiError::Application { message } => CoreError::Rejected { message },
            ApiError::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            ApiError::Tls(msg) => CoreError::ConnectionFailed {
                url: String::new(),
                reason: format!("TLS error: {msg}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_keeps_backend_message() {
        let err = CoreError::from(ApiError::Http {
            status: 404,
            message: Some("Case not found".into()),
        });
        assert!(matches!(err, CoreError::NotFound { ref message } if message == "Case not found"));
    }

    #[test]
    fn application_error_becomes_rejection() {
        let err = CoreError::from(ApiError::Application {
            message: "City parameter is required".into(),
        });
        assert_eq!(
            err.to_string(),
            "Rejected by backend: City parameter is required"
        );
    }

    #[test]
    fn protocol_error_drops_body() {
        let err = CoreError::from(ApiError::Protocol {
            reason: "expected value".into(),
            body: "<html>".into(),
        });
        assert!(matches!(err, CoreError::InvalidResponse { ref reason } if reason == "expected value"));
    }
}
