use thiserror::Error;

/// Top-level error type for the `resqtrack-api` crate.
///
/// Every request funnels through the same pipeline (status check, body
/// read, JSON parse, `success` flag), and each stage has its own variant.
/// [`Error::kind`] collapses them into the three classes consumers care
/// about: network, protocol and application failures.
#[derive(Debug, Error)]
pub enum Error {
    // ── Network ─────────────────────────────────────────────────────
    /// The backend answered with a non-2xx HTTP status.
    ///
    /// `message` carries the envelope's `message` when the error body
    /// happens to be a well-formed envelope (e.g. a 404 "Case not found").
    #[error("HTTP error! status: {status}{}", detail(.message.as_deref()))]
    Http {
        status: u16,
        message: Option<String>,
    },

    /// HTTP transport error (connection refused, DNS failure, timeout, etc.)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    // ── Protocol ────────────────────────────────────────────────────
    /// The body was not JSON, or did not have the `{success, data|message}`
    /// envelope shape. Keeps the raw body for debugging.
    #[error("Invalid response from server")]
    Protocol { reason: String, body: String },

    // ── Application ─────────────────────────────────────────────────
    /// Well-formed envelope with `success: false`.
    #[error("{message}")]
    Application { message: String },

    // ── Client construction ─────────────────────────────────────────
    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client build failure.
    #[error("TLS error: {0}")]
    Tls(String),
}

fn detail(message: Option<&str>) -> String {
    message.map(|m| format!(" ({m})")).unwrap_or_default()
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Non-OK status or transport failure.
    Network,
    /// Malformed or non-JSON body.
    Protocol,
    /// `success: false` from the backend.
    Application,
}

impl Error {
    /// Classify this error into the network / protocol / application taxonomy.
    ///
    /// Client construction failures count as network failures: no request
    /// ever reached the backend.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Http { .. } | Self::Transport(_) | Self::InvalidUrl(_) | Self::Tls(_) => {
                ErrorKind::Network
            }
            Self::Protocol { .. } => ErrorKind::Protocol,
            Self::Application { .. } => ErrorKind::Application,
        }
    }

    /// Returns `true` if the request timed out in the transport.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }

    /// Returns `true` if the backend answered 404.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Http { status: 404, .. })
    }
}
