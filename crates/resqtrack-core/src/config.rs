// ── Runtime configuration ──
//
// These types describe how to reach the backend and how the dashboard
// behaves. They never touch disk: the config crate or the CLI builds them
// and hands them in.

use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use resqtrack_api::transport::{TlsMode, TransportConfig};
use resqtrack_api::Client;

use crate::error::CoreError;

/// How long a toast stays on the page.
pub const DEFAULT_TOAST_LIFETIME: Duration = Duration::from_secs(3);

/// TLS verification strategy.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TlsVerification {
    /// System CA store (strict).
    #[default]
    SystemDefaults,
    /// Custom CA certificate file.
    CustomCa(PathBuf),
    /// Skip verification (self-signed development backends).
    DangerAcceptInvalid,
}

/// Where the backend lives and how to talk to it.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Backend base URL (e.g. `http://localhost:5000`).
    pub url: Url,
    pub tls: TlsVerification,
    /// Per-request timeout, the only bound on a hung request.
    pub timeout: Duration,
}

impl BackendConfig {
    /// Build the HTTP client for this backend.
    pub fn connect(&self) -> Result<Client, CoreError> {
        let tls = match &self.tls {
            TlsVerification::SystemDefaults => TlsMode::System,
            TlsVerification::CustomCa(path) => TlsMode::CustomCa(path.clone()),
            TlsVerification::DangerAcceptInvalid => TlsMode::DangerAcceptInvalid,
        };
        let transport = TransportConfig {
            tls,
            timeout: self.timeout,
        };
        Ok(Client::new(self.url.clone(), &transport)?)
    }
}

/// Dashboard behaviour knobs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Toast lifetime before automatic removal.
    pub toast_lifetime: Duration,
    /// Drop a table response when a newer request for the same container
    /// has been issued since. On by default, which departs from the plain
    /// page's last-writer-wins painting; turn it off to get that back.
    pub discard_stale_responses: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            toast_lifetime: DEFAULT_TOAST_LIFETIME,
            discard_stale_responses: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_defaults_discard_stale_responses() {
        let config = DashboardConfig::default();
        assert!(config.discard_stale_responses);
        assert_eq!(config.toast_lifetime, Duration::from_secs(3));
    }
}
