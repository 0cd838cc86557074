//! Shared configuration for ResQTrack tools.
//!
//! TOML profiles naming a backend, global defaults, and translation to
//! `resqtrack_core::{BackendConfig, DashboardConfig}`. The CLI layers its
//! flag overrides on top.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use resqtrack_core::{BackendConfig, DashboardConfig, TlsVerification};

/// Backend assumed when nothing is configured.
pub const DEFAULT_BACKEND: &str = "http://localhost:5000";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("unknown profile '{name}'")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level TOML configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Default profile name.
    pub default_profile: Option<String>,

    /// Global defaults.
    #[serde(default)]
    pub defaults: Defaults,

    /// Named backend profiles.
    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some("default".into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Look up a profile by name.
    pub fn profile(&self, name: &str) -> Result<&Profile, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile { name: name.into() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    #[serde(default = "default_color")]
    pub color: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,

    /// Toast lifetime in seconds.
    #[serde(default = "default_toast_secs")]
    pub toast_secs: u64,

    /// Drop table responses superseded by a newer request.
    #[serde(default = "default_discard_stale")]
    pub discard_stale: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            color: default_color(),
            timeout: default_timeout(),
            toast_secs: default_toast_secs(),
            discard_stale: default_discard_stale(),
        }
    }
}

impl Defaults {
    pub fn dashboard_config(&self) -> DashboardConfig {
        DashboardConfig {
            toast_lifetime: Duration::from_secs(self.toast_secs),
            discard_stale_responses: self.discard_stale,
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_color() -> String {
    "auto".into()
}
fn default_timeout() -> u64 {
    30
}
fn default_toast_secs() -> u64 {
    resqtrack_core::DEFAULT_TOAST_LIFETIME.as_secs()
}
fn default_discard_stale() -> bool {
    true
}

/// A named backend profile.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// Backend base URL (e.g., "http://localhost:5000").
    pub backend: String,

    /// Path to custom CA certificate.
    pub ca_cert: Option<PathBuf>,

    /// Skip TLS verification.
    pub insecure: Option<bool>,

    /// Override timeout.
    pub timeout: Option<u64>,
}

impl Profile {
    pub fn new(backend: impl Into<String>) -> Self {
        Self {
            backend: backend.into(),
            ca_cert: None,
            insecure: None,
            timeout: None,
        }
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path via XDG / platform conventions.
pub fn config_path() -> PathBuf {
    ProjectDirs::from("org", "resqtrack", "resqtrack").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("resqtrack");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load the full Config from the canonical file + environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from an explicit file, then `RESQTRACK_*` environment variables.
///
/// Nested keys use a double underscore: `RESQTRACK_DEFAULTS__TIMEOUT=5`.
/// A missing file is not an error.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("RESQTRACK_").split("__"));

    let config: Config = figment.extract()?;
    Ok(config)
}

/// Load config, returning a default if it can't be read.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

/// Serialize config to TOML and write to the canonical config path.
pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(cfg, &path)?;
    Ok(path)
}

pub fn save_config_to(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}

// ── Translation ─────────────────────────────────────────────────────

/// Parse a backend URL, accepting only http(s).
pub fn parse_backend_url(raw: &str) -> Result<url::Url, ConfigError> {
    let url: url::Url = raw.parse().map_err(|_| ConfigError::Validation {
        field: "backend".into(),
        reason: format!("invalid URL: {raw}"),
    })?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::Validation {
            field: "backend".into(),
            reason: format!("expected http or https, got '{other}'"),
        }),
    }
}

/// Build a `BackendConfig` from a profile, falling back to `defaults`.
pub fn profile_to_backend_config(
    profile: &Profile,
    defaults: &Defaults,
) -> Result<BackendConfig, ConfigError> {
    let url = parse_backend_url(&profile.backend)?;

    let tls = if profile.insecure.unwrap_or(false) {
        TlsVerification::DangerAcceptInvalid
    } else if let Some(ref ca_path) = profile.ca_cert {
        TlsVerification::CustomCa(ca_path.clone())
    } else {
        TlsVerification::SystemDefaults
    };

    let timeout = Duration::from_secs(profile.timeout.unwrap_or(defaults.timeout));

    Ok(BackendConfig { url, tls, timeout })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load_config_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("default"));
        assert_eq!(cfg.defaults, Defaults::default());
        assert!(cfg.profiles.is_empty());
    }

    #[test]
    fn file_values_override_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
default_profile = "staging"

[defaults]
timeout = 5
discard_stale = false

[profiles.staging]
backend = "https://staging.resqtrack.example"
insecure = true
"#,
        )
        .unwrap();

        let cfg = load_config_from(&path).unwrap();
        assert_eq!(cfg.default_profile.as_deref(), Some("staging"));
        assert_eq!(cfg.defaults.timeout, 5);
        assert_eq!(cfg.defaults.toast_secs, 3);
        assert!(!cfg.defaults.dashboard_config().discard_stale_responses);

        let profile = cfg.profile("staging").unwrap();
        let backend = profile_to_backend_config(profile, &cfg.defaults).unwrap();
        assert_eq!(backend.url.as_str(), "https://staging.resqtrack.example/");
        assert_eq!(backend.tls, TlsVerification::DangerAcceptInvalid);
        assert_eq!(backend.timeout, Duration::from_secs(5));
    }

    #[test]
    fn save_then_load_preserves_profiles() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        let mut profile = Profile::new(DEFAULT_BACKEND);
        profile.ca_cert = Some(PathBuf::from("/etc/ssl/resq.pem"));
        cfg.profiles.insert("default".into(), profile);
        save_config_to(&cfg, &path).unwrap();

        let loaded = load_config_from(&path).unwrap();
        assert_eq!(loaded, cfg);
        let backend =
            profile_to_backend_config(loaded.profile("default").unwrap(), &loaded.defaults)
                .unwrap();
        assert_eq!(
            backend.tls,
            TlsVerification::CustomCa(PathBuf::from("/etc/ssl/resq.pem"))
        );
    }

    #[test]
    fn unknown_profile_is_reported() {
        let err = Config::default().profile("prod").unwrap_err();
        assert_eq!(err.to_string(), "unknown profile 'prod'");
    }

    #[test]
    fn non_http_backend_is_rejected() {
        assert!(parse_backend_url("ftp://example.org").is_err());
        assert!(parse_backend_url("not a url").is_err());
        assert!(parse_backend_url("http://127.0.0.1:5000").is_ok());
    }
}
