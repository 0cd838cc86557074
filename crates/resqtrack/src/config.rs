//! CLI configuration: a thin wrapper around `resqtrack_config` that layers
//! `GlobalOpts` flag overrides (--backend, --insecure, --timeout) on top.

use std::time::Duration;

use resqtrack_core::{BackendConfig, TlsVerification};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use resqtrack_config::{
    Config, DEFAULT_BACKEND, Profile, config_path, load_config, load_config_or_default,
    parse_backend_url, save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Build the `BackendConfig` for this invocation.
///
/// Flag > profile > defaults. A profile named explicitly with `--profile`
/// must exist; otherwise a missing profile falls back to `--backend` or
/// the local development backend.
pub fn resolve_backend(global: &GlobalOpts, config: &Config) -> Result<BackendConfig, CliError> {
    let profile_name = active_profile_name(global, config);

    let mut backend = match config.profiles.get(&profile_name) {
        Some(profile) => resqtrack_config::profile_to_backend_config(profile, &config.defaults)?,
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name,
                available: available_profiles(config),
            });
        }
        None => BackendConfig {
            url: parse_backend_url(DEFAULT_BACKEND)?,
            tls: TlsVerification::SystemDefaults,
            timeout: Duration::from_secs(config.defaults.timeout),
        },
    };

    if let Some(ref url) = global.backend {
        backend.url = parse_backend_url(url)?;
    }
    if global.insecure {
        backend.tls = TlsVerification::DangerAcceptInvalid;
    }
    if let Some(secs) = global.timeout {
        backend.timeout = Duration::from_secs(secs);
    }

    Ok(backend)
}

fn available_profiles(config: &Config) -> String {
    if config.profiles.is_empty() {
        return "(none)".into();
    }
    config.profiles.keys().cloned().collect::<Vec<_>>().join(", ")
}
