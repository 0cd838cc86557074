//! Config subcommand handlers.

use dialoguer::Input;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config, DEFAULT_BACKEND, Profile};
use crate::error::CliError;
use crate::output;

use super::util::prompt_err;

/// Format config as TOML for display.
fn format_config(cfg: &Config) -> String {
    toml::to_string_pretty(cfg).unwrap_or_else(|e| format!("# failed to render config: {e}"))
}

// ── Handler ─────────────────────────────────────────────────────────

pub fn handle(args: ConfigArgs, global: &GlobalOpts, mut cfg: Config) -> Result<(), CliError> {
    match args.command {
        // ── Init: interactive wizard ────────────────────────────────
        ConfigCommand::Init => {
            let config_path = config::config_path();
            eprintln!("ResQTrack CLI configuration wizard");
            eprintln!("   Config path: {}\n", config_path.display());

            let profile_name: String = Input::new()
                .with_prompt("Profile name")
                .default("default".into())
                .interact_text()
                .map_err(prompt_err)?;

            let backend: String = Input::new()
                .with_prompt("Backend URL")
                .default(DEFAULT_BACKEND.into())
                .validate_with(|input: &String| {
                    config::parse_backend_url(input)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()
                .map_err(prompt_err)?;

            cfg.profiles
                .insert(profile_name.clone(), Profile::new(backend));
            cfg.default_profile = Some(profile_name.clone());

            let path = config::save_config(&cfg)?;

            eprintln!("\n✓ Configuration written to {}", path.display());
            eprintln!("  Active profile: {profile_name}");
            eprintln!("\n  Test it: resqtrack stats");
            Ok(())
        }

        // ── Show ────────────────────────────────────────────────────
        ConfigCommand::Show => {
            let out = output::render_single(global.output(), &cfg, format_config, |c| {
                config::active_profile_name(global, c)
            });
            output::print_output(&out, global.quiet);
            Ok(())
        }

        // ── Path ────────────────────────────────────────────────────
        ConfigCommand::Path => {
            output::print_output(&config::config_path().display().to_string(), false);
            Ok(())
        }

        // ── Set-backend <url> ───────────────────────────────────────
        ConfigCommand::SetBackend { url } => {
            config::parse_backend_url(&url)?;
            let profile_name = config::active_profile_name(global, &cfg);
            cfg.profiles
                .entry(profile_name.clone())
                .and_modify(|p| p.backend.clone_from(&url))
                .or_insert_with(|| Profile::new(url.clone()));
            if cfg.default_profile.is_none() {
                cfg.default_profile = Some(profile_name.clone());
            }
            let path = config::save_config(&cfg)?;
            if !global.quiet {
                eprintln!("✓ Profile '{profile_name}' now uses {url}");
                eprintln!("  Saved to {}", path.display());
            }
            Ok(())
        }
    }
}
