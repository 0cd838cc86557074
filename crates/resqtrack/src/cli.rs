//! Clap derive structures for the `resqtrack` CLI.
//!
//! Defines the command tree, global flags, and shared types.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use resqtrack_config::Defaults;

// ── Top-Level CLI ────────────────────────────────────────────────────

/// resqtrack -- admin dashboard for the ResQTrack rescue backend
#[derive(Debug, Parser)]
#[command(
    name = "resqtrack",
    version,
    about = "Administer ResQTrack rescue cases, donations and hospitals",
    long_about = "Command-line admin dashboard for the ResQTrack animal-rescue backend.\n\n\
        Lists cases, donations and partner hospitals, updates case status,\n\
        searches the hospital directory, and renders the full admin page as HTML.",
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalOpts,

    #[command(subcommand)]
    pub command: Command,
}

// ── Global Options ───────────────────────────────────────────────────

#[derive(Debug, Args)]
pub struct GlobalOpts {
    /// Backend profile to use
    #[arg(long, short = 'p', env = "RESQTRACK_PROFILE", global = true)]
    pub profile: Option<String>,

    /// Backend URL (overrides profile)
    #[arg(long, short = 'b', env = "RESQTRACK_BACKEND", global = true)]
    pub backend: Option<String>,

    /// Output format [default: from config, else table]
    #[arg(long, short = 'o', env = "RESQTRACK_OUTPUT", global = true)]
    pub output: Option<OutputFormat>,

    /// When to use color output [default: from config, else auto]
    #[arg(long, global = true)]
    pub color: Option<ColorMode>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Skip confirmation prompts
    #[arg(long, short = 'y', global = true)]
    pub yes: bool,

    /// Accept self-signed TLS certificates
    #[arg(long, short = 'k', env = "RESQTRACK_INSECURE", global = true)]
    pub insecure: bool,

    /// Request timeout in seconds [default: from profile or config]
    #[arg(long, env = "RESQTRACK_TIMEOUT", global = true)]
    pub timeout: Option<u64>,
}

impl GlobalOpts {
    /// Fill unset output/color flags from the config file's defaults.
    pub fn apply_defaults(&mut self, defaults: &Defaults) {
        if self.output.is_none() {
            self.output = OutputFormat::from_str(&defaults.output, true).ok();
        }
        if self.color.is_none() {
            self.color = ColorMode::from_str(&defaults.color, true).ok();
        }
    }

    pub fn output(&self) -> OutputFormat {
        self.output.unwrap_or(OutputFormat::Table)
    }

    pub fn color(&self) -> ColorMode {
        self.color.unwrap_or(ColorMode::Auto)
    }
}

// ── Output & Color Enums ─────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty table (default, interactive)
    Table,
    /// Pretty-printed JSON
    Json,
    /// Compact single-line JSON
    JsonCompact,
    /// YAML
    Yaml,
    /// Plain text, one value per line (scripting)
    Plain,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    /// Auto-detect (color if terminal is interactive)
    Auto,
    /// Always emit color codes
    Always,
    /// Never emit color codes
    Never,
}

// ── Top-Level Command Enum ───────────────────────────────────────────

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show dashboard counters
    Stats,

    /// List rescue cases and update their status
    #[command(alias = "c")]
    Cases(CasesArgs),

    /// List donations
    #[command(alias = "d")]
    Donations(DonationsArgs),

    /// Manage partner hospitals and search the directory
    #[command(alias = "h")]
    Hospitals(HospitalsArgs),

    /// Render the admin dashboard page as HTML
    Dashboard(DashboardArgs),

    /// Manage CLI configuration and profiles
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CASES
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CasesArgs {
    #[command(subcommand)]
    pub command: CasesCommand,
}

#[derive(Debug, Subcommand)]
pub enum CasesCommand {
    /// List all cases
    #[command(alias = "ls")]
    List,

    /// Set a case's status
    UpdateStatus {
        /// Case ID
        case_id: String,

        /// New status (e.g. "In Progress", "Resolved")
        status: String,

        /// Hospital the animal was taken to
        #[arg(long)]
        hospital: Option<String>,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DONATIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DonationsArgs {
    #[command(subcommand)]
    pub command: DonationsCommand,
}

#[derive(Debug, Subcommand)]
pub enum DonationsCommand {
    /// List all donations
    #[command(alias = "ls")]
    List,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  HOSPITALS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct HospitalsArgs {
    #[command(subcommand)]
    pub command: HospitalsCommand,
}

#[derive(Debug, Subcommand)]
pub enum HospitalsCommand {
    /// List partner hospitals
    #[command(alias = "ls")]
    List,

    /// Add a partner hospital
    Add {
        /// Hospital name
        #[arg(long)]
        name: String,

        /// Street address
        #[arg(long)]
        address: String,

        /// City or area
        #[arg(long)]
        location: String,

        /// Contact phone
        #[arg(long)]
        phone: Option<String>,

        /// Latitude
        #[arg(long)]
        lat: Option<String>,

        /// Longitude
        #[arg(long)]
        lon: Option<String>,
    },

    /// Search the external hospital directory by city
    Search {
        /// City name
        city: String,
    },

    /// Search by city and add chosen results as partner hospitals
    Import {
        /// City name
        city: String,

        /// Add every result without prompting
        #[arg(long)]
        all: bool,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  DASHBOARD
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct DashboardArgs {
    /// Write the page here instead of stdout
    #[arg(long, short = 'O')]
    pub out: Option<PathBuf>,

    /// Also run a hospital directory search for this city
    #[arg(long)]
    pub search: Option<String>,
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  CONFIG
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Create initial config file with guided setup
    Init,

    /// Display current resolved configuration
    Show,

    /// Print the config file path
    Path,

    /// Set the active profile's backend URL
    SetBackend {
        /// Backend base URL
        url: String,
    },
}

// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━
//  COMPLETIONS
// ━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━

#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: clap_complete::Shell,
}
