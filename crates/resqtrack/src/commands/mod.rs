//! Command handlers, one module per top-level subcommand.

pub mod cases;
pub mod config_cmd;
pub mod dashboard;
pub mod donations;
pub mod hospitals;
pub mod stats;
pub mod util;

use resqtrack_core::Client;

use crate::cli::{Command, GlobalOpts};
use crate::config::Config;
use crate::error::CliError;

/// Route a backend-bound command to its handler.
pub async fn dispatch(
    cmd: Command,
    client: &Client,
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<(), CliError> {
    match cmd {
        Command::Stats => stats::handle(client, global).await,
        Command::Cases(args) => cases::handle(client, args, global).await,
        Command::Donations(args) => donations::handle(client, args, global).await,
        Command::Hospitals(args) => hospitals::handle(client, args, global).await,
        Command::Dashboard(args) => dashboard::handle(client, args, global, cfg).await,
        Command::Config(_) | Command::Completions(_) => {
            unreachable!("handled before a backend is resolved")
        }
    }
}
