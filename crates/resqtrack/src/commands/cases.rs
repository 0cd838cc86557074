//! Case command handlers.

use tabled::Tabled;

use resqtrack_core::{Case, Client, StatusUpdate, mutate};

use crate::cli::{CasesArgs, CasesCommand, GlobalOpts};
use crate::error::CliError;
use crate::output;

use super::util;

// ── Table row ───────────────────────────────────────────────────────

#[derive(Tabled)]
struct CaseRow {
    #[tabled(rename = "Case ID")]
    id: String,
    #[tabled(rename = "Reporter")]
    reporter: String,
    #[tabled(rename = "Location")]
    location: String,
    #[tabled(rename = "Animal Type")]
    animal: String,
    #[tabled(rename = "Urgency")]
    urgency: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Created At")]
    created_at: String,
}

impl From<&Case> for CaseRow {
    fn from(c: &Case) -> Self {
        Self {
            id: c.case_id.clone(),
            reporter: format!("{}\n{}", c.reporter_name, c.reporter_phone),
            location: c.location.clone(),
            animal: c.animal_type.clone(),
            urgency: c.urgency.clone(),
            status: c.status.clone(),
            created_at: c.created_at.clone(),
        }
    }
}

// ── Handler ─────────────────────────────────────────────────────────

pub async fn handle(client: &Client, args: CasesArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        CasesCommand::List => {
            let cases = client.list_cases().await?;
            let out = output::render_list(
                global.output(),
                &cases,
                "No cases found.",
                |c| CaseRow::from(c),
                |c| c.case_id.clone(),
            );
            output::print_output(&out, global.quiet);
            Ok(())
        }

        CasesCommand::UpdateStatus {
            case_id,
            status,
            hospital,
        } => {
            let update = StatusUpdate::new(case_id, status, util::non_blank(hospital));
            let message = client.update_case_status(&update).await?;
            mutate::confirm(&util::notifier(global), &message, mutate::STATUS_UPDATED);
            Ok(())
        }
    }
}
