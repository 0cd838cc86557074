//! Render the admin page headlessly.
//!
//! Drives the page controller exactly as a browser would on load (plus an
//! optional city search) and writes the resulting document. Failed panels
//! degrade to placeholders and error toasts; the command itself succeeds.

use resqtrack_core::page::ids;
use resqtrack_core::{AdminController, Client, Page, PageEvent, Surface, ToastBoard};

use crate::cli::{DashboardArgs, GlobalOpts};
use crate::config::Config;
use crate::error::CliError;
use crate::output;

use super::util;

const TITLE: &str = "ResQTrack Admin Dashboard";

pub async fn handle(
    client: &Client,
    args: DashboardArgs,
    global: &GlobalOpts,
    cfg: &Config,
) -> Result<(), CliError> {
    let dashboard = cfg.defaults.dashboard_config();
    let page = Page::admin();
    let toasts = ToastBoard::new(dashboard.toast_lifetime);
    // Terminal lines are written as raised; the board only feeds the document.
    let notifier = (util::notifier(global), &toasts);
    let controller = AdminController::new(client, &page, &notifier, dashboard);

    controller.handle(PageEvent::Loaded).await;
    if let Some(city) = args.search {
        page.set_input_value(ids::HOSPITAL_CITY, &city);
        controller.handle(PageEvent::SearchRequested).await;
    }

    let document = page.to_document(TITLE, &toasts.active());

    match args.out {
        Some(path) => {
            std::fs::write(&path, document)?;
            tracing::info!(path = %path.display(), "dashboard written");
        }
        None => output::print_output(&document, global.quiet),
    }
    Ok(())
}
