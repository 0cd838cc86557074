// ── Admin page controller ──
//
// Turns page events into fetches, mutations and repaints. Every
// dependency is handed in; the controller holds no globals and owns only
// the per-container request generations.

use tracing::{debug, trace};

use resqtrack_api::{HospitalSearchResult, NewHospital, StatusUpdate};

use crate::backend::Backend;
use crate::config::DashboardConfig;
use crate::fetch::{self, normalize_city};
use crate::generation::{RenderGenerations, RenderTicket};
use crate::mutate;
use crate::notify::{Notifier, Severity};
use crate::page::{Surface, ids};
use crate::view::{
    RowAction, TableView, cases_view, donations_view, format, hospitals_view, render,
    search_results_view,
};

/// Shown instead of searching when the city field is blank.
pub const EMPTY_CITY_MESSAGE: &str = "Please enter a city name";

/// Generation key for the stats panel, which has no single container.
const STATS_PANEL: &str = "stats";

/// A key press the controller cares about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Enter,
    Escape,
    Other(String),
}

impl From<&str> for Key {
    fn from(key: &str) -> Self {
        match key {
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            other => Self::Other(other.to_owned()),
        }
    }
}

/// Something that happened on the admin page.
#[derive(Debug, Clone, PartialEq)]
pub enum PageEvent {
    /// Initial page load.
    Loaded,
    StatusFormSubmitted,
    HospitalFormSubmitted,
    /// The search button was pressed.
    SearchRequested,
    /// A key went down while `target` had focus.
    KeyPressed { target: String, key: Key },
    AddFromSearch(HospitalSearchResult),
    OpenStatusModal { case_id: String },
    CloseModal(String),
    /// A click landed on a modal's backdrop.
    BackdropClicked,
}

impl From<RowAction> for PageEvent {
    fn from(action: RowAction) -> Self {
        match action {
            RowAction::UpdateStatus { case_id } => Self::OpenStatusModal { case_id },
            RowAction::AddHospital(result) => Self::AddFromSearch(result),
        }
    }
}

/// Controller for the admin dashboard.
pub struct AdminController<'a, B, S, N> {
    backend: &'a B,
    surface: &'a S,
    notifier: &'a N,
    config: DashboardConfig,
    generations: RenderGenerations,
}

impl<'a, B, S, N> AdminController<'a, B, S, N>
where
    B: Backend,
    S: Surface,
    N: Notifier,
{
    pub fn new(backend: &'a B, surface: &'a S, notifier: &'a N, config: DashboardConfig) -> Self {
        Self {
            backend,
            surface,
            notifier,
            config,
            generations: RenderGenerations::new(),
        }
    }

    /// Handle one page event to completion.
    pub async fn handle(&self, event: PageEvent) {
        debug!(?event, "page event");
        match event {
            PageEvent::Loaded => self.load().await,
            PageEvent::StatusFormSubmitted => self.submit_status_form().await,
            PageEvent::HospitalFormSubmitted => self.submit_hospital_form().await,
            PageEvent::SearchRequested => self.search().await,
            PageEvent::KeyPressed { target, key } => match key {
                Key::Enter if target == ids::HOSPITAL_CITY => self.search().await,
                Key::Escape => self.close_all_modals(),
                _ => {}
            },
            PageEvent::AddFromSearch(result) => self.add_from_search(&result).await,
            PageEvent::OpenStatusModal { case_id } => self.open_status_modal(&case_id),
            PageEvent::CloseModal(modal) => self.surface.hide_modal(&modal),
            PageEvent::BackdropClicked => self.close_all_modals(),
        }
    }

    /// Load the stats panel and all three tables concurrently. Each paints
    /// as soon as its own response arrives.
    pub async fn load(&self) {
        tokio::join!(
            self.refresh_stats(),
            self.refresh_cases(),
            self.refresh_donations(),
            self.refresh_hospitals(),
        );
    }

    pub async fn refresh_stats(&self) {
        let ticket = self.generations.begin(STATS_PANEL);
        let Some(stats) = fetch::fetch_stats(self.backend, self.notifier).await else {
            return;
        };
        if !self.may_paint(&ticket) {
            return;
        }
        self.surface
            .set_text(ids::TOTAL_CASES, &stats.total_cases.to_string());
        self.surface
            .set_text(ids::TOTAL_DONATIONS, &stats.total_donations.to_string());
        self.surface
            .set_text(ids::TOTAL_HOSPITALS, &stats.total_hospitals.to_string());
        self.surface
            .set_text(ids::TOTAL_AMOUNT, &format::total_amount(&stats.total_amount));
    }

    pub async fn refresh_cases(&self) {
        let ticket = self.generations.begin(ids::CASES_TABLE);
        let cases = fetch::fetch_cases(self.backend, self.notifier).await;
        self.paint(&ticket, &cases_view(&cases));
    }

    pub async fn refresh_donations(&self) {
        let ticket = self.generations.begin(ids::DONATIONS_TABLE);
        let donations = fetch::fetch_donations(self.backend, self.notifier).await;
        self.paint(&ticket, &donations_view(&donations));
    }

    pub async fn refresh_hospitals(&self) {
        let ticket = self.generations.begin(ids::HOSPITALS_TABLE);
        let hospitals = fetch::fetch_hospitals(self.backend, self.notifier).await;
        self.paint(&ticket, &hospitals_view(&hospitals));
    }

    async fn search(&self) {
        let input = self.surface.input_value(ids::HOSPITAL_CITY);
        let Some(city) = normalize_city(&input) else {
            self.notifier.notify(EMPTY_CITY_MESSAGE, Severity::Error);
            return;
        };
        let ticket = self.generations.begin(ids::SEARCH_RESULTS);
        let results = fetch::search_hospitals(self.backend, self.notifier, city).await;
        self.paint(&ticket, &search_results_view(&results));
    }

    async fn submit_status_form(&self) {
        let assigned = self.surface.input_value(ids::UPDATE_ASSIGNED_HOSPITAL);
        let update = StatusUpdate::new(
            self.surface.input_value(ids::UPDATE_CASE_ID),
            self.surface.input_value(ids::UPDATE_STATUS),
            Some(assigned),
        );
        if mutate::update_case_status(self.backend, self.notifier, &update).await {
            self.surface.hide_modal(ids::STATUS_MODAL);
            self.refresh_cases().await;
        }
    }

    async fn submit_hospital_form(&self) {
        let hospital = self.hospital_from_form();
        if mutate::add_hospital(self.backend, self.notifier, &hospital).await {
            self.surface.reset_form(ids::ADD_HOSPITAL_FORM);
            self.refresh_hospitals().await;
        }
    }

    async fn add_from_search(&self, result: &HospitalSearchResult) {
        if mutate::add_hospital_from_search(self.backend, self.notifier, result).await {
            self.refresh_hospitals().await;
        }
    }

    fn open_status_modal(&self, case_id: &str) {
        self.surface.set_input_value(ids::UPDATE_CASE_ID, case_id);
        self.surface.show_modal(ids::STATUS_MODAL);
    }

    fn close_all_modals(&self) {
        for modal in self.surface.visible_modals() {
            self.surface.hide_modal(&modal);
        }
    }

    fn hospital_from_form(&self) -> NewHospital {
        let optional = |input: &str| {
            let value = self.surface.input_value(input);
            (!value.trim().is_empty()).then_some(value)
        };
        NewHospital {
            name: self.surface.input_value(ids::HOSPITAL_NAME),
            address: self.surface.input_value(ids::HOSPITAL_ADDRESS),
            phone: optional(ids::HOSPITAL_PHONE),
            location: self.surface.input_value(ids::HOSPITAL_LOCATION),
            api_lat: optional(ids::HOSPITAL_LAT),
            api_lon: optional(ids::HOSPITAL_LON),
        }
    }

    fn may_paint(&self, ticket: &RenderTicket) -> bool {
        if self.config.discard_stale_responses && !self.generations.is_current(ticket) {
            trace!(
                container = ticket.container(),
                generation = ticket.generation(),
                "dropping stale response"
            );
            return false;
        }
        true
    }

    fn paint(&self, ticket: &RenderTicket, view: &TableView) {
        if self.may_paint(ticket) {
            self.surface.replace_content(ticket.container(), render(view));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_names_parse() {
        assert_eq!(Key::from("Enter"), Key::Enter);
        assert_eq!(Key::from("Escape"), Key::Escape);
        assert_eq!(Key::from("Esc"), Key::Escape);
        assert_eq!(Key::from("a"), Key::Other("a".into()));
    }

    #[test]
    fn row_actions_become_events() {
        assert_eq!(
            PageEvent::from(RowAction::UpdateStatus {
                case_id: "C7".into()
            }),
            PageEvent::OpenStatusModal {
                case_id: "C7".into()
            }
        );
    }
}
