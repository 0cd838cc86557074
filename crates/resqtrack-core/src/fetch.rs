// ── Fetchers ──
//
// Reads never fail outward. Any error becomes one error toast prefixed
// with the fetch's context, plus an empty result, so the page always has
// something to render.

use std::fmt::Display;

use tracing::{debug, warn};

use resqtrack_api::{Case, Donation, Error as ApiError, Hospital, HospitalSearchResult, Stats};

use crate::backend::Backend;
use crate::notify::{Notifier, Severity};

pub const STATS_CONTEXT: &str = "Error loading statistics";
pub const CASES_CONTEXT: &str = "Error fetching cases";
pub const DONATIONS_CONTEXT: &str = "Error fetching donations";
pub const HOSPITALS_CONTEXT: &str = "Error fetching hospitals";
pub const SEARCH_CONTEXT: &str = "Error searching hospitals";

/// Report a swallowed failure: log it and show `"<context>: <err>"`.
pub(crate) fn report(notifier: &impl Notifier, context: &str, err: &impl Display) {
    warn!(context, error = %err, "request failed");
    notifier.notify(&format!("{context}: {err}"), Severity::Error);
}

fn or_empty<T>(
    result: Result<Vec<T>, ApiError>,
    notifier: &impl Notifier,
    context: &str,
) -> Vec<T> {
    match result {
        Ok(records) => {
            debug!(context, count = records.len(), "fetched");
            records
        }
        Err(err) => {
            report(notifier, context, &err);
            Vec::new()
        }
    }
}

/// Dashboard counters. `None` when they could not be loaded.
pub async fn fetch_stats(backend: &impl Backend, notifier: &impl Notifier) -> Option<Stats> {
    match backend.stats().await {
        Ok(stats) => Some(stats),
        Err(err) => {
            report(notifier, STATS_CONTEXT, &err);
            None
        }
    }
}

pub async fn fetch_cases(backend: &impl Backend, notifier: &impl Notifier) -> Vec<Case> {
    or_empty(backend.list_cases().await, notifier, CASES_CONTEXT)
}

pub async fn fetch_donations(backend: &impl Backend, notifier: &impl Notifier) -> Vec<Donation> {
    or_empty(backend.list_donations().await, notifier, DONATIONS_CONTEXT)
}

pub async fn fetch_hospitals(backend: &impl Backend, notifier: &impl Notifier) -> Vec<Hospital> {
    or_empty(backend.list_hospitals().await, notifier, HOSPITALS_CONTEXT)
}

/// Search the external directory by city. The caller is expected to have
/// rejected a blank city already (see [`normalize_city`]).
pub async fn search_hospitals(
    backend: &impl Backend,
    notifier: &impl Notifier,
    city: &str,
) -> Vec<HospitalSearchResult> {
    or_empty(backend.search_hospitals(city).await, notifier, SEARCH_CONTEXT)
}

/// Trimmed city, or `None` when nothing is left to search for.
pub fn normalize_city(input: &str) -> Option<&str> {
    let city = input.trim();
    (!city.is_empty()).then_some(city)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_is_trimmed() {
        assert_eq!(normalize_city("  Pune \n"), Some("Pune"));
        assert_eq!(normalize_city("New Delhi"), Some("New Delhi"));
    }

    #[test]
    fn blank_city_is_rejected() {
        assert_eq!(normalize_city(""), None);
        assert_eq!(normalize_city(" \t "), None);
    }
}
