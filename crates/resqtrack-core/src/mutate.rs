// ── Mutators ──
//
// Writes report their own outcome through the notifier and hand back a
// plain success flag. Refreshing whatever the write affected is the
// caller's job.

use tracing::info;

use resqtrack_api::{HospitalSearchResult, NewHospital, StatusUpdate};

use crate::backend::Backend;
use crate::fetch::report;
use crate::notify::{Notifier, Severity};

pub const UPDATE_STATUS_CONTEXT: &str = "Error updating case status";
pub const ADD_HOSPITAL_CONTEXT: &str = "Error adding hospital";

pub const STATUS_UPDATED: &str = "Case status updated successfully";
pub const HOSPITAL_ADDED: &str = "Hospital added successfully";

/// Show the backend's confirmation, or `fallback` when it sent none.
pub fn confirm(notifier: &impl Notifier, message: &str, fallback: &str) {
    let message = if message.is_empty() { fallback } else { message };
    notifier.notify(message, Severity::Success);
}

pub async fn update_case_status(
    backend: &impl Backend,
    notifier: &impl Notifier,
    update: &StatusUpdate,
) -> bool {
    match backend.update_case_status(update).await {
        Ok(message) => {
            info!(case_id = %update.case_id, status = %update.status, "case status updated");
            confirm(notifier, &message, STATUS_UPDATED);
            true
        }
        Err(err) => {
            report(notifier, UPDATE_STATUS_CONTEXT, &err);
            false
        }
    }
}

pub async fn add_hospital(
    backend: &impl Backend,
    notifier: &impl Notifier,
    hospital: &NewHospital,
) -> bool {
    match backend.add_hospital(hospital).await {
        Ok(message) => {
            info!(name = %hospital.name, location = %hospital.location, "hospital added");
            confirm(notifier, &message, HOSPITAL_ADDED);
            true
        }
        Err(err) => {
            report(notifier, ADD_HOSPITAL_CONTEXT, &err);
            false
        }
    }
}

/// Store a search result as a hospital, deriving its location from the
/// address.
pub async fn add_hospital_from_search(
    backend: &impl Backend,
    notifier: &impl Notifier,
    result: &HospitalSearchResult,
) -> bool {
    add_hospital(backend, notifier, &NewHospital::from_search_result(result)).await
}
