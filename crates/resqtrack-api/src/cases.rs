// Case endpoints

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::models::{Case, StatusUpdate};

impl Client {
    /// List every case.
    ///
    /// `GET /cases/all`
    pub async fn list_cases(&self) -> Result<Vec<Case>, Error> {
        self.get("cases/all", &[]).await
    }

    /// Change a case's status, optionally assigning a hospital.
    ///
    /// `POST /cases/update-status` with form fields `case_id`, `status` and,
    /// when set, `assigned_hospital`. Returns the backend's message.
    pub async fn update_case_status(&self, update: &StatusUpdate) -> Result<String, Error> {
        debug!(case_id = %update.case_id, status = %update.status, "updating case status");
        self.post_form("cases/update-status", update).await
    }
}
