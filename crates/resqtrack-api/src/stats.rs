// Dashboard statistics endpoint

use crate::client::Client;
use crate::error::Error;
use crate::models::Stats;

impl Client {
    /// Case, donation and hospital counters plus the donation total.
    ///
    /// `GET /admin/stats`
    pub async fn stats(&self) -> Result<Stats, Error> {
        self.get("admin/stats", &[]).await
    }
}
