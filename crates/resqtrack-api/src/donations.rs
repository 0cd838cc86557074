// Donation endpoints (read-only from the dashboard)

use crate::client::Client;
use crate::error::Error;
use crate::models::Donation;

impl Client {
    /// `GET /donations/all`
    pub async fn list_donations(&self) -> Result<Vec<Donation>, Error> {
        self.get("donations/all", &[]).await
    }
}
