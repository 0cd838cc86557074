// Hospital endpoints
//
// Stored hospitals live under `/hospitals/all`; `/hospitals/search` proxies
// an external lookup and returns candidates that are not stored yet.

use tracing::debug;

use crate::client::Client;
use crate::error::Error;
use crate::models::{Hospital, HospitalSearchResult, NewHospital};

impl Client {
    /// List stored hospitals.
    ///
    /// `GET /hospitals/all`
    pub async fn list_hospitals(&self) -> Result<Vec<Hospital>, Error> {
        self.get("hospitals/all", &[]).await
    }

    /// Look up hospitals in a city through the backend's external search.
    ///
    /// `GET /hospitals/search?city=<city>` (the city is URL-encoded)
    pub async fn search_hospitals(&self, city: &str) -> Result<Vec<HospitalSearchResult>, Error> {
        debug!(city, "searching hospitals");
        self.get("hospitals/search", &[("city", city)]).await
    }

    /// Store a new hospital.
    ///
    /// `POST /hospitals/add` with form fields `name`, `address`, `location`
    /// and whichever of `phone`, `api_lat`, `api_lon` are set.
    pub async fn add_hospital(&self, hospital: &NewHospital) -> Result<String, Error> {
        debug!(name = %hospital.name, location = %hospital.location, "adding hospital");
        self.post_form("hospitals/add", hospital).await
    }
}
