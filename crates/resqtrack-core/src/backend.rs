// ── Backend capability ──
//
// The dashboard only needs these seven calls. Taking them through a trait
// keeps the controller free of any concrete HTTP client.

use std::future::Future;

use resqtrack_api::{
    Case, Client, Donation, Error as ApiError, Hospital, HospitalSearchResult, NewHospital,
    Stats, StatusUpdate,
};

/// Everything the dashboard asks of the backend.
pub trait Backend {
    fn stats(&self) -> impl Future<Output = Result<Stats, ApiError>> + Send;

    fn list_cases(&self) -> impl Future<Output = Result<Vec<Case>, ApiError>> + Send;

    fn list_donations(&self) -> impl Future<Output = Result<Vec<Donation>, ApiError>> + Send;

    fn list_hospitals(&self) -> impl Future<Output = Result<Vec<Hospital>, ApiError>> + Send;

    fn search_hospitals(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Vec<HospitalSearchResult>, ApiError>> + Send;

    /// Returns the backend's confirmation message.
    fn update_case_status(
        &self,
        update: &StatusUpdate,
    ) -> impl Future<Output = Result<String, ApiError>> + Send;

    /// Returns the backend's confirmation message.
    fn add_hospital(
        &self,
        hospital: &NewHospital,
    ) -> impl Future<Output = Result<String, ApiError>> + Send;
}

impl Backend for Client {
    fn stats(&self) -> impl Future<Output = Result<Stats, ApiError>> + Send {
        Client::stats(self)
    }

    fn list_cases(&self) -> impl Future<Output = Result<Vec<Case>, ApiError>> + Send {
        Client::list_cases(self)
    }

    fn list_donations(&self) -> impl Future<Output = Result<Vec<Donation>, ApiError>> + Send {
        Client::list_donations(self)
    }

    fn list_hospitals(&self) -> impl Future<Output = Result<Vec<Hospital>, ApiError>> + Send {
        Client::list_hospitals(self)
    }

    fn search_hospitals(
        &self,
        city: &str,
    ) -> impl Future<Output = Result<Vec<HospitalSearchResult>, ApiError>> + Send {
        Client::search_hospitals(self, city)
    }

    fn update_case_status(
        &self,
        update: &StatusUpdate,
    ) -> impl Future<Output = Result<String, ApiError>> + Send {
        Client::update_case_status(self, update)
    }

    fn add_hospital(
        &self,
        hospital: &NewHospital,
    ) -> impl Future<Output = Result<String, ApiError>> + Send {
        Client::add_hospital(self, hospital)
    }
}
