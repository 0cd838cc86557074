//! Async client for the ResQTrack animal-rescue backend.
//!
//! - **[`Client`]**: one method per backend endpoint. Reads return the
//!   unwrapped `data` payload, mutations return the backend's `message`.
//! - **[`Error`]**: network, protocol and application failures, each
//!   classified by [`Error::kind`].
//! - **Records** ([`Case`], [`Donation`], [`Hospital`], ...): passed through
//!   as the backend sends them, with lenient text fields.

pub mod client;
pub mod error;
pub mod models;
pub mod transport;

mod cases;
mod donations;
mod hospitals;
mod lenient;
mod stats;

pub use client::Client;
pub use error::{Error, ErrorKind};
pub use models::{
    Case, Donation, Hospital, HospitalSearchResult, NewHospital, Stats, StatusUpdate, TotalAmount,
    location_from_address,
};
pub use transport::{TlsMode, TransportConfig};
