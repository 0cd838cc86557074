//! Admin dashboard logic for ResQTrack.
//!
//! Sits between [`resqtrack_api`] and whatever presents the page:
//!
//! - **[`fetch`]** / **[`mutate`]**: backend calls that never fail outward.
//!   Failures become error toasts and empty results.
//! - **[`view`]**: records → structured tables → escaped HTML.
//! - **[`Notifier`]** / **[`ToastBoard`]**: transient, self-expiring messages.
//! - **[`Surface`]** / **[`Page`]**: the page capabilities the controller
//!   needs, and a headless implementation.
//! - **[`AdminController`]**: maps [`PageEvent`]s to the above, with
//!   per-container request generations so stale responses never overwrite
//!   newer ones.
//!
//! Every dependency is passed in; nothing here reads globals.

pub mod backend;
pub mod config;
pub mod controller;
pub mod error;
pub mod fetch;
pub mod generation;
pub mod mutate;
pub mod notify;
pub mod page;
pub mod view;

// ── Primary re-exports ──────────────────────────────────────────
pub use backend::Backend;
pub use config::{BackendConfig, DEFAULT_TOAST_LIFETIME, DashboardConfig, TlsVerification};
pub use controller::{AdminController, EMPTY_CITY_MESSAGE, Key, PageEvent};
pub use error::CoreError;
pub use generation::{RenderGenerations, RenderTicket};
pub use notify::{Notifier, Severity, Toast, ToastBoard};
pub use page::{Page, Surface};
pub use view::{Html, TableView};

// ── Record types (re-exported from resqtrack-api) ───────────────
pub use resqtrack_api::{
    Case, Client, Donation, Error as ApiError, ErrorKind, Hospital, HospitalSearchResult,
    NewHospital, Stats, StatusUpdate, TotalAmount, location_from_address,
};
