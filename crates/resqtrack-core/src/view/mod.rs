//! View layer: records → structured rows ([`table`]) → escaped HTML ([`html`]).

pub mod format;
pub mod html;
pub mod table;

pub use html::{Html, escape, render};
pub use table::{
    Cell, Row, RowAction, Table, TableView, cases_view, donations_view, hospitals_view,
    search_results_view, status_class,
};
