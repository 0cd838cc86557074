// ── Structured table descriptions ──
//
// Pure functions from records to rows. Nothing here knows about HTML;
// the html module renders these and owns all escaping.

use resqtrack_api::{Case, Donation, Hospital, HospitalSearchResult};

const NO_CASES: &str = "No cases found.";
const NO_DONATIONS: &str = "No donations found.";
const NO_HOSPITALS: &str = "No hospitals found.";

const CASE_HEADERS: &[&str] = &[
    "Case ID",
    "Reporter",
    "Location",
    "Animal Type",
    "Urgency",
    "Status",
    "Created At",
    "Actions",
];
const DONATION_HEADERS: &[&str] = &["Donor Name", "Email", "Amount", "Category", "Date"];
const HOSPITAL_HEADERS: &[&str] = &["Name", "Address", "Phone", "Location", "Coordinates"];
const SEARCH_HEADERS: &[&str] = &["Name", "Address", "Latitude", "Longitude", "Actions"];

/// What a container should show.
#[derive(Debug, Clone, PartialEq)]
pub enum TableView {
    /// Placeholder message instead of an empty table shell.
    Empty(&'static str),
    Table(Table),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub headers: &'static [&'static str],
    pub rows: Vec<Row>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    /// Several lines in one cell (reporter name over phone).
    Lines(Vec<String>),
    /// A status badge styled by `class`.
    Status { label: String, class: String },
    Action(RowAction),
}

/// Button offered on a row.
#[derive(Debug, Clone, PartialEq)]
pub enum RowAction {
    /// Open the status modal for a case.
    UpdateStatus { case_id: String },
    /// Store a search result as a hospital.
    AddHospital(HospitalSearchResult),
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::UpdateStatus { .. } => "Update",
            Self::AddHospital(_) => "Add",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Self::UpdateStatus { .. } => "btn btn-small btn-warning",
            Self::AddHospital(_) => "btn btn-small btn-success",
        }
    }
}

/// CSS class for a status badge: `status-` plus the lowercased status.
/// Unknown statuses pass through; styling is the only differentiation.
pub fn status_class(status: &str) -> String {
    format!("status-{}", status.to_lowercase())
}

fn build<T>(
    records: &[T],
    headers: &'static [&'static str],
    empty: &'static str,
    row: impl Fn(&T) -> Row,
) -> TableView {
    if records.is_empty() {
        return TableView::Empty(empty);
    }
    TableView::Table(Table {
        headers,
        rows: records.iter().map(row).collect(),
    })
}

pub fn cases_view(cases: &[Case]) -> TableView {
    build(cases, CASE_HEADERS, NO_CASES, |c| Row {
        cells: vec![
            Cell::Text(c.case_id.clone()),
            Cell::Lines(vec![c.reporter_name.clone(), c.reporter_phone.clone()]),
            Cell::Text(c.location.clone()),
            Cell::Text(c.animal_type.clone()),
            Cell::Text(c.urgency.clone()),
            Cell::Status {
                label: c.status.clone(),
                class: status_class(&c.status),
            },
            Cell::Text(c.created_at.clone()),
            Cell::Action(RowAction::UpdateStatus {
                case_id: c.case_id.clone(),
            }),
        ],
    })
}

pub fn donations_view(donations: &[Donation]) -> TableView {
    build(donations, DONATION_HEADERS, NO_DONATIONS, |d| Row {
        cells: vec![
            Cell::Text(d.donor_name.clone()),
            Cell::Text(d.donor_email.clone()),
            Cell::Text(format!("₹{}", d.amount)),
            Cell::Text(d.category.clone()),
            Cell::Text(d.created_at.clone()),
        ],
    })
}

pub fn hospitals_view(hospitals: &[Hospital]) -> TableView {
    build(hospitals, HOSPITAL_HEADERS, NO_HOSPITALS, |h| Row {
        cells: vec![
            Cell::Text(h.name.clone()),
            Cell::Text(h.address.clone()),
            Cell::Text(
                h.phone
                    .as_deref()
                    .filter(|p| !p.is_empty())
                    .unwrap_or("N/A")
                    .to_owned(),
            ),
            Cell::Text(h.location.clone()),
            Cell::Text(format!("{}, {}", h.api_lat, h.api_lon)),
        ],
    })
}

pub fn search_results_view(results: &[HospitalSearchResult]) -> TableView {
    build(results, SEARCH_HEADERS, NO_HOSPITALS, |r| Row {
        cells: vec![
            Cell::Text(r.name.clone()),
            Cell::Text(r.address.clone()),
            Cell::Text(r.lat.clone()),
            Cell::Text(r.lon.clone()),
            Cell::Action(RowAction::AddHospital(r.clone())),
        ],
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn case(id: &str, status: &str) -> Case {
        Case {
            case_id: id.into(),
            reporter_name: "Asha".into(),
            reporter_phone: "9876543210".into(),
            location: "Pune".into(),
            animal_type: "Dog".into(),
            urgency: "High".into(),
            status: status.into(),
            created_at: "2024-06-15 10:30:00".into(),
            notes: None,
            media_url: None,
            assigned_hospital: None,
        }
    }

    fn hospital(phone: Option<&str>) -> Hospital {
        Hospital {
            name: "City Vet".into(),
            address: "12 Park Rd, Pune".into(),
            phone: phone.map(Into::into),
            location: "Pune".into(),
            api_lat: "18.52".into(),
            api_lon: "73.85".into(),
            created_at: None,
        }
    }

    #[test]
    fn empty_inputs_yield_placeholders() {
        assert_eq!(cases_view(&[]), TableView::Empty("No cases found."));
        assert_eq!(donations_view(&[]), TableView::Empty("No donations found."));
        assert_eq!(hospitals_view(&[]), TableView::Empty("No hospitals found."));
        assert_eq!(search_results_view(&[]), TableView::Empty("No hospitals found."));
    }

    #[test]
    fn case_rows_follow_column_order() {
        let TableView::Table(table) = cases_view(&[case("C100", "In Treatment")]) else {
            panic!("expected a table");
        };
        assert_eq!(table.headers.len(), table.rows[0].cells.len());
        assert_eq!(
            table.rows[0].cells,
            vec![
                Cell::Text("C100".into()),
                Cell::Lines(vec!["Asha".into(), "9876543210".into()]),
                Cell::Text("Pune".into()),
                Cell::Text("Dog".into()),
                Cell::Text("High".into()),
                Cell::Status {
                    label: "In Treatment".into(),
                    class: "status-in treatment".into(),
                },
                Cell::Text("2024-06-15 10:30:00".into()),
                Cell::Action(RowAction::UpdateStatus {
                    case_id: "C100".into()
                }),
            ]
        );
    }

    #[test]
    fn rows_preserve_input_order() {
        let cases: Vec<Case> = ["C3", "C1", "C2"].iter().map(|id| case(id, "Reported")).collect();
        let TableView::Table(table) = cases_view(&cases) else {
            panic!("expected a table");
        };
        let ids: Vec<&Cell> = table.rows.iter().map(|r| &r.cells[0]).collect();
        assert_eq!(
            ids,
            vec![
                &Cell::Text("C3".into()),
                &Cell::Text("C1".into()),
                &Cell::Text("C2".into()),
            ]
        );
    }

    #[test]
    fn unknown_status_is_not_validated() {
        assert_eq!(status_class("Escalated-To-Vet"), "status-escalated-to-vet");
    }

    #[test]
    fn hospital_phone_falls_back_to_na() {
        for phone in [None, Some("")] {
            let TableView::Table(table) = hospitals_view(&[hospital(phone)]) else {
                panic!("expected a table");
            };
            assert_eq!(table.rows[0].cells[2], Cell::Text("N/A".into()));
        }
        let TableView::Table(table) = hospitals_view(&[hospital(Some("020-555"))]) else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[0].cells[2], Cell::Text("020-555".into()));
        assert_eq!(table.rows[0].cells[4], Cell::Text("18.52, 73.85".into()));
    }

    #[test]
    fn donation_amount_in_rupees() {
        let donation = Donation {
            donor_name: "Meera".into(),
            donor_email: "meera@example.org".into(),
            amount: "2500".into(),
            category: "Food".into(),
            created_at: "2024-06-15".into(),
        };
        let TableView::Table(table) = donations_view(&[donation]) else {
            panic!("expected a table");
        };
        assert_eq!(table.rows[0].cells[2], Cell::Text("₹2500".into()));
    }
}
