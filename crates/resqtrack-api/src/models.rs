// Wire records for the ResQTrack backend.
//
// Records are backend-owned and passed through unchanged: no derived
// state, no validation beyond what serde needs to read them.

use serde::{Deserialize, Serialize};

use crate::lenient;

// ── Envelope ────────────────────────────────────────────────────────

/// Response envelope shared by every endpoint:
/// `{ "success": bool, "data": T? , "message": string? }`.
#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub success: bool,
    pub data: Option<T>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub message: Option<String>,
}

// ── Records ─────────────────────────────────────────────────────────

/// A reported animal-rescue incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default, deserialize_with = "lenient::text")]
    pub case_id: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reporter_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub reporter_phone: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub animal_type: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub urgency: String,
    /// Free-form status string ("Reported", "Resolved", ...). Not an enum:
    /// the backend accepts whatever the status form submits.
    #[serde(default, deserialize_with = "lenient::text")]
    pub status: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: String,

    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub notes: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub media_url: Option<String>,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub assigned_hospital: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    #[serde(default, deserialize_with = "lenient::text")]
    pub donor_name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub donor_email: String,
    /// Amount as the backend sent it (number or numeric string).
    #[serde(default, deserialize_with = "lenient::text")]
    pub amount: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub category: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub created_at: String,
}

/// A hospital stored by the backend.
///
/// Coordinates use the `api_` prefix because they were sourced from the
/// external lookup when the record was created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "lenient::text")]
    pub location: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub api_lat: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub api_lon: String,
    #[serde(default, deserialize_with = "lenient::opt_text")]
    pub created_at: Option<String>,
}

/// A hospital returned by the city search (not yet stored).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HospitalSearchResult {
    #[serde(default, deserialize_with = "lenient::text")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub address: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub lat: String,
    #[serde(default, deserialize_with = "lenient::text")]
    pub lon: String,
    #[serde(default)]
    pub boundingbox: Vec<String>,
}

/// Dashboard counters from `/admin/stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stats {
    pub total_cases: u64,
    pub total_donations: u64,
    pub total_hospitals: u64,
    pub total_amount: TotalAmount,
}

/// Donation total: the backend pre-formats it as currency text, but a
/// bare number is accepted too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TotalAmount {
    Number(f64),
    Formatted(String),
}

// ── Mutation payloads ───────────────────────────────────────────────

/// Form payload for `POST /cases/update-status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusUpdate {
    pub case_id: String,
    pub status: String,
    /// Only sent when present and non-empty.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_hospital: Option<String>,
}

impl StatusUpdate {
    /// Build an update, treating an empty hospital field as "not assigned".
    pub fn new(
        case_id: impl Into<String>,
        status: impl Into<String>,
        assigned_hospital: Option<String>,
    ) -> Self {
        Self {
            case_id: case_id.into(),
            status: status.into(),
            assigned_hospital: assigned_hospital.filter(|h| !h.is_empty()),
        }
    }
}

/// Form payload for `POST /hospitals/add`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewHospital {
    pub name: String,
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_lat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_lon: Option<String>,
}

impl NewHospital {
    /// Build a hospital from a search result.
    ///
    /// The location is whatever follows the last comma of the address,
    /// trimmed (the whole trimmed address when there is no comma). This
    /// is a heuristic: it assumes the city is the final address segment.
    pub fn from_search_result(result: &HospitalSearchResult) -> Self {
        Self {
            name: result.name.clone(),
            address: result.address.clone(),
            phone: None,
            location: location_from_address(&result.address).to_owned(),
            api_lat: Some(result.lat.clone()),
            api_lon: Some(result.lon.clone()),
        }
    }
}

/// Last comma-separated segment of an address, trimmed.
pub fn location_from_address(address: &str) -> &str {
    address.rsplit(',').next().unwrap_or(address).trim()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn location_is_last_segment() {
        assert_eq!(location_from_address("123 Main St, Springfield"), "Springfield");
    }

    #[test]
    fn location_without_comma_is_whole_address() {
        assert_eq!(location_from_address("  Springfield General  "), "Springfield General");
    }

    #[test]
    fn location_multi_comma_takes_final_segment() {
        assert_eq!(
            location_from_address("City Hospital, MG Road, Pune, Maharashtra, India"),
            "India"
        );
    }

    #[test]
    fn location_trailing_comma_is_empty() {
        assert_eq!(location_from_address("Main St,"), "");
    }

    #[test]
    fn from_search_result_maps_coordinates() {
        let result = HospitalSearchResult {
            name: "Springfield Vet".into(),
            address: "Springfield Vet, 123 Main St, Springfield".into(),
            lat: "39.78".into(),
            lon: "-89.65".into(),
            boundingbox: vec![],
        };
        let hospital = NewHospital::from_search_result(&result);
        assert_eq!(
            hospital,
            NewHospital {
                name: "Springfield Vet".into(),
                address: "Springfield Vet, 123 Main St, Springfield".into(),
                phone: None,
                location: "Springfield".into(),
                api_lat: Some("39.78".into()),
                api_lon: Some("-89.65".into()),
            }
        );
    }

    #[test]
    fn status_update_drops_empty_hospital() {
        let update = StatusUpdate::new("C100", "Resolved", Some(String::new()));
        assert_eq!(update.assigned_hospital, None);
    }

    #[test]
    fn case_tolerates_numeric_phone_and_missing_extras() {
        let case: Case = serde_json::from_value(json!({
            "case_id": "C100",
            "reporter_name": "Asha",
            "reporter_phone": 9876543210_u64,
            "location": "Pune",
            "animal_type": "Dog",
            "urgency": "High",
            "status": "Reported",
            "created_at": "2024-06-15 10:30:00"
        }))
        .unwrap();
        assert_eq!(case.reporter_phone, "9876543210");
        assert_eq!(case.assigned_hospital, None);
    }

    #[test]
    fn total_amount_accepts_text_or_number() {
        let text: TotalAmount = serde_json::from_value(json!("₹1,500.00")).unwrap();
        assert_eq!(text, TotalAmount::Formatted("₹1,500.00".into()));
        let number: TotalAmount = serde_json::from_value(json!(1500.5)).unwrap();
        assert_eq!(number, TotalAmount::Number(1500.5));
    }
}
