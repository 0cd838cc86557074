#![allow(clippy::unwrap_used)]
// Integration tests for `Client` using wiremock.

use pretty_assertions::assert_eq;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use resqtrack_api::{
    Client, Error, ErrorKind, HospitalSearchResult, NewHospital, StatusUpdate, TotalAmount,
};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, Client) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let client = Client::with_client(reqwest::Client::new(), base_url);
    (server, client)
}

/// Decode the form body of the only request the server received.
async fn received_form(server: &MockServer) -> Vec<(String, String)> {
    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1, "expected exactly one request");
    url::form_urlencoded::parse(&requests[0].body)
        .into_owned()
        .collect()
}

// ── Reads ───────────────────────────────────────────────────────────

#[tokio::test]
async fn test_list_cases() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cases/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [
                {
                    "case_id": "C100",
                    "reporter_name": "Asha",
                    "reporter_phone": 9876543210_u64,
                    "location": "Pune",
                    "animal_type": "Dog",
                    "urgency": "High",
                    "notes": null,
                    "media_url": "",
                    "status": "Reported",
                    "assigned_hospital": null,
                    "created_at": "2024-06-15 10:30:00"
                },
                {
                    "case_id": "C101",
                    "reporter_name": "Ravi",
                    "reporter_phone": "555-0101",
                    "location": "Mumbai",
                    "animal_type": "Cat",
                    "urgency": "Low",
                    "status": "Resolved",
                    "created_at": "2024-06-16 08:00:00"
                }
            ]
        })))
        .mount(&server)
        .await;

    let cases = client.list_cases().await.unwrap();

    assert_eq!(cases.len(), 2);
    assert_eq!(cases[0].case_id, "C100");
    assert_eq!(cases[0].reporter_phone, "9876543210");
    assert_eq!(cases[1].status, "Resolved");
}

#[tokio::test]
async fn test_list_donations_numeric_amount() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/donations/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "donor_name": "Meera",
                "donor_email": "meera@example.org",
                "amount": 2500.0,
                "category": "Food",
                "created_at": "2024-06-15 10:30:00"
            }]
        })))
        .mount(&server)
        .await;

    let donations = client.list_donations().await.unwrap();

    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0].amount, "2500");
}

#[tokio::test]
async fn test_list_hospitals_optional_phone() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/hospitals/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "name": "City Vet",
                "address": "12 Park Rd, Pune",
                "phone": null,
                "location": "Pune",
                "api_lat": 18.52,
                "api_lon": 73.85,
                "created_at": "2024-06-15 10:30:00"
            }]
        })))
        .mount(&server)
        .await;

    let hospitals = client.list_hospitals().await.unwrap();

    assert_eq!(hospitals[0].phone, None);
    assert_eq!(hospitals[0].api_lat, "18.52");
}

#[tokio::test]
async fn test_search_hospitals_encodes_city() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/hospitals/search"))
        .and(query_param("city", "New Delhi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": [{
                "name": "AIIMS",
                "address": "AIIMS, Ansari Nagar, New Delhi",
                "lat": "28.56",
                "lon": "77.21",
                "boundingbox": ["28.5", "28.6", "77.2", "77.3"]
            }]
        })))
        .mount(&server)
        .await;

    let results = client.search_hospitals("New Delhi").await.unwrap();

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].boundingbox.len(), 4);
}

#[tokio::test]
async fn test_stats() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/admin/stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "total_cases": 12,
                "total_donations": 4,
                "total_hospitals": 3,
                "total_amount": "₹7,500.00"
            }
        })))
        .mount(&server)
        .await;

    let stats = client.stats().await.unwrap();

    assert_eq!(stats.total_cases, 12);
    assert_eq!(
        stats.total_amount,
        TotalAmount::Formatted("₹7,500.00".into())
    );
}

// ── Mutations ───────────────────────────────────────────────────────

#[tokio::test]
async fn test_update_status_omits_empty_hospital() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/cases/update-status"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string("case_id=C100&status=Resolved"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Case status updated successfully"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let update = StatusUpdate::new("C100", "Resolved", Some(String::new()));
    let message = client.update_case_status(&update).await.unwrap();

    assert_eq!(message, "Case status updated successfully");
}

#[tokio::test]
async fn test_update_status_with_hospital() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/cases/update-status"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Case status updated successfully"
        })))
        .mount(&server)
        .await;

    let update = StatusUpdate::new("C100", "In Treatment", Some("City Vet".into()));
    client.update_case_status(&update).await.unwrap();

    assert_eq!(
        received_form(&server).await,
        vec![
            ("case_id".to_owned(), "C100".to_owned()),
            ("status".to_owned(), "In Treatment".to_owned()),
            ("assigned_hospital".to_owned(), "City Vet".to_owned()),
        ]
    );
}

#[tokio::test]
async fn test_add_hospital_from_search_result() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/hospitals/add"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "message": "Hospital added successfully!"
        })))
        .mount(&server)
        .await;

    let result = HospitalSearchResult {
        name: "Springfield Vet".into(),
        address: "123 Main St, Springfield".into(),
        lat: "39.78".into(),
        lon: "-89.65".into(),
        boundingbox: vec![],
    };
    let message = client
        .add_hospital(&NewHospital::from_search_result(&result))
        .await
        .unwrap();

    assert_eq!(message, "Hospital added successfully!");
    assert_eq!(
        received_form(&server).await,
        vec![
            ("name".to_owned(), "Springfield Vet".to_owned()),
            ("address".to_owned(), "123 Main St, Springfield".to_owned()),
            ("location".to_owned(), "Springfield".to_owned()),
            ("api_lat".to_owned(), "39.78".to_owned()),
            ("api_lon".to_owned(), "-89.65".to_owned()),
        ]
    );
}

// ── Error taxonomy ──────────────────────────────────────────────────

#[tokio::test]
async fn test_non_ok_status_is_network_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let err = client.list_cases().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Network);
    assert_eq!(err.to_string(), "HTTP error! status: 500");
}

#[tokio::test]
async fn test_not_found_keeps_envelope_message() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/cases/update-status"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "message": "Case not found"
        })))
        .mount(&server)
        .await;

    let err = client
        .update_case_status(&StatusUpdate::new("C999", "Resolved", None))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert!(err.to_string().contains("Case not found"), "got: {err}");
}

#[tokio::test]
async fn test_non_json_body_is_protocol_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/hospitals/all"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string("<!doctype html><p>maintenance</p>"),
        )
        .mount(&server)
        .await;

    let err = client.list_hospitals().await.unwrap_err();

    match err {
        Error::Protocol { ref body, .. } => assert!(body.contains("maintenance")),
        other => panic!("expected Protocol error, got: {other:?}"),
    }
    assert_eq!(err.to_string(), "Invalid response from server");
}

#[tokio::test]
async fn test_nan_in_body_is_protocol_error() {
    // pandas happily emits NaN, which is not JSON.
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/hospitals/all"))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{"success": true, "data": [{"name": "X", "phone": NaN}]}"#,
        ))
        .mount(&server)
        .await;

    let err = client.list_hospitals().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_success_false_is_application_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/donations/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "Error fetching donations: disk full"
        })))
        .mount(&server)
        .await;

    let err = client.list_donations().await.unwrap_err();

    match err {
        Error::Application { ref message } => {
            assert_eq!(message, "Error fetching donations: disk full");
        }
        other => panic!("expected Application error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_success_without_data_is_protocol_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/cases/all"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .mount(&server)
        .await;

    let err = client.list_cases().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Protocol);
}

#[tokio::test]
async fn test_connection_refused_is_network_error() {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    drop(server);

    let client = Client::with_client(reqwest::Client::new(), base_url);
    let err = client.list_cases().await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "got: {err:?}");
    assert_eq!(err.kind(), ErrorKind::Network);
}
