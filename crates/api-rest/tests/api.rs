//! End-to-end tests driving the router the way the front end does.

use api_rest::{router, AppState};
use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use hms_core::CoreConfig;
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::util::ServiceExt;

fn app(temp: &TempDir) -> Router {
    let cfg = Arc::new(CoreConfig::new(temp.path().to_path_buf(), None).expect("config"));
    router(AppState::new(cfg))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(v) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(v.to_string()))
            .expect("request"),
        None => builder.body(Body::empty()).expect("request"),
    };

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

fn patient_body(first: &str, email: &str) -> Value {
    json!({
        "first_name": first,
        "last_name": "Okafor",
        "email": email,
        "phone": "555-0134"
    })
}

fn doctor_body(name: &str) -> Value {
    json!({
        "name": name,
        "specialization": "Cardiologist",
        "email": "rota@clinic.example.org"
    })
}

#[tokio::test]
async fn health_reports_ok() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Server is running");
}

#[tokio::test]
async fn patient_crud_flow() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let (status, created) = send(
        &app,
        Method::POST,
        "/patients",
        Some(patient_body("Aisha", "aisha@mail.example.org")),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["success"], true);
    let id = created["data"]["id"].as_str().expect("id").to_owned();

    let (status, listed) = send(&app, Method::GET, "/patients", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["count"], 1);

    let (status, fetched) = send(&app, Method::GET, &format!("/patients/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched["data"]["first_name"], "Aisha");

    let (status, updated) = send(
        &app,
        Method::PUT,
        &format!("/patients/{id}"),
        Some(patient_body("Aisha", "new@mail.example.org")),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["email"], "new@mail.example.org");

    let (status, deleted) = send(&app, Method::DELETE, &format!("/patients/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["success"], true);

    let (status, missing) = send(&app, Method::GET, &format!("/patients/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(missing["success"], false);
}

#[tokio::test]
async fn blank_names_are_rejected_at_the_boundary() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let (status, _) = send(
        &app,
        Method::POST,
        "/patients",
        Some(patient_body("   ", "aisha@mail.example.org")),
    )
    .await;
    assert!(status.is_client_error());
}

#[tokio::test]
async fn malformed_record_ids_are_bad_requests() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let (status, body) = send(&app, Method::GET, "/patients/not-a-canonical-id", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn appointment_booking_and_filtering() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let (_, doctor) = send(
        &app,
        Method::POST,
        "/doctors",
        Some(doctor_body("Dr. Sarah Wilson")),
    )
    .await;
    let doctor_id = doctor["data"]["id"].as_str().expect("doctor id").to_owned();

    let booking = json!({
        "patient_name": "Aisha Okafor",
        "patient_email": "aisha@mail.example.org",
        "doctor_id": doctor_id,
        "appointment_date": "2026-08-20",
        "start_time": "10:00",
        "end_time": "10:30",
        "reason": "persistent cough"
    });
    let (status, created) = send(&app, Method::POST, "/appointments", Some(booking)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["doctor_name"], "Dr. Sarah Wilson");
    assert_eq!(created["data"]["status"], "scheduled");
    let appointment_id = created["data"]["id"].as_str().expect("id").to_owned();

    let (status, filtered) = send(
        &app,
        Method::GET,
        &format!("/appointments?doctor_id={doctor_id}&status=scheduled"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(filtered["count"], 1);

    let (status, by_date) = send(&app, Method::GET, "/appointments?date=2026-08-21", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(by_date["count"], 0);

    let (status, cancelled) = send(
        &app,
        Method::PUT,
        &format!("/appointments/{appointment_id}"),
        Some(json!({ "status": "cancelled" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cancelled["data"]["status"], "cancelled");
}

#[tokio::test]
async fn booking_with_unknown_doctor_is_not_found() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let booking = json!({
        "patient_name": "Aisha Okafor",
        "patient_email": "aisha@mail.example.org",
        "doctor_id": "550e8400e29b41d4a716446655440000",
        "appointment_date": "2026-08-20",
        "start_time": "10:00",
        "end_time": "10:30"
    });
    let (status, body) = send(&app, Method::POST, "/appointments", Some(booking)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn vitals_are_listed_newest_first() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let (_, patient) = send(
        &app,
        Method::POST,
        "/patients",
        Some(patient_body("Aisha", "aisha@mail.example.org")),
    )
    .await;
    let id = patient["data"]["id"].as_str().expect("id").to_owned();

    for (hour, rate) in [(8, 70), (14, 76)] {
        let (status, _) = send(
            &app,
            Method::POST,
            &format!("/patients/{id}/vitals"),
            Some(json!({
                "heart_rate": rate,
                "recorded_at": format!("2026-08-07T{hour:02}:00:00Z")
            })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, listed) = send(&app, Method::GET, &format!("/patients/{id}/vitals"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed["count"], 2);
    assert_eq!(listed["data"][0]["heart_rate"], 76);

    let (status, latest) = send(
        &app,
        Method::GET,
        &format!("/patients/{id}/vitals/latest"),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(latest["data"]["heart_rate"], 76);
}

#[tokio::test]
async fn lab_order_lifecycle() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let (status, catalog) = send(&app, Method::GET, "/lab-tests", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(catalog["count"].as_u64().unwrap() >= 10);

    let order = json!({
        "patient_name": "Aisha Okafor",
        "patient_email": "aisha@mail.example.org",
        "test_id": "lt2"
    });
    let (status, created) = send(&app, Method::POST, "/lab-orders", Some(order)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["data"]["test_name"], "Blood Glucose Test");
    assert_eq!(created["data"]["status"], "ordered");
    let id = created["data"]["id"].as_str().expect("id").to_owned();

    let (status, updated) = send(
        &app,
        Method::PATCH,
        &format!("/lab-orders/{id}/status"),
        Some(json!({ "status": "in-progress" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["data"]["status"], "in-progress");

    let unknown = json!({
        "patient_name": "Aisha Okafor",
        "patient_email": "aisha@mail.example.org",
        "test_id": "lt999"
    });
    let (status, body) = send(&app, Method::POST, "/lab-orders", Some(unknown)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn medicine_search_matches_and_feeds_the_recency_list() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let (status, found) = send(
        &app,
        Method::POST,
        "/medicines/search",
        Some(json!({ "text": "I am suffering from fever" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(found["count"], 1);
    assert_eq!(found["data"][0]["symptom"], "fever");
    assert_eq!(found["data"][0]["medicines"][0], "Paracetamol");

    let (_, found) = send(
        &app,
        Method::POST,
        "/medicines/search",
        Some(json!({ "text": "I have a headache today" })),
    )
    .await;
    assert_eq!(found["data"][0]["symptom"], "headache");

    let (status, recent) = send(&app, Method::GET, "/medicines/recent", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(recent["data"][0], "headache");
    assert_eq!(recent["data"][1], "fever");
}

#[tokio::test]
async fn medicine_search_with_no_match_is_an_empty_success() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    for text in ["hi", "my elbow glows faintly"] {
        let (status, body) = send(
            &app,
            Method::POST,
            "/medicines/search",
            Some(json!({ "text": text })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);
        assert_eq!(body["count"], 0);
    }

    let (_, recent) = send(&app, Method::GET, "/medicines/recent", None).await;
    assert_eq!(recent["data"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn symptom_table_is_exposed() {
    let temp = TempDir::new().unwrap();
    let app = app(&temp);

    let (status, body) = send(&app, Method::GET, "/medicines/symptoms", None).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["count"].as_u64().unwrap() >= 20);
}
