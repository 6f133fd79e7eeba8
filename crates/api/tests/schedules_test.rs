use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use roomsync_api::{ApiState, app};
use roomsync_core::models::schedule::Schedule;
use roomsync_store::{BookingStore, seed};
use serde_json::json;

fn server() -> TestServer {
    let store = BookingStore::new();
    seed::seed_demo_data(&store).expect("seed demo data");
    let users = seed::demo_users().expect("seed users");
    TestServer::new(app(Arc::new(ApiState { store, users }))).expect("test server")
}

fn user_header(id: &'static str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static("x-user-id"),
        HeaderValue::from_static(id),
    )
}

#[tokio::test]
async fn listing_is_sorted_descending_by_start() {
    let server = server();

    let response = server.get("/api/schedules").await;
    response.assert_status(StatusCode::OK);

    let schedules: Vec<Schedule> = response.json();
    let titles: Vec<&str> = schedules.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Marketing weekly", "New hire training", "Project Alpha sync"]
    );
}

#[tokio::test]
async fn filters_compose_in_the_query_string() {
    let server = server();

    let by_room = server
        .get("/api/schedules")
        .add_query_param("room_id", "1")
        .await;
    let schedules: Vec<Schedule> = by_room.json();
    assert_eq!(schedules.len(), 2);

    let by_both = server
        .get("/api/schedules")
        .add_query_param("room_id", "1")
        .add_query_param("search", "ALPHA")
        .await;
    let schedules: Vec<Schedule> = by_both.json();
    let titles: Vec<&str> = schedules.iter().map(|s| s.title.as_str()).collect();
    assert_eq!(titles, vec!["Project Alpha sync"]);
}

#[tokio::test]
async fn booking_requires_an_identity() {
    let server = server();

    let response = server
        .post("/api/schedules")
        .json(&json!({
            "room_id": 1,
            "title": "Standup",
            "start_time": "2025-10-18T09:00:00",
            "end_time": "2025-10-18T09:30:00"
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn booking_records_the_caller_as_creator() {
    let server = server();
    let (name, value) = user_header("2");

    let response = server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&json!({
            "room_id": 1,
            "title": "Standup",
            "start_time": "2025-10-18T09:00:00",
            "end_time": "2025-10-18T09:30:00"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let schedule: Schedule = response.json();
    assert_eq!(schedule.created_by, 2);
    assert_eq!(schedule.id, 4);
}

#[tokio::test]
async fn overlapping_booking_conflicts_with_409() {
    let server = server();
    let (name, value) = user_header("2");

    // seeded: "Project Alpha sync" holds room 1 from 09:00 to 11:00 on the 15th
    let response = server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&json!({
            "room_id": 1,
            "title": "Collision",
            "start_time": "2025-10-15T10:30:00",
            "end_time": "2025-10-15T11:30:00"
        }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("schedule 1"));
}

#[tokio::test]
async fn back_to_back_booking_succeeds() {
    let server = server();
    let (name, value) = user_header("2");

    let response = server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&json!({
            "room_id": 1,
            "title": "Follow-up",
            "start_time": "2025-10-15T11:00:00",
            "end_time": "2025-10-15T12:00:00"
        }))
        .await;

    response.assert_status(StatusCode::OK);
}

#[tokio::test]
async fn inverted_range_is_a_bad_request() {
    let server = server();
    let (name, value) = user_header("2");

    let response = server
        .post("/api/schedules")
        .add_header(name, value)
        .json(&json!({
            "room_id": 1,
            "title": "Backwards",
            "start_time": "2025-10-18T10:00:00",
            "end_time": "2025-10-18T09:00:00"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn title_only_update_never_conflicts_with_itself() {
    let server = server();
    let (name, value) = user_header("2");

    let response = server
        .put("/api/schedules/1")
        .add_header(name, value)
        .json(&json!({
            "room_id": 1,
            "title": "Project Alpha sync (moved agenda)",
            "start_time": "2025-10-15T09:00:00",
            "end_time": "2025-10-15T11:00:00"
        }))
        .await;

    response.assert_status(StatusCode::OK);
    let schedule: Schedule = response.json();
    assert_eq!(schedule.title, "Project Alpha sync (moved agenda)");
}

#[tokio::test]
async fn delete_then_get_is_not_found() {
    let server = server();
    let (name, value) = user_header("2");

    server
        .delete("/api/schedules/1")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get("/api/schedules/1")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_identity_header_is_unauthorized() {
    let server = server();
    let (name, value) = user_header("99");

    let response = server
        .delete("/api/schedules/1")
        .add_header(name, value)
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}
