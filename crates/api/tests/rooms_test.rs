use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use roomsync_api::{ApiState, app};
use roomsync_core::models::room::Room;
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
async fn listing_rooms_needs_no_identity() {
    let server = server();

    let response = server.get("/api/rooms").await;
    response.assert_status(StatusCode::OK);

    let rooms: Vec<Room> = response.json();
    let names: Vec<&str> = rooms.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Meeting Room A", "Meeting Room B", "Meeting Room C"]);
}

#[tokio::test]
async fn get_room_resolves_and_404s() {
    let server = server();

    let found: Room = server.get("/api/rooms/1").await.json();
    assert_eq!(found.name, "Meeting Room A");
    assert_eq!(found.capacity, 10);

    server
        .get("/api/rooms/99")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn creating_a_room_requires_an_identity() {
    let server = server();

    let response = server
        .post("/api/rooms")
        .json(&json!({
            "name": "Meeting Room D",
            "capacity": 8,
            "facilities": ["Whiteboard"]
        }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn creating_a_room_requires_the_admin_role() {
    let server = server();
    let (name, value) = user_header("2");

    let response = server
        .post("/api/rooms")
        .add_header(name, value)
        .json(&json!({
            "name": "Meeting Room D",
            "capacity": 8,
            "facilities": ["Whiteboard"]
        }))
        .await;

    response.assert_status(StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn admin_creates_updates_and_deletes_a_room() {
    let server = server();
    let (name, value) = user_header("1");

    let created: Room = server
        .post("/api/rooms")
        .add_header(name.clone(), value.clone())
        .json(&json!({
            "name": "Meeting Room D",
            "capacity": 8,
            "facilities": ["Whiteboard"]
        }))
        .await
        .json();
    assert_eq!(created.id, 4);

    let updated: Room = server
        .put("/api/rooms/4")
        .add_header(name.clone(), value.clone())
        .json(&json!({ "capacity": 12 }))
        .await
        .json();
    assert_eq!(updated.capacity, 12);
    assert_eq!(updated.name, "Meeting Room D");

    server
        .delete("/api/rooms/4")
        .add_header(name, value)
        .await
        .assert_status(StatusCode::NO_CONTENT);

    server
        .get("/api/rooms/4")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_room_payloads_are_bad_requests() {
    let server = server();
    let (name, value) = user_header("1");

    let response = server
        .post("/api/rooms")
        .add_header(name, value)
        .json(&json!({
            "name": "",
            "capacity": 8,
            "facilities": ["Whiteboard"]
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn deleting_a_booked_room_is_refused() {
    let server = server();
    let (name, value) = user_header("1");

    // room 1 holds two seeded schedules
    let response = server.delete("/api/rooms/1").add_header(name, value).await;
    response.assert_status(StatusCode::BAD_REQUEST);

    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("still has"));
}

#[tokio::test]
async fn room_schedule_view_is_sorted_descending() {
    let server = server();

    let response = server.get("/api/rooms/1/schedules").await;
    response.assert_status(StatusCode::OK);

    let schedules: Vec<serde_json::Value> = response.json();
    let titles: Vec<&str> = schedules
        .iter()
        .map(|s| s["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Marketing weekly", "Project Alpha sync"]);

    server
        .get("/api/rooms/99/schedules")
        .await
        .assert_status(StatusCode::NOT_FOUND);
}
