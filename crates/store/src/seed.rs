//! Demo fixtures: the fixed user table plus a small set of rooms and
//! schedules, matching the data set the service ships with.

use chrono::NaiveDateTime;
use eyre::Result;
use roomsync_core::models::room::CreateRoomRequest;
use roomsync_core::models::schedule::CreateScheduleRequest;
use roomsync_core::models::user::{Role, User};

use crate::BookingStore;
use crate::users::UserDirectory;

/// The fixed user table: one administrator, one standard user.
pub fn demo_users() -> Result<UserDirectory> {
    let mut users = UserDirectory::new();
    users.insert(
        User {
            id: 1,
            username: "admin".to_string(),
            name: "Admin User".to_string(),
            role: Role::Administrator,
        },
        "admin123",
    )?;
    users.insert(
        User {
            id: 2,
            username: "user".to_string(),
            name: "Regular User".to_string(),
            role: Role::StandardUser,
        },
        "user123",
    )?;
    Ok(users)
}

/// Seeds three rooms and three schedules through the normal mutation
/// path, so the seeded state satisfies every store invariant.
pub fn seed_demo_data(store: &BookingStore) -> Result<()> {
    let room_a = store.create_room(CreateRoomRequest {
        name: "Meeting Room A".to_string(),
        capacity: 10,
        facilities: vec![
            "Projector".to_string(),
            "Whiteboard".to_string(),
            "Air conditioning".to_string(),
        ],
        image: "https://images.unsplash.com/photo-1517502884422-41eaead166d4?auto=format&fit=crop&w=500&q=60".to_string(),
    })?;
    let room_b = store.create_room(CreateRoomRequest {
        name: "Meeting Room B".to_string(),
        capacity: 20,
        facilities: vec![
            "Projector".to_string(),
            "Whiteboard".to_string(),
            "Air conditioning".to_string(),
            "Sound system".to_string(),
        ],
        image: "https://images.unsplash.com/photo-1497366754035-f200968a6e72?auto=format&fit=crop&w=500&q=60".to_string(),
    })?;
    store.create_room(CreateRoomRequest {
        name: "Meeting Room C".to_string(),
        capacity: 5,
        facilities: vec!["Whiteboard".to_string(), "Air conditioning".to_string()],
        image: "https://images.unsplash.com/photo-1497366811353-6870744d04b2?auto=format&fit=crop&w=500&q=60".to_string(),
    })?;

    store.create_schedule(
        CreateScheduleRequest {
            room_id: room_a.id,
            title: "Project Alpha sync".to_string(),
            start_time: parse("2025-10-15T09:00:00")?,
            end_time: parse("2025-10-15T11:00:00")?,
            attendees: Vec::new(),
        },
        2,
    )?;
    store.create_schedule(
        CreateScheduleRequest {
            room_id: room_b.id,
            title: "New hire training".to_string(),
            start_time: parse("2025-10-16T13:00:00")?,
            end_time: parse("2025-10-16T15:00:00")?,
            attendees: Vec::new(),
        },
        1,
    )?;
    store.create_schedule(
        CreateScheduleRequest {
            room_id: room_a.id,
            title: "Marketing weekly".to_string(),
            start_time: parse("2025-10-17T10:00:00")?,
            end_time: parse("2025-10-17T12:00:00")?,
            attendees: Vec::new(),
        },
        2,
    )?;

    tracing::info!("seeded demo rooms and schedules");
    Ok(())
}

fn parse(ts: &str) -> Result<NaiveDateTime> {
    Ok(ts.parse()?)
}
