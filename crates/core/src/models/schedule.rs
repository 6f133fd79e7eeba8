use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::{RoomId, ScheduleId, UserId};

/// A single reservation of a room for a half-open time interval
/// `[start_time, end_time)`. Timestamps carry no zone; the whole system
/// runs in one implicit local zone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: ScheduleId,
    pub room_id: RoomId,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    /// Opaque reference to the creating user; accepted as given.
    pub created_by: UserId,
    #[serde(default)]
    pub attendees: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateScheduleRequest {
    pub room_id: RoomId,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub attendees: Vec<String>,
}

/// Full replacement of a schedule's caller-editable fields. `created_by`
/// is preserved from the stored schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateScheduleRequest {
    pub room_id: RoomId,
    pub title: String,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
    #[serde(default)]
    pub attendees: Vec<String>,
}
