use serde::{Deserialize, Serialize};

use crate::RoomId;

/// A bookable physical space. Created and edited by administrators; the
/// `image` field is an opaque display reference and is never validated
/// for reachability.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub capacity: u32,
    pub facilities: Vec<String>,
    pub image: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateRoomRequest {
    pub name: String,
    pub capacity: u32,
    pub facilities: Vec<String>,
    #[serde(default)]
    pub image: String,
}

/// Partial update; absent fields keep their current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateRoomRequest {
    pub name: Option<String>,
    pub capacity: Option<u32>,
    pub facilities: Option<Vec<String>>,
    pub image: Option<String>,
}
