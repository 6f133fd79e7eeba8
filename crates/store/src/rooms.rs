//! Room catalog operations.

use roomsync_core::RoomId;
use roomsync_core::errors::{BookingError, BookingResult};
use roomsync_core::models::normalize_labels;
use roomsync_core::models::room::{CreateRoomRequest, Room, UpdateRoomRequest};

use crate::BookingStore;

impl BookingStore {
    pub fn create_room(&self, req: CreateRoomRequest) -> BookingResult<Room> {
        let facilities = normalize_labels(req.facilities);
        validate_room(&req.name, req.capacity, &facilities)?;

        let mut state = self.write();
        let id = state.next_room_id;
        state.next_room_id += 1;

        let room = Room {
            id,
            name: req.name.trim().to_string(),
            capacity: req.capacity,
            facilities,
            image: req.image,
        };
        tracing::debug!(room = id, name = %room.name, "created room");
        state.rooms.push(room.clone());
        Ok(room)
    }

    pub fn update_room(&self, id: RoomId, req: UpdateRoomRequest) -> BookingResult<Room> {
        let mut state = self.write();
        let room = state
            .rooms
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| BookingError::NotFound(format!("Room with ID {} not found", id)))?;

        let name = req.name.unwrap_or_else(|| room.name.clone());
        let capacity = req.capacity.unwrap_or(room.capacity);
        let facilities = normalize_labels(match req.facilities {
            Some(facilities) => facilities,
            None => room.facilities.clone(),
        });
        validate_room(&name, capacity, &facilities)?;

        room.name = name.trim().to_string();
        room.capacity = capacity;
        room.facilities = facilities;
        if let Some(image) = req.image {
            room.image = image;
        }
        tracing::debug!(room = id, "updated room");
        Ok(room.clone())
    }

    /// Deleting a room that still has schedules is refused; schedules are
    /// never silently deleted or left dangling.
    pub fn delete_room(&self, id: RoomId) -> BookingResult<()> {
        let mut state = self.write();
        if !state.rooms.iter().any(|r| r.id == id) {
            return Err(BookingError::NotFound(format!(
                "Room with ID {} not found",
                id
            )));
        }

        let booked = state.schedules.iter().filter(|s| s.room_id == id).count();
        if booked > 0 {
            return Err(BookingError::Validation(format!(
                "room {} still has {} schedule(s)",
                id, booked
            )));
        }

        state.rooms.retain(|r| r.id != id);
        tracing::debug!(room = id, "deleted room");
        Ok(())
    }

    /// All rooms in insertion order.
    pub fn list_rooms(&self) -> Vec<Room> {
        self.read().rooms.clone()
    }

    pub fn get_room(&self, id: RoomId) -> BookingResult<Room> {
        self.read()
            .rooms
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(format!("Room with ID {} not found", id)))
    }
}

fn validate_room(name: &str, capacity: u32, facilities: &[String]) -> BookingResult<()> {
    if name.trim().is_empty() {
        return Err(BookingError::Validation("room name is required".to_string()));
    }
    if capacity == 0 {
        return Err(BookingError::Validation(
            "room capacity must be positive".to_string(),
        ));
    }
    if facilities.is_empty() {
        return Err(BookingError::Validation(
            "at least one facility is required".to_string(),
        ));
    }
    Ok(())
}
