//! Read-only filtered views over the reservation set.

use roomsync_core::RoomId;
use roomsync_core::models::schedule::Schedule;

use crate::BookingStore;

impl BookingStore {
    /// Derives a filtered view of the schedule set: an optional room
    /// restriction AND an optional case-insensitive title-substring match.
    /// Absent filters pass through. The result keeps the canonical
    /// descending start-time order, and every call recomputes from the
    /// current snapshot.
    pub fn filter_schedules(&self, room_id: Option<RoomId>, search: Option<&str>) -> Vec<Schedule> {
        let mut result = self.list_schedules();

        if let Some(room_id) = room_id {
            result.retain(|s| s.room_id == room_id);
        }

        if let Some(term) = search {
            let term = term.to_lowercase();
            result.retain(|s| s.title.to_lowercase().contains(&term));
        }

        result
    }
}
