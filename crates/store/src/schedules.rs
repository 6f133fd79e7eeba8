//! Reservation store operations.
//!
//! Every mutation runs the full validation pipeline from
//! `roomsync_core::conflict` while holding the write lock, so no two
//! writers can validate against the same stale snapshot.

use roomsync_core::conflict::{ProposedSchedule, validate_schedule};
use roomsync_core::errors::{BookingError, BookingResult};
use roomsync_core::models::normalize_labels;
use roomsync_core::models::schedule::{CreateScheduleRequest, Schedule, UpdateScheduleRequest};
use roomsync_core::{RoomId, ScheduleId, UserId};

use crate::BookingStore;

impl BookingStore {
    pub fn create_schedule(
        &self,
        req: CreateScheduleRequest,
        created_by: UserId,
    ) -> BookingResult<Schedule> {
        let mut state = self.write();
        let room_exists = state.rooms.iter().any(|r| r.id == req.room_id);
        let proposed = ProposedSchedule {
            room_id: req.room_id,
            title: &req.title,
            start_time: req.start_time,
            end_time: req.end_time,
        };
        validate_schedule(&proposed, room_exists, &state.schedules, None)?;

        let id = state.next_schedule_id;
        state.next_schedule_id += 1;

        let schedule = Schedule {
            id,
            room_id: req.room_id,
            title: req.title.trim().to_string(),
            start_time: req.start_time,
            end_time: req.end_time,
            created_by,
            attendees: normalize_labels(req.attendees),
        };
        tracing::debug!(schedule = id, room = schedule.room_id, "booked schedule");
        state.schedules.push(schedule.clone());
        Ok(schedule)
    }

    /// Full replacement; the schedule being replaced is excluded from its
    /// own overlap check. `created_by` is carried over unchanged.
    pub fn update_schedule(
        &self,
        id: ScheduleId,
        req: UpdateScheduleRequest,
    ) -> BookingResult<Schedule> {
        let mut state = self.write();
        let pos = state
            .schedules
            .iter()
            .position(|s| s.id == id)
            .ok_or_else(|| BookingError::NotFound(format!("Schedule with ID {} not found", id)))?;

        let room_exists = state.rooms.iter().any(|r| r.id == req.room_id);
        let proposed = ProposedSchedule {
            room_id: req.room_id,
            title: &req.title,
            start_time: req.start_time,
            end_time: req.end_time,
        };
        validate_schedule(&proposed, room_exists, &state.schedules, Some(id))?;

        let schedule = Schedule {
            id,
            room_id: req.room_id,
            title: req.title.trim().to_string(),
            start_time: req.start_time,
            end_time: req.end_time,
            created_by: state.schedules[pos].created_by,
            attendees: normalize_labels(req.attendees),
        };
        state.schedules[pos] = schedule.clone();
        tracing::debug!(schedule = id, "updated schedule");
        Ok(schedule)
    }

    pub fn delete_schedule(&self, id: ScheduleId) -> BookingResult<()> {
        let mut state = self.write();
        let before = state.schedules.len();
        state.schedules.retain(|s| s.id != id);
        if state.schedules.len() == before {
            return Err(BookingError::NotFound(format!(
                "Schedule with ID {} not found",
                id
            )));
        }
        tracing::debug!(schedule = id, "deleted schedule");
        Ok(())
    }

    pub fn get_schedule(&self, id: ScheduleId) -> BookingResult<Schedule> {
        self.read()
            .schedules
            .iter()
            .find(|s| s.id == id)
            .cloned()
            .ok_or_else(|| BookingError::NotFound(format!("Schedule with ID {} not found", id)))
    }

    /// Canonical retrieval order: descending by start time, future-most
    /// first. Every consumer sees this ordering.
    pub fn list_schedules(&self) -> Vec<Schedule> {
        sorted_by_start_desc(self.read().schedules.clone())
    }

    pub fn schedules_by_room(&self, room_id: RoomId) -> Vec<Schedule> {
        sorted_by_start_desc(
            self.read()
                .schedules
                .iter()
                .filter(|s| s.room_id == room_id)
                .cloned()
                .collect(),
        )
    }
}

fn sorted_by_start_desc(mut schedules: Vec<Schedule>) -> Vec<Schedule> {
    schedules.sort_by(|a, b| b.start_time.cmp(&a.start_time));
    schedules
}
