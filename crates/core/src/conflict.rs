//! Pure validation for proposed bookings.
//!
//! `validate_schedule` is the only gate between a caller's proposal and
//! the reservation set; it has no side effects and is callable on any
//! snapshot, which is what makes the overlap policy independently
//! testable. The store runs it under its write lock so the check and the
//! insertion it guards are observed as one step.

use chrono::NaiveDateTime;

use crate::errors::{BookingError, BookingResult};
use crate::models::schedule::Schedule;
use crate::{RoomId, ScheduleId};

/// A booking candidate, before the store has assigned it an id.
#[derive(Debug, Clone)]
pub struct ProposedSchedule<'a> {
    pub room_id: RoomId,
    pub title: &'a str,
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

/// Half-open interval overlap: `[a_start, a_end)` against `[b_start, b_end)`.
///
/// Touching endpoints do not overlap, so back-to-back meetings (one ending
/// exactly when the next begins) are bookable.
pub fn overlaps(
    a_start: NaiveDateTime,
    a_end: NaiveDateTime,
    b_start: NaiveDateTime,
    b_end: NaiveDateTime,
) -> bool {
    a_start < b_end && a_end > b_start
}

/// Validates a proposed booking against the current schedule set.
///
/// Checks run in order and short-circuit: title, room reference, time
/// order, then overlap against every schedule in the same room. `exclude`
/// names the schedule being replaced on update, so a schedule never
/// conflicts with itself.
pub fn validate_schedule(
    proposed: &ProposedSchedule<'_>,
    room_exists: bool,
    existing: &[Schedule],
    exclude: Option<ScheduleId>,
) -> BookingResult<()> {
    if proposed.title.trim().is_empty() {
        return Err(BookingError::Validation(
            "meeting title is required".to_string(),
        ));
    }

    if !room_exists {
        return Err(BookingError::Validation(format!(
            "room {} does not exist",
            proposed.room_id
        )));
    }

    if proposed.start_time >= proposed.end_time {
        return Err(BookingError::Validation(
            "end time must be after start time".to_string(),
        ));
    }

    let blocking = existing.iter().find(|e| {
        e.room_id == proposed.room_id
            && exclude != Some(e.id)
            && overlaps(proposed.start_time, proposed.end_time, e.start_time, e.end_time)
    });

    match blocking {
        Some(e) => Err(BookingError::Conflict(e.id)),
        None => Ok(()),
    }
}
