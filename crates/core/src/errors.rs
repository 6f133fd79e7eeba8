use thiserror::Error;

use crate::ScheduleId;

/// Expected, user-facing outcomes of a booking operation.
///
/// Only `Internal` signals a system failure; everything else is a normal
/// rejection the caller is expected to surface and recover from. The
/// engine never retries on its own.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested time range overlaps an existing schedule in the same
    /// room. Carries the blocking schedule's id so the caller can show it.
    #[error("Booking conflict: requested time overlaps schedule {0}")]
    Conflict(ScheduleId),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error("Internal error: {0}")]
    Internal(#[from] eyre::Report),
}

pub type BookingResult<T> = Result<T, BookingError>;
