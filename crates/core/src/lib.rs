//! Domain types and rules for the RoomSync reservation engine.
//!
//! This crate holds everything the rest of the workspace agrees on: the
//! room and schedule models, the error taxonomy, and the pure conflict
//! validator that guards the no-double-booking invariant. It performs no
//! I/O and has no async surface; the store crate applies these rules under
//! its own locking discipline.

pub mod conflict;
pub mod errors;
pub mod models;

pub type RoomId = u64;
pub type ScheduleId = u64;
pub type UserId = u64;
