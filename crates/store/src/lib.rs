//! In-memory backing store for the RoomSync service.
//!
//! The room catalog and the reservation set live as owned collections
//! inside a single [`BookingStore`]; callers mutate them only through its
//! methods and never receive a mutable handle. The store is the sole
//! enforcement point of the no-double-booking invariant.

pub mod query;
pub mod rooms;
pub mod schedules;
pub mod seed;
pub mod users;

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use roomsync_core::models::room::Room;
use roomsync_core::models::schedule::Schedule;
use roomsync_core::{RoomId, ScheduleId};

/// Owns all booking state behind one lock.
///
/// Every mutation takes the write lock, so a conflict check and the
/// insertion it guards are observed as one atomic step, and cross-entity
/// checks (room-in-use on delete) see a consistent view. Reads clone a
/// snapshot under the read lock and may run concurrently.
pub struct BookingStore {
    state: RwLock<State>,
}

pub(crate) struct State {
    pub(crate) rooms: Vec<Room>,
    pub(crate) schedules: Vec<Schedule>,
    pub(crate) next_room_id: RoomId,
    pub(crate) next_schedule_id: ScheduleId,
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(State {
                rooms: Vec::new(),
                schedules: Vec::new(),
                next_room_id: 1,
                next_schedule_id: 1,
            }),
        }
    }

    // Writers validate before they touch the collections, so state behind
    // a poisoned lock is still consistent and can be recovered.
    pub(crate) fn read(&self) -> RwLockReadGuard<'_, State> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn write(&self) -> RwLockWriteGuard<'_, State> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}
