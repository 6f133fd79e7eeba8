pub mod auth;
pub mod rooms;
pub mod schedules;
