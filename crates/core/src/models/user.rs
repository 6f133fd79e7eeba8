use serde::{Deserialize, Serialize};

use crate::UserId;

/// Closed capability tag. The core never checks roles; gating belongs to
/// the calling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "admin")]
    Administrator,
    #[serde(rename = "user")]
    StandardUser,
}

impl Role {
    pub fn is_admin(self) -> bool {
        matches!(self, Role::Administrator)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}
