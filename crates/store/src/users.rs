//! Fixed credential table for the login collaborator.
//!
//! The directory is read-only at run time: entries are inserted once at
//! startup and looked up afterwards. Passwords are stored as Argon2 PHC
//! strings, never in the clear.

use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use eyre::Result;
use roomsync_core::UserId;
use roomsync_core::errors::{BookingError, BookingResult};
use roomsync_core::models::user::User;

#[derive(Default)]
pub struct UserDirectory {
    entries: Vec<Entry>,
}

struct Entry {
    user: User,
    password_hash: String,
}

impl UserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user, hashing the password on the way in.
    pub fn insert(&mut self, user: User, password: &str) -> Result<()> {
        let password_hash = hash_password(password)?;
        self.entries.push(Entry {
            user,
            password_hash,
        });
        Ok(())
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.entries
            .iter()
            .find(|e| e.user.id == id)
            .map(|e| e.user.clone())
    }

    /// Verifies the credentials and returns the matching user. The error
    /// message never reveals whether the username or the password was
    /// wrong.
    pub fn authenticate(&self, username: &str, password: &str) -> BookingResult<User> {
        let entry = self
            .entries
            .iter()
            .find(|e| e.user.username == username)
            .ok_or_else(|| {
                BookingError::Authentication("invalid username or password".to_string())
            })?;

        if verify_password(&entry.password_hash, password)? {
            Ok(entry.user.clone())
        } else {
            Err(BookingError::Authentication(
                "invalid username or password".to_string(),
            ))
        }
    }
}

/// Hashes a password with Argon2 and a fresh random salt, returning the
/// PHC string form.
pub fn hash_password(password: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    let password_hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| eyre::eyre!("Error hashing password: {}", e))?
        .to_string();
    Ok(password_hash)
}

/// Checks a password against a stored PHC hash string.
pub fn verify_password(hash: &str, password: &str) -> BookingResult<bool> {
    let parsed = PasswordHash::new(hash)
        .map_err(|e| BookingError::Internal(eyre::eyre!("Invalid password hash: {}", e)))?;
    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
