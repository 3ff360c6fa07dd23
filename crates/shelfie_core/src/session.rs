//! Session identity value threaded through every remote call.
//!
//! # Responsibility
//! - Carry the authenticated user's backend id and username as an explicit
//!   value, never read from ambient storage inside core logic.
//!
//! # Invariants
//! - Created only by a successful login.
//! - Logout is dropping the value; core keeps no session state of its own.

/// Opaque identity of the currently authenticated user.
///
/// Some backend routes key on the numeric `user_id`, others on the
/// `username` string, so both are carried together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionIdentity {
    user_id: i64,
    username: String,
}

impl SessionIdentity {
    pub fn new(user_id: i64, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: username.into(),
        }
    }

    /// Backend-assigned numeric user id.
    pub fn user_id(&self) -> i64 {
        self.user_id
    }

    /// Login username.
    pub fn username(&self) -> &str {
        &self.username
    }
}
