//! User store trait abstraction.
//!
//! Defines the boundary to the local account database: registration, login,
//! session lookup and logout. Implementations include the production SQLite
//! store and in-memory stores for tests.

use thiserror::Error;

use crate::auth::User;

/// User store errors.
///
/// `EmailAlreadyUsed` and `InvalidCredentials` are domain errors surfaced
/// verbatim to the user; `Database` wraps unexpected persistence failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The email is already registered
    #[error("that email address is already registered")]
    EmailAlreadyUsed,

    /// Email/password pair did not match a stored account
    #[error("email or password is incorrect")]
    InvalidCredentials,

    /// Underlying database failure
    #[error("database error: {0}")]
    Database(String),
}

/// Trait for user account storage.
///
/// The store guarantees email uniqueness as a hard constraint and never
/// persists passwords in clear form; only a one-way digest is stored.
/// The "current user" session slot is durable until an explicit `logout`.
///
/// Operations are synchronous: the backing store is a local embedded
/// database and every call is a point lookup or single-row insert.
pub trait UserStore: Send + Sync {
    /// Create a new account and make it the current session.
    ///
    /// Fails with [`StoreError::EmailAlreadyUsed`] if the email exists;
    /// in that case no row is written.
    fn register(&self, name: &str, email: &str, password: &str) -> Result<User, StoreError>;

    /// Authenticate by email and password digest and make the matched
    /// account the current session.
    ///
    /// Fails with [`StoreError::InvalidCredentials`] on any mismatch;
    /// no session is persisted on failure.
    fn login(&self, email: &str, password: &str) -> Result<User, StoreError>;

    /// Return the account referenced by the current-session slot, if any.
    fn current_user(&self) -> Result<Option<User>, StoreError>;

    /// Clear the current-session slot.
    fn logout(&self) -> Result<(), StoreError>;
}
