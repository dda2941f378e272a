//! Port abstraction for user persistence adapters and their errors.

use async_trait::async_trait;

use crate::domain::{User, UserDraft, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// An update targeted a record the store no longer holds.
        Missing { id: UserId } => "user {id} is not stored",
    }
}

/// Record store owning the canonical set of users.
///
/// Implementations serialise conflicting writes themselves; callers treat
/// every method as an independent transaction.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch every stored user ordered by identifier.
    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError>;

    /// Persist a draft and return the stored record.
    ///
    /// Drafts without an identifier are inserted and receive a fresh one.
    /// Drafts carrying an identifier only overwrite an existing record's
    /// name; if no such row is stored the call fails with
    /// [`UserPersistenceError::Missing`] and nothing is written.
    async fn save(&self, draft: UserDraft) -> Result<User, UserPersistenceError>;

    /// Report whether a user with this identifier is stored.
    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError>;

    /// Remove the user with this identifier. Removing an absent user is a no-op.
    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError>;
}
