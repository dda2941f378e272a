//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for creating, renaming and deleting users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Store a new user named `name`; the store assigns the identifier.
    async fn create_user(&self, name: String) -> Result<User, Error>;

    /// Replace the name of an existing user.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when `id` is unknown.
    async fn rename_user(&self, id: UserId, name: String) -> Result<User, Error>;

    /// Remove a user if present and echo the identifier back.
    ///
    /// Deleting an unknown identifier succeeds without changes.
    async fn delete_user(&self, id: UserId) -> Result<UserId, Error>;
}
