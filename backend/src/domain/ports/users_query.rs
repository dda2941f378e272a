//! Driving port for read-only user use-cases.
//!
//! HTTP handlers depend on this trait rather than on persistence so they can
//! be exercised against mocks.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Domain use-case port for reading users.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Fetch one user, failing with [`crate::domain::ErrorCode::NotFound`]
    /// when it does not exist.
    async fn fetch_user(&self, id: UserId) -> Result<User, Error>;

    /// Fetch every stored user.
    async fn list_users(&self) -> Result<Vec<User>, Error>;
}
