//! User directory service implementing the driving ports.
//!
//! Each use-case is a single stateless pass over the [`UserRepository`]:
//! the service keeps no state between calls and relies on the store to
//! serialise conflicting writes.

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository, UsersCommand, UsersQuery};
use crate::domain::{Error, User, UserDraft, UserId};

/// Service backing the user CRUD endpoints.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use users_api::domain::UserService;
/// use users_api::domain::ports::UsersCommand;
/// use users_api::outbound::persistence::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let service = UserService::new(Arc::new(InMemoryUserRepository::new()));
/// let user = service.create_user("Alice".to_owned()).await.unwrap();
/// assert_eq!(user.id().get(), 1);
/// # });
/// ```
pub struct UserService<R: ?Sized> {
    repository: Arc<R>,
}

impl<R: ?Sized> Clone for UserService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<R: ?Sized> UserService<R> {
    /// Create a service over the given repository.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }
}

fn map_persistence_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::Missing { id } => user_not_found(id),
    }
}

fn user_not_found(id: UserId) -> Error {
    Error::not_found(format!("user {id} not found"))
}

#[async_trait]
impl<R> UsersQuery for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn fetch_user(&self, id: UserId) -> Result<User, Error> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(map_persistence_error)?
            .ok_or_else(|| user_not_found(id))
    }

    async fn list_users(&self) -> Result<Vec<User>, Error> {
        self.repository
            .find_all()
            .await
            .map_err(map_persistence_error)
    }
}

#[async_trait]
impl<R> UsersCommand for UserService<R>
where
    R: UserRepository + ?Sized,
{
    async fn create_user(&self, name: String) -> Result<User, Error> {
        self.repository
            .save(UserDraft::new(name))
            .await
            .map_err(map_persistence_error)
    }

    async fn rename_user(&self, id: UserId, name: String) -> Result<User, Error> {
        let existing = self.fetch_user(id).await?;
        self.repository
            .save(existing.renamed(name))
            .await
            .map_err(map_persistence_error)
    }

    async fn delete_user(&self, id: UserId) -> Result<UserId, Error> {
        let exists = self
            .repository
            .exists_by_id(id)
            .await
            .map_err(map_persistence_error)?;
        if exists {
            self.repository
                .delete_by_id(id)
                .await
                .map_err(map_persistence_error)?;
        }
        Ok(id)
    }
}

#[cfg(test)]
#[path = "user_service_tests.rs"]
mod tests;
