//! Process-local `UserRepository` used when no database is configured.
//!
//! Records live in a `BTreeMap` behind a mutex so listings come back ordered
//! by identifier. Identifiers start at 1 and are never reused, even after the
//! highest record is deleted. Updates go through `get_mut` under the same
//! lock, so a record removed by a concurrent delete stays removed.

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::domain::ports::{UserPersistenceError, UserRepository};
use crate::domain::{User, UserDraft, UserId};

#[derive(Debug)]
struct Store {
    next_id: i64,
    users: BTreeMap<UserId, User>,
}

/// In-memory implementation of the [`UserRepository`] port.
///
/// # Examples
/// ```
/// use users_api::domain::UserDraft;
/// use users_api::domain::ports::UserRepository;
/// use users_api::outbound::persistence::InMemoryUserRepository;
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let repo = InMemoryUserRepository::new();
/// let user = repo.save(UserDraft::new("Alice")).await.unwrap();
/// assert!(repo.exists_by_id(user.id()).await.unwrap());
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryUserRepository {
    store: Mutex<Store>,
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self {
            store: Mutex::new(Store {
                next_id: 1,
                users: BTreeMap::new(),
            }),
        }
    }
}

impl InMemoryUserRepository {
    /// Create an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Store>, UserPersistenceError> {
        self.store
            .lock()
            .map_err(|_| UserPersistenceError::query("in-memory user store poisoned"))
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.lock()?.users.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, UserPersistenceError> {
        Ok(self.lock()?.users.values().cloned().collect())
    }

    async fn save(&self, draft: UserDraft) -> Result<User, UserPersistenceError> {
        let mut store = self.lock()?;
        if let Some(id) = draft.id() {
            let stored = store
                .users
                .get_mut(&id)
                .ok_or_else(|| UserPersistenceError::missing(id))?;
            *stored = draft.into_user(id);
            return Ok(stored.clone());
        }
        let id = UserId::new(store.next_id);
        store.next_id = store.next_id.saturating_add(1);
        let user = draft.into_user(id);
        store.users.insert(id, user.clone());
        Ok(user)
    }

    async fn exists_by_id(&self, id: UserId) -> Result<bool, UserPersistenceError> {
        Ok(self.lock()?.users.contains_key(&id))
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), UserPersistenceError> {
        self.lock()?.users.remove(&id);
        Ok(())
    }
}
