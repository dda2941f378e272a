//! User data model.
//!
//! A [`User`] is a persisted record: its [`UserId`] is assigned by the store
//! and never changes afterwards. Records that have not been stored yet (or
//! that are about to be written back) travel as a [`UserDraft`].

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned user identifier.
///
/// Serialises as a bare JSON integer.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id: UserId = "42".parse().expect("numeric id");
/// assert_eq!(id.get(), 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Raw integer value.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl From<i64> for UserId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<UserId> for i64 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Persisted user record.
///
/// ## Invariants
/// - `id` is unique within the store and immutable once assigned.
///
/// # Examples
/// ```
/// use users_api::domain::{User, UserId};
///
/// let user = User::new(UserId::new(1), "Alice");
/// assert_eq!(user.name(), "Alice");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned identifier.
    id: UserId,
    /// Free-form user name.
    name: String,
}

impl User {
    /// Build a user from its persisted parts.
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Stable identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Current name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Produce a draft carrying the same identifier with a replacement name.
    ///
    /// The identifier is carried over untouched so saving the draft updates
    /// this record in place.
    #[must_use]
    pub fn renamed(&self, name: impl Into<String>) -> UserDraft {
        UserDraft {
            id: Some(self.id),
            name: name.into(),
        }
    }
}

/// A user record on its way into the store.
///
/// `id` is `None` for users the store has never seen; the store assigns one
/// on save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDraft {
    id: Option<UserId>,
    name: String,
}

impl UserDraft {
    /// Draft for a brand new user.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
        }
    }

    /// Identifier, when the draft targets an existing record.
    #[must_use]
    pub const fn id(&self) -> Option<UserId> {
        self.id
    }

    /// Name to persist.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Complete the draft with the identifier the store settled on.
    #[must_use]
    pub fn into_user(self, id: UserId) -> User {
        User { id, name: self.name }
    }
}

impl From<User> for UserDraft {
    fn from(value: User) -> Self {
        Self {
            id: Some(value.id),
            name: value.name,
        }
    }
}
