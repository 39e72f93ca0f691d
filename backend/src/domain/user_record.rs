//! User record data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Validation errors returned when building record components.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserRecordValidationError {
    /// The identifier was the empty string.
    #[error("user id must not be empty")]
    EmptyId,
}

/// Partition key of a user record.
///
/// Any non-empty string is accepted; the store treats it as opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    pub fn new(id: impl Into<String>) -> Result<Self, UserRecordValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserRecordValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserRecordValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Mutable display name of a user record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserName(String);

impl UserName {
    /// Wrap a name value.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

/// A single entry of the users table.
///
/// ## Invariants
/// - `user_id` is non-empty and never changes after creation.
/// - Both fields are always present.
///
/// Serialised as `{"userId": "...", "name": "..."}`.
///
/// # Examples
/// ```
/// use user_records::domain::{UserName, UserRecord};
///
/// let record = UserRecord::try_from_strings("u1", "Alice").expect("valid record");
/// assert_eq!(record.user_id().as_ref(), "u1");
/// let renamed = record.with_name(UserName::new("Bob"));
/// assert_eq!(renamed.name().as_ref(), "Bob");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    user_id: UserId,
    name: UserName,
}

impl UserRecord {
    /// Build a record from validated components.
    pub fn new(user_id: UserId, name: UserName) -> Self {
        Self { user_id, name }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        user_id: impl Into<String>,
        name: impl Into<String>,
    ) -> Result<Self, UserRecordValidationError> {
        Ok(Self::new(UserId::new(user_id)?, UserName::new(name)))
    }

    /// Stable record identifier.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Current name.
    pub fn name(&self) -> &UserName {
        &self.name
    }

    /// Return a copy of the record with `name` replaced and `user_id` kept.
    #[must_use]
    pub fn with_name(self, name: UserName) -> Self {
        Self { name, ..self }
    }
}
