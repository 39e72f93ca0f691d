//! Driving port for user record mutations.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserName, UserRecord};

/// Use-case port for creating, renaming and deleting user records.
#[async_trait]
pub trait UserRecordsCommand: Send + Sync {
    /// Store a record, overwriting any record with the same id.
    async fn create_user(&self, record: UserRecord) -> Result<UserRecord, Error>;

    /// Replace the name of an existing record.
    async fn update_user(&self, user_id: &UserId, name: UserName) -> Result<UserRecord, Error>;

    /// Remove a record if present.
    async fn delete_user(&self, user_id: &UserId) -> Result<(), Error>;
}
