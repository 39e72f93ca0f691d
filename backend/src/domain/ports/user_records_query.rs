//! Driving port for user record reads.
//!
//! Inbound adapters use this port to read records without importing any
//! store adapter.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserRecord};

/// Use-case port for listing and fetching user records.
#[async_trait]
pub trait UserRecordsQuery: Send + Sync {
    /// Return every stored record.
    async fn list_users(&self) -> Result<Vec<UserRecord>, Error>;

    /// Return the record keyed by `user_id`, or a not-found error.
    async fn get_user(&self, user_id: &UserId) -> Result<UserRecord, Error>;
}
