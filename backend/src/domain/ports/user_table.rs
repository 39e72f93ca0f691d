//! Driven port for the key-value table that stores user records.
//!
//! The table is keyed by `userId` and offers exactly the primitives the
//! service needs: full-overwrite put, full scan, get, single-attribute update,
//! and delete. Adapters own the table name.

use async_trait::async_trait;

use crate::domain::{UserId, UserName, UserRecord};

use super::define_port_error;

define_port_error! {
    /// Errors raised by user table adapters.
    pub enum UserTableError {
        /// The backing store could not be reached.
        Connection { message: String } => "user table connection failed: {message}",
        /// A read or write against the table failed.
        Query { message: String } => "user table query failed: {message}",
    }
}

/// Port over a single key-value table of user records.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserTable: Send + Sync {
    /// Store `record`, replacing any item with the same id.
    async fn put(&self, record: &UserRecord) -> Result<(), UserTableError>;

    /// Return every item in the table, in no particular order.
    async fn scan(&self) -> Result<Vec<UserRecord>, UserTableError>;

    /// Fetch the item keyed by `user_id`.
    async fn get(&self, user_id: &UserId) -> Result<Option<UserRecord>, UserTableError>;

    /// Set `name` on the existing item keyed by `user_id` and return the new
    /// attributes. Returns `Ok(None)` without writing when no item exists.
    async fn update_name(
        &self,
        user_id: &UserId,
        name: &UserName,
    ) -> Result<Option<UserRecord>, UserTableError>;

    /// Remove the item keyed by `user_id`. Absent keys are not an error.
    async fn delete(&self, user_id: &UserId) -> Result<(), UserTableError>;
}
