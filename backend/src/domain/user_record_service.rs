//! User record service implementing the command and query driving ports.
//!
//! Each operation issues exactly one call against the [`UserTable`] port and
//! maps its outcome onto a domain [`Error`]. Table failures are logged with
//! their cause and surfaced to callers only as an operation-specific message.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{UserRecordsCommand, UserRecordsQuery, UserTable, UserTableError};
use crate::domain::{Error, UserId, UserName, UserRecord};

/// Message returned when a create cannot be stored.
pub const CREATE_FAILED: &str = "Could not create user";
/// Message returned when the table cannot be scanned.
pub const LIST_FAILED: &str = "Could not find any users.";
/// Message returned when a single read fails.
pub const GET_FAILED: &str = "Could not retrieve user";
/// Message returned when a rename cannot be applied.
pub const UPDATE_FAILED: &str = "Could not update user";
/// Message returned when a delete cannot be applied.
pub const DELETE_FAILED: &str = "Could not delete user";
/// Message returned when no record exists for the requested id.
pub const USER_NOT_FOUND: &str = "Could not find user with provided \"userId\"";

#[derive(Debug, Clone, Copy)]
enum Operation {
    Put,
    Scan,
    Get,
    Update,
    Delete,
}

impl Operation {
    fn as_str(self) -> &'static str {
        match self {
            Self::Put => "put",
            Self::Scan => "scan",
            Self::Get => "get",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }

    fn failure_message(self) -> &'static str {
        match self {
            Self::Put => CREATE_FAILED,
            Self::Scan => LIST_FAILED,
            Self::Get => GET_FAILED,
            Self::Update => UPDATE_FAILED,
            Self::Delete => DELETE_FAILED,
        }
    }
}

fn map_table_error(
    operation: Operation,
    user_id: Option<&UserId>,
) -> impl FnOnce(UserTableError) -> Error {
    move |err| {
        match user_id {
            Some(id) => error!(
                error = %err,
                operation = operation.as_str(),
                user_id = %id,
                "user table call failed"
            ),
            None => error!(
                error = %err,
                operation = operation.as_str(),
                "user table call failed"
            ),
        }
        Error::internal(operation.failure_message())
    }
}

/// Stateless user record service backed by a shared table handle.
///
/// The table handle is built once at start-up and injected here; the service
/// keeps no other state between calls.
#[derive(Clone)]
pub struct UserRecordService {
    table: Arc<dyn UserTable>,
}

impl UserRecordService {
    /// Create a service over the given table adapter.
    pub fn new(table: Arc<dyn UserTable>) -> Self {
        Self { table }
    }
}

#[async_trait]
impl UserRecordsCommand for UserRecordService {
    async fn create_user(&self, record: UserRecord) -> Result<UserRecord, Error> {
        self.table
            .put(&record)
            .await
            .map_err(map_table_error(Operation::Put, Some(record.user_id())))?;
        info!(user_id = %record.user_id(), "user record stored");
        Ok(record)
    }

    async fn update_user(&self, user_id: &UserId, name: UserName) -> Result<UserRecord, Error> {
        let updated = self
            .table
            .update_name(user_id, &name)
            .await
            .map_err(map_table_error(Operation::Update, Some(user_id)))?;

        match updated {
            Some(record) => {
                info!(user_id = %user_id, "user record renamed");
                Ok(record)
            }
            None => {
                debug!(user_id = %user_id, "update skipped for missing user record");
                Err(Error::not_found(USER_NOT_FOUND))
            }
        }
    }

    async fn delete_user(&self, user_id: &UserId) -> Result<(), Error> {
        self.table
            .delete(user_id)
            .await
            .map_err(map_table_error(Operation::Delete, Some(user_id)))?;
        info!(user_id = %user_id, "user record deleted");
        Ok(())
    }
}

#[async_trait]
impl UserRecordsQuery for UserRecordService {
    async fn list_users(&self) -> Result<Vec<UserRecord>, Error> {
        self.table
            .scan()
            .await
            .map_err(map_table_error(Operation::Scan, None))
    }

    async fn get_user(&self, user_id: &UserId) -> Result<UserRecord, Error> {
        self.table
            .get(user_id)
            .await
            .map_err(map_table_error(Operation::Get, Some(user_id)))?
            .ok_or_else(|| Error::not_found(USER_NOT_FOUND))
    }
}

#[cfg(test)]
#[path = "user_record_service_tests.rs"]
mod tests;
