//! In-process user table backed by a `HashMap`.
//!
//! Used for local runs and tests. The map sits behind a `tokio` read-write
//! lock so concurrent handlers never observe a partially applied write; the
//! conditional rename happens under a single write guard.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::ports::{UserTable, UserTableError};
use crate::domain::{UserId, UserName, UserRecord};

use super::TableName;

/// Volatile [`UserTable`] implementation.
///
/// # Examples
/// ```
/// use user_records::domain::ports::UserTable;
/// use user_records::domain::UserRecord;
/// use user_records::outbound::{InMemoryUserTable, TableName};
///
/// # tokio::runtime::Runtime::new().unwrap().block_on(async {
/// let table = InMemoryUserTable::new(TableName::new("users").expect("valid name"));
/// let record = UserRecord::try_from_strings("u1", "Alice").expect("valid record");
/// table.put(&record).await.expect("put succeeds");
/// assert_eq!(table.get(record.user_id()).await.expect("get succeeds"), Some(record));
/// # });
/// ```
#[derive(Debug)]
pub struct InMemoryUserTable {
    name: TableName,
    items: RwLock<HashMap<UserId, UserRecord>>,
}

impl InMemoryUserTable {
    /// Create an empty table.
    pub fn new(name: TableName) -> Self {
        Self {
            name,
            items: RwLock::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl UserTable for InMemoryUserTable {
    async fn put(&self, record: &UserRecord) -> Result<(), UserTableError> {
        let replaced = self
            .items
            .write()
            .await
            .insert(record.user_id().clone(), record.clone());
        debug!(
            table = %self.name,
            user_id = %record.user_id(),
            overwrite = replaced.is_some(),
            "item put"
        );
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<UserRecord>, UserTableError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn get(&self, user_id: &UserId) -> Result<Option<UserRecord>, UserTableError> {
        Ok(self.items.read().await.get(user_id).cloned())
    }

    async fn update_name(
        &self,
        user_id: &UserId,
        name: &UserName,
    ) -> Result<Option<UserRecord>, UserTableError> {
        let mut items = self.items.write().await;
        let Some(existing) = items.get_mut(user_id) else {
            return Ok(None);
        };
        *existing = existing.clone().with_name(name.clone());
        Ok(Some(existing.clone()))
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), UserTableError> {
        let removed = self.items.write().await.remove(user_id);
        debug!(
            table = %self.name,
            user_id = %user_id,
            existed = removed.is_some(),
            "item deleted"
        );
        Ok(())
    }
}
