//! Shared HTTP adapter state.
//!
//! Handlers receive this via `actix_web::web::Data` so they depend only on
//! domain ports and stay testable without I/O.

use std::sync::Arc;

use crate::domain::UserRecordService;
use crate::domain::ports::{UserRecordsCommand, UserRecordsQuery, UserTable};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UserRecordsCommand>,
    pub users_query: Arc<dyn UserRecordsQuery>,
}

impl HttpState {
    /// Construct state from explicit command and query ports.
    pub fn new(users: Arc<dyn UserRecordsCommand>, users_query: Arc<dyn UserRecordsQuery>) -> Self {
        Self { users, users_query }
    }

    /// Wire both ports to a single [`UserRecordService`] over `table`.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use user_records::inbound::http::state::HttpState;
    /// use user_records::outbound::{InMemoryUserTable, TableName};
    ///
    /// let table = InMemoryUserTable::new(TableName::new("users").expect("valid name"));
    /// let state = HttpState::from_table(Arc::new(table));
    /// let _query = state.users_query.clone();
    /// ```
    pub fn from_table(table: Arc<dyn UserTable>) -> Self {
        let service = Arc::new(UserRecordService::new(table));
        Self::new(service.clone(), service)
    }
}
