//! Outbound adapters implementing the [`UserTable`](crate::domain::ports::UserTable) port.
//!
//! - **memory**: volatile in-process table, the default for local runs and tests
//! - **dynamodb**: Amazon DynamoDB table (feature `dynamodb`)
//!
//! Adapters are thin translators between domain records and store items and
//! contain no business rules.

#[cfg(feature = "dynamodb")]
pub mod dynamodb;
pub mod memory;
mod table_name;

#[cfg(feature = "dynamodb")]
pub use dynamodb::DynamoDbUserTable;
pub use memory::InMemoryUserTable;
pub use table_name::{TableName, TableNameValidationError};
