//! Domain ports for the hexagonal boundary.
//!
//! Driving ports (`UserRecordsCommand`, `UserRecordsQuery`) are called by
//! inbound adapters; the driven port (`UserTable`) is implemented by outbound
//! store adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod user_records_command;
mod user_records_query;
mod user_table;

pub use user_records_command::UserRecordsCommand;
pub use user_records_query::UserRecordsQuery;
#[cfg(test)]
pub use user_table::MockUserTable;
pub use user_table::{UserTable, UserTableError};
