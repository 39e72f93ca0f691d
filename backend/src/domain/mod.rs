//! Domain primitives, ports and the user record service.
//!
//! Purpose: define strongly typed entities shared by the inbound and
//! outbound adapters. Types stay framework agnostic; serialisation contracts
//! are documented on each type.
//!
//! Public surface:
//! - `Error` / `ErrorCode`: transport-agnostic failure payload.
//! - `TraceId`: request-scoped correlation identifier.
//! - `UserRecord`, `UserId`, `UserName`: the stored entity.
//! - `UserRecordService`: the command/query implementation over `UserTable`.

pub mod error;
pub mod ports;
pub mod trace_id;
pub mod user_record;
pub mod user_record_service;

pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user_record::{UserId, UserName, UserRecord, UserRecordValidationError};
pub use self::user_record_service::UserRecordService;
