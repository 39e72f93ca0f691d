//! Boundary validation helpers for inbound HTTP request bodies.
//!
//! Request DTOs keep their fields as raw JSON values so the adapter can name
//! the first offending field instead of failing inside serde.

use serde_json::{Value, json};

use crate::domain::{Error, UserId};

/// Validation error codes reported in `details.code`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    InvalidType,
    EmptyValue,
    MissingField,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::InvalidType => "invalid_type",
            Self::EmptyValue => "empty_value",
            Self::MissingField => "missing_field",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub(crate) fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const USER_ID: FieldName = FieldName::new("userId");
pub(crate) const NAME: FieldName = FieldName::new("name");

fn field_error(field: FieldName, code: ErrorCode, message: String) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

pub(crate) fn invalid_type_error(field: FieldName) -> Error {
    field_error(
        field,
        ErrorCode::InvalidType,
        format!("\"{}\" must be a string", field.as_str()),
    )
}

pub(crate) fn empty_value_error(field: FieldName) -> Error {
    field_error(
        field,
        ErrorCode::EmptyValue,
        format!("\"{}\" must not be empty", field.as_str()),
    )
}

/// Error for update bodies lacking a usable `name`.
pub(crate) fn update_fields_required_error() -> Error {
    field_error(
        NAME,
        ErrorCode::MissingField,
        "userId and name are required".to_owned(),
    )
}

/// Accept only JSON strings; `null`, absent and other types are rejected.
pub(crate) fn require_string(value: Option<Value>, field: FieldName) -> Result<String, Error> {
    match value {
        Some(Value::String(text)) => Ok(text),
        _ => Err(invalid_type_error(field)),
    }
}

pub(crate) fn parse_user_id(raw: String, field: FieldName) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|_| empty_value_error(field))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode as DomainErrorCode;
    use rstest::rstest;

    #[rstest]
    #[case(None)]
    #[case(Some(Value::Null))]
    #[case(Some(json!(42)))]
    #[case(Some(json!(["u1"])))]
    #[case(Some(json!({ "id": "u1" })))]
    fn non_strings_are_rejected(#[case] value: Option<Value>) {
        let err = require_string(value, USER_ID).expect_err("not a string");
        assert_eq!(err.code(), DomainErrorCode::InvalidRequest);
        assert_eq!(err.message(), "\"userId\" must be a string");
        assert_eq!(
            err.details(),
            Some(&json!({ "field": "userId", "code": "invalid_type" }))
        );
    }

    #[test]
    fn strings_pass_through_unchanged() {
        let value = require_string(Some(json!("  Alice ")), NAME).expect("string");
        assert_eq!(value, "  Alice ");
    }

    #[test]
    fn empty_user_id_is_rejected() {
        let err = parse_user_id(String::new(), USER_ID).expect_err("empty id");
        assert_eq!(err.message(), "\"userId\" must not be empty");
    }
}
