//! Name of the backing users table.

use std::fmt;

/// Validation errors for [`TableName`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TableNameValidationError {
    /// The name was empty or whitespace only.
    #[error("table name must not be empty")]
    Empty,
}

/// Non-empty table name supplied at start-up.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TableName(String);

impl TableName {
    /// Validate and construct a table name. Surrounding whitespace is trimmed.
    pub fn new(name: impl AsRef<str>) -> Result<Self, TableNameValidationError> {
        let trimmed = name.as_ref().trim();
        if trimmed.is_empty() {
            return Err(TableNameValidationError::Empty);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for TableName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for TableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}
