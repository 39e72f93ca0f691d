//! Process configuration loaded via OrthoConfig.
//!
//! Values layer CLI flags over `USERS_*` environment variables over defaults.

use std::net::SocketAddr;
use std::str::FromStr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::{TableName, TableNameValidationError};

/// Address the HTTP listener binds when none is configured.
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Store adapter used when none is configured.
pub const DEFAULT_STORE: &str = "memory";

/// Backing store selected at start-up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// Volatile in-process table.
    Memory,
    /// Amazon DynamoDB table.
    DynamoDb,
}

impl FromStr for StoreKind {
    type Err = SettingsError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "dynamodb" => Ok(Self::DynamoDb),
            other => Err(SettingsError::UnknownStore(other.to_owned())),
        }
    }
}

/// Configuration values that fail validation.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("table name is required (set USERS_TABLE or --table)")]
    MissingTable,
    #[error("invalid table name: {0}")]
    InvalidTable(#[from] TableNameValidationError),
    #[error("invalid bind address {value:?}: {source}")]
    InvalidBindAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },
    #[error("unknown store {0:?}; expected \"memory\" or \"dynamodb\"")]
    UnknownStore(String),
}

/// Settings for the user records service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "USERS")]
pub struct AppSettings {
    /// Name of the table holding user records.
    pub table: Option<String>,
    /// Socket address for the HTTP listener.
    #[ortho_config(default = DEFAULT_BIND_ADDR.to_owned())]
    pub bind_addr: String,
    /// Store adapter: `memory` or `dynamodb`.
    #[ortho_config(default = DEFAULT_STORE.to_owned())]
    pub store: String,
}

impl AppSettings {
    /// Return the validated table name.
    pub fn table_name(&self) -> Result<TableName, SettingsError> {
        let raw = self.table.as_deref().ok_or(SettingsError::MissingTable)?;
        Ok(TableName::new(raw)?)
    }

    /// Return the listener address; [`DEFAULT_BIND_ADDR`] when unset.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        self.bind_addr
            .parse()
            .map_err(|source| SettingsError::InvalidBindAddr {
                value: self.bind_addr.clone(),
                source,
            })
    }

    /// Return the selected store; [`DEFAULT_STORE`] when unset.
    pub fn store(&self) -> Result<StoreKind, SettingsError> {
        self.store.parse()
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 3] = ["USERS_TABLE", "USERS_BIND_ADDR", "USERS_STORE"];

    fn load(args: &[&str]) -> AppSettings {
        let argv = std::iter::once("user-records")
            .chain(args.iter().copied())
            .map(OsString::from);
        AppSettings::load_from_iter(argv).expect("config should load")
    }

    fn cleared() -> Vec<(&'static str, Option<String>)> {
        VARS.iter().map(|name| (*name, None)).collect()
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(cleared());

        let settings = load(&[]);
        assert_eq!(
            settings.bind_addr().expect("default addr"),
            DEFAULT_BIND_ADDR.parse::<SocketAddr>().expect("valid")
        );
        assert_eq!(settings.store().expect("default store"), StoreKind::Memory);
        assert!(matches!(
            settings.table_name(),
            Err(SettingsError::MissingTable)
        ));
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("USERS_TABLE", Some("users-prod".to_owned())),
            ("USERS_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            ("USERS_STORE", Some("DynamoDB".to_owned())),
        ]);

        let settings = load(&[]);
        assert_eq!(
            settings.table_name().expect("table").as_ref(),
            "users-prod"
        );
        assert_eq!(
            settings.bind_addr().expect("addr").to_string(),
            "127.0.0.1:9000"
        );
        assert_eq!(settings.store().expect("store"), StoreKind::DynamoDb);
    }

    #[rstest]
    fn cli_flags_override_environment() {
        let _guard = lock_env([
            ("USERS_TABLE", Some("from-env".to_owned())),
            ("USERS_BIND_ADDR", None),
            ("USERS_STORE", None),
        ]);

        let settings = load(&["--table", "from-cli"]);
        assert_eq!(settings.table_name().expect("table").as_ref(), "from-cli");
    }

    #[rstest]
    #[case("USERS_BIND_ADDR", "not-an-addr")]
    #[case("USERS_STORE", "postgres")]
    #[case("USERS_TABLE", "   ")]
    fn invalid_values_are_reported(#[case] var: &'static str, #[case] value: &str) {
        let mut vars = cleared();
        for entry in &mut vars {
            if entry.0 == var {
                entry.1 = Some(value.to_owned());
            }
        }
        let _guard = lock_env(vars);

        let settings = load(&[]);
        let failed = match var {
            "USERS_BIND_ADDR" => settings.bind_addr().is_err(),
            "USERS_STORE" => settings.store().is_err(),
            _ => settings.table_name().is_err(),
        };
        assert!(failed, "{var}={value:?} should be rejected");
    }
}
