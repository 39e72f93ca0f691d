//! Backend entry-point: loads settings, builds the table adapter and serves
//! the user record API.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use server::{ServerConfig, create_server};
use user_records::domain::ports::UserTable;
use user_records::inbound::http::health::HealthState;
use user_records::inbound::http::state::HttpState;
use user_records::outbound::{InMemoryUserTable, TableName};
use user_records::settings::{AppSettings, StoreKind};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;
    let table_name = settings.table_name().map_err(std::io::Error::other)?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let store = settings.store().map_err(std::io::Error::other)?;

    let table = build_table(store, table_name).await?;
    let config = ServerConfig::new(bind_addr, HttpState::from_table(table));
    info!(addr = %config.bind_addr(), store = ?store, "starting server");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state.clone(), config)?;
    let result = server.await;
    health_state.mark_draining();
    result
}

async fn build_table(store: StoreKind, name: TableName) -> std::io::Result<Arc<dyn UserTable>> {
    match store {
        StoreKind::Memory => Ok(Arc::new(InMemoryUserTable::new(name))),
        #[cfg(feature = "dynamodb")]
        StoreKind::DynamoDb => Ok(Arc::new(
            user_records::outbound::DynamoDbUserTable::from_env(name).await,
        )),
        #[cfg(not(feature = "dynamodb"))]
        StoreKind::DynamoDb => Err(std::io::Error::other(
            "dynamodb store requested but the `dynamodb` feature is not enabled",
        )),
    }
}
