//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, web};

use crate::domain::ports::{MockUserTable, UserTable, UserTableError};
use crate::inbound::http::error::{json_error_handler, route_not_found};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::users;
use crate::outbound::{InMemoryUserTable, TableName};

/// Empty in-memory table named `users`.
pub fn memory_table() -> Arc<InMemoryUserTable> {
    Arc::new(InMemoryUserTable::new(
        TableName::new("users").expect("valid table name"),
    ))
}

/// Table double whose every call fails with a query error.
///
/// Each expectation may be hit any number of times, including zero.
pub fn failing_table() -> MockUserTable {
    let failure = || UserTableError::query("table unavailable");
    let mut table = MockUserTable::new();
    table.expect_put().returning(move |_| Err(failure()));
    table.expect_scan().returning(move || Err(failure()));
    table.expect_get().returning(move |_| Err(failure()));
    table.expect_update_name().returning(move |_, _| Err(failure()));
    table.expect_delete().returning(move |_| Err(failure()));
    table
}

/// Build an app with the user routes, JSON error handling and 404 fallback.
pub fn users_app(
    table: Arc<dyn UserTable>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(web::Data::new(HttpState::from_table(table)))
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .configure(users::configure)
        .default_service(web::to(route_not_found))
}
