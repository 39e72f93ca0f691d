//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers the user record endpoints, the health probes and the
//! schema wrappers from [`crate::inbound::http::schemas`], keeping utoipa out
//! of the domain types. The document backs Swagger UI in debug builds and the
//! `openapi-dump` binary.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema, UserRecordSchema};
use crate::inbound::http::users::{
    CreateUserRequest, DeleteUserResponse, UpdateUserRequest, UpdateUserResponse,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "User records API",
        description = "CRUD over a key-value table of user records, plus health probes."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::list_users,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRecordSchema,
        ErrorSchema,
        ErrorCodeSchema,
        CreateUserRequest,
        UpdateUserRequest,
        UpdateUserResponse,
        DeleteUserResponse,
    )),
    tags(
        (name = "users", description = "User record CRUD"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
