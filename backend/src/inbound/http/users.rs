//! User record API handlers.
//!
//! ```text
//! POST   /users          {"userId":"u1","name":"Alice"}
//! GET    /users
//! GET    /users/{userId}
//! PUT    /users/{userId} {"name":"Bob"}
//! DELETE /users/{userId}
//! ```
//!
//! Bodies are validated here, before any store call; each handler then makes
//! a single call on the user record ports.

use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;
use utoipa::ToSchema;

use crate::domain::{Error, UserId, UserName, UserRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{ErrorSchema, UserRecordSchema};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    NAME, USER_ID, parse_user_id, require_string, update_fields_required_error,
};

/// Message returned after a successful rename.
pub const UPDATE_SUCCEEDED: &str = "User updated successfully";

/// Request body for `POST /users`.
///
/// Fields are kept as raw JSON so a wrongly typed value is reported by name.
/// Only a JSON object is accepted; arrays and scalars fail extraction.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct CreateUserRequest {
    #[schema(value_type = String, example = "u1")]
    pub user_id: Option<Value>,
    #[schema(value_type = String, example = "Alice")]
    pub name: Option<Value>,
}

impl From<Map<String, Value>> for CreateUserRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            user_id: body.remove(USER_ID.as_str()),
            name: body.remove(NAME.as_str()),
        }
    }
}

impl TryFrom<CreateUserRequest> for UserRecord {
    type Error = Error;

    fn try_from(value: CreateUserRequest) -> Result<Self, Self::Error> {
        let user_id = require_string(value.user_id, USER_ID)?;
        let name = require_string(value.name, NAME)?;
        let user_id = parse_user_id(user_id, USER_ID)?;
        Ok(Self::new(user_id, UserName::new(name)))
    }
}

/// Request body for `PUT /users/{userId}`.
///
/// Only `name` is read; any `userId` in the body is ignored because the
/// identifier comes from the path. Only a JSON object is accepted.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase", from = "Map<String, Value>")]
pub struct UpdateUserRequest {
    #[schema(value_type = String, example = "Bob")]
    pub name: Option<Value>,
}

impl From<Map<String, Value>> for UpdateUserRequest {
    fn from(mut body: Map<String, Value>) -> Self {
        Self {
            name: body.remove(NAME.as_str()),
        }
    }
}

impl TryFrom<UpdateUserRequest> for UserName {
    type Error = Error;

    fn try_from(value: UpdateUserRequest) -> Result<Self, Self::Error> {
        match value.name {
            Some(Value::String(name)) => Ok(Self::new(name)),
            _ => Err(update_fields_required_error()),
        }
    }
}

/// Response body for `PUT /users/{userId}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct UpdateUserResponse {
    #[schema(example = "User updated successfully")]
    pub message: String,
    #[schema(value_type = UserRecordSchema)]
    pub user: UserRecord,
}

/// Response body for `DELETE /users/{userId}`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct DeleteUserResponse {
    #[schema(example = "User with userId: u1 has been deleted")]
    pub message: String,
}

fn path_user_id(path: web::Path<String>) -> Result<UserId, Error> {
    parse_user_id(path.into_inner(), USER_ID)
}

/// Create or overwrite a user record.
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "Stored record", body = UserRecordSchema),
        (status = 400, description = "Invalid request", body = ErrorSchema),
        (status = 500, description = "Could not create user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users")]
pub async fn create_user(
    state: web::Data<HttpState>,
    payload: web::Json<CreateUserRequest>,
) -> ApiResult<web::Json<UserRecord>> {
    let record = UserRecord::try_from(payload.into_inner()).inspect_err(|err| {
        debug!(error = %err, "create request rejected");
    })?;
    let created = state.users.create_user(record).await?;
    Ok(web::Json(created))
}

/// List every stored user record.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use user_records::inbound::http::users::list_users;
///
/// let app = App::new().service(list_users);
/// ```
#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All records", body = [UserRecordSchema]),
        (status = 500, description = "Could not find any users.", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "listUsers"
)]
#[get("/users")]
pub async fn list_users(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<UserRecord>>> {
    let records = state.users_query.list_users().await?;
    Ok(web::Json(records))
}

/// Fetch one user record.
#[utoipa::path(
    get,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Stored record", body = UserRecordSchema),
        (status = 404, description = "No record for userId", body = ErrorSchema),
        (status = 500, description = "Could not retrieve user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{userId}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserRecord>> {
    let user_id = path_user_id(path)?;
    let record = state.users_query.get_user(&user_id).await?;
    Ok(web::Json(record))
}

/// Rename an existing user record.
#[utoipa::path(
    put,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "Record identifier")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "Updated record", body = UpdateUserResponse),
        (status = 400, description = "Missing name", body = ErrorSchema),
        (status = 404, description = "No record for userId", body = ErrorSchema),
        (status = 500, description = "Could not update user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{userId}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
) -> ApiResult<web::Json<UpdateUserResponse>> {
    let user_id = path_user_id(path)?;
    let name = UserName::try_from(payload.into_inner())?;
    let user = state.users.update_user(&user_id, name).await?;
    Ok(web::Json(UpdateUserResponse {
        message: UPDATE_SUCCEEDED.to_owned(),
        user,
    }))
}

/// Delete a user record. Succeeds whether or not the record existed.
#[utoipa::path(
    delete,
    path = "/users/{userId}",
    params(("userId" = String, Path, description = "Record identifier")),
    responses(
        (status = 200, description = "Deletion confirmed", body = DeleteUserResponse),
        (status = 500, description = "Could not delete user", body = ErrorSchema)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{userId}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<DeleteUserResponse>> {
    let user_id = path_user_id(path)?;
    state.users.delete_user(&user_id).await?;
    Ok(web::Json(DeleteUserResponse {
        message: format!("User with userId: {user_id} has been deleted"),
    }))
}

/// Register every user record route on `cfg`.
///
/// Each method and path pair is bound exactly once.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(create_user)
        .service(list_users)
        .service(get_user)
        .service(update_user)
        .service(delete_user);
}

#[cfg(test)]
mod tests;
