//! Tests for user record API handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::test as actix_test;
use rstest::rstest;
use serde_json::{Value, json};

use super::*;
use crate::domain::ports::UserTable;
use crate::inbound::http::test_utils::{failing_table, memory_table, users_app};

async fn send(
    table: Arc<dyn UserTable>,
    request: actix_test::TestRequest,
) -> (StatusCode, Value) {
    let app = actix_test::init_service(users_app(table)).await;
    let response = actix_test::call_service(&app, request.to_request()).await;
    let status = response.status();
    let body = actix_test::read_body(response).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("JSON body")
    };
    (status, value)
}

async fn seeded(user_id: &str, name: &str) -> Arc<dyn UserTable> {
    let table = memory_table();
    let record = UserRecord::try_from_strings(user_id, name).expect("valid record");
    table.put(&record).await.expect("seed record");
    table
}

fn error_message(body: &Value) -> Option<&str> {
    body.get("error").and_then(Value::as_str)
}

#[actix_web::test]
async fn create_echoes_stored_record() {
    let table = memory_table();
    let request = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "userId": "u1", "name": "Alice" }));

    let (status, body) = send(table.clone(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "userId": "u1", "name": "Alice" }));
    let id = UserId::new("u1").expect("valid id");
    assert!(table.get(&id).await.expect("get").is_some());
}

#[actix_web::test]
async fn create_overwrites_existing_record() {
    let table = seeded("u1", "Alice").await;
    let request = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(json!({ "userId": "u1", "name": "Carol" }));

    let (status, _) = send(table.clone(), request).await;

    assert_eq!(status, StatusCode::OK);
    let id = UserId::new("u1").expect("valid id");
    let stored = table.get(&id).await.expect("get").expect("present");
    assert_eq!(stored.name().as_ref(), "Carol");
}

#[rstest]
#[case(json!({ "userId": 1, "name": "Alice" }), "\"userId\" must be a string", "userId")]
#[case(json!({ "name": "Alice" }), "\"userId\" must be a string", "userId")]
#[case(json!({ "userId": "u1", "name": 7 }), "\"name\" must be a string", "name")]
#[case(json!({ "userId": "u1" }), "\"name\" must be a string", "name")]
#[case(json!({ "userId": null, "name": null }), "\"userId\" must be a string", "userId")]
#[case(json!({ "userId": "", "name": "Alice" }), "\"userId\" must not be empty", "userId")]
#[case(json!({ "userId": "", "name": false }), "\"name\" must be a string", "name")]
#[actix_web::test]
async fn create_rejects_invalid_bodies_before_the_store(
    #[case] payload: Value,
    #[case] message: &str,
    #[case] field: &str,
) {
    // The failing table would turn any store call into a 500.
    let request = actix_test::TestRequest::post()
        .uri("/users")
        .set_json(payload);

    let (status, body) = send(Arc::new(failing_table()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), Some(message));
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["field"], field);
}

fn raw_json(request: actix_test::TestRequest, payload: &'static str) -> actix_test::TestRequest {
    request
        .insert_header(("content-type", "application/json"))
        .set_payload(payload)
}

#[rstest]
#[case("{\"userId\":")]
#[case("[\"u1\",\"Alice\"]")]
#[case("\"u1\"")]
#[case("null")]
#[actix_web::test]
async fn create_rejects_bodies_that_are_not_objects(#[case] payload: &'static str) {
    let table = memory_table();
    let request = raw_json(actix_test::TestRequest::post().uri("/users"), payload);

    let (status, body) = send(table.clone(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["details"]["code"], "invalid_json");
    assert!(table.scan().await.expect("scan").is_empty());
}

#[rstest]
#[case("[\"Bob\"]")]
#[case("\"Bob\"")]
#[actix_web::test]
async fn update_rejects_bodies_that_are_not_objects(#[case] payload: &'static str) {
    let table = seeded("u1", "Alice").await;
    let request = raw_json(actix_test::TestRequest::put().uri("/users/u1"), payload);

    let (status, body) = send(table.clone(), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], "invalid_json");
    let id = UserId::new("u1").expect("valid id");
    let stored = table.get(&id).await.expect("get").expect("present");
    assert_eq!(stored.name().as_ref(), "Alice");
}

#[actix_web::test]
async fn list_returns_every_record() {
    let table = seeded("u1", "Alice").await;
    let bob = UserRecord::try_from_strings("u2", "Bob").expect("valid record");
    table.put(&bob).await.expect("seed record");

    let (status, body) = send(table, actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    let mut ids: Vec<&str> = body
        .as_array()
        .expect("array body")
        .iter()
        .filter_map(|item| item["userId"].as_str())
        .collect();
    ids.sort_unstable();
    assert_eq!(ids, ["u1", "u2"]);
}

#[actix_web::test]
async fn list_of_empty_table_is_empty_array() {
    let (status, body) = send(memory_table(), actix_test::TestRequest::get().uri("/users")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn get_returns_record() {
    let table = seeded("u1", "Alice").await;

    let (status, body) = send(table, actix_test::TestRequest::get().uri("/users/u1")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "userId": "u1", "name": "Alice" }));
}

#[actix_web::test]
async fn get_missing_record_is_not_found() {
    let (status, body) = send(memory_table(), actix_test::TestRequest::get().uri("/users/nope")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(&body),
        Some("Could not find user with provided \"userId\"")
    );
}

#[actix_web::test]
async fn update_renames_and_returns_new_record() {
    let table = seeded("u1", "Alice").await;
    let request = actix_test::TestRequest::put()
        .uri("/users/u1")
        .set_json(json!({ "name": "Bob" }));

    let (status, body) = send(table, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "message": UPDATE_SUCCEEDED,
            "user": { "userId": "u1", "name": "Bob" },
        })
    );
}

#[actix_web::test]
async fn update_ignores_user_id_in_body() {
    let table = seeded("u1", "Alice").await;
    let request = actix_test::TestRequest::put()
        .uri("/users/u1")
        .set_json(json!({ "userId": "u9", "name": "Bob" }));

    let (status, body) = send(table, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["userId"], "u1");
}

#[rstest]
#[case(json!({}))]
#[case(json!({ "name": null }))]
#[case(json!({ "name": 3 }))]
#[actix_web::test]
async fn update_requires_string_name(#[case] payload: Value) {
    let request = actix_test::TestRequest::put()
        .uri("/users/u1")
        .set_json(payload);

    let (status, body) = send(Arc::new(failing_table()), request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), Some("userId and name are required"));
}

#[actix_web::test]
async fn update_of_unknown_record_is_not_found_and_writes_nothing() {
    let table = memory_table();
    let request = actix_test::TestRequest::put()
        .uri("/users/ghost")
        .set_json(json!({ "name": "Bob" }));

    let (status, body) = send(table.clone(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        error_message(&body),
        Some("Could not find user with provided \"userId\"")
    );
    assert!(table.scan().await.expect("scan").is_empty());
}

#[rstest]
#[case("u1")]
#[case("never-existed")]
#[actix_web::test]
async fn delete_confirms_with_path_id(#[case] user_id: &str) {
    let table = seeded("u1", "Alice").await;
    let uri = format!("/users/{user_id}");

    let (status, body) = send(table.clone(), actix_test::TestRequest::delete().uri(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({ "message": format!("User with userId: {user_id} has been deleted") })
    );
    let id = UserId::new(user_id).expect("valid id");
    assert!(table.get(&id).await.expect("get").is_none());
}

#[rstest]
#[case(actix_test::TestRequest::post().uri("/users").set_json(json!({ "userId": "u1", "name": "A" })), "Could not create user")]
#[case(actix_test::TestRequest::get().uri("/users"), "Could not find any users.")]
#[case(actix_test::TestRequest::get().uri("/users/u1"), "Could not retrieve user")]
#[case(actix_test::TestRequest::put().uri("/users/u1").set_json(json!({ "name": "B" })), "Could not update user")]
#[case(actix_test::TestRequest::delete().uri("/users/u1"), "Could not delete user")]
#[actix_web::test]
async fn store_failures_map_to_operation_messages(
    #[case] request: actix_test::TestRequest,
    #[case] message: &str,
) {
    let (status, body) = send(Arc::new(failing_table()), request).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(error_message(&body), Some(message));
    assert_eq!(body["code"], "internal_error");
    assert!(
        !body.to_string().contains("table unavailable"),
        "store cause leaked: {body}"
    );
}

#[rstest]
#[case(actix_test::TestRequest::get().uri("/nope"))]
#[case(actix_test::TestRequest::patch().uri("/users/u1"))]
#[case(actix_test::TestRequest::delete().uri("/users"))]
#[case(actix_test::TestRequest::post().uri("/users/u1"))]
#[case(actix_test::TestRequest::get().uri("/users/u1/extra"))]
#[actix_web::test]
async fn unmatched_routes_are_not_found(#[case] request: actix_test::TestRequest) {
    let (status, body) = send(memory_table(), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), Some("Not Found"));
}
