//! Tests for branch HTTP handlers.

use super::*;
use crate::domain::ports::{MockBranchCommand, MockBranchQuery};
use crate::domain::{
    Branch, BranchId, BranchName, BranchState, DomainError, EmailAddress, PhoneNumber,
};
use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use chrono::{DateTime, Utc};
use serde_json::Value;
use std::sync::Arc;

fn test_app(
    command: MockBranchCommand,
    query: MockBranchQuery,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let state = HttpState::new(Arc::new(command), Arc::new(query));
    App::new().app_data(web::Data::new(state)).service(
        web::scope("/api/v1")
            .service(list_branches)
            .service(create_branch)
            .service(get_branch)
            .service(update_phone_number),
    )
}

fn ts(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s)
        .expect("valid timestamp")
        .with_timezone(&Utc)
}

fn sample_branch(id: &str) -> Branch {
    Branch::create(
        BranchId::new(id).expect("branch id"),
        NewBranch {
            email_address: EmailAddress::new("branch@bank.example").expect("email"),
            name: BranchName::new("Main St").expect("name"),
            phone_number: PhoneNumber::new("+15551234567").expect("phone"),
            state: BranchState::Active,
        },
        ts("2026-01-10T09:30:00Z"),
    )
}

fn sample_create_payload() -> Value {
    serde_json::json!({
        "emailAddress": "branch@bank.example",
        "name": "Main St",
        "phoneNumber": "+15551234567",
        "state": "ACTIVE"
    })
}

#[actix_web::test]
async fn list_branches_returns_every_snapshot() {
    let mut query = MockBranchQuery::new();
    query
        .expect_list()
        .times(1)
        .return_once(|| Ok(vec![sample_branch("br-1"), sample_branch("br-2")]));
    let app = actix_test::init_service(test_app(MockBranchCommand::new(), query)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/branches")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    let branches = body.as_array().expect("array body");
    assert_eq!(branches.len(), 2);
    assert_eq!(branches[0]["id"], "br-1");
    assert_eq!(branches[1]["id"], "br-2");
}

#[actix_web::test]
async fn create_branch_returns_the_stored_snapshot() {
    let mut command = MockBranchCommand::new();
    command
        .expect_create()
        .times(1)
        .return_once(|_| Ok(sample_branch("generated-id")));
    let app = actix_test::init_service(test_app(command, MockBranchQuery::new())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/branches")
        .set_json(sample_create_payload())
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["id"], "generated-id");
    assert_eq!(body["emailAddress"], "branch@bank.example");
    assert_eq!(body["state"], "ACTIVE");
    assert_eq!(body["creationDate"], body["lastModifiedDate"]);
    assert_eq!(body["holidays"], Value::Array(vec![]));
}

#[actix_web::test]
async fn create_branch_rejects_invalid_email() {
    let app =
        actix_test::init_service(test_app(MockBranchCommand::new(), MockBranchQuery::new())).await;

    let mut payload = sample_create_payload();
    payload["emailAddress"] = Value::String("not-an-email".to_owned());

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/branches")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_data");
    assert_eq!(body["details"]["field"], "emailAddress");
    assert_eq!(body["details"]["code"], "invalid_email");
}

#[actix_web::test]
async fn create_branch_rejects_missing_name() {
    let app =
        actix_test::init_service(test_app(MockBranchCommand::new(), MockBranchQuery::new())).await;

    let mut payload = sample_create_payload();
    payload
        .as_object_mut()
        .expect("object payload")
        .remove("name");

    let request = actix_test::TestRequest::post()
        .uri("/api/v1/branches")
        .set_json(payload)
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_data");
    assert_eq!(body["details"]["field"], "name");
    assert_eq!(body["details"]["code"], "missing_field");
}

#[actix_web::test]
async fn get_branch_maps_missing_branch_to_404() {
    let mut query = MockBranchQuery::new();
    query
        .expect_get()
        .times(1)
        .return_once(|id| Err(DomainError::not_found(id)));
    let app = actix_test::init_service(test_app(MockBranchCommand::new(), query)).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/v1/branches/nonexistent")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "not_found");
    assert!(
        body["message"]
            .as_str()
            .expect("message string")
            .contains("nonexistent")
    );
}

#[actix_web::test]
async fn update_phone_number_passes_the_parsed_number() {
    let mut command = MockBranchCommand::new();
    command
        .expect_update_phone_number()
        .times(1)
        .withf(|id, phone| id.as_ref() == "br-1" && phone.as_ref() == "0998887766")
        .return_once(|_, _| Ok(sample_branch("br-1")));
    let app = actix_test::init_service(test_app(command, MockBranchQuery::new())).await;

    let request = actix_test::TestRequest::patch()
        .uri("/api/v1/branches/br-1/phone?phoneNumber=0998887766")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[actix_web::test]
async fn update_phone_number_rejects_pattern_violations() {
    let app =
        actix_test::init_service(test_app(MockBranchCommand::new(), MockBranchQuery::new())).await;

    let request = actix_test::TestRequest::patch()
        .uri("/api/v1/branches/br-1/phone?phoneNumber=12ab")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "invalid_data");
    assert_eq!(body["details"]["field"], "phoneNumber");
    assert_eq!(body["details"]["code"], "invalid_phone_number");
}

#[actix_web::test]
async fn update_phone_number_requires_the_query_parameter() {
    let app =
        actix_test::init_service(test_app(MockBranchCommand::new(), MockBranchQuery::new())).await;

    let request = actix_test::TestRequest::patch()
        .uri("/api/v1/branches/br-1/phone")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = actix_test::read_body_json(response).await;
    assert_eq!(body["details"]["code"], "missing_field");
}
