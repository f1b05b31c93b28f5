//! Regression coverage for domain errors.

use super::*;
use rstest::rstest;

#[rstest]
#[case(ErrorCode::InvalidData, "\"invalid_data\"")]
#[case(ErrorCode::NotFound, "\"not_found\"")]
#[case(ErrorCode::HolidayOperation, "\"holiday_operation\"")]
#[case(ErrorCode::InternalError, "\"internal_error\"")]
fn error_codes_serialise_as_snake_case(#[case] code: ErrorCode, #[case] expected: &str) {
    let serialised = serde_json::to_string(&code).expect("serialise code");
    assert_eq!(serialised, expected);
}

#[rstest]
fn not_found_carries_branch_id() {
    let error = DomainError::not_found("br-123");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "no branch found with id: br-123");
    let details = error.details().and_then(Value::as_object).expect("details");
    assert_eq!(
        details.get("branchId").and_then(Value::as_str),
        Some("br-123")
    );
}

#[rstest]
fn invalid_data_carries_field_and_value() {
    let error = DomainError::invalid_data("phoneNumber", "abc");

    assert_eq!(error.code(), ErrorCode::InvalidData);
    let details = error.details().and_then(Value::as_object).expect("details");
    assert_eq!(
        details.get("field").and_then(Value::as_str),
        Some("phoneNumber")
    );
    assert_eq!(details.get("value").and_then(Value::as_str), Some("abc"));
}

#[rstest]
#[case(HolidayAction::Add, "add")]
#[case(HolidayAction::Delete, "delete")]
#[case(HolidayAction::Verify, "verify")]
fn holiday_operation_names_the_action(#[case] action: HolidayAction, #[case] expected: &str) {
    let error = DomainError::holiday_operation(action, "br-1", "boom");

    assert_eq!(error.code(), ErrorCode::HolidayOperation);
    assert!(error.message().contains(expected));
    let details = error.details().and_then(Value::as_object).expect("details");
    assert_eq!(details.get("action").and_then(Value::as_str), Some(expected));
}

#[rstest]
fn errors_round_trip_through_serde() {
    let error = DomainError::holiday_operation(HolidayAction::Delete, "br-9", "empty");
    let json = serde_json::to_value(&error).expect("serialise error");
    let back: DomainError = serde_json::from_value(json).expect("deserialise error");

    assert_eq!(back, error);
}
