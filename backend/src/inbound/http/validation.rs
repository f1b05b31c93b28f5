//! Shared validation helpers for inbound HTTP adapters.
//!
//! Request DTOs carry optional raw strings; these helpers turn them into
//! domain newtypes, producing `invalid_data` errors whose details carry
//! the offending field, value, and a stable validation code.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::json;

use crate::domain::{
    BranchId, BranchName, BranchState, DomainError, EmailAddress, HolidayName, PhoneNumber,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationCode {
    MissingField,
    InvalidBranchId,
    InvalidEmail,
    InvalidName,
    InvalidPhoneNumber,
    InvalidState,
    InvalidTimestamp,
    InvalidDate,
}

impl ValidationCode {
    fn as_str(self) -> &'static str {
        match self {
            ValidationCode::MissingField => "missing_field",
            ValidationCode::InvalidBranchId => "invalid_branch_id",
            ValidationCode::InvalidEmail => "invalid_email",
            ValidationCode::InvalidName => "invalid_name",
            ValidationCode::InvalidPhoneNumber => "invalid_phone_number",
            ValidationCode::InvalidState => "invalid_state",
            ValidationCode::InvalidTimestamp => "invalid_timestamp",
            ValidationCode::InvalidDate => "invalid_date",
        }
    }
}

/// Newtype wrapper for HTTP field names to provide type safety.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(&self) -> &str {
        self.0
    }
}

fn invalid_value_error(field: FieldName, value: &str, code: ValidationCode) -> DomainError {
    DomainError::invalid_data(field.as_str(), value).with_details(json!({
        "field": field.as_str(),
        "value": value,
        "code": code.as_str(),
    }))
}

pub(crate) fn missing_field_error(field: FieldName) -> DomainError {
    let field = field.as_str();
    DomainError::invalid_data(field, "").with_details(json!({
        "field": field,
        "code": ValidationCode::MissingField.as_str(),
    }))
}

/// Unwrap an optional DTO field, failing with a `missing_field` error.
pub(crate) fn require_field(value: Option<String>, field: FieldName) -> Result<String, DomainError> {
    value.ok_or_else(|| missing_field_error(field))
}

pub(crate) fn parse_branch_id(value: String, field: FieldName) -> Result<BranchId, DomainError> {
    BranchId::new(&value).map_err(|_| invalid_value_error(field, &value, ValidationCode::InvalidBranchId))
}

pub(crate) fn parse_email(value: String, field: FieldName) -> Result<EmailAddress, DomainError> {
    EmailAddress::new(value.clone())
        .map_err(|_| invalid_value_error(field, &value, ValidationCode::InvalidEmail))
}

pub(crate) fn parse_branch_name(value: String, field: FieldName) -> Result<BranchName, DomainError> {
    BranchName::new(value.clone())
        .map_err(|_| invalid_value_error(field, &value, ValidationCode::InvalidName))
}

pub(crate) fn parse_phone_number(
    value: String,
    field: FieldName,
) -> Result<PhoneNumber, DomainError> {
    PhoneNumber::new(value.clone())
        .map_err(|_| invalid_value_error(field, &value, ValidationCode::InvalidPhoneNumber))
}

pub(crate) fn parse_state(value: String, field: FieldName) -> Result<BranchState, DomainError> {
    BranchState::from_str(&value)
        .map_err(|_| invalid_value_error(field, &value, ValidationCode::InvalidState))
}

pub(crate) fn parse_holiday_name(
    value: String,
    field: FieldName,
) -> Result<HolidayName, DomainError> {
    HolidayName::new(value.clone())
        .map_err(|_| invalid_value_error(field, &value, ValidationCode::InvalidName))
}

pub(crate) fn parse_rfc3339_timestamp(
    value: String,
    field: FieldName,
) -> Result<DateTime<Utc>, DomainError> {
    DateTime::parse_from_rfc3339(&value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|_| invalid_value_error(field, &value, ValidationCode::InvalidTimestamp))
}

/// Parse a UTC instant from either a full RFC 3339 timestamp or a plain
/// `YYYY-MM-DD` calendar date (interpreted as midnight UTC).
pub(crate) fn parse_timestamp_or_date(
    value: String,
    field: FieldName,
) -> Result<DateTime<Utc>, DomainError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(&value) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(&value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| invalid_value_error(field, &value, ValidationCode::InvalidDate))
}

/// Parse a calendar date from either `YYYY-MM-DD` or a full RFC 3339
/// timestamp (the time-of-day is discarded).
pub(crate) fn parse_calendar_date(
    value: String,
    field: FieldName,
) -> Result<NaiveDate, DomainError> {
    if let Ok(date) = NaiveDate::parse_from_str(&value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(&value)
        .map(|timestamp| timestamp.with_timezone(&Utc).date_naive())
        .map_err(|_| invalid_value_error(field, &value, ValidationCode::InvalidDate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2030-12-25", 2030, 12, 25)]
    #[case("2030-12-25T09:30:00Z", 2030, 12, 25)]
    #[case("2030-12-25T23:00:00-05:00", 2030, 12, 26)]
    fn calendar_dates_accept_both_formats(
        #[case] raw: &str,
        #[case] year: i32,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let parsed = parse_calendar_date(raw.to_owned(), FieldName::new("date")).expect("parse");
        let expected = NaiveDate::from_ymd_opt(year, month, day).expect("valid date");
        assert_eq!(parsed, expected);
    }

    #[rstest]
    #[case("25/12/2030")]
    #[case("not a date")]
    #[case("")]
    fn malformed_dates_fail_with_field_details(#[case] raw: &str) {
        let error =
            parse_calendar_date(raw.to_owned(), FieldName::new("date")).expect_err("rejects");
        let details = error.details().expect("details");
        assert_eq!(details["field"], "date");
        assert_eq!(details["code"], "invalid_date");
    }

    #[rstest]
    fn missing_fields_name_the_field() {
        let error = require_field(None, FieldName::new("emailAddress")).expect_err("missing");
        let details = error.details().expect("details");
        assert_eq!(details["field"], "emailAddress");
        assert_eq!(details["code"], "missing_field");
    }

    #[rstest]
    #[case("branch@bank.example", true)]
    #[case("not-an-email", false)]
    fn email_parsing_reports_invalid_email_code(#[case] raw: &str, #[case] ok: bool) {
        let result = parse_email(raw.to_owned(), FieldName::new("emailAddress"));
        if ok {
            assert!(result.is_ok());
        } else {
            let details = result.expect_err("rejects").details().cloned().expect("details");
            assert_eq!(details["code"], "invalid_email");
            assert_eq!(details["value"], raw);
        }
    }
}
