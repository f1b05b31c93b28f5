//! Domain-level error types.
//!
//! These errors are transport agnostic. The inbound HTTP adapter maps them
//! to response envelopes; nothing in this module knows about status codes.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::fmt;

/// Stable machine-readable error code describing the failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    /// An input field failed a validation constraint.
    InvalidData,
    /// The referenced branch does not exist.
    NotFound,
    /// A holiday business rule was violated.
    HolidayOperation,
    /// An unexpected error occurred inside the domain.
    InternalError,
}

/// Holiday operation that raised a [`ErrorCode::HolidayOperation`] failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayAction {
    /// Appending a holiday to a branch calendar.
    Add,
    /// Removing holidays from a branch calendar.
    Delete,
    /// Asserting that a date is a holiday.
    Verify,
}

impl HolidayAction {
    fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Delete => "delete",
            Self::Verify => "verify",
        }
    }
}

impl fmt::Display for HolidayAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Domain error payload.
///
/// ## Invariants
/// - `message` is never empty; every constructor builds a non-empty message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainError {
    code: ErrorCode,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Value>,
}

impl DomainError {
    /// Create a new error with a pre-built message.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Stable machine-readable error code.
    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Human-readable message returned to adapters.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }

    /// Supplementary structured details for adapters.
    pub fn details(&self) -> Option<&Value> {
        self.details.as_ref()
    }

    /// Attach structured details to the error.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    /// A branch lookup failed; `branch_id` echoes the missing identifier.
    pub fn not_found(branch_id: impl AsRef<str>) -> Self {
        let branch_id = branch_id.as_ref();
        Self::new(
            ErrorCode::NotFound,
            format!("no branch found with id: {branch_id}"),
        )
        .with_details(json!({ "branchId": branch_id }))
    }

    /// An input field failed validation; details carry the field and value.
    pub fn invalid_data(field: impl AsRef<str>, value: impl AsRef<str>) -> Self {
        let field = field.as_ref();
        let value = value.as_ref();
        Self::new(
            ErrorCode::InvalidData,
            format!("invalid value for field {field}: {value}"),
        )
        .with_details(json!({ "field": field, "value": value }))
    }

    /// A holiday business rule was violated for the given branch.
    pub fn holiday_operation(
        action: HolidayAction,
        branch_id: impl AsRef<str>,
        detail: impl AsRef<str>,
    ) -> Self {
        let branch_id = branch_id.as_ref();
        let detail = detail.as_ref();
        Self::new(
            ErrorCode::HolidayOperation,
            format!("holiday {action} failed for branch {branch_id}: {detail}"),
        )
        .with_details(json!({ "action": action.as_str(), "branchId": branch_id }))
    }

    /// An unexpected failure; the HTTP adapter redacts the message.
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for DomainError {}

#[cfg(test)]
mod tests;
