//! Driving port for branch mutations.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{Branch, BranchId, DomainError, Holiday, NewBranch, PhoneNumber};

/// Use-cases that mutate a branch aggregate.
///
/// Every operation is a single-aggregate read-modify-write against the
/// persistence collaborator and refreshes `last_modified_date` on success.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BranchCommand: Send + Sync {
    /// Create a branch from a validated draft.
    ///
    /// The service generates the identifier, sets both timestamps to the
    /// current instant, and starts with an empty holiday calendar.
    async fn create(&self, draft: NewBranch) -> Result<Branch, DomainError>;

    /// Replace the phone number of an existing branch.
    async fn update_phone_number(
        &self,
        id: &BranchId,
        phone_number: PhoneNumber,
    ) -> Result<Branch, DomainError>;

    /// Append a holiday to the branch calendar.
    ///
    /// Fails with a `holiday_operation` error when the holiday date is
    /// not in the future.
    async fn add_holiday(&self, id: &BranchId, holiday: Holiday) -> Result<Branch, DomainError>;

    /// Remove holidays from the branch calendar.
    ///
    /// `date = None` clears the whole calendar; `date = Some(d)` removes
    /// every holiday falling on that calendar date. An empty calendar, or
    /// a dated removal matching nothing, fails with a `holiday_operation`
    /// error.
    async fn remove_holidays(
        &self,
        id: &BranchId,
        date: Option<NaiveDate>,
    ) -> Result<Branch, DomainError>;
}
