//! Driving port for branch reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{Branch, BranchId, DomainError, Holiday};

/// Use-cases that read branch aggregates without mutating them.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BranchQuery: Send + Sync {
    /// All branch snapshots, unfiltered and unpaginated.
    async fn list(&self) -> Result<Vec<Branch>, DomainError>;

    /// A single branch; fails with `not_found` when absent.
    async fn get(&self, id: &BranchId) -> Result<Branch, DomainError>;

    /// The branch holiday calendar; empty, never absent.
    async fn list_holidays(&self, id: &BranchId) -> Result<Vec<Holiday>, DomainError>;

    /// True when some holiday falls on the same calendar date as `at`.
    async fn is_holiday(&self, id: &BranchId, at: DateTime<Utc>) -> Result<bool, DomainError>;

    /// Assert that `at` is a holiday; fails with a `holiday_operation`
    /// error otherwise.
    async fn verify_holiday(&self, id: &BranchId, at: DateTime<Utc>) -> Result<(), DomainError>;
}
