//! Branch domain service implementing the driving ports.
//!
//! Every mutation is a bounded read-modify-write against the repository
//! port: look the aggregate up, apply the rule, persist the new snapshot.
//! There is no coordination between concurrent callers; the repository
//! upsert is last-write-wins.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;

use crate::domain::ports::{BranchCommand, BranchQuery, BranchRepository, BranchRepositoryError};
use crate::domain::{
    Branch, BranchId, DomainError, Holiday, HolidayAction, NewBranch, PhoneNumber,
};

/// Branch service enforcing the aggregate's business rules.
#[derive(Clone)]
pub struct BranchService<R> {
    repository: Arc<R>,
    clock: Arc<dyn Clock>,
}

impl<R> BranchService<R> {
    /// Create a new service around the given repository and clock.
    pub fn new(repository: Arc<R>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }
}

impl<R> BranchService<R>
where
    R: BranchRepository,
{
    fn map_repository_error(error: BranchRepositoryError) -> DomainError {
        DomainError::internal(format!("branch repository error: {error}"))
    }

    async fn fetch(&self, id: &BranchId) -> Result<Branch, DomainError> {
        self.repository
            .find_by_id(id)
            .await
            .map_err(Self::map_repository_error)?
            .ok_or_else(|| DomainError::not_found(id))
    }

    async fn persist(&self, branch: Branch) -> Result<Branch, DomainError> {
        self.repository
            .save(branch)
            .await
            .map_err(Self::map_repository_error)
    }

    fn no_holiday_for_date(action: HolidayAction, id: &BranchId, date: NaiveDate) -> DomainError {
        DomainError::holiday_operation(action, id, format!("no holiday found for date: {date}"))
    }
}

#[async_trait]
impl<R> BranchQuery for BranchService<R>
where
    R: BranchRepository,
{
    async fn list(&self) -> Result<Vec<Branch>, DomainError> {
        self.repository
            .find_all()
            .await
            .map_err(Self::map_repository_error)
    }

    async fn get(&self, id: &BranchId) -> Result<Branch, DomainError> {
        self.fetch(id).await
    }

    async fn list_holidays(&self, id: &BranchId) -> Result<Vec<Holiday>, DomainError> {
        let branch = self.fetch(id).await?;
        Ok(branch.holidays().to_vec())
    }

    async fn is_holiday(&self, id: &BranchId, at: DateTime<Utc>) -> Result<bool, DomainError> {
        let branch = self.fetch(id).await?;
        Ok(branch.is_holiday(at))
    }

    async fn verify_holiday(&self, id: &BranchId, at: DateTime<Utc>) -> Result<(), DomainError> {
        let branch = self.fetch(id).await?;
        if branch.is_holiday(at) {
            Ok(())
        } else {
            Err(Self::no_holiday_for_date(
                HolidayAction::Verify,
                id,
                at.date_naive(),
            ))
        }
    }
}

#[async_trait]
impl<R> BranchCommand for BranchService<R>
where
    R: BranchRepository,
{
    async fn create(&self, draft: NewBranch) -> Result<Branch, DomainError> {
        let branch = Branch::create(BranchId::random(), draft, self.clock.utc());
        self.persist(branch).await
    }

    async fn update_phone_number(
        &self,
        id: &BranchId,
        phone_number: PhoneNumber,
    ) -> Result<Branch, DomainError> {
        let mut branch = self.fetch(id).await?;
        branch.set_phone_number(phone_number, self.clock.utc());
        self.persist(branch).await
    }

    async fn add_holiday(&self, id: &BranchId, holiday: Holiday) -> Result<Branch, DomainError> {
        let mut branch = self.fetch(id).await?;
        let now = self.clock.utc();
        if holiday.date <= now {
            return Err(DomainError::holiday_operation(
                HolidayAction::Add,
                id,
                "holiday date must be in the future",
            ));
        }
        branch.push_holiday(holiday, now);
        self.persist(branch).await
    }

    async fn remove_holidays(
        &self,
        id: &BranchId,
        date: Option<NaiveDate>,
    ) -> Result<Branch, DomainError> {
        let mut branch = self.fetch(id).await?;
        if branch.holidays().is_empty() {
            return Err(DomainError::holiday_operation(
                HolidayAction::Delete,
                id,
                "branch has no holidays",
            ));
        }

        let now = self.clock.utc();
        match date {
            None => {
                branch.clear_holidays(now);
            }
            Some(day) => {
                let removed = branch.remove_holidays_on(day, now);
                if removed == 0 {
                    return Err(Self::no_holiday_for_date(HolidayAction::Delete, id, day));
                }
            }
        }
        self.persist(branch).await
    }
}
