//! PostgreSQL-backed `BranchRepository` implementation using Diesel.
//!
//! The adapter serialises the whole aggregate into one JSONB document per
//! branch and upserts it by id. There is no concurrency token in the
//! document, so concurrent saves are last-write-wins.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::debug;

use crate::domain::ports::{BranchRepository, BranchRepositoryError};
use crate::domain::{Branch, BranchId};

use super::models::{BranchRow, NewBranchRow};
use super::pool::{DbPool, PoolError};
use super::schema::branches;

/// Diesel-backed implementation of the `BranchRepository` port.
#[derive(Clone)]
pub struct DieselBranchRepository {
    pool: DbPool,
}

impl DieselBranchRepository {
    /// Create a new repository with the given connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map pool errors to branch repository errors.
fn map_pool_error(error: PoolError) -> BranchRepositoryError {
    match error {
        PoolError::Checkout { message } | PoolError::Build { message } => {
            BranchRepositoryError::connection(message)
        }
    }
}

/// Map Diesel errors to branch repository errors.
fn map_diesel_error(error: diesel::result::Error) -> BranchRepositoryError {
    use diesel::result::{DatabaseErrorKind, Error as DieselError};

    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(
            error_type = %std::any::type_name_of_val(&error),
            "diesel operation failed"
        ),
    }

    match error {
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _) => {
            BranchRepositoryError::connection("database connection error")
        }
        DieselError::SerializationError(_) | DieselError::DeserializationError(_) => {
            BranchRepositoryError::serialization("branch document conversion failed")
        }
        _ => BranchRepositoryError::query("database error"),
    }
}

/// Decode a stored JSONB document into the domain aggregate.
fn row_to_branch(row: BranchRow) -> Result<Branch, BranchRepositoryError> {
    serde_json::from_value(row.document).map_err(|err| {
        debug!(branch_id = %row.id, error = %err, "stored branch document failed to decode");
        BranchRepositoryError::serialization(format!(
            "stored document for branch {} is not a valid branch: {err}",
            row.id
        ))
    })
}

/// Encode the aggregate as a JSONB document.
fn branch_to_document(branch: &Branch) -> Result<serde_json::Value, BranchRepositoryError> {
    serde_json::to_value(branch).map_err(|err| {
        BranchRepositoryError::serialization(format!("branch failed to encode as JSON: {err}"))
    })
}

#[async_trait]
impl BranchRepository for DieselBranchRepository {
    async fn find_all(&self) -> Result<Vec<Branch>, BranchRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<BranchRow> = branches::table
            .select(BranchRow::as_select())
            .order(branches::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        rows.into_iter().map(row_to_branch).collect()
    }

    async fn find_by_id(&self, id: &BranchId) -> Result<Option<Branch>, BranchRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: Option<BranchRow> = branches::table
            .filter(branches::id.eq(id.as_ref()))
            .select(BranchRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;

        row.map(row_to_branch).transpose()
    }

    async fn save(&self, branch: Branch) -> Result<Branch, BranchRepositoryError> {
        let document = branch_to_document(&branch)?;
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = NewBranchRow {
            id: branch.id().as_ref(),
            document: &document,
            updated_at: branch.last_modified_date(),
        };

        diesel::insert_into(branches::table)
            .values(&row)
            .on_conflict(branches::id)
            .do_update()
            .set((
                branches::document.eq(&document),
                branches::updated_at.eq(branch.last_modified_date()),
            ))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)?;

        Ok(branch)
    }
}
