//! Driven port for branch persistence.
//!
//! The document store behind this port keeps one document per branch,
//! keyed by the generated identifier. The port deliberately mirrors the
//! capability set of the underlying collaborator: find-all, find-by-id,
//! and save (upsert). There is no delete; branches are never hard-deleted.

use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::{Branch, BranchId};

/// Errors raised by branch repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BranchRepositoryError {
    /// Repository connection could not be established.
    #[error("branch repository connection failed: {message}")]
    Connection { message: String },

    /// Query or mutation failed during execution.
    #[error("branch repository query failed: {message}")]
    Query { message: String },

    /// A stored document could not be encoded or decoded.
    #[error("branch document serialisation failed: {message}")]
    Serialization { message: String },
}

impl BranchRepositoryError {
    /// Create a connection error with the given message.
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Create a query error with the given message.
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a serialisation error with the given message.
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }
}

/// Port for branch document storage and retrieval.
///
/// `save` is an unconditional upsert: there is no concurrency token on
/// the branch document, so concurrent writers are last-write-wins.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BranchRepository: Send + Sync {
    /// Fetch every stored branch snapshot.
    async fn find_all(&self) -> Result<Vec<Branch>, BranchRepositoryError>;

    /// Fetch a branch by identifier; `None` when no document exists.
    async fn find_by_id(&self, id: &BranchId) -> Result<Option<Branch>, BranchRepositoryError>;

    /// Insert or replace the branch document, returning the stored snapshot.
    async fn save(&self, branch: Branch) -> Result<Branch, BranchRepositoryError>;
}

/// Process-local repository backed by a vector.
///
/// Serves as the fixture for tests and as the fallback store when the
/// server runs without a database. Insertion order is preserved so
/// `find_all` is deterministic.
#[derive(Debug, Default)]
pub struct InMemoryBranchRepository {
    branches: RwLock<Vec<Branch>>,
}

impl InMemoryBranchRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BranchRepository for InMemoryBranchRepository {
    async fn find_all(&self) -> Result<Vec<Branch>, BranchRepositoryError> {
        let branches = self
            .branches
            .read()
            .map_err(|_| BranchRepositoryError::query("branch store lock poisoned"))?;
        Ok(branches.clone())
    }

    async fn find_by_id(&self, id: &BranchId) -> Result<Option<Branch>, BranchRepositoryError> {
        let branches = self
            .branches
            .read()
            .map_err(|_| BranchRepositoryError::query("branch store lock poisoned"))?;
        Ok(branches.iter().find(|branch| branch.id() == id).cloned())
    }

    async fn save(&self, branch: Branch) -> Result<Branch, BranchRepositoryError> {
        let mut branches = self
            .branches
            .write()
            .map_err(|_| BranchRepositoryError::query("branch store lock poisoned"))?;
        match branches.iter_mut().find(|stored| stored.id() == branch.id()) {
            Some(stored) => *stored = branch.clone(),
            None => branches.push(branch.clone()),
        }
        Ok(branch)
    }
}
