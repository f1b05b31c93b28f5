//! PostgreSQL persistence adapters.
//!
//! Each branch aggregate is stored as a single JSONB document keyed by its
//! identifier, mirroring a document-store layout on top of one table.

pub mod diesel_branch_repository;
pub mod models;
pub mod pool;
pub mod schema;

pub use diesel_branch_repository::DieselBranchRepository;
pub use pool::{DbPool, PoolConfig, PoolError};
