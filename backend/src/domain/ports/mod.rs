//! Domain ports.
//!
//! Driving ports ([`BranchCommand`], [`BranchQuery`]) are implemented by
//! the domain service and consumed by inbound adapters. The driven port
//! ([`BranchRepository`]) is implemented by outbound persistence adapters.

mod branch_command;
mod branch_query;
mod branch_repository;

pub use branch_command::BranchCommand;
pub use branch_query::BranchQuery;
pub use branch_repository::{BranchRepository, BranchRepositoryError, InMemoryBranchRepository};

#[cfg(test)]
pub use branch_command::MockBranchCommand;
#[cfg(test)]
pub use branch_query::MockBranchQuery;
#[cfg(test)]
pub use branch_repository::MockBranchRepository;
