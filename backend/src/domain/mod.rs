//! Domain primitives and the Branch aggregate.
//!
//! Purpose: define strongly typed domain entities used by the HTTP and
//! persistence layers, plus the business-rule service operating on them.
//! Keep types validated at construction and document invariants and
//! serialisation contracts (serde) in each type's Rustdoc.

pub mod branch;
pub mod branch_service;
pub mod error;
pub mod ports;

pub use self::branch::{
    Branch, BranchId, BranchName, BranchState, BranchValidationError, EmailAddress, Holiday,
    HolidayName, NewBranch, PhoneNumber,
};
pub use self::branch_service::BranchService;
pub use self::error::{DomainError, ErrorCode, HolidayAction};
