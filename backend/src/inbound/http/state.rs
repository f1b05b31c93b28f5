//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports (use-cases) and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{BranchCommand, BranchQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub branches: Arc<dyn BranchCommand>,
    pub branches_query: Arc<dyn BranchQuery>,
}

impl HttpState {
    /// Construct state from the two branch ports.
    pub fn new(branches: Arc<dyn BranchCommand>, branches_query: Arc<dyn BranchQuery>) -> Self {
        Self {
            branches,
            branches_query,
        }
    }
}
