//! HTTP inbound adapter exposing REST endpoints.

pub mod branches;
pub mod error;
pub mod health;
pub mod holidays;
pub mod schemas;
pub mod state;
pub mod validation;

pub use error::ApiResult;
