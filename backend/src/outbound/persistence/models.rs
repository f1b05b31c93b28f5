//! Row types mapping the `branches` table to and from Diesel.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::branches;

/// Stored branch document row.
#[derive(Debug, Queryable, Selectable)]
#[diesel(table_name = branches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct BranchRow {
    pub id: String,
    pub document: serde_json::Value,
    pub updated_at: DateTime<Utc>,
}

/// Insertable branch document row.
#[derive(Debug, Insertable)]
#[diesel(table_name = branches)]
pub struct NewBranchRow<'a> {
    pub id: &'a str,
    pub document: &'a serde_json::Value,
    pub updated_at: DateTime<Utc>,
}
