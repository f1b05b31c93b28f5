//! Response payloads shared across branch endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::{Branch, Holiday};

/// Holiday payload embedded in branch responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HolidayResponse {
    /// RFC 3339 timestamp of the holiday.
    pub date: String,
    pub name: String,
}

impl From<&Holiday> for HolidayResponse {
    fn from(holiday: &Holiday) -> Self {
        Self {
            date: holiday.date.to_rfc3339(),
            name: holiday.name.as_ref().to_owned(),
        }
    }
}

/// Branch snapshot returned by every branch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BranchResponse {
    pub id: String,
    pub email_address: String,
    pub name: String,
    pub phone_number: String,
    pub state: String,
    /// RFC 3339; set once at creation.
    pub creation_date: String,
    /// RFC 3339; refreshed by every mutation.
    pub last_modified_date: String,
    pub holidays: Vec<HolidayResponse>,
}

impl From<&Branch> for BranchResponse {
    fn from(branch: &Branch) -> Self {
        Self {
            id: branch.id().as_ref().to_owned(),
            email_address: branch.email_address().as_ref().to_owned(),
            name: branch.name().as_ref().to_owned(),
            phone_number: branch.phone_number().as_ref().to_owned(),
            state: branch.state().to_string(),
            creation_date: branch.creation_date().to_rfc3339(),
            last_modified_date: branch.last_modified_date().to_rfc3339(),
            holidays: branch.holidays().iter().map(HolidayResponse::from).collect(),
        }
    }
}

impl From<Branch> for BranchResponse {
    fn from(branch: Branch) -> Self {
        Self::from(&branch)
    }
}
