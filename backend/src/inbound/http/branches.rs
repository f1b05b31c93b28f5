//! Branch HTTP handlers.
//!
//! ```text
//! GET   /api/v1/branches
//! POST  /api/v1/branches
//! GET   /api/v1/branches/{id}
//! PATCH /api/v1/branches/{id}/phone?phoneNumber=
//! ```

use actix_web::{get, patch, post, web};
use serde::Deserialize;
use tracing::info;

use crate::domain::NewBranch;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::BranchResponse;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_branch_id, parse_branch_name, parse_email, parse_phone_number, parse_state,
    require_field,
};

/// Request payload for creating a branch.
///
/// Fields arrive as optional raw strings so missing or malformed values
/// surface as `invalid_data` envelopes instead of deserialisation errors.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBranchRequestBody {
    pub email_address: Option<String>,
    pub name: Option<String>,
    pub phone_number: Option<String>,
    pub state: Option<String>,
}

fn parse_new_branch(payload: CreateBranchRequestBody) -> ApiResult<NewBranch> {
    let email_field = FieldName::new("emailAddress");
    let name_field = FieldName::new("name");
    let phone_field = FieldName::new("phoneNumber");
    let state_field = FieldName::new("state");

    Ok(NewBranch {
        email_address: parse_email(require_field(payload.email_address, email_field)?, email_field)?,
        name: parse_branch_name(require_field(payload.name, name_field)?, name_field)?,
        phone_number: parse_phone_number(
            require_field(payload.phone_number, phone_field)?,
            phone_field,
        )?,
        state: parse_state(require_field(payload.state, state_field)?, state_field)?,
    })
}

/// Query parameters for the phone update endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhoneNumberQuery {
    pub phone_number: Option<String>,
}

/// List every branch in the directory.
#[get("/branches")]
pub async fn list_branches(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<BranchResponse>>> {
    let branches = state.branches_query.list().await?;
    Ok(web::Json(
        branches.iter().map(BranchResponse::from).collect(),
    ))
}

/// Create a branch from a validated draft.
///
/// The server generates the identifier and ignores any holidays in the
/// payload; new branches always start with an empty calendar.
#[post("/branches")]
pub async fn create_branch(
    state: web::Data<HttpState>,
    payload: web::Json<CreateBranchRequestBody>,
) -> ApiResult<web::Json<BranchResponse>> {
    let draft = parse_new_branch(payload.into_inner())?;
    let branch = state.branches.create(draft).await?;
    info!(branch_id = %branch.id(), "branch created");
    Ok(web::Json(BranchResponse::from(branch)))
}

/// Fetch a single branch by identifier.
#[get("/branches/{id}")]
pub async fn get_branch(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<BranchResponse>> {
    let id = parse_branch_id(path.into_inner(), FieldName::new("id"))?;
    let branch = state.branches_query.get(&id).await?;
    Ok(web::Json(BranchResponse::from(branch)))
}

/// Replace the phone number of an existing branch.
#[patch("/branches/{id}/phone")]
pub async fn update_phone_number(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<PhoneNumberQuery>,
) -> ApiResult<web::Json<BranchResponse>> {
    let id = parse_branch_id(path.into_inner(), FieldName::new("id"))?;
    let phone_field = FieldName::new("phoneNumber");
    let phone = parse_phone_number(
        require_field(query.into_inner().phone_number, phone_field)?,
        phone_field,
    )?;
    let branch = state.branches.update_phone_number(&id, phone).await?;
    info!(branch_id = %branch.id(), "branch phone number updated");
    Ok(web::Json(BranchResponse::from(branch)))
}

#[cfg(test)]
mod tests;
