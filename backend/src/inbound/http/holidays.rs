//! Holiday HTTP handlers operating on a branch calendar.
//!
//! ```text
//! POST   /api/v1/branches/{id}/holidays
//! DELETE /api/v1/branches/{id}/holidays[?date=]
//! GET    /api/v1/branches/{id}/holidays
//! GET    /api/v1/branches/{id}/holidays/check?date=
//! GET    /api/v1/branches/{id}/holidays/verify?date=
//! ```

use actix_web::{HttpResponse, delete, get, post, web};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::info;

use crate::domain::Holiday;
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::{BranchResponse, HolidayResponse};
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FieldName, parse_branch_id, parse_calendar_date, parse_holiday_name, parse_rfc3339_timestamp,
    parse_timestamp_or_date, require_field,
};

/// Request payload for adding a holiday.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHolidayRequestBody {
    pub date: Option<String>,
    pub name: Option<String>,
}

fn parse_holiday(payload: AddHolidayRequestBody) -> ApiResult<Holiday> {
    let date_field = FieldName::new("date");
    let name_field = FieldName::new("name");
    Ok(Holiday {
        date: parse_rfc3339_timestamp(require_field(payload.date, date_field)?, date_field)?,
        name: parse_holiday_name(require_field(payload.name, name_field)?, name_field)?,
    })
}

/// Query parameter holding a `date` value; optional at the transport
/// level so each endpoint can decide whether absence is an error.
#[derive(Debug, Deserialize)]
pub struct DateQuery {
    pub date: Option<String>,
}

fn parse_optional_date(query: DateQuery) -> ApiResult<Option<NaiveDate>> {
    query
        .date
        .map(|raw| parse_calendar_date(raw, FieldName::new("date")))
        .transpose()
        .map_err(Into::into)
}

/// Append a holiday to the branch calendar.
#[post("/branches/{id}/holidays")]
pub async fn add_holiday(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<AddHolidayRequestBody>,
) -> ApiResult<web::Json<BranchResponse>> {
    let id = parse_branch_id(path.into_inner(), FieldName::new("id"))?;
    let holiday = parse_holiday(payload.into_inner())?;
    let branch = state.branches.add_holiday(&id, holiday).await?;
    info!(branch_id = %branch.id(), "holiday added");
    Ok(web::Json(BranchResponse::from(branch)))
}

/// Remove holidays from the branch calendar.
///
/// Without a `date` query the whole calendar is cleared; with one, every
/// holiday falling on that calendar date is removed.
#[delete("/branches/{id}/holidays")]
pub async fn remove_holidays(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DateQuery>,
) -> ApiResult<web::Json<BranchResponse>> {
    let id = parse_branch_id(path.into_inner(), FieldName::new("id"))?;
    let date = parse_optional_date(query.into_inner())?;
    let branch = state.branches.remove_holidays(&id, date).await?;
    info!(branch_id = %branch.id(), "holidays removed");
    Ok(web::Json(BranchResponse::from(branch)))
}

/// List the branch holiday calendar.
#[get("/branches/{id}/holidays")]
pub async fn list_holidays(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<HolidayResponse>>> {
    let id = parse_branch_id(path.into_inner(), FieldName::new("id"))?;
    let holidays = state.branches_query.list_holidays(&id).await?;
    Ok(web::Json(holidays.iter().map(HolidayResponse::from).collect()))
}

/// Report whether the given date is a holiday for the branch.
#[get("/branches/{id}/holidays/check")]
pub async fn check_holiday(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DateQuery>,
) -> ApiResult<web::Json<bool>> {
    let id = parse_branch_id(path.into_inner(), FieldName::new("id"))?;
    let date_field = FieldName::new("date");
    let at = parse_timestamp_or_date(require_field(query.into_inner().date, date_field)?, date_field)?;
    let is_holiday = state.branches_query.is_holiday(&id, at).await?;
    Ok(web::Json(is_holiday))
}

/// Assert that the given date is a holiday; 204 on success, 400 otherwise.
#[get("/branches/{id}/holidays/verify")]
pub async fn verify_holiday(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    query: web::Query<DateQuery>,
) -> ApiResult<HttpResponse> {
    let id = parse_branch_id(path.into_inner(), FieldName::new("id"))?;
    let date_field = FieldName::new("date");
    let at = parse_timestamp_or_date(require_field(query.into_inner().date, date_field)?, date_field)?;
    state.branches_query.verify_holiday(&id, at).await?;
    Ok(HttpResponse::NoContent().finish())
}
