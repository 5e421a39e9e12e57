//! Voter search and detail handlers.
//!
//! ```text
//! GET /api/v1/voters/search?area_code=2797&gender=male&name_filter=রহিম
//! GET /api/v1/voters/2797/110000000001
//! ```

use actix_web::{get, web};
use serde::Deserialize;
use serde_json::json;

use crate::domain::{AreaCode, Error, SearchRequest, VoterRecord};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Raw query parameters for `GET /api/v1/voters/search`.
///
/// Everything is optional at the serde layer so that missing required
/// fields surface as the standard error envelope from
/// [`SearchRequest::from_params`] rather than an opaque deserialisation
/// failure.
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    /// Electoral area code. Required.
    area_code: Option<String>,
    /// Gender token (`male`/`female`/`hijra` or the dataset literal). Required.
    gender: Option<String>,
    /// Optional case-insensitive substring over the configured name fields.
    name_filter: Option<String>,
}

/// Search the electoral roll.
///
/// Returns at most the configured result limit; the empty list is a normal
/// response, never an error. Result order is unspecified.
#[utoipa::path(
    get,
    path = "/api/v1/voters/search",
    params(SearchParams),
    responses(
        (status = 200, description = "Matching voters, possibly empty", body = [VoterRecord]),
        (status = 400, description = "Missing or malformed search parameters", body = Error),
        (status = 503, description = "Voter store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["voters"],
    operation_id = "searchVoters"
)]
#[get("/voters/search")]
pub async fn search_voters(
    state: web::Data<HttpState>,
    params: web::Query<SearchParams>,
) -> ApiResult<web::Json<Vec<VoterRecord>>> {
    let SearchParams {
        area_code,
        gender,
        name_filter,
    } = params.into_inner();
    let request = SearchRequest::from_params(
        area_code.as_deref(),
        gender.as_deref(),
        name_filter.as_deref(),
    )?;
    let voters = state.voters.search(&request).await?;
    Ok(web::Json(voters))
}

/// Inspect one voter record in full detail.
#[utoipa::path(
    get,
    path = "/api/v1/voters/{area_code}/{voter_no}",
    params(
        ("area_code" = String, Path, description = "Electoral area code"),
        ("voter_no" = String, Path, description = "Voter number, unique within the area")
    ),
    responses(
        (status = 200, description = "The voter record", body = VoterRecord),
        (status = 400, description = "Malformed area code", body = Error),
        (status = 404, description = "No such voter", body = Error),
        (status = 503, description = "Voter store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["voters"],
    operation_id = "voterDetail"
)]
#[get("/voters/{area_code}/{voter_no}")]
pub async fn voter_detail(
    state: web::Data<HttpState>,
    path: web::Path<(String, String)>,
) -> ApiResult<web::Json<VoterRecord>> {
    let (area_raw, voter_no) = path.into_inner();
    let area_code = AreaCode::parse(&area_raw).map_err(|err| {
        Error::invalid_request(err.to_string()).with_details(json!({
            "field": "area_code",
            "value": area_raw,
            "code": "invalid_value",
        }))
    })?;

    match state.voters.find_voter(area_code, &voter_no).await? {
        Some(record) => Ok(web::Json(record)),
        None => Err(Error::not_found("voter not found")),
    }
}
