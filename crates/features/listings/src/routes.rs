//! Listing catalog endpoints.
//!
//! Reads mirror the public catalog (active listings, filterable, newest
//! first). Creation goes through the same visibility policy the admin form
//! enforces: values in fields the form hides for the draft's controller
//! pair are rejected, not silently dropped.

use crate::{Listings, store::ListingFilter};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use phub_derive::{api_handler, api_model};
use phub_domain::constants::{LISTING, LISTINGS_TAG};
use phub_domain::listing::{ListingPurpose, PropertyListing, PropertyType};
use phub_form::audit::hidden_field_violations;
use phub_kernel::safe_nanoid;
use phub_kernel::security::resource::ResourceGuard;
use phub_kernel::server::ApiState;
use serde::Deserialize;
use std::time::{SystemTime, UNIX_EPOCH};
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(list_handler, create_handler))
        .routes(routes!(get_handler))
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
#[serde(rename_all = "camelCase")]
struct ListingsQuery {
    /// Listing purpose code (BUY, SELL, RENT)
    #[serde(default)]
    purpose: Option<String>,
    /// Property type code (LAND, HOUSE, APARTMENT)
    #[serde(default)]
    property_type: Option<String>,
    /// State name
    #[serde(default)]
    state: Option<String>,
    /// District name
    #[serde(default)]
    district: Option<String>,
    /// Maximum number of listings to return
    #[serde(default)]
    limit: Option<usize>,
}

#[api_model]
/// Rejection detail for a draft that fills hidden fields
struct HiddenFieldsResponse {
    /// What went wrong
    error: &'static str,
    /// Names of the offending fields
    #[serde(skip_deserializing)]
    hidden_fields: Vec<&'static str>,
}

#[api_handler(
    get,
    path = "/properties",
    params(ListingsQuery),
    responses((status = OK, description = "Active listings, newest first")),
    tag = LISTINGS_TAG,
)]
async fn list_handler(
    State(state): State<ApiState>,
    Query(query): Query<ListingsQuery>,
) -> Result<Json<Vec<PropertyListing>>, StatusCode> {
    let listings =
        state.try_get_slice::<Listings>().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    // An unknown enum code cannot match any listing; short-circuit to an
    // empty page instead of serving the unfiltered catalog.
    let purpose = match parse_filter_code(query.purpose.as_deref(), ListingPurpose::from_code) {
        Ok(value) => value,
        Err(()) => return Ok(Json(Vec::new())),
    };
    let property_type =
        match parse_filter_code(query.property_type.as_deref(), PropertyType::from_code) {
            Ok(value) => value,
            Err(()) => return Ok(Json(Vec::new())),
        };

    let filter = ListingFilter { purpose, property_type, state: query.state, district: query.district };

    let catalog = &state.config.catalog;
    let limit = query.limit.unwrap_or(catalog.default_page_size).min(catalog.max_page_size);

    Ok(Json(listings.store.query(&filter, limit)))
}

#[api_handler(
    get,
    path = "/properties/{id}",
    params(("id" = String, Path, description = "Listing id")),
    responses(
        (status = OK, description = "The listing"),
        (status = BAD_REQUEST, description = "Malformed id"),
        (status = NOT_FOUND, description = "No such listing"),
    ),
    tag = LISTINGS_TAG,
)]
async fn get_handler(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<PropertyListing>, StatusCode> {
    let listings =
        state.try_get_slice::<Listings>().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let id = ResourceGuard::verify(id, LISTING).map_err(|_| StatusCode::BAD_REQUEST)?;

    listings.store.get(&id).map(Json).ok_or(StatusCode::NOT_FOUND)
}

#[api_handler(
    post,
    path = "/properties",
    responses(
        (status = CREATED, description = "Listing stored"),
        (status = UNPROCESSABLE_ENTITY, description = "Draft fills fields the form hides", body = HiddenFieldsResponse),
    ),
    tag = LISTINGS_TAG,
)]
async fn create_handler(
    State(state): State<ApiState>,
    Json(mut draft): Json<PropertyListing>,
) -> Response {
    let Ok(listings) = state.try_get_slice::<Listings>() else {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    };

    let violations = hidden_field_violations(&draft);
    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "rejecting draft with hidden fields");
        let body = HiddenFieldsResponse {
            error: "fields hidden for this purpose/property type must stay empty",
            hidden_fields: violations.into_iter().map(|field| field.name()).collect(),
        };
        return (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response();
    }

    let now = unix_now();
    draft.id = safe_nanoid!();
    draft.created_at = now;
    draft.updated_at = now;

    listings.store.insert(draft.clone());
    tracing::info!(id = %draft.id, "listing created");

    (StatusCode::CREATED, Json(draft)).into_response()
}

/// Parses an optional filter code. `Ok(None)` means "no filter", `Err(())`
/// means the code was present but unrecognized.
fn parse_filter_code<T>(raw: Option<&str>, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>, ()> {
    match raw {
        None => Ok(None),
        Some(code) if code.trim().is_empty() => Ok(None),
        Some(code) => parse(code).map(Some).ok_or(()),
    }
}

fn unix_now() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |elapsed| i64::try_from(elapsed.as_secs()).unwrap_or(i64::MAX))
}
