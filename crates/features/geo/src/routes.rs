//! Location endpoints backing the cascading state/district dropdowns.

use crate::Geo;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use phub_derive::{api_handler, api_model};
use phub_domain::constants::GEO_TAG;
use phub_kernel::server::ApiState;
use serde::Deserialize;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new().routes(routes!(states_handler)).routes(routes!(districts_handler))
}

#[api_model]
/// A selectable location entry
struct LocationEntry {
    /// Sequence id
    id: u32,
    /// Display name
    name: &'static str,
}

#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
struct DistrictsQuery {
    /// State id whose districts to list
    #[serde(default)]
    state: Option<String>,
}

#[api_handler(
    get,
    path = "/states",
    responses((status = OK, description = "All provinces", body = [LocationEntry])),
    tag = GEO_TAG,
)]
async fn states_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<LocationEntry>>, StatusCode> {
    let geo = state.try_get_slice::<Geo>().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    let entries = geo
        .directory
        .states()
        .iter()
        .map(|entry| LocationEntry { id: entry.id, name: entry.name })
        .collect();

    Ok(Json(entries))
}

#[api_handler(
    get,
    path = "/districts",
    params(DistrictsQuery),
    responses((status = OK, description = "Districts of the given state", body = [LocationEntry])),
    tag = GEO_TAG,
)]
async fn districts_handler(
    State(state): State<ApiState>,
    Query(query): Query<DistrictsQuery>,
) -> Result<Json<Vec<LocationEntry>>, StatusCode> {
    let geo = state.try_get_slice::<Geo>().map_err(|_| StatusCode::INTERNAL_SERVER_ERROR)?;

    // A missing or garbled state id leaves the dropdown empty, it is not an
    // error from the form's point of view.
    let state_id = query.state.as_deref().and_then(|raw| raw.trim().parse::<u32>().ok());

    let entries = state_id
        .map(|id| geo.directory.districts_for_state(id))
        .unwrap_or_default()
        .iter()
        .map(|entry| LocationEntry { id: entry.id, name: entry.name })
        .collect();

    Ok(Json(entries))
}
