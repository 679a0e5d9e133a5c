//! REST surface of the form engine.
//!
//! Both endpoints are stateless: they evaluate the submitted form values and
//! return the result, leaving event ordering to the caller.

use crate::area::{AreaSheet, AreaUnit, UnitGroup};
use crate::fields::ControllerState;
use crate::rules::{VisibilityMap, compute_visibility};
use axum::Json;
use phub_derive::{api_handler, api_model};
use phub_domain::constants::FORM_TAG;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub fn router<S>() -> OpenApiRouter<S>
where
    S: Send + Sync + Clone + 'static,
{
    OpenApiRouter::<S>::new()
        .routes(routes!(layout_handler))
        .routes(routes!(land_area_handler))
}

#[api_model]
/// Controller values of an open admin form
struct LayoutRequest {
    /// Raw value of the listing-purpose dropdown
    #[serde(default)]
    purpose: Option<String>,
    /// Raw value of the property-type dropdown
    #[serde(default)]
    property_type: Option<String>,
}

#[api_model]
/// Visibility of every controlled form field
struct LayoutResponse {
    /// Field name to visibility
    #[schema(value_type = std::collections::BTreeMap<String, bool>)]
    fields: VisibilityMap,
}

#[api_handler(
    post,
    path = "/form/layout",
    request_body = LayoutRequest,
    responses((status = OK, description = "Visibility map for the controller pair", body = LayoutResponse)),
    tag = FORM_TAG,
)]
async fn layout_handler(Json(request): Json<LayoutRequest>) -> Json<LayoutResponse> {
    let state = ControllerState::from_codes(
        request.purpose.as_deref().unwrap_or_default(),
        request.property_type.as_deref().unwrap_or_default(),
    );

    Json(LayoutResponse { fields: compute_visibility(state) })
}

#[api_model]
/// Raw values of the seven land-size inputs
struct AreaRequest {
    #[serde(default)]
    ropani: Option<String>,
    #[serde(default)]
    aana: Option<String>,
    #[serde(default)]
    paisa: Option<String>,
    #[serde(default)]
    dam: Option<String>,
    #[serde(default)]
    bigha: Option<String>,
    #[serde(default)]
    katha: Option<String>,
    #[serde(default)]
    dhur: Option<String>,
}

#[api_model]
/// Computed land-area total
struct AreaResponse {
    /// Total area in square feet, formatted with two decimals
    total: String,
    /// Unit system the total was computed from
    #[schema(value_type = String)]
    active_group: UnitGroup,
    /// Unit fields wiped to keep the two systems mutually exclusive
    #[serde(skip_deserializing)]
    cleared: Vec<&'static str>,
}

#[api_handler(
    post,
    path = "/form/land-area",
    request_body = AreaRequest,
    responses((status = OK, description = "Square-feet total of the active unit group", body = AreaResponse)),
    tag = FORM_TAG,
)]
async fn land_area_handler(Json(request): Json<AreaRequest>) -> Json<AreaResponse> {
    // Terai first, hilly second: when both systems carry values the hilly
    // group claims the sheet, matching the calculator's active-group rule.
    let submitted = [
        (AreaUnit::Bigha, request.bigha),
        (AreaUnit::Katha, request.katha),
        (AreaUnit::Dhur, request.dhur),
        (AreaUnit::Ropani, request.ropani),
        (AreaUnit::Aana, request.aana),
        (AreaUnit::Paisa, request.paisa),
        (AreaUnit::Dam, request.dam),
    ];

    let mut sheet = AreaSheet::new();
    for (unit, value) in &submitted {
        if let Some(value) = value {
            sheet.record(*unit, value.clone());
        }
    }

    let cleared = submitted
        .iter()
        .filter(|(unit, value)| {
            value.as_deref().is_some_and(|v| !v.trim().is_empty())
                && sheet.value(*unit).trim().is_empty()
        })
        .map(|(unit, _)| unit.name())
        .collect();

    Json(AreaResponse {
        total: sheet.formatted_total(),
        active_group: sheet.active_group(),
        cleared,
    })
}
