use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

use crate::location::{
    city_list, communes_in, quartiers_in, resolve_location, City, CityInfo, Commune,
    LocationError, Quartier,
};
use crate::record::{CityFilter, LocationRecord};
use crate::selection::{LocationField, SelectionState, SelectorView};

use super::state::AppState;

// ─── Error response ──────────────────────────────────────────────

#[derive(Serialize)]
struct ApiErrorBody {
    error: String,
    code: u16,
}

pub struct ApiError(StatusCode, String);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ApiErrorBody {
            error: self.1,
            code: self.0.as_u16(),
        };
        (self.0, Json(body)).into_response()
    }
}

impl From<LocationError> for ApiError {
    fn from(e: LocationError) -> Self {
        ApiError(StatusCode::UNPROCESSABLE_ENTITY, e.to_string())
    }
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

// ─── GET /api/cities ─────────────────────────────────────────────

pub async fn cities(State(state): State<Arc<AppState>>) -> Json<&'static [City]> {
    let start = Instant::now();
    info!("GET /api/cities -> {} ({:.1}ms)", state.cities.len(), elapsed_ms(start));
    Json(state.cities)
}

#[derive(Deserialize)]
pub struct ListQuery {
    pub city: Option<String>,
}

pub async fn city_summaries(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ListQuery>,
) -> Json<Vec<CityInfo>> {
    let start = Instant::now();
    let filter = CityFilter::parse(params.city.as_deref().unwrap_or(""));
    let list: Vec<CityInfo> = city_list(state.cities)
        .into_iter()
        .filter(|c| filter.matches_city(&c.name))
        .collect();

    info!(
        "GET /api/cities/list?city={} -> {} ({:.1}ms)",
        params.city.as_deref().unwrap_or("all"),
        list.len(),
        elapsed_ms(start),
    );
    Json(list)
}

// ─── GET /api/communes, /api/quartiers ───────────────────────────

#[derive(Deserialize)]
pub struct ChildrenQuery {
    pub city: Option<String>,
    pub commune: Option<String>,
}

pub async fn communes(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChildrenQuery>,
) -> Json<&'static [Commune]> {
    let start = Instant::now();
    let city = params.city.as_deref().unwrap_or("");
    let found = communes_in(state.cities, city);

    info!("GET /api/communes?city={} -> {} ({:.1}ms)", city, found.len(), elapsed_ms(start));
    Json(found)
}

pub async fn quartiers(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ChildrenQuery>,
) -> Json<&'static [Quartier]> {
    let start = Instant::now();
    let city = params.city.as_deref().unwrap_or("");
    let commune = params.commune.as_deref().unwrap_or("");
    let found = quartiers_in(state.cities, city, commune);

    info!(
        "GET /api/quartiers?city={}&commune={} -> {} ({:.1}ms)",
        city,
        commune,
        found.len(),
        elapsed_ms(start),
    );
    Json(found)
}

// ─── POST /api/selection ─────────────────────────────────────────

#[derive(Deserialize)]
pub struct SelectionRequest {
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub commune: String,
    #[serde(default)]
    pub quartier: String,
    pub field: LocationField,
    pub value: String,
    #[serde(default)]
    pub disabled: bool,
}

pub async fn selection(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectionRequest>,
) -> Json<SelectorView> {
    let start = Instant::now();
    let mut selection =
        SelectionState::restore(state.cities, &req.city, &req.commune, &req.quartier);
    selection.apply(req.field, &req.value);

    info!(
        "POST /api/selection {}={} -> ({}, {}, {}) ({:.1}ms)",
        req.field,
        req.value,
        selection.city(),
        selection.commune(),
        selection.quartier(),
        elapsed_ms(start),
    );
    Json(selection.view(req.disabled))
}

// ─── GET /api/check ──────────────────────────────────────────────

#[derive(Deserialize)]
pub struct CheckQuery {
    pub city: Option<String>,
    pub commune: Option<String>,
    pub quartier: Option<String>,
}

pub async fn check(
    State(state): State<Arc<AppState>>,
    Query(params): Query<CheckQuery>,
) -> Result<Json<LocationRecord>, ApiError> {
    let start = Instant::now();
    let city = params.city.as_deref().unwrap_or("");
    let commune = params.commune.as_deref().unwrap_or("");
    let quartier = params.quartier.as_deref().unwrap_or("");

    let result = resolve_location(state.cities, city, commune, quartier);
    match &result {
        Ok(rec) => info!(
            "GET /api/check -> {} ({:.1}ms)",
            rec.display_line(),
            elapsed_ms(start)
        ),
        Err(e) => info!("GET /api/check -> rejected: {} ({:.1}ms)", e, elapsed_ms(start)),
    }
    Ok(Json(result?))
}
