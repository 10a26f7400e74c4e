//! HTTP route handlers for the admin fare-rates API.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};
use tower_http::trace::TraceLayer;

use crate::domain::{
    FareRow, FareRuleRow, InvalidRow, PrivateFareSettings, PrivateFuelPriceOption,
    PrivateVehicleFuelSetting, RailLine, UnknownLine,
};
use crate::fares::{self, InvalidFormula};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/admin/fare-rates", get(get_fare_rates))
        .route("/admin/fare-rates/public", put(update_public))
        .route("/admin/fare-rates/public-all", put(update_public_all))
        .route("/admin/fare-rates/public-generate", post(generate_public))
        .route("/admin/fare-rates/rail-generate", post(generate_rail))
        .route("/admin/fare-rates/private", put(update_private))
        .route(
            "/admin/fare-rates/private-vehicles",
            get(get_vehicle_settings).put(update_vehicle_settings),
        )
        .route(
            "/admin/fare-rates/private-fuel-prices",
            get(get_fuel_prices).put(update_fuel_prices),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Full fare-rates snapshot.
async fn get_fare_rates(State(state): State<AppState>) -> Json<FareRatesResponse> {
    Json(state.store.snapshot().await.into())
}

/// Replace the public road-transit table.
async fn update_public(
    State(state): State<AppState>,
    Json(req): Json<UpdatePublicRequest>,
) -> Result<Json<Vec<FareRow>>, AppError> {
    let rows = state.store.replace_public(req.rows).await?;
    Ok(Json(rows))
}

/// Replace the public table and the rail fare rules atomically.
async fn update_public_all(
    State(state): State<AppState>,
    Json(req): Json<UpdatePublicAllRequest>,
) -> Result<Json<FareRatesResponse>, AppError> {
    let tables = state
        .store
        .replace_public_all(req.public_mode_fares, req.fare_rules)
        .await?;
    Ok(Json(tables.into()))
}

/// Generate road-transit fare previews without touching the store.
async fn generate_public(
    Json(req): Json<GenerateRequest>,
) -> Result<Json<Vec<FareRow>>, AppError> {
    let mut formulas = Vec::with_capacity(req.formulas.len());
    for dto in req.formulas {
        formulas.push(dto.into_formula()?);
    }

    let rows = fares::generate_all(&formulas)?;
    Ok(Json(rows))
}

/// Recompute one line's stored fare rules against a formula.
///
/// Preview only: rows whose stations cannot be resolved come back with
/// their stored fare unchanged, and nothing is written.
async fn generate_rail(
    State(state): State<AppState>,
    Json(req): Json<RailGenerateRequest>,
) -> Result<Json<Vec<FareRuleRow>>, AppError> {
    let line = RailLine::parse(&req.line)?;
    req.formula.validate(line)?;

    let tables = state.store.snapshot().await;
    let preview = fares::rail_preview(
        &state.aliases,
        &state.distances,
        line,
        &req.formula,
        &tables.fare_rules,
    );
    Ok(Json(preview))
}

/// Replace the private-transport base pricing.
async fn update_private(
    State(state): State<AppState>,
    Json(settings): Json<PrivateFareSettings>,
) -> Result<Json<PrivateFareSettings>, AppError> {
    let stored = state.store.replace_private_settings(settings).await?;
    Ok(Json(stored))
}

/// The per-vehicle-type fuel settings.
async fn get_vehicle_settings(
    State(state): State<AppState>,
) -> Json<Vec<PrivateVehicleFuelSetting>> {
    Json(state.store.vehicle_settings().await)
}

/// Replace the per-vehicle-type fuel settings.
async fn update_vehicle_settings(
    State(state): State<AppState>,
    Json(req): Json<UpdateVehicleSettingsRequest>,
) -> Result<Json<Vec<PrivateVehicleFuelSetting>>, AppError> {
    let rows = state.store.replace_vehicle_settings(req.rows).await?;
    Ok(Json(rows))
}

/// The selectable fuel price options.
async fn get_fuel_prices(State(state): State<AppState>) -> Json<Vec<PrivateFuelPriceOption>> {
    Json(state.store.fuel_prices().await)
}

/// Replace the fuel price options.
async fn update_fuel_prices(
    State(state): State<AppState>,
    Json(req): Json<UpdateFuelPricesRequest>,
) -> Result<Json<Vec<PrivateFuelPriceOption>>, AppError> {
    let rows = state.store.replace_fuel_prices(req.rows).await?;
    Ok(Json(rows))
}

/// Application error type.
///
/// Every failure the handlers can produce is a validation problem with the
/// submitted data; nothing here is retryable.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
}

impl From<InvalidRow> for AppError {
    fn from(e: InvalidRow) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<InvalidFormula> for AppError {
    fn from(e: InvalidFormula) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<UnknownLine> for AppError {
    fn from(e: UnknownLine) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
        };

        tracing::warn!(%status, %message, "request rejected");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
