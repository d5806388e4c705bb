//! HTTP route handlers.

use axum::body::Bytes;
use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use tracing::{error, info, warn};

use crate::catalog::{CatalogError, StationCatalog};
use crate::domain::{GeoPoint, InvalidGeoPoint};
use crate::planner::{PlanError, plan_trip};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/fuel/plan", post(plan_fuel))
        .route("/stations/nearest", get(nearest_station))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Plan fuel stops along a supplied route.
async fn plan_fuel(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PlanFuelResponse>, AppError> {
    // Parse JSON manually so we can log the body on failure
    let req: PlanFuelRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!(error = %e, body = %String::from_utf8_lossy(&body), "invalid plan request");
        AppError::BadRequest {
            message: format!("Invalid JSON: {e}"),
        }
    })?;

    let route = req
        .route
        .iter()
        .map(|&pair| req.axis_order.point(pair))
        .collect::<Result<Vec<_>, _>>()?;

    let catalog = state.catalog.snapshot().await;

    match plan_trip(&route, &state.vehicle, catalog.as_ref()) {
        Ok(result) => {
            info!(
                waypoints = route.len(),
                stops = result.stops.len(),
                total_cost = result.total_cost,
                "fuel plan served"
            );
            Ok(Json(PlanFuelResponse::from_plan(&result)))
        }
        Err(e) if e.is_infeasible() => {
            warn!(error = %e, waypoints = route.len(), "route infeasible");
            Ok(Json(PlanFuelResponse::infeasible(e.to_string())))
        }
        Err(e) => Err(e.into()),
    }
}

/// Look up the nearest station to a point.
async fn nearest_station(
    State(state): State<AppState>,
    Query(req): Query<NearestStationRequest>,
) -> Result<Json<NearestStationResponse>, AppError> {
    let location = GeoPoint::new(req.lat, req.lon)?;
    let radius = req
        .radius
        .unwrap_or_else(|| state.vehicle.max_range_miles());

    let catalog = state.catalog.snapshot().await;
    let nearest = catalog
        .find_nearest(&location, radius)?
        .ok_or_else(|| AppError::NotFound {
            message: format!("No station within {radius} miles of {location}"),
        })?;

    Ok(Json(NearestStationResponse {
        station: StationResult::from_station(&nearest.station),
        distance_miles: nearest.distance_miles,
    }))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<InvalidGeoPoint> for AppError {
    fn from(e: InvalidGeoPoint) -> Self {
        AppError::BadRequest {
            message: e.to_string(),
        }
    }
}

impl From<CatalogError> for AppError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::InvalidRadius(_) => AppError::BadRequest {
                message: e.to_string(),
            },
            CatalogError::Unavailable { .. } => AppError::Internal {
                message: e.to_string(),
            },
        }
    }
}

impl From<PlanError> for AppError {
    fn from(e: PlanError) -> Self {
        match e {
            PlanError::InvalidInput(message) => AppError::BadRequest { message },
            PlanError::Catalog(inner) => inner.into(),
            PlanError::NoStationInRange { .. } => AppError::NotFound {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
