use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::aircraft::StartWarpDto,
    server::{error::AppError, service::aircraft::AircraftService, state::AppState},
};

/// GET /api/aircraft/{registry}
/// Get an aircraft with its derived status, fuel model and owner name
pub async fn get_aircraft(
    State(state): State<AppState>,
    Path(registry): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftService::new(&state.db, state.clock.as_ref())
        .get_by_registry(&registry)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Aircraft {} not found", registry)))?;

    Ok((StatusCode::OK, Json(aircraft)))
}

/// POST /api/aircraft/{registry}/warp
/// Fast-forward an idle aircraft
pub async fn start_warp(
    State(state): State<AppState>,
    Path(registry): Path<String>,
    Json(payload): Json<StartWarpDto>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft = AircraftService::new(&state.db, state.clock.as_ref())
        .start_warp(&registry, payload.duration_seconds)
        .await?;

    Ok((StatusCode::OK, Json(aircraft)))
}
