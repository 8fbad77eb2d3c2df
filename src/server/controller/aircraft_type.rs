use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::aircraft_type::{SetNextVersionDto, SetVariantOfDto},
    server::{error::AppError, service::aircraft_type::AircraftTypeService, state::AppState},
};

/// GET /api/aircraft-types/{id}
pub async fn get_aircraft_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft_type = AircraftTypeService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Aircraft type {} not found", id)))?;

    Ok((StatusCode::OK, Json(aircraft_type)))
}

/// GET /api/aircraft-types/{id}/upgrade-path
/// Newer versions of the type, oldest first
pub async fn get_upgrade_path(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let path = AircraftTypeService::new(&state.db)
        .upgrade_path(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Aircraft type {} not found", id)))?;

    Ok((StatusCode::OK, Json(path)))
}

/// PUT /api/aircraft-types/{id}/variant-of
pub async fn set_variant_of(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SetVariantOfDto>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft_type = AircraftTypeService::new(&state.db)
        .set_variant_of(id, payload.is_variant_of)
        .await?;

    Ok((StatusCode::OK, Json(aircraft_type)))
}

/// PUT /api/aircraft-types/{id}/next-version
pub async fn set_next_version(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SetNextVersionDto>,
) -> Result<impl IntoResponse, AppError> {
    let aircraft_type = AircraftTypeService::new(&state.db)
        .set_next_version(id, payload.next_version)
        .await?;

    Ok((StatusCode::OK, Json(aircraft_type)))
}
