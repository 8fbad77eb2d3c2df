use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::flight::{CompleteFlightDto, CreateFlightDto, PositionReportDto, StartFlightDto},
    server::{error::AppError, service::flight::FlightService, state::AppState},
};

/// POST /api/flights
/// Create a flight plan
pub async fn create_flight(
    State(state): State<AppState>,
    Json(payload): Json<CreateFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db, state.clock.as_ref())
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(flight)))
}

/// GET /api/flights/{id}
pub async fn get_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db, state.clock.as_ref())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Flight {} not found", id)))?;

    Ok((StatusCode::OK, Json(flight)))
}

/// POST /api/flights/{id}/start
/// Start a planned flight
///
/// A blocked start is not an error: the response carries the blocking status and a message,
/// and the client may retry with that status in `overrides`.
pub async fn start_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<StartFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let result = FlightService::new(&state.db, state.clock.as_ref())
        .start(id, &payload.overrides)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// POST /api/flights/{id}/pause
pub async fn pause_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db, state.clock.as_ref())
        .pause(id)
        .await?;

    Ok((StatusCode::OK, Json(flight)))
}

/// POST /api/flights/{id}/resume
pub async fn resume_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db, state.clock.as_ref())
        .resume(id)
        .await?;

    Ok((StatusCode::OK, Json(flight)))
}

/// POST /api/flights/{id}/complete
/// Complete a flight at its destination or the given landing airport
pub async fn complete_flight(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<CompleteFlightDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db, state.clock.as_ref())
        .complete(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(flight)))
}

/// POST /api/flights/{id}/position
pub async fn report_position(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<PositionReportDto>,
) -> Result<impl IntoResponse, AppError> {
    let flight = FlightService::new(&state.db, state.clock.as_ref())
        .report_position(id, payload)
        .await?;

    Ok((StatusCode::OK, Json(flight)))
}

/// GET /api/flights/{id}/payloads
/// Payloads in the flight plan
pub async fn get_planned_payloads(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let payloads = FlightService::new(&state.db, state.clock.as_ref())
        .get_planned_payloads(id)
        .await?;

    Ok((StatusCode::OK, Json(payloads)))
}

/// PUT /api/flights/{id}/payloads/{payload_id}
/// Add a payload to the plan of a flight that has not started
pub async fn add_payload(
    State(state): State<AppState>,
    Path((id, payload_id)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let payloads = FlightService::new(&state.db, state.clock.as_ref())
        .add_payload(id, payload_id)
        .await?;

    Ok((StatusCode::OK, Json(payloads)))
}
