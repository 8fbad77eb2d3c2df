use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::job::CreateJobDto,
    server::{error::AppError, service::job::JobService, state::AppState},
};

/// POST /api/jobs
/// Create a job with its payloads waiting at the origin
pub async fn create_job(
    State(state): State<AppState>,
    Json(payload): Json<CreateJobDto>,
) -> Result<impl IntoResponse, AppError> {
    let job = JobService::new(&state.db, state.clock.as_ref())
        .create(payload)
        .await?;

    Ok((StatusCode::CREATED, Json(job)))
}

/// GET /api/airports/{icao}/jobs
/// Unexpired jobs offered at an airport
pub async fn get_airport_jobs(
    State(state): State<AppState>,
    Path(icao): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let jobs = JobService::new(&state.db, state.clock.as_ref())
        .get_available_at_airport(&icao)
        .await?;

    Ok((StatusCode::OK, Json(jobs)))
}
