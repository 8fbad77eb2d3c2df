use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::notification::CreateNotificationDto,
    server::{error::AppError, service::notification::NotificationService, state::AppState},
};

/// GET /api/users/{id}/notifications
/// Deliver pending notifications and mark them picked up
pub async fn pick_up_notifications(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let notifications = NotificationService::new(&state.db, state.clock.as_ref())
        .pick_up(user_id)
        .await?;

    Ok((StatusCode::OK, Json(notifications)))
}

/// POST /api/users/{id}/notifications
pub async fn create_notification(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
    Json(payload): Json<CreateNotificationDto>,
) -> Result<impl IntoResponse, AppError> {
    let notification = NotificationService::new(&state.db, state.clock.as_ref())
        .create(user_id, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(notification)))
}
