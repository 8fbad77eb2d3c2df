use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};

use crate::server::{
    controller::{
        aircraft::{get_aircraft, start_warp},
        aircraft_type::{get_aircraft_type, get_upgrade_path, set_next_version, set_variant_of},
        flight::{
            add_payload, complete_flight, create_flight, get_flight, get_planned_payloads,
            pause_flight, report_position, resume_flight, start_flight,
        },
        job::{create_job, get_airport_jobs},
        notification::{create_notification, pick_up_notifications},
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/aircraft/{registry}", get(get_aircraft))
        .route("/api/aircraft/{registry}/warp", post(start_warp))
        .route("/api/aircraft-types/{id}", get(get_aircraft_type))
        .route("/api/aircraft-types/{id}/upgrade-path", get(get_upgrade_path))
        .route("/api/aircraft-types/{id}/variant-of", put(set_variant_of))
        .route("/api/aircraft-types/{id}/next-version", put(set_next_version))
        .route("/api/flights", post(create_flight))
        .route("/api/flights/{id}", get(get_flight))
        .route("/api/flights/{id}/start", post(start_flight))
        .route("/api/flights/{id}/pause", post(pause_flight))
        .route("/api/flights/{id}/resume", post(resume_flight))
        .route("/api/flights/{id}/complete", post(complete_flight))
        .route("/api/flights/{id}/position", post(report_position))
        .route("/api/flights/{id}/payloads", get(get_planned_payloads))
        .route("/api/flights/{id}/payloads/{payload_id}", put(add_payload))
        .route("/api/jobs", post(create_job))
        .route("/api/airports/{icao}/jobs", get(get_airport_jobs))
        .route(
            "/api/users/{id}/notifications",
            get(pick_up_notifications).post(create_notification),
        )
        .layer(cors)
}
