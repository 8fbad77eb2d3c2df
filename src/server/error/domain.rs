use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use dioxus_logger::tracing;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::model::flight::{FlightAction, FlightState},
};

/// Violations of the flight/aircraft domain rules.
///
/// Variants fall in two groups. Invariant breaches (`RelationNotLoaded`,
/// `MultipleActiveFlights`, operator/owner/payload exclusivity) mean stored data or calling
/// code is wrong; they are logged at error level and surface as 500. Rejected transitions
/// are ordinary client mistakes and map to 4xx responses.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A relation required by a derivation was not fetched before the call.
    #[error("Relation {0} was not loaded")]
    RelationNotLoaded(&'static str),

    /// More than one started, uncompleted flight references the same aircraft.
    #[error("Aircraft {registry} has multiple active flights: {flight_ids:?}")]
    MultipleActiveFlights {
        /// Registry of the affected aircraft
        registry: String,
        /// IDs of every active flight found
        flight_ids: Vec<i32>,
    },

    /// Transition attempted on a flight that has already completed.
    #[error("Flight {0} is already completed")]
    FlightAlreadyCompleted(i32),

    /// Transition not allowed from the flight's current state.
    #[error("Cannot {action} flight {flight_id} while it is {state}")]
    InvalidTransition {
        flight_id: i32,
        state: FlightState,
        action: FlightAction,
    },

    /// Neither a user nor an airline operator is set.
    #[error("No operator assigned")]
    NoOperatorAssigned,

    /// Both a user and an airline operator are set.
    #[error("Both a user and an airline operator are assigned")]
    DualOperatorAssigned,

    /// Aircraft has both a user and an airline owner.
    #[error("Aircraft {0} has both a user and an airline owner")]
    DualOwnerAssigned(String),

    /// Payload is at an airport and aboard an aircraft at once, or nowhere.
    #[error("Payload {0} must be located at exactly one airport or aircraft")]
    InvalidPayloadLocation(i32),

    /// Setting the link would make an aircraft type reachable from itself.
    #[error("Linking aircraft type {type_id} to {target_id} would create a cycle")]
    CyclicTypeRelation { type_id: i32, target_id: i32 },

    #[error("Aircraft type {0} not found")]
    AircraftTypeNotFound(i32),

    /// Aircraft is already flying another flight.
    #[error("Aircraft {registry} already has active flight {flight_id}")]
    AircraftHasActiveFlight { registry: String, flight_id: i32 },

    /// Aircraft is being fast-forwarded and cannot be used.
    #[error("Aircraft {0} is currently warping")]
    AircraftWarping(String),

    /// Payload is neither waiting at the flight's origin nor aboard its aircraft.
    #[error("Payload {payload_id} is not at the origin or aboard the aircraft of flight {flight_id}")]
    PayloadNotAvailable { payload_id: i32, flight_id: i32 },

    /// Payload already belongs to the plan of another uncompleted flight.
    #[error("Payload {payload_id} is already planned on flight {flight_id}")]
    PayloadAlreadyPlanned { payload_id: i32, flight_id: i32 },

    /// Flight has no aircraft assigned.
    #[error("Flight {0} has no aircraft assigned")]
    NoAircraftAssigned(i32),
}

impl DomainError {
    /// Whether the error indicates corrupt data or a programming mistake rather than a
    /// rejected request.
    pub fn is_invariant_breach(&self) -> bool {
        matches!(
            self,
            Self::RelationNotLoaded(_)
                | Self::MultipleActiveFlights { .. }
                | Self::NoOperatorAssigned
                | Self::DualOperatorAssigned
                | Self::DualOwnerAssigned(_)
                | Self::InvalidPayloadLocation(_)
        )
    }
}

/// Converts domain errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - Cyclic aircraft type link
/// - 404 Not Found - Unknown aircraft type referenced by a link
/// - 409 Conflict - Transition rejected by the flight or aircraft state
/// - 500 Internal Server Error - Invariant breaches, logged at error level
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        if self.is_invariant_breach() {
            tracing::error!("Domain invariant violated: {}", self);

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorDto {
                    error: "Internal server error".to_string(),
                }),
            )
                .into_response();
        }

        let status = match self {
            Self::CyclicTypeRelation { .. } => StatusCode::BAD_REQUEST,
            Self::AircraftTypeNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::CONFLICT,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
