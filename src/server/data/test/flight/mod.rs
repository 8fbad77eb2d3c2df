use crate::server::{
    data::flight::FlightRepository,
    model::{
        flight::{CreateFlightParams, Flight},
        operator::Operator,
    },
};
use chrono::Utc;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_by_aircraft;
mod update;
