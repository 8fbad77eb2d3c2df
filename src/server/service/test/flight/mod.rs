use crate::{
    model::flight::{CompleteFlightDto, PositionReportDto, StartFlightStatus},
    server::{
        error::{domain::DomainError, AppError},
        service::flight::FlightService,
        util::clock::FixedClock,
    },
};
use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod complete;
mod start;
mod transitions;
