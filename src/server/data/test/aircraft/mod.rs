use crate::server::{data::aircraft::AircraftRepository, model::aircraft::Aircraft};
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_registry;
mod update;
