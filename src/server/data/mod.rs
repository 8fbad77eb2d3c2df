//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for each domain in
//! the application. Repositories use SeaORM entity models internally and are generic over
//! [`sea_orm::ConnectionTrait`] so the same code runs against the connection pool or inside a
//! transaction.
//!
//! Every mutable entity carries a `version` column. Updates are compare-and-swap on that
//! column and fail with [`sea_orm::DbErr::RecordNotUpdated`] when another writer got there
//! first.

pub mod aircraft;
pub mod aircraft_type;
pub mod airline;
pub mod airport;
pub mod flight;
pub mod job;
pub mod notification;
pub mod payload;
pub mod user;

#[cfg(test)]
mod test;
