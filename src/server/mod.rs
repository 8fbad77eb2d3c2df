//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation for the game, including API
//! endpoints, the flight/aircraft domain model, data access, and background jobs. The backend
//! uses Axum as the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers and DTO extraction
//! - **Service Layer** (`service/`) - Loads relations, applies domain rules, persists results
//! - **Data Layer** (`data/`) - Database operations with optimistic concurrency on mutable entities
//! - **Model Layer** (`model/`) - Domain models: status derivation, fuel resolution, flight lifecycle
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, clock)
//! - **Startup** (`startup`) - Logger and database initialization
//! - **Router** (`router`) - Axum route configuration
//! - **Scheduler** (`scheduler/`) - Cron jobs removing expired jobs and notifications
//! - **Util** (`util/`) - Injectable clock
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Controller** extracts path/body, calls service
//! 3. **Service** loads entities and the relations a rule needs, converts them to domain models
//! 4. **Model** derives views or validates transitions without touching the database
//! 5. **Data** writes changed rows with a version compare-and-swap
//! 6. **Controller** returns the DTO built by the service

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
