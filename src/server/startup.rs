use dioxus_logger::tracing::{self, Level};
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, EntityTrait, Schema,
};
use std::str::FromStr;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
};

/// Initializes the global tracing subscriber at the configured log level.
///
/// # Arguments
/// - `config` - Application configuration containing the log level
///
/// # Returns
/// - `Ok(())` - Logger installed
/// - `Err(AppError::ConfigErr)` - `LOG_LEVEL` is not a valid tracing level
/// - `Err(AppError::InternalError)` - A global subscriber was already installed
pub fn init_logger(config: &Config) -> Result<(), AppError> {
    let level = Level::from_str(&config.log_level).map_err(|_| ConfigError::InvalidEnvVar {
        name: "LOG_LEVEL".to_string(),
        value: config.log_level.clone(),
    })?;

    dioxus_logger::init(level).map_err(|e| AppError::InternalError(e.to_string()))?;

    Ok(())
}

/// Connects to the Sqlite database and creates any missing tables.
///
/// Establishes a connection pool using the connection string from configuration, then
/// creates every entity table that does not exist yet. Tables are generated from the entity
/// definitions, so the schema always matches the `entity` crate.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with all tables present
/// - `Err(AppError::DbErr)` - Failed to connect to database or create tables
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    create_tables(&db).await?;

    tracing::info!("Connected to database");

    Ok(db)
}

/// Creates all entity tables in dependency order, skipping existing ones.
pub async fn create_tables<C: ConnectionTrait>(db: &C) -> Result<(), AppError> {
    use entity::prelude::*;

    create_table(db, Airline).await?;
    create_table(db, User).await?;
    create_table(db, Airport).await?;
    create_table(db, Runway).await?;
    create_table(db, Approach).await?;
    create_table(db, AircraftType).await?;
    create_table(db, Aircraft).await?;
    create_table(db, Flight).await?;
    create_table(db, Job).await?;
    create_table(db, Payload).await?;
    create_table(db, FlightPayload).await?;
    create_table(db, Notification).await?;

    Ok(())
}

async fn create_table<C: ConnectionTrait, E: EntityTrait>(db: &C, entity: E) -> Result<(), AppError> {
    let schema = Schema::new(db.get_database_backend());

    let mut stmt = schema.create_table_from_entity(entity);
    stmt.if_not_exists();

    db.execute(&stmt).await?;

    Ok(())
}
