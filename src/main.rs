use dioxus_logger::tracing;

use opensky::server::{
    config::Config, error::AppError, router, scheduler::cleanup, startup, state::AppState,
    util::clock::SystemClock,
};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    startup::init_logger(&config)?;

    let db = startup::connect_to_database(&config).await?;
    let clock = Arc::new(SystemClock);

    // Start expired job & notification cleanup
    let scheduler_db = db.clone();
    let scheduler_clock = clock.clone();
    let cleanup_schedule = config.cleanup_schedule.clone();
    tokio::spawn(async move {
        if let Err(e) =
            cleanup::start_scheduler(scheduler_db, scheduler_clock, &cleanup_schedule).await
        {
            tracing::error!("Cleanup scheduler error: {}", e);
        }
    });

    let app = router::router().with_state(AppState::new(db, clock));

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
