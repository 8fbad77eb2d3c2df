use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{error::AppError, service::cleanup::CleanupService, util::clock::Clock};

/// Starts the expired data cleanup scheduler
///
/// Each run deletes expired jobs with the payloads still waiting at an airport, and
/// notifications that are marked for deletion or expired.
///
/// # Arguments
/// - `db`: Database connection
/// - `clock`: Source of the current time for expiry checks
/// - `schedule`: Cron expression with a seconds field, e.g. `0 */5 * * * *`
pub async fn start_scheduler(
    db: DatabaseConnection,
    clock: Arc<dyn Clock>,
    schedule: &str,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(schedule, move |_uuid, _lock| {
        let db = db.clone();
        let clock = clock.clone();

        Box::pin(async move {
            if let Err(e) = CleanupService::new(&db, clock.as_ref())
                .purge_expired()
                .await
            {
                tracing::error!("Error purging expired data: {}", e);
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Cleanup scheduler started with schedule {}", schedule);

    Ok(())
}
