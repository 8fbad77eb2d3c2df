use dioxus_logger::tracing;
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    data::{job::JobRepository, notification::NotificationRepository, payload::PayloadRepository},
    error::AppError,
    util::clock::Clock,
};

/// Rows removed by one cleanup run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanupSummary {
    pub jobs: u64,
    pub payloads: u64,
    pub notifications: u64,
}

pub struct CleanupService<'a> {
    db: &'a DatabaseConnection,
    clock: &'a dyn Clock,
}

impl<'a> CleanupService<'a> {
    pub fn new(db: &'a DatabaseConnection, clock: &'a dyn Clock) -> Self {
        Self { db, clock }
    }

    /// Deletes expired jobs and stale notifications.
    ///
    /// Payloads of an expired job that are still waiting at an airport are deleted with the
    /// job. Payloads already aboard an aircraft are kept and unlinked from the job.
    ///
    /// # Returns
    /// - `Ok(CleanupSummary)` - Counts of deleted rows
    /// - `Err(AppError)` - Database error, nothing was deleted
    pub async fn purge_expired(&self) -> Result<CleanupSummary, AppError> {
        let now = self.clock.now();
        let txn = self.db.begin().await?;

        let job_repo = JobRepository::new(&txn);
        let payload_repo = PayloadRepository::new(&txn);

        let expired = job_repo.get_expired_ids(now).await?;
        let mut summary = CleanupSummary::default();

        if !expired.is_empty() {
            payload_repo.detach_aboard_from_jobs(&expired).await?;
            summary.payloads = payload_repo
                .delete_grounded_for_jobs(&expired)
                .await?
                .rows_affected;
            summary.jobs = job_repo.delete_by_ids(&expired).await?.rows_affected;
        }

        summary.notifications = NotificationRepository::new(&txn)
            .delete_stale(now)
            .await?
            .rows_affected;

        txn.commit().await?;

        if summary != CleanupSummary::default() {
            tracing::info!(
                "Cleanup removed {} jobs, {} payloads and {} notifications",
                summary.jobs,
                summary.payloads,
                summary.notifications
            );
        }

        Ok(summary)
    }
}
