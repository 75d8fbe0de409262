use dioxus_logger::tracing;
use tokio_cron_scheduler::{Job, JobScheduler};
use tower_sessions::ExpiredDeletion;
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::error::AppError;

/// Top of every hour.
const CLEANUP_SCHEDULE: &str = "0 0 * * * *";

/// Starts the job deleting expired sessions from the store.
///
/// The scheduler runs in the background after this returns.
pub async fn start_scheduler(store: SqliteStore) -> Result<JobScheduler, AppError> {
    let scheduler = JobScheduler::new().await?;

    let job = Job::new_async(CLEANUP_SCHEDULE, move |_uuid, _lock| {
        let store = store.clone();

        Box::pin(async move {
            if let Err(e) = store.delete_expired().await {
                tracing::error!("Error deleting expired sessions: {}", e);
            } else {
                tracing::debug!("Expired sessions deleted");
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Session cleanup scheduler started");

    Ok(scheduler)
}
