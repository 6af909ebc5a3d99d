use teamwiki_core::roles::EDITOR_ROLES;
use teamwiki_db::repositories::{NotificationRepo, UserRepo};
use teamwiki_db::DbPool;

/// Send `message` as an unread notification to every `ADMIN` and `EDITOR`.
///
/// Returns how many notifications were inserted; 0 when there are no
/// recipients or the insert failed.
pub async fn notify_editors(pool: &DbPool, message: &str) -> u64 {
    match try_notify_editors(pool, message).await {
        Ok(count) => {
            tracing::debug!(recipients = count, "Editors notified");
            count
        }
        Err(e) => {
            tracing::warn!(error = %e, message, "Failed to broadcast notification");
            0
        }
    }
}

async fn try_notify_editors(pool: &DbPool, message: &str) -> Result<u64, sqlx::Error> {
    let recipients = UserRepo::list_ids_by_roles(pool, EDITOR_ROLES).await?;
    NotificationRepo::create_many(pool, &recipients, message).await
}
