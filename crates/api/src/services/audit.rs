use teamwiki_core::types::DbId;
use teamwiki_db::models::audit::CreateAuditLog;
use teamwiki_db::repositories::AuditLogRepo;
use teamwiki_db::DbPool;

/// Append an audit entry, logging instead of propagating a failure.
pub async fn record(
    pool: &DbPool,
    actor_id: DbId,
    action: &'static str,
    entity_type: &'static str,
    entity_id: DbId,
    details: Option<String>,
) {
    let entry = CreateAuditLog {
        actor_id: Some(actor_id),
        action,
        entity_type,
        entity_id,
        details,
    };
    if let Err(e) = AuditLogRepo::create(pool, &entry).await {
        tracing::warn!(
            error = %e,
            action,
            entity_type,
            entity_id,
            "Failed to write audit entry"
        );
    }
}
