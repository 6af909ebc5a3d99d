//! Audit log model.

use serde::Serialize;
use sqlx::FromRow;
use teamwiki_core::types::{DbId, Timestamp};

/// A row from the append-only `audit_logs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLog {
    pub id: DbId,
    pub actor_id: Option<DbId>,
    pub action: String,
    pub entity_type: String,
    pub entity_id: DbId,
    pub details: Option<String>,
    pub created_at: Timestamp,
}

/// Insert DTO for an audit entry.
#[derive(Debug, Clone)]
pub struct CreateAuditLog {
    pub actor_id: Option<DbId>,
    pub action: &'static str,
    pub entity_type: &'static str,
    pub entity_id: DbId,
    pub details: Option<String>,
}
