//! Audit log collaborator contract.
//!
//! Fire-and-forget: implementations catch and log their own failures;
//! callers never see an error and never block on delivery.

use async_trait::async_trait;
use kontabil_shared::types::TenantId;
use serde::{Deserialize, Serialize};

/// Severity of an audit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditSeverity {
    /// Routine operation.
    Info,
    /// Unusual but handled.
    Warning,
    /// Requires operator attention.
    Critical,
}

/// An audit event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEvent {
    /// The tenant the event belongs to.
    pub tenant_id: TenantId,
    /// Action performed, e.g. `filing.marked_as_filed`.
    pub action: String,
    /// The affected entity's identifier.
    pub entity_id: String,
    /// Structured event details.
    pub metadata: serde_json::Value,
    /// Severity.
    pub severity: AuditSeverity,
}

/// Fire-and-forget audit logging.
#[async_trait]
pub trait AuditLog: Send + Sync {
    /// Records an audit event. Must not fail from the caller's point of
    /// view: delivery problems are the implementation's to swallow and
    /// surface through telemetry.
    async fn log(&self, event: AuditEvent);
}
