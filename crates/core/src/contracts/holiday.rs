//! Holiday service collaborator contract.
//!
//! Tenants can add holidays on top of the national defaults (e.g. local
//! observances, movable feasts) or remove defaults that do not apply to
//! them.

use async_trait::async_trait;
use chrono::NaiveDate;
use kontabil_shared::types::TenantId;
use serde::{Deserialize, Serialize};

use super::error::ContractError;

/// A tenant-specific holiday override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HolidayOverride {
    /// The date being overridden.
    pub date: NaiveDate,
    /// True adds the date as a holiday; false removes a default.
    pub is_holiday: bool,
}

/// Read-only access to tenant holiday overrides.
#[async_trait]
pub trait HolidaySource: Send + Sync {
    /// Returns the overrides a tenant has configured for a year.
    async fn overrides_for_year(
        &self,
        tenant_id: TenantId,
        year: i32,
    ) -> Result<Vec<HolidayOverride>, ContractError>;
}
