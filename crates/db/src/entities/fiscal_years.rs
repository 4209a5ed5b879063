//! Fiscal year entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::sea_orm_active_enums::FiscalYearStatus;

/// A tenant's fiscal year (calendar-aligned).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "fiscal_years")]
pub struct Model {
    /// Unique identifier.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    /// Owning tenant.
    pub tenant_id: Uuid,
    /// Calendar year, unique per tenant.
    pub year: i32,
    /// Current status.
    pub status: FiscalYearStatus,
    /// Whether opening balances have been posted.
    pub opening_balances_posted: bool,
    /// The opening balance entry, once posted.
    pub opening_balance_entry_id: Option<Uuid>,
    /// Creation timestamp.
    pub created_at: DateTimeWithTimeZone,
    /// Last update timestamp.
    pub updated_at: DateTimeWithTimeZone,
}

/// Entity relations.
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
